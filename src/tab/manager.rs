//! Tab manager coordinating the ordered tab sequence and active selection.

use super::Tab;

/// Owns the ordered sequence of open tabs and the active-tab pointer.
///
/// Every operation is a total transition over `(tabs, active_tab_id)`:
/// nothing here returns an error or panics on well-formed *or* malformed
/// input. Unknown ids and out-of-range indices degrade to no-ops so a bad
/// call from the UI layer can never crash the event loop.
///
/// Invariant: a non-`None` active id always names a tab currently in
/// `tabs`. `open` and `close` re-establish it after every mutation;
/// `set_active` refuses ids that would break it.
#[derive(Debug, Clone, Default)]
pub struct TabManager {
    /// All tabs, in display order.
    tabs: Vec<Tab>,
    /// Currently active tab ID.
    active_tab_id: Option<String>,
}

impl TabManager {
    /// Create a new empty tab manager.
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    /// Open a tab and make it active.
    ///
    /// The tab is inserted immediately after the current active tab so new
    /// tabs appear adjacent to the one the user was looking at. With no
    /// active tab (or an active id that is somehow missing) it goes to the
    /// end. Duplicate ids are the caller's contract to avoid; the manager
    /// does not deduplicate.
    pub fn open(&mut self, tab: Tab) {
        let insert_index = self
            .active_tab_index()
            .map(|idx| idx + 1)
            .unwrap_or(self.tabs.len());

        let id = tab.id.clone();
        self.tabs.insert(insert_index, tab);
        self.active_tab_id = Some(id);

        log::info!(
            "Opened tab '{}' at index {} (total: {})",
            self.active_tab_id.as_deref().unwrap_or_default(),
            insert_index,
            self.tabs.len()
        );
    }

    /// Close a tab by id. Returns true if a tab was removed.
    ///
    /// Unknown ids are a no-op. If the closed tab was active, the new
    /// active tab is chosen by precedence: the tab now occupying the
    /// closed tab's former index (its right neighbour), else the tab
    /// before that index, else `None` when the sequence is empty. Closing
    /// an inactive tab leaves the active id untouched.
    pub fn close(&mut self, id: &str) -> bool {
        let Some(idx) = self.tabs.iter().position(|t| t.id == id) else {
            return false;
        };

        log::info!("Closing tab '{}' (index {})", id, idx);
        self.tabs.remove(idx);

        if self.active_tab_id.as_deref() == Some(id) {
            self.active_tab_id = self
                .tabs
                .get(idx)
                .or_else(|| idx.checked_sub(1).and_then(|i| self.tabs.get(i)))
                .map(|t| t.id.clone());
        }

        true
    }

    /// Switch the active tab by id. Returns true if the switch happened.
    ///
    /// The id must name a live tab; anything else is a no-op. This keeps
    /// the active-id invariant enforced on every mutation path rather
    /// than only on `open`/`close`.
    pub fn set_active(&mut self, id: &str) -> bool {
        if self.tabs.iter().any(|t| t.id == id) {
            self.active_tab_id = Some(id.to_string());
            log::debug!("Switched to tab '{}'", id);
            true
        } else {
            false
        }
    }

    /// Move the tab at `from` so it ends up at `to` (splice semantics:
    /// `to` is a position in the sequence after removal). Returns true if
    /// the order changed.
    ///
    /// An out-of-range `from` is a no-op; `to` past the end is clamped to
    /// an append, matching array-splice behaviour. The active id follows
    /// the tab, not the index.
    pub fn move_tab(&mut self, from: usize, to: usize) -> bool {
        if from >= self.tabs.len() {
            return false;
        }

        let tab = self.tabs.remove(from);
        let to = to.min(self.tabs.len());
        let id = tab.id.clone();
        self.tabs.insert(to, tab);

        if to == from {
            return false;
        }
        log::debug!("Moved tab '{}' from index {} to {}", id, from, to);
        true
    }

    /// Get all tabs in display order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Get the active tab id.
    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// Get a reference to the active tab.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_deref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == id))
    }

    /// Get the index of the active tab in display order.
    pub fn active_tab_index(&self) -> Option<usize> {
        self.active_tab_id
            .as_deref()
            .and_then(|id| self.tabs.iter().position(|t| t.id == id))
    }

    /// Get a tab by id.
    pub fn get_tab(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// Check whether a tab with this id is open.
    pub fn contains(&self, id: &str) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    /// Get the number of open tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Check if no tabs are open.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_ids(ids: &[&str]) -> TabManager {
        let mut mgr = TabManager::new();
        for &id in ids {
            mgr.tabs.push(Tab::new(id, format!("Tab {id}")));
        }
        if let Some(last) = ids.last() {
            mgr.active_tab_id = Some(last.to_string());
        }
        mgr
    }

    fn ids(mgr: &TabManager) -> Vec<&str> {
        mgr.tabs().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn open_into_empty_manager() {
        let mut mgr = TabManager::new();
        mgr.open(Tab::new("a", "A"));
        assert_eq!(ids(&mgr), vec!["a"]);
        assert_eq!(mgr.active_tab_id(), Some("a"));
    }

    #[test]
    fn open_inserts_after_active() {
        let mut mgr = manager_with_ids(&["a", "b"]);
        mgr.set_active("a");
        mgr.open(Tab::new("x", "X"));
        assert_eq!(ids(&mgr), vec!["a", "x", "b"]);
        assert_eq!(mgr.active_tab_id(), Some("x"));
    }

    #[test]
    fn open_appends_when_nothing_active() {
        let mut mgr = manager_with_ids(&["a", "b"]);
        mgr.active_tab_id = None;
        mgr.open(Tab::new("x", "X"));
        assert_eq!(ids(&mgr), vec!["a", "b", "x"]);
        assert_eq!(mgr.active_tab_id(), Some("x"));
    }

    #[test]
    fn close_active_selects_right_neighbour() {
        let mut mgr = manager_with_ids(&["a", "b", "c"]);
        mgr.set_active("b");
        assert!(mgr.close("b"));
        assert_eq!(ids(&mgr), vec!["a", "c"]);
        assert_eq!(mgr.active_tab_id(), Some("c"));
    }

    #[test]
    fn close_active_at_end_selects_left_neighbour() {
        let mut mgr = manager_with_ids(&["a", "b", "c"]);
        assert!(mgr.close("c"));
        assert_eq!(mgr.active_tab_id(), Some("b"));
    }

    #[test]
    fn close_last_tab_clears_active() {
        let mut mgr = manager_with_ids(&["a"]);
        assert!(mgr.close("a"));
        assert!(mgr.is_empty());
        assert_eq!(mgr.active_tab_id(), None);
    }

    #[test]
    fn close_inactive_keeps_active() {
        let mut mgr = manager_with_ids(&["a", "b", "c"]);
        assert!(mgr.close("a"));
        assert_eq!(mgr.active_tab_id(), Some("c"));
    }

    #[test]
    fn close_unknown_id_is_noop() {
        let mut mgr = manager_with_ids(&["a", "b"]);
        assert!(!mgr.close("zz"));
        assert_eq!(ids(&mgr), vec!["a", "b"]);
        assert_eq!(mgr.active_tab_id(), Some("b"));
    }

    #[test]
    fn set_active_unknown_id_is_noop() {
        let mut mgr = manager_with_ids(&["a", "b"]);
        assert!(!mgr.set_active("zz"));
        assert_eq!(mgr.active_tab_id(), Some("b"));
    }

    #[test]
    fn move_tab_forward() {
        let mut mgr = manager_with_ids(&["a", "b", "c", "d"]);
        assert!(mgr.move_tab(0, 2));
        assert_eq!(ids(&mgr), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn move_tab_backward() {
        let mut mgr = manager_with_ids(&["a", "b", "c", "d"]);
        assert!(mgr.move_tab(2, 0));
        assert_eq!(ids(&mgr), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn move_tab_same_position_is_noop() {
        let mut mgr = manager_with_ids(&["a", "b", "c"]);
        assert!(!mgr.move_tab(1, 1));
        assert_eq!(ids(&mgr), vec!["a", "b", "c"]);
    }

    #[test]
    fn move_tab_out_of_range_from_is_noop() {
        let mut mgr = manager_with_ids(&["a", "b"]);
        assert!(!mgr.move_tab(5, 0));
        assert_eq!(ids(&mgr), vec!["a", "b"]);
    }

    #[test]
    fn move_tab_out_of_range_to_clamps_to_end() {
        let mut mgr = manager_with_ids(&["a", "b", "c"]);
        assert!(mgr.move_tab(0, 100));
        assert_eq!(ids(&mgr), vec!["b", "c", "a"]);
    }

    #[test]
    fn move_tab_keeps_active_id() {
        let mut mgr = manager_with_ids(&["a", "b", "c"]);
        mgr.set_active("a");
        mgr.move_tab(0, 2);
        assert_eq!(mgr.active_tab_id(), Some("a"));
        assert_eq!(mgr.active_tab_index(), Some(2));
    }
}
