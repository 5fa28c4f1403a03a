//! Drag-and-drop reorder geometry.
//!
//! Pure helpers translating a pointer position over a tab's bounding box
//! into a drop intent, and a drop intent into the destination index for
//! [`TabManager::move_tab`](crate::TabManager::move_tab). The drag
//! surface supplies raw coordinates; nothing here touches layout.

/// Which side of the hovered tab the pointer is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSide {
    /// Pointer left of the tab's horizontal midpoint.
    Left,
    /// Pointer at or right of the midpoint.
    Right,
}

/// Where a dragged tab would land if released now.
///
/// Used both to position a drop indicator and, on release, to resolve the
/// final move via [`resolve_drop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIntent {
    /// Index of the hovered tab in display order.
    pub index: usize,
    /// Side of the hovered tab the drop would land on.
    pub side: DropSide,
}

/// Classify a pointer position over the hovered tab's bounding box.
///
/// The split point is the horizontal midpoint of `[tab_left, tab_right]`.
pub fn drop_intent(pointer_x: f32, tab_left: f32, tab_right: f32, index: usize) -> DropIntent {
    let midpoint = (tab_left + tab_right) / 2.0;
    let side = if pointer_x < midpoint {
        DropSide::Left
    } else {
        DropSide::Right
    };
    DropIntent { index, side }
}

/// Resolve a drop intent into a `move_tab` destination for the tab
/// currently at `dragged`.
///
/// Returns `None` when the drop is a splice no-op: onto the dragged tab
/// itself, or into the slot immediately right of it. Otherwise the raw
/// slot (hovered index, +1 for a right-side drop) is shifted down by one
/// when it lies past the dragged index, compensating for the removal.
pub fn resolve_drop(dragged: usize, intent: DropIntent) -> Option<usize> {
    let raw = match intent.side {
        DropSide::Left => intent.index,
        DropSide::Right => intent.index + 1,
    };

    if raw == dragged || raw == dragged + 1 {
        return None;
    }

    Some(if raw > dragged { raw - 1 } else { raw })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_left_of_midpoint() {
        let intent = drop_intent(104.0, 100.0, 120.0, 3);
        assert_eq!(intent.index, 3);
        assert_eq!(intent.side, DropSide::Left);
    }

    #[test]
    fn pointer_right_of_midpoint() {
        let intent = drop_intent(116.0, 100.0, 120.0, 3);
        assert_eq!(intent.side, DropSide::Right);
    }

    #[test]
    fn pointer_exactly_at_midpoint_is_right() {
        let intent = drop_intent(110.0, 100.0, 120.0, 0);
        assert_eq!(intent.side, DropSide::Right);
    }

    #[test]
    fn drop_on_self_is_noop() {
        let intent = DropIntent {
            index: 2,
            side: DropSide::Left,
        };
        assert_eq!(resolve_drop(2, intent), None);
    }

    #[test]
    fn drop_adjacent_right_of_self_is_noop() {
        // Right half of the dragged tab, and left half of its right
        // neighbour, both splice back to the same position.
        let right_of_self = DropIntent {
            index: 2,
            side: DropSide::Right,
        };
        assert_eq!(resolve_drop(2, right_of_self), None);

        let left_of_neighbour = DropIntent {
            index: 3,
            side: DropSide::Left,
        };
        assert_eq!(resolve_drop(2, left_of_neighbour), None);
    }

    #[test]
    fn drop_forward_compensates_for_removal() {
        // Dragging tab 0 onto the right half of tab 2: raw slot 3, minus
        // one for the removal shift.
        let intent = DropIntent {
            index: 2,
            side: DropSide::Right,
        };
        assert_eq!(resolve_drop(0, intent), Some(2));
    }

    #[test]
    fn drop_backward_keeps_raw_slot() {
        let intent = DropIntent {
            index: 0,
            side: DropSide::Left,
        };
        assert_eq!(resolve_drop(3, intent), Some(0));
    }

    #[test]
    fn drop_left_of_right_neighbours_neighbour_moves_one() {
        // Left half of the tab two to the right: raw slot 4 > dragged 2,
        // resolves to 3.
        let intent = DropIntent {
            index: 4,
            side: DropSide::Left,
        };
        assert_eq!(resolve_drop(2, intent), Some(3));
    }

    #[test]
    fn drop_immediately_left_is_a_real_move() {
        let intent = DropIntent {
            index: 1,
            side: DropSide::Left,
        };
        assert_eq!(resolve_drop(2, intent), Some(1));
    }
}
