//! Tab descriptors and the tab ordering/selection state machine.
//!
//! This module provides the core tab infrastructure:
//! - `Tab`: Caller-supplied descriptor identifying one open tab
//! - `TabManager`: Ordered tab sequence plus active-tab pointer

mod manager;

pub use manager::TabManager;

use serde::{Deserialize, Serialize};

/// Caller-supplied descriptor for one open tab.
///
/// Identity is `id`: the caller assigns it and guarantees no two live
/// descriptors share one. The manager never deduplicates ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique, caller-assigned identifier.
    pub id: String,
    /// Display label shown in the tab bar.
    pub label: String,
    /// Optional icon name, resolved by the renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Tab {
    /// Create a new tab descriptor with no icon.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    /// Set the icon name.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}
