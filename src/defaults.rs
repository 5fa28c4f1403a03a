//! Default value functions for configuration.
//!
//! Free functions used as `#[serde(default = "crate::defaults::...")]`
//! attributes on config fields, plus the built-in class lists the style
//! resolver falls back to when no override is set.

use crate::cache::DEFAULT_CACHE_LIMIT;

/// Default maximum number of cached inactive-tab snapshots.
pub fn cache_limit() -> usize {
    DEFAULT_CACHE_LIMIT
}

// ── Built-in style class lists ─────────────────────────────────────────────
// One entry per renderable region of the tab surface. Overrides replace a
// region's classes wholesale; regions without an override keep these.

pub fn container_style() -> String {
    "w-full h-full flex flex-col bg-gray-50".into()
}

pub fn tab_bar_style() -> String {
    "flex-none flex bg-white border-b border-gray-200 overflow-x-auto".into()
}

pub fn tab_active_style() -> String {
    "bg-white text-gray-900 border-b-2 border-blue-500".into()
}

pub fn tab_inactive_style() -> String {
    "text-gray-600 hover:bg-gray-50 hover:text-gray-900".into()
}

pub fn tab_dragging_style() -> String {
    "opacity-50".into()
}

pub fn tab_label_style() -> String {
    "truncate flex-1 text-sm font-medium".into()
}

pub fn close_button_style() -> String {
    "ml-auto p-1 rounded opacity-0 group-hover:opacity-100 hover:bg-gray-200 hover:text-red-600".into()
}

pub fn close_icon_style() -> String {
    "h-3.5 w-3.5 text-gray-400 hover:text-red-600".into()
}

pub fn content_area_style() -> String {
    "flex-1 bg-white overflow-hidden".into()
}

pub fn drop_indicator_style() -> String {
    "absolute top-0 bottom-0 w-1 bg-blue-500".into()
}
