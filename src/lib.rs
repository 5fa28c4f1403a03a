//! Tab state management for tabbed UI surfaces.
//!
//! This crate provides the non-rendering core of a tabbed UI:
//!
//! - [`TabManager`]: ordered tab descriptors plus the active-tab pointer
//!   (open, close-with-reselection, set-active, drag reorder)
//! - [`ContentCache`]: a bounded FIFO cache that preserves rendered content
//!   of inactive tabs so it need not be recomputed on refocus
//! - [`reorder`]: pure pointer-geometry helpers translating a drag position
//!   into a `move_tab` destination index
//! - [`TabGroup`]: a host object bundling one manager and one cache,
//!   instantiated once by the application and injected into consumers
//!
//! Rendering, styling, and drag-and-drop pixel handling are the host
//! application's concern; the core only returns index/side decisions and
//! cached values. All operations are synchronous, run to completion, and
//! assume a single logical owner (serialize calls through your UI event
//! loop). Malformed input is handled with silent no-ops rather than
//! panics so a bad call can never take down the interaction loop.

pub mod cache;
pub mod config;
pub mod defaults;
pub mod error;
pub mod group;
pub mod reorder;
pub mod tab;

// Re-export main types for convenience
pub use cache::{CacheStats, ContentCache};
pub use config::{ResolvedTabStyles, TabStyles, TabsConfig};
pub use error::ConfigError;
pub use group::TabGroup;
pub use reorder::{DropIntent, DropSide, drop_intent, resolve_drop};
pub use tab::{Tab, TabManager};
