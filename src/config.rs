//! Configuration for the tab surface.
//!
//! A single behavioural knob (the inactive-content cache limit) plus the
//! typed style-override structure. Partial YAML files work: every field
//! carries a serde default, so a config containing only `cache_limit: 8`
//! is valid.

use crate::error::ConfigError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration for a tab group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabsConfig {
    /// Maximum number of inactive-tab content snapshots kept in the cache.
    #[serde(default = "crate::defaults::cache_limit")]
    pub cache_limit: usize,

    /// Style overrides for the rendered tab surface.
    #[serde(default)]
    pub styles: TabStyles,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            cache_limit: crate::defaults::cache_limit(),
            styles: TabStyles::default(),
        }
    }
}

impl TabsConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache limit.
    #[must_use]
    pub fn with_cache_limit(mut self, limit: usize) -> Self {
        self.cache_limit = limit;
        self
    }

    /// Check field values for semantic validity.
    ///
    /// Construction sites (`TabGroup::new`, `load`) call this so an
    /// invalid config is rejected before any store is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache_limit == 0 {
            return Err(ConfigError::Validation(
                "cache_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Default config file location (`<config dir>/par-tabs/config.yaml`).
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("par-tabs").join("config.yaml"))
    }

    /// Load and validate a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::Io)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save the configuration as YAML, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let contents = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, contents)
            .map_err(ConfigError::Io)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        log::info!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Optional style-class overrides, one field per renderable region.
///
/// Each field is independently overridable; an unset field falls back to
/// the built-in class list for that region during [`TabStyles::resolve`].
/// This replaces ad-hoc string concatenation of default and custom
/// classes with an enumerated, typed structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStyles {
    /// Outer container wrapping bar and content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// The horizontal tab bar strip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_bar: Option<String>,
    /// A tab in the active state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_active: Option<String>,
    /// A tab in the inactive state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_inactive: Option<String>,
    /// A tab while it is being dragged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_dragging: Option<String>,
    /// The truncating label inside a tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_label: Option<String>,
    /// The per-tab close button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_button: Option<String>,
    /// The icon inside the close button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_icon: Option<String>,
    /// The content area below the bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_area: Option<String>,
    /// The drop-position indicator shown while dragging.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_indicator: Option<String>,
}

impl TabStyles {
    /// Merge overrides over the built-in defaults into a fully-populated
    /// style set.
    #[must_use]
    pub fn resolve(&self) -> ResolvedTabStyles {
        use crate::defaults;
        ResolvedTabStyles {
            container: self.container.clone().unwrap_or_else(defaults::container_style),
            tab_bar: self.tab_bar.clone().unwrap_or_else(defaults::tab_bar_style),
            tab_active: self
                .tab_active
                .clone()
                .unwrap_or_else(defaults::tab_active_style),
            tab_inactive: self
                .tab_inactive
                .clone()
                .unwrap_or_else(defaults::tab_inactive_style),
            tab_dragging: self
                .tab_dragging
                .clone()
                .unwrap_or_else(defaults::tab_dragging_style),
            tab_label: self
                .tab_label
                .clone()
                .unwrap_or_else(defaults::tab_label_style),
            close_button: self
                .close_button
                .clone()
                .unwrap_or_else(defaults::close_button_style),
            close_icon: self
                .close_icon
                .clone()
                .unwrap_or_else(defaults::close_icon_style),
            content_area: self
                .content_area
                .clone()
                .unwrap_or_else(defaults::content_area_style),
            drop_indicator: self
                .drop_indicator
                .clone()
                .unwrap_or_else(defaults::drop_indicator_style),
        }
    }
}

/// A fully-populated style set, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTabStyles {
    pub container: String,
    pub tab_bar: String,
    pub tab_active: String,
    pub tab_inactive: String,
    pub tab_dragging: String,
    pub tab_label: String,
    pub close_button: String,
    pub close_icon: String,
    pub content_area: String,
    pub drop_indicator: String,
}
