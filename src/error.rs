//! Typed error variants for configuration handling.
//!
//! The state stores themselves never fail — malformed input degrades to
//! silent no-ops. Errors only exist on the config load/save path, where
//! callers may want to match on the failure mode instead of an opaque
//! `anyhow` string.

use thiserror::Error;

/// Errors that can occur when loading, saving, or validating
/// configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("config validation failed: {0}")]
    Validation(String),
}
