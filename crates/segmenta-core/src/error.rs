//! Configuration errors for segmented controls.

use thiserror::Error;

/// Errors raised when a segmented control is configured with inputs its
/// layout cannot handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("a segmented control needs at least one option")]
    NoOptions,
    #[error("option at index {index} duplicates the option at index {first}")]
    DuplicateOption { index: usize, first: usize },
    #[error("track width must be positive and finite, got {0}")]
    InvalidWidth(f64),
}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
