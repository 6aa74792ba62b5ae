//! Error types for plotting and configuration.

use spectroplot_core::CanvasError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while drawing a frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// A series with no samples was given where at least one is required.
    #[error("series `{series}` is empty")]
    EmptySeries {
        /// Name of the offending series
        series: &'static str,
    },

    /// Two series that must be paired sample-for-sample differ in length.
    #[error("length mismatch: `{left}` has {left_len} samples but `{right}` has {right_len}")]
    LengthMismatch {
        /// Name of the reference series
        left: &'static str,
        /// Length of the reference series
        left_len: usize,
        /// Name of the mismatched series
        right: &'static str,
        /// Length of the mismatched series
        right_len: usize,
    },

    /// The canvas rejected a draw operation.
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Result alias for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading a viewer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML syntax or schema error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The file extension does not name a known format.
    #[error("unsupported config format `{0}` (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(String),

    /// A field parsed but holds an unusable value.
    #[error("invalid value for `{field}`: {message}")]
    Invalid {
        /// Dotted field name
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}
