//! Error types for name parsing and configuration validation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown color scheme: {0}")]
    UnknownColorScheme(String),

    #[error("Unknown fractal type: {0}")]
    UnknownFractalType(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("max_iterations must be at least 1")]
    ZeroIterations,

    #[error("escape_radius must be positive and finite, got {0}")]
    InvalidEscapeRadius(f64),

    /// Smoothing takes log2(log2(|z|²)), which is only real for |z|² > 1.
    #[error("escape_radius {0} is too small for smooth coloring (must exceed 1)")]
    EscapeRadiusTooSmall(f64),

    #[error("zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),

    #[error("viewport offset must be finite, got ({0}, {1})")]
    InvalidOffset(f64, f64),
}
