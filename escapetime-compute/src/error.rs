//! Render error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Surface has no pixel buffer available")]
    SurfaceUnavailable,

    #[error("Surface has zero area ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("Surface buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
}
