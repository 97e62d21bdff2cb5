pub mod colorizers;
pub mod error;
pub mod escape_time;
pub mod renderer;
pub mod surface;
pub mod tile_render;

pub use colorizers::{color, colorize, hsl_to_rgb};
pub use error::RenderError;
pub use escape_time::{
    burning_ship, escape_value, iterate_burning_ship, iterate_quadratic, julia,
    linear_escape_value, mandelbrot, smooth_escape_value,
};
pub use renderer::{render, render_to_vec, try_render};
pub use surface::{RgbaBuffer, Surface};
pub use tile_render::{render_tile, TileRenderInput};

// Re-export core types for convenience
pub use escapetime_core::*;
