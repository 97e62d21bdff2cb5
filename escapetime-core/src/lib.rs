pub mod compute_data;
pub mod config;
pub mod error;
pub mod pixel_rect;
pub mod points;
pub mod presets;
pub mod transforms;
pub mod viewport;

pub use compute_data::EscapeData;
pub use config::{
    ColorScheme, ConfigOverrides, FractalConfig, FractalType, DEFAULT_ESCAPE_RADIUS,
    DEFAULT_MAX_ITERATIONS, DEFAULT_OFFSET_X, DEFAULT_OFFSET_Y, DEFAULT_ZOOM,
};
pub use error::{ConfigError, ParseError};
pub use pixel_rect::PixelRect;
pub use points::Point;
pub use presets::{find_julia_preset, JuliaPreset, DEFAULT_JULIA_CONSTANT, JULIA_PRESETS};
pub use transforms::pixel_to_fractal;
pub use viewport::{Viewport, BASE_VIEWPORT_WIDTH};
