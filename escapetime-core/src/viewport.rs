use crate::{FractalConfig, Point};
use serde::{Deserialize, Serialize};

/// Width of the complex-plane window at zoom 1.
pub const BASE_VIEWPORT_WIDTH: f64 = 3.0;

/// Rectangular region of the complex plane shown on a surface.
///
/// - `center`: center point in fractal space
/// - `width`: visible width in fractal space
/// - `height`: visible height in fractal space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Point,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Derive the viewport for a surface from zoom and offset.
    ///
    /// Width is `3 / zoom`; height follows the surface aspect ratio so pixels
    /// stay square.
    pub fn from_config(config: &FractalConfig, canvas_width: u32, canvas_height: u32) -> Self {
        let scale = BASE_VIEWPORT_WIDTH / config.zoom;
        let height = scale * (canvas_height as f64 / canvas_width as f64);
        Self {
            center: Point::new(config.offset_x, config.offset_y),
            width: scale,
            height,
        }
    }

    /// Build a viewport from explicit bounds.
    pub fn from_bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            center: Point::new((x_min + x_max) / 2.0, (y_min + y_max) / 2.0),
            width: x_max - x_min,
            height: y_max - y_min,
        }
    }

    pub fn x_min(&self) -> f64 {
        self.center.x() - self.width / 2.0
    }

    pub fn x_max(&self) -> f64 {
        self.center.x() + self.width / 2.0
    }

    pub fn y_min(&self) -> f64 {
        self.center.y() - self.height / 2.0
    }

    pub fn y_max(&self) -> f64 {
        self.center.y() + self.height / 2.0
    }

    /// Horizontal distance in the plane covered by one pixel.
    pub fn x_step(&self, canvas_width: u32) -> f64 {
        (self.x_max() - self.x_min()) / canvas_width as f64
    }

    /// Vertical distance in the plane covered by one pixel.
    pub fn y_step(&self, canvas_height: u32) -> f64 {
        (self.y_max() - self.y_min()) / canvas_height as f64
    }
}
