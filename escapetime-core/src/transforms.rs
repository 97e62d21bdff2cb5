//! Conversions between pixel space and the complex plane.

use crate::{Point, Viewport};

/// Map a pixel to the complex-plane point it samples.
///
/// Pixel (0, 0) samples the top-left corner `(x_min, y_min)`; each step
/// right or down advances by one `x_step` / `y_step`.
pub fn pixel_to_fractal(px: f64, py: f64, viewport: &Viewport, canvas_size: (u32, u32)) -> Point {
    let (canvas_width, canvas_height) = canvas_size;
    Point::new(
        viewport.x_min() + px * viewport.x_step(canvas_width),
        viewport.y_min() + py * viewport.y_step(canvas_height),
    )
}
