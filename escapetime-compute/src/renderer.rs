//! Full-frame rendering onto a [`Surface`].

use crate::tile_render::{fill_tile, render_tile, TileRenderInput};
use crate::{RenderError, Surface};
use escapetime_core::{FractalConfig, FractalType, Point};
use web_time::Instant;

/// Render a whole frame into `surface` and commit it once.
///
/// Rendering is best effort: an unusable surface (no buffer, zero area, or
/// a buffer of the wrong size) is logged and left untouched.
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    fractal: FractalType,
    config: &FractalConfig,
    julia_constant: Option<Point>,
) {
    if let Err(e) = try_render(surface, fractal, config, julia_constant) {
        log::warn!("Skipping {} render: {}", fractal, e);
    }
}

/// Like [`render`], but reports why an unusable surface was skipped.
///
/// Nothing is written and `commit` is not called when this returns an error.
pub fn try_render<S: Surface + ?Sized>(
    surface: &mut S,
    fractal: FractalType,
    config: &FractalConfig,
    julia_constant: Option<Point>,
) -> Result<(), RenderError> {
    let width = surface.width();
    let height = surface.height();
    if width == 0 || height == 0 {
        return Err(RenderError::EmptySurface { width, height });
    }

    let expected = width as usize * height as usize * 4;
    let input = TileRenderInput::full_frame(fractal, config, julia_constant, width, height);
    let start = Instant::now();

    {
        let buffer = surface.buffer_mut().ok_or(RenderError::SurfaceUnavailable)?;
        if buffer.len() != expected {
            return Err(RenderError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        fill_tile(buffer, &input);
    }

    surface.commit();

    log::debug!(
        "Rendered {} {}x{} ({} iterations, zoom {}) in {:.1}ms",
        fractal,
        width,
        height,
        config.max_iterations,
        config.zoom,
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

/// Render a whole frame into a fresh RGBA byte vector.
pub fn render_to_vec(
    width: u32,
    height: u32,
    fractal: FractalType,
    config: &FractalConfig,
    julia_constant: Option<Point>,
) -> Vec<u8> {
    render_tile(&TileRenderInput::full_frame(
        fractal,
        config,
        julia_constant,
        width,
        height,
    ))
}
