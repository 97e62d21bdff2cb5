//! Tile rendering.
//!
//! A tile is any rectangle of the full frame. Its pixels are mapped through
//! the full-frame viewport, so stitching tiles back together reproduces a
//! full-frame render byte for byte. The full-frame renderer is the
//! single-tile case of the same loop.

use crate::colorizers::colorize;
use crate::escape_time::escape_value;
use escapetime_core::{
    pixel_to_fractal, FractalConfig, FractalType, PixelRect, Point, Viewport,
    DEFAULT_JULIA_CONSTANT,
};

/// Everything needed to compute one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileRenderInput {
    pub fractal: FractalType,
    pub config: FractalConfig,
    /// Only used for Julia sets; `None` falls back to the default constant.
    pub julia_constant: Option<Point>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tile: PixelRect,
}

impl TileRenderInput {
    /// Input covering the whole canvas.
    pub fn full_frame(
        fractal: FractalType,
        config: &FractalConfig,
        julia_constant: Option<Point>,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Self {
        Self {
            fractal,
            config: *config,
            julia_constant,
            canvas_width,
            canvas_height,
            tile: PixelRect::full(canvas_width, canvas_height),
        }
    }

    /// Same frame, different tile.
    pub fn with_tile(&self, tile: PixelRect) -> Self {
        Self { tile, ..*self }
    }

    /// Tile clipped to the canvas.
    pub fn clamped_tile(&self) -> PixelRect {
        self.tile.clamp_to(self.canvas_width, self.canvas_height)
    }
}

/// Compute the RGBA bytes of a tile, row-major, `tile.width * 4` bytes per row.
///
/// Parts of the tile outside the canvas are dropped.
pub fn render_tile(input: &TileRenderInput) -> Vec<u8> {
    let tile = input.clamped_tile();
    let mut pixels = vec![0u8; tile.area() * 4];
    fill_tile(&mut pixels, input);
    pixels
}

/// Write the tile's pixels into `out`, which must hold `tile.area() * 4` bytes.
pub(crate) fn fill_tile(out: &mut [u8], input: &TileRenderInput) {
    let tile = input.clamped_tile();
    let canvas_size = (input.canvas_width, input.canvas_height);
    let viewport = Viewport::from_config(&input.config, input.canvas_width, input.canvas_height);
    let julia_constant = input.julia_constant.unwrap_or(DEFAULT_JULIA_CONSTANT);
    let row_width = tile.width as usize;

    for (row, py) in (tile.y..tile.y + tile.height).enumerate() {
        for (col, px) in (tile.x..tile.x + tile.width).enumerate() {
            let point = pixel_to_fractal(px as f64, py as f64, &viewport, canvas_size);
            let t = escape_value(input.fractal, point, &input.config, julia_constant);
            let offset = (row * row_width + col) * 4;
            out[offset..offset + 4].copy_from_slice(&colorize(t, input.config.color_scheme));
        }
    }
}
