use serde::{Deserialize, Serialize};

/// Rectangle in pixel space (always u32 coordinates)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    /// Create new pixel rectangle
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole canvas
    pub fn full(canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(0, 0, canvas_width, canvas_height)
    }

    /// Calculate area in pixels
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clip to a canvas, dropping whatever lies outside it.
    pub fn clamp_to(&self, canvas_width: u32, canvas_height: u32) -> Self {
        let x = self.x.min(canvas_width);
        let y = self.y.min(canvas_height);
        let right = self.x.saturating_add(self.width).min(canvas_width);
        let bottom = self.y.saturating_add(self.height).min(canvas_height);
        Self::new(x, y, right - x, bottom - y)
    }

    /// Split a canvas into row-major tiles of at most `tile_size` pixels a side.
    pub fn tiles(canvas_width: u32, canvas_height: u32, tile_size: u32) -> Vec<PixelRect> {
        let tile_size = tile_size.max(1);
        let mut tiles = Vec::new();
        for y in (0..canvas_height).step_by(tile_size as usize) {
            for x in (0..canvas_width).step_by(tile_size as usize) {
                let tile = PixelRect::new(x, y, tile_size, tile_size);
                tiles.push(tile.clamp_to(canvas_width, canvas_height));
            }
        }
        tiles
    }
}
