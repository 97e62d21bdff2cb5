//! Raster targets the renderer writes into.

/// A caller-owned RGBA raster.
///
/// The buffer is row-major, 4 bytes per pixel (R, G, B, A), so pixel
/// `(px, py)` starts at byte `(py * width + px) * 4`.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Mutable pixel buffer, or `None` when the target cannot be drawn to.
    fn buffer_mut(&mut self) -> Option<&mut [u8]>;

    /// Push the buffer to wherever it is displayed. Called once per render,
    /// after every pixel has been written.
    fn commit(&mut self) {}
}

/// In-memory surface that owns its pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    commits: usize,
}

impl RgbaBuffer {
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Create a fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * Self::BYTES_PER_PIXEL],
            commits: 0,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Number of times a renderer has committed to this buffer.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// Get offset for pixel data at (px, py)
    pub fn pixel_offset(&self, px: u32, py: u32) -> usize {
        (py as usize * self.width as usize + px as usize) * Self::BYTES_PER_PIXEL
    }

    pub fn pixel(&self, px: u32, py: u32) -> Option<[u8; 4]> {
        if px >= self.width || py >= self.height {
            return None;
        }
        let offset = self.pixel_offset(px, py);
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + Self::BYTES_PER_PIXEL]);
        Some(rgba)
    }
}

impl Surface for RgbaBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn buffer_mut(&mut self) -> Option<&mut [u8]> {
        Some(&mut self.pixels)
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}
