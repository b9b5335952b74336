use anyhow::{Context, Result};
use image::{imageops, ImageBuffer, ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Offscreen RGBA surface the canvas is rasterized onto.
#[derive(Clone)]
pub struct ImageStore {
    pub buffer: RgbaImage,
}

impl ImageStore {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let buffer = ImageBuffer::from_pixel(width, height, background);
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.width() && y < self.height() {
            Some(*self.buffer.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Fills a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
        let max_x = x.saturating_add(width).min(self.width());
        let max_y = y.saturating_add(height).min(self.height());
        for py in y..max_y {
            for px in x..max_x {
                self.buffer.put_pixel(px, py, color);
            }
        }
    }

    pub fn vertical_line(&mut self, x: u32, y: u32, length: u32, color: Rgba<u8>) {
        self.fill_rect(x, y, 1, length, color);
    }

    pub fn horizontal_line(&mut self, x: u32, y: u32, length: u32, color: Rgba<u8>) {
        self.fill_rect(x, y, length, 1, color);
    }

    /// Copies out a sub-rectangle.
    ///
    /// Panics if the region is empty or does not lie fully inside the
    /// surface: the crop geometry is derived from fixed constants, so a bad
    /// region means the constants are wrong.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
        let fits_x = x.checked_add(width).is_some_and(|r| r <= self.width());
        let fits_y = y.checked_add(height).is_some_and(|b| b <= self.height());
        if width == 0 || height == 0 || !fits_x || !fits_y {
            panic!(
                "Invalid crop dimensions: {}x{} at ({}, {}) on a {}x{} image",
                width,
                height,
                x,
                y,
                self.width(),
                self.height()
            );
        }
        imageops::crop_imm(&self.buffer, x, y, width, height).to_image()
    }

    pub fn into_buffer(self) -> RgbaImage {
        self.buffer
    }

    pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
        image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to save image to {}", path.display()))?;
        Ok(())
    }
}
