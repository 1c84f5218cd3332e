//! Dynamic texture - an RGBA pixel buffer that can be drawn into at runtime

use image::{Rgba, RgbaImage};

/// Runtime-editable texture
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicTexture {
    pixels: RgbaImage,
}

impl DynamicTexture {
    /// Create a transparent texture of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Read a pixel; `None` outside the texture
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }

    /// Write a pixel; returns false outside the texture
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.pixels.get_pixel_mut_checked(x, y) {
            Some(pixel) => {
                *pixel = Rgba(rgba);
                true
            }
            None => false,
        }
    }

    /// Fill every pixel with one colour
    pub fn fill(&mut self, rgba: [u8; 4]) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = Rgba(rgba);
        }
    }

    /// Reset to fully transparent
    pub fn clear(&mut self) {
        self.fill([0, 0, 0, 0]);
    }

    /// Underlying image buffer
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }
}
