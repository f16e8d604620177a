//! Pixel buffer for one mip level
//!
//! Storage is bottom-up: logical row `y` lives at stored row `height - 1 - y`,
//! which is the order BMP expects. Callers address pixels top-down.

use crate::debug::trimmed_pixels_fmt;
use crate::error::{Error, Result};
use crate::pixel::{PixelLayout, Texel};
use custom_debug::Debug;

/// Fixed-size 32-bit pixel canvas with vertically flipped storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    layout: PixelLayout,
    #[debug(with = trimmed_pixels_fmt)]
    pixels: Vec<u32>,
}

impl Canvas {
    /// Allocate a zeroed canvas. Fails with [`Error::Allocation`] when the
    /// buffer cannot be obtained.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::Allocation { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { width, height })?;
        pixels.resize(len, 0);

        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Layout used to pack texels
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let row = (self.height - 1 - y) as usize;
        Ok(row * self.width as usize + x as usize)
    }

    /// Store a packed pixel at top-down coordinates
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) -> Result<()> {
        let index = self.index(x, y)?;
        self.pixels[index] = pixel;
        Ok(())
    }

    /// Packed pixel at top-down coordinates
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).ok().map(|i| self.pixels[i])
    }

    /// Pack a texel with the canvas layout and store it
    pub fn put_texel(&mut self, x: u32, y: u32, texel: Texel) -> Result<()> {
        self.set_pixel(x, y, self.layout.pack(texel))
    }

    /// Store a decoded 4x4 block whose top-left corner is at the origin.
    /// Texels are in row-major order.
    pub fn put_block(&mut self, origin_x: u32, origin_y: u32, texels: &[Texel; 16]) -> Result<()> {
        for (i, texel) in texels.iter().enumerate() {
            let (row, col) = ((i / 4) as u32, (i % 4) as u32);
            self.put_texel(origin_x + col, origin_y + row, *texel)?;
        }
        Ok(())
    }

    /// Pixels in storage order, bottom row first
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Size of the pixel data in bytes
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 4
    }
}
