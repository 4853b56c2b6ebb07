//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! Binary masks store exactly 0 or 1; [`PixMut::set_pixel`] maps any
//! nonzero value to 1 for 1-bpp images.

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

#[inline]
fn normalize(depth: PixelDepth, val: u32) -> u32 {
    match depth {
        PixelDepth::Bit1 => u32::from(val != 0),
        PixelDepth::Bit32 => val,
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Get a pixel at signed coordinates, returning 0 outside the image.
    ///
    /// Used by neighborhood operators that treat the border as background.
    #[inline]
    pub fn get_pixel_or_zero(&self, x: i64, y: i64) -> u32 {
        if x < 0 || y < 0 || x >= self.inner.width as i64 || y >= self.inner.height as i64 {
            return 0;
        }
        self.get_pixel_unchecked(x as u32, y as u32)
    }

    /// Check whether the pixel at (x, y) is nonzero.
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.get_pixel(x, y).is_some_and(|v| v != 0)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of range.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the data buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = (y as usize) * (self.inner.width as usize) + (x as usize);
        self.inner.data[idx] = normalize(self.inner.depth, val);
    }
}
