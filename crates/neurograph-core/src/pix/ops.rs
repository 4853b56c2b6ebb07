//! Mask algebra
//!
//! Pixelwise combinations of binary masks plus the conversions between
//! label images and masks that the skeleton pipeline relies on:
//!
//! - AND, OR, AND-NOT of two masks
//! - Invert
//! - Foreground counting
//! - Label image to mask (`label > 0`) and masking of label images

use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

impl Pix {
    /// Fail unless this image has the requested depth.
    pub fn require_depth(&self, depth: PixelDepth) -> Result<()> {
        if self.depth() != depth {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        Ok(())
    }

    /// Fail unless `other` has the same width and height.
    pub fn require_same_size(&self, other: &Pix) -> Result<()> {
        if !self.same_size(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    fn combine_binary(&self, other: &Pix, f: impl Fn(u32, u32) -> u32) -> Result<Pix> {
        self.require_depth(PixelDepth::Bit1)?;
        if other.depth() != PixelDepth::Bit1 {
            return Err(Error::IncompatibleDepths(
                self.depth().bits(),
                other.depth().bits(),
            ));
        }
        self.require_same_size(other)?;

        let mut out = self.create_template().into_mut();
        for ((d, &a), &b) in out
            .data_mut()
            .iter_mut()
            .zip(self.data())
            .zip(other.data())
        {
            *d = f(a, b) & 1;
        }
        Ok(out.into())
    }

    /// Pixelwise AND of two binary masks.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or are not 1 bpp.
    pub fn and(&self, other: &Pix) -> Result<Pix> {
        self.combine_binary(other, |a, b| a & b)
    }

    /// Pixelwise OR of two binary masks.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or are not 1 bpp.
    pub fn or(&self, other: &Pix) -> Result<Pix> {
        self.combine_binary(other, |a, b| a | b)
    }

    /// Pixels set in `self` but not in `other`.
    ///
    /// # Errors
    ///
    /// Returns error if images have different dimensions or are not 1 bpp.
    pub fn and_not(&self, other: &Pix) -> Result<Pix> {
        self.combine_binary(other, |a, b| a & !b)
    }

    /// Invert a binary mask.
    ///
    /// # Errors
    ///
    /// Returns error if the image is not 1 bpp.
    pub fn invert(&self) -> Result<Pix> {
        self.require_depth(PixelDepth::Bit1)?;
        let mut out = self.create_template().into_mut();
        for (d, &s) in out.data_mut().iter_mut().zip(self.data()) {
            *d = 1 - s;
        }
        Ok(out.into())
    }

    /// Count the number of nonzero pixels.
    pub fn count_pixels(&self) -> u64 {
        self.data().iter().filter(|&&v| v != 0).count() as u64
    }

    /// Largest pixel value (0 for an all-zero image).
    pub fn max_value(&self) -> u32 {
        self.data().iter().copied().max().unwrap_or(0)
    }

    /// Binary mask of the nonzero pixels of any image.
    pub fn nonzero_mask(&self) -> Pix {
        let mut out = self.create_template_with_depth(PixelDepth::Bit1).into_mut();
        for (d, &s) in out.data_mut().iter_mut().zip(self.data()) {
            *d = u32::from(s != 0);
        }
        out.into()
    }

    /// Copy of this image with every pixel outside `mask` set to zero.
    ///
    /// # Errors
    ///
    /// Returns error if `mask` is not a 1-bpp image of the same size.
    pub fn masked_by(&self, mask: &Pix) -> Result<Pix> {
        mask.require_depth(PixelDepth::Bit1)?;
        self.require_same_size(mask)?;
        let mut out = self.to_mut();
        for (d, &m) in out.data_mut().iter_mut().zip(mask.data()) {
            if m == 0 {
                *d = 0;
            }
        }
        Ok(out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(w: u32, h: u32, bits: &[u32]) -> Pix {
        Pix::from_data(w, h, PixelDepth::Bit1, bits.to_vec()).unwrap()
    }

    #[test]
    fn test_and_or_and_not() {
        let a = mask(2, 2, &[1, 1, 0, 0]);
        let b = mask(2, 2, &[1, 0, 1, 0]);
        assert_eq!(a.and(&b).unwrap().data(), &[1, 0, 0, 0]);
        assert_eq!(a.or(&b).unwrap().data(), &[1, 1, 1, 0]);
        assert_eq!(a.and_not(&b).unwrap().data(), &[0, 1, 0, 0]);
        assert_eq!(a.invert().unwrap().data(), &[0, 0, 1, 1]);
    }

    #[test]
    fn test_size_mismatch() {
        let a = mask(2, 2, &[1, 1, 0, 0]);
        let b = mask(1, 4, &[1, 0, 1, 0]);
        assert!(matches!(
            a.and(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_labels_to_mask() {
        let labels = Pix::from_data(3, 1, PixelDepth::Bit32, vec![0, 4, 2]).unwrap();
        assert_eq!(labels.nonzero_mask().data(), &[0, 1, 1]);
        assert_eq!(labels.max_value(), 4);
        assert_eq!(labels.count_pixels(), 2);
        assert!(labels.invert().is_err());
    }

    #[test]
    fn test_masked_by() {
        let labels = Pix::from_data(3, 1, PixelDepth::Bit32, vec![5, 4, 2]).unwrap();
        let keep = mask(3, 1, &[1, 0, 1]);
        assert_eq!(labels.masked_by(&keep).unwrap().data(), &[5, 0, 2]);
    }
}
