//! Grayscale morphological operations on label images
//!
//! Dilation and erosion of 32-bpp label images by an arbitrary SEL:
//! - **Dilation**: maximum label in the neighborhood
//! - **Erosion**: minimum label in the neighborhood
//!
//! Neighborhood positions outside the image are skipped rather than
//! treated as zero, so a label touching the border does not erode away
//! from it.

use crate::{MorphError, MorphResult, Sel};
use neurograph_core::{Pix, PixelDepth};

fn rank_filter(pix: &Pix, offsets: &[(i32, i32)], pick_max: bool) -> MorphResult<Pix> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(MorphError::UnsupportedDepth {
            expected: "32-bpp labels",
            actual: pix.depth().bits(),
        });
    }

    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let mut out_mut = pix.create_template().into_mut();

    for y in 0..h {
        for x in 0..w {
            let mut acc: Option<u32> = None;
            for &(dx, dy) in offsets {
                let sx = x + dx as i64;
                let sy = y + dy as i64;
                if sx < 0 || sx >= w || sy < 0 || sy >= h {
                    continue;
                }
                let v = pix.get_pixel_unchecked(sx as u32, sy as u32);
                acc = Some(match acc {
                    None => v,
                    Some(a) if pick_max => a.max(v),
                    Some(a) => a.min(v),
                });
            }
            out_mut.set_pixel_unchecked(x as u32, y as u32, acc.unwrap_or(0));
        }
    }

    Ok(out_mut.into())
}

/// Dilate a label image
///
/// Each output pixel takes the largest label under the reflected SEL, so
/// labels grow outward into background. Where two labels compete the
/// larger one wins.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedDepth`] if `pix` is not 32 bpp.
pub fn dilate_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let offsets: Vec<_> = sel.hit_offsets().map(|(dx, dy)| (-dx, -dy)).collect();
    rank_filter(pix, &offsets, true)
}

/// Erode a label image
///
/// Each output pixel takes the smallest label under the SEL, so any pixel
/// within reach of background becomes background.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedDepth`] if `pix` is not 32 bpp.
pub fn erode_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let offsets: Vec<_> = sel.hit_offsets().collect();
    rank_filter(pix, &offsets, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_test::labels_from_ascii;

    #[test]
    fn test_dilate_gray_grows_labels() {
        let labels = labels_from_ascii(&[".....", ".....", "..2..", ".....", "....."]).unwrap();
        let disk = Sel::create_disk(1.5).unwrap();
        let dilated = dilate_gray(&labels, &disk).unwrap();
        assert_eq!(dilated.count_pixels(), 9);
        assert_eq!(dilated.get_pixel(1, 1), Some(2));
        assert_eq!(dilated.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_dilate_gray_larger_label_wins() {
        let labels = labels_from_ascii(&["1.3"]).unwrap();
        let disk = Sel::create_disk(1.5).unwrap();
        let dilated = dilate_gray(&labels, &disk).unwrap();
        assert_eq!(dilated.data(), &[1, 3, 3]);
    }

    #[test]
    fn test_erode_after_dilate_recovers_center() {
        let labels = labels_from_ascii(&[".....", ".....", "..1..", ".....", "....."]).unwrap();
        let disk = Sel::create_disk(1.5).unwrap();
        let dilated = dilate_gray(&labels, &disk).unwrap();
        let eroded = erode_gray(&dilated, &disk).unwrap();
        assert_eq!(eroded, labels);
    }

    #[test]
    fn test_erode_gray_skips_outside() {
        // A label filling the image does not erode from the border
        let labels = labels_from_ascii(&["44", "44"]).unwrap();
        let eroded = erode_gray(&labels, &Sel::create_square(3).unwrap()).unwrap();
        assert_eq!(eroded.count_pixels(), 4);
    }

    #[test]
    fn test_rejects_binary() {
        let mask = Pix::new(2, 2, PixelDepth::Bit1).unwrap();
        assert!(dilate_gray(&mask, &Sel::create_square(3).unwrap()).is_err());
    }
}
