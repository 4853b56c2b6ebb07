//! Binary morphological operations
//!
//! Implements erosion and dilation for 1-bpp masks. Pixels outside the
//! image are background for both operations.

use crate::{MorphError, MorphResult, Sel};
use neurograph_core::{Pix, PixelDepth};

/// Dilate a binary image
///
/// Dilation expands foreground regions: an output pixel is set when any
/// hit of the reflected SEL placed at it covers a foreground pixel.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedDepth`] if `pix` is not 1 bpp.
pub fn dilate(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;

    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let hit_offsets: Vec<_> = sel.hit_offsets().collect();
    let mut out_mut = pix.create_template().into_mut();

    for y in 0..h {
        for x in 0..w {
            if pix.get_pixel_unchecked(x as u32, y as u32) == 0 {
                continue;
            }
            for &(dx, dy) in &hit_offsets {
                let tx = x + dx as i64;
                let ty = y + dy as i64;
                if tx >= 0 && tx < w && ty >= 0 && ty < h {
                    out_mut.set_pixel_unchecked(tx as u32, ty as u32, 1);
                }
            }
        }
    }

    Ok(out_mut.into())
}

/// Erode a binary image
///
/// Erosion shrinks foreground regions: an output pixel is set only when
/// every hit of the SEL placed at it covers a foreground pixel. Hits that
/// fall outside the image see background.
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedDepth`] if `pix` is not 1 bpp.
pub fn erode(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;

    let hit_offsets: Vec<_> = sel.hit_offsets().collect();
    let mut out_mut = pix.create_template().into_mut();

    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let all_hit = hit_offsets
                .iter()
                .all(|&(dx, dy)| pix.get_pixel_or_zero(x as i64 + dx as i64, y as i64 + dy as i64) != 0);
            if all_hit {
                out_mut.set_pixel_unchecked(x, y, 1);
            }
        }
    }

    Ok(out_mut.into())
}

/// Dilate by the 3x3 square (8-connected neighborhood).
pub fn dilate_8(pix: &Pix) -> MorphResult<Pix> {
    dilate(pix, &Sel::create_square(3)?)
}

pub(crate) fn check_binary(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(MorphError::UnsupportedDepth {
            expected: "1-bpp binary",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
