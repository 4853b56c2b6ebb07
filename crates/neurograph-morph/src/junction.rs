//! Skeleton junction analysis
//!
//! Per-pixel topology of a one-pixel-wide skeleton:
//!
//! - [`branch_points`]: pixels where three or more arms meet
//! - [`end_points`]: pixels with exactly one skeleton neighbor
//! - [`branchings`]: arm count per pixel, and [`extra_branches`] which maps
//!   it through [`BRANCHING_EXTRA`] to the number of arms beyond a simple
//!   through-path
//! - [`checkerboard_points`]: the diagonal of every solid 2x2 block, a
//!   crossing that arm counting cannot see
//!
//! Arm counting is described in [`crate::neighbors::arm_count`].

use crate::binary::check_binary;
use crate::neighbors::{arm_count, neighbor_count, ring};
use crate::MorphResult;
use neurograph_core::{Pix, PixelDepth};

/// Extra branches for each arm count (0 through 4).
///
/// A pixel on a plain line has two arms and no extra branch; a three-way
/// junction contributes one, a four-way junction two.
pub const BRANCHING_EXTRA: [u32; 5] = [0, 0, 0, 1, 2];

fn map_skeleton(skel: &Pix, depth: PixelDepth, f: impl Fn(u8) -> u32) -> MorphResult<Pix> {
    check_binary(skel)?;
    let mut out = skel.create_template_with_depth(depth).into_mut();
    for y in 0..skel.height() {
        for x in 0..skel.width() {
            if skel.get_pixel_unchecked(x, y) != 0 {
                out.set_pixel_unchecked(x, y, f(ring(skel, x, y)));
            }
        }
    }
    Ok(out.into())
}

/// Skeleton pixels with three or more arms.
///
/// # Errors
///
/// Returns error if `skel` is not 1 bpp.
pub fn branch_points(skel: &Pix) -> MorphResult<Pix> {
    map_skeleton(skel, PixelDepth::Bit1, |r| u32::from(arm_count(r) >= 3))
}

/// Skeleton pixels with exactly one 8-neighbor.
///
/// # Errors
///
/// Returns error if `skel` is not 1 bpp.
pub fn end_points(skel: &Pix) -> MorphResult<Pix> {
    map_skeleton(skel, PixelDepth::Bit1, |r| u32::from(neighbor_count(r) == 1))
}

/// Arm count of every skeleton pixel as a 32-bpp image (0 off the skeleton).
///
/// # Errors
///
/// Returns error if `skel` is not 1 bpp.
pub fn branchings(skel: &Pix) -> MorphResult<Pix> {
    map_skeleton(skel, PixelDepth::Bit32, arm_count)
}

/// Extra branches per skeleton pixel: [`branchings`] mapped through
/// [`BRANCHING_EXTRA`].
///
/// # Errors
///
/// Returns error if `skel` is not 1 bpp.
pub fn extra_branches(skel: &Pix) -> MorphResult<Pix> {
    map_skeleton(skel, PixelDepth::Bit32, |r| {
        let arms = arm_count(r) as usize;
        BRANCHING_EXTRA[arms.min(BRANCHING_EXTRA.len() - 1)]
    })
}

/// Top-left and bottom-right pixels of every 2x2 block that is entirely
/// skeleton.
///
/// ```text
/// x . . x
/// . B x .
/// . x B .
/// x . . x
/// ```
///
/// Four arms meet in the block but each pixel sees only two, so none of
/// them is a branch point by arm count.
///
/// # Errors
///
/// Returns error if `skel` is not 1 bpp.
pub fn checkerboard_points(skel: &Pix) -> MorphResult<Pix> {
    check_binary(skel)?;
    let mut out = skel.create_template().into_mut();
    if skel.width() < 2 || skel.height() < 2 {
        return Ok(out.into());
    }
    for y in 0..skel.height() - 1 {
        for x in 0..skel.width() - 1 {
            let solid = skel.get_pixel_unchecked(x, y) != 0
                && skel.get_pixel_unchecked(x + 1, y) != 0
                && skel.get_pixel_unchecked(x, y + 1) != 0
                && skel.get_pixel_unchecked(x + 1, y + 1) != 0;
            if solid {
                out.set_pixel_unchecked(x, y, 1);
                out.set_pixel_unchecked(x + 1, y + 1, 1);
            }
        }
    }
    Ok(out.into())
}

/// [`branch_points`] together with [`checkerboard_points`].
///
/// # Errors
///
/// Returns error if `skel` is not 1 bpp.
pub fn branch_points_with_checkerboard(skel: &Pix) -> MorphResult<Pix> {
    let plain = branch_points(skel)?;
    let odd = checkerboard_points(skel)?;
    Ok(plain.or(&odd)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_test::{pix_from_ascii, pix_to_ascii};

    fn y_shape() -> Pix {
        pix_from_ascii(&[
            "x.....x", //
            ".x...x.", //
            "..x.x..", //
            "...x...", //
            "...x...", //
            "...x...", //
        ])
        .unwrap()
    }

    #[test]
    fn test_branch_and_end_points() {
        let skel = y_shape();
        let bp = branch_points(&skel).unwrap();
        assert_eq!(bp.count_pixels(), 1);
        assert!(bp.is_set(3, 3));

        let ep = end_points(&skel).unwrap();
        assert_eq!(ep.count_pixels(), 3);
        assert!(ep.is_set(0, 0) && ep.is_set(6, 0) && ep.is_set(3, 5));
    }

    #[test]
    fn test_branchings_and_extra() {
        let skel = y_shape();
        let raw = branchings(&skel).unwrap();
        assert_eq!(raw.get_pixel(3, 3), Some(3));
        assert_eq!(raw.get_pixel(3, 4), Some(2));
        assert_eq!(raw.get_pixel(0, 0), Some(1));
        assert_eq!(raw.get_pixel(1, 0), Some(0));

        let extra = extra_branches(&skel).unwrap();
        assert_eq!(extra.get_pixel(3, 3), Some(1));
        assert_eq!(extra.data().iter().sum::<u32>(), 1);
    }

    #[test]
    fn test_cross_has_two_extra_branches() {
        let skel = pix_from_ascii(&["..x..", "..x..", "xxxxx", "..x..", "..x.."]).unwrap();
        let extra = extra_branches(&skel).unwrap();
        assert_eq!(extra.get_pixel(2, 2), Some(2));
        assert!(branch_points(&skel).unwrap().is_set(2, 2));
    }

    #[test]
    fn test_checkerboard_fixup() {
        let skel = pix_from_ascii(&["x..x", ".xx.", ".xx.", "x..x"]).unwrap();
        assert_eq!(branch_points(&skel).unwrap().count_pixels(), 0);

        let fixed = branch_points_with_checkerboard(&skel).unwrap();
        assert_eq!(pix_to_ascii(&fixed), ["....", ".1..", "..1.", "...."]);
    }

    #[test]
    fn test_isolated_pixel_is_neither() {
        let skel = pix_from_ascii(&["...", ".x.", "..."]).unwrap();
        assert_eq!(end_points(&skel).unwrap().count_pixels(), 0);
        assert_eq!(branch_points(&skel).unwrap().count_pixels(), 0);
    }
}
