//! Hole filling
//!
//! A hole is a 4-connected background component of a binary mask that does
//! not touch the image border. Filling is decided per hole by a caller
//! predicate over the hole's area and whether it encloses an object.

use crate::conncomp::{ConnectivityType, check_binary, label_connected_components};
use crate::error::RegionResult;
use neurograph_core::Pix;

/// Summary of one hole handed to the fill predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole {
    /// Number of pixels in the hole
    pub area: u32,
    /// Whether the hole contains any pixel outside the eligible mask
    pub is_object: bool,
}

/// Fill holes of `pix` selected by `size_fn`
///
/// # Arguments
///
/// * `pix` - 1-bpp mask
/// * `eligible` - Optional 1-bpp mask; a hole containing any pixel outside
///   it is reported with `is_object = true`. Without a mask no hole is an
///   object.
/// * `size_fn` - Returns `true` for holes that should be filled
///
/// # Errors
///
/// Returns error if an input is not 1 bpp or the sizes differ.
pub fn fill_labeled_holes(
    pix: &Pix,
    eligible: Option<&Pix>,
    size_fn: impl Fn(Hole) -> bool,
) -> RegionResult<Pix> {
    check_binary(pix)?;
    if let Some(mask) = eligible {
        check_binary(mask)?;
        pix.require_same_size(mask)?;
    }

    let background = pix.invert()?;
    let (holes, n) = label_connected_components(&background, ConnectivityType::FourWay)?;

    let mut area = vec![0u32; n as usize + 1];
    let mut is_object = vec![false; n as usize + 1];
    let mut on_border = vec![false; n as usize + 1];
    let w = pix.width();
    let h = pix.height();

    for y in 0..h {
        for x in 0..w {
            let label = holes.get_pixel_unchecked(x, y) as usize;
            if label == 0 {
                continue;
            }
            area[label] += 1;
            if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                on_border[label] = true;
            }
            if let Some(mask) = eligible
                && mask.get_pixel_unchecked(x, y) == 0
            {
                is_object[label] = true;
            }
        }
    }

    let fill: Vec<bool> = (0..=n as usize)
        .map(|label| {
            label != 0
                && !on_border[label]
                && size_fn(Hole {
                    area: area[label],
                    is_object: is_object[label],
                })
        })
        .collect();

    let mut out = pix.to_mut();
    for (d, &label) in out.data_mut().iter_mut().zip(holes.data()) {
        if fill[label as usize] {
            *d = 1;
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_test::{pix_from_ascii, pix_to_ascii};

    fn two_rings() -> Pix {
        pix_from_ascii(&[
            "..........",
            ".xxx.xxxx.",
            ".x.x.x..x.",
            ".xxx.x..x.",
            ".....xxxx.",
            "..........",
        ])
        .unwrap()
    }

    #[test]
    fn test_fill_all_holes() {
        let filled = fill_labeled_holes(&two_rings(), None, |_| true).unwrap();
        assert_eq!(filled.count_pixels(), two_rings().count_pixels() + 1 + 4);
    }

    #[test]
    fn test_fill_by_area() {
        let filled = fill_labeled_holes(&two_rings(), None, |hole| hole.area <= 1).unwrap();
        assert!(filled.is_set(2, 2));
        assert!(!filled.is_set(6, 2));
    }

    #[test]
    fn test_object_holes_are_reported() {
        let eligible = pix_from_ascii(&[
            "xxxxxxxxxx",
            "xxxxxxxxxx",
            "xx.xxxxxxx",
            "xxxxxxxxxx",
            "xxxxxxxxxx",
            "xxxxxxxxxx",
        ])
        .unwrap();
        let filled = fill_labeled_holes(&two_rings(), Some(&eligible), |hole| {
            !hole.is_object && hole.area <= 10
        })
        .unwrap();
        assert_eq!(
            pix_to_ascii(&filled),
            [
                "..........",
                ".111.1111.",
                ".1.1.1111.",
                ".111.1111.",
                ".....1111.",
                "..........",
            ]
        );
    }

    #[test]
    fn test_border_background_never_filled() {
        let pix = pix_from_ascii(&["x.x", "x.x", "xxx"]).unwrap();
        assert_eq!(fill_labeled_holes(&pix, None, |_| true).unwrap(), pix);
    }
}
