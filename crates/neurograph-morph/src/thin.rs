//! Connectivity-preserving thinning
//!
//! Thinning reduces a binary mask to a one-pixel-wide skeleton with the
//! same 8-connected topology.
//!
//! # Algorithm
//!
//! Each iteration runs four directional passes (north, south, west, east).
//! A pass visits pixels in raster order and deletes a foreground pixel
//! immediately when all of these hold on the current image:
//!
//! 1. Its neighbor in the pass direction is background (it is a border pixel)
//! 2. Its Yokoi 8-connectivity number is 1 (deleting it is topology-safe)
//! 3. It has at least two foreground neighbors (line tips survive)
//!
//! Iteration stops when a full round deletes nothing, so thinning a
//! skeleton returns it unchanged.

use crate::binary::check_binary;
use crate::neighbors::{connectivity_number, neighbor_count, ring_at};
use crate::MorphResult;
use neurograph_core::{Pix, PixMut};

/// Direction of a thinning pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinDirection {
    North,
    South,
    West,
    East,
}

impl ThinDirection {
    /// Passes in the order they run within one iteration
    pub const ALL: [ThinDirection; 4] = [
        ThinDirection::North,
        ThinDirection::South,
        ThinDirection::West,
        ThinDirection::East,
    ];

    /// Ring bit of the neighbor that must be background.
    fn ring_bit(self) -> u8 {
        match self {
            ThinDirection::North => 1 << 0,
            ThinDirection::East => 1 << 2,
            ThinDirection::South => 1 << 4,
            ThinDirection::West => 1 << 6,
        }
    }
}

/// Thin a binary mask until no pixel can be removed.
///
/// Each round runs the four directional passes in order; the result is a
/// one-pixel-wide skeleton that keeps the 8-connectivity of the input.
///
/// # Errors
///
/// Returns error if `pix` is not 1 bpp.
pub fn skeletonize(pix: &Pix) -> MorphResult<Pix> {
    check_binary(pix)?;

    let mut pm = pix.to_mut();
    loop {
        let removed: usize = ThinDirection::ALL
            .iter()
            .map(|&dir| thin_pass(&mut pm, dir))
            .sum();
        if removed == 0 {
            break;
        }
    }

    Ok(pm.into())
}

/// Run one directional pass in place; returns the number of deleted pixels.
pub fn thin_pass(pm: &mut PixMut, dir: ThinDirection) -> usize {
    let w = pm.width();
    let h = pm.height();
    let mut removed = 0;

    for y in 0..h {
        for x in 0..w {
            let idx = (y as usize) * (w as usize) + x as usize;
            if pm.data()[idx] == 0 {
                continue;
            }
            let ring = ring_at(pm.data(), w, h, x, y);
            if ring & dir.ring_bit() != 0 {
                continue;
            }
            if neighbor_count(ring) >= 2 && connectivity_number(ring) == 1 {
                pm.data_mut()[idx] = 0;
                removed += 1;
            }
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_test::{pix_from_ascii, pix_to_ascii};

    #[test]
    fn test_line_unchanged() {
        let pix = pix_from_ascii(&[".......", ".xxxxx.", "......."]).unwrap();
        assert_eq!(skeletonize(&pix).unwrap(), pix);
    }

    #[test]
    fn test_thick_bar_thins_to_one_pixel() {
        let pix = pix_from_ascii(&[
            "..........",
            ".xxxxxxxx.",
            ".xxxxxxxx.",
            ".xxxxxxxx.",
            "..........",
        ])
        .unwrap();
        let skel = skeletonize(&pix).unwrap();
        assert!(skel.count_pixels() > 0);
        assert!(skel.count_pixels() < pix.count_pixels());
        assert_eq!(skeletonize(&skel).unwrap(), skel);
    }

    #[test]
    fn test_ring_around_hole_becomes_diamond() {
        let pix = pix_from_ascii(&[".....", ".xxx.", ".x.x.", ".xxx.", "....."]).unwrap();
        let skel = skeletonize(&pix).unwrap();
        assert_eq!(
            pix_to_ascii(&skel),
            [".....", "..1..", ".1.1.", "..1..", "....."]
        );
    }

    #[test]
    fn test_single_pixel_kept() {
        let pix = pix_from_ascii(&["...", ".x.", "..."]).unwrap();
        assert_eq!(skeletonize(&pix).unwrap(), pix);
    }

    #[test]
    fn test_single_pass_deletes_in_raster_order() {
        // Deletions take effect immediately, so one north pass eats the
        // block down to its bottom row
        let pix = pix_from_ascii(&[".....", ".xxx.", ".xxx.", ".xxx.", "....."]).unwrap();
        let mut pm = pix.to_mut();
        assert_eq!(thin_pass(&mut pm, ThinDirection::North), 6);
        let after: Pix = pm.into();
        assert_eq!(
            pix_to_ascii(&after),
            [".....", ".....", ".....", ".111.", "....."]
        );
    }
}
