//! 8-neighborhood tables
//!
//! The ring of a pixel is its eight neighbors in clockwise order starting
//! north: N, NE, E, SE, S, SW, W, NW. A ring is packed into a `u8` with
//! bit `k` set when neighbor `k` is foreground. Even positions are the
//! 4-connected neighbors and each odd position is the diagonal between
//! its two even neighbors.

use neurograph_core::Pix;

/// `(dx, dy)` offsets of the 8 neighbors in ring order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Ring positions of the 4-connected neighbors.
pub const ORTHOGONAL: [usize; 4] = [0, 2, 4, 6];

/// Read the packed ring of `(x, y)` from a row-major buffer.
///
/// Neighbors outside the grid count as background.
#[inline]
pub fn ring_at(data: &[u32], width: u32, height: u32, x: u32, y: u32) -> u8 {
    let mut ring = 0u8;
    for (k, &(dx, dy)) in NEIGHBOR_OFFSETS.iter().enumerate() {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        if data[(ny as usize) * (width as usize) + nx as usize] != 0 {
            ring |= 1 << k;
        }
    }
    ring
}

/// Packed ring of `(x, y)` in `pix`.
#[inline]
pub fn ring(pix: &Pix, x: u32, y: u32) -> u8 {
    ring_at(pix.data(), pix.width(), pix.height(), x, y)
}

/// Number of foreground 8-neighbors.
#[inline]
pub fn neighbor_count(ring: u8) -> u32 {
    ring.count_ones()
}

/// Number of arms leaving a pixel: circular runs of foreground in the ring.
///
/// A full ring is one run.
pub fn arm_count(ring: u8) -> u32 {
    if ring == 0xFF {
        return 1;
    }
    // A run starts at every set bit whose predecessor is clear
    let prev = ring.rotate_left(1);
    (ring & !prev).count_ones()
}

/// Yokoi 8-connectivity number of the center pixel.
///
/// Counts the 8-connected foreground components of the ring that the
/// center joins. A foreground pixel with connectivity number 1 can be
/// removed without splitting or merging components, provided it is not
/// isolated and not interior.
pub fn connectivity_number(ring: u8) -> u32 {
    let bg = |k: usize| u32::from(ring & (1 << (k % 8)) == 0);
    ORTHOGONAL
        .iter()
        .map(|&k| bg(k) - bg(k) * bg(k + 1) * bg(k + 2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: u8 = 1 << 0;
    const NE: u8 = 1 << 1;
    const E: u8 = 1 << 2;
    const SE: u8 = 1 << 3;
    const S: u8 = 1 << 4;
    const SW: u8 = 1 << 5;
    const W: u8 = 1 << 6;
    const NW: u8 = 1 << 7;

    #[test]
    fn test_offsets_are_clockwise_from_north() {
        assert_eq!(NEIGHBOR_OFFSETS[0], (0, -1));
        assert_eq!(NEIGHBOR_OFFSETS[2], (1, 0));
        assert_eq!(NEIGHBOR_OFFSETS[4], (0, 1));
        assert_eq!(NEIGHBOR_OFFSETS[6], (-1, 0));
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0));
        }
    }

    #[test]
    fn test_arm_count() {
        assert_eq!(arm_count(0), 0);
        assert_eq!(arm_count(E), 1);
        assert_eq!(arm_count(E | W), 2);
        assert_eq!(arm_count(N | NE), 1);
        assert_eq!(arm_count(NW | N), 1);
        assert_eq!(arm_count(E | SW | NW), 3);
        assert_eq!(arm_count(N | E | S | W), 4);
        assert_eq!(arm_count(0xFF), 1);
    }

    #[test]
    fn test_connectivity_number() {
        // Line interior: removing splits the line
        assert_eq!(connectivity_number(E | W), 2);
        // Tip
        assert_eq!(connectivity_number(E), 1);
        // Corner of a solid block
        assert_eq!(connectivity_number(E | SE | S), 1);
        // Interior
        assert_eq!(connectivity_number(0xFF), 0);
        // Isolated
        assert_eq!(connectivity_number(0), 0);
        // Three diagonal arms
        assert_eq!(connectivity_number(NE | SE | SW), 3);
    }

    #[test]
    fn test_ring_at_border() {
        let data = [1, 1, 0, 1];
        // (0, 0) in a 2x2 grid sees E and S and SE only
        assert_eq!(ring_at(&data, 2, 2, 0, 0), E | SE);
        assert_eq!(neighbor_count(ring_at(&data, 2, 2, 1, 1)), 2);
    }
}
