//! Seed propagation
//!
//! Multi-source shortest-path flood fill. Every labeled seed pixel starts at
//! distance 0; labels then spread through the eligible mask, each reached
//! pixel taking the label of the seed it is closest to along the mask.
//!
//! Orthogonal steps cost 1 and diagonal steps cost √2. The heap is ordered
//! by (distance, raster index) and a pixel only changes hands on a strictly
//! shorter path, so ties go to whichever predecessor is finalized first and
//! the result is deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::conncomp::{ConnectivityType, check_binary, check_labels};
use crate::error::RegionResult;
use neurograph_core::{FPix, Pix};

/// Result of [`propagate`]
#[derive(Debug, Clone)]
pub struct Propagation {
    /// Nearest-seed label per pixel; 0 where no seed reaches
    pub labels: Pix,
    /// Path length to the nearest seed; infinite where no seed reaches
    pub distances: FPix,
}

/// Propagate seed labels through an eligibility mask
///
/// # Arguments
///
/// * `seeds` - 32-bpp label image; every positive pixel is a source
/// * `eligible` - 1-bpp mask of pixels labels may spread into
/// * `connectivity` - Neighborhood used for each step
///
/// # Errors
///
/// Returns error on wrong depths or mismatched sizes.
pub fn propagate(
    seeds: &Pix,
    eligible: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<Propagation> {
    check_labels(seeds)?;
    check_binary(eligible)?;
    seeds.require_same_size(eligible)?;

    let w = seeds.width() as i64;
    let h = seeds.height() as i64;
    let n = seeds.data().len();

    let mut distances = vec![f64::INFINITY; n];
    let mut labels = vec![0u32; n];

    // Priority queue: (distance_bits, raster index)
    let mut heap = BinaryHeap::new();
    for (idx, &label) in seeds.data().iter().enumerate() {
        if label != 0 {
            distances[idx] = 0.0;
            labels[idx] = label;
            heap.push(Reverse((0.0_f64.to_bits(), idx)));
        }
    }

    while let Some(Reverse((dist_bits, u))) = heap.pop() {
        let dist = f64::from_bits(dist_bits);

        // Skip if we've already found a better path
        if dist > distances[u] {
            continue;
        }

        let x = u as i64 % w;
        let y = u as i64 / w;
        for &(dx, dy) in connectivity.offsets() {
            let (nx, ny) = (x + dx as i64, y + dy as i64);
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            let v = (ny * w + nx) as usize;
            if eligible.data()[v] == 0 {
                continue;
            }
            let step = if dx != 0 && dy != 0 {
                std::f64::consts::SQRT_2
            } else {
                1.0
            };
            let new_dist = dist + step;
            if new_dist < distances[v] {
                distances[v] = new_dist;
                labels[v] = labels[u];
                heap.push(Reverse((new_dist.to_bits(), v)));
            }
        }
    }

    let mut label_pix = seeds.create_template().into_mut();
    label_pix.data_mut().copy_from_slice(&labels);
    let distances = FPix::from_data(
        seeds.width(),
        seeds.height(),
        distances.into_iter().map(|d| d as f32).collect(),
    )?;

    Ok(Propagation {
        labels: label_pix.into(),
        distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_core::PixelDepth;
    use neurograph_test::{labels_from_ascii, pix_from_ascii, pix_to_ascii};

    #[test]
    fn test_line_distances() {
        let seeds = labels_from_ascii(&["1...."]).unwrap();
        let eligible = pix_from_ascii(&[".xxx."]).unwrap();
        let prop = propagate(&seeds, &eligible, ConnectivityType::EightWay).unwrap();
        assert_eq!(pix_to_ascii(&prop.labels), ["1111."]);
        assert_eq!(&prop.distances.data()[..4], &[0.0, 1.0, 2.0, 3.0]);
        assert!(prop.distances.data()[4].is_infinite());
    }

    #[test]
    fn test_diagonal_cost() {
        let seeds = labels_from_ascii(&["1..", "...", "..."]).unwrap();
        let eligible = pix_from_ascii(&["...", ".x.", "..x"]).unwrap();
        let prop = propagate(&seeds, &eligible, ConnectivityType::EightWay).unwrap();
        let d = prop.distances.get_pixel(2, 2).unwrap();
        assert!((d - 2.0 * std::f32::consts::SQRT_2).abs() < 1e-5);

        let four = propagate(&seeds, &eligible, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.labels.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn test_nearest_seed_wins() {
        let seeds = labels_from_ascii(&["1......2"]).unwrap();
        let eligible = pix_from_ascii(&[".xxxxxx."]).unwrap();
        let prop = propagate(&seeds, &eligible, ConnectivityType::EightWay).unwrap();
        assert_eq!(pix_to_ascii(&prop.labels), ["11112222"]);
    }

    #[test]
    fn test_tie_goes_to_first_finalized() {
        // The middle pixel is 2 steps from both seeds; seed 3 comes first in
        // raster order so its wave reaches the middle first
        let seeds = labels_from_ascii(&["3...1"]).unwrap();
        let eligible = pix_from_ascii(&[".xxx."]).unwrap();
        let prop = propagate(&seeds, &eligible, ConnectivityType::EightWay).unwrap();
        assert_eq!(pix_to_ascii(&prop.labels), ["33311"]);
    }

    #[test]
    fn test_unreachable_stays_zero() {
        let seeds = labels_from_ascii(&["1....."]).unwrap();
        let eligible = pix_from_ascii(&[".x..xx"]).unwrap();
        let prop = propagate(&seeds, &eligible, ConnectivityType::EightWay).unwrap();
        assert_eq!(pix_to_ascii(&prop.labels), ["11...."]);
        assert!(prop.distances.get_pixel(5, 0).unwrap().is_infinite());
    }

    #[test]
    fn test_size_mismatch() {
        let seeds = Pix::new(3, 3, PixelDepth::Bit32).unwrap();
        let eligible = Pix::new(3, 2, PixelDepth::Bit1).unwrap();
        assert!(propagate(&seeds, &eligible, ConnectivityType::EightWay).is_err());
    }
}
