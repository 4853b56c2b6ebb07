//! Label image functions
//!
//! Segment labeling for one-pixel-wide skeletons, plus grouped reductions
//! over label images (pixel counts and value sums per label).

use crate::conncomp::{UnionFind, check_binary, check_labels};
use crate::error::{RegionError, RegionResult};
use neurograph_core::{FPix, Pix};
use neurograph_morph::{NEIGHBOR_OFFSETS, neighbor_count, neighbors::ring};

/// Label the segments of a skeleton
///
/// Skeleton pixels are joined to their 8-neighbors, except that two
/// adjacent pixels which both have three or more skeleton neighbors stay
/// apart. A junction pixel therefore links the arms around it, while the
/// corner pixels of a junction cluster cannot bridge two arms among
/// themselves.
///
/// # Arguments
///
/// * `skel` - 1-bpp skeleton
///
/// # Returns
///
/// A 32-bpp label image numbered in raster order, and the label count.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if `skel` is not 1 bpp.
pub fn label_skeleton(skel: &Pix) -> RegionResult<(Pix, u32)> {
    check_binary(skel)?;

    let w = skel.width() as i64;
    let h = skel.height() as i64;
    let members: Vec<bool> = skel.data().iter().map(|&v| v != 0).collect();
    let counts: Vec<u32> = (0..members.len())
        .map(|idx| {
            if members[idx] {
                let (x, y) = ((idx as i64 % w) as u32, (idx as i64 / w) as u32);
                neighbor_count(ring(skel, x, y))
            } else {
                0
            }
        })
        .collect();

    let mut uf = UnionFind::new(members.len());
    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if !members[idx] {
                continue;
            }
            for &(dx, dy) in &NEIGHBOR_OFFSETS {
                let (nx, ny) = (x + dx as i64, y + dy as i64);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let nidx = (ny * w + nx) as usize;
                if !members[nidx] || (counts[idx] >= 3 && counts[nidx] >= 3) {
                    continue;
                }
                uf.union(idx, nidx);
            }
        }
    }

    Ok(uf.into_labels(skel, &members))
}

/// Pixel count of each label 1..=n; entry `i` is the size of label `i + 1`.
///
/// Labels above `n` are ignored.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if `labels` is not 32 bpp.
pub fn component_sizes(labels: &Pix, n: u32) -> RegionResult<Vec<u32>> {
    check_labels(labels)?;
    let mut sizes = vec![0u32; n as usize];
    for &v in labels.data() {
        if v != 0 && v <= n {
            sizes[(v - 1) as usize] += 1;
        }
    }
    Ok(sizes)
}

/// Sum of `values` over each label 1..=n; entry `i` belongs to label `i + 1`.
///
/// # Errors
///
/// Returns error if `labels` is not 32 bpp or `values` has a different size.
pub fn label_sums(labels: &Pix, n: u32, values: &FPix) -> RegionResult<Vec<f64>> {
    check_labels(labels)?;
    if !values.same_size_as(labels) {
        return Err(RegionError::Core(neurograph_core::Error::DimensionMismatch {
            expected: labels.dimensions(),
            actual: values.dimensions(),
        }));
    }
    let mut sums = vec![0f64; n as usize];
    for (&v, &value) in labels.data().iter().zip(values.data()) {
        if v != 0 && v <= n {
            sums[(v - 1) as usize] += value as f64;
        }
    }
    Ok(sums)
}
