//! Point classification
//!
//! Sorts the junctions and tips of a skeleton into trunks, branches and
//! endpoints relative to a set of labeled seeds.
//!
//! The seeds are dilated by a disk and the dilation is cut back to a thin
//! ring by removing the eroded seed core. The ring is merged with the
//! skeleton and the result is thinned again, so every process that leaves
//! a seed meets the ring at a true branch point. Labels and distances are
//! then spread from the dilated seeds along the combined skeleton.
//!
//! A pixel is a trunk when it has extra branches and lies within
//! `trunk_distance` of its seed. Branch points and end points further out
//! are branches and endpoints.

use log::debug;
use neurograph_core::{FPix, Pix, PixelDepth};
use neurograph_morph::{
    Sel, branch_points_with_checkerboard, dilate_8, dilate_gray, end_points, erode_gray,
    extra_branches, skeletonize,
};
use neurograph_region::{ConnectivityType, fill_labeled_holes, propagate};

use crate::error::{NeuronError, NeuronResult};
use crate::options::NeuronOptions;

/// Per-pixel classification of a skeleton against its seeds
#[derive(Debug, Clone)]
pub struct ClassifiedSkeleton {
    /// Skeleton merged with the seed rings, re-thinned, and cut down to the
    /// pixels some seed reaches
    pub skeleton: Pix,
    /// Seed labels after dilation by the seed disk
    pub dilated_seeds: Pix,
    /// Nearest-seed label per pixel (0 where no seed reaches)
    pub labels: Pix,
    /// Path length along the skeleton to the nearest seed
    pub distances: FPix,
    /// Extra branches per skeleton pixel, zero away from the outside skeleton
    pub branchings: Pix,
    /// Junctions next to a seed
    pub trunks: Pix,
    /// Junctions away from the seeds
    pub branches: Pix,
    /// Tips away from the seeds
    pub endpoints: Pix,
    /// Skeleton pixels outside every dilated seed
    pub outside: Pix,
    /// Largest seed label
    pub num_seeds: u32,
}

pub(crate) fn check_shape(expected: (u32, u32), actual: (u32, u32)) -> NeuronResult<()> {
    if expected != actual {
        return Err(NeuronError::InputShapeMismatch { expected, actual });
    }
    Ok(())
}

pub(crate) fn check_depth(pix: &Pix, depth: PixelDepth, expected: &'static str) -> NeuronResult<()> {
    if pix.depth() != depth {
        return Err(NeuronError::UnsupportedDepth {
            expected,
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Classify skeleton points relative to labeled seeds
///
/// # Arguments
///
/// * `skeleton` - 1-bpp skeleton
/// * `seeds` - 32-bpp seed labels, 1..N with 0 as background
/// * `options` - Disk radius, trunk distance and hole filling policy
///
/// # Errors
///
/// Returns [`NeuronError::InvalidParameter`] for bad options,
/// [`NeuronError::UnsupportedDepth`] for wrong depths, and
/// [`NeuronError::InputShapeMismatch`] when the images differ in size.
pub fn classify(
    skeleton: &Pix,
    seeds: &Pix,
    options: &NeuronOptions,
) -> NeuronResult<ClassifiedSkeleton> {
    options.validate()?;
    check_depth(skeleton, PixelDepth::Bit1, "1-bpp skeleton")?;
    check_depth(seeds, PixelDepth::Bit32, "32-bpp seed labels")?;
    check_shape(skeleton.dimensions(), seeds.dimensions())?;

    let num_seeds = seeds.max_value();
    let disk = Sel::create_disk(options.seed_disk_radius)?;

    let dilated_seeds = dilate_gray(seeds, &disk)?;
    let seed_ring = dilated_seeds.nonzero_mask();
    let seed_core = erode_gray(&dilated_seeds, &disk)?.nonzero_mask();

    let mut combined = skeleton.or(&seed_ring)?.and_not(&seed_core)?;
    if options.fill_holes {
        let eligible = seed_core.invert()?;
        let max_area = options.max_hole_area;
        combined = fill_labeled_holes(&combined, Some(&eligible), |hole| {
            !hole.is_object && i64::from(hole.area) <= max_area
        })?;
    }
    let combined = skeletonize(&combined)?;

    let prop = propagate(&dilated_seeds, &combined, ConnectivityType::EightWay)?;
    let combined = combined.and(&prop.labels.nonzero_mask())?;
    debug!(
        "classify: {} seeds, {} combined skeleton pixels",
        num_seeds,
        combined.count_pixels()
    );

    let outside = combined.and_not(&seed_ring)?;
    let branchings = extra_branches(&combined)?.masked_by(&dilate_8(&outside)?)?;
    let junctions = branch_points_with_checkerboard(&combined)?;
    let tips = end_points(&combined)?;

    let mut trunks = combined.create_template().into_mut();
    let mut branches = combined.create_template().into_mut();
    let mut endpoints = combined.create_template().into_mut();
    for (idx, &label) in prop.labels.data().iter().enumerate() {
        if label == 0 || combined.data()[idx] == 0 {
            continue;
        }
        let near = prop.distances.data()[idx] <= options.trunk_distance;
        if near {
            if branchings.data()[idx] > 0 {
                trunks.data_mut()[idx] = 1;
            }
        } else {
            if junctions.data()[idx] != 0 {
                branches.data_mut()[idx] = 1;
            }
            if tips.data()[idx] != 0 {
                endpoints.data_mut()[idx] = 1;
            }
        }
    }

    let classified = ClassifiedSkeleton {
        skeleton: combined,
        dilated_seeds,
        labels: prop.labels,
        distances: prop.distances,
        branchings,
        trunks: trunks.into(),
        branches: branches.into(),
        endpoints: endpoints.into(),
        outside,
        num_seeds,
    };
    debug!(
        "classify: {} trunk, {} branch, {} endpoint pixels",
        classified.trunks.count_pixels(),
        classified.branches.count_pixels(),
        classified.endpoints.count_pixels()
    );
    Ok(classified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_test::{line_scene, pix_to_ascii};

    #[test]
    fn test_line_scene_points() {
        let scene = line_scene().unwrap();
        let c = classify(&scene.skeleton, &scene.seeds, &NeuronOptions::default()).unwrap();

        assert_eq!(c.num_seeds, 1);
        assert_eq!(c.trunks.count_pixels(), 1);
        assert!(c.trunks.is_set(4, 4));
        assert_eq!(c.branches.count_pixels(), 0);
        assert_eq!(c.endpoints.count_pixels(), 1);
        assert!(c.endpoints.is_set(15, 4));
        assert_eq!(c.outside.count_pixels(), 11);
        assert_eq!(c.distances.get_pixel(15, 4).unwrap(), 11.0);
    }

    #[test]
    fn test_seed_ring_thins_to_diamond() {
        let scene = line_scene().unwrap();
        let c = classify(&scene.skeleton, &scene.seeds, &NeuronOptions::default()).unwrap();
        let rows = pix_to_ascii(&c.skeleton);
        assert_eq!(rows[3], "...1................");
        assert_eq!(rows[4], "..1.111111111111....");
        assert_eq!(rows[5], "...1................");
    }

    #[test]
    fn test_unreached_skeleton_is_dropped() {
        let mut skel = line_scene().unwrap().skeleton.to_mut();
        skel.set_pixel(18, 0, 1).unwrap();
        skel.set_pixel(18, 1, 1).unwrap();
        let seeds = line_scene().unwrap().seeds;
        let c = classify(&skel.into(), &seeds, &NeuronOptions::default()).unwrap();
        assert!(!c.skeleton.is_set(18, 0));
        assert_eq!(c.endpoints.count_pixels(), 1);
    }

    #[test]
    fn test_shape_and_depth_checks() {
        let skel = Pix::new(4, 4, PixelDepth::Bit1).unwrap();
        let seeds = Pix::new(4, 5, PixelDepth::Bit32).unwrap();
        assert!(matches!(
            classify(&skel, &seeds, &NeuronOptions::default()),
            Err(NeuronError::InputShapeMismatch {
                expected: (4, 4),
                actual: (4, 5)
            })
        ));
        assert!(matches!(
            classify(&skel, &skel, &NeuronOptions::default()),
            Err(NeuronError::UnsupportedDepth { .. })
        ));
    }
}
