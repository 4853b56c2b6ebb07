//! Neuron measurement entry point

use log::debug;
use neurograph_core::{FPix, Pix, PixelDepth};

use crate::classify::{ClassifiedSkeleton, check_depth, check_shape, classify};
use crate::counts::PerSeedCounts;
use crate::error::NeuronResult;
use crate::graph::NeuronGraph;
use crate::options::NeuronOptions;

/// Everything measured for one skeleton and its seeds
#[derive(Debug, Clone)]
pub struct NeuronMeasurement {
    /// Trunk, branch and endpoint counts per seed label
    pub counts: PerSeedCounts,
    /// Vertex and edge tables; present when an intensity image was given
    pub graph: Option<NeuronGraph>,
    /// Intermediate masks of the classification
    pub classified: ClassifiedSkeleton,
}

/// Count trunks, branches and endpoints per seed, and optionally build the
/// skeleton graph
///
/// # Arguments
///
/// * `skeleton` - 1-bpp skeleton
/// * `seeds` - 32-bpp seed labels, 1..N with 0 as background
/// * `intensity` - When given, the graph is built and edge intensities are
///   summed from it
/// * `options` - Classification options
///
/// # Errors
///
/// Returns [`crate::NeuronError::InvalidParameter`] before touching any
/// image if `options` is invalid, and
/// [`crate::NeuronError::InputShapeMismatch`] if the inputs differ in size.
///
/// # Examples
///
/// ```
/// use neurograph_neuron::{NeuronOptions, measure_neurons};
/// use neurograph_core::{Pix, PixelDepth};
///
/// let mut skel = Pix::new(20, 9, PixelDepth::Bit1).unwrap().into_mut();
/// for x in 5..=15 {
///     skel.set_pixel(x, 4, 1).unwrap();
/// }
/// let mut seeds = Pix::new(20, 9, PixelDepth::Bit32).unwrap().into_mut();
/// seeds.set_pixel(3, 4, 1).unwrap();
///
/// let m = measure_neurons(&skel.into(), &seeds.into(), None, &NeuronOptions::default()).unwrap();
/// assert_eq!(m.counts.trunks, vec![1]);
/// assert_eq!(m.counts.endpoints, vec![1]);
/// assert!(m.graph.is_none());
/// ```
pub fn measure_neurons(
    skeleton: &Pix,
    seeds: &Pix,
    intensity: Option<&FPix>,
    options: &NeuronOptions,
) -> NeuronResult<NeuronMeasurement> {
    measure_neurons_masked(skeleton, seeds, None, intensity, options)
}

/// [`measure_neurons`] with the skeleton first restricted to `mask`
///
/// # Errors
///
/// As [`measure_neurons`]; `mask` must also be a 1-bpp image of the same
/// size as `skeleton`.
pub fn measure_neurons_masked(
    skeleton: &Pix,
    seeds: &Pix,
    mask: Option<&Pix>,
    intensity: Option<&FPix>,
    options: &NeuronOptions,
) -> NeuronResult<NeuronMeasurement> {
    options.validate()?;
    check_depth(skeleton, PixelDepth::Bit1, "1-bpp skeleton")?;
    let dims = skeleton.dimensions();
    check_shape(dims, seeds.dimensions())?;
    if let Some(image) = intensity {
        check_shape(dims, image.dimensions())?;
    }

    let restricted;
    let skeleton = match mask {
        Some(mask) => {
            check_depth(mask, PixelDepth::Bit1, "1-bpp mask")?;
            check_shape(dims, mask.dimensions())?;
            restricted = skeleton.and(mask)?;
            &restricted
        }
        None => skeleton,
    };

    let classified = classify(skeleton, seeds, options)?;
    let counts = PerSeedCounts::from_classified(&classified);
    let graph = intensity
        .map(|image| NeuronGraph::from_classified(&classified, image))
        .transpose()?;
    debug!(
        "measure_neurons: {} seeds, graph {}",
        counts.len(),
        if graph.is_some() { "built" } else { "skipped" }
    );

    Ok(NeuronMeasurement {
        counts,
        graph,
        classified,
    })
}
