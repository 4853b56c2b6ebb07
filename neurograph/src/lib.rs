//! Neurograph - Neuron skeleton measurement for Rust
//!
//! # Overview
//!
//! Given a one-pixel-wide skeleton of neurites and a label image of seed
//! objects, neurograph counts per seed:
//!
//! - trunks, the processes leaving the seed
//! - non-trunk branch points
//! - branch ends
//!
//! and describes the skeleton as a graph whose vertices are those points
//! and whose edges carry path length and summed intensity.
//!
//! # Example
//!
//! ```
//! use neurograph::{FPix, Pix, PixelDepth};
//! use neurograph::neuron::{NeuronOptions, measure_neurons};
//!
//! let mut skel = Pix::new(20, 9, PixelDepth::Bit1).unwrap().into_mut();
//! for x in 5..=15 {
//!     skel.set_pixel(x, 4, 1).unwrap();
//! }
//! let mut seeds = Pix::new(20, 9, PixelDepth::Bit32).unwrap().into_mut();
//! seeds.set_pixel(3, 4, 1).unwrap();
//! let intensity = FPix::new_with_value(20, 9, 1.0).unwrap();
//!
//! let m = measure_neurons(
//!     &skel.into(),
//!     &seeds.into(),
//!     Some(&intensity),
//!     &NeuronOptions::default(),
//! )
//! .unwrap();
//! let graph = m.graph.unwrap();
//! assert_eq!(graph.vertices.len(), 2);
//! assert_eq!(graph.edges[0].length, 12);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use neurograph_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use neurograph_morph as morph;
pub use neurograph_neuron as neuron;
pub use neurograph_region as region;
