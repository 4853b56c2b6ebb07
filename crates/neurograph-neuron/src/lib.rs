//! neurograph-neuron - Neuron skeleton measurement
//!
//! Given a skeleton of neurites and a label image of seed objects (cell
//! bodies), this crate:
//!
//! - classifies skeleton points as **trunks** (junctions where a process
//!   leaves a seed), **branches** (junctions further out) and
//!   **endpoints** (free tips),
//! - aggregates those points into per-seed counts,
//! - builds a vertex/edge graph of the skeleton with path lengths and
//!   summed intensities.
//!
//! [`measure_neurons`] runs the whole pipeline; [`classify`] and
//! [`build_graph`] expose the stages.

pub mod classify;
pub mod counts;
mod error;
pub mod features;
pub mod graph;
pub mod measure;
pub mod options;

pub use error::{NeuronError, NeuronResult};

pub use classify::{ClassifiedSkeleton, classify};
pub use counts::{PerSeedCounts, SeedCounts};
pub use graph::{Edge, NeuronGraph, Vertex, VertexKind, build_graph};
pub use measure::{NeuronMeasurement, measure_neurons, measure_neurons_masked};
pub use options::NeuronOptions;
