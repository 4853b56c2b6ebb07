//! Error types for neurograph-neuron

use thiserror::Error;

/// Errors that can occur while measuring neurons
#[derive(Debug, Error)]
pub enum NeuronError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] neurograph_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] neurograph_morph::MorphError),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] neurograph_region::RegionError),

    /// Skeleton, seed, intensity or mask images differ in size
    #[error("input shape mismatch: expected {expected:?}, got {actual:?}")]
    InputShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Unusable option value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },
}

/// Result type for neuron measurement
pub type NeuronResult<T> = Result<T, NeuronError>;
