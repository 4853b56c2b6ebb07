//! neurograph-test - Regression test framework for neurograph
//!
//! Provides the comparison bookkeeping used by the `*_reg.rs` tests and a
//! set of ASCII fixtures for drawing small skeletons by hand.
//!
//! # Usage
//!
//! ```ignore
//! use neurograph_test::{RegParams, pix_from_ascii};
//!
//! let mut rp = RegParams::new("thin");
//! rp.compare_values(11.0, skel.count_pixels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    Scene, fork_scene, labels_from_ascii, labels_from_points, line_scene, mask_from_points,
    pix_from_ascii, pix_to_ascii,
};
pub use params::RegParams;
