//! neurograph-region - Region processing for skeleton analysis
//!
//! This crate provides:
//!
//! - **Connected component analysis** - Union-Find labeling of binary masks
//! - **Skeleton segment labeling** - Splitting a skeleton into line segments
//! - **Hole filling** - Filling enclosed background selected by a predicate
//! - **Seed propagation** - Nearest-seed labels and geodesic distances
//!
//! # Examples
//!
//! ```
//! use neurograph_region::{ConnectivityType, propagate};
//! use neurograph_core::{Pix, PixelDepth};
//!
//! let mut seeds = Pix::new(5, 1, PixelDepth::Bit32).unwrap().into_mut();
//! seeds.set_pixel(0, 0, 1).unwrap();
//! let mut path = Pix::new(5, 1, PixelDepth::Bit1).unwrap().into_mut();
//! for x in 1..5 {
//!     path.set_pixel(x, 0, 1).unwrap();
//! }
//!
//! let prop = propagate(&seeds.into(), &path.into(), ConnectivityType::EightWay).unwrap();
//! assert_eq!(prop.labels.get_pixel(4, 0), Some(1));
//! assert_eq!(prop.distances.get_pixel(4, 0).unwrap(), 4.0);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod propagate;
pub mod seedfill;

// Re-export error types
pub use error::{RegionError, RegionResult};

pub use conncomp::{ConnectivityType, count_components, label_connected_components};
pub use label::{component_sizes, label_skeleton, label_sums};
pub use propagate::{Propagation, propagate};
pub use seedfill::{Hole, fill_labeled_holes};
