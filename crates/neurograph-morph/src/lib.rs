//! neurograph-morph - Morphological operations for skeleton analysis
//!
//! This crate provides:
//!
//! - Structuring elements (SEL) including disks of fractional radius
//! - Binary morphology: erosion, dilation
//! - Grayscale morphology on label images: erosion, dilation
//! - Connectivity-preserving thinning (skeletonization)
//! - Junction analysis: branch points, end points, branching degree and
//!   the checkerboard crossing fix-up

pub mod binary;
mod error;
pub mod grayscale;
pub mod junction;
pub mod neighbors;
pub mod sel;
pub mod thin;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use binary::{dilate, dilate_8, erode};
pub use grayscale::{dilate_gray, erode_gray};
pub use junction::{
    BRANCHING_EXTRA, branch_points, branch_points_with_checkerboard, branchings,
    checkerboard_points, end_points, extra_branches,
};
pub use neighbors::{NEIGHBOR_OFFSETS, arm_count, connectivity_number, neighbor_count};
pub use thin::{ThinDirection, skeletonize, thin_pass};
