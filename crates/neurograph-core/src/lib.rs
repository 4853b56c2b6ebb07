//! neurograph-core - Basic grid structures for skeleton analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the neurograph crates:
//!
//! - [`Pix`] / [`PixMut`] - Integer grid (immutable / mutable), used both
//!   for 1-bpp masks and 32-bpp label images
//! - [`FPix`] - Floating-point grid for intensities and distance fields
//!
//! All grids are row-major with the origin at the top-left corner.
//! Coordinates are passed as `(x, y)`, i.e. (column, row).

pub mod error;
pub mod fpix;
pub mod pix;

pub use error::{Error, Result};
pub use fpix::FPix;
pub use pix::{Pix, PixMut, PixelDepth};
