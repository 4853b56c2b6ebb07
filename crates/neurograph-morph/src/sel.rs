//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological operations.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - part of the neighborhood
    Hit = 1,
}

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for morphological operations.
/// The origin (cx, cy) is the reference point for the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
}

impl Sel {
    /// Create a new structuring element filled with don't-care elements.
    ///
    /// The origin is placed at the center.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Sel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width * height) as usize],
        })
    }

    /// Create a square structuring element with all hits
    ///
    /// `create_square(3)` is the 8-connected neighborhood.
    pub fn create_square(size: u32) -> MorphResult<Self> {
        let mut sel = Self::new(size, size)?;
        sel.data.fill(SelElement::Hit);
        Ok(sel)
    }

    /// Create a disk structuring element
    ///
    /// Contains every offset `(dx, dy)` with `dx² + dy² <= radius²`, so a
    /// radius of 1.5 gives the full 3x3 square and a radius of 1.0 gives the
    /// 4-connected cross.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidSel`] if the radius is negative or not finite.
    pub fn create_disk(radius: f32) -> MorphResult<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(MorphError::InvalidSel(format!(
                "disk radius must be finite and non-negative, got {}",
                radius
            )));
        }

        let half = radius.floor() as i32;
        let size = (2 * half + 1) as u32;
        let mut sel = Self::new(size, size)?;
        let r2 = radius * radius;
        for dy in -half..=half {
            for dx in -half..=half {
                if (dx * dx + dy * dy) as f32 <= r2 {
                    sel.set_element((dx + half) as u32, (dy + half) as u32, SelElement::Hit);
                }
            }
        }
        Ok(sel)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set an element at (x, y); out-of-range positions are ignored
    #[inline]
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = elem;
        }
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == SelElement::Hit {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}
