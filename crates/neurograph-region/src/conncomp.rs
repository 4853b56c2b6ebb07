//! Connected component analysis
//!
//! Labels connected components in binary images using a Union-Find
//! (disjoint set) structure. Labels are numbered 1..n in raster order of
//! each component's first pixel.

use crate::error::{RegionError, RegionResult};
use neurograph_core::{Pix, PixelDepth};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// `(dx, dy)` offsets of the neighbors under this connectivity.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        const FOUR: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        const EIGHT: [(i32, i32); 8] = [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        match self {
            ConnectivityType::FourWay => &FOUR,
            ConnectivityType::EightWay => &EIGHT,
        }
    }
}

/// Disjoint-set forest over pixel indices
pub(crate) struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    pub(crate) fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }

    /// Write 1..n labels for the pixels in `members`, numbered in raster
    /// order of each set's first member.
    pub(crate) fn into_labels(mut self, template: &Pix, members: &[bool]) -> (Pix, u32) {
        let mut out = template.create_template_with_depth(PixelDepth::Bit32).into_mut();
        let mut root_label = vec![0u32; members.len()];
        let mut next = 0u32;
        for (idx, &member) in members.iter().enumerate() {
            if !member {
                continue;
            }
            let root = self.find(idx);
            if root_label[root] == 0 {
                next += 1;
                root_label[root] = next;
            }
            out.data_mut()[idx] = root_label[root];
        }
        (out.into(), next)
    }
}

/// Label all connected components in a binary image
///
/// # Arguments
///
/// * `pix` - 1-bpp input
/// * `connectivity` - Connectivity type
///
/// # Returns
///
/// A 32-bpp image where each foreground pixel holds its component label,
/// and the number of components.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if `pix` is not 1 bpp.
pub fn label_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<(Pix, u32)> {
    check_binary(pix)?;

    let w = pix.width() as i64;
    let h = pix.height() as i64;
    let data = pix.data();
    let members: Vec<bool> = data.iter().map(|&v| v != 0).collect();
    let mut uf = UnionFind::new(data.len());

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            if !members[idx] {
                continue;
            }
            for &(dx, dy) in connectivity.offsets() {
                let (nx, ny) = (x + dx as i64, y + dy as i64);
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let nidx = (ny * w + nx) as usize;
                if members[nidx] {
                    uf.union(idx, nidx);
                }
            }
        }
    }

    Ok(uf.into_labels(pix, &members))
}

/// Count the number of connected components
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] if `pix` is not 1 bpp.
pub fn count_components(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<u32> {
    let (_, count) = label_connected_components(pix, connectivity)?;
    Ok(count)
}

pub(crate) fn check_binary(pix: &Pix) -> RegionResult<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(RegionError::UnsupportedDepth {
            expected: "1-bit",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

pub(crate) fn check_labels(pix: &Pix) -> RegionResult<()> {
    if pix.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit (labeled image)",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_test::{pix_from_ascii, pix_to_ascii};

    #[test]
    fn test_four_vs_eight() {
        let pix = pix_from_ascii(&["x.x", ".x.", "x.x"]).unwrap();
        assert_eq!(count_components(&pix, ConnectivityType::FourWay).unwrap(), 5);
        assert_eq!(count_components(&pix, ConnectivityType::EightWay).unwrap(), 1);
    }

    #[test]
    fn test_raster_order_labels() {
        let pix = pix_from_ascii(&["..xx", "x...", "x.x."]).unwrap();
        let (labels, n) = label_connected_components(&pix, ConnectivityType::FourWay).unwrap();
        assert_eq!(n, 3);
        assert_eq!(pix_to_ascii(&labels), ["..11", "2...", "2.3."]);
    }

    #[test]
    fn test_u_shape_merges() {
        // Two arms that only meet at the bottom get one label
        let pix = pix_from_ascii(&["x.x", "x.x", "xxx"]).unwrap();
        let (labels, n) = label_connected_components(&pix, ConnectivityType::FourWay).unwrap();
        assert_eq!(n, 1);
        assert_eq!(labels.get_pixel(2, 0), Some(1));
    }

    #[test]
    fn test_rejects_labels() {
        let labels = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(count_components(&labels, ConnectivityType::EightWay).is_err());
    }
}
