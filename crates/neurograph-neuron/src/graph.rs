//! Skeleton graph
//!
//! Turns a classified skeleton into a vertex table and an edge table.
//! Every trunk, branch and endpoint pixel (a point of interest) becomes a
//! vertex, numbered from 1 in raster order. Removing the points of
//! interest breaks the skeleton into segments; a segment touched by two
//! vertices becomes an edge between them. Adjacent vertices with the same
//! seed label are joined directly by an edge of length 2.
//!
//! When several candidates connect the same pair of vertices only the
//! shortest is kept.

use std::collections::HashSet;
use std::fmt;

use log::debug;
use neurograph_core::{FPix, Pix, PixelDepth};
use neurograph_morph::NEIGHBOR_OFFSETS;
use neurograph_region::{component_sizes, label_skeleton, label_sums};
use serde::Serialize;

use crate::classify::{ClassifiedSkeleton, check_depth, check_shape};
use crate::error::NeuronResult;

/// Kind of a graph vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VertexKind {
    #[serde(rename = "T")]
    Trunk,
    #[serde(rename = "B")]
    Branch,
    #[serde(rename = "E")]
    Endpoint,
}

impl VertexKind {
    /// One-letter code: `T`, `B` or `E`
    pub fn code(self) -> char {
        match self {
            VertexKind::Trunk => 'T',
            VertexKind::Branch => 'B',
            VertexKind::Endpoint => 'E',
        }
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A point of interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub row: u32,
    pub col: u32,
    /// Nearest-seed label
    pub label: u32,
    pub kind: VertexKind,
}

/// A skeleton path between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// 1-based index of the first vertex; always less than `v2`
    pub v1: u32,
    /// 1-based index of the second vertex
    pub v2: u32,
    /// Pixels on the path, both vertices included
    pub length: u32,
    /// Intensity summed over the same pixels
    pub total_intensity: f64,
}

/// Vertex and edge tables of a skeleton
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NeuronGraph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl NeuronGraph {
    /// Vertex by its 1-based index
    pub fn vertex(&self, index: u32) -> Option<&Vertex> {
        self.vertices.get((index as usize).checked_sub(1)?)
    }

    /// `true` when the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Build the graph of a classified skeleton.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NeuronError::InputShapeMismatch`] if `intensity`
    /// differs in size from the skeleton.
    pub fn from_classified(
        classified: &ClassifiedSkeleton,
        intensity: &FPix,
    ) -> NeuronResult<Self> {
        build_graph(
            &classified.skeleton,
            &classified.labels,
            &classified.trunks,
            &classified.branches,
            &classified.endpoints,
            intensity,
        )
    }
}

/// Build the vertex and edge tables of a skeleton
///
/// # Arguments
///
/// * `skeleton` - 1-bpp skeleton
/// * `labels` - 32-bpp nearest-seed labels
/// * `trunks`, `branches`, `endpoints` - 1-bpp point masks
/// * `intensity` - Values summed along each edge
///
/// # Errors
///
/// Returns error if a mask is not 1 bpp, `labels` is not 32 bpp, or any
/// input differs in size from `skeleton`.
pub fn build_graph(
    skeleton: &Pix,
    labels: &Pix,
    trunks: &Pix,
    branches: &Pix,
    endpoints: &Pix,
    intensity: &FPix,
) -> NeuronResult<NeuronGraph> {
    check_depth(skeleton, PixelDepth::Bit1, "1-bpp skeleton")?;
    check_depth(labels, PixelDepth::Bit32, "32-bpp seed labels")?;
    let dims = skeleton.dimensions();
    for pix in [labels, trunks, branches, endpoints] {
        check_shape(dims, pix.dimensions())?;
    }
    check_shape(dims, intensity.dimensions())?;

    let poi = trunks.or(branches)?.or(endpoints)?;
    let (w, h) = dims;

    let mut vertices = Vec::new();
    let mut positions = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if poi.get_pixel_unchecked(x, y) == 0 {
                continue;
            }
            let kind = if endpoints.get_pixel_unchecked(x, y) != 0 {
                VertexKind::Endpoint
            } else if branches.get_pixel_unchecked(x, y) != 0 {
                VertexKind::Branch
            } else {
                VertexKind::Trunk
            };
            vertices.push(Vertex {
                row: y,
                col: x,
                label: labels.get_pixel_unchecked(x, y),
                kind,
            });
            positions.push((x, y));
        }
    }
    let num_points = vertices.len() as u32;

    // Segments of the skeleton with the points of interest cut out
    let (segments, num_segments) = label_skeleton(&skeleton.and_not(&poi)?)?;
    let lengths = component_sizes(&segments, num_segments)?;
    let magnitudes = label_sums(&segments, num_segments, intensity)?;

    // Vertices occupy 1..=num_points, segments follow; one pixel of zero
    // padding on every side
    let pw = w as usize + 2;
    let mut all_labels = vec![0u32; pw * (h as usize + 2)];
    for y in 0..h {
        for x in 0..w {
            let s = segments.get_pixel_unchecked(x, y);
            if s != 0 {
                all_labels[(y as usize + 1) * pw + x as usize + 1] = s + num_points;
            }
        }
    }
    for (i, &(x, y)) in positions.iter().enumerate() {
        all_labels[(y as usize + 1) * pw + x as usize + 1] = i as u32 + 1;
    }

    let value_at = |v: u32| {
        let (x, y) = positions[(v - 1) as usize];
        intensity.get_pixel_unchecked(x, y) as f64
    };

    let mut candidates = Vec::new();
    let mut touching: Vec<Vec<u32>> = vec![Vec::new(); num_segments as usize];
    for (i, &(x, y)) in positions.iter().enumerate() {
        let p1 = i as u32 + 1;
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let nx = (x as i64 + 1 + dx as i64) as usize;
            let ny = (y as i64 + 1 + dy as i64) as usize;
            let p2 = all_labels[ny * pw + nx];
            if p2 == 0 {
                continue;
            }
            if p2 <= num_points {
                if p1 < p2 && vertices[i].label == vertices[(p2 - 1) as usize].label {
                    candidates.push(Edge {
                        v1: p1,
                        v2: p2,
                        length: 2,
                        total_intensity: value_at(p1) + value_at(p2),
                    });
                }
            } else {
                touching[(p2 - num_points - 1) as usize].push(p1);
            }
        }
    }

    for (s, mut touched) in touching.into_iter().enumerate() {
        touched.sort_unstable();
        touched.dedup();
        for (k, &a) in touched.iter().enumerate() {
            for &b in &touched[k + 1..] {
                candidates.push(Edge {
                    v1: a,
                    v2: b,
                    length: lengths[s] + 2,
                    total_intensity: magnitudes[s] + value_at(a) + value_at(b),
                });
            }
        }
    }
    debug!(
        "build_graph: {} vertices, {} segments, {} edge candidates",
        num_points,
        num_segments,
        candidates.len()
    );

    candidates.sort_by_key(|e| (e.v2, e.v1, e.length));
    let mut seen = HashSet::new();
    let edges: Vec<Edge> = candidates
        .into_iter()
        .filter(|e| seen.insert((e.v1, e.v2)))
        .collect();
    debug!("build_graph: {} edges after deduplication", edges.len());

    Ok(NeuronGraph { vertices, edges })
}
