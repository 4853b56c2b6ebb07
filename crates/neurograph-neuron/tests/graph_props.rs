//! # Property-Based Tests
//!
//! Invariants of the neuron counts and graph over random skeletons.

use std::collections::HashSet;

use neurograph_core::{FPix, Pix, PixelDepth};
use neurograph_neuron::{NeuronOptions, measure_neurons};
use proptest::collection::vec;
use proptest::prelude::*;

fn random_scene() -> impl Strategy<Value = (Pix, Pix)> {
    (6u32..14, 6u32..14).prop_flat_map(|(w, h)| {
        let n = (w * h) as usize;
        (vec(prop::bool::weighted(0.4), n), vec(0u32..40, n)).prop_map(move |(bits, raw)| {
            let skel = Pix::from_data(w, h, PixelDepth::Bit1, bits.into_iter().map(u32::from).collect())
                .expect("skeleton");
            let seeds = raw.into_iter().map(|v| if v < 2 { v + 1 } else { 0 }).collect();
            let seeds = Pix::from_data(w, h, PixelDepth::Bit32, seeds).expect("seeds");
            (skel, seeds)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Edges are ordered, at least two pixels long, and unique per pair.
    /// Length 2 means the two vertices touch and share a seed.
    #[test]
    fn edges_are_well_formed((skel, seeds) in random_scene()) {
        let intensity = FPix::new_with_value(skel.width(), skel.height(), 1.0).expect("intensity");
        let m = measure_neurons(&skel, &seeds, Some(&intensity), &NeuronOptions::default())
            .expect("measure");
        let graph = m.graph.expect("graph");
        let nv = graph.vertices.len() as u32;

        let mut pairs = HashSet::new();
        for e in &graph.edges {
            prop_assert!(1 <= e.v1 && e.v1 < e.v2 && e.v2 <= nv);
            prop_assert!(e.length >= 2);
            prop_assert!(pairs.insert((e.v1, e.v2)));
            if e.length == 2 {
                let a = graph.vertex(e.v1).expect("v1");
                let b = graph.vertex(e.v2).expect("v2");
                prop_assert_eq!(a.label, b.label);
                prop_assert!(a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1);
            }
        }
    }

    /// Every vertex is a reached skeleton pixel.
    #[test]
    fn vertices_are_reached((skel, seeds) in random_scene()) {
        let intensity = FPix::new(skel.width(), skel.height()).expect("intensity");
        let m = measure_neurons(&skel, &seeds, Some(&intensity), &NeuronOptions::default())
            .expect("measure");
        let c = &m.classified;
        for v in &m.graph.expect("graph").vertices {
            prop_assert!(v.label > 0);
            prop_assert!(c.skeleton.is_set(v.col, v.row));
            prop_assert!(c.distances.get_pixel(v.col, v.row).expect("distance").is_finite());
        }
    }

    /// Trunk counts add up the extra branches of the trunk pixels, and
    /// the other counts match their masks.
    #[test]
    fn counts_match_masks((skel, seeds) in random_scene()) {
        let m = measure_neurons(&skel, &seeds, None, &NeuronOptions::default()).expect("measure");
        let c = &m.classified;
        prop_assert_eq!(m.counts.len(), seeds.max_value() as usize);

        let trunk_extra: u32 = c
            .trunks
            .data()
            .iter()
            .zip(c.branchings.data())
            .filter(|&(&t, _)| t != 0)
            .map(|(_, &b)| b)
            .sum();
        prop_assert_eq!(m.counts.trunks.iter().sum::<u32>(), trunk_extra);
        prop_assert_eq!(
            m.counts.branches.iter().sum::<u32>() as u64,
            c.branches.count_pixels()
        );
        prop_assert_eq!(
            m.counts.endpoints.iter().sum::<u32>() as u64,
            c.endpoints.count_pixels()
        );
        for (&t, &b) in c.trunks.data().iter().zip(c.branchings.data()) {
            if t != 0 {
                prop_assert!(b == 1 || b == 2);
            }
        }
    }
}
