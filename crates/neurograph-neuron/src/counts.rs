//! Per-seed aggregation of classified points

use serde::Serialize;

use crate::classify::ClassifiedSkeleton;

/// Trunk, branch and endpoint counts of one seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SeedCounts {
    pub trunks: u32,
    pub branches: u32,
    pub endpoints: u32,
}

/// Counts for every seed label; entry `i` belongs to label `i + 1`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PerSeedCounts {
    /// Extra branches summed over the trunk pixels of each seed
    pub trunks: Vec<u32>,
    /// Non-trunk branch points per seed
    pub branches: Vec<u32>,
    /// Branch ends per seed
    pub endpoints: Vec<u32>,
}

impl PerSeedCounts {
    /// Aggregate a classification by nearest-seed label.
    ///
    /// A four-way trunk junction contributes two trunks, a three-way one
    /// contributes one.
    pub fn from_classified(classified: &ClassifiedSkeleton) -> Self {
        let n = classified.num_seeds as usize;
        let mut counts = Self {
            trunks: vec![0; n],
            branches: vec![0; n],
            endpoints: vec![0; n],
        };

        for (idx, &label) in classified.labels.data().iter().enumerate() {
            if label == 0 || label as usize > n {
                continue;
            }
            let slot = label as usize - 1;
            if classified.trunks.data()[idx] != 0 {
                counts.trunks[slot] += classified.branchings.data()[idx];
            }
            counts.branches[slot] += classified.branches.data()[idx];
            counts.endpoints[slot] += classified.endpoints.data()[idx];
        }
        counts
    }

    /// Number of seeds covered
    pub fn len(&self) -> usize {
        self.trunks.len()
    }

    /// `true` when there are no seeds
    pub fn is_empty(&self) -> bool {
        self.trunks.is_empty()
    }

    /// Counts of the seed with the given label, or `None` if out of range
    pub fn get(&self, label: u32) -> Option<SeedCounts> {
        let slot = (label as usize).checked_sub(1)?;
        Some(SeedCounts {
            trunks: *self.trunks.get(slot)?,
            branches: *self.branches.get(slot)?,
            endpoints: *self.endpoints.get(slot)?,
        })
    }
}
