//! Measurement names
//!
//! Per-seed counts are stored under `Neuron_<Feature>_<SkeletonName>`.

/// Measurement category
pub const CATEGORY: &str = "Neuron";

/// Extra branches leaving each seed
pub const NUMBER_TRUNKS: &str = "NumberTrunks";

/// Branch points away from the seed
pub const NUMBER_NON_TRUNK_BRANCHES: &str = "NumberNonTrunkBranches";

/// Free ends of the branches
pub const NUMBER_BRANCH_ENDS: &str = "NumberBranchEnds";

/// Every feature, in the order they are reported
pub const ALL_FEATURES: [&str; 3] = [NUMBER_TRUNKS, NUMBER_NON_TRUNK_BRANCHES, NUMBER_BRANCH_ENDS];

/// Full measurement name of `feature` for the named skeleton image
pub fn feature_name(feature: &str, skeleton_name: &str) -> String {
    format!("{CATEGORY}_{feature}_{skeleton_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_name() {
        assert_eq!(
            feature_name(NUMBER_TRUNKS, "DNA"),
            "Neuron_NumberTrunks_DNA"
        );
        assert_eq!(ALL_FEATURES.len(), 3);
    }
}
