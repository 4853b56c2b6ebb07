//! Neuron measurement options

use serde::{Deserialize, Serialize};

use crate::error::{NeuronError, NeuronResult};

/// Options for [`crate::measure_neurons`]
///
/// Missing fields take their defaults when deserializing, so a partial
/// JSON document such as `{"fill_holes": false}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeuronOptions {
    /// Fill small holes in the combined skeleton before re-skeletonizing
    pub fill_holes: bool,
    /// Largest hole area (in pixels) that is filled
    pub max_hole_area: i64,
    /// Radius of the disk used to dilate and erode the seeds
    pub seed_disk_radius: f32,
    /// Distance from a seed at or below which a junction counts as a trunk
    pub trunk_distance: f32,
}

impl Default for NeuronOptions {
    fn default() -> Self {
        Self {
            fill_holes: true,
            max_hole_area: 10,
            seed_disk_radius: 1.5,
            trunk_distance: 1.5,
        }
    }
}

impl NeuronOptions {
    /// Check every option value
    ///
    /// # Errors
    ///
    /// Returns [`NeuronError::InvalidParameter`] for a negative hole area,
    /// a disk radius below 1 or not finite, or a negative or non-finite
    /// trunk distance.
    pub fn validate(&self) -> NeuronResult<()> {
        if self.max_hole_area < 0 {
            return Err(NeuronError::InvalidParameter(format!(
                "max_hole_area must be non-negative, got {}",
                self.max_hole_area
            )));
        }
        if !self.seed_disk_radius.is_finite() || self.seed_disk_radius < 1.0 {
            return Err(NeuronError::InvalidParameter(format!(
                "seed_disk_radius must be finite and at least 1, got {}",
                self.seed_disk_radius
            )));
        }
        if !self.trunk_distance.is_finite() || self.trunk_distance < 0.0 {
            return Err(NeuronError::InvalidParameter(format!(
                "trunk_distance must be finite and non-negative, got {}",
                self.trunk_distance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let opts = NeuronOptions::default();
        assert!(opts.validate().is_ok());
        assert!(opts.fill_holes);
        assert_eq!(opts.max_hole_area, 10);
    }

    #[test]
    fn test_rejects_bad_values() {
        let opts = NeuronOptions {
            max_hole_area: -1,
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(NeuronError::InvalidParameter(_))
        ));

        let opts = NeuronOptions {
            seed_disk_radius: 0.5,
            ..Default::default()
        };
        assert!(opts.validate().is_err());

        let opts = NeuronOptions {
            trunk_distance: f32::NAN,
            ..Default::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let opts: NeuronOptions =
            serde_json::from_str(r#"{"fill_holes": false, "max_hole_area": 4}"#).unwrap();
        assert!(!opts.fill_holes);
        assert_eq!(opts.max_hole_area, 4);
        assert_eq!(opts.seed_disk_radius, 1.5);
    }
}
