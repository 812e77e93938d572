//! Collision tunables.

use crate::error::ConfigError;

/// Tolerances and limits for the collision engine.
///
/// All lengths are in sphere space, where the ellipsoid is a unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionConfig {
    /// Slack for on-plane and inside-edge tests.
    pub epsilon: f32,
    /// Gap left between the sphere and a contact after moving up to it.
    pub back_off: f32,
    /// Upper bound on slide passes per query.
    pub max_slide_iterations: usize,
    /// Largest upward ratio (`y / |v|`) of a retained slide direction that the
    /// pulse-jump filter treats as noise. Steeper climbs are kept; `1.0`
    /// suppresses every upward flip.
    pub pulse_jump_threshold: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            epsilon: 1.0e-4,
            back_off: 1.0e-3,
            max_slide_iterations: 5,
            pulse_jump_threshold: 0.1,
        }
    }
}

impl CollisionConfig {
    pub fn with_max_slide_iterations(mut self, iterations: usize) -> Self {
        self.max_slide_iterations = iterations;
        self
    }

    pub fn with_pulse_jump_threshold(mut self, threshold: f32) -> Self {
        self.pulse_jump_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("epsilon", self.epsilon),
            ("back_off", self.back_off),
            ("pulse_jump_threshold", self.pulse_jump_threshold),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        if self.max_slide_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(CollisionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_iterations_and_bad_tolerances() {
        let zero = CollisionConfig::default().with_max_slide_iterations(0);
        assert_eq!(zero.validate(), Err(ConfigError::ZeroIterations));

        let negative = CollisionConfig {
            back_off: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            negative.validate(),
            Err(ConfigError::InvalidTolerance { name: "back_off", .. })
        ));
    }
}
