//! Body measurement input and estimation of missing values

use crate::Result;
use crate::constants::{ARM_LENGTH_RATIO, DEFAULT_STANDING_HEIGHT, SITTING_EYE_HEIGHT_RATIO};
use crate::error::ErgoError;
use tracing::trace;

/// Body measurements in centimetres. Only the standing height is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMeasurements {
    pub standing_height_cm: f64,
    /// Shoulder to fingertip. Estimated from standing height when absent.
    pub arm_length_cm: Option<f64>,
    /// Seat to eye level. Estimated from standing height when absent.
    pub sitting_eye_height_cm: Option<f64>,
}

impl BodyMeasurements {
    /// Create measurements from a standing height alone
    pub fn new(standing_height_cm: f64) -> Self {
        Self {
            standing_height_cm,
            arm_length_cm: None,
            sitting_eye_height_cm: None,
        }
    }

    /// Set a measured arm length
    pub fn with_arm_length(mut self, arm_length_cm: f64) -> Self {
        self.arm_length_cm = Some(arm_length_cm);
        self
    }

    /// Set a measured sitting eye height
    pub fn with_sitting_eye_height(mut self, sitting_eye_height_cm: f64) -> Self {
        self.sitting_eye_height_cm = Some(sitting_eye_height_cm);
        self
    }

    /// Check that every supplied value is a positive finite number
    pub fn validate(&self) -> Result<()> {
        check_positive("standing height", self.standing_height_cm)?;
        if let Some(arm) = self.arm_length_cm {
            check_positive("arm length", arm)?;
        }
        if let Some(eye) = self.sitting_eye_height_cm {
            check_positive("sitting eye height", eye)?;
        }
        Ok(())
    }

    /// Validate and fill in the optional values from standing height
    pub fn resolve(&self) -> Result<ResolvedMeasurements> {
        self.validate()?;

        let standing = self.standing_height_cm;
        let resolved = ResolvedMeasurements {
            standing_height_cm: standing,
            arm_length_cm: self
                .arm_length_cm
                .unwrap_or(standing * ARM_LENGTH_RATIO),
            sitting_eye_height_cm: self
                .sitting_eye_height_cm
                .unwrap_or(standing * SITTING_EYE_HEIGHT_RATIO),
            arm_length_estimated: self.arm_length_cm.is_none(),
            sitting_eye_height_estimated: self.sitting_eye_height_cm.is_none(),
        };

        trace!("Resolved measurements: {:?}", resolved);
        Ok(resolved)
    }
}

impl Default for BodyMeasurements {
    fn default() -> Self {
        Self::new(DEFAULT_STANDING_HEIGHT)
    }
}

/// Measurements with every value present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMeasurements {
    pub standing_height_cm: f64,
    pub arm_length_cm: f64,
    pub sitting_eye_height_cm: f64,
    pub arm_length_estimated: bool,
    pub sitting_eye_height_estimated: bool,
}

fn check_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ErgoError::invalid_input(field, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_values_are_estimated() {
        let resolved = BodyMeasurements::new(180.0).resolve().unwrap();

        assert_eq!(resolved.arm_length_cm, 180.0 * 0.40);
        assert_eq!(resolved.sitting_eye_height_cm, 180.0 * 0.82);
        assert!(resolved.arm_length_estimated);
        assert!(resolved.sitting_eye_height_estimated);
    }

    #[test]
    fn test_supplied_values_are_kept() {
        let resolved = BodyMeasurements::new(160.0)
            .with_arm_length(66.0)
            .with_sitting_eye_height(121.5)
            .resolve()
            .unwrap();

        assert_eq!(resolved.arm_length_cm, 66.0);
        assert_eq!(resolved.sitting_eye_height_cm, 121.5);
        assert!(!resolved.arm_length_estimated);
        assert!(!resolved.sitting_eye_height_estimated);
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(BodyMeasurements::new(bad).validate().is_err());
            assert!(
                BodyMeasurements::new(170.0)
                    .with_arm_length(bad)
                    .validate()
                    .is_err()
            );
            assert!(
                BodyMeasurements::new(170.0)
                    .with_sitting_eye_height(bad)
                    .validate()
                    .is_err()
            );
        }
    }

    #[test]
    fn test_error_names_the_offending_field() {
        let err = BodyMeasurements::new(170.0)
            .with_arm_length(-5.0)
            .resolve()
            .unwrap_err();

        match err {
            ErgoError::InvalidInput { field, value } => {
                assert_eq!(field, "arm length");
                assert_eq!(value, -5.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_uses_default_height() {
        let measurements = BodyMeasurements::default();
        assert_eq!(measurements.standing_height_cm, DEFAULT_STANDING_HEIGHT);
        assert_eq!(measurements.standing_height_cm, 183.0);
        assert!(measurements.arm_length_cm.is_none());
        assert!(measurements.sitting_eye_height_cm.is_none());
    }
}
