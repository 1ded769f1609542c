//! Ergonomic recommendations derived from body measurements
//!
//! Every value is plain arithmetic on the resolved measurements, so the same
//! input always yields the same record.

use crate::Result;
use crate::constants::*;
use crate::measurements::{BodyMeasurements, ResolvedMeasurements};
use tracing::{debug, instrument};

/// Recommended workstation measurements, all in centimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendations {
    /// The measurements the values were derived from
    pub measurements: ResolvedMeasurements,
    pub sitting_desk_height: f64,
    /// Second published formula, reported alongside the primary one
    pub sitting_desk_height_alt: f64,
    pub standing_desk_height: f64,
    pub standing_desk_height_alt: f64,
    pub chair_seat_height: f64,
    pub monitor_distance_min: f64,
    pub monitor_distance_max: f64,
    pub monitor_distance_optimal: f64,
    /// Top edge of the screen, at eye level
    pub monitor_top_height: f64,
    pub monitor_center_height: f64,
    pub keyboard_height: f64,
    /// Always equal to the keyboard height
    pub mouse_height: f64,
}

impl Recommendations {
    /// Derive the recommendations from fully resolved measurements
    pub fn from_resolved(measurements: ResolvedMeasurements) -> Self {
        let standing = measurements.standing_height_cm;
        let arm = measurements.arm_length_cm;
        let eye = measurements.sitting_eye_height_cm;

        let sitting_desk_height = standing / SITTING_DESK_DIVISOR;
        let keyboard_height = sitting_desk_height - KEYBOARD_DROP;

        Self {
            measurements,
            sitting_desk_height,
            sitting_desk_height_alt: standing * SITTING_DESK_ALT_RATIO + SITTING_DESK_ALT_OFFSET,
            standing_desk_height: standing / STANDING_DESK_DIVISOR,
            standing_desk_height_alt: standing * STANDING_DESK_ALT_RATIO
                - STANDING_DESK_ALT_OFFSET,
            chair_seat_height: sitting_desk_height - DESK_TO_SEAT_DROP,
            monitor_distance_min: arm * MONITOR_DISTANCE_MIN_RATIO,
            monitor_distance_max: arm * MONITOR_DISTANCE_MAX_RATIO,
            monitor_distance_optimal: arm * MONITOR_DISTANCE_OPTIMAL_RATIO,
            monitor_top_height: eye,
            monitor_center_height: eye - MONITOR_CENTER_DROP,
            keyboard_height,
            mouse_height: keyboard_height,
        }
    }
}

impl BodyMeasurements {
    /// Validate these measurements and compute the recommendations
    pub fn recommend(&self) -> Result<Recommendations> {
        let resolved = self.resolve()?;
        Ok(Recommendations::from_resolved(resolved))
    }
}

/// Compute recommendations from a standing height and optional measured values.
///
/// Missing values are estimated from the standing height. Fails with
/// [`ErgoError::InvalidInput`](crate::ErgoError::InvalidInput) when any
/// supplied value is not a positive finite number.
#[instrument]
pub fn compute(
    standing_height_cm: f64,
    arm_length_cm: Option<f64>,
    sitting_eye_height_cm: Option<f64>,
) -> Result<Recommendations> {
    let measurements = BodyMeasurements {
        standing_height_cm,
        arm_length_cm,
        sitting_eye_height_cm,
    };
    let recommendations = measurements.recommend()?;

    debug!(
        "Sitting desk {:.1} cm, standing desk {:.1} cm, monitor at {:.1} cm",
        recommendations.sitting_desk_height,
        recommendations.standing_desk_height,
        recommendations.monitor_distance_optimal
    );
    Ok(recommendations)
}
