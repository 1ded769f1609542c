//! Comfort bands and fixed ergonomic guidance

use std::fmt;

/// A recommended value with a symmetric comfort tolerance, in centimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortBand {
    pub nominal: f64,
    pub tolerance: f64,
}

impl ComfortBand {
    /// Create a band around `nominal`
    pub fn new(nominal: f64, tolerance: f64) -> Self {
        Self {
            nominal,
            tolerance: tolerance.abs(),
        }
    }

    pub fn low(&self) -> f64 {
        self.nominal - self.tolerance
    }

    pub fn high(&self) -> f64 {
        self.nominal + self.tolerance
    }

    /// Whether a measured value falls inside the band (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low() && value <= self.high()
    }

    /// The adjustment range as text, e.g. `71.8-75.8 cm`
    pub fn range(&self) -> String {
        format!("{:.1}-{:.1} cm", self.low(), self.high())
    }
}

impl fmt::Display for ComfortBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} cm (±{} cm)", self.nominal, self.tolerance)
    }
}

/// Groups of advice that do not depend on the computed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guideline {
    Chair,
    Monitor,
    DualMonitor,
    ViewingStandard,
    Keyboard,
    Mouse,
    Posture,
    Lighting,
}

impl Guideline {
    /// Every guideline group, in report order
    pub const ALL: [Guideline; 8] = [
        Guideline::Chair,
        Guideline::Monitor,
        Guideline::DualMonitor,
        Guideline::ViewingStandard,
        Guideline::Keyboard,
        Guideline::Mouse,
        Guideline::Posture,
        Guideline::Lighting,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Guideline::Chair => "Chair",
            Guideline::Monitor => "Monitor",
            Guideline::DualMonitor => "Dual monitor setup",
            Guideline::ViewingStandard => "ISO viewing standard",
            Guideline::Keyboard => "Keyboard",
            Guideline::Mouse => "Mouse",
            Guideline::Posture => "Posture checkpoints",
            Guideline::Lighting => "Lighting",
        }
    }

    /// The fixed advice for this group
    pub fn advice(self) -> &'static [&'static str] {
        match self {
            Guideline::Chair => CHAIR_ADVICE,
            Guideline::Monitor => MONITOR_ADVICE,
            Guideline::DualMonitor => DUAL_MONITOR_ADVICE,
            Guideline::ViewingStandard => VIEWING_STANDARD_ADVICE,
            Guideline::Keyboard => KEYBOARD_ADVICE,
            Guideline::Mouse => MOUSE_ADVICE,
            Guideline::Posture => POSTURE_CHECKPOINTS,
            Guideline::Lighting => LIGHTING_ADVICE,
        }
    }
}

pub const CHAIR_ADVICE: &[&str] = &[
    "Feet flat on the floor, knees at 90°",
    "Knees slightly lower than hips",
];

pub const MONITOR_ADVICE: &[&str] = &[
    "Minimum 50 cm, maximum 100 cm per ANSI standards",
    "Top edge at or 0-8 cm below eye level",
    "Viewing angle: 10-20° downward tilt",
];

pub const DUAL_MONITOR_ADVICE: &[&str] = &[
    "Vertical/portrait monitor: top never higher than eye level to avoid neck strain",
    "Option A, equal usage (50/50 split): both monitors centred in front of you",
    "Option A: inner edges touching or 2-5 cm apart",
    "Option A: angle both slightly concave, 15-30° toward you",
    "Option A: same height, same distance",
    "Option B, primary + secondary (80/20 split): primary (horizontal) centred in front of body",
    "Option B: secondary (vertical) to the dominant eye side",
    "Option B: secondary angled 15-30° inward",
    "Option B: both at the same height and distance",
];

pub const VIEWING_STANDARD_ADVICE: &[&str] = &[
    "Optimal: -35° gaze angle from horizon",
    "Range: -20° to -50° acceptable",
    "Avoid 0° (horizontal): eye strain",
    "Avoid -60° (too low): neck strain",
];

pub const KEYBOARD_ADVICE: &[&str] = &[
    "Should match elbow height when seated",
    "Place 5 cm from desk edge",
    "Use negative slope if possible",
];

pub const MOUSE_ADVICE: &[&str] = &[
    "Close to keyboard, minimal reaching",
    "In line with keyboard (not higher or lower)",
];

pub const POSTURE_CHECKPOINTS: &[&str] = &[
    "Elbows at 90-110° angle",
    "Forearms parallel to floor",
    "Wrists neutral (straight line from forearm)",
    "Feet flat on floor (or footrest)",
    "Knees at 90°, slightly below hips",
    "Lower back supported by lumbar cushion",
    "2-5 cm gap between seat edge and back of knees",
];

pub const LIGHTING_ADVICE: &[&str] = &[
    "Ambient: 300-500 lux (500 optimal)",
    "Monitor brightness: match room brightness",
    "Position: monitor at right angles to windows",
    "Tilt screen to avoid glare",
    "20-20-20 rule: every 20 min, look 6 m away for 20 sec",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds() {
        let band = ComfortBand::new(73.8, 2.0);
        assert!((band.low() - 71.8).abs() < 1e-9);
        assert!((band.high() - 75.8).abs() < 1e-9);
        assert!(band.contains(72.0));
        assert!(band.contains(75.7));
        assert!(!band.contains(76.0));
        assert_eq!(band.range(), "71.8-75.8 cm");
    }

    #[test]
    fn test_band_negative_tolerance_is_normalized() {
        let band = ComfortBand::new(45.0, -1.0);
        assert_eq!(band.tolerance, 1.0);
    }

    #[test]
    fn test_band_display() {
        let band = ComfortBand::new(73.790_322, 2.0);
        assert_eq!(band.to_string(), "73.8 cm (±2 cm)");
    }

    #[test]
    fn test_every_guideline_has_advice() {
        for guideline in Guideline::ALL {
            assert!(!guideline.title().is_empty());
            assert!(!guideline.advice().is_empty());
        }
    }
}
