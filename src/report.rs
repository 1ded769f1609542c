//! Presentation of recommendations as a sectioned report
//!
//! A [`Report`] is plain data: titled sections holding labelled values and
//! advisory notes. It renders to text through `Display` and to PDF through
//! [`ReportDrawing`](crate::ReportDrawing).

use crate::calculator::Recommendations;
use crate::constants::*;
use crate::guidelines::{ComfortBand, Guideline};
use std::fmt;
use tracing::trace;

/// Title used for reports built from recommendations
pub const REPORT_TITLE: &str = "Ergonomic workstation recommendations";

pub const MEASUREMENTS_TITLE: &str = "Your measurements";
pub const DESK_TITLE: &str = "Desk & chair";
pub const KEYBOARD_MOUSE_TITLE: &str = "Keyboard & mouse";
pub const SUMMARY_TITLE: &str = "Quick Setup Summary";

const LABEL_WIDTH: usize = 30;

/// A renderer-agnostic report
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Report {
    /// Create an empty report
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section to the report
    pub fn add_section(mut self, section: Section) -> Self {
        trace!(
            "Adding section '{}' with {} entries",
            section.title,
            section.entries.len()
        );
        self.sections.push(section);
        self
    }

    /// Find a section by title
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Build the full report for a set of recommendations
    pub fn from_recommendations(rec: &Recommendations) -> Self {
        let m = &rec.measurements;
        let sitting_band = ComfortBand::new(rec.sitting_desk_height, SITTING_DESK_TOLERANCE);
        let standing_band = ComfortBand::new(rec.standing_desk_height, STANDING_DESK_TOLERANCE);

        let measurements = Section::new(MEASUREMENTS_TITLE)
            .add_value("Standing height", cm(m.standing_height_cm))
            .add_value(
                "Arm length",
                estimated(cm(m.arm_length_cm), m.arm_length_estimated),
            )
            .add_value(
                "Sitting eye height",
                estimated(cm(m.sitting_eye_height_cm), m.sitting_eye_height_estimated),
            );

        let desk = Section::new(DESK_TITLE)
            .add_value("Sitting desk height", cm(rec.sitting_desk_height))
            .add_value("Sitting desk (alternative)", cm(rec.sitting_desk_height_alt))
            .add_value("Sitting desk comfort range", sitting_band.range())
            .add_value("Standing desk height", cm(rec.standing_desk_height))
            .add_value("Standing desk (alternative)", cm(rec.standing_desk_height_alt))
            .add_value("Standing desk comfort range", standing_band.range())
            .add_value("Chair seat height", cm(rec.chair_seat_height))
            .add_notes(Guideline::Chair.advice());

        let mut monitor = Section::new(Guideline::Monitor.title())
            .add_value(
                "Distance from eyes",
                format!("{} (arm's length)", cm(rec.monitor_distance_optimal)),
            )
            .add_value(
                "Distance range",
                format!(
                    "{:.1}-{:.1} cm",
                    rec.monitor_distance_min, rec.monitor_distance_max
                ),
            )
            .add_value(
                "Top edge height",
                format!("{} from floor", cm(rec.monitor_top_height)),
            )
            .add_value(
                "Centre height",
                format!("~{} from floor", cm(rec.monitor_center_height)),
            );
        if !(ANSI_MIN_MONITOR_DISTANCE..=ANSI_MAX_MONITOR_DISTANCE)
            .contains(&rec.monitor_distance_optimal)
        {
            monitor = monitor.add_note(format!(
                "Distance of {} is outside the ANSI {}-{} cm range",
                cm(rec.monitor_distance_optimal),
                ANSI_MIN_MONITOR_DISTANCE,
                ANSI_MAX_MONITOR_DISTANCE
            ));
        }
        let monitor = monitor.add_notes(Guideline::Monitor.advice());

        let dual = Section::new(Guideline::DualMonitor.title())
            .add_value(
                "Vertical monitor top edge",
                format!("{} (same as horizontal)", cm(rec.monitor_top_height)),
            )
            .add_value(
                "Vertical monitor distance",
                format!("{} (same as primary)", cm(rec.monitor_distance_optimal)),
            )
            .add_notes(Guideline::DualMonitor.advice());

        let viewing = Section::new(Guideline::ViewingStandard.title())
            .add_notes(Guideline::ViewingStandard.advice());

        let keyboard = Section::new(KEYBOARD_MOUSE_TITLE)
            .add_value(
                "Keyboard height",
                format!("{} (at home row)", cm(rec.keyboard_height)),
            )
            .add_value("Keyboard from desk edge", format!("{KEYBOARD_EDGE_OFFSET} cm"))
            .add_value(
                "Mouse height",
                format!("{} (same as keyboard)", cm(rec.mouse_height)),
            )
            .add_notes(Guideline::Keyboard.advice())
            .add_notes(Guideline::Mouse.advice());

        let posture =
            Section::new(Guideline::Posture.title()).add_notes(Guideline::Posture.advice());
        let lighting =
            Section::new(Guideline::Lighting.title()).add_notes(Guideline::Lighting.advice());

        let summary = Section::new(SUMMARY_TITLE)
            .add_value("Height", format!("{:.0} cm", m.standing_height_cm))
            .add_value("Sitting desk height", sitting_band.to_string())
            .add_value("Standing desk height", standing_band.to_string())
            .add_value("Chair seat height", cm(rec.chair_seat_height))
            .add_value(
                "Monitor distance",
                format!("{} (arm's length)", cm(rec.monitor_distance_optimal)),
            )
            .add_value(
                "Monitor top height",
                format!("{} (at/below eye level)", cm(rec.monitor_top_height)),
            )
            .add_value("Monitor tilt", "10-20° downward")
            .add_value(
                "Keyboard height",
                format!("{} (elbow height)", cm(rec.keyboard_height)),
            )
            .add_value("Keyboard from edge", format!("{KEYBOARD_EDGE_OFFSET} cm"))
            .add_value(
                "Mouse height",
                format!("{} (same as keyboard)", cm(rec.mouse_height)),
            )
            .add_value("Elbow angle", "90-110°")
            .add_value("Knee angle", "90°")
            .add_value("Viewing angle", "10-20° downward")
            .add_value("Ambient lighting", "500 lux");

        Report::new(REPORT_TITLE)
            .add_section(measurements)
            .add_section(desk)
            .add_section(monitor)
            .add_section(dual)
            .add_section(viewing)
            .add_section(keyboard)
            .add_section(posture)
            .add_section(lighting)
            .add_section(summary)
    }
}

impl From<&Recommendations> for Report {
    fn from(rec: &Recommendations) -> Self {
        Self::from_recommendations(rec)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        for section in &self.sections {
            writeln!(f)?;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}

/// A titled group of entries
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Section {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Add a labelled value
    pub fn add_value<L: Into<String>, V: Into<String>>(mut self, label: L, value: V) -> Self {
        self.entries.push(Entry::Value {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Add a free-standing note
    pub fn add_note<S: Into<String>>(mut self, note: S) -> Self {
        self.entries.push(Entry::Note(note.into()));
        self
    }

    /// Add several notes at once
    pub fn add_notes(self, notes: &[&str]) -> Self {
        notes.iter().fold(self, |section, note| section.add_note(*note))
    }

    /// Look up the value for a label
    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Value { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "-".repeat(self.title.chars().count()))?;
        for entry in &self.entries {
            match entry {
                Entry::Value { label, value } => {
                    writeln!(f, "  {label:<width$} {value}", width = LABEL_WIDTH)?
                }
                Entry::Note(note) => writeln!(f, "  - {note}")?,
            }
        }
        Ok(())
    }
}

/// One line of a section
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Value { label: String, value: String },
    Note(String),
}

fn cm(value: f64) -> String {
    format!("{value:.1} cm")
}

fn estimated(text: String, is_estimated: bool) -> String {
    if is_estimated {
        format!("{text} (estimated)")
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute;

    fn report_for(height: f64) -> Report {
        Report::from_recommendations(&compute(height, None, None).unwrap())
    }

    #[test]
    fn test_report_has_all_sections() {
        let report = report_for(183.0);
        let titles: Vec<&str> = report.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Your measurements",
                "Desk & chair",
                "Monitor",
                "Dual monitor setup",
                "ISO viewing standard",
                "Keyboard & mouse",
                "Posture checkpoints",
                "Lighting",
                "Quick Setup Summary",
            ]
        );
    }

    #[test]
    fn test_desk_comfort_ranges() {
        let report = report_for(183.0);
        let desk = report.section(DESK_TITLE).unwrap();

        assert_eq!(desk.value("Sitting desk height"), Some("73.8 cm"));
        assert_eq!(desk.value("Sitting desk comfort range"), Some("71.8-75.8 cm"));
        assert_eq!(desk.value("Standing desk height"), Some("115.8 cm"));
        assert_eq!(desk.value("Standing desk comfort range"), Some("112.8-118.8 cm"));
        assert_eq!(desk.value("Chair seat height"), Some("45.8 cm"));
    }

    #[test]
    fn test_monitor_values_and_ansi_note() {
        let report = report_for(183.0);
        let monitor = report.section("Monitor").unwrap();

        assert_eq!(monitor.value("Distance range"), Some("54.9-76.9 cm"));
        assert_eq!(
            monitor.value("Distance from eyes"),
            Some("65.9 cm (arm's length)")
        );
        assert!(monitor.entries.contains(&Entry::Note(
            "Minimum 50 cm, maximum 100 cm per ANSI standards".to_string()
        )));
        assert!(!monitor.to_string().contains("is outside the ANSI"));
    }

    #[test]
    fn test_short_arm_is_flagged_against_ansi_range() {
        let rec = compute(160.0, Some(50.0), None).unwrap();
        let report = Report::from(&rec);
        let monitor = report.section("Monitor").unwrap();
        assert!(monitor.to_string().contains("45.0 cm is outside the ANSI 50-100 cm range"));
    }

    #[test]
    fn test_dual_monitor_reuses_primary_placement() {
        let rec = compute(170.0, Some(70.0), Some(145.0)).unwrap();
        let report = Report::from(&rec);
        let dual = report.section("Dual monitor setup").unwrap();

        assert_eq!(
            dual.value("Vertical monitor top edge"),
            Some("145.0 cm (same as horizontal)")
        );
        assert_eq!(
            dual.value("Vertical monitor distance"),
            Some("63.0 cm (same as primary)")
        );
        let text = dual.to_string();
        assert!(text.contains("portrait"));
        assert!(text.contains("50/50 split"));
        assert!(text.contains("80/20 split"));
    }

    #[test]
    fn test_viewing_standard_gaze_angles() {
        let report = report_for(183.0);
        let text = report.section("ISO viewing standard").unwrap().to_string();
        assert!(text.contains("-35° gaze angle"));
        assert!(text.contains("-20° to -50°"));
    }

    #[test]
    fn test_keyboard_and_mouse() {
        let report = report_for(183.0);
        let keyboard = report.section(KEYBOARD_MOUSE_TITLE).unwrap();

        assert_eq!(keyboard.value("Keyboard height"), Some("71.8 cm (at home row)"));
        assert_eq!(keyboard.value("Keyboard from desk edge"), Some("5 cm"));
        assert_eq!(keyboard.value("Mouse height"), Some("71.8 cm (same as keyboard)"));
        assert!(keyboard.to_string().contains("Place 5 cm from desk edge"));
    }

    #[test]
    fn test_posture_and_lighting_figures() {
        let report = report_for(183.0);
        let posture = report.section("Posture checkpoints").unwrap().to_string();
        assert!(posture.contains("Elbows at 90-110° angle"));
        assert!(posture.contains("2-5 cm gap between seat edge and back of knees"));

        let lighting = report.section("Lighting").unwrap().to_string();
        assert!(lighting.contains("300-500 lux"));
        assert!(lighting.contains("20-20-20 rule"));
    }

    #[test]
    fn test_summary_table() {
        let report = report_for(183.0);
        let summary = report.section(SUMMARY_TITLE).unwrap();

        assert_eq!(summary.value("Height"), Some("183 cm"));
        assert_eq!(summary.value("Sitting desk height"), Some("73.8 cm (±2 cm)"));
        assert_eq!(summary.value("Standing desk height"), Some("115.8 cm (±3 cm)"));
        assert_eq!(summary.value("Monitor top height"), Some("150.1 cm (at/below eye level)"));
        assert_eq!(summary.value("Keyboard from edge"), Some("5 cm"));
        assert_eq!(summary.value("Ambient lighting"), Some("500 lux"));
    }

    #[test]
    fn test_estimated_inputs_are_marked() {
        let report = report_for(170.0);
        let inputs = report.section(MEASUREMENTS_TITLE).unwrap();
        assert_eq!(inputs.value("Arm length"), Some("68.0 cm (estimated)"));

        let measured = compute(170.0, Some(70.0), Some(145.0)).unwrap();
        let report = Report::from(&measured);
        let inputs = report.section(MEASUREMENTS_TITLE).unwrap();
        assert_eq!(inputs.value("Arm length"), Some("70.0 cm"));
        assert_eq!(inputs.value("Sitting eye height"), Some("145.0 cm"));
    }

    #[test]
    fn test_text_rendering() {
        let text = report_for(183.0).to_string();
        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Posture checkpoints\n-------------------\n"));
        assert!(text.contains("Vertical monitor top edge"));
        assert!(text.contains("(±3 cm)"));
        assert!(text.contains("  - Use negative slope if possible"));
    }

    #[test]
    fn test_default_height_report_covers_full_guidance() {
        let text = report_for(DEFAULT_STANDING_HEIGHT).to_string();
        for needle in [
            "Vertical",
            "portrait",
            "gaze",
            "-35",
            "Summary",
            "100 cm",
            "5 cm from",
        ] {
            assert!(text.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn test_section_value_lookup_ignores_notes() {
        let section = Section::new("Misc")
            .add_note("Seat height")
            .add_value("Seat height", "45.0 cm");
        assert_eq!(section.value("Seat height"), Some("45.0 cm"));
        assert_eq!(section.value("Missing"), None);
    }
}
