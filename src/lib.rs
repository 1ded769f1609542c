//! Ergonomic workstation recommendations from body measurements
//!
//! Given a standing height, and optionally a measured arm length and sitting
//! eye height, this library computes recommended desk, chair, monitor and
//! keyboard measurements using fixed anthropometric ratios. The results can
//! be presented as a plain-text report or drawn into a PDF with lopdf.
//!
//! ```
//! use ergo_desk::{Report, compute};
//!
//! let rec = compute(183.0, None, None)?;
//! assert!((rec.sitting_desk_height - 73.79).abs() < 0.01);
//! assert_eq!(rec.mouse_height, rec.keyboard_height);
//!
//! let report = Report::from_recommendations(&rec);
//! assert!(report.to_string().contains("Sitting desk height"));
//! # Ok::<(), ergo_desk::ErgoError>(())
//! ```

pub mod calculator;
pub mod constants;
pub mod error;
pub mod font;
pub mod guidelines;
pub mod measurements;
mod pdf;
pub mod report;
pub mod style;
pub mod text;

pub use calculator::{Recommendations, compute};
pub use error::{ErgoError, Result};
pub use guidelines::{ComfortBand, Guideline};
pub use measurements::{BodyMeasurements, ResolvedMeasurements};
pub use font::{FontMetrics, HelveticaMetrics};
pub use pdf::{
    ReportDrawing, new_report_document, render_report, render_report_with_metrics,
    save_report_pdf,
};
pub use report::{Entry, Report, Section};
pub use style::{Color, ReportStyle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_to_text_report() {
        let rec = BodyMeasurements::new(170.0)
            .with_arm_length(70.0)
            .with_sitting_eye_height(145.0)
            .recommend()
            .unwrap();
        let text = Report::from(&rec).to_string();

        assert!(text.contains("52.5-73.5 cm"));
        assert!(text.contains("63.0 cm (arm's length)"));
        assert!(text.contains("~135.0 cm from floor"));
    }

    #[test]
    fn test_invalid_input_produces_no_report() {
        let result = BodyMeasurements::new(183.0)
            .with_sitting_eye_height(-1.0)
            .recommend()
            .map(|rec| Report::from(&rec));
        match result {
            Err(ErgoError::InvalidInput { field, value }) => {
                assert_eq!(field, "sitting eye height");
                assert_eq!(value, -1.0);
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Recommendations>();
        assert_send_sync::<Report>();
        assert_send_sync::<ReportStyle>();
    }
}
