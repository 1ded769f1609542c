//! Print ergonomic workstation recommendations
//!
//! Usage:
//! ```
//! cargo run --bin ergo-desk -- --height 183 [--arm-length 74] [--eye-height 150] [--pdf report.pdf]
//! ```

use clap::Parser;
use ergo_desk::constants::DEFAULT_STANDING_HEIGHT;
use ergo_desk::font::TtfFontMetrics;
use ergo_desk::{
    BodyMeasurements, FontMetrics, HelveticaMetrics, Report, ReportStyle, save_report_pdf,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the recommendation report
#[derive(Parser, Debug)]
#[command(
    name = "ergo-desk",
    about = "Computes desk, chair, monitor and keyboard measurements from body dimensions",
    long_about = None
)]
struct Args {
    /// Standing height in cm
    #[arg(long, default_value_t = DEFAULT_STANDING_HEIGHT)]
    height: f64,

    /// Arm length in cm (estimated from height when omitted)
    #[arg(long)]
    arm_length: Option<f64>,

    /// Sitting eye height in cm (estimated from height when omitted)
    #[arg(long)]
    eye_height: Option<f64>,

    /// Also write the report as a PDF to this path
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// TrueType font used to measure text when wrapping the PDF report
    #[arg(long, requires = "pdf")]
    metrics_font: Option<PathBuf>,
}

fn run(args: Args) -> ergo_desk::Result<()> {
    let mut measurements = BodyMeasurements::new(args.height);
    if let Some(arm) = args.arm_length {
        measurements = measurements.with_arm_length(arm);
    }
    if let Some(eye) = args.eye_height {
        measurements = measurements.with_sitting_eye_height(eye);
    }

    let recommendations = measurements.recommend()?;
    let report = Report::from_recommendations(&recommendations);
    print!("{report}");

    if let Some(path) = args.pdf {
        let metrics: Box<dyn FontMetrics> = match &args.metrics_font {
            Some(font_path) => Box::new(TtfFontMetrics::new(std::fs::read(font_path)?)?),
            None => Box::new(HelveticaMetrics),
        };
        save_report_pdf(&report, &ReportStyle::default(), metrics.as_ref(), &path)?;
        info!("PDF report saved to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_invalid_input() => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
