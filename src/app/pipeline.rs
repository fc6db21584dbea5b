//! The trade-off figure pipeline.
//!
//! A strict linear sequence with no retries:
//! check inputs -> load -> resolve schemas -> aggregate / synthesize -> compose -> export
//!
//! Any error ends the run before the figure is written.

use std::path::PathBuf;

use tracing::info;

use crate::aggregate::aggregate;
use crate::config::PipelineConfig;
use crate::domain::{AxisScale, ColumnSpec, Figure, Marker, Panel, Rgb};
use crate::error::AppError;
use crate::io::{ensure_inputs_exist, load_table, render};
use crate::models::failure_curve;
use crate::plot::compose;
use crate::schema::resolve_schema;

pub const ALPHA: &str = "alpha";
pub const SUCCESS: &str = "success";
pub const THRESHOLD: &str = "threshold";
pub const COMM: &str = "comm";

/// Columns required from the OKVS benchmark.
pub fn okvs_columns() -> [ColumnSpec; 2] {
    [
        ColumnSpec::new(ALPHA, &["alpha"]),
        ColumnSpec::new(SUCCESS, &["succ", "rate", "success"]),
    ]
}

/// Columns required from the threshold benchmark.
pub fn threshold_columns() -> [ColumnSpec; 2] {
    [
        ColumnSpec::new(THRESHOLD, &["t", "threshold"]),
        ColumnSpec::new(COMM, &["comm", "bytes", "mb"]),
    ]
}

/// Run every stage up to composition.
pub fn build_figure(config: &PipelineConfig) -> Result<Figure, AppError> {
    // 1) Every input must exist before anything is parsed.
    ensure_inputs_exist(&[config.okvs_path.as_path(), config.threshold_path.as_path()])?;

    // 2) Load.
    let okvs = load_table(&config.okvs_path)?;
    let threshold = load_table(&config.threshold_path)?;
    info!(okvs_rows = okvs.len(), threshold_rows = threshold.len(), "inputs loaded");

    // 3) Resolve both schemas before any aggregation.
    let okvs_schema = resolve_schema(&okvs, &okvs_columns())?;
    let threshold_schema = resolve_schema(&threshold, &threshold_columns())?;

    // 4) Measured series and the synthetic curve, independently.
    let success = okvs.numeric_pairs(okvs_schema.column(ALPHA)?, okvs_schema.column(SUCCESS)?)?;
    let comm = aggregate(
        &threshold,
        threshold_schema.column(THRESHOLD)?,
        threshold_schema.column(COMM)?,
    )?
    .numeric_points()?;
    let curve = failure_curve(&config.curve)?;

    // 5) Compose.
    let panels = vec![okvs_panel(success), cuckoo_panel(curve), comm_panel(comm)];
    compose(panels, config.style.clone())
}

/// Build the figure and write it; returns the output path.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PathBuf, AppError> {
    let figure = build_figure(config)?;
    render(figure, &config.output_path, config.resolution, config.display)?;
    Ok(config.output_path.clone())
}

fn okvs_panel(points: Vec<(f64, f64)>) -> Panel {
    Panel::new("(a) OKVS success", "α", "Success rate", AxisScale::Linear)
        .with_y_limits(0.0, 1.05)
        .with_series("Measured", points, Marker::Circle, Rgb::BLUE)
}

fn cuckoo_panel(points: Vec<(f64, f64)>) -> Panel {
    Panel::new("(b) Cuckoo fail", "ε", "Fail prob.", AxisScale::Log).with_series(
        "Estimated",
        points,
        Marker::Square,
        Rgb::ORANGE,
    )
}

fn comm_panel(points: Vec<(f64, f64)>) -> Panel {
    Panel::new("(c) Comm cost", "Threshold t", "Comm. (MB)", AxisScale::Linear).with_series(
        "Measured",
        points,
        Marker::Triangle,
        Rgb::GREEN,
    )
}
