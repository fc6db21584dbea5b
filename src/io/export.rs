//! Write a composed figure to disk.
//!
//! The SVG document is rendered fully in memory and written with a single call,
//! so a failed render never leaves a partial file behind.

use std::io::IsTerminal;
use std::path::Path;

use plotters::prelude::*;
use tracing::{info, warn};

use crate::config::DisplayMode;
use crate::domain::Figure;
use crate::error::AppError;
use crate::plot::{draw_figure, DrawOptions};

/// Write `figure` as SVG at `resolution` pixels per inch, then optionally preview it.
///
/// The figure is consumed: it is written once and dropped afterwards.
pub fn render(figure: Figure, output_path: &Path, resolution: u32, display: DisplayMode) -> Result<(), AppError> {
    let svg = svg_document(&figure, resolution)
        .map_err(|e| AppError::export(output_path, format!("render failed: {e}")))?;

    std::fs::write(output_path, svg.as_bytes()).map_err(|e| AppError::export(output_path, e.to_string()))?;

    let (width, height) = figure.pixel_size(resolution);
    info!(
        path = %output_path.display(),
        width,
        height,
        bytes = svg.len(),
        "figure written"
    );

    if display == DisplayMode::Auto && std::io::stdout().is_terminal() {
        if let Err(err) = crate::tui::preview(&figure) {
            warn!(%err, "terminal preview failed; the figure file was still written");
        }
    }

    Ok(())
}

fn svg_document(figure: &Figure, resolution: u32) -> Result<String, DrawingAreaErrorKind<std::io::Error>> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, figure.pixel_size(resolution)).into_drawing_area();
        draw_figure(&root, figure, &DrawOptions::print(resolution))?;
        root.present()?;
    }
    Ok(buf)
}
