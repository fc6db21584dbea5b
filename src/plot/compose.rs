//! Panel composition.

use crate::domain::{Figure, GridLayout, Panel, StyleProfile};
use crate::error::AppError;

/// Lay `panels` out in a single row and apply `style` to all of them.
///
/// Panels keep their order; the figure widens by one panel width per panel.
pub fn compose(panels: Vec<Panel>, style: StyleProfile) -> Result<Figure, AppError> {
    if panels.is_empty() {
        return Err(AppError::Compose("a figure needs at least one panel.".to_string()));
    }
    if !(style.panel_width_in > 0.0 && style.panel_height_in > 0.0) {
        return Err(AppError::Compose(format!(
            "panel size must be positive (got {}x{} in).",
            style.panel_width_in, style.panel_height_in
        )));
    }

    let cols = panels.len();
    let size_in = (style.panel_width_in * cols as f64, style.panel_height_in);

    Ok(Figure {
        panels,
        layout: GridLayout { rows: 1, cols },
        style,
        size_in,
    })
}
