//! Plotters-powered figure widget for Ratatui.
//!
//! The figure is drawn with the same `plot::draw_figure` used for the SVG
//! export, rendered into the Ratatui buffer through `plotters-ratatui-backend`.

use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Figure;
use crate::plot::{draw_figure, DrawOptions};

/// Minimum terminal cells per panel for Plotters to lay out a chart.
const MIN_PANEL_WIDTH: u16 = 20;
const MIN_HEIGHT: u16 = 8;

pub struct FigureChart<'a> {
    pub figure: &'a Figure,
}

impl<'a> Widget for FigureChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = u16::try_from(self.figure.layout.cols).unwrap_or(u16::MAX);
        if area.width < MIN_PANEL_WIDTH.saturating_mul(cols) || area.height < MIN_HEIGHT {
            buf.set_string(
                area.x,
                area.y,
                "Preview area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let figure = self.figure;
        let widget = widget_fn(move |root| {
            draw_figure(&root, figure, &DrawOptions::terminal())?;
            Ok(())
        });

        widget.render(area, buf);
    }
}
