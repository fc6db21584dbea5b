//! Plotters rendering of a composed `Figure`.
//!
//! Drawing is generic over the Plotters backend so the exported SVG and the
//! terminal preview share one code path. All sizes in the style profile are in
//! points; `DrawOptions::scale` converts them to backend pixels.

use plotters::coord::Shift;
use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::domain::{AxisScale, Figure, LineStyle, Marker, Panel, SeriesKind, StyleProfile};

/// Number of tick labels (and grid lines) per axis.
const TICKS: usize = 5;

/// Backend-specific drawing knobs.
#[derive(Debug, Clone, Copy)]
pub struct DrawOptions {
    /// Backend pixels per typographic point.
    pub scale: f64,
    /// Draw shaped markers; otherwise points are single pixels.
    pub markers: bool,
    /// Colour of text, axes and grid.
    pub ink: RGBColor,
    /// Canvas fill; `None` leaves the backend's own background.
    pub background: Option<RGBColor>,
}

impl DrawOptions {
    /// Options for a file backend at `resolution` pixels per inch.
    pub fn print(resolution: u32) -> Self {
        Self {
            scale: f64::from(resolution.max(1)) / 72.0,
            markers: true,
            ink: BLACK,
            background: Some(WHITE),
        }
    }

    /// Options for the terminal preview.
    ///
    /// `plotters-ratatui-backend` maps marker radii to canvas units incorrectly
    /// (huge circles), so the preview falls back to pixels. Filling the canvas
    /// would paint every cell, so the terminal background is kept.
    pub fn terminal() -> Self {
        Self {
            scale: 1.0,
            markers: false,
            ink: WHITE,
            background: None,
        }
    }

    fn px(&self, pt: f64) -> u32 {
        (pt * self.scale).round().max(1.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x: (f64, f64),
    y: (f64, f64),
}

/// Draw every panel of `figure` side by side on `root`.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    opts: &DrawOptions,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    if let Some(background) = opts.background {
        root.fill(&background)?;
    }

    let areas = root.split_evenly((figure.layout.rows, figure.layout.cols));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel, &figure.style, opts)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    style: &StyleProfile,
    opts: &DrawOptions,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let font_px = f64::from(opts.px(style.font_size_pt));
    let title_font =
        FontDesc::new(FontFamily::Name(&style.font_family), font_px * 1.1, FontStyle::Normal).color(&opts.ink);

    let mut builder = ChartBuilder::on(area);
    builder
        .caption(&panel.title, title_font)
        .margin(opts.px(4.0))
        .x_label_area_size(opts.px(22.0))
        .y_label_area_size(opts.px(34.0));

    let bounds = panel_bounds(panel);
    let (x0, x1) = bounds.x;
    let (y0, y1) = bounds.y;

    match panel.y_scale {
        AxisScale::Linear => {
            let chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;
            draw_panel_body(chart, panel, style, opts, bounds)
        }
        AxisScale::Log => {
            let chart = builder.build_cartesian_2d(x0..x1, (y0..y1).log_scale())?;
            draw_panel_body(chart, panel, style, opts, bounds)
        }
    }
}

fn draw_panel_body<'a, DB, Y>(
    mut chart: ChartContext<'a, DB, Cartesian2d<RangedCoordf64, Y>>,
    panel: &Panel,
    style: &StyleProfile,
    opts: &DrawOptions,
    bounds: Bounds,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend + 'a,
    Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
{
    let font_px = f64::from(opts.px(style.font_size_pt));
    let label_font =
        FontDesc::new(FontFamily::Name(&style.font_family), font_px, FontStyle::Normal).color(&opts.ink);
    let y_fmt: fn(&f64) -> String = match panel.y_scale {
        AxisScale::Linear => fmt_linear_tick,
        AxisScale::Log => fmt_log_tick,
    };

    // The mesh is drawn by hand below (dashed lines are not a mesh option).
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .x_labels(TICKS)
        .y_labels(TICKS)
        .x_label_formatter(&fmt_linear_tick)
        .y_label_formatter(&y_fmt)
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .axis_style(opts.ink.stroke_width(opts.px(style.axis_line_width_pt)))
        .draw()?;

    if style.grid.visible {
        let (x0, x1) = bounds.x;
        let (y0, y1) = bounds.y;
        let grid_style = opts.ink.mix(style.grid.alpha).stroke_width(opts.px(0.5));
        let (xs, ys) = {
            let spec = chart.as_coord_spec();
            (spec.x_spec().key_points(TICKS), spec.y_spec().key_points(TICKS))
        };

        let lines = xs
            .into_iter()
            .map(|x| vec![(x, y0), (x, y1)])
            .chain(ys.into_iter().map(|y| vec![(x0, y), (x1, y)]));
        for line in lines {
            match style.grid.line {
                LineStyle::Solid => {
                    chart.draw_series(LineSeries::new(line, grid_style))?;
                }
                LineStyle::Dashed => {
                    chart.draw_series(DashedLineSeries::new(line, opts.px(2.0), opts.px(1.5), grid_style))?;
                }
            }
        }
    }

    let line_width = opts.px(1.0);
    let radius = opts.px(2.5) as i32;
    let legend_len = opts.px(14.0) as i32;

    for series in &panel.series {
        let color = RGBColor(series.color.0, series.color.1, series.color.2);
        let fill = color.filled();
        let points = visible_points(&series.points, panel.y_scale);

        if series.kind == SeriesKind::Line {
            chart.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(line_width)))?;
        }

        let anno = if !opts.markers {
            chart.draw_series(points.iter().map(|&p| Pixel::new(p, color)))?
        } else {
            match series.marker {
                Marker::Circle => chart.draw_series(points.iter().map(|&p| Circle::new(p, radius, fill)))?,
                Marker::Square => chart.draw_series(
                    points
                        .iter()
                        .map(|&p| EmptyElement::at(p) + Rectangle::new([(-radius, -radius), (radius, radius)], fill)),
                )?,
                Marker::Triangle => {
                    chart.draw_series(points.iter().map(|&p| TriangleMarker::new(p, radius + 1, fill)))?
                }
            }
        };

        anno.label(series.name.as_str());
        match series.kind {
            SeriesKind::Line => {
                anno.legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + legend_len, y)], color.stroke_width(line_width))
                });
            }
            SeriesKind::Scatter => {
                let half = legend_len / 2;
                anno.legend(move |(x, y)| {
                    Rectangle::new([(x + half - radius, y - radius), (x + half + radius, y + radius)], fill)
                });
            }
        }
    }

    if !panel.series.is_empty() {
        let (background, border) = if style.legend_frame {
            (WHITE.mix(0.8), opts.ink.mix(0.8))
        } else {
            (TRANSPARENT, TRANSPARENT)
        };
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(label_font)
            .background_style(background)
            .border_style(border)
            .draw()?;
    }

    Ok(())
}

/// Finite points that can be placed on the given y-scale.
fn visible_points(points: &[(f64, f64)], scale: AxisScale) -> Vec<(f64, f64)> {
    points
        .iter()
        .copied()
        .filter(|&(x, y)| x.is_finite() && y.is_finite())
        .filter(|&(_, y)| scale == AxisScale::Linear || y > 0.0)
        .collect()
}

fn panel_bounds(panel: &Panel) -> Bounds {
    let points: Vec<(f64, f64)> = panel
        .series
        .iter()
        .flat_map(|s| visible_points(&s.points, panel.y_scale))
        .collect();

    let x = linear_bounds(points.iter().map(|p| p.0));
    let fixed_y = panel
        .y_limits
        .filter(|&(lo, hi)| hi > lo && (panel.y_scale == AxisScale::Linear || lo > 0.0));
    let y = match (fixed_y, panel.y_scale) {
        (Some(limits), _) => limits,
        (None, AxisScale::Linear) => linear_bounds(points.iter().map(|p| p.1)),
        (None, AxisScale::Log) => log_bounds(points.iter().map(|p| p.1)),
    };
    Bounds { x, y }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn linear_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let Some((lo, hi)) = min_max(values) else {
        return (0.0, 1.0);
    };
    if (hi - lo).abs() < 1e-12 {
        return (lo - 0.5, hi + 0.5);
    }
    pad_range(lo, hi, 0.05)
}

fn log_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let Some((lo, hi)) = min_max(values) else {
        return (0.1, 1.0);
    };
    if hi / lo < 1.0 + 1e-9 {
        return (lo / 10.0, hi * 10.0);
    }
    // 5% of the span in log space.
    let pad = (hi / lo).powf(0.05);
    (lo / pad, hi * pad)
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn fmt_linear_tick(v: &f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn fmt_log_tick(v: &f64) -> String {
    format!("{v:.0e}")
}
