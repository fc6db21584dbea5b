//! Figure description types.
//!
//! A `Figure` is a render-only description: all series and labels are computed
//! before drawing, so the same figure can be written as SVG or previewed in a
//! terminal.

/// Y-axis scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

/// Marker drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(31, 119, 180);
    pub const ORANGE: Rgb = Rgb(255, 127, 14);
    pub const GREEN: Rgb = Rgb(44, 160, 44);
}

/// How a series joins its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Markers connected in point order.
    Line,
    /// Markers only.
    Scatter,
}

/// One named set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend entry.
    pub name: String,
    pub points: Vec<(f64, f64)>,
    pub kind: SeriesKind,
    pub marker: Marker,
    pub color: Rgb,
}

/// One subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: AxisScale,
    /// Fixed y-range; when `None` the range follows the data.
    pub y_limits: Option<(f64, f64)>,
    pub series: Vec<Series>,
}

impl Panel {
    pub fn new(title: &str, x_label: &str, y_label: &str, y_scale: AxisScale) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            y_scale,
            y_limits: None,
            series: Vec::new(),
        }
    }

    pub fn with_y_limits(mut self, low: f64, high: f64) -> Self {
        self.y_limits = Some((low, high));
        self
    }

    /// Add a line + marker series.
    pub fn with_series(self, name: &str, points: Vec<(f64, f64)>, marker: Marker, color: Rgb) -> Self {
        self.push_series(name, points, SeriesKind::Line, marker, color)
    }

    /// Add a marker-only series.
    pub fn with_scatter(self, name: &str, points: Vec<(f64, f64)>, marker: Marker, color: Rgb) -> Self {
        self.push_series(name, points, SeriesKind::Scatter, marker, color)
    }

    fn push_series(
        mut self,
        name: &str,
        points: Vec<(f64, f64)>,
        kind: SeriesKind,
        marker: Marker,
        color: Rgb,
    ) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points,
            kind,
            marker,
            color,
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    pub visible: bool,
    pub line: LineStyle,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

/// Styling shared by every panel of a figure.
///
/// Sizes are in typographic points (1/72 inch) and scaled by the export
/// resolution, so the same profile reads the same at any DPI.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProfile {
    pub font_family: String,
    pub font_size_pt: f64,
    pub axis_line_width_pt: f64,
    pub grid: GridStyle,
    pub legend_frame: bool,
    /// Width of a single panel in inches.
    pub panel_width_in: f64,
    pub panel_height_in: f64,
}

impl Default for StyleProfile {
    /// Compact two-column paper style.
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size_pt: 9.0,
            axis_line_width_pt: 0.8,
            grid: GridStyle {
                visible: true,
                line: LineStyle::Dashed,
                alpha: 0.4,
            },
            legend_frame: false,
            panel_width_in: 8.0 / 3.0,
            panel_height_in: 2.6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub cols: usize,
}

/// A composed multi-panel figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub panels: Vec<Panel>,
    pub layout: GridLayout,
    pub style: StyleProfile,
    /// `(width, height)` in inches.
    pub size_in: (f64, f64),
}

impl Figure {
    /// Pixel dimensions at `resolution` pixels per inch.
    pub fn pixel_size(&self, resolution: u32) -> (u32, u32) {
        let dpi = f64::from(resolution.max(1));
        let w = (self.size_in.0 * dpi).round().max(1.0) as u32;
        let h = (self.size_in.1 * dpi).round().max(1.0) as u32;
        (w, h)
    }
}
