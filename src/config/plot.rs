//! Chart visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Fill/stroke for bars that closed at or above their open
    pub up_color: Color32,
    /// Fill/stroke for bars that closed below their open
    pub down_color: Color32,
    pub grid_color: Color32,
    pub axis_label_color: Color32,
    /// Body width as a fraction of the bar's column width
    pub body_width_ratio: f32,
    /// Narrow columns never shrink the body below this many pixels
    pub min_body_width: f32,
    /// A doji body still renders at this height
    pub min_body_height: f32,
    pub wick_width: f32,
    /// Displayed Y range is widened by this fraction of the raw span, each side
    pub axis_padding_pct: f64,
    /// Number of equal Y-axis divisions (ticks = divisions + 1)
    pub y_axis_divisions: usize,
    /// Target number of labeled X-axis dates
    pub x_axis_labels: usize,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    up_color: Color32::from_rgb(34, 197, 94),    // Green
    down_color: Color32::from_rgb(239, 68, 68),  // Red
    grid_color: Color32::from_rgb(55, 60, 70),
    axis_label_color: Color32::from_rgb(140, 148, 160),
    body_width_ratio: 0.8,
    min_body_width: 2.0,
    min_body_height: 1.0,
    wick_width: 1.0,
    axis_padding_pct: 0.1,
    y_axis_divisions: 5,
    x_axis_labels: 6,
};
