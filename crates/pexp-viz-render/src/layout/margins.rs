use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::primitives::TextStyle;

/// Rectangular plot area within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Manual margins (for multi-panel layouts).
    pub fn manual(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Horizontal room needed left of a panel: y tick labels + rotated axis label.
pub fn y_axis_margin(canvas: &Canvas, y_axis: &Axis, config: &VizConfig) -> f64 {
    let tick_style = TextStyle { size: config.font.tick_size, ..Default::default() };
    let max_tick_w = y_axis
        .tick_labels
        .iter()
        .map(|l| canvas.measure_text(l, &tick_style).width)
        .fold(0.0_f64, f64::max);
    let mut margin = max_tick_w + 8.0;
    if config.axes.tick_direction != "in" {
        margin += config.axes.tick_length;
    }
    if !y_axis.label.is_empty() {
        margin += config.font.label_size + 6.0;
    }
    margin
}

/// Vertical room needed below a panel: x tick labels + axis label.
pub fn x_axis_margin(x_axis: &Axis, config: &VizConfig) -> f64 {
    let mut margin = config.font.tick_size + 6.0;
    if config.axes.tick_direction != "in" {
        margin += config.axes.tick_length;
    }
    if !x_axis.label.is_empty() {
        margin += config.font.label_size + 6.0;
    }
    margin
}

/// Vertical room needed above a panel for its title.
pub fn title_margin(config: &VizConfig) -> f64 {
    config.font.title_size * 1.3 + 10.0
}
