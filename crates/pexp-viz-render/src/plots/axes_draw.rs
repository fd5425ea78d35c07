use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Draw a standard box frame with axes, ticks, grid, and labels.
pub fn draw_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &VizConfig,
) {
    let frame_color = Color::rgb(0, 0, 0);
    let frame_style = LineStyle::solid(frame_color, 0.8);
    let tick_style_line = LineStyle::solid(frame_color, 0.6);
    let minor_tick_style = LineStyle::solid(frame_color, 0.4);
    let grid_style = LineStyle::dashed(config.grid.color.with_alpha(config.grid.alpha), 0.5, "3 3");

    // Inward ticks point into the frame: +1 moves toward the plot interior.
    let dir = if config.axes.tick_direction == "in" { 1.0 } else { -1.0 };
    let tl = config.axes.tick_length;
    let mtl = config.axes.minor_tick_length;

    // Frame rectangle
    canvas.line(area.left, area.top, area.right(), area.top, &frame_style);
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &frame_style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &frame_style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &frame_style);

    let tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: frame_color,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };
    let outward_pad = if dir < 0.0 { tl } else { 0.0 };

    // --- X axis ticks ---
    for (i, &val) in x_axis.tick_positions.iter().enumerate() {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        if config.grid.show {
            canvas.line(px, area.top, px, area.bottom(), &grid_style);
        }
        canvas.line(px, area.bottom(), px, area.bottom() - dir * tl, &tick_style_line);
        if config.axes.show_top_ticks {
            canvas.line(px, area.top, px, area.top + dir * tl, &tick_style_line);
        }
        if let Some(label) = x_axis.tick_labels.get(i) {
            canvas.text(px, area.bottom() + outward_pad + 3.0, label, &tick_label_style);
        }
    }

    for &val in &x_axis.minor_ticks {
        let px = x_axis.data_to_pixel(val, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        canvas.line(px, area.bottom(), px, area.bottom() - dir * mtl, &minor_tick_style);
    }

    // --- Y axis ticks ---
    let y_tick_label_style = TextStyle {
        size: config.font.tick_size,
        color: frame_color,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };

    let mut max_label_w = 0.0_f64;
    for (i, &val) in y_axis.tick_positions.iter().enumerate() {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        if config.grid.show {
            canvas.line(area.left, py, area.right(), py, &grid_style);
        }
        canvas.line(area.left, py, area.left + dir * tl, py, &tick_style_line);
        if config.axes.show_right_ticks {
            canvas.line(area.right(), py, area.right() - dir * tl, py, &tick_style_line);
        }
        if let Some(label) = y_axis.tick_labels.get(i) {
            canvas.text(area.left - outward_pad - 4.0, py, label, &y_tick_label_style);
            max_label_w = max_label_w.max(canvas.measure_text(label, &y_tick_label_style).width);
        }
    }

    for &val in &y_axis.minor_ticks {
        let py = y_axis.data_to_pixel(val, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.left + dir * mtl, py, &minor_tick_style);
    }

    // --- Axis labels ---
    let label_style = TextStyle {
        size: config.font.label_size,
        color: frame_color,
        anchor: TextAnchor::Middle,
        ..Default::default()
    };

    if !x_axis.label.is_empty() {
        let label_y = area.bottom() + outward_pad + config.font.tick_size + 14.0;
        canvas.text(area.left + area.width / 2.0, label_y, &x_axis.label, &label_style);
    }

    if !y_axis.label.is_empty() {
        let label_x = area.left - outward_pad - max_label_w - 10.0;
        let label_y = area.top + area.height / 2.0;
        canvas.text_rotated(label_x, label_y, &y_axis.label, &label_style, -90.0);
    }
}
