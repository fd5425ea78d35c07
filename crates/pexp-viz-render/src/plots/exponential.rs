use pexp_viz::ExponentialChartArtifact;

use crate::RenderError;
use crate::canvas::Canvas;
use crate::config::VizConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::{PlotArea, title_margin, x_axis_margin, y_axis_margin};
use crate::layout::multi_panel::DualPanelLayout;
use crate::plots::axes_draw::draw_axes;
use crate::primitives::*;

const OUTER_PAD: f64 = 15.0;

pub fn render(artifact: &ExponentialChartArtifact, config: &VizConfig) -> crate::Result<String> {
    let n = artifact.x_values.len();
    if artifact.pdf_values.len() != n || artifact.cdf_values.len() != n {
        return Err(RenderError::Layout(format!(
            "curve arrays must be aligned: x={}, pdf={}, cdf={}",
            n,
            artifact.pdf_values.len(),
            artifact.cdf_values.len()
        )));
    }
    if n == 0 {
        log::warn!("exponential chart has no curve samples; emitting placeholder");
        return Ok(empty_svg());
    }
    let all_finite = artifact
        .x_values
        .iter()
        .chain(&artifact.pdf_values)
        .chain(&artifact.cdf_values)
        .all(|v| v.is_finite());
    if !all_finite {
        return Err(RenderError::Layout("curve samples must be finite".into()));
    }

    let fig_w = config.figure.width;
    let fig_h = config.figure.height;
    let mut canvas = Canvas::new(fig_w, fig_h);

    // Axes
    let x_min = artifact.x_values[0];
    let x_max = artifact.x_values[n - 1];
    let pdf_x_axis = Axis::auto_linear(x_min, x_max, 6).with_label(&artifact.pdf_panel.x_label);
    let cdf_x_axis = Axis::auto_linear(x_min, x_max, 6).with_label(&artifact.cdf_panel.x_label);

    let pdf_max = artifact.pdf_values.iter().copied().fold(0.0_f64, f64::max);
    let pdf_y_axis = Axis::auto_linear(0.0, pdf_max, 5).with_label(&artifact.pdf_panel.y_label);
    let cdf_y_axis = Axis::auto_linear(0.0, 1.0, 6).with_label(&artifact.cdf_panel.y_label);

    // Layout
    let left = OUTER_PAD + y_axis_margin(&canvas, &pdf_y_axis, config);
    let gap = OUTER_PAD + 10.0 + y_axis_margin(&canvas, &cdf_y_axis, config);
    let top = title_margin(config);
    let bottom = OUTER_PAD + x_axis_margin(&pdf_x_axis, config);
    let layout = DualPanelLayout::new(
        left,
        top,
        (fig_w - left - OUTER_PAD).max(100.0),
        (fig_h - top - bottom).max(50.0),
        gap,
        config.panels.pdf_width_frac,
    );

    draw_pdf_panel(&mut canvas, &layout.left, artifact, &pdf_x_axis, &pdf_y_axis, config);
    draw_cdf_panel(&mut canvas, &layout.right, artifact, &cdf_x_axis, &cdf_y_axis, config);

    log::debug!(
        "rendered exponential chart: q={} rate={} samples={}",
        artifact.quantile,
        artifact.rate,
        n
    );
    Ok(canvas.finish_svg())
}

fn draw_title(canvas: &mut Canvas, area: &PlotArea, title: &str, config: &VizConfig) {
    let style = TextStyle {
        size: config.font.title_size,
        weight: FontWeight::Bold,
        anchor: TextAnchor::Middle,
        ..Default::default()
    };
    canvas.text(area.left + area.width / 2.0, area.top - 8.0, title, &style);
}

fn to_points(
    xs: &[f64],
    ys: &[f64],
    x_axis: &Axis,
    y_axis: &Axis,
    area: &PlotArea,
) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys.iter())
        .map(|(&x, &y)| {
            (
                x_axis.data_to_pixel(x, area.left, area.right()),
                y_axis.data_to_pixel(y, area.bottom(), area.top),
            )
        })
        .collect()
}

fn draw_quantile_rule(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    q: f64,
    config: &VizConfig,
) {
    let px = x_axis.data_to_pixel(q, area.left, area.right());
    canvas.line(
        px,
        area.top,
        px,
        area.bottom(),
        &LineStyle::dashed(config.colors.quantile_rule, 1.0, &config.panels.rule_dash),
    );
}

fn draw_pdf_panel(
    canvas: &mut Canvas,
    area: &PlotArea,
    artifact: &ExponentialChartArtifact,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &VizConfig,
) {
    draw_title(canvas, area, &artifact.pdf_panel.title, config);
    draw_axes(canvas, area, x_axis, y_axis, config);

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);

    // Shaded area under the PDF for x <= shade_until.
    let shaded = artifact.x_values.iter().take_while(|&&x| x <= artifact.shade_until).count();
    if shaded >= 2 {
        let x_px: Vec<f64> = artifact.x_values[..shaded]
            .iter()
            .map(|&x| x_axis.data_to_pixel(x, area.left, area.right()))
            .collect();
        let y_hi: Vec<f64> = artifact.pdf_values[..shaded]
            .iter()
            .map(|&y| y_axis.data_to_pixel(y, area.bottom(), area.top))
            .collect();
        let baseline = y_axis.data_to_pixel(0.0, area.bottom(), area.top);
        let y_lo = vec![baseline; shaded];
        canvas.fill_between(
            &x_px,
            &y_lo,
            &y_hi,
            &Style::filled(config.colors.pdf_area).with_opacity(config.colors.pdf_area_opacity),
        );
    }

    let pts = to_points(&artifact.x_values, &artifact.pdf_values, x_axis, y_axis, area);
    canvas.polyline(&pts, &LineStyle::solid(config.colors.pdf_line, config.panels.line_width));

    draw_quantile_rule(canvas, area, x_axis, artifact.quantile, config);

    canvas.pop_clip();
}

fn draw_cdf_panel(
    canvas: &mut Canvas,
    area: &PlotArea,
    artifact: &ExponentialChartArtifact,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &VizConfig,
) {
    draw_title(canvas, area, &artifact.cdf_panel.title, config);
    draw_axes(canvas, area, x_axis, y_axis, config);

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);

    let pts = to_points(&artifact.x_values, &artifact.cdf_values, x_axis, y_axis, area);
    let line_color = config.colors.cdf_line.with_alpha(config.colors.cdf_line_opacity);
    canvas.polyline(&pts, &LineStyle::solid(line_color, config.panels.line_width));

    draw_quantile_rule(canvas, area, x_axis, artifact.quantile, config);

    let mx = x_axis.data_to_pixel(artifact.quantile, area.left, area.right());
    let my = y_axis.data_to_pixel(artifact.cumulative_probability, area.bottom(), area.top);
    canvas.marker(
        mx,
        my,
        &MarkerStyle { size: config.panels.marker_size, color: config.colors.marker, fill: true },
    );

    let label_style = TextStyle {
        size: config.font.tick_size,
        color: config.colors.marker,
        anchor: TextAnchor::Start,
        baseline: TextBaseline::Central,
        ..Default::default()
    };
    canvas.text(
        mx + 6.0,
        my + 10.0,
        &format!("P(X \u{2264} {}) = {:.4}", artifact.quantile, artifact.cumulative_probability),
        &label_style,
    );

    canvas.pop_clip();
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No curve data</text></svg>"#.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(q: f64, rate: f64) -> ExponentialChartArtifact {
        pexp_viz::evaluate(Some(q), rate, true).unwrap().chart.unwrap()
    }

    #[test]
    fn renders_both_panels() {
        let svg = render(&chart(1.0, 1.0), &VizConfig::default()).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Probability Density Function for q = 1, rate = 1"));
        assert!(svg.contains("Cumulative Distribution Function for q = 1, rate = 1"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches("<clipPath").count(), 2);
        assert!(svg.contains(r#"stroke-dasharray="3 3""#));
        assert!(svg.contains("<circle"));
        assert!(svg.contains(r#"opacity="0.300""#));
    }

    #[test]
    fn zero_quantile_has_no_shading() {
        let svg = render(&chart(0.0, 2.0), &VizConfig::default()).unwrap();
        assert!(!svg.contains("<path"));
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn empty_artifact_is_placeholder() {
        let mut art = chart(1.0, 1.0);
        art.x_values.clear();
        art.pdf_values.clear();
        art.cdf_values.clear();
        let svg = render(&art, &VizConfig::default()).unwrap();
        assert!(svg.contains("No curve data"));
    }

    #[test]
    fn misaligned_arrays_are_rejected() {
        let mut art = chart(1.0, 1.0);
        art.pdf_values.pop();
        assert!(matches!(render(&art, &VizConfig::default()), Err(RenderError::Layout(_))));
    }
}
