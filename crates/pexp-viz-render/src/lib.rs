pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod text;
pub mod theme;

use config::VizConfig;
use pexp_viz::ExponentialChartArtifact;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown artifact kind: {0}")]
    UnknownKind(String),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("layout error: {0}")]
    Layout(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render a chart artifact to an SVG string.
pub fn render_chart(artifact: &ExponentialChartArtifact, config: &VizConfig) -> Result<String> {
    plots::exponential::render(artifact, config)
}

/// Render an artifact JSON to SVG string.
///
/// Accepts either a bare chart artifact or a full evaluation result with a
/// `chart` field.
pub fn render_svg(artifact_json: &str, kind: &str, config: &VizConfig) -> Result<String> {
    match kind {
        "exponential" | "pexp" => {
            let value: serde_json::Value = serde_json::from_str(artifact_json)?;
            let chart = match value.get("chart") {
                Some(chart) => chart.clone(),
                None => value,
            };
            let art: ExponentialChartArtifact = serde_json::from_value(chart)?;
            render_chart(&art, config)
        }
        other => Err(RenderError::UnknownKind(other.to_string())),
    }
}

/// Encode an already rendered SVG document in the requested format.
#[cfg_attr(not(feature = "png"), allow(unused_variables))]
pub fn encode_svg(svg: String, format: &str, config: &VizConfig) -> Result<Vec<u8>> {
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        other => Err(RenderError::UnknownKind(format!("format: {other}"))),
    }
}

/// Render an artifact JSON to bytes in the specified format.
pub fn render_to_bytes(
    artifact_json: &str,
    kind: &str,
    format: &str,
    config: &VizConfig,
) -> Result<Vec<u8>> {
    let svg = render_svg(artifact_json, kind, config)?;
    encode_svg(svg, format, config)
}

/// Render an artifact JSON to a file (format inferred from extension).
pub fn render_to_file(
    artifact_json: &str,
    kind: &str,
    path: &std::path::Path,
    config: &VizConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let svg = render_svg(artifact_json, kind, config)?;
    if ext == "svg" {
        return output::svg::save_svg(&svg, path);
    }
    let bytes = encode_svg(svg, ext, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
