use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::theme::BuiltinTheme;

/// Top-level visualization configuration (YAML or programmatic).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub theme: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub axes: AxesConfig,
    pub grid: GridConfig,
    pub colors: ColorsConfig,
    pub panels: PanelsConfig,
    pub output: OutputConfig,
}

impl Default for VizConfig {
    fn default() -> Self {
        BuiltinTheme::Pexp2026.base_config()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: 720.0,  // 10" * 72
            height: 302.4, // 4.2" * 72
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f64,
    pub label_size: f64,
    pub tick_size: f64,
    pub title_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 10.0, label_size: 11.0, tick_size: 8.5, title_size: 11.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    pub tick_direction: String,
    pub show_top_ticks: bool,
    pub show_right_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self {
            tick_direction: "in".into(),
            show_top_ticks: true,
            show_right_ticks: true,
            tick_length: 5.0,
            minor_tick_length: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub show: bool,
    pub color: Color,
    pub alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { show: true, color: Color::hex("#CBD5E1"), alpha: 0.55 }
    }
}

/// Series colours and opacities of the two-panel chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub pdf_line: Color,
    pub pdf_area: Color,
    pub pdf_area_opacity: f64,
    pub cdf_line: Color,
    pub cdf_line_opacity: f64,
    pub quantile_rule: Color,
    pub marker: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            pdf_line: Color::hex("#4C78A8"),
            pdf_area: Color::hex("lightblue"),
            pdf_area_opacity: 0.3,
            cdf_line: Color::hex("orange"),
            cdf_line_opacity: 0.5,
            quantile_rule: Color::hex("#111827"),
            marker: Color::hex("#DC2626"),
        }
    }
}

/// Side-by-side panel geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelsConfig {
    /// Fraction of the plotting width given to the PDF panel.
    pub pdf_width_frac: f64,
    /// Dash pattern of the quantile rule (SVG `stroke-dasharray`).
    pub rule_dash: String,
    pub line_width: f64,
    pub marker_size: f64,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self { pdf_width_frac: 0.55, rule_dash: "3 3".into(), line_width: 1.5, marker_size: 3.5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: "svg".into(), dpi: 220 }
    }
}

/// Resolve a VizConfig from optional YAML string.
///
/// Priority: user YAML overrides → base config of the theme named in the YAML
/// (`theme:` key, default theme when absent).
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<VizConfig> {
    let Some(yaml) = user_yaml else {
        return Ok(VizConfig::default());
    };
    let user: serde_yaml_ng::Value =
        serde_yaml_ng::from_str(yaml).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    if user.is_null() {
        return Ok(VizConfig::default());
    }
    if !user.is_mapping() {
        return Err(crate::RenderError::Config("config must be a YAML mapping".into()));
    }

    let theme = user.get("theme").and_then(|t| t.as_str()).unwrap_or_default();
    let base = BuiltinTheme::parse(theme).base_config();
    let mut merged =
        serde_yaml_ng::to_value(&base).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    merge_yaml(&mut merged, user);

    let config: VizConfig =
        serde_yaml_ng::from_value(merged).map_err(|e| crate::RenderError::Config(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

fn merge_yaml(base: &mut serde_yaml_ng::Value, user: serde_yaml_ng::Value) {
    match (base, user) {
        (serde_yaml_ng::Value::Mapping(base_map), serde_yaml_ng::Value::Mapping(user_map)) => {
            for (k, v) in user_map {
                match base_map.get_mut(&k) {
                    Some(slot) => merge_yaml(slot, v),
                    None => {
                        base_map.insert(k, v);
                    }
                }
            }
        }
        (slot, v) => *slot = v,
    }
}

fn validate(config: &VizConfig) -> crate::Result<()> {
    if !(config.figure.width > 0.0 && config.figure.height > 0.0) {
        return Err(crate::RenderError::Config("figure width/height must be > 0".into()));
    }
    if !(0.1..=0.9).contains(&config.panels.pdf_width_frac) {
        return Err(crate::RenderError::Config("panels.pdf_width_frac must be in [0.1, 0.9]".into()));
    }
    Ok(())
}
