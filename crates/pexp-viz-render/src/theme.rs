use crate::color::Color;
use crate::config::*;

/// Built-in theme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTheme {
    Pexp2026,
    Minimal,
}

impl BuiltinTheme {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Pexp2026,
        }
    }

    pub fn base_config(self) -> VizConfig {
        match self {
            Self::Pexp2026 => pexp2026(),
            Self::Minimal => minimal(),
        }
    }
}

fn pexp2026() -> VizConfig {
    VizConfig {
        theme: "pexp2026".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        axes: AxesConfig::default(),
        grid: GridConfig::default(),
        colors: ColorsConfig::default(),
        panels: PanelsConfig::default(),
        output: OutputConfig::default(),
    }
}

fn minimal() -> VizConfig {
    VizConfig {
        theme: "minimal".into(),
        figure: FigureConfig { width: 600.0, height: 250.0 },
        font: FontConfig { size: 9.0, label_size: 10.0, tick_size: 8.0, title_size: 10.0 },
        axes: AxesConfig {
            tick_direction: "out".into(),
            show_top_ticks: false,
            show_right_ticks: false,
            tick_length: 4.0,
            minor_tick_length: 2.0,
        },
        grid: GridConfig { show: false, ..GridConfig::default() },
        colors: ColorsConfig {
            pdf_line: Color::hex("#4e79a7"),
            quantile_rule: Color::hex("#6b7280"),
            marker: Color::hex("#e15759"),
            ..ColorsConfig::default()
        },
        ..pexp2026()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_with_fallback() {
        assert_eq!(BuiltinTheme::parse("Minimal"), BuiltinTheme::Minimal);
        assert_eq!(BuiltinTheme::parse("unknown"), BuiltinTheme::Pexp2026);
        assert_eq!(BuiltinTheme::parse(""), BuiltinTheme::Pexp2026);
    }

    #[test]
    fn minimal_overrides_ticks() {
        let c = BuiltinTheme::Minimal.base_config();
        assert_eq!(c.theme, "minimal");
        assert!(!c.axes.show_top_ticks);
        assert_eq!(c.panels.rule_dash, "3 3");
    }
}
