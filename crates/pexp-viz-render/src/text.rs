use crate::primitives::{FontWeight, TextStyle};

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Average advance per glyph as a fraction of the font size (sans-serif).
const REGULAR_ADVANCE: f64 = 0.55;
const BOLD_ADVANCE: f64 = 0.60;

/// Estimate text extents in points without loading a font.
///
/// Narrow glyphs (`i`, `l`, `.`, digits `1`) and wide ones (`m`, `w`,
/// capitals) are weighted so that tick labels and titles size plausibly.
pub fn measure_text(text: &str, style: &TextStyle) -> TextMetrics {
    let base = match style.weight {
        FontWeight::Regular => REGULAR_ADVANCE,
        FontWeight::Bold => BOLD_ADVANCE,
    };
    let em: f64 = text
        .chars()
        .map(|c| match c {
            'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '1' | ' ' => 0.55,
            'm' | 'w' | 'M' | 'W' => 1.45,
            c if c.is_ascii_uppercase() => 1.2,
            _ => 1.0,
        })
        .sum();

    TextMetrics {
        width: em * base * style.size,
        height: style.size * 1.2,
        ascent: style.size * 0.95,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_hello() {
        let style = TextStyle { size: 12.0, ..Default::default() };
        let m = measure_text("Hello", &style);
        assert!(m.width > 20.0);
        assert!(m.height > 8.0);
        assert!(m.ascent > 0.0);
    }

    #[test]
    fn bold_wider_than_regular() {
        let regular = TextStyle { size: 12.0, ..Default::default() };
        let bold = TextStyle { weight: FontWeight::Bold, ..regular.clone() };
        assert!(measure_text("Test", &bold).width > measure_text("Test", &regular).width);
    }

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(measure_text("", &TextStyle::default()).width, 0.0);
    }
}
