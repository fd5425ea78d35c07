// `fmt::Write` into a `String` cannot fail, so write results are discarded.
use std::fmt::Write as FmtWrite;

use crate::color::Color;
use crate::primitives::*;
use crate::text::{TextMetrics, measure_text};

/// An SVG element stored for deferred rendering.
#[derive(Debug, Clone)]
enum SvgElement {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        style: Style,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: LineStyle,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        style: LineStyle,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        style: TextStyle,
        rotate: Option<f64>,
    },
    Path {
        d: String,
        style: Style,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        style: Style,
    },
    Group {
        clip_id: String,
        children: Vec<SvgElement>,
    },
}

/// Immediate-mode SVG canvas. Coordinates in points (1pt = 1/72").
///
/// Elements drawn between [`Canvas::push_clip`] and [`Canvas::pop_clip`] are
/// grouped under that clip path.
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    elements: Vec<SvgElement>,
    defs: Vec<String>,
    clip_stack: Vec<(String, Vec<SvgElement>)>,
    next_clip_id: usize,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
            defs: Vec::new(),
            clip_stack: Vec::new(),
            next_clip_id: 0,
        }
    }

    // --- Drawing primitives ---

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &Style) {
        self.push(SvgElement::Rect { x, y, w, h, style: style.clone() });
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &LineStyle) {
        self.push(SvgElement::Line { x1, y1, x2, y2, style: style.clone() });
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], style: &LineStyle) {
        self.push(SvgElement::Polyline { points: points.to_vec(), style: style.clone() });
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: &TextStyle) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: None,
        });
    }

    pub fn text_rotated(&mut self, x: f64, y: f64, content: &str, style: &TextStyle, angle: f64) {
        self.push(SvgElement::Text {
            x,
            y,
            content: content.to_string(),
            style: style.clone(),
            rotate: Some(angle),
        });
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &Style) {
        self.push(SvgElement::Circle { cx, cy, r, style: style.clone() });
    }

    /// Fill between y_lo and y_hi at given x positions (areas under curves).
    pub fn fill_between(&mut self, x: &[f64], y_lo: &[f64], y_hi: &[f64], style: &Style) {
        let n = x.len().min(y_lo.len()).min(y_hi.len());
        if n < 2 {
            return;
        }
        let mut d = String::new();
        // Forward along y_hi
        let _ = write!(d, "M{:.2},{:.2}", x[0], y_hi[0]);
        for i in 1..n {
            let _ = write!(d, " L{:.2},{:.2}", x[i], y_hi[i]);
        }
        // Backward along y_lo
        for i in (0..n).rev() {
            let _ = write!(d, " L{:.2},{:.2}", x[i], y_lo[i]);
        }
        d.push('Z');
        self.push(SvgElement::Path { d, style: style.clone() });
    }

    /// Point marker: filled disc, or white disc with a coloured ring.
    pub fn marker(&mut self, x: f64, y: f64, marker: &MarkerStyle) {
        let style = if marker.fill {
            Style {
                fill: Some(marker.color),
                stroke: Some(marker.color),
                stroke_width: 0.5,
                opacity: 1.0,
            }
        } else {
            Style {
                fill: Some(Color::rgb(255, 255, 255)),
                stroke: Some(marker.color),
                stroke_width: 1.0,
                opacity: 1.0,
            }
        };
        self.circle(x, y, marker.size, &style);
    }

    // --- Clip paths ---

    pub fn push_clip(&mut self, x: f64, y: f64, w: f64, h: f64) -> String {
        let id = format!("clip{}", self.next_clip_id);
        self.next_clip_id += 1;
        self.defs.push(format!(
            r#"<clipPath id="{id}"><rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" /></clipPath>"#
        ));
        self.clip_stack.push((id.clone(), Vec::new()));
        id
    }

    pub fn pop_clip(&mut self) {
        if let Some((clip_id, children)) = self.clip_stack.pop() {
            self.push(SvgElement::Group { clip_id, children });
        }
    }

    // --- Text measurement ---

    pub fn measure_text(&self, content: &str, style: &TextStyle) -> TextMetrics {
        measure_text(content, style)
    }

    // --- SVG output ---

    fn push(&mut self, elem: SvgElement) {
        match self.clip_stack.last_mut() {
            Some((_, children)) => children.push(elem),
            None => self.elements.push(elem),
        }
    }

    /// Serialize the canvas. Clip regions still open are closed first.
    pub fn finish_svg(mut self) -> String {
        while !self.clip_stack.is_empty() {
            self.pop_clip();
        }

        let mut out = String::with_capacity(64 * 1024);
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        );

        // Defs (clip paths)
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for d in &self.defs {
                out.push_str(d);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }

        // Background (white)
        let _ = writeln!(
            out,
            r#"<rect width="{}" height="{}" fill="white" />"#,
            self.width, self.height
        );

        for elem in &self.elements {
            render_element(&mut out, elem);
        }

        out.push_str("</svg>\n");
        out
    }
}

fn render_element(out: &mut String, elem: &SvgElement) {
    match elem {
        SvgElement::Rect { x, y, w, h, style } => {
            let _ = write!(out, r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}""#);
            write_style_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Line { x1, y1, x2, y2, style } => {
            let _ = write!(out, r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}""#);
            write_line_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Polyline { points, style } => {
            out.push_str(r#"<polyline points=""#);
            for (i, (x, y)) in points.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{x:.2},{y:.2}");
            }
            out.push('"');
            out.push_str(r#" fill="none""#);
            write_line_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Text { x, y, content, style, rotate } => {
            let _ = write!(out, r#"<text x="{x:.2}" y="{y:.2}""#);
            let _ = write!(
                out,
                r#" font-family="Helvetica, Arial, sans-serif" font-size="{:.1}""#,
                style.size
            );
            let _ = write!(out, r#" fill="{}""#, style.color.to_svg_fill());
            let _ = write!(out, r#" text-anchor="{}""#, style.anchor.as_str());
            let _ = write!(out, r#" dominant-baseline="{}""#, style.baseline.as_str());
            if style.weight == FontWeight::Bold {
                out.push_str(r#" font-weight="bold""#);
            }
            if let Some(angle) = rotate {
                let _ = write!(out, r#" transform="rotate({angle:.1},{x:.2},{y:.2})""#);
            }
            out.push('>');
            escape_xml(out, content);
            out.push_str("</text>\n");
        }
        SvgElement::Path { d, style } => {
            let _ = write!(out, r#"<path d="{d}""#);
            write_style_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Circle { cx, cy, r, style } => {
            let _ = write!(out, r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}""#);
            write_style_attrs(out, style);
            out.push_str(" />\n");
        }
        SvgElement::Group { clip_id, children } => {
            let _ = writeln!(out, r#"<g clip-path="url(#{clip_id})">"#);
            for child in children {
                render_element(out, child);
            }
            out.push_str("</g>\n");
        }
    }
}

fn escape_xml(out: &mut String, content: &str) {
    for ch in content.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn write_style_attrs(out: &mut String, style: &Style) {
    match &style.fill {
        Some(fill) => {
            let _ = write!(out, r#" fill="{}""#, fill.to_svg_fill());
        }
        None => out.push_str(r#" fill="none""#),
    }
    if let Some(stroke) = &style.stroke {
        let _ = write!(out, r#" stroke="{}""#, stroke.to_svg_fill());
        let _ = write!(out, r#" stroke-width="{:.2}""#, style.stroke_width);
    }
    if (style.opacity - 1.0).abs() > 1e-4 {
        let _ = write!(out, r#" opacity="{:.3}""#, style.opacity);
    }
}

fn write_line_attrs(out: &mut String, style: &LineStyle) {
    let _ = write!(out, r#" stroke="{}""#, style.color.to_svg_fill());
    let _ = write!(out, r#" stroke-width="{:.2}""#, style.width);
    if let Some(dash) = &style.dash {
        let _ = write!(out, r#" stroke-dasharray="{dash}""#);
    }
}
