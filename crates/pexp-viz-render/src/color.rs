use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#rrggbb` (leading `#` optional) or one of the CSS names the
    /// built-in themes use. Unparseable channels fall back to 0.
    pub fn hex(s: &str) -> Self {
        if let Some(c) = named(s) {
            return c;
        }
        let s = s.strip_prefix('#').unwrap_or(s);
        let channel = |range: std::ops::Range<usize>| {
            s.get(range).and_then(|h| u8::from_str_radix(h, 16).ok()).unwrap_or(0)
        };
        Self { r: channel(0..2), g: channel(2..4), b: channel(4..6), a: 1.0 }
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            self.to_hex()
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn named(s: &str) -> Option<Color> {
    let c = match s.to_ascii_lowercase().as_str() {
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "lightblue" => Color::rgb(173, 216, 230),
        "steelblue" => Color::rgb(70, 130, 180),
        "orange" => Color::rgb(255, 165, 0),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        _ => return None,
    };
    Some(c)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::hex(&s))
    }
}

// Alpha is not part of the config surface; opacities are configured separately.
impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}
