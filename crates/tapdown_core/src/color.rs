//! Linear RGBA color model with CSS-style string parsing
//!
//! Widget options that take colors accept either a [`Color`] value or a
//! CSS-style string (`"white"`, `"#fff"`, `"#20242c"`, `"#20242cff"`), so
//! hosts can pass styling straight through from data.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A color in linear RGBA space, components in [0.0, 1.0]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Return this color with a different alpha
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linearly interpolate toward `other` by factor `t`
    pub fn lerp(&self, other: &Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Failure to parse a CSS-style color string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("unknown color name: {0:?}")]
    UnknownName(String),
    #[error("invalid hex color: {0:?} (expected #rgb, #rrggbb, or #rrggbbaa)")]
    InvalidHex(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `"white"`, `"#fff"`, `"#20242c"`, or `"#20242cff"`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
        }
        parse_named(input).ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }
}

/// Parse hex digits after the `#`: RGB, RRGGBB, or RRGGBBAA
fn parse_hex(hex: &str) -> Option<Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1].repeat(2))?;
            let g = channel(&hex[1..2].repeat(2))?;
            let b = channel(&hex[2..3].repeat(2))?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = channel(&hex[6..8])?;
            Some(Color::rgba(r, g, b, a))
        }
        _ => None,
    }
}

/// Named colors, the subset mobile style sheets actually use
fn parse_named(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::RED),
        "green" => Some(Color::rgb(0.0, 0.5, 0.0)),
        "blue" => Some(Color::BLUE),
        "yellow" => Some(Color::YELLOW),
        "gray" | "grey" => Some(Color::GRAY),
        "orange" => Some(Color::ORANGE),
        "purple" => Some(Color::PURPLE),
        "transparent" => Some(Color::TRANSPARENT),
        _ => None,
    }
}
