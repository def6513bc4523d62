//! Style configuration
//!
//! One immutable [`ComboStyle`] bag holds everything visual: the caller's
//! optional text overrides, the background, the layout direction, and the
//! fixed reference metrics and shadow presets. It is constructed once by the
//! builder and never mutated afterwards.
//!
//! All style types are serde-serializable so a host can ship styling as data
//! (`serde_json::from_str::<ComboStyle>(…)`); omitted fields fall back to
//! the documented defaults.

use serde::{Deserialize, Serialize};
use tapdown_core::{Color, Vec2};

/// Layout direction for the header's internal arrangement
///
/// Affects only the ordering of the header's label and disclosure icon,
/// never the option rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }
}

/// Text presentation overrides
///
/// Absent fields mean "inherit the platform default"; the widget never
/// invents a fallback font or color of its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
}

/// Drop shadow derived from a Material-style elevation scalar
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub elevation: f32,
    pub color: Color,
    pub offset: Vec2,
    pub opacity: f32,
    pub radius: f32,
}

impl Shadow {
    /// The reference shadow formula: offset grows half a unit and blur 0.8
    /// units per elevation step, at 30% black.
    pub fn from_elevation(elevation: f32) -> Self {
        Self {
            elevation,
            color: Color::BLACK,
            offset: Vec2::new(1.0, 0.5 * elevation),
            opacity: 0.3,
            radius: 0.8 * elevation,
        }
    }
}

/// Fixed reference metrics for the control, in platform units
///
/// These are the constants of the reference sizing; they are carried in the
/// style bag so the frame view-model can be computed without any global
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Header row height
    pub header_height: f32,
    /// Horizontal padding inside header and rows
    pub padding_x: f32,
    /// Padding around the whole control
    pub outer_padding: f32,
    /// Space reserved below the header
    pub header_margin_bottom: f32,
    /// Height of one option row
    pub row_height: f32,
    /// Rows visible before the list viewport caps and scrolls internally
    pub max_visible_rows: usize,
    /// Viewport height once the row count exceeds `max_visible_rows`
    pub capped_height: f32,
    /// Collapsed list anchor: offset of the list's top edge below the
    /// header's top while fully closed
    pub header_anchor: f32,
    /// Gap between header and list once fully open
    pub list_gap: f32,
    /// Horizontal inset of the floating list
    pub list_inset: f32,
    /// Stacking order of the floating list over following content
    pub list_z_index: u32,
    pub header_elevation: f32,
    pub list_elevation: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            header_height: 60.0,
            padding_x: 25.0,
            outer_padding: 5.0,
            header_margin_bottom: 20.0,
            row_height: 60.0,
            max_visible_rows: 5,
            capped_height: 300.0,
            header_anchor: 55.0,
            list_gap: 10.0,
            list_inset: 5.0,
            list_z_index: 10,
            header_elevation: 4.0,
            list_elevation: 3.0,
        }
    }
}

/// The immutable style bag for one combo box instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComboStyle {
    pub text_color: Option<Color>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    /// Header and list background
    pub background: Color,
    pub direction: LayoutDirection,
    pub metrics: Metrics,
}

impl Default for ComboStyle {
    fn default() -> Self {
        Self {
            text_color: None,
            font_family: None,
            font_size: None,
            background: Color::WHITE,
            direction: LayoutDirection::default(),
            metrics: Metrics::default(),
        }
    }
}

impl ComboStyle {
    /// The resolved text overrides applied to the header label and rows
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            color: self.text_color,
            font_family: self.font_family.clone(),
            font_size: self.font_size,
        }
    }
}
