//! Frame view-model
//!
//! A [`ComboFrame`] is everything the host needs to draw the widget this
//! frame, as plain data: resolved colors and text overrides, the header's
//! children in draw order, the list's rows, and the current transform
//! values. Icon rendering stays with the host — the frame names a glyph,
//! it does not rasterize one.
//!
//! Frames serialize (for recording and snapshot-style assertions) but are
//! never read back; the widget is the single source of truth.

use serde::Serialize;
use tapdown_core::Color;

use crate::driver::ListPlacement;
use crate::style::{Shadow, TextStyle};

/// Name of the disclosure glyph the host's icon library should draw
pub const DISCLOSURE_ICON: &str = "sort-down";

/// The header label
#[derive(Clone, Debug, Serialize)]
pub struct LabelFrame {
    pub text: String,
    pub style: TextStyle,
}

/// The disclosure icon with its current rotation
#[derive(Clone, Debug, Serialize)]
pub struct IconFrame {
    pub name: &'static str,
    pub rotation_deg: f32,
}

/// One child of the header, in draw order
#[derive(Clone, Debug, Serialize)]
pub enum HeaderChild {
    Label(LabelFrame),
    Icon(IconFrame),
}

/// The tappable header showing the current selection
#[derive(Clone, Debug, Serialize)]
pub struct HeaderFrame {
    pub height: f32,
    pub padding_x: f32,
    pub margin_bottom: f32,
    pub background: Color,
    pub shadow: Shadow,
    /// Label and icon in draw order; reversed under right-to-left layout
    pub children: Vec<HeaderChild>,
}

/// One selectable option row
///
/// Activating a row means calling `ComboBox::select_option(index)` with this
/// row's index.
#[derive(Clone, Debug, Serialize)]
pub struct RowFrame {
    pub index: usize,
    pub text: String,
    pub height: f32,
    pub style: TextStyle,
}

/// The floating option list
#[derive(Clone, Debug, Serialize)]
pub struct ListFrame {
    /// Rest height of the container (the transform scales it)
    pub height: f32,
    pub background: Color,
    pub shadow: Shadow,
    pub inset_left: f32,
    pub z_index: u32,
    pub placement: ListPlacement,
    /// The viewport is capped and the rows scroll inside it
    pub scrolls: bool,
    pub rows: Vec<RowFrame>,
}

/// Everything the host draws for one combo box this frame
#[derive(Clone, Debug, Serialize)]
pub struct ComboFrame {
    pub outer_padding: f32,
    pub header: HeaderFrame,
    pub list: ListFrame,
}

impl HeaderFrame {
    /// The label child, wherever direction put it
    pub fn label(&self) -> Option<&LabelFrame> {
        self.children.iter().find_map(|c| match c {
            HeaderChild::Label(l) => Some(l),
            HeaderChild::Icon(_) => None,
        })
    }

    /// The icon child, wherever direction put it
    pub fn icon(&self) -> Option<&IconFrame> {
        self.children.iter().find_map(|c| match c {
            HeaderChild::Icon(i) => Some(i),
            HeaderChild::Label(_) => None,
        })
    }
}
