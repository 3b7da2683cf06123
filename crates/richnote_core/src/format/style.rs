//! Visual style descriptors and the stored span style union.
//!
//! Descriptors only describe *what* a renderer should change; turning them
//! into pixels is left to the UI layer.

use crate::format::action::FormattingAction;
use serde::{Deserialize, Serialize};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextDecoration {
    Underline,
    LineThrough,
}

/// Rendering attributes for one style range.
///
/// Every field is optional; `None` leaves the attribute untouched when styles
/// are composed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// Font size in scale-independent pixels.
    pub font_size: Option<u16>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub text_decoration: Option<TextDecoration>,
    pub background: Option<Color>,
}

impl StyleDescriptor {
    /// Style that sets nothing. Unrecognized stored tags decode to this.
    pub const DEFAULT: StyleDescriptor = StyleDescriptor {
        font_size: None,
        font_weight: None,
        font_style: None,
        text_decoration: None,
        background: None,
    };

    /// Returns whether no attribute is set.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Composes `other` on top of `self`; attributes set by `other` win.
    pub fn merge(&self, other: &StyleDescriptor) -> StyleDescriptor {
        StyleDescriptor {
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            font_style: other.font_style.or(self.font_style),
            text_decoration: other.text_decoration.or(self.text_decoration),
            background: other.background.or(self.background),
        }
    }
}

/// Style stored on one range of an annotated text.
///
/// Catalog styles are kept as their action tag, so reverse lookup never
/// depends on comparing visual attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    /// Style bound to a toolbar action.
    Format(FormattingAction),
    /// Any style outside the catalog, including the default style.
    Custom(StyleDescriptor),
}

impl SpanStyle {
    /// The default (unstyled) appearance.
    pub const DEFAULT: SpanStyle = SpanStyle::Custom(StyleDescriptor::DEFAULT);

    /// Visual attributes this style applies.
    pub fn descriptor(&self) -> StyleDescriptor {
        match self {
            Self::Format(action) => crate::format::catalog::style_for(*action),
            Self::Custom(descriptor) => *descriptor,
        }
    }
}

impl From<FormattingAction> for SpanStyle {
    fn from(value: FormattingAction) -> Self {
        Self::Format(value)
    }
}
