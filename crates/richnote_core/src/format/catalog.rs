//! Action <-> style lookup table.

use crate::format::action::FormattingAction;
use crate::format::style::{Color, FontStyle, FontWeight, SpanStyle, StyleDescriptor, TextDecoration};

const HEADING_FONT_SIZE: u16 = 24;
const SUB_HEADING_FONT_SIZE: u16 = 20;

/// Returns the style descriptor bound to `action`.
pub fn style_for(action: FormattingAction) -> StyleDescriptor {
    match action {
        FormattingAction::Heading => StyleDescriptor {
            font_size: Some(HEADING_FONT_SIZE),
            ..StyleDescriptor::DEFAULT
        },
        FormattingAction::SubHeading => StyleDescriptor {
            font_size: Some(SUB_HEADING_FONT_SIZE),
            ..StyleDescriptor::DEFAULT
        },
        FormattingAction::Bold => StyleDescriptor {
            font_weight: Some(FontWeight::Bold),
            ..StyleDescriptor::DEFAULT
        },
        FormattingAction::Italics => StyleDescriptor {
            font_style: Some(FontStyle::Italic),
            ..StyleDescriptor::DEFAULT
        },
        FormattingAction::Underline => StyleDescriptor {
            text_decoration: Some(TextDecoration::Underline),
            ..StyleDescriptor::DEFAULT
        },
        FormattingAction::Strikethrough => StyleDescriptor {
            text_decoration: Some(TextDecoration::LineThrough),
            ..StyleDescriptor::DEFAULT
        },
        FormattingAction::Highlight => StyleDescriptor {
            background: Some(Color::YELLOW),
            ..StyleDescriptor::DEFAULT
        },
    }
}

/// Resolves a stored span style to its action.
///
/// Custom descriptors resolve when they equal a catalog entry exactly.
/// Returns `None` for the default style and any other descriptor.
pub fn action_for(style: &SpanStyle) -> Option<FormattingAction> {
    match style {
        SpanStyle::Format(action) => Some(*action),
        SpanStyle::Custom(descriptor) => action_for_descriptor(descriptor),
    }
}

/// Resolves an untagged descriptor by value equality against the catalog.
pub fn action_for_descriptor(descriptor: &StyleDescriptor) -> Option<FormattingAction> {
    FormattingAction::ALL
        .into_iter()
        .find(|action| style_for(*action) == *descriptor)
}

/// Toolbar label for `action`.
pub fn label_for(action: FormattingAction) -> &'static str {
    match action {
        FormattingAction::Heading => "Title",
        FormattingAction::SubHeading => "Subtitle",
        FormattingAction::Bold => "Bold",
        FormattingAction::Italics => "Italic",
        FormattingAction::Underline => "Underline",
        FormattingAction::Strikethrough => "Strikethrough",
        FormattingAction::Highlight => "Highlight",
    }
}
