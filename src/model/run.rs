//! Run and text-style types.

use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// A contiguous span of text sharing one formatting state.
///
/// Runs never overlap in source position, and a run's text is never
/// whitespace-only; blank segments between tags are dropped during
/// compilation instead of being emitted as empty runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// The text content, with all tags removed
    pub text: String,

    /// Formatting snapshot taken when the run was emitted
    pub style: TextStyle,
}

impl Run {
    /// Create a new run.
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Resolved formatting of a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font size in points
    pub size_pt: u32,

    /// Font family
    pub font_name: String,

    /// Text color (hex format, e.g. "#000000")
    pub color: String,
}

impl TextStyle {
    /// Plain body style at the given size, with the theme's font and color.
    pub fn plain(size_pt: u32, theme: &Theme) -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            size_pt,
            font_name: theme.font_name.clone(),
            color: theme.color.clone(),
        }
    }

    /// Check if any toggleable styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

/// Mutable bold/italic/underline cursor carried across one line's tag scan.
///
/// The state is threaded as a value through a fold over inline tokens and is
/// reset for every line; it never persists across lines or elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleState {
    /// Bold flag
    pub bold: bool,

    /// Italic flag
    pub italic: bool,

    /// Underline flag
    pub underline: bool,
}

impl StyleState {
    /// Seed a state with a base bold flag (headings and titles start bold).
    pub fn with_bold(bold: bool) -> Self {
        Self {
            bold,
            ..Default::default()
        }
    }

    /// Freeze the current state into a run style.
    pub fn snapshot(&self, size_pt: u32, theme: &Theme) -> TextStyle {
        TextStyle {
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            size_pt,
            font_name: theme.font_name.clone(),
            color: theme.color.clone(),
        }
    }
}

/// Paragraph alignment.
///
/// The generator's default is justified, not left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment (default)
    #[default]
    Justify,
}
