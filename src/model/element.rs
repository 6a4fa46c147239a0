//! Document element types.

use serde::{Deserialize, Serialize};

use super::run::{Alignment, Run};

/// One structural unit of the compiled document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// The document title
    Title(Title),

    /// A heading, level 1-4
    Heading(Heading),

    /// A body paragraph
    Paragraph(Paragraph),

    /// A page break marker
    PageBreak,
}

impl Element {
    /// Runs carried by this element. Page breaks carry none.
    pub fn runs(&self) -> &[Run] {
        match self {
            Element::Title(t) => &t.runs,
            Element::Heading(h) => &h.runs,
            Element::Paragraph(p) => &p.runs,
            Element::PageBreak => &[],
        }
    }

    /// Resolved alignment, if the variant has one.
    pub fn alignment(&self) -> Option<Alignment> {
        match self {
            Element::Title(t) => Some(t.alignment),
            Element::Heading(h) => Some(h.alignment),
            Element::Paragraph(p) => Some(p.alignment),
            Element::PageBreak => None,
        }
    }

    /// Concatenated run text. Reconstructs the source line with all tags
    /// removed.
    pub fn plain_text(&self) -> String {
        concat_runs(self.runs())
    }

    /// Check if this element is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, Element::PageBreak)
    }

    /// Check if this element is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Element::Paragraph(_))
    }
}

/// The document title.
///
/// Always carries exactly one run (center, bold, title size); the compiler
/// emits a blank spacer paragraph immediately after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Alignment, always `Center`
    pub alignment: Alignment,

    /// Runs in the title (exactly one)
    pub runs: Vec<Run>,
}

impl Title {
    /// The title text.
    pub fn plain_text(&self) -> String {
        concat_runs(&self.runs)
    }
}

/// A heading with a level from 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-4)
    pub level: u8,

    /// Resolved alignment
    pub alignment: Alignment,

    /// Styled runs in the heading text
    pub runs: Vec<Run>,
}

impl Heading {
    /// The heading text with tags removed.
    pub fn plain_text(&self) -> String {
        concat_runs(&self.runs)
    }

    /// Font size and base boldness for a heading level.
    ///
    /// Levels outside 1-4 fall back to the level-1 parameters.
    pub fn params(level: u8) -> (u32, bool) {
        match level {
            2 => (14, true),
            3 => (16, true),
            4 => (18, true),
            _ => (14, false),
        }
    }
}

/// A body paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Resolved alignment
    pub alignment: Alignment,

    /// Styled runs in the paragraph text
    pub runs: Vec<Run>,

    /// Whether the renderer should indent the first line
    pub first_line_indent: bool,
}

impl Paragraph {
    /// The blank paragraph the compiler emits after a title.
    ///
    /// It carries no runs; the indent flag stays set because the original
    /// generator's blank paragraph inherits the body style.
    pub fn spacer() -> Self {
        Self {
            alignment: Alignment::default(),
            runs: Vec::new(),
            first_line_indent: true,
        }
    }

    /// The paragraph text with tags removed.
    pub fn plain_text(&self) -> String {
        concat_runs(&self.runs)
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.runs.iter().all(|run| run.text.trim().is_empty())
    }
}

fn concat_runs(runs: &[Run]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TextStyle, Theme};

    #[test]
    fn test_heading_params() {
        assert_eq!(Heading::params(1), (14, false));
        assert_eq!(Heading::params(2), (14, true));
        assert_eq!(Heading::params(3), (16, true));
        assert_eq!(Heading::params(4), (18, true));
        // Unknown levels fall back to the default
        assert_eq!(Heading::params(0), (14, false));
        assert_eq!(Heading::params(9), (14, false));
    }

    #[test]
    fn test_element_plain_text() {
        let theme = Theme::default();
        let para = Element::Paragraph(Paragraph {
            alignment: Alignment::Justify,
            runs: vec![
                Run::new("Hello ", TextStyle::plain(12, &theme)),
                Run::new("world", TextStyle::plain(12, &theme)),
            ],
            first_line_indent: true,
        });

        assert_eq!(para.plain_text(), "Hello world");
        assert_eq!(para.alignment(), Some(Alignment::Justify));
    }

    #[test]
    fn test_page_break_has_no_runs() {
        let brk = Element::PageBreak;
        assert!(brk.is_page_break());
        assert!(brk.runs().is_empty());
        assert_eq!(brk.alignment(), None);
    }

    #[test]
    fn test_spacer_is_blank() {
        let spacer = Paragraph::spacer();
        assert!(spacer.is_blank());
        assert!(spacer.first_line_indent);
    }
}
