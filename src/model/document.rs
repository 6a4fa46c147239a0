//! Document-level types.

use serde::{Deserialize, Serialize};

use super::element::Element;
use super::theme::Theme;

/// A compiled document: an ordered sequence of elements plus the fixed
/// typographic defaults the renderer collaborator should apply.
///
/// Element order is a deterministic function of input line order; the
/// compiler owns the document while building it and hands it off whole.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Elements in source order
    pub elements: Vec<Element>,

    /// Typographic defaults for rendering
    pub theme: Theme,
}

impl Document {
    /// Create a new empty document with default typography.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            theme: Theme::default(),
        }
    }

    /// Create a document from pre-built elements.
    pub fn from_elements(elements: Vec<Element>, theme: Theme) -> Self {
        Self { elements, theme }
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Number of elements in the document.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Plain text content of the whole document, one line per element.
    ///
    /// Page breaks contribute nothing; blank spacer paragraphs contribute an
    /// empty line.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter(|e| !e.is_page_break())
            .map(|e| e.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Paragraph, Run, TextStyle};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.element_count(), 0);
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_document_plain_text() {
        let theme = Theme::default();
        let mut doc = Document::new();
        doc.push(Element::Paragraph(Paragraph {
            alignment: Alignment::Justify,
            runs: vec![Run::new("First", TextStyle::plain(12, &theme))],
            first_line_indent: true,
        }));
        doc.push(Element::PageBreak);
        doc.push(Element::Paragraph(Paragraph {
            alignment: Alignment::Justify,
            runs: vec![Run::new("Second", TextStyle::plain(12, &theme))],
            first_line_indent: true,
        }));

        assert_eq!(doc.element_count(), 3);
        assert_eq!(doc.plain_text(), "First\nSecond");
    }
}
