//! Plain text rendering.

use crate::error::Result;
use crate::model::{Document, Heading, Paragraph, Title};

use super::renderer::{render, DocumentRenderer};

/// Convert a document to plain text, one line per element.
///
/// Blank spacer paragraphs are dropped and page breaks become form feeds.
pub fn to_text(doc: &Document) -> Result<String> {
    let mut renderer = TextRenderer::default();
    render(doc, &mut renderer)?;
    Ok(renderer.finish())
}

/// The built-in mechanical renderer: collects visible element text.
#[derive(Debug, Default)]
struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

impl DocumentRenderer for TextRenderer {
    fn title(&mut self, title: &Title) -> Result<()> {
        self.lines.push(title.plain_text());
        Ok(())
    }

    fn heading(&mut self, heading: &Heading) -> Result<()> {
        self.lines.push(heading.plain_text());
        Ok(())
    }

    fn paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        if !paragraph.is_blank() {
            self.lines.push(paragraph.plain_text());
        }
        Ok(())
    }

    fn page_break(&mut self) -> Result<()> {
        self.lines.push("\u{c}".to_string());
        Ok(())
    }
}
