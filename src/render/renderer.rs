//! Renderer contract for compiled documents.
//!
//! The compiler hands a finished [`Document`] to a renderer, which receives
//! elements strictly in source order. A renderer is expected to draw
//! title/heading/paragraph text with the element's alignment and per-run
//! style, honor the first-line indent on paragraphs, start a new page on
//! page breaks, and apply the document theme's page geometry and spacing.
//!
//! # Example
//!
//! ```
//! use tagdoc::model::Heading;
//! use tagdoc::render::{render, DocumentRenderer};
//! use tagdoc::Result;
//!
//! #[derive(Default)]
//! struct Outline(Vec<String>);
//!
//! impl DocumentRenderer for Outline {
//!     fn heading(&mut self, heading: &Heading) -> Result<()> {
//!         self.0.push(format!("{} {}", heading.level, heading.plain_text()));
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let doc = tagdoc::compile_str("<h1>Intro</h1>\n<h2>Detail</h2>")?;
//! let mut outline = Outline::default();
//! render(&doc, &mut outline)?;
//! assert_eq!(outline.0, vec!["1 Intro", "2 Detail"]);
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::model::{Document, Element, Heading, Paragraph, Title};

/// Trait for consuming a compiled document element by element.
///
/// All methods default to doing nothing, so a renderer only needs to
/// implement the element kinds it cares about.
pub trait DocumentRenderer {
    /// Called for the document title.
    fn title(&mut self, title: &Title) -> Result<()> {
        let _ = title;
        Ok(())
    }

    /// Called for each heading.
    fn heading(&mut self, heading: &Heading) -> Result<()> {
        let _ = heading;
        Ok(())
    }

    /// Called for each paragraph, including blank spacers.
    fn paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let _ = paragraph;
        Ok(())
    }

    /// Called for each page break.
    fn page_break(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Feed every element of a document to a renderer, in order.
pub fn render<R: DocumentRenderer + ?Sized>(doc: &Document, renderer: &mut R) -> Result<()> {
    for element in doc {
        match element {
            Element::Title(t) => renderer.title(t)?,
            Element::Heading(h) => renderer.heading(h)?,
            Element::Paragraph(p) => renderer.paragraph(p)?,
            Element::PageBreak => renderer.page_break()?,
        }
    }
    Ok(())
}
