//! # tagdoc
//!
//! Compiler for a minimal tag markup language into typed document elements.
//!
//! Plain text annotated with a small fixed tag set (title, headings `h1`-`h4`,
//! a page-break marker, alignment pairs, and bold/italic/underline toggles)
//! is compiled into an ordered sequence of elements carrying resolved
//! alignment and run-level formatting, ready for a document renderer.
//!
//! ## Quick Start
//!
//! ```
//! use tagdoc::{compile_str, render};
//!
//! fn main() -> tagdoc::Result<()> {
//!     let doc = compile_str("<title>Report</title>\n<c>Hello <b>World</b></c>")?;
//!
//!     let json = render::to_json(&doc, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## The tag language
//!
//! - `[PAGE_BREAK]` on a line of its own starts a new page
//! - `<title>...</title>` spanning a whole line is the document title
//! - `<h1>...</h1>` through `<h4>...</h4>` are headings
//! - `<c>`/`</c>`, `<l>`/`</l>`, `<p>`/`</p>`, `<j>`/`</j>` select center,
//!   left, right, and justified alignment
//! - `<b>`, `<i>`, `<z>` toggle bold, italic, and underline; close tags
//!   clear the flag in scan order, with no nesting validation
//!
//! Malformed markup never fails compilation: unmatched wrappers fall through
//! to paragraph text and unknown tags are dropped.

pub mod compiler;
pub mod error;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use compiler::{classify, ClassifiedLine, CompileOptions, Compiler, PAGE_BREAK_MARKER};
pub use error::{Error, Result};
pub use model::{
    Alignment, Document, Element, Heading, PageGeometry, Paragraph, Run, StyleState, TextStyle,
    Theme, Title,
};
pub use render::{DocumentRenderer, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Compile markup text into a structured document.
///
/// # Example
///
/// ```
/// let doc = tagdoc::compile_str("<h1>Intro</h1>").unwrap();
/// assert_eq!(doc.element_count(), 1);
/// ```
pub fn compile_str(input: &str) -> Result<Document> {
    Compiler::new().compile(input)
}

/// Compile markup text with custom options.
pub fn compile_str_with_options(input: &str, options: CompileOptions) -> Result<Document> {
    Compiler::with_options(options).compile(input)
}

/// Compile markup from a reader.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
///
/// let file = File::open("input.txt").unwrap();
/// let doc = tagdoc::compile_reader(file).unwrap();
/// ```
pub fn compile_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    compile_str(&input)
}

/// Compile markup from a reader with custom options.
pub fn compile_reader_with_options<R: Read>(
    mut reader: R,
    options: CompileOptions,
) -> Result<Document> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    compile_str_with_options(&input, options)
}

/// Compile a markup file.
///
/// # Example
///
/// ```no_run
/// let doc = tagdoc::compile_file("input.txt").unwrap();
/// println!("Elements: {}", doc.element_count());
/// ```
pub fn compile_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let input = std::fs::read_to_string(path)?;
    compile_str(&input)
}

/// Compile a markup file with custom options.
pub fn compile_file_with_options<P: AsRef<Path>>(
    path: P,
    options: CompileOptions,
) -> Result<Document> {
    let input = std::fs::read_to_string(path)?;
    compile_str_with_options(&input, options)
}

/// Builder for compiling and rendering documents.
///
/// # Example
///
/// ```
/// use tagdoc::{JsonFormat, Tagdoc};
///
/// let json = Tagdoc::new()
///     .compile("<h1>Intro</h1>\nBody text.")?
///     .to_json(JsonFormat::Compact)?;
/// # Ok::<(), tagdoc::Error>(())
/// ```
pub struct Tagdoc {
    options: CompileOptions,
}

impl Tagdoc {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: CompileOptions::default(),
        }
    }

    /// Resolve lines in parallel.
    pub fn parallel(mut self) -> Self {
        self.options = self.options.parallel();
        self
    }

    /// Override the typographic defaults.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options = self.options.with_theme(theme);
        self
    }

    /// Compile input and return a result wrapper.
    pub fn compile(self, input: &str) -> Result<TagdocResult> {
        let document = Compiler::with_options(self.options).compile(input)?;
        Ok(TagdocResult { document })
    }
}

impl Default for Tagdoc {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of compiling markup.
pub struct TagdocResult {
    /// The compiled document
    pub document: Document,
}

impl TagdocResult {
    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Get plain text without rendering.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_str() {
        let doc = compile_str("<h2>Hi</h2>").unwrap();
        assert_eq!(doc.element_count(), 1);
    }

    #[test]
    fn test_compile_str_empty() {
        assert!(matches!(compile_str("   "), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_compile_reader() {
        let input = b"line one\nline two" as &[u8];
        let doc = compile_reader(input).unwrap();
        assert_eq!(doc.element_count(), 2);
    }

    #[test]
    fn test_builder() {
        let result = Tagdoc::new()
            .parallel()
            .compile("<title>T</title>\nbody")
            .unwrap();

        assert_eq!(result.document().element_count(), 3);
        assert_eq!(result.plain_text(), "T\n\nbody");
    }

    #[test]
    fn test_builder_with_theme() {
        let mut theme = Theme::default();
        theme.body_size_pt = 11;

        let result = Tagdoc::new().with_theme(theme).compile("body").unwrap();
        let Element::Paragraph(p) = &result.document().elements[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.runs[0].style.size_pt, 11);
    }
}
