//! Markup compilation.
//!
//! The compiler splits input into lines, classifies each line, and builds
//! document elements in source order. Each element builder feeds the line's
//! text through the inline resolver with variant-specific base size and
//! weight.

pub mod classify;
pub mod inline;
mod options;

pub use classify::{classify, ClassifiedLine, PAGE_BREAK_MARKER};
pub use inline::{InlineToken, StyleTag};
pub use options::CompileOptions;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::model::{
    Alignment, Document, Element, Heading, Paragraph, Run, StyleState, Theme, Title,
};

/// Compiles tag markup into a [`Document`].
///
/// The compiler is pure: it holds only immutable configuration, and
/// `compile` is a bounded transformation of its input. Malformed tags never
/// fail compilation; the only error is empty input.
pub struct Compiler {
    theme: Theme,
    options: CompileOptions,
}

impl Compiler {
    /// Create a compiler with default options and typography.
    pub fn new() -> Self {
        Self::with_options(CompileOptions::default())
    }

    /// Create a compiler with custom options.
    pub fn with_options(options: CompileOptions) -> Self {
        let theme = options.theme.clone().unwrap_or_default();
        Self { theme, options }
    }

    /// The typographic defaults this compiler stamps onto documents.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Compile input text into an ordered element sequence.
    ///
    /// Returns [`Error::EmptyInput`] if the input is empty or
    /// whitespace-only; compilation does not start in that case.
    pub fn compile(&self, input: &str) -> Result<Document> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyInput);
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        let elements: Vec<Element> = if self.options.parallel {
            lines
                .par_iter()
                .map(|line| self.compile_line(line))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            lines
                .iter()
                .flat_map(|line| self.compile_line(line))
                .collect()
        };

        log::debug!(
            "compiled {} lines into {} elements",
            lines.len(),
            elements.len()
        );
        Ok(Document::from_elements(elements, self.theme.clone()))
    }

    /// Compile one line into zero, one, or two elements.
    ///
    /// A title yields two (the title plus its spacer); an empty line or a
    /// line reduced to nothing by tag stripping yields zero.
    fn compile_line(&self, raw: &str) -> Vec<Element> {
        match classify(raw) {
            ClassifiedLine::Skip => Vec::new(),
            ClassifiedLine::PageBreak => vec![Element::PageBreak],
            ClassifiedLine::Title { text } => self.build_title(text),
            ClassifiedLine::Heading { level, text } => {
                vec![self.build_heading(raw, level, text)]
            }
            ClassifiedLine::Paragraph { text } => {
                self.build_paragraph(text).into_iter().collect()
            }
        }
    }

    /// Build the title element and its trailing blank spacer.
    ///
    /// The title takes its inner text verbatim as a single centered bold run;
    /// inline tags inside a title are not interpreted.
    fn build_title(&self, text: &str) -> Vec<Element> {
        let style = StyleState::with_bold(true).snapshot(self.theme.title_size_pt, &self.theme);
        let title = Title {
            alignment: Alignment::Center,
            runs: vec![Run::new(text, style)],
        };
        vec![Element::Title(title), Element::Paragraph(Paragraph::spacer())]
    }

    /// Build a heading element.
    ///
    /// Alignment is detected on the whole original line, so alignment tags
    /// outside the heading wrapper still take effect; the inner text is
    /// resolved with the level's base size and weight.
    fn build_heading(&self, line: &str, level: u8, text: &str) -> Element {
        let (size, bold) = Heading::params(level);
        let alignment = inline::detect_alignment(line);
        let stripped = inline::strip_alignment_tags(text);
        let runs = inline::resolve_runs(&stripped, size, bold, &self.theme);
        Element::Heading(Heading {
            level,
            alignment,
            runs,
        })
    }

    /// Build a paragraph element, or nothing if stripping the alignment tags
    /// leaves no text at all.
    fn build_paragraph(&self, text: &str) -> Option<Element> {
        let alignment = inline::detect_alignment(text);
        let stripped = inline::strip_alignment_tags(text);
        if stripped.is_empty() {
            return None;
        }

        let runs = inline::resolve_runs(&stripped, self.theme.body_size_pt, false, &self.theme);
        Some(Element::Paragraph(Paragraph {
            alignment,
            runs,
            first_line_indent: true,
        }))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}
