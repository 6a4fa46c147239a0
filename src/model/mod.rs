//! Document model types.
//!
//! This module defines the intermediate representation that bridges markup
//! compilation and document rendering: an ordered sequence of typed elements,
//! each carrying resolved alignment and styled text runs, plus the fixed
//! typographic defaults of the generator.

mod document;
mod element;
mod run;
mod theme;

pub use document::Document;
pub use element::{Element, Heading, Paragraph, Title};
pub use run::{Alignment, Run, StyleState, TextStyle};
pub use theme::{PageGeometry, Theme, DEFAULT_COLOR, DEFAULT_FONT};
