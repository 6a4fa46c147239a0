//! Rendering module: mechanical consumers of compiled documents.
//!
//! The real output backend (a binary document writer) is an external
//! collaborator that implements [`DocumentRenderer`]; this module only ships
//! the contract plus the simple built-in JSON and plain-text consumers.

mod json;
mod renderer;
mod text;

pub use json::{to_json, JsonFormat};
pub use renderer::{render, DocumentRenderer};
pub use text::to_text;
