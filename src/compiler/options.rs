//! Compilation options.

use crate::model::Theme;

/// Options for compiling markup into a document.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Whether to resolve lines in parallel.
    ///
    /// Lines are mutually independent (no formatting state crosses a line
    /// boundary), so parallel resolution produces byte-identical output in
    /// the same order. Off by default; useful for very large inputs.
    pub parallel: bool,

    /// Typographic defaults; `None` uses the standard theme.
    pub theme: Option<Theme>,
}

impl CompileOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable parallel line resolution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable parallel line resolution.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Override the typographic defaults.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }
}
