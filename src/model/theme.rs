//! Fixed typographic defaults.
//!
//! The original generator hard-codes its typography; none of these values
//! are user-facing options. They live in one immutable [`Theme`] value that
//! is injected into the compiler at construction, so the compiler itself
//! stays pure and testable.

use serde::{Deserialize, Serialize};

/// Default font family applied to every run.
pub const DEFAULT_FONT: &str = "Times New Roman";

/// Default text color (hex), pure black.
pub const DEFAULT_COLOR: &str = "#000000";

/// Typographic defaults carried alongside the compiled document.
///
/// The compiler stamps `font_name`/`color` and the per-variant point sizes
/// onto runs; the spacing and page fields are for the renderer collaborator,
/// which applies page geometry and spacing when drawing elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Font family for all runs
    pub font_name: String,

    /// Text color for all runs (hex format)
    pub color: String,

    /// Body text size in points
    pub body_size_pt: u32,

    /// Title text size in points
    pub title_size_pt: u32,

    /// Line spacing multiplier
    pub line_spacing: f32,

    /// First-line indent for paragraphs in centimeters
    pub first_line_indent_cm: f32,

    /// Space after a paragraph in centimeters
    pub paragraph_space_after_cm: f32,

    /// Space before and after a heading in centimeters
    pub heading_space_cm: f32,

    /// Space after the document title in centimeters
    pub title_space_after_cm: f32,

    /// Page geometry
    pub page: PageGeometry,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_name: DEFAULT_FONT.to_string(),
            color: DEFAULT_COLOR.to_string(),
            body_size_pt: 12,
            title_size_pt: 20,
            line_spacing: 1.15,
            first_line_indent_cm: 1.25,
            paragraph_space_after_cm: 0.5,
            heading_space_cm: 0.3,
            title_space_after_cm: 1.0,
            page: PageGeometry::default(),
        }
    }
}

/// Page size and margins in centimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width in centimeters
    pub width_cm: f32,

    /// Page height in centimeters
    pub height_cm: f32,

    /// Left margin in centimeters
    pub margin_left_cm: f32,

    /// Right margin in centimeters
    pub margin_right_cm: f32,

    /// Top margin in centimeters
    pub margin_top_cm: f32,

    /// Bottom margin in centimeters
    pub margin_bottom_cm: f32,
}

impl PageGeometry {
    /// A4 page (210 x 297 mm) with the generator's fixed margins.
    pub fn a4() -> Self {
        Self {
            width_cm: 21.0,
            height_cm: 29.7,
            margin_left_cm: 3.0,
            margin_right_cm: 2.0,
            margin_top_cm: 2.0,
            margin_bottom_cm: 2.0,
        }
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width_cm > self.height_cm
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::default();
        assert_eq!(theme.font_name, "Times New Roman");
        assert_eq!(theme.color, "#000000");
        assert_eq!(theme.body_size_pt, 12);
        assert_eq!(theme.title_size_pt, 20);
        assert_eq!(theme.line_spacing, 1.15);
    }

    #[test]
    fn test_page_geometry_a4() {
        let page = PageGeometry::a4();
        assert_eq!(page.width_cm, 21.0);
        assert_eq!(page.height_cm, 29.7);
        assert_eq!(page.margin_left_cm, 3.0);
        assert_eq!(page.margin_right_cm, 2.0);
        assert!(!page.is_landscape());
    }
}
