//! Alignment and inline-style resolution.
//!
//! A line's text is resolved in three steps: detect the effective alignment
//! from the four alignment tag pairs, strip those pairs, then scan the
//! remaining text with an explicit tokenizer and fold a [`StyleState`] over
//! the token stream to produce styled runs.
//!
//! Tag effects are strictly sequential: an open tag sets its flag, a close
//! tag clears it, and there is no matching stack. `<b>X<i>Y</b>Z</i>` yields
//! a bold "X", a bold italic "Y", and an italic "Z". Closing a style that
//! was never opened is a no-op, and unrecognized tags are dropped silently.

use crate::model::{Alignment, Run, StyleState, Theme};

/// The eight alignment markers, in detection priority order.
const ALIGNMENT_TAGS: [(&str, &str, Alignment); 4] = [
    ("<c>", "</c>", Alignment::Center),
    ("<l>", "</l>", Alignment::Left),
    ("<p>", "</p>", Alignment::Right),
    ("<j>", "</j>", Alignment::Justify),
];

/// One of the three inline style toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTag {
    /// `<b>` / `</b>`
    Bold,
    /// `<i>` / `</i>`
    Italic,
    /// `<z>` / `</z>`
    Underline,
}

/// A token produced by the inline tokenizer.
///
/// Unrecognized tags never reach the token stream; they are dropped during
/// tokenization, exactly as the generator drops them from its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken<'a> {
    /// A literal text span, possibly whitespace-only
    Text(&'a str),

    /// An opening style tag
    Open(StyleTag),

    /// A closing style tag
    Close(StyleTag),
}

/// Detect the effective alignment of a line.
///
/// Presence of both the open and close marker of a pair, anywhere on the
/// line, selects that alignment; position and nesting are not validated.
/// When several pairs are present the first one in priority order wins:
/// center, then left, then right, then justify. No pair means justify.
pub fn detect_alignment(line: &str) -> Alignment {
    for (open, close, alignment) in ALIGNMENT_TAGS {
        if line.contains(open) && line.contains(close) {
            return alignment;
        }
    }
    Alignment::Justify
}

/// Remove all alignment markers from a line, keeping the enclosed content,
/// and trim the result.
pub fn strip_alignment_tags(line: &str) -> String {
    let mut out = line.to_string();
    for (open, close, _) in ALIGNMENT_TAGS {
        out = out.replace(open, "");
        out = out.replace(close, "");
    }
    out.trim().to_string()
}

/// Split text into literal spans and recognized style tags.
///
/// A tag token is a `<`, one or more non-`>` characters, and a `>`; tag
/// names are case-insensitive. A `<` with no following `>`, or an empty
/// `<>`, stays literal text.
pub fn tokenize(text: &str) -> Vec<InlineToken<'_>> {
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let Some(offset) = text[pos..].find('<') else {
            break;
        };
        let open = pos + offset;
        let Some(close_offset) = text[open + 1..].find('>') else {
            break;
        };
        let close = open + 1 + close_offset;

        // "<>" is not a tag; scan past the '<' and leave it literal
        if close == open + 1 {
            pos = open + 1;
            continue;
        }

        if open > text_start {
            tokens.push(InlineToken::Text(&text[text_start..open]));
        }
        if let Some(token) = style_tag(&text[open + 1..close]) {
            tokens.push(token);
        }
        text_start = close + 1;
        pos = close + 1;
    }

    if text_start < text.len() {
        tokens.push(InlineToken::Text(&text[text_start..]));
    }
    tokens
}

/// Map a tag body (the text between the angle brackets) to a style token.
fn style_tag(body: &str) -> Option<InlineToken<'static>> {
    let (name, closing) = match body.strip_prefix('/') {
        Some(rest) => (rest, true),
        None => (body, false),
    };

    let tag = if name.eq_ignore_ascii_case("b") {
        StyleTag::Bold
    } else if name.eq_ignore_ascii_case("i") {
        StyleTag::Italic
    } else if name.eq_ignore_ascii_case("z") {
        StyleTag::Underline
    } else {
        return None;
    };

    Some(if closing {
        InlineToken::Close(tag)
    } else {
        InlineToken::Open(tag)
    })
}

/// Fold the token stream into styled runs.
///
/// The style state starts at `(bold: base_bold, italic: false, underline:
/// false)` and is updated in scan order. Every non-blank text span becomes a
/// run with the state snapshot at that point; whitespace-only spans are
/// dropped. Run text keeps its original surrounding whitespace.
pub fn resolve_runs(text: &str, base_size: u32, base_bold: bool, theme: &Theme) -> Vec<Run> {
    let mut state = StyleState::with_bold(base_bold);
    let mut runs = Vec::new();

    for token in tokenize(text) {
        match token {
            InlineToken::Open(tag) => apply(&mut state, tag, true),
            InlineToken::Close(tag) => apply(&mut state, tag, false),
            InlineToken::Text(span) => {
                if !span.trim().is_empty() {
                    runs.push(Run::new(span, state.snapshot(base_size, theme)));
                }
            }
        }
    }
    runs
}

fn apply(state: &mut StyleState, tag: StyleTag, value: bool) {
    match tag {
        StyleTag::Bold => state.bold = value,
        StyleTag::Italic => state.italic = value,
        StyleTag::Underline => state.underline = value,
    }
}

/// Resolve a line's alignment and styled runs in one pass.
///
/// This is the combined contract used for paragraphs: alignment is detected
/// on the text, alignment markers are stripped, and the remainder is scanned
/// into runs.
pub fn resolve(
    text: &str,
    base_size: u32,
    base_bold: bool,
    theme: &Theme,
) -> (Alignment, Vec<Run>) {
    let alignment = detect_alignment(text);
    let stripped = strip_alignment_tags(text);
    let runs = resolve_runs(&stripped, base_size, base_bold, theme);
    (alignment, runs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme::default()
    }

    #[test]
    fn test_detect_alignment_priority() {
        assert_eq!(detect_alignment("<c>X</c>"), Alignment::Center);
        assert_eq!(detect_alignment("<l>X</l>"), Alignment::Left);
        assert_eq!(detect_alignment("<p>X</p>"), Alignment::Right);
        assert_eq!(detect_alignment("<j>X</j>"), Alignment::Justify);
        assert_eq!(detect_alignment("no tags"), Alignment::Justify);

        // Center wins over left when both pairs are present
        assert_eq!(detect_alignment("<c>X</c><l>Y</l>"), Alignment::Center);
        // Left wins over right
        assert_eq!(detect_alignment("<p>X</p><l>Y</l>"), Alignment::Left);
    }

    #[test]
    fn test_detect_alignment_needs_both_markers() {
        assert_eq!(detect_alignment("<c>unclosed"), Alignment::Justify);
        assert_eq!(detect_alignment("dangling</c>"), Alignment::Justify);
    }

    #[test]
    fn test_strip_alignment_tags() {
        assert_eq!(strip_alignment_tags("<c>Hello</c>"), "Hello");
        assert_eq!(strip_alignment_tags("a<l> b </l>c"), "a b c");
        // Stripping is idempotent on its own output
        let once = strip_alignment_tags("<c><j>text</j></c>");
        assert_eq!(strip_alignment_tags(&once), once);
    }

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello <b>World</b>");
        assert_eq!(
            tokens,
            vec![
                InlineToken::Text("Hello "),
                InlineToken::Open(StyleTag::Bold),
                InlineToken::Text("World"),
                InlineToken::Close(StyleTag::Bold),
            ]
        );
    }

    #[test]
    fn test_tokenize_drops_unknown_tags() {
        let tokens = tokenize("a<x>b</x>c");
        assert_eq!(
            tokens,
            vec![
                InlineToken::Text("a"),
                InlineToken::Text("b"),
                InlineToken::Text("c"),
            ]
        );
    }

    #[test]
    fn test_tokenize_case_insensitive() {
        assert_eq!(tokenize("<B>"), vec![InlineToken::Open(StyleTag::Bold)]);
        assert_eq!(
            tokenize("</Z>"),
            vec![InlineToken::Close(StyleTag::Underline)]
        );
    }

    #[test]
    fn test_tokenize_malformed_brackets_stay_literal() {
        // No closing '>': everything is text
        assert_eq!(tokenize("a <b c"), vec![InlineToken::Text("a <b c")]);
        // Empty "<>" is not a tag
        assert_eq!(
            tokenize("a<>b<i>c"),
            vec![
                InlineToken::Text("a<>b"),
                InlineToken::Open(StyleTag::Italic),
                InlineToken::Text("c"),
            ]
        );
    }

    #[test]
    fn test_resolve_runs_interleaved_styles() {
        let runs = resolve_runs("<b>X<i>Y</b>Z</i>", 12, false, &theme());
        assert_eq!(runs.len(), 3);

        assert_eq!(runs[0].text, "X");
        assert!(runs[0].style.bold && !runs[0].style.italic);

        assert_eq!(runs[1].text, "Y");
        assert!(runs[1].style.bold && runs[1].style.italic);

        assert_eq!(runs[2].text, "Z");
        assert!(!runs[2].style.bold && runs[2].style.italic);
    }

    #[test]
    fn test_resolve_runs_close_without_open() {
        let runs = resolve_runs("a</b>b", 12, false, &theme());
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].style.bold);
        assert!(!runs[1].style.bold);
    }

    #[test]
    fn test_resolve_runs_base_bold() {
        let runs = resolve_runs("Heading</b>tail", 16, true, &theme());
        assert_eq!(runs.len(), 2);
        assert!(runs[0].style.bold);
        assert!(!runs[1].style.bold);
        assert_eq!(runs[0].style.size_pt, 16);
    }

    #[test]
    fn test_resolve_runs_drops_blank_spans() {
        let runs = resolve_runs("<b>  </b>word", 12, false, &theme());
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "word");
    }

    #[test]
    fn test_resolve_runs_keeps_span_whitespace() {
        let runs = resolve_runs("Hello <b>World</b>", 12, false, &theme());
        assert_eq!(runs[0].text, "Hello ");
        assert_eq!(runs[1].text, "World");
    }

    #[test]
    fn test_resolve_plain_text_round_trip() {
        let (alignment, runs) = resolve("just words", 12, false, &theme());
        assert_eq!(alignment, Alignment::Justify);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "just words");
        assert!(!runs[0].style.has_styling());
    }

    #[test]
    fn test_resolve_alignment_and_runs() {
        let (alignment, runs) = resolve("<c>Hello <b>World</b></c>", 12, false, &theme());
        assert_eq!(alignment, Alignment::Center);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Hello ");
        assert_eq!(runs[1].text, "World");
        assert!(runs[1].style.bold);
    }
}
