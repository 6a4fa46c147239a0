//! Line classification.
//!
//! Each non-empty input line is exactly one of: a page-break marker, a title,
//! a heading, or a plain paragraph. Classification only looks at structural
//! tags; alignment and inline style tags stay in the text and are handled by
//! the inline resolver.

/// The literal marker line that starts a new page.
pub const PAGE_BREAK_MARKER: &str = "[PAGE_BREAK]";

const TITLE_OPEN: &str = "<title>";
const TITLE_CLOSE: &str = "</title>";

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifiedLine<'a> {
    /// Empty line, produces no element
    Skip,

    /// The `[PAGE_BREAK]` marker line
    PageBreak,

    /// A `<title>...</title>` line; `text` is the trimmed inner content
    Title {
        /// Inner title text, tags intact
        text: &'a str,
    },

    /// A line containing `<hN>...</hN>`; `text` is the trimmed inner content
    Heading {
        /// Heading level (1-4)
        level: u8,
        /// Inner heading text, alignment/style tags intact
        text: &'a str,
    },

    /// Anything else; `text` is the trimmed line with all tags intact
    Paragraph {
        /// Full line text
        text: &'a str,
    },
}

/// Classify one line of source text.
///
/// Title wins over heading; only the first well-formed heading wrapper on a
/// line is honored. Malformed wrappers (mismatched open/close names, missing
/// close tag) are not an error: the line falls through to `Paragraph` with
/// the literal tag text left in place.
pub fn classify(raw: &str) -> ClassifiedLine<'_> {
    let line = raw.trim();

    if line.is_empty() {
        return ClassifiedLine::Skip;
    }

    if line == PAGE_BREAK_MARKER {
        return ClassifiedLine::PageBreak;
    }

    if let Some(text) = match_title(line) {
        return ClassifiedLine::Title { text };
    }

    if let Some((level, text)) = match_heading(line) {
        return ClassifiedLine::Heading { level, text };
    }

    ClassifiedLine::Paragraph { text: line }
}

/// Match a `<title>...</title>` wrapper spanning the whole line.
///
/// The inner content is non-greedy: it ends at the first `</title>`.
fn match_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(TITLE_OPEN)?;
    if !line.ends_with(TITLE_CLOSE) {
        return None;
    }
    let end = rest.find(TITLE_CLOSE)?;
    Some(rest[..end].trim())
}

/// Find the first `<hN>...</hN>` pair on the line, for N in 1..=4.
///
/// The close tag name must match the open tag name; the inner content is
/// non-greedy (ends at the first matching close tag).
fn match_heading(line: &str) -> Option<(u8, &str)> {
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find("<h") {
        let open = search_from + offset;
        let tail = &line[open..];

        if let Some(level) = heading_open(tail) {
            // "<hN>" is four ASCII bytes
            let content_start = open + 4;
            let close = format!("</h{level}>");
            if let Some(rel) = line[content_start..].find(close.as_str()) {
                let text = line[content_start..content_start + rel].trim();
                return Some((level, text));
            }
        }

        search_from = open + 1;
    }
    None
}

/// Check whether `tail` starts with `<hN>` for N in 1..=4.
fn heading_open(tail: &str) -> Option<u8> {
    let mut chars = tail.chars();
    chars.next()?; // '<'
    chars.next()?; // 'h'
    let digit = chars.next()?;
    if !('1'..='4').contains(&digit) || chars.next() != Some('>') {
        return None;
    }
    Some(digit as u8 - b'0')
}
