//! HTML-to-text conversion and small text helpers.

use crate::encoding;
use crate::entities;
use crate::tokenizer::{Token, Tokenizer};

/// Converts HTML to plain text.
///
/// Every start and end tag is replaced by `tag_replace`, text runs are kept
/// verbatim and character references are decoded. The result is trimmed and
/// runs of whitespace are collapsed to a single space.
///
/// # Example
///
/// ```rust
/// use webtext::HtmlToText;
///
/// let converter = HtmlToText {
///     tag_replace: " | ".to_string(),
/// };
/// assert_eq!(converter.convert("<td>a</td><td>b</td>"), "| a | | b |");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlToText {
    /// Replacement emitted for each start and end tag.
    ///
    /// Default: `" "`
    pub tag_replace: String,
}

impl Default for HtmlToText {
    fn default() -> Self {
        Self {
            tag_replace: " ".to_string(),
        }
    }
}

impl HtmlToText {
    /// Create a converter with the given tag replacement token.
    #[must_use]
    pub fn new(tag_replace: impl Into<String>) -> Self {
        Self {
            tag_replace: tag_replace.into(),
        }
    }

    /// Convert an already decoded HTML string.
    #[must_use]
    pub fn convert(&self, html: &str) -> String {
        let raw = Tokenizer::new(html).fold(String::with_capacity(html.len()), |mut out, token| {
            match token {
                Token::StartTag {
                    self_closing: true, ..
                } => {
                    out.push_str(&self.tag_replace);
                    out.push_str(&self.tag_replace);
                }
                Token::StartTag { .. } | Token::EndTag { .. } => out.push_str(&self.tag_replace),
                Token::Text(text) => out.push_str(text),
                Token::Entity(reference) => match entities::decode_reference(reference) {
                    Some(c) => out.push(c),
                    None => out.push_str(reference),
                },
            }
            out
        });
        normalize_whitespace(raw.trim())
    }

    /// Decode HTML bytes with the detected charset, then convert.
    #[must_use]
    pub fn convert_bytes(&self, html: &[u8]) -> String {
        self.convert(&encoding::decode_html(html))
    }
}

/// Turn HTML bytes into plain text using the default tag replacement.
///
/// The charset is taken from a `<meta>` declaration, or guessed, falling
/// back to UTF-8.
///
/// # Examples
///
/// ```
/// use webtext::html_to_text;
///
/// assert_eq!(html_to_text(b"<p>Hello&nbsp;World</p>"), "Hello World");
/// assert_eq!(html_to_text(b"A&#65;B"), "AAB");
/// ```
#[must_use]
pub fn html_to_text(html: &[u8]) -> String {
    HtmlToText::default().convert_bytes(html)
}

/// Collapse runs of ASCII whitespace (space, tab, line breaks, vertical tab
/// and form feed) into single spaces.
///
/// Leading and trailing whitespace is kept as a single space, so callers
/// that want it gone trim first.
#[must_use]
pub fn normalize_whitespace(s: &str) -> String {
    let is_space = |c: char| matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0b' | '\x0c');
    let mut out = String::with_capacity(s.len());
    if s.starts_with(is_space) {
        out.push(' ');
    }
    for (i, word) in s.split(is_space).filter(|w| !w.is_empty()).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(word);
    }
    if s.ends_with(is_space) && !out.ends_with(' ') {
        out.push(' ');
    }
    out
}

/// Obfuscate an email address for display.
///
/// ```
/// use webtext::munge_email;
///
/// assert_eq!(munge_email("a.b@example.com"), "a DOT b AT example DOT com");
/// ```
#[must_use]
pub fn munge_email(s: &str) -> String {
    s.replace('@', " AT ").replace('.', " DOT ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_become_spaces() {
        assert_eq!(HtmlToText::default().convert("<p>Hello</p><p>World</p>"), "Hello World");
    }

    #[test]
    fn custom_tag_replacement() {
        let converter = HtmlToText::new("|");
        assert_eq!(converter.convert("<b>x</b>"), "|x|");
    }

    #[test]
    fn empty_tag_replacement_joins_text() {
        let converter = HtmlToText::new("");
        assert_eq!(converter.convert("foo<b>bar</b>baz"), "foobarbaz");
    }

    #[test]
    fn self_closing_emits_two_replacements() {
        let converter = HtmlToText::new("|");
        assert_eq!(converter.convert("a<br/>b"), "a||b");
    }

    #[test]
    fn unresolvable_references_are_kept() {
        assert_eq!(HtmlToText::default().convert("&bogus; &#xD800;"), "&bogus; &#xD800;");
    }

    #[test]
    fn decoded_entities_are_not_reparsed() {
        assert_eq!(HtmlToText::default().convert("&lt;b&gt;bold&lt;/b&gt;"), "<b>bold</b>");
    }

    #[test]
    fn normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("a \t b\r\n\nc"), "a b c");
    }

    #[test]
    fn normalize_whitespace_keeps_single_edge_space() {
        assert_eq!(normalize_whitespace("  a  b \n"), " a b ");
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("   "), " ");
    }

    #[test]
    fn normalize_whitespace_collapses_form_feed_and_vertical_tab() {
        assert_eq!(normalize_whitespace("a\x0c\x0cb\x0b c"), "a b c");
    }

    #[test]
    fn munge_email_without_dots_or_at() {
        assert_eq!(munge_email("nobody"), "nobody");
        assert_eq!(munge_email("x@y"), "x AT y");
    }
}
