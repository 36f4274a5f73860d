//! Character encoding detection and decoding.
//!
//! Web pages announce their charset in a `<meta>` tag often enough that a
//! regex scan is the first thing tried. When no declaration is present the
//! bytes are handed to a statistical detector (the `detect` feature).

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Match `<meta charset="...">` or `<meta ... charset='...'>`.
///
/// Only quoted values are accepted; the quotes are part of the capture so
/// both styles share one group.
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^a-z<>]+charset=("[^"]+"|'[^']+')"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the character encoding of an HTML document.
///
/// Looks for, in order:
/// 1. `<meta charset="...">` (single or double quotes, any case)
/// 2. `<meta http-equiv="Content-Type" content="...; charset=...">`
/// 3. A statistical guess over the raw bytes (requires the `detect` feature)
///
/// The declared label is returned exactly as written in the document, e.g.
/// `"iso-8859-1"`. Returns `None` when nothing is declared and no guess can
/// be made.
///
/// # Examples
///
/// ```
/// use webtext::encoding::get_encoding;
///
/// let html = br#"<html><head><meta charset="iso-8859-1"></head></html>"#;
/// assert_eq!(get_encoding(html).as_deref(), Some("iso-8859-1"));
/// ```
#[must_use]
pub fn get_encoding(html: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(html);

    if let Some(charset) = extract_charset(&text) {
        tracing::trace!(%charset, "charset declared in meta tag");
        return Some(charset);
    }

    if let Some(charset) = extract_content_type_charset(&text) {
        tracing::trace!(%charset, "charset declared in http-equiv meta tag");
        return Some(charset);
    }

    let guess = guess_encoding(html);
    tracing::trace!(guess = ?guess, "no charset declaration, using detector");
    guess
}

/// Extract the value of a quoted `<meta ... charset=...>` attribute.
fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| {
            let quoted = m.as_str();
            quoted[1..quoted.len() - 1].to_string()
        })
}

/// Extract charset from `<meta http-equiv="Content-Type" content="...; charset=...">` tag.
fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(feature = "detect")]
fn guess_encoding(html: &[u8]) -> Option<String> {
    if html.is_empty() {
        return None;
    }
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(html, true);
    Some(detector.guess(None, true).name().to_string())
}

#[cfg(not(feature = "detect"))]
fn guess_encoding(_html: &[u8]) -> Option<String> {
    None
}

/// Resolve a charset label to an encoding, falling back to UTF-8 for
/// missing or unrecognized labels.
///
/// A declared UTF-16 (either byte order) resolves to UTF-8: a document that
/// could be read far enough to find an ASCII meta tag is not UTF-16.
#[must_use]
pub fn resolve_encoding(label: Option<&str>) -> &'static Encoding {
    label
        .and_then(|l| Encoding::for_label(l.trim().as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a string using the detected encoding.
///
/// Invalid sequences are replaced with U+FFFD rather than failing, so a
/// wrong guess degrades the text instead of losing it.
///
/// # Examples
///
/// ```
/// use webtext::encoding::decode_html;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    decode_with_label(html, get_encoding(html).as_deref())
}

/// Decode HTML bytes with an already detected charset label.
///
/// Same fallbacks as [`decode_html`]; use it when the label is needed as
/// well, so detection runs only once.
#[must_use]
pub fn decode_with_label<'a>(html: &'a [u8], label: Option<&str>) -> Cow<'a, str> {
    let encoding = resolve_encoding(label);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html);
    }

    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed sequences while decoding");
    }
    decoded
}
