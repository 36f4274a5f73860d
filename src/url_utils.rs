//! URL utilities.
//!
//! Recognizing URLs in free text, extracting the network location, and
//! percent/form encoding helpers used when building request URLs.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use url::{form_urlencoded, Position, Url};

/// One octet of a dotted IPv4 address (0-255).
const OCTET: &str = r"(?:2(?:[0-4]\d|5[0-5])|1\d\d|\d{1,2})";

/// A domain label, per RFC 1034/1738.
const LABEL: &str = r"[0-9a-z][-0-9a-z]*[0-9a-z]?";

fn ip_addr() -> String {
    format!(r"{OCTET}(?:\.{OCTET}){{3}}")
}

fn domain() -> String {
    format!(r"{LABEL}(?:\.{LABEL})*\.[0-9a-z][-0-9a-z]+")
}

fn url_pattern(scheme: &str) -> String {
    format!(
        r"(?i)({scheme}://(?:\S+@)?(?:{}|{})(?::\d+)?(?:/[^\])>\s]*)?)",
        domain(),
        ip_addr()
    )
}

/// Matches a URL of any scheme (`ftp://...`, `irc://...`, ...).
pub static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&url_pattern(r"\w+")).expect("URL_RE regex"));

/// Matches an `http://` or `https://` URL.
pub static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&url_pattern("https?")).expect("HTTP_URL_RE regex"));

/// Characters left alone by [`url_quote`]: alphanumerics, `-._~` and `/`.
const QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Find every URL in `text`, in order of appearance.
///
/// # Examples
/// ```
/// use webtext::url_utils::find_urls;
///
/// let urls = find_urls("see http://example.com/a and ftp://10.0.0.1:21/pub).");
/// assert_eq!(urls, vec!["http://example.com/a", "ftp://10.0.0.1:21/pub"]);
/// ```
#[must_use]
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Find every HTTP(S) URL in `text`, in order of appearance.
#[must_use]
pub fn find_http_urls(text: &str) -> Vec<&str> {
    HTTP_URL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Network location of a URL: user-info, host and port as present.
///
/// # Returns
/// * The location, or empty string if the URL cannot be parsed
///
/// # Examples
/// ```
/// use webtext::url_utils::get_domain;
///
/// assert_eq!(get_domain("https://example.com:8443/path?q=1"), "example.com:8443");
/// assert_eq!(get_domain("not a url"), "");
/// ```
#[must_use]
pub fn get_domain(url_str: &str) -> String {
    match Url::parse(url_str.trim()) {
        Ok(url) => url[Position::BeforeUsername..Position::AfterPort].to_string(),
        Err(_) => String::new(),
    }
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`.
///
/// ```
/// use webtext::url_utils::urlencode;
///
/// assert_eq!(urlencode([("q", "rust lang"), ("page", "2")]), "q=rust+lang&page=2");
/// ```
#[must_use]
pub fn urlencode<I, K, V>(pairs: I) -> String
where
    I: IntoIterator,
    I::Item: std::borrow::Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Percent-encode `s` for use in a URL path. `/` is kept.
#[must_use]
pub fn url_quote(s: &str) -> String {
    utf8_percent_encode(s, QUOTE_SET).to_string()
}

/// Decode percent-escapes. Invalid UTF-8 becomes U+FFFD.
#[must_use]
pub fn url_unquote(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}
