//! # webtext
//!
//! Fetch web pages and turn them into readable text.
//!
//! This library wraps a blocking HTTP client with proxy support and maps
//! every network failure onto a handful of human-readable messages. It also
//! converts HTML into plain text: the charset is detected from the page,
//! tags are replaced by a separator, character references are decoded and
//! whitespace is normalized.
//!
//! ## Quick Start
//!
//! ```rust
//! use webtext::{html_to_text, munge_email};
//!
//! let html = b"<html><body><p>Caf&eacute; &amp; bar</p></body></html>";
//! assert_eq!(html_to_text(html), "Caf\u{e9} & bar");
//!
//! assert_eq!(munge_email("jane@example.org"), "jane AT example DOT org");
//! ```
//!
//! Fetching a page:
//!
//! ```rust,no_run
//! use webtext::{get_url, html_to_text, FetchOptions};
//!
//! let options = FetchOptions {
//!     size: Some(256 * 1024),
//!     ..FetchOptions::default()
//! };
//! let page = get_url("https://www.rust-lang.org/", &options)?;
//! println!("{}", html_to_text(&page));
//! # Ok::<(), webtext::Error>(())
//! ```

mod error;
mod fetch;
mod options;
mod text;

/// Character encoding detection and decoding.
pub mod encoding;

/// HTML character reference tables.
pub mod entities;

/// Pull-based HTML tokenizer.
pub mod tokenizer;

/// URL recognition and encoding helpers.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result, FORBIDDEN, REFUSED, RESET_BY_PEER, TIMED_OUT, UNKNOWN_HOST};
pub use fetch::{get_url, get_url_fd, PageStream, Request};
pub use options::{
    default_headers, FetchOptions, ProxyConfig, ProxySetting, ResolvedProxies, DEFAULT_ACCEPT,
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};
pub use text::{html_to_text, munge_email, normalize_whitespace, HtmlToText};
