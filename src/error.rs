//! Error types for webtext.
//!
//! Every failure that can happen while fetching a URL is funneled into a
//! single [`Error`] type whose message is one of a few fixed, human-readable
//! strings. Callers that only want to show something to a user can use the
//! `Display` output directly.

use std::fmt::Display;

/// Message for a refused connection (`ECONNREFUSED`).
pub const REFUSED: &str = "Connection refused.";

/// Message for a connection or read that timed out.
pub const TIMED_OUT: &str = "Connection timed out.";

/// Message for a host name that could not be resolved.
pub const UNKNOWN_HOST: &str = "Unknown host.";

/// Message for a connection reset by the remote end (`ECONNRESET`).
pub const RESET_BY_PEER: &str = "Connection reset by peer.";

/// Message for an HTTP 403 response.
pub const FORBIDDEN: &str = "Client forbidden from accessing URL.";

/// Error type for fetch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The remote host refused the connection.
    #[error("{}", REFUSED)]
    Refused,

    /// Connecting or reading timed out.
    #[error("{}", TIMED_OUT)]
    TimedOut,

    /// The host name could not be resolved.
    #[error("{}", UNKNOWN_HOST)]
    UnknownHost,

    /// The connection was reset by the remote end.
    #[error("{}", RESET_BY_PEER)]
    ResetByPeer,

    /// The server answered with 403 Forbidden.
    #[error("{}", FORBIDDEN)]
    Forbidden,

    /// The URL could not be parsed or is not usable for a request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other failure, carrying the underlying error's text.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map a platform error code (errno, WinSock code, resolver code or HTTP
    /// status) to an error.
    ///
    /// Codes without a fixed message produce [`Error::Other`] holding the
    /// textual form of `original`.
    ///
    /// ```
    /// use webtext::Error;
    ///
    /// assert_eq!(Error::from_code(111, "ignored").to_string(), "Connection refused.");
    /// assert_eq!(Error::from_code(42, "odd failure").to_string(), "odd failure");
    /// ```
    #[must_use]
    pub fn from_code(code: i64, original: impl Display) -> Self {
        match code {
            111 => Self::Refused,
            110 | 10060 => Self::TimedOut,
            104 => Self::ResetByPeer,
            8 | 7 | 3 | 2 | -2 | -3 => Self::UnknownHost,
            403 => Self::Forbidden,
            _ => Self::Other(original.to_string()),
        }
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_fixed_messages() {
        let cases: &[(i64, &str)] = &[
            (111, REFUSED),
            (110, TIMED_OUT),
            (10060, TIMED_OUT),
            (104, RESET_BY_PEER),
            (8, UNKNOWN_HOST),
            (7, UNKNOWN_HOST),
            (3, UNKNOWN_HOST),
            (2, UNKNOWN_HOST),
            (-2, UNKNOWN_HOST),
            (-3, UNKNOWN_HOST),
            (403, FORBIDDEN),
        ];

        for &(code, message) in cases {
            assert_eq!(Error::from_code(code, "unused").to_string(), message, "code {code}");
        }
    }

    #[test]
    fn unknown_code_keeps_original_text() {
        let err = Error::from_code(404, "HTTP Error 404: Not Found");
        assert_eq!(err, Error::Other("HTTP Error 404: Not Found".to_string()));
        assert_eq!(err.to_string(), "HTTP Error 404: Not Found");
    }

    #[test]
    fn invalid_url_is_prefixed() {
        let err = Error::InvalidUrl("relative URL without a base".to_string());
        assert_eq!(err.to_string(), "Invalid URL: relative URL without a base");
    }
}
