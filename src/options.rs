//! Configuration for URL fetching.
//!
//! `FetchOptions` carries everything a fetch needs that is not part of the
//! request itself: timeout, read limit and proxy settings. There is no
//! process-wide state; pass the options to every call.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default `User-Agent` header, mimicking a desktop browser.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; rv:17.0) Gecko/20100101 Firefox/17.0";

/// Default `Accept` header.
pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8 gzip,deflate en-us,en;q=0.5";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Headers sent when a request does not supply its own.
#[must_use]
pub fn default_headers() -> Vec<(String, String)> {
    vec![
        ("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string()),
        ("Accept".to_string(), DEFAULT_ACCEPT.to_string()),
    ]
}

type Resolver = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Where a proxy URL comes from.
#[derive(Clone)]
pub enum ProxySetting {
    /// A fixed proxy URL such as `http://proxy.local:3128`.
    Literal(String),
    /// A function consulted on every fetch. Returning `None` (or an empty
    /// string) means no proxy for that call.
    Resolver(Resolver),
}

impl ProxySetting {
    /// Build a resolver-backed setting.
    ///
    /// ```rust
    /// use webtext::ProxySetting;
    ///
    /// let setting = ProxySetting::resolver(|| std::env::var("MY_PROXY").ok());
    /// # let _ = setting;
    /// ```
    #[must_use]
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(f))
    }

    /// Produce the proxy URL for this call, if any.
    #[must_use]
    pub fn resolve(&self) -> Option<String> {
        let url = match self {
            Self::Literal(url) => Some(url.clone()),
            Self::Resolver(f) => f(),
        };
        url.filter(|u| !u.trim().is_empty())
    }
}

impl fmt::Debug for ProxySetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(url) => f.debug_tuple("Literal").field(url).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&str> for ProxySetting {
    fn from(url: &str) -> Self {
        Self::Literal(url.to_string())
    }
}

impl From<String> for ProxySetting {
    fn from(url: String) -> Self {
        Self::Literal(url)
    }
}

/// Proxy settings for plain HTTP and for HTTPS URLs.
#[derive(Debug, Clone, Default)]
pub struct ProxyConfig {
    /// Proxy used for `http://` URLs.
    ///
    /// Default: `None`
    pub http: Option<ProxySetting>,

    /// Proxy used for `https://` URLs.
    ///
    /// Default: `None`
    pub https: Option<ProxySetting>,
}

/// Proxy URLs resolved for a single fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedProxies {
    /// Proxy for `http://` URLs.
    pub http: Option<String>,
    /// Proxy for `https://` URLs.
    pub https: Option<String>,
}

impl ProxyConfig {
    /// Resolve both settings once.
    #[must_use]
    pub fn resolve(&self) -> ResolvedProxies {
        ResolvedProxies {
            http: self.http.as_ref().and_then(ProxySetting::resolve),
            https: self.https.as_ref().and_then(ProxySetting::resolve),
        }
    }
}

/// Options controlling a fetch.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use webtext::{FetchOptions, ProxyConfig};
///
/// let options = FetchOptions {
///     timeout: Duration::from_secs(10),
///     size: Some(64 * 1024),
///     proxy: ProxyConfig {
///         http: Some("http://127.0.0.1:3128".into()),
///         ..ProxyConfig::default()
///     },
///     ..FetchOptions::default()
/// };
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Timeout for the whole request, including reading the body.
    ///
    /// Default: 60 seconds
    pub timeout: Duration,

    /// Maximum number of body bytes `get_url` reads.
    ///
    /// Default: `None` (read everything)
    pub size: Option<u64>,

    /// Proxy settings.
    ///
    /// Default: no proxies
    pub proxy: ProxyConfig,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            size: None,
            proxy: ProxyConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn defaults() {
        let options = FetchOptions::default();
        assert_eq!(options.timeout, Duration::from_secs(60));
        assert_eq!(options.size, None);
        assert_eq!(options.proxy.resolve(), ResolvedProxies::default());
    }

    #[test]
    fn literal_proxy_resolves_to_itself() {
        let setting = ProxySetting::from("http://proxy:8080");
        assert_eq!(setting.resolve().as_deref(), Some("http://proxy:8080"));
    }

    #[test]
    fn empty_proxy_counts_as_unset() {
        assert_eq!(ProxySetting::from("").resolve(), None);
        assert_eq!(ProxySetting::resolver(|| Some("  ".to_string())).resolve(), None);
        assert_eq!(ProxySetting::resolver(|| None).resolve(), None);
    }

    #[test]
    fn resolver_is_called_once_per_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let config = ProxyConfig {
            http: None,
            https: Some(ProxySetting::resolver(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Some("http://secure-proxy:3128".to_string())
            })),
        };

        let resolved = config.resolve();
        assert_eq!(resolved.http, None);
        assert_eq!(resolved.https.as_deref(), Some("http://secure-proxy:3128"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let _ = config.resolve();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn resolver_debug_hides_closure() {
        let setting = ProxySetting::resolver(|| None);
        assert_eq!(format!("{setting:?}"), "Resolver(..)");
    }

    #[test]
    fn default_headers_are_browser_like() {
        let headers = default_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0], ("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string()));
        assert_eq!(headers[1].0, "Accept");
    }
}
