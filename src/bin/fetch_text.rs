//! Fetch a URL and print its text content.
//!
//! Usage: `fetch_text <url> [max-bytes]`
//!
//! Proxies are taken from `WEBTEXT_HTTP_PROXY` / `WEBTEXT_HTTPS_PROXY`,
//! read each time a request is made.

use std::env;
use std::process::ExitCode;

use webtext::{get_url, html_to_text, FetchOptions, ProxyConfig, ProxySetting};

fn env_proxy(name: &'static str) -> ProxySetting {
    ProxySetting::resolver(move || env::var(name).ok())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let Some(url) = args.next() else {
        eprintln!("usage: fetch_text <url> [max-bytes]");
        return ExitCode::from(2);
    };

    let size = match args.next().map(|s| s.parse::<u64>()) {
        None => None,
        Some(Ok(n)) => Some(n),
        Some(Err(e)) => {
            eprintln!("Invalid byte limit: {e}");
            return ExitCode::from(2);
        }
    };

    let options = FetchOptions {
        size,
        proxy: ProxyConfig {
            http: Some(env_proxy("WEBTEXT_HTTP_PROXY")),
            https: Some(env_proxy("WEBTEXT_HTTPS_PROXY")),
        },
        ..FetchOptions::default()
    };

    match get_url(url.as_str(), &options) {
        Ok(page) => {
            println!("{}", html_to_text(&page));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
