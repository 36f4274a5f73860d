//! Simple CLI that reads raw HTML bytes from stdin and outputs JSON to stdout.
//!
//! The JSON carries the detected charset (if any) and the extracted text.

use serde::Serialize;
use std::io::{self, Read};
use webtext::encoding::{decode_with_label, get_encoding};
use webtext::HtmlToText;

#[derive(Serialize)]
struct Output {
    encoding: Option<String>,
    text: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let encoding = get_encoding(&html);
    let text = HtmlToText::default().convert(&decode_with_label(&html, encoding.as_deref()));
    let output = Output { encoding, text };

    match serde_json::to_string(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}
