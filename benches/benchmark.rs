//! Performance benchmarks for webtext.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic HTML (~1KB) for microbenchmarks
//! - Synthetic documents of growing size for throughput
//! - Charset detection with and without a meta declaration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use webtext::encoding::get_encoding;
use webtext::tokenizer::Tokenizer;
use webtext::{html_to_text, HtmlToText};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
    <style>body { font-family: sans-serif; }</style>
</head>
<body>
    <nav>
        <a href="/">Home</a> &middot;
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content&nbsp;&mdash; and a few entities like &amp;, &lt;, &gt; and &#8364;.</p>
        <p>Here is a second paragraph with more content. Tags are replaced, text is
        kept and whitespace is&#x20;normalized.</p>
        <!-- a comment that should vanish -->
        <p>A third paragraph with a <br/> line break and <img src="x.png" alt="x"/>.</p>
    </article>
    <footer>
        <p>Copyright &copy; 2024</p>
    </footer>
</body>
</html>
"#;

fn bench_html_to_text(c: &mut Criterion) {
    c.bench_function("html_to_text", |b| {
        b.iter(|| html_to_text(black_box(SAMPLE_HTML.as_bytes())));
    });
}

fn bench_convert_decoded(c: &mut Criterion) {
    let converter = HtmlToText::new(" | ");
    c.bench_function("convert_decoded", |b| {
        b.iter(|| converter.convert(black_box(SAMPLE_HTML)));
    });
}

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| Tokenizer::new(black_box(SAMPLE_HTML)).count());
    });
}

fn bench_get_encoding(c: &mut Criterion) {
    let undeclared = SAMPLE_HTML.replace(r#"<meta charset="UTF-8">"#, "");

    let mut group = c.benchmark_group("get_encoding");
    group.bench_function("declared", |b| {
        b.iter(|| get_encoding(black_box(SAMPLE_HTML.as_bytes())));
    });
    group.bench_function("undeclared", |b| {
        b.iter(|| get_encoding(black_box(undeclared.as_bytes())));
    });
    group.finish();
}

/// Throughput on documents of growing size
fn bench_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_size");

    for repeat in [1usize, 16, 256] {
        let html = SAMPLE_HTML.repeat(repeat);
        let size_kb = html.len() / 1024;
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("html_to_text", format!("{size_kb}KB")),
            &html,
            |b, html| {
                b.iter(|| html_to_text(black_box(html.as_bytes())));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_html_to_text,
    bench_convert_decoded,
    bench_tokenize,
    bench_get_encoding,
    bench_document_sizes
);
criterion_main!(benches);
