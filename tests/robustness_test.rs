use webtext::tokenizer::{Token, Tokenizer};
use webtext::{html_to_text, HtmlToText};

#[test]
fn unclosed_tags_keep_text() {
    assert_eq!(html_to_text(b"<p>text<div>more"), "text more");
}

#[test]
fn invalid_nesting_keeps_text() {
    assert_eq!(html_to_text(b"<p><div>a</p>b</div>"), "a b");
}

#[test]
fn broken_attribute_is_kept_as_text() {
    assert_eq!(html_to_text(b"before <div class=\"test id=broken>"), "before <div class=\"test id=broken>");
}

#[test]
fn unterminated_comment_is_kept_as_text() {
    assert_eq!(html_to_text(b"a <!-- never closed"), "a <!-- never closed");
}

#[test]
fn lone_ampersands_and_brackets() {
    assert_eq!(html_to_text(b"& < > &; &#; &#x;"), "& < > &; &#; &#x;");
}

#[test]
fn overflowing_numeric_reference_is_kept() {
    assert_eq!(html_to_text(b"&#99999999999999999999;"), "&#99999999999999999999;");
    assert_eq!(html_to_text(b"&#x110000;"), "&#x110000;");
}

#[test]
fn deeply_nested_markup_does_not_overflow() {
    let depth = 10_000;
    let html = format!("{}deep{}", "<div>".repeat(depth), "</div>".repeat(depth));
    assert_eq!(html_to_text(html.as_bytes()), "deep");
}

#[test]
fn large_document_with_many_entities() {
    let html = "<p>x&amp;y</p>".repeat(5_000);
    let text = html_to_text(html.as_bytes());
    assert_eq!(text.matches("x&y").count(), 5_000);
}

#[test]
fn tokenizer_covers_every_input_byte_of_text() {
    let html = "a<b>c</b>&amp;d<!--x-->e";
    let text: String = Tokenizer::new(html)
        .filter_map(|t| match t {
            Token::Text(s) | Token::Entity(s) => Some(s),
            _ => None,
        })
        .collect();
    assert_eq!(text, "ac&amp;de");
}

#[test]
fn multibyte_text_next_to_markup() {
    let converter = HtmlToText::new("");
    assert_eq!(converter.convert("日本<b>語</b>&eacute;"), "日本語é");
}
