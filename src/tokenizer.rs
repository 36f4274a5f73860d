//! Pull-based HTML tokenizer.
//!
//! [`Tokenizer`] walks an HTML string and yields a lazy sequence of
//! [`Token`]s borrowing from the input. It is deliberately forgiving: it
//! never fails, and anything that does not look like well-formed markup is
//! passed through as text.
//!
//! Comments, doctype and other `<!...>` declarations, and processing
//! instructions are consumed without producing a token. The contents of
//! `<script>` and `<style>` are raw text: no tags or references are
//! recognized until the matching end tag.

/// A lexical unit of an HTML document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// An opening tag such as `<p class="x">` or `<br/>`.
    StartTag {
        /// Tag name as written in the source.
        name: &'a str,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },
    /// A closing tag such as `</p>`.
    EndTag {
        /// Tag name as written in the source.
        name: &'a str,
    },
    /// A run of literal character data.
    Text(&'a str),
    /// A character reference including `&` and `;`, e.g. `&amp;` or `&#65;`.
    Entity(&'a str),
}

/// Elements whose content is raw text.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Iterator over the tokens of an HTML string.
///
/// # Examples
///
/// ```
/// use webtext::tokenizer::{Token, Tokenizer};
///
/// let tokens: Vec<Token<'_>> = Tokenizer::new("<b>A&amp;B</b>").collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::StartTag { name: "b", self_closing: false },
///         Token::Text("A"),
///         Token::Entity("&amp;"),
///         Token::Text("B"),
///         Token::EndTag { name: "b" },
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    raw_text: Option<&'static str>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text: None,
        }
    }

    /// Emit `len` bytes from the current position as text.
    fn text(&mut self, len: usize) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        Token::Text(&self.input[start..self.pos])
    }

    /// Length of the text run starting at the current position. The first
    /// byte is always included, so a stray `<` or `&` makes progress.
    fn text_run_len(&self) -> usize {
        let rest = &self.input[self.pos..];
        let first = rest.chars().next().map_or(0, char::len_utf8);
        rest[first..]
            .find(['<', '&'])
            .map_or(rest.len(), |i| i + first)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let input = self.input;
        loop {
            if self.pos >= input.len() {
                return None;
            }

            if let Some(element) = self.raw_text.take() {
                let rest = &input[self.pos..];
                let len = find_end_tag(rest, element).unwrap_or(rest.len());
                if len > 0 {
                    return Some(self.text(len));
                }
            }

            let rest = &input[self.pos..];
            match rest.as_bytes()[0] {
                b'<' => match scan_markup(rest) {
                    Some(Markup::Skip(len)) => {
                        self.pos += len;
                    }
                    Some(Markup::Token(token, len)) => {
                        self.pos += len;
                        if let Token::StartTag {
                            name,
                            self_closing: false,
                        } = token
                        {
                            self.raw_text = RAW_TEXT_ELEMENTS
                                .iter()
                                .copied()
                                .find(|e| e.eq_ignore_ascii_case(name));
                        }
                        return Some(token);
                    }
                    None => {
                        let len = self.text_run_len();
                        return Some(self.text(len));
                    }
                },
                b'&' => {
                    if let Some(len) = reference_len(rest) {
                        self.pos += len;
                        return Some(Token::Entity(&rest[..len]));
                    }
                    let len = self.text_run_len();
                    return Some(self.text(len));
                }
                _ => {
                    let len = self.text_run_len();
                    return Some(self.text(len));
                }
            }
        }
    }
}

/// Result of scanning something that starts with `<`.
enum Markup<'a> {
    /// A tag token and the number of bytes it spans.
    Token(Token<'a>, usize),
    /// Markup that produces no token (comment, declaration, ...).
    Skip(usize),
}

/// Scan markup at the start of `rest`. `None` means the `<` is literal text,
/// either because nothing tag-like follows or the markup never terminates.
fn scan_markup(rest: &str) -> Option<Markup<'_>> {
    if let Some(body) = rest.strip_prefix("<!--") {
        return body.find("-->").map(|end| Markup::Skip(4 + end + 3));
    }
    if let Some(body) = rest.strip_prefix("<![CDATA[") {
        return body.find("]]>").map(|end| Markup::Skip(9 + end + 3));
    }
    if rest.starts_with("<!") || rest.starts_with("<?") {
        return rest.find('>').map(|end| Markup::Skip(end + 1));
    }

    if let Some(body) = rest.strip_prefix("</") {
        let first = body.chars().next()?;
        if !first.is_ascii_alphabetic() {
            // `</>` and `</3` style bogus end tags are dropped like comments
            return rest.find('>').map(|end| Markup::Skip(end + 1));
        }
        let name_len = tag_name_len(body);
        let end = body[name_len..].find('>')?;
        let len = 2 + name_len + end + 1;
        return Some(Markup::Token(
            Token::EndTag {
                name: &body[..name_len],
            },
            len,
        ));
    }

    let body = &rest[1..];
    if !body.chars().next()?.is_ascii_alphabetic() {
        return None;
    }
    let name_len = tag_name_len(body);
    let (attrs_len, self_closing) = scan_attributes(&body[name_len..])?;
    Some(Markup::Token(
        Token::StartTag {
            name: &body[..name_len],
            self_closing,
        },
        1 + name_len + attrs_len,
    ))
}

fn tag_name_len(s: &str) -> usize {
    s.find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(s.len())
}

/// Scan from just after the tag name through the closing `>`.
///
/// Quoted attribute values may contain `>`. Returns the consumed length
/// (including `>`) and whether the tag was self-closing.
fn scan_attributes(s: &str) -> Option<(usize, bool)> {
    let mut quote: Option<char> = None;
    let mut last_significant = ' ';

    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
                last_significant = c;
            }
            continue;
        }
        match c {
            '"' | '\'' if last_significant == '=' => quote = Some(c),
            '>' => return Some((i + 1, last_significant == '/')),
            c if c.is_whitespace() => {}
            c => last_significant = c,
        }
    }
    None
}

/// Length of a character reference at the start of `rest`: `&`, optional
/// `#`, one or more word characters, `;`.
fn reference_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 1;
    if bytes.get(i) == Some(&b'#') {
        i += 1;
    }
    let start = i;
    while bytes
        .get(i)
        .is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_')
    {
        i += 1;
    }
    (i > start && bytes.get(i) == Some(&b';')).then_some(i + 1)
}

/// Offset of `</element` (any case) in `s`, where the name is followed by
/// whitespace, `/`, `>` or the end of input.
fn find_end_tag(s: &str, element: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut from = 0;
    while let Some(offset) = s[from..].find("</") {
        let at = from + offset;
        let name_start = at + 2;
        let name_end = name_start + element.len();
        if bytes
            .get(name_start..name_end)
            .is_some_and(|name| name.eq_ignore_ascii_case(element.as_bytes()))
            && bytes
                .get(name_end)
                .is_none_or(|b| b.is_ascii_whitespace() || matches!(*b, b'/' | b'>'))
        {
            return Some(at);
        }
        from = name_start;
    }
    None
}
