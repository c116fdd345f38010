//! A small JavaScript tokenizer.
//!
//! Only what the route registry needs: identifiers, string literals and
//! single-character punctuation, with byte offsets. Comments and whitespace
//! are dropped. Regular expression literals are not recognised.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Ident,
    /// A quoted string; `text` holds the contents without quotes.
    Str,
    Template,
    Number,
    Punct(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Token<'_> {
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.text == name
    }

    pub fn is_punct(&self, c: char) -> bool {
        self.kind == TokenKind::Punct(c)
    }
}

pub(crate) fn tokenize(src: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < src.len() {
        let rest = &src[pos..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }
        if rest.starts_with("//") {
            pos += rest.find('\n').unwrap_or(rest.len());
            continue;
        }
        if let Some(body) = rest.strip_prefix("/*") {
            pos += body.find("*/").map_or(rest.len(), |i| i + 4);
            continue;
        }

        let (kind, len, text) = match c {
            '\'' | '"' | '`' => {
                let (len, closed) = scan_quoted(rest, c);
                let inner_end = if closed { len - 1 } else { len };
                let kind = if c == '`' {
                    TokenKind::Template
                } else {
                    TokenKind::Str
                };
                (kind, len, &rest[1..inner_end])
            }
            c if is_ident_start(c) => {
                let len = rest
                    .find(|ch: char| !is_ident_continue(ch))
                    .unwrap_or(rest.len());
                (TokenKind::Ident, len, &rest[..len])
            }
            c if c.is_ascii_digit() => {
                let len = rest
                    .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '.' || ch == '_'))
                    .unwrap_or(rest.len());
                (TokenKind::Number, len, &rest[..len])
            }
            c => (TokenKind::Punct(c), c.len_utf8(), &rest[..c.len_utf8()]),
        };

        tokens.push(Token {
            kind,
            text,
            start: pos,
            end: pos + len,
        });
        pos += len;
    }

    tokens
}

/// Length of the quoted literal at the start of `s`, and whether it was closed.
///
/// Single and double quoted strings end at an unescaped newline.
fn scan_quoted(s: &str, quote: char) -> (usize, bool) {
    let mut escaped = false;
    for (i, ch) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\n' if quote != '`' => return (i, false),
            ch if ch == quote => return (i + 1, true),
            _ => {}
        }
    }
    (s.len(), false)
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<(TokenKind, &str)> {
        tokenize(src).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_import_statement() {
        assert_eq!(
            kinds("import { Home } from './home.js';"),
            vec![
                (TokenKind::Ident, "import"),
                (TokenKind::Punct('{'), "{"),
                (TokenKind::Ident, "Home"),
                (TokenKind::Punct('}'), "}"),
                (TokenKind::Ident, "from"),
                (TokenKind::Str, "./home.js"),
                (TokenKind::Punct(';'), ";"),
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let tokens = kinds("// new NotFound()\n/* new Home() */ x");
        assert_eq!(tokens, vec![(TokenKind::Ident, "x")]);
    }

    #[test]
    fn test_strings_hide_brackets() {
        let tokens = kinds(r#"f("a]b", 'c\'d', `e${x}`)"#);
        assert_eq!(tokens[2], (TokenKind::Str, "a]b"));
        assert_eq!(tokens[4], (TokenKind::Str, r"c\'d"));
        assert_eq!(tokens[6], (TokenKind::Template, "e${x}"));
        assert_eq!(tokens.len(), 8);
    }

    #[test]
    fn test_offsets() {
        let src = "  new NotFound()";
        let tokens = tokenize(src);
        assert_eq!(tokens[0].start, 2);
        assert_eq!(&src[tokens[1].start..tokens[1].end], "NotFound");
        assert_eq!(tokens.last().map(|t| t.end), Some(src.len()));
    }

    #[test]
    fn test_unterminated_string_stops_at_newline() {
        let tokens = kinds("'abc\nnext");
        assert_eq!(tokens, vec![(TokenKind::Str, "abc"), (TokenKind::Ident, "next")]);
    }

    #[test]
    fn test_unterminated_comment_consumes_rest() {
        assert!(tokenize("a /* b").len() == 1);
    }
}
