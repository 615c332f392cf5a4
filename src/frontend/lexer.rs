//! Tokenizer for the C# declaration subset.
//!
//! The generator only needs enough lexical structure to find namespaces,
//! classes, and member signatures, and to skip everything else (method
//! bodies, initializers, attributes) by balanced-delimiter matching. That
//! means strings, chars, comments, and preprocessor lines must be scanned
//! correctly so a brace inside a literal never unbalances a skip, but the
//! lexer is otherwise deliberately forgiving: unknown characters become
//! `Punct` tokens and unterminated literals end at EOF.

use crate::frontend::ast::Span;

/// A single token with its source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or contextual keyword (`class`, `namespace`, `public`, ...)
    Ident(String),
    StringLit,
    CharLit,
    Number,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Semi,
    Colon,
    Dot,
    Question,
    Eq,
    /// `=>` (expression-bodied members, lambdas)
    Arrow,
    /// Any other punctuation, kept so skipping logic can advance over it
    Punct(char),
    Eof,
}

impl TokenKind {
    /// Identifier text, if this token is an identifier.
    pub fn ident(&self) -> Option<&str> {
        match self {
            TokenKind::Ident(s) => Some(s),
            _ => None,
        }
    }
}

/// Tokenize source text. Never fails: malformed input degrades to `Punct`
/// tokens and literals that run off the end of the file are closed at EOF.
/// The token stream always ends with an `Eof` token.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    source_len: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            source_len: source.len(),
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        while let Some((start, c)) = self.chars.next() {
            match c {
                c if c.is_whitespace() => {}
                '/' => self.slash(start),
                // Preprocessor directives are line-oriented; drop the line
                '#' => self.skip_line(),
                '"' => self.string_lit(start),
                '\'' => self.char_lit(start),
                '@' => self.at_prefixed(start),
                '$' => self.dollar_prefixed(start),
                c if c.is_ascii_digit() => self.number(start),
                c if is_ident_start(c) => self.ident(start, c),
                c => self.punct(start, c),
            }
        }
        let end = self.source_len;
        self.tokens.push(Token::new(TokenKind::Eof, Span::new(end, end)));
        self.tokens
    }

    // ========================================================================
    // Scanners
    // ========================================================================

    fn slash(&mut self, start: usize) {
        match self.peek() {
            Some('/') => self.skip_line(),
            Some('*') => {
                self.chars.next();
                // Block comment: scan for the closing */, tolerate EOF
                let mut prev = '\0';
                for (_, c) in self.chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => self.push(TokenKind::Punct('/'), start, start + 1),
        }
    }

    fn skip_line(&mut self) {
        while let Some((_, c)) = self.chars.next() {
            if c == '\n' {
                break;
            }
        }
    }

    /// Regular string literal with backslash escapes. Also used for
    /// interpolated strings: interpolation holes stay inside the token, which
    /// is all the structural skipping needs.
    fn string_lit(&mut self, start: usize) {
        let mut end = start + 1;
        while let Some((i, c)) = self.chars.next() {
            end = i + c.len_utf8();
            match c {
                '\\' => {
                    if let Some((j, e)) = self.chars.next() {
                        end = j + e.len_utf8();
                    }
                }
                '"' => break,
                _ => {}
            }
        }
        self.push(TokenKind::StringLit, start, end);
    }

    /// Verbatim string literal: `@"..."` with `""` as the only escape.
    fn verbatim_string(&mut self, start: usize) {
        let mut end = start;
        while let Some((i, c)) = self.chars.next() {
            end = i + c.len_utf8();
            if c == '"' {
                if self.peek() == Some('"') {
                    self.chars.next();
                } else {
                    break;
                }
            }
        }
        self.push(TokenKind::StringLit, start, end);
    }

    fn char_lit(&mut self, start: usize) {
        let mut end = start + 1;
        while let Some((i, c)) = self.chars.next() {
            end = i + c.len_utf8();
            match c {
                '\\' => {
                    if let Some((j, e)) = self.chars.next() {
                        end = j + e.len_utf8();
                    }
                }
                '\'' => break,
                _ => {}
            }
        }
        self.push(TokenKind::CharLit, start, end);
    }

    /// `@"..."` verbatim strings, `@$"..."` verbatim interpolated strings,
    /// and `@identifier` keyword-escaped identifiers.
    fn at_prefixed(&mut self, start: usize) {
        match self.peek() {
            Some('"') => {
                self.chars.next();
                self.verbatim_string(start);
            }
            Some('$') => {
                self.chars.next();
                if self.peek() == Some('"') {
                    self.chars.next();
                    self.verbatim_string(start);
                } else {
                    self.push(TokenKind::Punct('@'), start, start + 1);
                    self.push(TokenKind::Punct('$'), start + 1, start + 2);
                }
            }
            Some(c) if is_ident_start(c) => {
                // The '@' escape is not part of the identifier text
                self.chars.next();
                self.ident(start + 1, c);
            }
            _ => self.push(TokenKind::Punct('@'), start, start + 1),
        }
    }

    /// `$"..."` interpolated strings and `$@"..."` verbatim interpolated.
    fn dollar_prefixed(&mut self, start: usize) {
        match self.peek() {
            Some('"') => {
                self.chars.next();
                self.string_lit(start);
            }
            Some('@') => {
                self.chars.next();
                if self.peek() == Some('"') {
                    self.chars.next();
                    self.verbatim_string(start);
                } else {
                    self.push(TokenKind::Punct('$'), start, start + 1);
                    self.push(TokenKind::Punct('@'), start + 1, start + 2);
                }
            }
            _ => self.push(TokenKind::Punct('$'), start, start + 1),
        }
    }

    /// Numeric literal: digits, hex/suffix letters, underscores, and a dot
    /// when followed by another digit (so `1.ToString` splits at the dot).
    /// Exponent signs are not chased; a stray `+`/`-` just ends the literal,
    /// which the structural skipping tolerates.
    fn number(&mut self, start: usize) {
        let mut end = start + 1;
        while let Some(&(i, c)) = self.chars.peek() {
            let take =
                c.is_ascii_alphanumeric() || c == '_' || (c == '.' && self.second_is_digit());
            if take {
                end = i + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }
        self.push(TokenKind::Number, start, end);
    }

    fn second_is_digit(&self) -> bool {
        // Peekable only looks one ahead; cloning the iterator is cheap here
        let mut ahead = self.chars.clone();
        ahead.next();
        matches!(ahead.peek(), Some((_, c)) if c.is_ascii_digit())
    }

    fn ident(&mut self, start: usize, first: char) {
        let mut text = String::new();
        text.push(first);
        let mut end = start + first.len_utf8();
        while let Some(&(i, c)) = self.chars.peek() {
            if is_ident_continue(c) {
                text.push(c);
                end = i + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }
        self.push(TokenKind::Ident(text), start, end);
    }

    fn punct(&mut self, start: usize, c: char) {
        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            '=' => {
                if self.peek() == Some('>') {
                    self.chars.next();
                    self.push(TokenKind::Arrow, start, start + 2);
                    return;
                }
                TokenKind::Eq
            }
            other => TokenKind::Punct(other),
        };
        self.push(kind, start, start + c.len_utf8());
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, end)));
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    fn idents(source: &str) -> Vec<String> {
        lex(source)
            .into_iter()
            .filter_map(|t| t.kind.ident().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_class_header() {
        assert_eq!(
            kinds("public class Foo {"),
            vec![
                TokenKind::Ident("public".into()),
                TokenKind::Ident("class".into()),
                TokenKind::Ident("Foo".into()),
                TokenKind::LBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_line_comment_is_skipped() {
        assert_eq!(kinds("a // b c\nd"), vec![
            TokenKind::Ident("a".into()),
            TokenKind::Ident("d".into()),
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_block_comment_is_skipped() {
        assert_eq!(idents("a /* { } \" */ b"), vec!["a", "b"]);
    }

    #[test]
    fn test_preprocessor_line_is_skipped() {
        assert_eq!(idents("#region x\na\n#endregion\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_string_with_brace_is_one_token() {
        assert_eq!(kinds(r#""{ not a brace }""#), vec![
            TokenKind::StringLit,
            TokenKind::Eof
        ]);
    }

    #[test]
    fn test_string_escape_does_not_end_literal() {
        assert_eq!(kinds(r#""a\"b" c"#), vec![
            TokenKind::StringLit,
            TokenKind::Ident("c".into()),
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_verbatim_string_double_quote_escape() {
        assert_eq!(kinds(r#"@"a""b" c"#), vec![
            TokenKind::StringLit,
            TokenKind::Ident("c".into()),
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_interpolated_string_is_one_token() {
        assert_eq!(kinds(r#"$"x {a} y" b"#), vec![
            TokenKind::StringLit,
            TokenKind::Ident("b".into()),
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_char_literal_with_escape() {
        assert_eq!(kinds(r"'\'' x"), vec![
            TokenKind::CharLit,
            TokenKind::Ident("x".into()),
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_escaped_identifier_drops_at_sign() {
        assert_eq!(idents("@class"), vec!["class"]);
    }

    #[test]
    fn test_number_with_member_access_splits_at_dot() {
        assert_eq!(kinds("1.ToString"), vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Ident("ToString".into()),
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_decimal_number_is_one_token() {
        assert_eq!(kinds("3.25"), vec![TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_arrow_token() {
        assert_eq!(kinds("=> ="), vec![
            TokenKind::Arrow,
            TokenKind::Eq,
            TokenKind::Eof
        ]);
    }

    #[test]
    fn test_nested_generic_closes_as_two_gt() {
        assert_eq!(kinds("List<List<int>>"), vec![
            TokenKind::Ident("List".into()),
            TokenKind::Lt,
            TokenKind::Ident("List".into()),
            TokenKind::Lt,
            TokenKind::Ident("int".into()),
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Eof,
        ]);
    }

    #[test]
    fn test_unterminated_string_ends_at_eof() {
        assert_eq!(kinds(r#""abc"#), vec![TokenKind::StringLit, TokenKind::Eof]);
    }
}
