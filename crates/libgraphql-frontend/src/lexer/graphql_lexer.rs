//! A single-character-lookahead lexer over an in-memory `&str`.
//!
//! Token text borrows directly from the source wherever possible: names,
//! numbers, punctuators, and string literals without escape sequences are
//! all `Cow::Borrowed`. Only strings that needed escape decoding, and
//! `Illegal` tokens cut short by end-of-input, allocate.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_frontend::lexer::Lexer;
//! use libgraphql_frontend::token::TokenKind;
//!
//! let kinds: Vec<TokenKind> = Lexer::new("{ name }")
//!     .map(|t| t.token.kind)
//!     .collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::BraceOpen,
//!         TokenKind::Name,
//!         TokenKind::BraceClose,
//!         TokenKind::Eof,
//!     ],
//! );
//! ```

use crate::lexer::LineSink;
use crate::token::SpannedToken;
use crate::token::Token;
use crate::token::TokenKind;
use std::borrow::Cow;

/// Stand-in appended to `Illegal` token text when input ends in the middle of
/// a token.
pub const EOF_MARKER: char = '\u{FFFD}';

/// Lexer for the GraphQL query and schema definition languages.
///
/// Lexing never fails: malformed input produces a [`TokenKind::Illegal`]
/// token whose text is the consumed prefix plus the offending character (or
/// [`EOF_MARKER`] if input ended). It is up to the parser to reject
/// `Illegal` tokens.
///
/// Every `\n` consumed is reported to the lexer's [`LineSink`] as the offset
/// of the following line, which is how a [`File`](crate::File)'s line table
/// is populated during parsing.
pub struct Lexer<'src, S: LineSink = ()> {
    source: &'src str,

    /// Byte offset of the next unread character.
    offset: usize,

    lines: S,

    /// Set once the `Iterator` impl has yielded `Eof`.
    finished: bool,
}

impl<'src> Lexer<'src, ()> {
    /// Creates a lexer that discards line information.
    pub fn new(source: &'src str) -> Self {
        Self::with_line_sink(source, ())
    }
}

impl<'src, S: LineSink> Lexer<'src, S> {
    /// Creates a lexer that reports line starts to `lines`.
    pub fn with_line_sink(source: &'src str, lines: S) -> Self {
        Self {
            source,
            offset: 0,
            lines,
            finished: false,
        }
    }

    /// Returns the line sink.
    pub fn line_sink(&self) -> &S {
        &self.lines
    }

    /// Consumes the lexer, returning its line sink.
    pub fn into_line_sink(self) -> S {
        self.lines
    }

    /// Returns the byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    // =========================================================================
    // Character scanning
    // =========================================================================

    fn peek_char(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Consumes one character, reporting a new line start after `\n`.
    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.lines.add_line(self.offset);
        }
        Some(ch)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.bump();
        }
    }

    fn spanned(&self, start: usize, token: Token<'src>) -> SpannedToken<'src> {
        SpannedToken {
            start,
            end: self.offset,
            token,
        }
    }

    /// Consumes the offending character (if any) and returns an `Illegal`
    /// token spanning everything from `start`.
    fn illegal(&mut self, start: usize) -> SpannedToken<'src> {
        let text: Cow<'src, str> = match self.bump() {
            Some(_) => Cow::Borrowed(&self.source[start..self.offset]),
            None => Cow::Owned(format!(
                "{}{}",
                &self.source[start..self.offset],
                EOF_MARKER,
            )),
        };
        self.spanned(start, Token::new(TokenKind::Illegal, text))
    }

    // =========================================================================
    // Main loop
    // =========================================================================

    /// Reads the next token.
    ///
    /// Once input is exhausted every further call returns an `Eof` token
    /// positioned at the end of the source.
    pub fn read(&mut self) -> SpannedToken<'src> {
        loop {
            let start = self.offset;
            let Some(ch) = self.peek_char() else {
                return self.spanned(start, Token::eof());
            };
            match ch {
                // Insignificant: BOM, whitespace, line terminators, commas.
                '\u{FEFF}' | '\t' | ' ' | '\r' | '\n' | ',' => {
                    self.bump();
                },
                '#' => self.skip_comment(),
                '.' => return self.lex_spread(start),
                '"' => return self.lex_string(start),
                '-' | '0'..='9' => return self.lex_number(start),
                c if is_name_start(c) => return self.lex_name(start),
                c => {
                    self.bump();
                    let kind = TokenKind::from_punctuator_char(c)
                        .unwrap_or(TokenKind::Illegal);
                    let text = &self.source[start..self.offset];
                    return self.spanned(start, Token::new(kind, text));
                },
            }
        }
    }

    /// Skips a `#` comment up to (not including) the first control character
    /// other than tab, or end of input.
    fn skip_comment(&mut self) {
        self.bump();
        self.bump_while(|c| !is_control(c));
    }

    fn lex_spread(&mut self, start: usize) -> SpannedToken<'src> {
        self.bump();
        for _ in 0..2 {
            if self.peek_char() != Some('.') {
                return self.illegal(start);
            }
            self.bump();
        }
        self.spanned(start, Token::new(TokenKind::Spread, "..."))
    }

    fn lex_name(&mut self, start: usize) -> SpannedToken<'src> {
        self.bump_while(is_name_continue);
        let text = &self.source[start..self.offset];
        self.spanned(start, Token::new(TokenKind::Name, text))
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes `'-'? IntegerPart ('.' Digit+)? (('e'|'E') ('+'|'-')? Digit+)?`.
    fn lex_number(&mut self, start: usize) -> SpannedToken<'src> {
        if self.peek_char() == Some('-') {
            self.bump();
        }

        match self.peek_char() {
            Some('0') => {
                self.bump();
                if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    return self.illegal(start);
                }
            },
            Some('1'..='9') => self.bump_while(|c| c.is_ascii_digit()),
            _ => return self.illegal(start),
        }

        let mut is_float = false;

        if self.peek_char() == Some('.') {
            is_float = true;
            self.bump();
            if !self.at_digit() {
                return self.illegal(start);
            }
            self.bump_while(|c| c.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            if !self.at_digit() {
                return self.illegal(start);
            }
            self.bump_while(|c| c.is_ascii_digit());
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        let text = &self.source[start..self.offset];
        self.spanned(start, Token::new(kind, text))
    }

    fn at_digit(&self) -> bool {
        self.peek_char().is_some_and(|c| c.is_ascii_digit())
    }

    // =========================================================================
    // Strings
    // =========================================================================

    /// Lexes a `"`-quoted string, decoding escapes.
    ///
    /// `decoded` stays `None` (and the result borrows from the source) until
    /// the first escape sequence is seen.
    fn lex_string(&mut self, start: usize) -> SpannedToken<'src> {
        self.bump();
        let content_start = self.offset;
        let mut decoded: Option<String> = None;

        loop {
            let Some(ch) = self.peek_char() else {
                let so_far = self.decoded_so_far(content_start, decoded);
                return self.illegal_string(start, so_far);
            };
            match ch {
                '"' => {
                    let content_end = self.offset;
                    self.bump();
                    let text = match decoded {
                        Some(s) => Cow::Owned(s),
                        None => Cow::Borrowed(&self.source[content_start..content_end]),
                    };
                    return self.spanned(start, Token::new(TokenKind::String, text));
                },
                '\\' => {
                    let mut buf = self.decoded_so_far(content_start, decoded);
                    self.bump();
                    match self.peek_char() {
                        Some(esc @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {
                            self.bump();
                            buf.push(unescape(esc));
                        },
                        Some('u') => {
                            self.bump();
                            match self.lex_unicode_escape() {
                                Ok(ch) => buf.push(ch),
                                Err(partial) => {
                                    buf.push_str("\\u");
                                    buf.push_str(&partial);
                                    return self.illegal_string(start, buf);
                                },
                            }
                        },
                        _ => return self.illegal_string(start, buf),
                    }
                    decoded = Some(buf);
                },
                c if is_control(c) => {
                    let so_far = self.decoded_so_far(content_start, decoded);
                    return self.illegal_string(start, so_far);
                },
                c => {
                    self.bump();
                    if let Some(buf) = decoded.as_mut() {
                        buf.push(c);
                    }
                },
            }
        }
    }

    /// Returns the decoded contents so far, materializing them from the
    /// source if no escape has been seen yet.
    fn decoded_so_far(&self, content_start: usize, decoded: Option<String>) -> String {
        decoded.unwrap_or_else(|| self.source[content_start..self.offset].to_string())
    }

    /// Reads the four hex digits following `\u`.
    ///
    /// On failure returns the digits read before the bad character (which is
    /// left unconsumed). Surrogate code units decode to U+FFFD.
    fn lex_unicode_escape(&mut self) -> Result<char, String> {
        let mut code_unit: u32 = 0;
        let mut digits = String::with_capacity(4);
        for _ in 0..4 {
            match self.peek_char().and_then(|c| c.to_digit(16).map(|d| (c, d))) {
                Some((c, d)) => {
                    self.bump();
                    digits.push(c);
                    code_unit = code_unit * 16 + d;
                },
                None => return Err(digits),
            }
        }
        Ok(char::from_u32(code_unit).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Consumes the offending character (if any) and returns an `Illegal`
    /// token whose text is `"`, the decoded contents so far, and the
    /// offending character or [`EOF_MARKER`].
    fn illegal_string(&mut self, start: usize, mut text: String) -> SpannedToken<'src> {
        text.insert(0, '"');
        text.push(self.bump().unwrap_or(EOF_MARKER));
        self.spanned(start, Token::new(TokenKind::Illegal, text))
    }
}

/// Yields every token up to and including the first `Eof`.
impl<'src, S: LineSink> Iterator for Lexer<'src, S> {
    type Item = SpannedToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.read();
        if token.token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Control characters terminate comments and are illegal inside strings.
/// Tab is the one exception.
fn is_control(c: char) -> bool {
    (c as u32) < 0x20 && c != '\t'
}

fn unescape(esc: char) -> char {
    match esc {
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        // `"`, `\` and `/` stand for themselves.
        other => other,
    }
}
