use crate::token::Keyword;
use crate::token::TokenKind;
use std::borrow::Cow;

/// A classified lexical unit.
///
/// `text` borrows from the source wherever possible. The exceptions are
/// string literals containing escape sequences (the decoded text is owned)
/// and `Illegal` tokens that end at end-of-input (the text carries a
/// trailing [`EOF_MARKER`](crate::lexer::EOF_MARKER)).
///
/// | kind       | text                                              |
/// |------------|---------------------------------------------------|
/// | punctuator | its spelling                                      |
/// | `Name`     | the name                                          |
/// | `Int`      | the literal, including any leading `-`            |
/// | `Float`    | the literal, including any leading `-`            |
/// | `String`   | the decoded contents, without surrounding quotes  |
/// | `Illegal`  | the consumed prefix plus the offending character  |
/// | `Eof`      | empty                                             |
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: Cow<'src, str>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: impl Into<Cow<'src, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns the keyword this token spells, if it is a `Name` token whose
    /// text matches a reserved word.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Name => Keyword::lookup(&self.text),
            _ => None,
        }
    }

    /// Returns `true` if this is a `Name` token spelled exactly like `kw`.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind == TokenKind::Name && self.text == kw.as_str()
    }

    /// Returns the text used for this token in "found '...'" diagnostics.
    pub fn describe(&self) -> &str {
        match self.kind {
            TokenKind::Eof => "EOF",
            _ => &self.text,
        }
    }
}
