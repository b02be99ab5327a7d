use std::fmt;

/// The lexical class of a [`Token`](crate::token::Token).
///
/// Reserved words (`query`, `fragment`, `on`, ...) are *not* separate kinds:
/// they lex as [`TokenKind::Name`] and are recognized by the parser through
/// the [`Keyword`](crate::token::Keyword) table. This keeps them usable as
/// ordinary names wherever the grammar doesn't reserve them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    /// A malformed token. The token's text holds what was consumed.
    Illegal,
    /// End of input.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,

    // =========================================================================
    // Literals
    // =========================================================================
    Name,
    Int,
    Float,
    String,
}

impl TokenKind {
    /// Returns the source spelling of a punctuator, or `None` for all other
    /// kinds.
    pub fn as_punctuator_str(self) -> Option<&'static str> {
        match self {
            TokenKind::Bang => Some("!"),
            TokenKind::Dollar => Some("$"),
            TokenKind::ParenOpen => Some("("),
            TokenKind::ParenClose => Some(")"),
            TokenKind::Spread => Some("..."),
            TokenKind::Colon => Some(":"),
            TokenKind::Equals => Some("="),
            TokenKind::At => Some("@"),
            TokenKind::BracketOpen => Some("["),
            TokenKind::BracketClose => Some("]"),
            TokenKind::BraceOpen => Some("{"),
            TokenKind::Pipe => Some("|"),
            TokenKind::BraceClose => Some("}"),

            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Name
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::String => None,
        }
    }

    /// Maps a single-character punctuator to its kind.
    pub(crate) fn from_punctuator_char(ch: char) -> Option<TokenKind> {
        match ch {
            '!' => Some(TokenKind::Bang),
            '$' => Some(TokenKind::Dollar),
            '(' => Some(TokenKind::ParenOpen),
            ')' => Some(TokenKind::ParenClose),
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equals),
            '@' => Some(TokenKind::At),
            '[' => Some(TokenKind::BracketOpen),
            ']' => Some(TokenKind::BracketClose),
            '{' => Some(TokenKind::BraceOpen),
            '|' => Some(TokenKind::Pipe),
            '}' => Some(TokenKind::BraceClose),
            _ => None,
        }
    }
}

/// Punctuators render as their spelling; every other kind renders as an
/// upper-case class name (`NAME`, `INT`, `EOF`, ...), which is the form used
/// in "expecting ..." diagnostics.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Name => "NAME",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",

            TokenKind::Bang
            | TokenKind::Dollar
            | TokenKind::ParenOpen
            | TokenKind::ParenClose
            | TokenKind::Spread
            | TokenKind::Colon
            | TokenKind::Equals
            | TokenKind::At
            | TokenKind::BracketOpen
            | TokenKind::BracketClose
            | TokenKind::BraceOpen
            | TokenKind::Pipe
            | TokenKind::BraceClose => self.as_punctuator_str().unwrap_or_default(),
        })
    }
}
