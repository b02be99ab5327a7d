use crate::token::Token;

/// A [`Token`] together with the half-open byte range `[start, end)` it
/// occupies in its file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpannedToken<'src> {
    pub start: usize,
    pub end: usize,
    pub token: Token<'src>,
}
