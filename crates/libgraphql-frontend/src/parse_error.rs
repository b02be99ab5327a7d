use crate::Position;
use crate::SyntaxError;

/// The error returned by a failed parse.
///
/// Parsing is fail-fast: a parse call returns exactly one error, for the
/// first point at which the input deviated from the grammar.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Selection sets, list values, object values, or list types nested more
    /// deeply than [`ParserOptions::max_depth`](crate::ParserOptions).
    #[error("{position}: nesting too deep (limit is {limit})")]
    NestingTooDeep {
        position: Position,
        limit: usize,
    },
}

impl ParseError {
    /// Returns the location at which parsing stopped.
    pub fn position(&self) -> &Position {
        match self {
            ParseError::Syntax(err) => &err.position,
            ParseError::NestingTooDeep { position, .. } => position,
        }
    }

    pub fn as_syntax_error(&self) -> Option<&SyntaxError> {
        match self {
            ParseError::Syntax(err) => Some(err),
            ParseError::NestingTooDeep { .. } => None,
        }
    }
}
