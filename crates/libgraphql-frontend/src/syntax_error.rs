use crate::Position;

/// A grammar violation: the parser required one thing and found another.
///
/// Renders as `"<filename:>line:col: expecting <expected>, found '<found>'"`,
/// where the filename segment is present only if the source was registered
/// with a non-empty name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{position}: expecting {expected}, found '{found}'")]
pub struct SyntaxError {
    /// Resolved location of the offending token.
    pub position: Position,

    /// Description of what was acceptable at this point, e.g. `NAME`, `}` or
    /// `query or mutation or subscription`.
    pub expected: String,

    /// Text of the offending token. `EOF` at end of input; for `Illegal`
    /// tokens, the malformed text as lexed.
    pub found: String,
}
