/// Configuration for a [`Parser`](crate::Parser).
///
/// ```rust
/// use libgraphql_frontend::ParserOptions;
///
/// let options = ParserOptions::new().max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserOptions {
    /// Maximum nesting depth of selection sets, list and object values, and
    /// list types, combined. Input nested more deeply fails with
    /// [`ParseError::NestingTooDeep`](crate::ParseError::NestingTooDeep)
    /// instead of exhausting the call stack.
    pub max_depth: usize,
}

impl ParserOptions {
    /// Nesting limit used unless overridden with
    /// [`max_depth()`](Self::max_depth()).
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}
