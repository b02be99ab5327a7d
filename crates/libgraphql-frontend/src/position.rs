use std::fmt;

/// A resolved, human-readable source location.
///
/// `line` and `column` are 1-based; `column` counts bytes from the start of
/// the line. `offset` is the 0-based byte offset within the file. A
/// `Position` is valid when `line > 0`.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    pub filename: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Returns `true` if this position refers to an actual line.
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

/// Renders as one of:
///
/// ```text
/// file:line:column    valid position with filename
/// line:column         valid position without filename
/// file                invalid position with filename
/// -                   invalid position without filename
/// ```
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.filename.is_empty(), self.is_valid()) {
            (false, true) => {
                write!(f, "{}:{}:{}", self.filename, self.line, self.column)
            },
            (true, true) => write!(f, "{}:{}", self.line, self.column),
            (false, false) => f.write_str(&self.filename),
            (true, false) => f.write_str("-"),
        }
    }
}
