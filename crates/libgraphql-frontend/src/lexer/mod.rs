//! The tokenizer: turns the text of one source file into [`SpannedToken`]s.
//!
//! [`SpannedToken`]: crate::token::SpannedToken

mod graphql_lexer;
mod line_sink;

pub use graphql_lexer::EOF_MARKER;
pub use graphql_lexer::Lexer;
pub use line_sink::LineSink;
