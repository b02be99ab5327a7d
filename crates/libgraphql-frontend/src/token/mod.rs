//! Token types produced by the [`Lexer`](crate::lexer::Lexer) and consumed by
//! the [`Parser`](crate::Parser).

mod graphql_token;
mod keyword;
mod spanned_token;
mod token_kind;

pub use graphql_token::Token;
pub use keyword::Keyword;
pub use spanned_token::SpannedToken;
pub use token_kind::TokenKind;
