//! A hand-written front end for the GraphQL query and schema definition
//! languages.
//!
//! The crate is layered leaves-first:
//!
//! - **Position model** ([`Pos`], [`File`], [`FileSet`], [`Position`]): maps
//!   compact integer positions back to `file:line:column` across any number
//!   of source files.
//! - **Tokenizer** ([`lexer::Lexer`]): turns source text into
//!   [`token::Token`]s, reporting line starts to the position model as it
//!   goes. Malformed input becomes an `Illegal` token rather than an error.
//! - **Syntax tree** ([`ast`]): typed nodes with exact source spans.
//! - **Parser** ([`Parser`], [`parse_document()`], [`parse_schema()`]): an
//!   LL(2) recursive-descent parser that fails fast on the first error.
//! - **Walker** ([`walker`]): generic pre-order traversal of parsed trees.
//!
//! [`SourceSet`] ties these together for loading many files into one
//! diagnostic space.

pub mod ast;
mod file;
mod file_set;
pub mod lexer;
mod parse_error;
mod parser;
mod parser_options;
mod pos;
mod position;
mod source_set;
mod syntax_error;
pub mod token;
mod token_stream;
pub mod walker;

pub use file::File;
pub use file_set::FileSet;
pub use parse_error::ParseError;
pub use parser::Parser;
pub use parser::parse_document;
pub use parser::parse_document_with_options;
pub use parser::parse_schema;
pub use parser::parse_schema_with_options;
pub use parser_options::ParserOptions;
pub use pos::Pos;
pub use position::Position;
pub use source_set::LoadError;
pub use source_set::Source;
pub use source_set::SourceSet;
pub use syntax_error::SyntaxError;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;
