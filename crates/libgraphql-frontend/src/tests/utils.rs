//! Shared helpers for parser and walker tests.

use crate::ast::Document;
use crate::ast::Schema;
use crate::lexer::Lexer;
use crate::token::TokenKind;
use crate::FileSet;
use crate::ParseError;
use crate::Pos;

pub fn parse_doc(source: &str) -> Document<'_> {
    let mut files = FileSet::new();
    match crate::parse_document(source, None, &mut files) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse document {source:?}: {err}"),
    }
}

pub fn parse_doc_err(source: &str) -> ParseError {
    let mut files = FileSet::new();
    match crate::parse_document(source, None, &mut files) {
        Ok(doc) => panic!("expected {source:?} to fail, got {doc:#?}"),
        Err(err) => err,
    }
}

pub fn parse_sdl(source: &str) -> Schema<'_> {
    let mut files = FileSet::new();
    match crate::parse_schema(source, None, &mut files) {
        Ok(schema) => schema,
        Err(err) => panic!("failed to parse schema {source:?}: {err}"),
    }
}

pub fn parse_sdl_err(source: &str) -> ParseError {
    let mut files = FileSet::new();
    match crate::parse_schema(source, None, &mut files) {
        Ok(schema) => panic!("expected {source:?} to fail, got {schema:#?}"),
        Err(err) => err,
    }
}

/// Lexes `source` to completion, returning each token's kind and text
/// (including the trailing `Eof`).
pub fn lex(source: &str) -> Vec<(TokenKind, String)> {
    Lexer::new(source)
        .map(|t| (t.token.kind, t.token.text.into_owned()))
        .collect()
}

/// Returns the byte offset of `pos` within its file.
pub fn offset_of(files: &FileSet, pos: Pos) -> usize {
    match files.position(pos) {
        Some(position) => position.offset,
        None => panic!("{pos:?} does not belong to any file"),
    }
}
