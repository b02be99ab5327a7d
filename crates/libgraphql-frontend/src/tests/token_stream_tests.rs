//! Tests for the two-token lookahead `TokenStream`.

use crate::lexer::Lexer;
use crate::token::TokenKind;
use crate::TokenStream;

#[test]
fn peek_does_not_consume() {
    let mut stream = TokenStream::new(Lexer::new("a b c"));
    assert_eq!(stream.peek().token.text, "a");
    assert_eq!(stream.peek().token.text, "a");
    assert_eq!(stream.peek_nth(1).token.text, "b");
    assert_eq!(stream.consume().token.text, "a");
    assert_eq!(stream.peek().token.text, "b");
    assert_eq!(stream.peek_nth(1).token.text, "c");
}

#[test]
fn tokens_are_read_lazily() {
    let mut stream = TokenStream::new(Lexer::new("a b c"));
    assert_eq!(stream.buffered(), 0);
    stream.peek();
    assert_eq!(stream.buffered(), 1);
    stream.peek_nth(1);
    assert_eq!(stream.buffered(), 2);
    assert_eq!(stream.lexer().offset(), 3);
    stream.consume();
    assert_eq!(stream.buffered(), 1);
}

#[test]
fn consume_past_end_keeps_returning_eof() {
    let mut stream = TokenStream::new(Lexer::new("x"));
    assert_eq!(stream.consume().token.kind, TokenKind::Name);
    assert_eq!(stream.peek_nth(1).token.kind, TokenKind::Eof);
    assert_eq!(stream.consume().token.kind, TokenKind::Eof);
    assert_eq!(stream.consume().token.kind, TokenKind::Eof);
}

#[test]
#[should_panic(expected = "exceeds the stream's capacity")]
fn peeking_beyond_lookahead_panics() {
    let mut stream = TokenStream::new(Lexer::new("a b c"));
    stream.peek_nth(2);
}
