//! Bounded-lookahead buffer over a [`Lexer`].

use crate::lexer::Lexer;
use crate::lexer::LineSink;
use crate::token::SpannedToken;
use std::collections::VecDeque;

/// A [`Lexer`] wrapped with a fixed-capacity lookahead buffer.
///
/// The parser's grammar is LL(2), so at most [`TokenStream::LOOKAHEAD`]
/// tokens are ever buffered. Tokens are pulled from the lexer lazily, only
/// when a peek reaches past the buffered ones.
///
/// Because [`Lexer::read()`] returns `Eof` indefinitely once input is
/// exhausted, peeks and consumes always succeed.
pub struct TokenStream<'src, S: LineSink> {
    lexer: Lexer<'src, S>,
    /// Ring buffer of unconsumed tokens; `consume()` pops from the front.
    buffer: VecDeque<SpannedToken<'src>>,
}

impl<'src, S: LineSink> TokenStream<'src, S> {
    /// Maximum number of tokens that may be peeked at once.
    pub const LOOKAHEAD: usize = 2;

    pub fn new(lexer: Lexer<'src, S>) -> Self {
        Self {
            lexer,
            buffer: VecDeque::with_capacity(Self::LOOKAHEAD),
        }
    }

    /// Returns the underlying lexer.
    pub fn lexer(&self) -> &Lexer<'src, S> {
        &self.lexer
    }

    /// Removes and returns the next token.
    pub fn consume(&mut self) -> SpannedToken<'src> {
        self.fill(1);
        self.buffer
            .pop_front()
            .unwrap_or_else(|| self.lexer.read())
    }

    /// Returns the next token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> &SpannedToken<'src> {
        self.peek_nth(0)
    }

    /// Returns the token `n` places ahead (0-indexed) without consuming.
    ///
    /// # Panics
    ///
    /// Panics if `n >= LOOKAHEAD`.
    pub fn peek_nth(&mut self, n: usize) -> &SpannedToken<'src> {
        assert!(
            n < Self::LOOKAHEAD,
            "lookahead of {} exceeds the stream's capacity of {}",
            n + 1,
            Self::LOOKAHEAD,
        );
        self.fill(n + 1);
        &self.buffer[n]
    }

    /// Returns the number of tokens currently buffered.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    fn fill(&mut self, count: usize) {
        while self.buffer.len() < count {
            self.buffer.push_back(self.lexer.read());
        }
    }
}
