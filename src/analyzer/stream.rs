//! Forward-only cursor over a fixed token sequence.

use crate::tokenizer::{Token, TokenKind};

/// A cursor over a fixed sequence of [`Token`]s.
///
/// The cursor only moves forward and never passes the end of the sequence:
/// `0 <= position <= len` always holds. Tokens behind the cursor are not
/// reachable through the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Token at the cursor, or `None` at the end.
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Token `offset` positions after the cursor; `peek(0)` is `current()`.
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.cursor
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
    }

    /// Moves the cursor forward by one token. Does nothing at the end.
    pub fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    pub fn is_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Whether the current token has the given kind.
    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.peek_is(0, kind)
    }

    /// Whether the token `offset` positions ahead has the given kind.
    pub fn peek_is(&self, offset: usize, kind: TokenKind) -> bool {
        self.peek(offset).is_some_and(|token| token.is(kind))
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
