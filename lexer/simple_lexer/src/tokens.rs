//! Lazy token stream.

use std::iter::FusedIterator;

use crate::{Lexer, Token, TokenizeError};

/// Iterator over the tokens of one input, created by [`Lexer::tokenize`].
///
/// Each token is matched only when requested. The stream ends with `None`
/// once the input is exhausted, or yields a single `Err` at the first offset
/// no definition matches and then ends. Stopping early never raises an
/// error for input that was not reached.
#[derive(Debug)]
pub struct Tokens<'l, 'a, K> {
    lexer: &'l Lexer<K>,
    input: &'a str,
    offset: usize,
    failed: bool,
}

impl<'l, 'a, K> Tokens<'l, 'a, K> {
    pub(crate) fn new(lexer: &'l Lexer<K>, input: &'a str, offset: usize) -> Self {
        Tokens {
            lexer,
            input,
            offset,
            failed: false,
        }
    }

    /// Offset where the next token would start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The input being tokenized.
    pub fn input(&self) -> &'a str {
        self.input
    }
}

impl<'a, K: Clone> Iterator for Tokens<'_, 'a, K> {
    type Item = Result<Token<'a, K>, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }

        if let Some(token) = self.lexer.match_at(self.input, self.offset) {
            self.offset = token.next_offset;
            return Some(Ok(token));
        }

        self.failed = true;
        tracing::trace!(offset = self.offset, "no token definition matches");
        Some(Err(TokenizeError {
            offset: self.offset,
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // Every token covers at least one byte.
            (0, Some(self.input.len().saturating_sub(self.offset)))
        }
    }
}

impl<K: Clone> FusedIterator for Tokens<'_, '_, K> {}
