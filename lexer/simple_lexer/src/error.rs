//! Error types for lexer construction and tokenization.
//!
//! Two kinds only:
//! - [`InvalidPatternError`]: raised by the constructor when a pattern (or
//!   the combined matcher) does not compile
//! - [`TokenizeError`]: raised by the token stream at the first offset where
//!   no definition matches
//!
//! Neither is recovered from internally. Line/column derivation from
//! [`TokenizeError::offset`] is left to the caller.

use regex_automata::meta;

/// A token pattern failed to compile.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("invalid token pattern{}: {message}", definition_suffix(.index))]
pub struct InvalidPatternError {
    /// Position of the offending definition, when it can be attributed to one.
    pub index: Option<usize>,
    /// Message from the pattern compiler.
    pub message: String,
}

impl InvalidPatternError {
    pub(crate) fn from_build(err: &meta::BuildError) -> Self {
        let message = match err.syntax_error() {
            Some(syntax) => syntax.to_string(),
            None => err.to_string(),
        };
        InvalidPatternError {
            index: err.pattern().map(|pid| pid.as_usize()),
            message,
        }
    }
}

fn definition_suffix(index: &Option<usize>) -> String {
    match index {
        Some(index) => format!(" for definition #{index}"),
        None => String::new(),
    }
}

/// No token definition matches the input at `offset`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("failed to tokenize input at offset {offset}")]
pub struct TokenizeError {
    /// Byte offset of the first unmatchable position.
    pub offset: usize,
}

/// Either lexer error, for callers that build and tokenize in one `?` chain.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidPattern(#[from] InvalidPatternError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}
