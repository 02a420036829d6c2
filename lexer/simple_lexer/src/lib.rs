//! Declarative tokenizer for hand-rolled parsers.
//!
//! A [`Lexer`] is built from an ordered list of named token patterns, each
//! either a literal string or a regular expression. Tokenizing repeatedly
//! matches at the current offset and emits the first definition, in
//! declaration order, that matches there. Declaration order is priority, so
//! a keyword declared before a generic identifier pattern wins over it.
//!
//! The lexer does no grammar validation, no backtracking and no error
//! recovery: the token stream stops at the first offset nothing matches.
//!
//! # Example
//!
//! ```
//! use simple_lexer::{Lexer, Pattern};
//!
//! let lexer = Lexer::with_definitions([
//!     ("whitespace", Pattern::regex(r"\s+")),
//!     ("null", Pattern::literal("null")),
//!     ("identifier", Pattern::regex("[a-z]+")),
//! ])?;
//!
//! let kinds: Vec<_> = lexer
//!     .tokenize("null nullable")
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(kinds, ["null", "whitespace", "null", "identifier"]);
//! # Ok::<(), simple_lexer::Error>(())
//! ```

mod definition;
mod error;
mod escape;
mod lexer;
mod options;
mod token;
mod tokens;

pub use definition::{Pattern, TokenDefinition, TokenDefinitions};
pub use error::{Error, InvalidPatternError, TokenizeError};
pub use escape::{escape, is_syntax_char};
pub use lexer::Lexer;
pub use options::{LexerConfig, LexerOptions};
pub use token::Token;
pub use tokens::Tokens;
