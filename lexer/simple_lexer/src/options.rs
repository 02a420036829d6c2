//! Lexer configuration.
//!
//! [`LexerOptions`] holds the flags shared by every definition. A lexer can
//! also be described entirely by data through [`LexerConfig`], e.g. a JSON
//! or TOML document of the shape `{ "tokens": ..., "ignoreCase": true }`.

use serde::Deserialize;

use crate::TokenDefinitions;

/// Flags applied uniformly to every token pattern.
///
/// Flags cannot vary per definition: all patterns are compiled into a
/// single matcher. A definition that needs different casing rules must
/// spell them out in its own pattern (e.g. `(?i:...)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Match every pattern case-insensitively.
    #[serde(alias = "ignoreCase")]
    pub ignore_case: bool,
}

impl LexerOptions {
    pub const fn new() -> Self {
        LexerOptions { ignore_case: false }
    }

    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

/// A complete, data-driven lexer description.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(bound(deserialize = "K: Deserialize<'de>"))]
pub struct LexerConfig<K> {
    pub tokens: TokenDefinitions<K>,
    #[serde(flatten)]
    pub options: LexerOptions,
}
