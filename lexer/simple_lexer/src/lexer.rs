//! The tokenizer engine.
//!
//! All definitions are compiled into one leftmost-first matcher where
//! alternative `i` is definition `i`. Each step runs that matcher anchored
//! at the current offset: it never scans ahead, and when several
//! definitions match at the same offset the earliest declared one wins,
//! even if a later one would match more text.
//!
//! Every definition is compiled as its own pattern of a multi-pattern
//! matcher rather than as a capture group of one big alternation, so
//! capture groups inside user patterns cannot shift which definition a
//! match belongs to.

use regex_automata::util::syntax;
use regex_automata::{meta, Anchored, Input, MatchKind};

use crate::{
    InvalidPatternError, LexerConfig, LexerOptions, Token, TokenDefinition, TokenDefinitions,
    TokenizeError, Tokens,
};

/// A compiled, immutable tokenizer.
///
/// A `Lexer` is `Send + Sync` when `K` is: the matcher keeps its per-search
/// scratch space in an internal thread-safe pool, so any number of
/// concurrent [`match_at`](Lexer::match_at) and [`tokenize`](Lexer::tokenize)
/// calls can share one instance.
#[derive(Clone, Debug)]
pub struct Lexer<K> {
    definitions: TokenDefinitions<K>,
    matcher: meta::Regex,
    options: LexerOptions,
}

impl<K> Lexer<K> {
    /// Compile `definitions`, highest priority first.
    ///
    /// Accepts anything that yields [`TokenDefinition`]s or `(kind, pattern)`
    /// pairs: a `Vec`, an array, an order-preserving map, or references to
    /// existing definitions. Everything is copied into the lexer.
    pub fn new<I, D>(definitions: I, options: LexerOptions) -> Result<Self, InvalidPatternError>
    where
        I: IntoIterator<Item = D>,
        D: Into<TokenDefinition<K>>,
    {
        Self::compile(definitions.into_iter().collect(), options)
    }

    /// Compile `definitions` with default (case-sensitive) options.
    pub fn with_definitions<I, D>(definitions: I) -> Result<Self, InvalidPatternError>
    where
        I: IntoIterator<Item = D>,
        D: Into<TokenDefinition<K>>,
    {
        Self::new(definitions, LexerOptions::default())
    }

    pub fn from_config(config: LexerConfig<K>) -> Result<Self, InvalidPatternError> {
        Self::compile(config.tokens, config.options)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(
        definitions = definitions.len(),
        ignore_case = options.ignore_case,
    ))]
    fn compile(
        definitions: TokenDefinitions<K>,
        options: LexerOptions,
    ) -> Result<Self, InvalidPatternError> {
        let fragments: Vec<_> = definitions.iter().map(|d| d.pattern.fragment()).collect();

        let matcher = meta::Builder::new()
            .configure(meta::Config::new().match_kind(MatchKind::LeftmostFirst))
            .syntax(syntax::Config::new().case_insensitive(options.ignore_case))
            .build_many(&fragments)
            .map_err(|err| InvalidPatternError::from_build(&err))?;

        tracing::debug!("compiled token matcher");

        Ok(Lexer {
            definitions,
            matcher,
            options,
        })
    }

    pub fn definitions(&self) -> &TokenDefinitions<K> {
        &self.definitions
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }
}

impl<K: Clone> Lexer<K> {
    /// Match a single token starting exactly at `offset`.
    ///
    /// Returns `None` when no definition matches there. That is an ordinary
    /// outcome, not an error. It is also `None` when `offset` is past the end
    /// of `input` or not on a UTF-8 character boundary, and when the winning
    /// definition matches the empty string (an empty token cannot advance).
    pub fn match_at<'a>(&self, input: &'a str, offset: usize) -> Option<Token<'a, K>> {
        if !input.is_char_boundary(offset) {
            return None;
        }

        let search = Input::new(input).range(offset..).anchored(Anchored::Yes);
        let found = self.matcher.search(&search)?;
        if found.is_empty() {
            return None;
        }

        let definition = self.definitions.get(found.pattern().as_usize())?;

        Some(Token {
            kind: definition.kind.clone(),
            image: &input[found.range()],
            start_offset: found.start(),
            next_offset: found.end(),
        })
    }

    /// Lazily tokenize all of `input`.
    pub fn tokenize<'l, 'a>(&'l self, input: &'a str) -> Tokens<'l, 'a, K> {
        self.tokenize_from(input, 0)
    }

    /// Lazily tokenize `input` starting at `offset`.
    ///
    /// An `offset` at or past the end of `input` yields an empty stream.
    pub fn tokenize_from<'l, 'a>(&'l self, input: &'a str, offset: usize) -> Tokens<'l, 'a, K> {
        Tokens::new(self, input, offset)
    }

    /// Tokenize all of `input` eagerly, stopping at the first failure.
    pub fn tokenize_all<'a>(&self, input: &'a str) -> Result<Vec<Token<'a, K>>, TokenizeError> {
        self.tokenize(input).collect()
    }
}
