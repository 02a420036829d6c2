//! Token definitions and their normalization into an owned, ordered list.
//!
//! Declaration order is priority: when two definitions can match at the
//! same offset, the one declared first wins regardless of match length.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use crate::escape::escape;

/// The pattern of a token definition.
///
/// A literal matches its text verbatim. A regex is kept as source text; any
/// flags configured on a compiled [`regex::Regex`] it was taken from are
/// ignored, since every definition shares the lexer's flags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "PatternRepr")]
pub enum Pattern {
    /// Exact text.
    Literal(String),
    /// Regular expression source.
    Regex(String),
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Pattern::Literal(text.into())
    }

    pub fn regex(source: impl Into<String>) -> Self {
        Pattern::Regex(source.into())
    }

    /// The fragment this pattern contributes to the combined matcher.
    pub(crate) fn fragment(&self) -> Cow<'_, str> {
        match self {
            Pattern::Literal(text) => Cow::Owned(escape(text)),
            Pattern::Regex(source) => Cow::Borrowed(source),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Literal(text.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Literal(text)
    }
}

impl From<&regex::Regex> for Pattern {
    fn from(re: &regex::Regex) -> Self {
        Pattern::Regex(re.as_str().to_owned())
    }
}

impl From<regex::Regex> for Pattern {
    fn from(re: regex::Regex) -> Self {
        Pattern::from(&re)
    }
}

/// Serialized pattern shape: a bare string is a literal, otherwise
/// `{ "literal": "..." }` or `{ "regex": "..." }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PatternRepr {
    Bare(String),
    Tagged(TaggedPattern),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum TaggedPattern {
    Literal(String),
    Regex(String),
}

impl From<PatternRepr> for Pattern {
    fn from(repr: PatternRepr) -> Self {
        match repr {
            PatternRepr::Bare(text) | PatternRepr::Tagged(TaggedPattern::Literal(text)) => {
                Pattern::Literal(text)
            }
            PatternRepr::Tagged(TaggedPattern::Regex(source)) => Pattern::Regex(source),
        }
    }
}

/// A named token pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct TokenDefinition<K> {
    /// Token type reported on every token this definition produces.
    #[serde(alias = "type")]
    pub kind: K,
    pub pattern: Pattern,
}

impl<K> TokenDefinition<K> {
    pub fn new(kind: K, pattern: impl Into<Pattern>) -> Self {
        TokenDefinition {
            kind,
            pattern: pattern.into(),
        }
    }
}

impl<K, P: Into<Pattern>> From<(K, P)> for TokenDefinition<K> {
    fn from((kind, pattern): (K, P)) -> Self {
        TokenDefinition::new(kind, pattern)
    }
}

impl<K: Clone> From<&TokenDefinition<K>> for TokenDefinition<K> {
    fn from(definition: &TokenDefinition<K>) -> Self {
        definition.clone()
    }
}

/// Owned, priority-ordered token definitions.
///
/// Index `i` is the priority slot of the `i`-th declared definition. The
/// list owns copies of everything it was built from, so mutating the
/// caller's original definitions afterwards has no effect on a lexer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TokenDefinitions<K> {
    definitions: Vec<TokenDefinition<K>>,
}

impl<K> TokenDefinitions<K> {
    pub fn new() -> Self {
        TokenDefinitions {
            definitions: Vec::new(),
        }
    }

    /// Append a definition with the lowest priority so far.
    pub fn push(&mut self, definition: impl Into<TokenDefinition<K>>) {
        self.definitions.push(definition.into());
    }

    pub fn get(&self, index: usize) -> Option<&TokenDefinition<K>> {
        self.definitions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenDefinition<K>> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<K> Default for TokenDefinitions<K> {
    fn default() -> Self {
        TokenDefinitions::new()
    }
}

impl<K, D: Into<TokenDefinition<K>>> FromIterator<D> for TokenDefinitions<K> {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        TokenDefinitions {
            definitions: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<K> From<Vec<TokenDefinition<K>>> for TokenDefinitions<K> {
    fn from(definitions: Vec<TokenDefinition<K>>) -> Self {
        TokenDefinitions { definitions }
    }
}

impl<K> IntoIterator for TokenDefinitions<K> {
    type Item = TokenDefinition<K>;
    type IntoIter = std::vec::IntoIter<TokenDefinition<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a TokenDefinitions<K> {
    type Item = &'a TokenDefinition<K>;
    type IntoIter = std::slice::Iter<'a, TokenDefinition<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

/// Accepts either a sequence of `{ kind | type, pattern }` entries or a
/// `kind -> pattern` map. Map entries keep the order they appear in.
impl<'de, K: Deserialize<'de>> Deserialize<'de> for TokenDefinitions<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DefinitionsVisitor(PhantomData))
    }
}

struct DefinitionsVisitor<K>(PhantomData<K>);

impl<'de, K: Deserialize<'de>> Visitor<'de> for DefinitionsVisitor<K> {
    type Value = TokenDefinitions<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of token definitions or a map of token names to patterns")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut definitions = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(definition) = seq.next_element::<TokenDefinition<K>>()? {
            definitions.push(definition);
        }
        Ok(TokenDefinitions { definitions })
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut definitions = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((kind, pattern)) = map.next_entry::<K, Pattern>()? {
            definitions.push(TokenDefinition { kind, pattern });
        }
        Ok(TokenDefinitions { definitions })
    }
}

#[cfg(test)]
mod tests;
