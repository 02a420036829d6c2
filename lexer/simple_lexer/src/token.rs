//! Tokens produced by the lexer.

use std::ops::Range;

use serde::Serialize;

/// A typed slice of the input.
///
/// `image` is exactly `input[start_offset..next_offset]`, untouched:
/// whitespace, casing and escapes are kept verbatim. Offsets are byte
/// offsets into the tokenized input, and `next_offset` is where the
/// following token starts.
///
/// Serializes as `{ "type", "image", "startOffset", "nextOffset" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token<'a, K> {
    #[serde(rename = "type")]
    pub kind: K,
    pub image: &'a str,
    pub start_offset: usize,
    pub next_offset: usize,
}

impl<K> Token<'_, K> {
    /// Byte range of this token in the input.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start_offset..self.next_offset
    }
}
