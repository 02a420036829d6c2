//! Literal Pattern Escaping
//!
//! Turns a literal string into a pattern fragment that matches exactly that
//! string. Escaped characters: `^ $ \ . * + ? ( ) [ ] { } |`
//!
//! The output is only valid at a top-level (concatenable) position of a
//! pattern. It must not be placed inside a character class such as `[...]`.

/// Returns `true` if `c` carries syntactic meaning at a top-level pattern
/// position and must be escaped to match literally.
#[inline]
pub fn is_syntax_char(c: char) -> bool {
    matches!(
        c,
        '^' | '$' | '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|'
    )
}

/// Escape `literal` for insertion into a pattern without special meaning.
///
/// Every syntax character is prefixed with `\`; all other characters pass
/// through unchanged (no case folding, no Unicode normalization).
pub fn escape(literal: &str) -> String {
    let mut result = String::with_capacity(literal.len());

    for c in literal.chars() {
        if is_syntax_char(c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests;
