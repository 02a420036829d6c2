use super::*;
use regex::Regex;

fn anchored(fragment: &str) -> Regex {
    match Regex::new(&format!("^(?:{fragment})$")) {
        Ok(re) => re,
        Err(err) => panic!("escaped fragment {fragment:?} failed to compile: {err}"),
    }
}

// === Character Set ===

#[test]
fn syntax_chars_are_recognized() {
    for c in "^$\\.*+?()[]{}|".chars() {
        assert!(is_syntax_char(c), "{c:?} should be a syntax char");
    }
}

#[test]
fn ordinary_chars_are_not_syntax() {
    for c in "aZ09 _-,:;\"'#&~/!@%=<>\n\té".chars() {
        assert!(!is_syntax_char(c), "{c:?} should pass through");
    }
}

// === Escaping ===

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(escape("null"), "null");
    assert_eq!(escape(""), "");
    assert_eq!(escape("héllo wörld"), "héllo wörld");
}

#[test]
fn each_syntax_char_gets_one_backslash() {
    assert_eq!(escape("a.b"), "a\\.b");
    assert_eq!(escape("{"), "\\{");
    assert_eq!(escape("\\"), "\\\\");
    assert_eq!(escape("(a|b)*"), "\\(a\\|b\\)\\*");
}

#[test]
fn case_is_preserved() {
    assert_eq!(escape("NuLl"), "NuLl");
}

// === Matching Behavior ===

#[test]
fn escaped_dot_matches_only_itself() {
    let re = anchored(&escape("a.b"));
    assert!(re.is_match("a.b"));
    assert!(!re.is_match("axb"));
}

#[test]
fn all_syntax_chars_match_verbatim() {
    let literal = "^$\\.*+?()[]{}|";
    let re = anchored(&escape(literal));
    assert!(re.is_match(literal));
    assert!(!re.is_match(""));
    assert!(!re.is_match("^$"));
}

#[test]
fn quantifier_literal_is_not_a_quantifier() {
    let re = anchored(&escape("a{2}"));
    assert!(re.is_match("a{2}"));
    assert!(!re.is_match("aa"));
}

#[test]
fn alternation_literal_is_not_an_alternation() {
    let re = anchored(&escape("true|false"));
    assert!(re.is_match("true|false"));
    assert!(!re.is_match("true"));
    assert!(!re.is_match("false"));
}
