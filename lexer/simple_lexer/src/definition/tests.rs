use super::*;
use pretty_assertions::assert_eq;

fn kinds<K: Clone>(definitions: &TokenDefinitions<K>) -> Vec<K> {
    definitions.iter().map(|d| d.kind.clone()).collect()
}

// === Construction ===

#[test]
fn pairs_keep_declaration_order() {
    let definitions: TokenDefinitions<&str> = [
        ("whitespace", Pattern::regex(r"\s+")),
        ("openBrace", Pattern::literal("{")),
        ("null", Pattern::literal("null")),
    ]
    .into_iter()
    .collect();

    assert_eq!(kinds(&definitions), vec!["whitespace", "openBrace", "null"]);
    assert_eq!(definitions.len(), 3);
}

#[test]
fn plain_strings_become_literals() {
    let definition = TokenDefinition::new("comma", ",");
    assert_eq!(definition.pattern, Pattern::Literal(",".to_owned()));
}

#[test]
fn compiled_regex_keeps_only_source() {
    let re = match regex::RegexBuilder::new("null").case_insensitive(true).build() {
        Ok(re) => re,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(Pattern::from(&re), Pattern::Regex("null".to_owned()));
}

#[test]
fn push_appends_lowest_priority() {
    let mut definitions: TokenDefinitions<&str> = TokenDefinitions::new();
    assert!(definitions.is_empty());
    definitions.push(("a", "a"));
    definitions.push(TokenDefinition::new("b", Pattern::regex("b+")));
    assert_eq!(kinds(&definitions), vec!["a", "b"]);
    assert_eq!(definitions.get(1).map(|d| d.kind), Some("b"));
    assert!(definitions.get(2).is_none());
}

#[test]
fn collecting_from_references_copies() {
    let mut originals = vec![TokenDefinition::new("word".to_owned(), Pattern::regex("[a-z]+"))];
    let definitions: TokenDefinitions<String> = originals.iter().collect();

    originals[0].kind.push_str("_changed");
    originals[0].pattern = Pattern::literal("x");

    assert_eq!(kinds(&definitions), vec!["word".to_owned()]);
    assert_eq!(
        definitions.get(0).map(|d| &d.pattern),
        Some(&Pattern::Regex("[a-z]+".to_owned()))
    );
}

// === Fragments ===

#[test]
fn literal_fragment_is_escaped() {
    assert_eq!(Pattern::literal("a.b").fragment(), "a\\.b");
}

#[test]
fn regex_fragment_is_verbatim() {
    assert_eq!(Pattern::regex("a.b").fragment(), "a.b");
}

// === Deserialization ===

#[test]
fn deserialize_map_preserves_document_order() {
    let json = r#"{
        "whitespace": { "regex": "\\s+" },
        "openBrace": "{",
        "closeBrace": { "literal": "}" },
        "boolean": { "regex": "true|false" }
    }"#;
    let definitions: TokenDefinitions<String> = match serde_json::from_str(json) {
        Ok(definitions) => definitions,
        Err(err) => panic!("{err}"),
    };

    assert_eq!(
        kinds(&definitions),
        vec!["whitespace", "openBrace", "closeBrace", "boolean"]
    );
    assert_eq!(
        definitions.get(0).map(|d| &d.pattern),
        Some(&Pattern::Regex("\\s+".to_owned()))
    );
    assert_eq!(
        definitions.get(2).map(|d| &d.pattern),
        Some(&Pattern::Literal("}".to_owned()))
    );
}

#[test]
fn deserialize_list_accepts_type_alias() {
    let json = r#"[
        { "type": "null", "pattern": "null" },
        { "kind": "number", "pattern": { "regex": "[0-9]+" } }
    ]"#;
    let definitions: TokenDefinitions<String> = match serde_json::from_str(json) {
        Ok(definitions) => definitions,
        Err(err) => panic!("{err}"),
    };

    assert_eq!(kinds(&definitions), vec!["null", "number"]);
    assert_eq!(
        definitions.get(1).map(|d| &d.pattern),
        Some(&Pattern::Regex("[0-9]+".to_owned()))
    );
}

#[test]
fn deserialize_rejects_scalars() {
    let result: Result<TokenDefinitions<String>, _> = serde_json::from_str("42");
    assert!(result.is_err());
}
