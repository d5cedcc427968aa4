//! String helpers for identifier wrangling

use std::sync::OnceLock;

use regex::Regex;

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[a-z0-9]+|[A-Z][a-z0-9]*|[^A-Za-z0-9]+").expect("word pattern is valid")
    })
}

/// Converts CamelCase or javaCase to snake_case (all lower with
/// underscores).
pub fn snake_case(identifier: &str) -> String {
    let words: Vec<String> = word_pattern()
        .find_iter(identifier)
        .map(|m| m.as_str().to_lowercase())
        .filter(|word| word != "_")
        .collect();
    words.join("_")
}

/// Replaces every run of non-identifier characters with `separator`,
/// keeping letters, digits, and underscores.
pub fn normalize_name(name: &str, separator: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let pattern =
        RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("separator pattern is valid"));
    pattern.replace_all(name, separator).into_owned()
}
