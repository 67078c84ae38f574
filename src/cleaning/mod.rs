pub mod stopwords;

use std::sync::OnceLock;

use regex::Regex;

use crate::core::StopwordConfig;

/// Fixed punctuation class, the ASCII set (matches Python's
/// `string.punctuation`). The inverted Spanish marks are outside this class
/// and stripped separately.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn inverted_marks() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[¿¡]").unwrap())
}

/// Normalizes and tokenizes one joke: lowercase, strip `¿ ¡`, strip
/// punctuation, split on whitespace, then drop stopwords and tokens shorter
/// than the configured minimum. Pure and deterministic; first-occurrence
/// order is preserved and duplicates are retained for counting.
pub fn clean_text(text: &str, config: &StopwordConfig) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = inverted_marks().replace_all(&lowered, "");
    let depunctuated: String = stripped.chars().filter(|c| !PUNCTUATION.contains(*c)).collect();

    depunctuated
        .split_whitespace()
        .filter(|word| word.chars().count() >= config.min_word_length())
        .filter(|word| !config.is_stopword(word))
        .map(|word| word.to_string())
        .collect()
}
