//! Tokenization and normalization of free-form job/résumé text.

use crate::analysis::stopwords::is_stopword;

/// Normalizes raw text into the token sequence every other analysis step
/// consumes.
///
/// Pipeline:
/// 1. Lowercase the whole input.
/// 2. Replace every character that is not a Unicode letter, Unicode digit,
///    whitespace, hyphen, or period with a space; accented letters survive.
/// 3. Split on whitespace runs.
/// 4. Trim leading/trailing periods; interior ones stay ("node.js").
/// 5. Drop tokens shorter than 2 characters, numeric-only tokens, and
///    stopwords.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '.' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .map(|word| word.trim_matches('.'))
        .filter(|word| is_keyword_candidate(word))
        .map(str::to_string)
        .collect()
}

fn is_keyword_candidate(word: &str) -> bool {
    word.chars().count() >= 2
        && !word.chars().all(char::is_numeric)
        && !is_stopword(word)
}
