//! Keyword extraction: frequency-ranked candidates from the job text.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::normalize;

/// Candidate pool handed to the matcher.
pub const MAX_CANDIDATE_KEYWORDS: usize = 100;

/// Summary size for the top-keyword display.
pub const TOP_KEYWORD_COUNT: usize = 10;

/// A job keyword with its raw frequency, for the summary display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobKeyword {
    pub keyword: String,
    pub frequency: u32,
}

/// Extracts the ranked candidate keywords from the job text, skipping
/// user-excluded tokens. Returns at most [`MAX_CANDIDATE_KEYWORDS`] keywords,
/// most frequent first.
pub fn extract_candidate_keywords(job_text: &str, exclusions: &HashSet<String>) -> Vec<String> {
    let tokens = normalize(job_text)
        .into_iter()
        .filter(|token| !exclusions.contains(token));

    let mut ranked = count_frequencies(tokens);
    rank_by_frequency(&mut ranked);

    ranked
        .into_iter()
        .take(MAX_CANDIDATE_KEYWORDS)
        .map(|(keyword, _)| keyword)
        .collect()
}

/// Extracts the top job keywords with their frequencies, skipping keywords in
/// `removed`. Same pipeline as [`extract_candidate_keywords`], kept as a
/// separate entry point for the summary display (at most
/// [`TOP_KEYWORD_COUNT`] entries).
pub fn extract_top_keywords(job_text: &str, removed: &[String]) -> Vec<JobKeyword> {
    let removed: HashSet<&str> = removed.iter().map(String::as_str).collect();
    let tokens = normalize(job_text)
        .into_iter()
        .filter(|token| !removed.contains(token.as_str()));

    let mut ranked = count_frequencies(tokens);
    rank_by_frequency(&mut ranked);

    ranked
        .into_iter()
        .take(TOP_KEYWORD_COUNT)
        .map(|(keyword, frequency)| JobKeyword { keyword, frequency })
        .collect()
}

/// Counts token frequencies, preserving first-seen order of distinct tokens.
fn count_frequencies(tokens: impl Iterator<Item = String>) -> Vec<(String, u32)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<(String, u32)> = Vec::new();

    for token in tokens {
        match positions.get(&token) {
            Some(&i) => entries[i].1 += 1,
            None => {
                positions.insert(token.clone(), entries.len());
                entries.push((token, 1));
            }
        }
    }

    entries
}

/// Sorts descending by frequency. The sort is stable and the input is in
/// first-seen order, so ties keep the earlier-seen token first. This is an
/// explicit guarantee rather than an artifact of map iteration order.
fn rank_by_frequency(entries: &mut [(String, u32)]) {
    entries.sort_by(|a, b| b.1.cmp(&a.1));
}
