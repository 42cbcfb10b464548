//! Job-vs-résumé keyword matching and the aggregate compatibility score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::{extract_candidate_keywords, extract_top_keywords, JobKeyword};
use crate::analysis::normalizer::normalize;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-keyword occurrence counts on both sides.
/// Invariant: `matched` ⇒ `job_count > 0 ∧ resume_count > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub keyword: String,
    pub job_count: u32,
    pub resume_count: u32,
    #[serde(rename = "match")]
    pub matched: bool,
}

/// Token counts after normalization, plus the number of matched keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub job_words: u32,
    pub resume_words: u32,
    pub matched_words: u32,
}

/// The engine's output, immutable once produced. `keyword_matches` is in
/// extraction rank order (descending job frequency, first-seen on ties);
/// `missing_keywords` preserves that order. `job_keywords` is the top-10
/// summary, independent of exclusion/selection state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub keyword_matches: Vec<KeywordMatch>,
    pub missing_keywords: Vec<String>,
    pub overall_stats: OverallStats,
    pub job_keywords: Vec<JobKeyword>,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full analysis: extracts ranked candidate keywords from the job
/// text (skipping `exclusions`), counts each candidate on both sides, and
/// aggregates the summary statistics.
///
/// Never fails: empty texts, all-stopword texts, and zero-overlap inputs all
/// produce a valid (empty-ish) result.
pub fn analyze(job_text: &str, resume_text: &str, exclusions: &HashSet<String>) -> AnalysisResult {
    let candidates = extract_candidate_keywords(job_text, exclusions);
    let job_keywords = extract_top_keywords(job_text, &[]);

    let job_tokens = normalize(job_text);
    let resume_tokens = normalize(resume_text);

    let job_lower = job_text.to_lowercase();
    let resume_lower = resume_text.to_lowercase();

    let keyword_matches: Vec<KeywordMatch> = candidates
        .into_iter()
        .map(|keyword| {
            // Multi-word phrases are counted as substrings of the raw
            // lowercased text so adjacency is respected; single tokens are
            // counted against the normalized token streams so substrings of
            // longer words never match. The phrase branch is latent (the
            // extractor currently emits single tokens only) but is part of
            // the matcher contract.
            let (job_count, resume_count) = if keyword.contains(' ') {
                (
                    count_substring_occurrences(&job_lower, &keyword),
                    count_substring_occurrences(&resume_lower, &keyword),
                )
            } else {
                (
                    count_token_occurrences(&job_tokens, &keyword),
                    count_token_occurrences(&resume_tokens, &keyword),
                )
            };

            KeywordMatch {
                matched: job_count > 0 && resume_count > 0,
                keyword,
                job_count,
                resume_count,
            }
        })
        .collect();

    let missing_keywords = collect_missing_keywords(&keyword_matches);
    let matched_words = keyword_matches.iter().filter(|m| m.matched).count() as u32;

    AnalysisResult {
        missing_keywords,
        overall_stats: OverallStats {
            job_words: job_tokens.len() as u32,
            resume_words: resume_tokens.len() as u32,
            matched_words,
        },
        keyword_matches,
        job_keywords,
    }
}

/// Overall compatibility: rounded percentage of candidates matched on both
/// sides. Defined as 0 when there are no candidates.
pub fn match_score(result: &AnalysisResult) -> u32 {
    let total = result.keyword_matches.len();
    if total == 0 {
        return 0;
    }
    let matched = result.keyword_matches.iter().filter(|m| m.matched).count();
    ((matched as f64 / total as f64) * 100.0).round() as u32
}

/// Cheap pure alternative to re-running [`analyze`] when the caller removes
/// keywords post hoc: drops the removed keywords (case-insensitive) from the
/// matches and the top-keyword summary, and recomputes the derived fields.
/// `job_words`/`resume_words` describe the texts and are left untouched.
pub fn filter_result(result: &AnalysisResult, removed: &[String]) -> AnalysisResult {
    let removed: HashSet<String> = removed.iter().map(|k| k.to_lowercase()).collect();

    let keyword_matches: Vec<KeywordMatch> = result
        .keyword_matches
        .iter()
        .filter(|m| !removed.contains(&m.keyword.to_lowercase()))
        .cloned()
        .collect();

    let job_keywords: Vec<JobKeyword> = result
        .job_keywords
        .iter()
        .filter(|k| !removed.contains(&k.keyword.to_lowercase()))
        .cloned()
        .collect();

    let missing_keywords = collect_missing_keywords(&keyword_matches);
    let matched_words = keyword_matches.iter().filter(|m| m.matched).count() as u32;

    AnalysisResult {
        missing_keywords,
        overall_stats: OverallStats {
            matched_words,
            ..result.overall_stats.clone()
        },
        keyword_matches,
        job_keywords,
    }
}

fn collect_missing_keywords(matches: &[KeywordMatch]) -> Vec<String> {
    matches
        .iter()
        .filter(|m| m.job_count > 0 && m.resume_count == 0)
        .map(|m| m.keyword.clone())
        .collect()
}

/// Non-overlapping substring count; the cursor advances past each hit.
/// Both arguments are expected to be lowercased already.
fn count_substring_occurrences(haystack: &str, needle: &str) -> u32 {
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(needle) {
        count += 1;
        start += pos + needle.len();
    }
    count
}

/// Exact-token equality count over a normalized token stream.
fn count_token_occurrences(tokens: &[String], keyword: &str) -> u32 {
    tokens.iter().filter(|t| t.as_str() == keyword).count() as u32
}
