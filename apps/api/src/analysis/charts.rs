//! Chart data derivers: pure transforms of an [`AnalysisResult`] into the
//! percentage-normalized rows the visualizations consume. They never
//! re-tokenize text.
//!
//! Both row families deliberately emit `jobValue: 0`: the charts show résumé
//! coverage relative to the job, not a two-series comparison, even though
//! the field names suggest otherwise. Existing consumers depend on the
//! zeroed field, so it is preserved as-is.

use serde::{Deserialize, Serialize};

use crate::analysis::matcher::{AnalysisResult, KeywordMatch};

/// One bar of the comparative chart. `resume_value` is the coverage
/// percentage (résumé frequency relative to job frequency, capped at 100).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeRow {
    pub keyword: String,
    pub job_value: f64,
    pub resume_value: f64,
    pub job_frequency: u32,
    pub resume_frequency: u32,
}

/// One spoke of the radar/spider chart. Same coverage idea as
/// [`ComparativeRow`] but rounded to a whole percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpiderRow {
    pub skill: String,
    pub job_value: u32,
    pub resume_value: u32,
    pub is_matched: bool,
    pub job_frequency: u32,
    pub resume_frequency: u32,
}

/// Matched-vs-absent keyword counts for the pie visualization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDistribution {
    pub present: usize,
    pub absent: usize,
}

/// Derives the comparative-bar rows: one per retained keyword, sorted
/// descending by coverage. An empty `selection` means every keyword.
pub fn derive_comparative(result: &AnalysisResult, selection: &[String]) -> Vec<ComparativeRow> {
    let mut rows: Vec<ComparativeRow> = retained(result, selection)
        .map(|m| {
            let resume_value = if m.job_count > 0 {
                ((f64::from(m.resume_count) / f64::from(m.job_count)) * 100.0).min(100.0)
            } else {
                0.0
            };
            ComparativeRow {
                keyword: m.keyword.clone(),
                job_value: 0.0,
                resume_value,
                job_frequency: m.job_count,
                resume_frequency: m.resume_count,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.resume_value.total_cmp(&a.resume_value));
    rows
}

/// Derives the radar/spider rows, same filtering and ordering as
/// [`derive_comparative`] but with rounded percentages, and 100 for a
/// keyword the résumé has that the job text somehow lacks.
pub fn derive_spider(result: &AnalysisResult, selection: &[String]) -> Vec<SpiderRow> {
    let mut rows: Vec<SpiderRow> = retained(result, selection)
        .map(|m| {
            let resume_value = if m.job_count > 0 {
                let pct = (f64::from(m.resume_count) / f64::from(m.job_count) * 100.0).round();
                (pct as u32).min(100)
            } else if m.resume_count > 0 {
                100
            } else {
                0
            };
            SpiderRow {
                skill: m.keyword.clone(),
                job_value: 0,
                resume_value,
                is_matched: m.matched,
                job_frequency: m.job_count,
                resume_frequency: m.resume_count,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.resume_value.cmp(&a.resume_value));
    rows
}

/// Matched vs. missing keyword counts (pie chart input).
pub fn derive_distribution(result: &AnalysisResult) -> KeywordDistribution {
    KeywordDistribution {
        present: result.keyword_matches.iter().filter(|m| m.matched).count(),
        absent: result.missing_keywords.len(),
    }
}

/// The initial chart selection: every keyword the résumé mentions at all.
pub fn default_selection(result: &AnalysisResult) -> Vec<String> {
    result
        .keyword_matches
        .iter()
        .filter(|m| m.resume_count > 0)
        .map(|m| m.keyword.clone())
        .collect()
}

fn retained<'a>(
    result: &'a AnalysisResult,
    selection: &'a [String],
) -> impl Iterator<Item = &'a KeywordMatch> {
    result
        .keyword_matches
        .iter()
        .filter(move |m| selection.is_empty() || selection.contains(&m.keyword))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::OverallStats;

    fn make_match(keyword: &str, job_count: u32, resume_count: u32) -> KeywordMatch {
        KeywordMatch {
            keyword: keyword.to_string(),
            job_count,
            resume_count,
            matched: job_count > 0 && resume_count > 0,
        }
    }

    fn make_result(matches: Vec<KeywordMatch>) -> AnalysisResult {
        let missing_keywords = matches
            .iter()
            .filter(|m| m.job_count > 0 && m.resume_count == 0)
            .map(|m| m.keyword.clone())
            .collect();
        let matched_words = matches.iter().filter(|m| m.matched).count() as u32;
        AnalysisResult {
            missing_keywords,
            overall_stats: OverallStats {
                job_words: 50,
                resume_words: 40,
                matched_words,
            },
            keyword_matches: matches,
            job_keywords: vec![],
        }
    }

    #[test]
    fn test_comparative_percentage_capped_at_100() {
        // 5 résumé hits against 1 job hit must clamp, not report 500.
        let result = make_result(vec![make_match("java", 1, 5)]);
        let rows = derive_comparative(&result, &[]);
        assert_eq!(rows[0].resume_value, 100.0);
    }

    #[test]
    fn test_comparative_percentage_unrounded_below_cap() {
        let result = make_result(vec![make_match("rust", 3, 1)]);
        let rows = derive_comparative(&result, &[]);
        assert!((rows[0].resume_value - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_comparative_zero_job_count_guarded_to_zero() {
        let result = make_result(vec![make_match("ghost", 0, 4)]);
        let rows = derive_comparative(&result, &[]);
        assert_eq!(rows[0].resume_value, 0.0);
    }

    #[test]
    fn test_comparative_job_value_always_zero() {
        let result = make_result(vec![make_match("rust", 2, 1), make_match("go", 1, 1)]);
        for row in derive_comparative(&result, &[]) {
            assert_eq!(row.job_value, 0.0);
        }
    }

    #[test]
    fn test_comparative_sorted_descending_no_truncation() {
        let result = make_result(vec![
            make_match("low", 4, 1),
            make_match("high", 1, 1),
            make_match("mid", 2, 1),
        ]);
        let rows = derive_comparative(&result, &[]);
        assert_eq!(rows.len(), 3);
        let values: Vec<f64> = rows.iter().map(|r| r.resume_value).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]), "rows not sorted: {values:?}");
        assert_eq!(rows[0].keyword, "high");
    }

    #[test]
    fn test_selection_restricts_rows() {
        let result = make_result(vec![make_match("rust", 2, 1), make_match("go", 1, 1)]);
        let rows = derive_comparative(&result, &["go".to_string()]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].keyword, "go");
    }

    #[test]
    fn test_empty_selection_means_all_rows() {
        let result = make_result(vec![make_match("rust", 2, 1), make_match("go", 1, 1)]);
        assert_eq!(derive_comparative(&result, &[]).len(), 2);
        assert_eq!(derive_spider(&result, &[]).len(), 2);
    }

    #[test]
    fn test_spider_percentage_rounded_then_capped() {
        let result = make_result(vec![
            make_match("third", 3, 1),  // 33.33 → 33
            make_match("twothirds", 3, 2), // 66.67 → 67
            make_match("over", 1, 5),   // 500 → 100
        ]);
        let rows = derive_spider(&result, &[]);
        let value = |skill: &str| {
            rows.iter()
                .find(|r| r.skill == skill)
                .map(|r| r.resume_value)
                .unwrap()
        };
        assert_eq!(value("third"), 33);
        assert_eq!(value("twothirds"), 67);
        assert_eq!(value("over"), 100);
    }

    #[test]
    fn test_spider_resume_only_keyword_is_full_coverage() {
        let result = make_result(vec![make_match("ghost", 0, 2)]);
        let rows = derive_spider(&result, &[]);
        assert_eq!(rows[0].resume_value, 100);
        assert!(!rows[0].is_matched);
    }

    #[test]
    fn test_spider_absent_everywhere_is_zero() {
        let result = make_result(vec![make_match("ghost", 0, 0)]);
        let rows = derive_spider(&result, &[]);
        assert_eq!(rows[0].resume_value, 0);
    }

    #[test]
    fn test_spider_carries_match_flag_and_frequencies() {
        let result = make_result(vec![make_match("rust", 2, 1)]);
        let row = &derive_spider(&result, &[])[0];
        assert!(row.is_matched);
        assert_eq!(row.job_value, 0);
        assert_eq!(row.job_frequency, 2);
        assert_eq!(row.resume_frequency, 1);
    }

    #[test]
    fn test_distribution_counts_present_and_absent() {
        let result = make_result(vec![
            make_match("rust", 2, 1),
            make_match("go", 1, 0),
            make_match("sql", 3, 0),
        ]);
        let dist = derive_distribution(&result);
        assert_eq!(dist.present, 1);
        assert_eq!(dist.absent, 2);
    }

    #[test]
    fn test_default_selection_is_resume_covered_keywords() {
        let result = make_result(vec![
            make_match("rust", 2, 1),
            make_match("go", 1, 0),
            make_match("ghost", 0, 3),
        ]);
        assert_eq!(
            default_selection(&result),
            vec!["rust".to_string(), "ghost".to_string()]
        );
    }

    #[test]
    fn test_percentage_bounds_hold_for_both_derivers() {
        let result = make_result(vec![
            make_match("a1", 1, 9),
            make_match("b2", 9, 1),
            make_match("c3", 0, 0),
        ]);
        for row in derive_comparative(&result, &[]) {
            assert!((0.0..=100.0).contains(&row.resume_value));
        }
        for row in derive_spider(&result, &[]) {
            assert!(row.resume_value <= 100);
        }
    }
}
