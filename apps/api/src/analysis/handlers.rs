//! Axum route handlers for the Analysis API.

use std::collections::HashSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::charts::{
    default_selection, derive_comparative, derive_distribution, derive_spider, ComparativeRow,
    KeywordDistribution, SpiderRow,
};
use crate::analysis::extractor::extract_candidate_keywords;
use crate::analysis::matcher::{analyze, filter_result, match_score, AnalysisResult};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub user_id: Uuid,
    pub job_text: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub match_score: u32,
    /// Initial chart selection: every keyword the résumé covers.
    pub default_selection: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    pub analysis: AnalysisResult,
    pub removed: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeywordsRequest {
    pub user_id: Uuid,
    pub job_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub analysis: AnalysisResult,
    /// Keywords to include; empty means all.
    #[serde(default)]
    pub selection: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparativeChartResponse {
    pub rows: Vec<ComparativeRow>,
}

#[derive(Debug, Serialize)]
pub struct SpiderChartResponse {
    pub rows: Vec<SpiderRow>,
}

#[derive(Debug, Deserialize)]
pub struct DistributionRequest {
    pub analysis: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/analyze
///
/// Runs the full job-vs-résumé analysis. The caller's exclusion snapshot is
/// read first so blacklisted keywords never become candidates. Empty inputs
/// are not an error; they produce an empty result with a score of 0.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let exclusions: HashSet<String> = state
        .exclusions
        .list(request.user_id)
        .await?
        .into_iter()
        .collect();

    let analysis = analyze(&request.job_text, &request.resume_text, &exclusions);
    let match_score = match_score(&analysis);
    let default_selection = default_selection(&analysis);

    info!(
        user_id = %request.user_id,
        keywords = analysis.keyword_matches.len(),
        match_score,
        "analysis completed"
    );

    Ok(Json(AnalyzeResponse {
        analysis,
        match_score,
        default_selection,
    }))
}

/// POST /api/v1/analysis/filter
///
/// Cheap alternative to re-running the full analysis when the caller removes
/// keywords post hoc: filters a previously computed result and recomputes
/// the derived fields without re-tokenizing either text.
pub async fn handle_filter(
    Json(request): Json<FilterRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let analysis = filter_result(&request.analysis, &request.removed);
    let match_score = match_score(&analysis);
    let default_selection = default_selection(&analysis);

    Ok(Json(AnalyzeResponse {
        analysis,
        match_score,
        default_selection,
    }))
}

/// POST /api/v1/analysis/keywords
///
/// Candidate-keyword preview for the job text, exclusions applied. Lets the
/// caller inspect what the matcher would rank before running a full analysis.
pub async fn handle_extract_keywords(
    State(state): State<AppState>,
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    let exclusions: HashSet<String> = state
        .exclusions
        .list(request.user_id)
        .await?
        .into_iter()
        .collect();

    let keywords = extract_candidate_keywords(&request.job_text, &exclusions);

    Ok(Json(ExtractKeywordsResponse { keywords }))
}

/// POST /api/v1/analysis/charts/comparative
///
/// Derives comparative-bar rows from a previously computed analysis,
/// restricted to the caller's selection. Pure transform; no re-tokenization.
pub async fn handle_comparative_chart(
    Json(request): Json<ChartRequest>,
) -> Result<Json<ComparativeChartResponse>, AppError> {
    let rows = derive_comparative(&request.analysis, &request.selection);
    Ok(Json(ComparativeChartResponse { rows }))
}

/// POST /api/v1/analysis/charts/spider
///
/// Derives radar/spider rows from a previously computed analysis, restricted
/// to the caller's selection.
pub async fn handle_spider_chart(
    Json(request): Json<ChartRequest>,
) -> Result<Json<SpiderChartResponse>, AppError> {
    let rows = derive_spider(&request.analysis, &request.selection);
    Ok(Json(SpiderChartResponse { rows }))
}

/// POST /api/v1/analysis/charts/distribution
///
/// Matched-vs-absent keyword counts for the pie visualization.
pub async fn handle_distribution_chart(
    Json(request): Json<DistributionRequest>,
) -> Result<Json<KeywordDistribution>, AppError> {
    Ok(Json(derive_distribution(&request.analysis)))
}
