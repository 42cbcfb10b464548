pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::exclusions::handlers as exclusion_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route(
            "/api/v1/analysis/analyze",
            post(analysis_handlers::handle_analyze),
        )
        .route(
            "/api/v1/analysis/keywords",
            post(analysis_handlers::handle_extract_keywords),
        )
        .route(
            "/api/v1/analysis/filter",
            post(analysis_handlers::handle_filter),
        )
        .route(
            "/api/v1/analysis/charts/comparative",
            post(analysis_handlers::handle_comparative_chart),
        )
        .route(
            "/api/v1/analysis/charts/spider",
            post(analysis_handlers::handle_spider_chart),
        )
        .route(
            "/api/v1/analysis/charts/distribution",
            post(analysis_handlers::handle_distribution_chart),
        )
        // Exclusion API
        .route(
            "/api/v1/exclusions/:user_id",
            get(exclusion_handlers::handle_list_exclusions)
                .post(exclusion_handlers::handle_add_exclusion),
        )
        .route(
            "/api/v1/exclusions/:user_id/:keyword",
            delete(exclusion_handlers::handle_remove_exclusion),
        )
        .with_state(state)
}
