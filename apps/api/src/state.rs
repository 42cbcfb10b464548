use std::sync::Arc;

use crate::exclusions::ExclusionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable per-user keyword blacklist. Default: RedisExclusionStore.
    /// The engine itself never touches this; handlers read a snapshot and
    /// pass it down, keeping the analysis functions pure.
    pub exclusions: Arc<dyn ExclusionStore>,
}
