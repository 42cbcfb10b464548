// User-maintained keyword blacklist, consulted by keyword extraction.
// The store is an injected dependency (`Arc<dyn ExclusionStore>` in AppState),
// never ambient global state: handlers read a snapshot at call time and the
// analysis engine stays a pure function of its inputs.

pub mod handlers;
pub mod store;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;

/// Per-user keyword exclusion store.
///
/// Keys are normalized (lowercase + trim) before storage and comparison.
/// Read/write discipline is last-write-wins; callers own any coordination.
#[async_trait]
pub trait ExclusionStore: Send + Sync {
    async fn list(&self, user_id: Uuid) -> Result<Vec<String>, AppError>;
    async fn add(&self, user_id: Uuid, keyword: &str) -> Result<(), AppError>;
    async fn remove(&self, user_id: Uuid, keyword: &str) -> Result<(), AppError>;
}

/// Canonical form for stored exclusion keys: lowercased, surrounding
/// whitespace removed.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}
