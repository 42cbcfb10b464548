#![allow(dead_code)]

//! Exclusion store backends: Redis for production, in-memory for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use redis::AsyncCommands;
use uuid::Uuid;

use crate::errors::AppError;
use crate::exclusions::{normalize_keyword, ExclusionStore};

// ────────────────────────────────────────────────────────────────────────────
// RedisExclusionStore
// ────────────────────────────────────────────────────────────────────────────

/// Redis-backed exclusion store. Each user's blacklist lives under a single
/// logical key holding a JSON string list, mirroring the original
/// browser-storage layout. Writes are read-modify-write with no locking
/// (last-write-wins).
pub struct RedisExclusionStore {
    client: redis::Client,
}

impl RedisExclusionStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn key_for(user_id: Uuid) -> String {
        format!("exclusions:{user_id}")
    }

    async fn read_list(
        &self,
        conn: &mut redis::aio::MultiplexedConnection,
        user_id: Uuid,
    ) -> Result<Vec<String>, AppError> {
        let raw: Option<String> = conn.get(Self::key_for(user_id)).await?;
        match raw {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("corrupt exclusion list: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    async fn write_list(
        &self,
        conn: &mut redis::aio::MultiplexedConnection,
        user_id: Uuid,
        keywords: &[String],
    ) -> Result<(), AppError> {
        let json = serde_json::to_string(keywords)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize exclusion list: {e}")))?;
        let _: () = conn.set(Self::key_for(user_id), json).await?;
        Ok(())
    }
}

#[async_trait]
impl ExclusionStore for RedisExclusionStore {
    async fn list(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        self.read_list(&mut conn, user_id).await
    }

    async fn add(&self, user_id: Uuid, keyword: &str) -> Result<(), AppError> {
        let normalized = normalize_keyword(keyword);
        if normalized.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let mut current = self.read_list(&mut conn, user_id).await?;
        if !current.contains(&normalized) {
            current.push(normalized);
            self.write_list(&mut conn, user_id, &current).await?;
        }
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, keyword: &str) -> Result<(), AppError> {
        let normalized = normalize_keyword(keyword);

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let current = self.read_list(&mut conn, user_id).await?;
        let filtered: Vec<String> = current.into_iter().filter(|k| *k != normalized).collect();
        self.write_list(&mut conn, user_id, &filtered).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryExclusionStore
// ────────────────────────────────────────────────────────────────────────────

/// In-memory exclusion store with the same semantics as the Redis backend.
/// Used by tests; also handy for local runs without Redis.
#[derive(Default)]
pub struct MemoryExclusionStore {
    inner: Mutex<HashMap<Uuid, Vec<String>>>,
}

impl MemoryExclusionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, Vec<String>>>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("exclusion store mutex poisoned")))
    }
}

#[async_trait]
impl ExclusionStore for MemoryExclusionStore {
    async fn list(&self, user_id: Uuid) -> Result<Vec<String>, AppError> {
        Ok(self.lock()?.get(&user_id).cloned().unwrap_or_default())
    }

    async fn add(&self, user_id: Uuid, keyword: &str) -> Result<(), AppError> {
        let normalized = normalize_keyword(keyword);
        if normalized.is_empty() {
            return Ok(());
        }

        let mut map = self.lock()?;
        let current = map.entry(user_id).or_default();
        if !current.contains(&normalized) {
            current.push(normalized);
        }
        Ok(())
    }

    async fn remove(&self, user_id: Uuid, keyword: &str) -> Result<(), AppError> {
        let normalized = normalize_keyword(keyword);

        let mut map = self.lock()?;
        if let Some(current) = map.get_mut(&user_id) {
            current.retain(|k| *k != normalized);
        }
        Ok(())
    }
}
