// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user record snapshots.
//!
//! The records and predictions views both start from the same record list.
//! A list fetched from the backend is kept for a short TTL and shared
//! read-only between views, and is dropped as soon as the user uploads a new
//! activity.
//!
//! Snapshots are stamped with the instant their fetch *started*. A snapshot
//! is only served if that stamp is later than the user's last invalidation,
//! so a fetch that raced an upload can land in the cache but is never read
//! back. Invalidation stamps are kept for one TTL; after that every snapshot
//! they could reject has expired anyway.

use crate::error::AppError;
use crate::models::{Record, UploadSummary};
use crate::services::backend::BackendClient;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct CachedRecords {
    records: Arc<Vec<Record>>,
    /// When the backend request for this list was sent
    fetched_at: Instant,
}

/// Record access for the views, backed by the records backend.
pub struct RecordsService {
    backend: BackendClient,
    ttl: Duration,
    cache: DashMap<u64, CachedRecords>,
    invalidated_at: DashMap<u64, Instant>,
}

impl RecordsService {
    pub fn new(backend: BackendClient, ttl: Duration) -> Self {
        Self {
            backend,
            ttl,
            cache: DashMap::new(),
            invalidated_at: DashMap::new(),
        }
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    /// Current record list for a user, from cache when fresh.
    pub async fn snapshot(&self, user_id: u64) -> Result<Arc<Vec<Record>>, AppError> {
        if let Some(records) = self.cached(user_id) {
            tracing::debug!(user_id, "Records snapshot cache hit");
            return Ok(records);
        }

        self.evict_expired();

        let started = Instant::now();
        let records = Arc::new(self.backend.records(user_id).await?);
        tracing::debug!(user_id, records = records.len(), "Fetched records");

        self.cache.insert(
            user_id,
            CachedRecords {
                records: records.clone(),
                fetched_at: started,
            },
        );

        Ok(records)
    }

    /// Upload an activity file and drop the user's snapshot on success.
    pub async fn upload(
        &self,
        user_id: u64,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<UploadSummary, AppError> {
        let summary = self.backend.upload(user_id, file_name, content).await?;
        self.invalidate(user_id);
        tracing::info!(
            user_id,
            file_name,
            new_records = summary.records.iter().filter(|r| r.is_new_record).count(),
            "Activity uploaded"
        );
        Ok(summary)
    }

    /// Forget any cached records for a user.
    pub fn invalidate(&self, user_id: u64) {
        // Stamp before removing: a reader in between sees the entry as stale.
        self.invalidated_at.insert(user_id, Instant::now());
        self.cache.remove(&user_id);
    }

    /// Fresh snapshot fetched after the user's last invalidation, if any.
    fn cached(&self, user_id: u64) -> Option<Arc<Vec<Record>>> {
        let cached = self.cache.get(&user_id)?;
        if cached.fetched_at.elapsed() >= self.ttl {
            return None;
        }
        if let Some(invalidated) = self.invalidated_at.get(&user_id) {
            if cached.fetched_at <= *invalidated {
                return None;
            }
        }
        Some(cached.records.clone())
    }

    /// Drop expired snapshots and invalidation stamps for every user.
    fn evict_expired(&self) {
        let ttl = self.ttl;
        self.cache.retain(|_, c| c.fetched_at.elapsed() < ttl);
        self.invalidated_at.retain(|_, at| at.elapsed() < ttl);
    }
}
