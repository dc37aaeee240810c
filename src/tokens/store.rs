// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token record persistence
//!
//! [`TokenStore`] is the seam to a durable database. [`MemoryTokenStore`]
//! keeps records in process memory and enforces the same uniqueness rule a
//! database index would.

use std::collections::BTreeMap;
use std::sync::RwLock;

use alloy_primitives::Address;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use super::record::{NewTokenRecord, TokenRecord};
use crate::errors::StorageError;

/// Storage for [`TokenRecord`]s.
///
/// Implementations must reject a second record with the same
/// `(address, chain_key)` pair with [`StorageError::Conflict`].
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Insert a record, assigning its id and creation time.
    async fn create(&self, record: NewTokenRecord) -> Result<TokenRecord, StorageError>;

    /// Fetch a record by id.
    async fn get_by_id(&self, id: u64) -> Result<Option<TokenRecord>, StorageError>;

    /// Replace the stored record with the same id.
    async fn update(&self, record: TokenRecord) -> Result<TokenRecord, StorageError>;

    /// Remove a record.
    async fn delete(&self, id: u64) -> Result<(), StorageError>;

    /// Every record, newest first.
    async fn list_all(&self) -> Result<Vec<TokenRecord>, StorageError>;
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    records: BTreeMap<u64, TokenRecord>,
}

impl Inner {
    /// The conflict error if another record already holds `(address, chain_key)`.
    fn conflict(&self, id: Option<u64>, address: Address, chain_key: &str) -> Option<StorageError> {
        self.records
            .values()
            .find(|r| Some(r.id) != id && r.address == address && r.chain_key == chain_key)
            .map(|r| StorageError::Conflict {
                address: r.address.to_checksum(None),
                chain_key: r.chain_key.clone(),
            })
    }
}

/// In-memory [`TokenStore`].
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Inner>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StorageError {
        StorageError::Unavailable("token store lock poisoned".to_string())
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn create(&self, record: NewTokenRecord) -> Result<TokenRecord, StorageError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        if let Some(conflict) = inner.conflict(None, record.address, &record.chain_key) {
            return Err(conflict);
        }

        inner.next_id += 1;
        let stored = TokenRecord {
            id: inner.next_id,
            address: record.address,
            chain_key: record.chain_key,
            chain_name: record.chain_name,
            supply_input: record.supply_input,
            metadata: record.metadata,
            created_at: Utc::now(),
        };
        inner.records.insert(stored.id, stored.clone());
        debug!(id = stored.id, chain_key = %stored.chain_key, "Stored token record");
        Ok(stored)
    }

    async fn get_by_id(&self, id: u64) -> Result<Option<TokenRecord>, StorageError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.records.get(&id).cloned())
    }

    async fn update(&self, record: TokenRecord) -> Result<TokenRecord, StorageError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        if !inner.records.contains_key(&record.id) {
            return Err(StorageError::NotFound { id: record.id });
        }
        if let Some(conflict) = inner.conflict(Some(record.id), record.address, &record.chain_key) {
            return Err(conflict);
        }
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: u64) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound { id })
    }

    async fn list_all(&self) -> Result<Vec<TokenRecord>, StorageError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        let mut records: Vec<_> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(records)
    }
}
