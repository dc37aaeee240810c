// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-chain cache of pooled connections
//!
//! The [`ProviderCache`] keeps one [`FallbackEndpoint`] per chain key so that
//! repeated resolutions on the same chain reuse connections. Each entry
//! remembers the endpoint list it was built from; asking for the same chain
//! with a different list rebuilds the entry, so override changes take effect
//! without explicit invalidation.
//!
//! # Examples
//!
//! ```rust,ignore
//! use supplyscan::provider::{FallbackConfig, HttpConnector, ProviderCache};
//!
//! let cache = ProviderCache::new();
//! let endpoints = vec!["https://cloudflare-eth.com".to_string()];
//!
//! let pool = cache
//!     .get_or_build("eth", &endpoints, &HttpConnector::default(), &FallbackConfig::default())
//!     .expect("at least one endpoint connects");
//! let block = pool.block_number().await?;
//!
//! // Drop the pooled connection so the next call rebuilds it
//! cache.invalidate("eth");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use super::endpoint::{EndpointConnector, TokenEndpoint};
use super::fallback::{FallbackConfig, FallbackEndpoint};
use crate::spans;

/// Shared handle to a cached pooled connection
pub type PooledEndpoint = Arc<FallbackEndpoint>;

#[derive(Debug)]
struct CacheEntry {
    endpoints: Vec<String>,
    pool: PooledEndpoint,
}

/// A thread-safe cache of pooled connections indexed by chain key
///
/// Entries are inserted and removed whole; the lock is never held while a
/// connection is being used.
#[derive(Debug, Default)]
pub struct ProviderCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ProviderCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached pooled connection for a chain, if any
    #[must_use]
    pub fn get(&self, chain_key: &str) -> Option<PooledEndpoint> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(chain_key).map(|e| Arc::clone(&e.pool)))
    }

    /// Get the pooled connection for a chain, building it if needed
    ///
    /// The cached instance is returned only when it was built from exactly
    /// `endpoints`. Otherwise a new pool is built from `endpoints` and replaces
    /// the cached one. URLs the connector rejects are skipped.
    ///
    /// Returns `None` when no URL in `endpoints` could be connected.
    pub fn get_or_build(
        &self,
        chain_key: &str,
        endpoints: &[String],
        connector: &dyn EndpointConnector,
        config: &FallbackConfig,
    ) -> Option<PooledEndpoint> {
        if let Ok(entries) = self.entries.read() {
            if let Some(entry) = entries.get(chain_key) {
                if entry.endpoints == endpoints {
                    return Some(Arc::clone(&entry.pool));
                }
                debug!(chain_key, "Endpoint list changed, rebuilding pooled connection");
            }
        }

        let span = spans::build_pooled_connection(chain_key, endpoints.len());
        let _guard = span.enter();

        let members: Vec<Arc<dyn TokenEndpoint>> = endpoints
            .iter()
            .filter_map(|url| match connector.connect(url) {
                Ok(endpoint) => Some(endpoint),
                Err(error) => {
                    warn!(chain_key, endpoint = %url, error = %error, "Skipping endpoint in pooled connection");
                    None
                }
            })
            .collect();

        if members.is_empty() {
            warn!(chain_key, "No endpoint could be connected, pooled connection unavailable");
            self.invalidate(chain_key);
            return None;
        }

        let pool = Arc::new(FallbackEndpoint::new(
            format!("pool:{chain_key}"),
            members,
            config,
        ));

        match self.entries.write() {
            Ok(mut entries) => {
                info!(chain_key, members = pool.members().len(), "Built pooled connection");
                entries.insert(
                    chain_key.to_string(),
                    CacheEntry {
                        endpoints: endpoints.to_vec(),
                        pool: Arc::clone(&pool),
                    },
                );
            }
            Err(_) => warn!(chain_key, "Provider cache lock poisoned, pooled connection not cached"),
        }

        Some(pool)
    }

    /// Drop the cached pooled connection for a chain
    ///
    /// Returns `true` if an entry was removed.
    pub fn invalidate(&self, chain_key: &str) -> bool {
        let removed = self
            .entries
            .write()
            .ok()
            .and_then(|mut entries| entries.remove(chain_key))
            .is_some();
        if removed {
            debug!(chain_key, "Invalidated pooled connection");
        }
        removed
    }

    /// Drop every cached pooled connection
    pub fn invalidate_all(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
            info!("Invalidated all pooled connections");
        }
    }

    /// Check if a pooled connection is cached for a chain
    #[must_use]
    pub fn contains(&self, chain_key: &str) -> bool {
        self.entries
            .read()
            .ok()
            .is_some_and(|entries| entries.contains_key(chain_key))
    }

    /// Get the number of cached pooled connections
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Check if the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all chain keys with a cached pooled connection
    #[must_use]
    pub fn chains(&self) -> Vec<String> {
        self.entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::HttpConnector;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn connector() -> HttpConnector {
        HttpConnector::new(false)
    }

    #[test]
    fn test_cache_new() {
        let cache = ProviderCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get("eth").is_none());
    }

    #[tokio::test]
    async fn test_same_list_reuses_pool() {
        let cache = ProviderCache::new();
        let endpoints = urls(&["https://cloudflare-eth.com", "https://rpc.ankr.com/eth"]);
        let config = FallbackConfig::default();

        let first = cache.get_or_build("eth", &endpoints, &connector(), &config).unwrap();
        let second = cache.get_or_build("eth", &endpoints, &connector(), &config).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.members().len(), 2);
    }

    #[tokio::test]
    async fn test_changed_list_rebuilds_pool() {
        let cache = ProviderCache::new();
        let config = FallbackConfig::default();

        let first = cache
            .get_or_build("eth", &urls(&["https://a.example"]), &connector(), &config)
            .unwrap();
        let second = cache
            .get_or_build(
                "eth",
                &urls(&["https://g.example", "https://a.example"]),
                &connector(),
                &config,
            )
            .unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.urls(), vec!["https://g.example", "https://a.example"]);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_urls_are_skipped() {
        let cache = ProviderCache::new();
        let pool = cache
            .get_or_build(
                "eth",
                &urls(&["not a url", "https://a.example"]),
                &connector(),
                &FallbackConfig::default(),
            )
            .unwrap();
        assert_eq!(pool.urls(), vec!["https://a.example"]);
    }

    #[test]
    fn test_no_connectable_url_yields_none() {
        let cache = ProviderCache::new();
        let pool = cache.get_or_build(
            "eth",
            &urls(&["not a url"]),
            &connector(),
            &FallbackConfig::default(),
        );
        assert!(pool.is_none());
        assert!(!cache.contains("eth"));
    }

    #[tokio::test]
    async fn test_invalidate() {
        let cache = ProviderCache::new();
        let config = FallbackConfig::default();
        cache.get_or_build("eth", &urls(&["https://a.example"]), &connector(), &config);
        cache.get_or_build("bsc", &urls(&["https://b.example"]), &connector(), &config);

        let mut chains = cache.chains();
        chains.sort();
        assert_eq!(chains, vec!["bsc", "eth"]);

        assert!(cache.invalidate("eth"));
        assert!(!cache.invalidate("eth"));
        assert!(!cache.contains("eth"));
        assert!(cache.contains("bsc"));

        cache.invalidate_all();
        assert!(cache.is_empty());
    }
}
