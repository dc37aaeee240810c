// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Multi-endpoint metadata resolution
//!
//! Resolution runs in two phases over a chain's merged endpoint list:
//!
//! 1. **Pooled fast path** - the chain's cached [`FallbackEndpoint`] is probed
//!    and, if alive, read through. Its members race in priority order, so a
//!    healthy primary answers without touching the others.
//! 2. **Sequential slow path** - every endpoint is probed on its own, in
//!    order. A dead endpoint is skipped without issuing metadata reads; the
//!    first live endpoint returning a usable result wins.
//!
//! The sequential path runs whenever the pooled path is absent, unusable or
//! errored, so an endpoint that failed once inside the pool gets a second
//! chance on its own. On that path endpoint `n + 1` is never contacted before
//! endpoint `n`'s outcome is known. Partial answers are never merged across
//! endpoints.
//!
//! The whole resolution is cut off after
//! [`ResolverConfig::worst_case_latency`] for the endpoint count.
//!
//! [`FallbackEndpoint`]: crate::provider::FallbackEndpoint

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::{debug, info, warn, Instrument, Span};

use super::{probe, read_fields, TokenMetadata};
use crate::chains::{ChainRegistry, EndpointOverrides};
use crate::config::ResolverConfig;
use crate::errors::{ConfigError, EndpointError, ResolveError};
use crate::provider::{EndpointConnector, HttpConnector, ProviderCache, TokenEndpoint};
use crate::spans;
use crate::validation::parse_token_address;

/// Resolves ERC-20 metadata across a chain's prioritized endpoints.
///
/// The resolver owns the chain registry, the per-chain pooled connection
/// cache and the connector used to reach endpoints. It is cheap to share
/// behind an `Arc`; concurrent resolutions only contend on the cache lock.
///
/// # Example
///
/// ```rust,ignore
/// use supplyscan::{MetadataResolver, ResolverConfig};
///
/// let resolver = MetadataResolver::new(ResolverConfig::from_env()?);
/// let metadata = resolver
///     .resolve_token_metadata("0xdAC17F958D2ee523a2206206994597C13D831ec7", "eth")
///     .await?;
/// println!("{}", metadata.symbol.unwrap_or_default());
/// ```
pub struct MetadataResolver<C = HttpConnector> {
    registry: ChainRegistry,
    cache: ProviderCache,
    connector: C,
    config: ResolverConfig,
}

impl MetadataResolver<HttpConnector> {
    /// Create a resolver over HTTP with the built-in chain table.
    ///
    /// Keyed endpoints from `config.api_keys` are injected into the registry.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        let registry = ChainRegistry::with_defaults().with_api_keys(&config.api_keys);
        let connector = HttpConnector::new(config.rpc_logging);
        Self::with_connector(registry, connector, config)
    }

    /// Create a resolver configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the environment holds malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(ResolverConfig::from_env()?))
    }
}

impl<C: EndpointConnector> MetadataResolver<C> {
    /// Create a resolver from its parts.
    pub fn with_connector(registry: ChainRegistry, connector: C, config: ResolverConfig) -> Self {
        Self {
            registry,
            cache: ProviderCache::new(),
            connector,
            config,
        }
    }

    /// The chain registry.
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// The pooled connection cache.
    pub fn cache(&self) -> &ProviderCache {
        &self.cache
    }

    /// The resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve metadata for an address string using the configured overrides.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidAddress`] if `address` is not `0x` + 40 hex characters
    /// - any error of [`resolve`](Self::resolve)
    pub async fn resolve_token_metadata(
        &self,
        address: &str,
        chain_key: &str,
    ) -> Result<TokenMetadata, ResolveError> {
        let token = parse_token_address(address)?;
        self.resolve(token, chain_key, &self.config.overrides).await
    }

    /// Resolve metadata for `token` on `chain_key`.
    ///
    /// Returns the first usable result (at least one of name, symbol or total
    /// supply), containing only the fields that endpoint answered.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownChain`] / [`ResolveError::NoEndpoints`] before
    ///   any network call
    /// - [`ResolveError::AllEndpointsExhausted`] when no endpoint produced a
    ///   usable result within the resolution deadline
    pub async fn resolve(
        &self,
        token: Address,
        chain_key: &str,
        overrides: &EndpointOverrides,
    ) -> Result<TokenMetadata, ResolveError> {
        let endpoints = self.registry.resolve_endpoints(chain_key, overrides)?;
        let span = spans::resolve_token_metadata(chain_key, token, endpoints.len());
        let deadline = self.config.worst_case_latency(endpoints.len());

        async move {
            let outcome =
                tokio::time::timeout(deadline, self.resolve_endpoints(token, chain_key, &endpoints))
                    .await;
            match outcome {
                Ok(Some(metadata)) => return Ok(metadata),
                Ok(None) => warn!(attempted = endpoints.len(), "All RPC endpoints exhausted"),
                Err(_) => warn!(
                    attempted = endpoints.len(),
                    deadline = ?deadline,
                    "Resolution deadline elapsed"
                ),
            }
            Err(ResolveError::all_endpoints_exhausted(
                chain_key,
                endpoints.len(),
            ))
        }
        .instrument(span)
        .await
    }

    /// Pooled fast path, then every endpoint in order.
    async fn resolve_endpoints(
        &self,
        token: Address,
        chain_key: &str,
        endpoints: &[String],
    ) -> Option<TokenMetadata> {
        let pool = self.cache.get_or_build(
            chain_key,
            endpoints,
            &self.connector,
            &self.config.fallback,
        );

        if let Some(pool) = &pool {
            if let Ok(Some(metadata)) = self.try_endpoint(pool.as_ref(), token).await {
                Span::current().record("path", "pooled");
                info!("Resolved token metadata through pooled connection");
                return Some(metadata);
            }
        }

        for url in endpoints {
            let endpoint = match pool.as_ref().and_then(|p| p.member(url)) {
                Some(endpoint) => endpoint,
                None => match self.connector.connect(url) {
                    Ok(endpoint) => endpoint,
                    Err(error) => {
                        debug!(endpoint = %url, error = %error, "Skipping endpoint");
                        continue;
                    }
                },
            };

            if let Ok(Some(metadata)) = self.try_endpoint(endpoint.as_ref(), token).await {
                Span::current().record("path", url.as_str());
                info!(endpoint = %url, "Resolved token metadata");
                return Some(metadata);
            }
        }

        None
    }

    /// Probe, then read.
    ///
    /// `Err` if the probe failed, `Ok(None)` if the endpoint is alive but its
    /// answer is unusable.
    async fn try_endpoint(
        &self,
        endpoint: &dyn TokenEndpoint,
        token: Address,
    ) -> Result<Option<TokenMetadata>, EndpointError> {
        if let Err(error) = probe(endpoint, self.config.probe_timeout).await {
            debug!(endpoint = endpoint.url(), error = %error, "Probe failed");
            return Err(error);
        }

        let metadata = read_fields(endpoint, token, self.config.call_timeout).await;
        if metadata.is_usable() {
            Ok(Some(metadata))
        } else {
            debug!(endpoint = endpoint.url(), "No usable metadata fields");
            Ok(None)
        }
    }
}

impl<C> std::fmt::Debug for MetadataResolver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataResolver")
            .field("chains", &self.registry.len())
            .field("cached_pools", &self.cache.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Shared resolver handle.
pub type SharedResolver<C = HttpConnector> = Arc<MetadataResolver<C>>;
