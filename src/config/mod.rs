// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for metadata resolution
//!
//! This module controls probe and read deadlines, pooled connection stall
//! timing, endpoint overrides and keyed provider credentials.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use supplyscan::ResolverConfig;
//!
//! let config = ResolverConfig::default();
//! assert_eq!(config.probe_timeout.as_millis(), 2500);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use std::time::Duration;
//! use supplyscan::ResolverConfigBuilder;
//!
//! let config = ResolverConfigBuilder::with_defaults()
//!     .probe_timeout(Duration::from_secs(1))
//!     .global_endpoints(["https://my-node.example"])
//!     .chain_endpoints("bsc", ["https://bsc.example"])
//!     .build();
//! ```
//!
//! # Example: From the environment
//!
//! ```rust,ignore
//! use supplyscan::ResolverConfig;
//!
//! // Honors a .env file; see `constants::env` for the variable names
//! let config = ResolverConfig::from_env()?;
//! ```

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::chains::{split_endpoint_list, ApiKeys, EndpointOverrides};
use crate::errors::ConfigError;
use crate::provider::FallbackConfig;

pub mod constants;

use constants::{env, DEFAULT_CALL_TIMEOUT, DEFAULT_PROBE_TIMEOUT};

/// Configuration for [`MetadataResolver`](crate::MetadataResolver)
///
/// Use [`ResolverConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Deadline for the `eth_blockNumber` liveness probe
    /// Default: 2500ms
    pub probe_timeout: Duration,

    /// Deadline for each of the four metadata reads
    /// Default: 7000ms
    pub call_timeout: Duration,

    /// Stall timing of pooled connection members
    /// Default: 750ms, +500ms per member
    pub fallback: FallbackConfig,

    /// Endpoint overrides applied by `resolve_token_metadata`
    pub overrides: EndpointOverrides,

    /// Keyed provider credentials injected into the chain registry
    pub api_keys: ApiKeys,

    /// Whether each JSON-RPC request is logged through the transport layer
    pub rpc_logging: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            rpc_logging: true,
            ..Self::minimal()
        }
    }
}

impl ResolverConfig {
    /// Default timing without overrides, keys or RPC request logging
    pub fn minimal() -> Self {
        Self {
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            call_timeout: DEFAULT_CALL_TIMEOUT,
            fallback: FallbackConfig::default(),
            overrides: EndpointOverrides::new(),
            api_keys: ApiKeys::default(),
            rpc_logging: false,
        }
    }

    /// Load configuration from the process environment and a `.env` file
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override document or a duration is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `(name, value)` pairs
    ///
    /// Unset variables keep their defaults. Per-chain override variables map
    /// their suffix to a chain key by lower-casing it and replacing `_` with
    /// `-` (`RPC_OVERRIDES_BSC_TESTNET` → `bsc-testnet`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an override document or a duration is malformed.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();

        let mut config = Self::default();

        if let Some(json) = vars.get(env::RPC_OVERRIDES) {
            config.overrides = serde_json::from_str(json).map_err(|source| {
                ConfigError::InvalidOverrides {
                    source_name: env::RPC_OVERRIDES.to_string(),
                    source,
                }
            })?;
        }

        if let Some(list) = vars.get(env::RPC_OVERRIDES_GLOBAL) {
            config
                .overrides
                .extend(EndpointOverrides::new().with_global(split_endpoint_list(list)));
        }

        let mut per_chain: Vec<_> = vars
            .iter()
            .filter(|(name, _)| name.as_str() != env::RPC_OVERRIDES_GLOBAL)
            .filter_map(|(name, list)| {
                let suffix = name.strip_prefix(env::RPC_OVERRIDES_CHAIN_PREFIX)?;
                Some((suffix.to_lowercase().replace('_', "-"), list))
            })
            .collect();
        per_chain.sort();
        for (chain_key, list) in per_chain {
            config
                .overrides
                .extend(EndpointOverrides::new().with_chain(chain_key, split_endpoint_list(list)));
        }

        config.api_keys = ApiKeys {
            alchemy: vars.get(env::ALCHEMY_API_KEY).cloned(),
            infura: vars.get(env::INFURA_PROJECT_ID).cloned(),
        };

        if let Some(timeout) = parse_millis(&vars, env::PROBE_TIMEOUT_MS)? {
            config.probe_timeout = timeout;
        }
        if let Some(timeout) = parse_millis(&vars, env::CALL_TIMEOUT_MS)? {
            config.call_timeout = timeout;
        }
        if let Some(timeout) = parse_millis(&vars, env::STALL_TIMEOUT_MS)? {
            config.fallback.stall_timeout = timeout;
        }

        Ok(config)
    }

    /// Upper bound on one resolution over `endpoint_count` endpoints
    ///
    /// One probe plus one read round per endpoint. The resolver abandons a
    /// resolution still running at this point.
    pub fn worst_case_latency(&self, endpoint_count: usize) -> Duration {
        let rounds = u32::try_from(endpoint_count).unwrap_or(u32::MAX);
        (self.probe_timeout + self.call_timeout).saturating_mul(rounds)
    }
}

fn parse_millis(
    vars: &HashMap<String, String>,
    name: &'static str,
) -> Result<Option<Duration>, ConfigError> {
    vars.get(name)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDuration {
                    var: name.to_string(),
                    value: value.clone(),
                })
        })
        .transpose()
}

/// Builder for [`ResolverConfig`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use supplyscan::ResolverConfigBuilder;
///
/// let config = ResolverConfigBuilder::new()
///     .call_timeout(Duration::from_secs(3))
///     .build();
/// assert!(!config.rpc_logging);
/// ```
pub struct ResolverConfigBuilder {
    config: ResolverConfig,
}

impl Default for ResolverConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::minimal(),
        }
    }

    /// Start with [`ResolverConfig::default`]
    pub fn with_defaults() -> Self {
        Self {
            config: ResolverConfig::default(),
        }
    }

    /// Set the probe deadline
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.config.probe_timeout = timeout;
        self
    }

    /// Set the per-read deadline
    pub fn call_timeout(mut self, timeout: Duration) -> Self {
        self.config.call_timeout = timeout;
        self
    }

    /// Set the stall timeout of the first pooled connection member
    pub fn stall_timeout(mut self, timeout: Duration) -> Self {
        self.config.fallback.stall_timeout = timeout;
        self
    }

    /// Set the stall timeout increment per member
    pub fn stall_step(mut self, step: Duration) -> Self {
        self.config.fallback.stall_step = step;
        self
    }

    /// Replace all endpoint overrides
    pub fn overrides(mut self, overrides: EndpointOverrides) -> Self {
        self.config.overrides = overrides;
        self
    }

    /// Set endpoints prepended for every chain
    pub fn global_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.overrides = self.config.overrides.with_global(endpoints);
        self
    }

    /// Replace one chain's endpoints
    pub fn chain_endpoints<I, S>(mut self, chain_key: impl Into<String>, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.overrides = self.config.overrides.with_chain(chain_key, endpoints);
        self
    }

    /// Set keyed provider credentials
    pub fn api_keys(mut self, keys: ApiKeys) -> Self {
        self.config.api_keys = keys;
        self
    }

    /// Enable or disable per-request RPC logging
    pub fn rpc_logging(mut self, enabled: bool) -> Self {
        self.config.rpc_logging = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ResolverConfig {
        self.config
    }
}
