// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain key to endpoint list mapping

use std::collections::HashMap;

use alloy_chains::Chain;
use tracing::debug;

use super::defaults::default_descriptors;
use super::overrides::EndpointOverrides;
use crate::errors::ResolveError;

/// A supported network and its preferred endpoints.
///
/// Earlier endpoints are preferred over later ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Short identifier, e.g. `"eth"` or `"bsc-testnet"`
    pub key: String,
    /// Human-readable name, e.g. `"Ethereum Mainnet"`
    pub display_name: String,
    /// EIP-155 chain
    pub chain: Chain,
    /// Endpoint URLs in preference order
    pub endpoints: Vec<String>,
}

impl ChainDescriptor {
    /// Create a new descriptor.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        chain: Chain,
        endpoints: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            chain,
            endpoints,
        }
    }
}

/// Credentials for keyed RPC providers.
///
/// When present, the keyed endpoints are placed ahead of the public ones for
/// the chains those providers serve (`eth` and `polygon`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    /// Alchemy API key
    pub alchemy: Option<String>,
    /// Infura project id
    pub infura: Option<String>,
}

impl ApiKeys {
    /// Whether no keys are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alchemy.is_none() && self.infura.is_none()
    }

    /// Keyed endpoints for `chain_key`, Alchemy first.
    #[must_use]
    pub fn endpoints_for(&self, chain_key: &str) -> Vec<String> {
        let (alchemy_host, infura_host) = match chain_key {
            "eth" => ("https://eth-mainnet.alchemyapi.io/v2", "https://mainnet.infura.io/v3"),
            "polygon" => (
                "https://polygon-mainnet.g.alchemy.com/v2",
                "https://polygon-mainnet.infura.io/v3",
            ),
            _ => return Vec::new(),
        };

        let mut endpoints = Vec::new();
        if let Some(key) = &self.alchemy {
            endpoints.push(format!("{alchemy_host}/{key}"));
        }
        if let Some(id) = &self.infura {
            endpoints.push(format!("{infura_host}/{id}"));
        }
        endpoints
    }
}

/// Registry of known chains.
///
/// # Example
///
/// ```rust
/// use supplyscan::{ChainRegistry, EndpointOverrides};
///
/// let registry = ChainRegistry::with_defaults();
/// let endpoints = registry
///     .resolve_endpoints("eth", &EndpointOverrides::new())
///     .unwrap();
/// assert_eq!(endpoints[0], "https://cloudflare-eth.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    chains: HashMap<String, ChainDescriptor>,
    order: Vec<String>,
}

impl ChainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in chain table.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for descriptor in default_descriptors() {
            registry.register(descriptor);
        }
        registry
    }

    /// Prepend keyed provider endpoints to the chains they serve.
    #[must_use]
    pub fn with_api_keys(mut self, keys: &ApiKeys) -> Self {
        if keys.is_empty() {
            return self;
        }
        for descriptor in self.chains.values_mut() {
            let mut keyed = keys.endpoints_for(&descriptor.key);
            if keyed.is_empty() {
                continue;
            }
            debug!(
                chain_key = %descriptor.key,
                count = keyed.len(),
                "Injecting keyed provider endpoints"
            );
            keyed.append(&mut descriptor.endpoints);
            descriptor.endpoints = keyed;
        }
        self
    }

    /// Add or replace a chain.
    pub fn register(&mut self, descriptor: ChainDescriptor) {
        if !self.chains.contains_key(&descriptor.key) {
            self.order.push(descriptor.key.clone());
        }
        self.chains.insert(descriptor.key.clone(), descriptor);
    }

    /// Look up a chain by key.
    #[must_use]
    pub fn descriptor(&self, chain_key: &str) -> Option<&ChainDescriptor> {
        self.chains.get(chain_key)
    }

    /// Display name for a chain, falling back to the key itself.
    #[must_use]
    pub fn display_name<'a>(&'a self, chain_key: &'a str) -> &'a str {
        self.descriptor(chain_key)
            .map_or(chain_key, |descriptor| descriptor.display_name.as_str())
    }

    /// Chain keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Effective endpoint list for a chain after applying overrides.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownChain`] if the chain has neither a registry
    ///   entry nor a per-chain override
    /// - [`ResolveError::NoEndpoints`] if the merged list is empty
    pub fn resolve_endpoints(
        &self,
        chain_key: &str,
        overrides: &EndpointOverrides,
    ) -> Result<Vec<String>, ResolveError> {
        let defaults: &[String] = match self.descriptor(chain_key) {
            Some(descriptor) => descriptor.endpoints.as_slice(),
            None if overrides.chain_override(chain_key).is_some() => &[],
            None => return Err(ResolveError::unknown_chain(chain_key)),
        };

        let endpoints = overrides.endpoints_for(chain_key, defaults);
        if endpoints.is_empty() {
            return Err(ResolveError::no_endpoints(chain_key));
        }
        Ok(endpoints)
    }
}
