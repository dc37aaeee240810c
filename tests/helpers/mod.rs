// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for supplyscan integration tests
//!
//! Provides in-memory endpoints and a connector so resolution can be tested
//! without real RPC nodes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use supplyscan::{
    ChainDescriptor, ChainRegistry, EndpointConnector, EndpointError, MetadataResolver,
    ResolverConfig, ResolverConfigBuilder, RpcError, TokenEndpoint,
};

/// How an endpoint responds to the liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Liveness {
    /// Answers `eth_blockNumber`
    Up,
    /// Fails every call immediately
    Down,
    /// Never answers any call
    Hanging,
    /// Rate limited on its first `eth_blockNumber`, `Up` afterwards
    FlakyStart,
    /// Answers `eth_blockNumber` but never answers a read
    Stalled,
}

/// Answers to the four ERC-20 reads; `None` fails the call.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
    pub total_supply: Option<U256>,
}

impl Answers {
    /// A well-behaved token.
    pub fn token(name: &str, symbol: &str, decimals: u8, total_supply: u128) -> Self {
        Self {
            name: Some(name.to_string()),
            symbol: Some(symbol.to_string()),
            decimals: Some(decimals),
            total_supply: Some(U256::from(total_supply)),
        }
    }
}

/// Mock TokenEndpoint with call counters
///
/// # Example
///
/// ```rust,ignore
/// let ok = MockEndpoint::healthy("http://mock-ok", Answers::token("Dead Token", "DEAD", 18, 1000));
/// let down = MockEndpoint::down("http://mock-down");
/// assert_eq!(down.probes(), 0);
/// ```
pub struct MockEndpoint {
    url: String,
    liveness: Liveness,
    answers: Answers,
    probes: AtomicUsize,
    reads: AtomicUsize,
}

impl MockEndpoint {
    pub fn new(url: &str, liveness: Liveness, answers: Answers) -> Arc<Self> {
        Arc::new(Self {
            url: url.to_string(),
            liveness,
            answers,
            probes: AtomicUsize::new(0),
            reads: AtomicUsize::new(0),
        })
    }

    /// Alive and answering every read from `answers`.
    pub fn healthy(url: &str, answers: Answers) -> Arc<Self> {
        Self::new(url, Liveness::Up, answers)
    }

    /// Alive but failing every read.
    pub fn empty(url: &str) -> Arc<Self> {
        Self::new(url, Liveness::Up, Answers::default())
    }

    /// Failing every call.
    pub fn down(url: &str) -> Arc<Self> {
        Self::new(url, Liveness::Down, Answers::default())
    }

    /// Never answering.
    pub fn hanging(url: &str) -> Arc<Self> {
        Self::new(url, Liveness::Hanging, Answers::default())
    }

    /// Rejects its first `eth_blockNumber`, then behaves like [`Self::healthy`].
    pub fn flaky_start(url: &str, answers: Answers) -> Arc<Self> {
        Self::new(url, Liveness::FlakyStart, answers)
    }

    /// Alive but never answering a read.
    pub fn stalled(url: &str) -> Arc<Self> {
        Self::new(url, Liveness::Stalled, Answers::default())
    }

    /// Number of `eth_blockNumber` calls received.
    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    /// Number of ERC-20 read calls received.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Total calls of any kind.
    pub fn calls(&self) -> usize {
        self.probes() + self.reads()
    }

    async fn answer<T: Clone>(&self, method: &'static str, value: &Option<T>) -> Result<T, EndpointError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        match self.liveness {
            Liveness::Hanging | Liveness::Stalled => std::future::pending().await,
            Liveness::Down => Err(EndpointError::unreachable(&self.url, "connection refused")),
            Liveness::Up | Liveness::FlakyStart => value
                .clone()
                .ok_or_else(|| EndpointError::call_failed(&self.url, method, "execution reverted")),
        }
    }
}

#[async_trait]
impl TokenEndpoint for MockEndpoint {
    fn url(&self) -> &str {
        &self.url
    }

    async fn block_number(&self) -> Result<u64, EndpointError> {
        let previous = self.probes.fetch_add(1, Ordering::SeqCst);
        match self.liveness {
            Liveness::Up | Liveness::Stalled => Ok(19_000_000),
            Liveness::FlakyStart if previous == 0 => {
                Err(EndpointError::unreachable(&self.url, "429 Too Many Requests"))
            }
            Liveness::FlakyStart => Ok(19_000_000),
            Liveness::Down => Err(EndpointError::unreachable(&self.url, "connection refused")),
            Liveness::Hanging => std::future::pending().await,
        }
    }

    async fn name(&self, _token: Address) -> Result<String, EndpointError> {
        self.answer("name()", &self.answers.name).await
    }

    async fn symbol(&self, _token: Address) -> Result<String, EndpointError> {
        self.answer("symbol()", &self.answers.symbol).await
    }

    async fn decimals(&self, _token: Address) -> Result<u8, EndpointError> {
        self.answer("decimals()", &self.answers.decimals).await
    }

    async fn total_supply(&self, _token: Address) -> Result<U256, EndpointError> {
        self.answer("totalSupply()", &self.answers.total_supply).await
    }
}

/// Connector serving [`MockEndpoint`]s by URL.
///
/// Unknown URLs fail to connect, like a malformed URL would.
#[derive(Default)]
pub struct MockConnector {
    endpoints: HashMap<String, Arc<MockEndpoint>>,
}

impl MockConnector {
    pub fn new(endpoints: &[&Arc<MockEndpoint>]) -> Self {
        Self {
            endpoints: endpoints
                .iter()
                .map(|endpoint| (endpoint.url().to_string(), Arc::clone(*endpoint)))
                .collect(),
        }
    }
}

impl EndpointConnector for MockConnector {
    fn connect(&self, url: &str) -> Result<Arc<dyn TokenEndpoint>, RpcError> {
        self.endpoints
            .get(url)
            .map(|endpoint| Arc::clone(endpoint) as Arc<dyn TokenEndpoint>)
            .ok_or_else(|| RpcError::ProviderUrlInvalid(url.to_string()))
    }
}

/// A registry holding one chain.
pub fn registry(chain_key: &str, endpoints: &[&str]) -> ChainRegistry {
    let mut registry = ChainRegistry::new();
    registry.register(ChainDescriptor::new(
        chain_key,
        "Ethereum Mainnet",
        Chain::mainnet(),
        endpoints.iter().map(|s| s.to_string()).collect(),
    ));
    registry
}

/// Default timings with RPC logging off.
pub fn test_config() -> ResolverConfig {
    ResolverConfigBuilder::with_defaults().rpc_logging(false).build()
}

/// A resolver over `eth` with `urls` as its endpoint list, backed by `endpoints`.
pub fn resolver(urls: &[&str], endpoints: &[&Arc<MockEndpoint>]) -> MetadataResolver<MockConnector> {
    MetadataResolver::with_connector(
        registry("eth", urls),
        MockConnector::new(endpoints),
        test_config(),
    )
}
