// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The read-only RPC surface used for metadata resolution
//!
//! [`TokenEndpoint`] is the seam between resolution logic and the network.
//! [`HttpEndpoint`] talks JSON-RPC over HTTP;
//! [`FallbackEndpoint`](super::FallbackEndpoint) aggregates several endpoints
//! behind the same trait. Tests substitute in-memory implementations.

use std::sync::Arc;

use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{sol, SolCall};
use async_trait::async_trait;

use crate::errors::{EndpointError, RpcError};

use super::config::ProviderConfig;
use super::factory::create_http_provider;

sol! {
    /// ERC-20 optional metadata extension plus `totalSupply`
    interface IERC20Metadata {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
    }
}

/// An RPC endpoint able to answer the calls metadata resolution needs.
///
/// Implementations must not apply their own deadlines; callers race every call
/// against a timer.
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    /// Endpoint URL, or a label for aggregated endpoints.
    fn url(&self) -> &str;

    /// `eth_blockNumber`
    async fn block_number(&self) -> Result<u64, EndpointError>;

    /// `name()` on the token contract
    async fn name(&self, token: Address) -> Result<String, EndpointError>;

    /// `symbol()` on the token contract
    async fn symbol(&self, token: Address) -> Result<String, EndpointError>;

    /// `decimals()` on the token contract
    async fn decimals(&self, token: Address) -> Result<u8, EndpointError>;

    /// `totalSupply()` on the token contract
    async fn total_supply(&self, token: Address) -> Result<U256, EndpointError>;
}

/// Builds [`TokenEndpoint`]s from URLs.
pub trait EndpointConnector: Send + Sync {
    /// Create an endpoint for `url`.
    ///
    /// # Errors
    ///
    /// Returns an [`RpcError`] if no connection can be built for the URL.
    fn connect(&self, url: &str) -> Result<Arc<dyn TokenEndpoint>, RpcError>;
}

/// JSON-RPC over HTTP.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    url: String,
    provider: RootProvider<Ethereum>,
}

impl HttpEndpoint {
    /// Connect to the endpoint described by `config`.
    ///
    /// No request is sent; the URL is only parsed.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::ProviderUrlInvalid`] for malformed URLs.
    pub fn connect(config: &ProviderConfig) -> Result<Self, RpcError> {
        Ok(Self {
            url: config.url.clone(),
            provider: create_http_provider(config)?,
        })
    }

    async fn eth_call<C: SolCall>(
        &self,
        token: Address,
        call: C,
        method: &'static str,
    ) -> Result<Bytes, EndpointError> {
        let tx = TransactionRequest::default()
            .with_to(token)
            .with_input(call.abi_encode());

        self.provider
            .call(tx)
            .await
            .map_err(|e| EndpointError::call_failed(&self.url, method, e))
    }
}

#[async_trait]
impl TokenEndpoint for HttpEndpoint {
    fn url(&self) -> &str {
        &self.url
    }

    async fn block_number(&self) -> Result<u64, EndpointError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| EndpointError::unreachable(&self.url, e))
    }

    async fn name(&self, token: Address) -> Result<String, EndpointError> {
        let data = self
            .eth_call(token, IERC20Metadata::nameCall {}, "name()")
            .await?;
        decode_text(&data).ok_or_else(|| EndpointError::decode(&self.url, "name()", "not a string"))
    }

    async fn symbol(&self, token: Address) -> Result<String, EndpointError> {
        let data = self
            .eth_call(token, IERC20Metadata::symbolCall {}, "symbol()")
            .await?;
        decode_text(&data)
            .ok_or_else(|| EndpointError::decode(&self.url, "symbol()", "not a string"))
    }

    async fn decimals(&self, token: Address) -> Result<u8, EndpointError> {
        let data = self
            .eth_call(token, IERC20Metadata::decimalsCall {}, "decimals()")
            .await?;
        IERC20Metadata::decimalsCall::abi_decode_returns(&data)
            .map_err(|e| EndpointError::decode(&self.url, "decimals()", e))
    }

    async fn total_supply(&self, token: Address) -> Result<U256, EndpointError> {
        let data = self
            .eth_call(token, IERC20Metadata::totalSupplyCall {}, "totalSupply()")
            .await?;
        IERC20Metadata::totalSupplyCall::abi_decode_returns(&data)
            .map_err(|e| EndpointError::decode(&self.url, "totalSupply()", e))
    }
}

/// Decode a `name()`/`symbol()` return value.
///
/// Accepts the standard ABI `string` encoding and the `bytes32` encoding used
/// by some early tokens (MKR, SAI), whose trailing NUL padding is trimmed.
pub(crate) fn decode_text(data: &[u8]) -> Option<String> {
    if let Ok(text) = IERC20Metadata::nameCall::abi_decode_returns(data) {
        return Some(text);
    }

    if data.len() != 32 {
        return None;
    }
    let end = data.iter().rposition(|byte| *byte != 0).map_or(0, |i| i + 1);
    String::from_utf8(data[..end].to_vec()).ok()
}

/// Connects [`HttpEndpoint`]s.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    logging_enabled: bool,
}

impl HttpConnector {
    /// Create a connector; `logging_enabled` controls per-request RPC logging.
    #[must_use]
    pub fn new(logging_enabled: bool) -> Self {
        Self { logging_enabled }
    }
}

impl Default for HttpConnector {
    fn default() -> Self {
        Self::new(true)
    }
}

impl EndpointConnector for HttpConnector {
    fn connect(&self, url: &str) -> Result<Arc<dyn TokenEndpoint>, RpcError> {
        let config = ProviderConfig::new(url).with_logging(self.logging_enabled);
        Ok(Arc::new(HttpEndpoint::connect(&config)?))
    }
}
