// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_network::Ethereum;
use alloy_provider::{ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;
use tracing::warn;

use crate::errors::RpcError;
use crate::transport::LoggingLayer;

use super::config::ProviderConfig;

/// Create an HTTP provider for one endpoint
///
/// The provider is a bare `RootProvider` without fillers: metadata reads are
/// plain `eth_call`s and never need nonce, gas or chain-id filling.
///
/// # Examples
///
/// ```rust,ignore
/// use supplyscan::provider::{create_http_provider, ProviderConfig};
///
/// let provider = create_http_provider(&ProviderConfig::new("https://rpc.ankr.com/eth"))?;
/// let block = provider.get_block_number().await?;
/// ```
///
/// # Errors
///
/// Returns [`RpcError::ProviderUrlInvalid`] if the URL cannot be parsed.
pub fn create_http_provider(config: &ProviderConfig) -> Result<RootProvider<Ethereum>, RpcError> {
    let url: url::Url = config.url.parse().map_err(|e| {
        warn!(url = %config.url, error = %e, "Invalid provider URL");
        RpcError::ProviderUrlInvalid(format!("{}: {e}", config.url))
    })?;

    if !config.logging_enabled {
        return Ok(ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_http(url));
    }

    let client = ClientBuilder::default()
        .layer(LoggingLayer::new().with_endpoint(config.url.clone()))
        .http(url);

    Ok(ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<Ethereum>()
        .connect_client(client))
}
