// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent, failure-tolerant ERC-20 field reads

use std::future::Future;
use std::time::Duration;

use alloy_primitives::Address;
use tracing::{debug, Instrument};

use super::TokenMetadata;
use crate::errors::EndpointError;
use crate::provider::TokenEndpoint;
use crate::spans;

/// Read `name`, `symbol`, `decimals` and `totalSupply` from `token`.
///
/// The four calls run concurrently, each with its own `per_call_timeout`. A
/// call that fails or times out leaves only its own field empty. Empty
/// strings are treated as missing. `logo` is never populated here.
pub async fn read_fields(
    endpoint: &dyn TokenEndpoint,
    token: Address,
    per_call_timeout: Duration,
) -> TokenMetadata {
    let url = endpoint.url();
    let span = spans::read_token_fields(url, token);

    async move {
        let (name, symbol, decimals, total_supply) = tokio::join!(
            bounded(url, "name()", per_call_timeout, endpoint.name(token)),
            bounded(url, "symbol()", per_call_timeout, endpoint.symbol(token)),
            bounded(url, "decimals()", per_call_timeout, endpoint.decimals(token)),
            bounded(url, "totalSupply()", per_call_timeout, endpoint.total_supply(token)),
        );

        TokenMetadata {
            name: name.filter(|s| !s.is_empty()),
            symbol: symbol.filter(|s| !s.is_empty()),
            decimals,
            total_supply: total_supply.map(|supply| supply.to_string()),
            logo: None,
        }
    }
    .instrument(span)
    .await
}

async fn bounded<T>(
    endpoint: &str,
    method: &'static str,
    limit: Duration,
    call: impl Future<Output = Result<T, EndpointError>>,
) -> Option<T> {
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(error)) => {
            debug!(endpoint, method, error = %error, "Metadata read failed");
            None
        }
        Err(_) => {
            debug!(endpoint, method, timeout_ms = limit.as_millis() as u64, "Metadata read timed out");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use async_trait::async_trait;

    /// Answers name and total supply, reverts on symbol, never answers decimals.
    struct Token;

    #[async_trait]
    impl TokenEndpoint for Token {
        fn url(&self) -> &str {
            "http://token"
        }

        async fn block_number(&self) -> Result<u64, EndpointError> {
            Ok(1)
        }

        async fn name(&self, _: Address) -> Result<String, EndpointError> {
            Ok("Maker".into())
        }

        async fn symbol(&self, _: Address) -> Result<String, EndpointError> {
            Err(EndpointError::call_failed("http://token", "symbol()", "execution reverted"))
        }

        async fn decimals(&self, _: Address) -> Result<u8, EndpointError> {
            std::future::pending().await
        }

        async fn total_supply(&self, _: Address) -> Result<U256, EndpointError> {
            Ok(U256::from(10).pow(U256::from(24)))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn failures_only_blank_their_own_field() {
        let metadata = read_fields(&Token, Address::ZERO, Duration::from_secs(7)).await;

        assert_eq!(metadata.name.as_deref(), Some("Maker"));
        assert_eq!(metadata.symbol, None);
        assert_eq!(metadata.decimals, None);
        assert_eq!(
            metadata.total_supply.as_deref(),
            Some("1000000000000000000000000")
        );
        assert_eq!(metadata.logo, None);
        assert!(metadata.is_usable());
    }
}
