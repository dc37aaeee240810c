// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for supplyscan operations.
//!
//! Telemetry concerns are kept apart from business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a span helper
//! here. Async operations attach the span with [`tracing::Instrument`] so it
//! stays entered only while the future is polled.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use alloy_primitives::Address;
use tracing::{Level, Span};

/// Create span for resolving metadata of one token on one chain.
///
/// This is the main public API entry point for metadata resolution.
///
/// Parent: None (root span for this operation), or a registrar span
/// Children: probe_endpoint, read_token_fields
#[inline]
pub(crate) fn resolve_token_metadata(chain_key: &str, token: Address, endpoints: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "supplyscan.resolve_token_metadata",
        chain_key = %chain_key,
        token = %token,
        endpoints = endpoints,
        path = tracing::field::Empty,
    )
}

/// Create span for the `eth_blockNumber` liveness probe.
///
/// Parent: resolve_token_metadata span
/// Children: rpc_call spans from the transport layer
#[inline]
pub(crate) fn probe_endpoint(endpoint: &str) -> Span {
    tracing::debug_span!("supplyscan.probe_endpoint", endpoint = %endpoint)
}

/// Create span for the four concurrent ERC-20 reads.
///
/// Parent: resolve_token_metadata span
/// Children: rpc_call spans from the transport layer
#[inline]
pub(crate) fn read_token_fields(endpoint: &str, token: Address) -> Span {
    tracing::debug_span!(
        "supplyscan.read_token_fields",
        endpoint = %endpoint,
        token = %token,
    )
}

/// Create span for building a chain's pooled connection.
#[inline]
pub(crate) fn build_pooled_connection(chain_key: &str, endpoints: usize) -> Span {
    tracing::debug_span!(
        "supplyscan.build_pooled_connection",
        chain_key = %chain_key,
        endpoints = endpoints,
    )
}

/// Create span for registering a new token record.
///
/// Parent: None (root span for this operation)
/// Children: resolve_token_metadata span when on-chain fetch is requested
#[inline]
pub(crate) fn register_token(chain_key: &str, address: &str) -> Span {
    tracing::info_span!(
        "supplyscan.register_token",
        chain_key = %chain_key,
        address = %address,
    )
}

/// Create span for refreshing the metadata of a stored token record.
///
/// Parent: None (root span for this operation)
/// Children: resolve_token_metadata span
#[inline]
pub(crate) fn refresh_token(id: u64) -> Span {
    tracing::info_span!("supplyscan.refresh_token", id = id)
}
