// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded-time liveness probe

use std::time::Duration;

use tracing::{debug, Instrument};

use crate::errors::EndpointError;
use crate::provider::TokenEndpoint;
use crate::spans;

/// Check that `endpoint` answers `eth_blockNumber` within `timeout`.
///
/// The block number is only a reachability signal; callers should not rely
/// on its value.
///
/// # Errors
///
/// - [`EndpointError::TimedOut`] if the deadline fires first
/// - [`EndpointError::Unreachable`] if the call fails first
pub async fn probe(endpoint: &dyn TokenEndpoint, timeout: Duration) -> Result<u64, EndpointError> {
    let span = spans::probe_endpoint(endpoint.url());

    async move {
        match tokio::time::timeout(timeout, endpoint.block_number()).await {
            Ok(Ok(block)) => {
                debug!(block, "Endpoint alive");
                Ok(block)
            }
            Ok(Err(error @ EndpointError::Unreachable { .. })) => Err(error),
            Ok(Err(error)) => Err(EndpointError::unreachable(endpoint.url(), error)),
            Err(_) => Err(EndpointError::timed_out(endpoint.url(), timeout)),
        }
    }
    .instrument(span)
    .await
}
