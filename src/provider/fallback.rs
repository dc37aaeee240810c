// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pooled connection that races endpoints in priority order
//!
//! Every call starts on the highest-priority member. If that member has not
//! answered within its stall timeout, or it fails, the next member is started
//! as well. The first success wins and the slower in-flight calls are dropped.
//!
//! ```text
//! member 1  |=========x                 (fails)
//! member 2        |-----stall-----|====...
//! member 3                        |===ok   <- returned
//! ```

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

use crate::config::constants::{DEFAULT_STALL_STEP, DEFAULT_STALL_TIMEOUT};
use crate::errors::EndpointError;

use super::endpoint::TokenEndpoint;

/// Stall timeouts assigned to pool members.
///
/// Member `i` waits `stall_timeout + i * stall_step` before the next member
/// is started alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackConfig {
    /// Stall timeout of the first member
    pub stall_timeout: Duration,
    /// Added per position in the priority order
    pub stall_step: Duration,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            stall_timeout: DEFAULT_STALL_TIMEOUT,
            stall_step: DEFAULT_STALL_STEP,
        }
    }
}

impl FallbackConfig {
    /// Stall timeout for the member at zero-based `position`.
    #[must_use]
    pub fn stall_for(&self, position: usize) -> Duration {
        let step = u32::try_from(position).unwrap_or(u32::MAX);
        self.stall_timeout
            .saturating_add(self.stall_step.saturating_mul(step))
    }
}

/// One endpoint inside a [`FallbackEndpoint`].
#[derive(Clone)]
pub struct FallbackMember {
    endpoint: Arc<dyn TokenEndpoint>,
    priority: u32,
    stall_timeout: Duration,
}

impl FallbackMember {
    /// The member's endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Arc<dyn TokenEndpoint> {
        &self.endpoint
    }

    /// Priority, 1 being the most preferred.
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// How long this member may run alone before the next one is started.
    #[must_use]
    pub fn stall_timeout(&self) -> Duration {
        self.stall_timeout
    }
}

impl std::fmt::Debug for FallbackMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackMember")
            .field("url", &self.endpoint.url())
            .field("priority", &self.priority)
            .field("stall_timeout", &self.stall_timeout)
            .finish()
    }
}

/// Several endpoints aggregated behind one [`TokenEndpoint`].
///
/// A single successful answer is enough (quorum of one).
#[derive(Debug)]
pub struct FallbackEndpoint {
    label: String,
    members: Vec<FallbackMember>,
}

impl FallbackEndpoint {
    /// Aggregate `endpoints`, most preferred first.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        endpoints: Vec<Arc<dyn TokenEndpoint>>,
        config: &FallbackConfig,
    ) -> Self {
        let members = endpoints
            .into_iter()
            .enumerate()
            .map(|(position, endpoint)| FallbackMember {
                endpoint,
                priority: u32::try_from(position + 1).unwrap_or(u32::MAX),
                stall_timeout: config.stall_for(position),
            })
            .collect();

        Self {
            label: label.into(),
            members,
        }
    }

    /// Members in priority order.
    #[must_use]
    pub fn members(&self) -> &[FallbackMember] {
        &self.members
    }

    /// The member serving `url`, if any.
    #[must_use]
    pub fn member(&self, url: &str) -> Option<Arc<dyn TokenEndpoint>> {
        self.members
            .iter()
            .find(|member| member.endpoint.url() == url)
            .map(|member| Arc::clone(&member.endpoint))
    }

    /// Member URLs in priority order.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.endpoint.url()).collect()
    }

    async fn race<T, F>(&self, method: &'static str, call: F) -> Result<T, EndpointError>
    where
        T: Send + 'static,
        F: Fn(Arc<dyn TokenEndpoint>) -> BoxFuture<'static, Result<T, EndpointError>>,
    {
        let mut queue = self.members.iter();
        let Some(first) = queue.next() else {
            return Err(EndpointError::NoMembers {
                label: self.label.clone(),
            });
        };

        let mut in_flight = FuturesUnordered::new();
        in_flight.push(call(Arc::clone(&first.endpoint)));
        let stall = sleep(first.stall_timeout);
        tokio::pin!(stall);

        let mut last_error = None;
        loop {
            tokio::select! {
                Some(outcome) = in_flight.next() => match outcome {
                    Ok(value) => return Ok(value),
                    Err(error) => {
                        debug!(pool = %self.label, method, error = %error, "Pool member failed");
                        last_error = Some(error);
                        match queue.next() {
                            Some(member) => {
                                trace!(pool = %self.label, method, endpoint = member.endpoint.url(), "Starting next pool member after failure");
                                in_flight.push(call(Arc::clone(&member.endpoint)));
                                stall.as_mut().reset(Instant::now() + member.stall_timeout);
                            }
                            None if in_flight.is_empty() => break,
                            None => {}
                        }
                    }
                },
                () = &mut stall, if !queue.as_slice().is_empty() => {
                    if let Some(member) = queue.next() {
                        trace!(pool = %self.label, method, endpoint = member.endpoint.url(), "Starting next pool member after stall");
                        in_flight.push(call(Arc::clone(&member.endpoint)));
                        stall.as_mut().reset(Instant::now() + member.stall_timeout);
                    }
                },
                else => break,
            }
        }

        Err(last_error.unwrap_or_else(|| EndpointError::NoMembers {
            label: self.label.clone(),
        }))
    }
}

#[async_trait]
impl TokenEndpoint for FallbackEndpoint {
    fn url(&self) -> &str {
        &self.label
    }

    async fn block_number(&self) -> Result<u64, EndpointError> {
        self.race("eth_blockNumber", |endpoint| {
            Box::pin(async move { endpoint.block_number().await })
        })
        .await
    }

    async fn name(&self, token: Address) -> Result<String, EndpointError> {
        self.race("name()", move |endpoint| {
            Box::pin(async move { endpoint.name(token).await })
        })
        .await
    }

    async fn symbol(&self, token: Address) -> Result<String, EndpointError> {
        self.race("symbol()", move |endpoint| {
            Box::pin(async move { endpoint.symbol(token).await })
        })
        .await
    }

    async fn decimals(&self, token: Address) -> Result<u8, EndpointError> {
        self.race("decimals()", move |endpoint| {
            Box::pin(async move { endpoint.decimals(token).await })
        })
        .await
    }

    async fn total_supply(&self, token: Address) -> Result<U256, EndpointError> {
        self.race("totalSupply()", move |endpoint| {
            Box::pin(async move { endpoint.total_supply(token).await })
        })
        .await
    }
}
