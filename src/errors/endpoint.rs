// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-endpoint failures.
//!
//! These are transient by nature and never escape the resolver.

use std::time::Duration;

/// A single endpoint (or pooled connection) failed to answer a call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// The transport returned an error before the deadline.
    #[error("Endpoint {endpoint} unreachable: {reason}")]
    Unreachable {
        /// Endpoint URL (or pooled connection label)
        endpoint: String,
        /// Transport error message
        reason: String,
    },

    /// The deadline fired before the call settled.
    #[error("Endpoint {endpoint} timed out after {timeout:?}")]
    TimedOut {
        /// Endpoint URL (or pooled connection label)
        endpoint: String,
        /// The deadline that elapsed
        timeout: Duration,
    },

    /// The node answered but the contract call reverted or errored.
    #[error("Call {method} on {endpoint} failed: {reason}")]
    CallFailed {
        /// Endpoint URL
        endpoint: String,
        /// Contract method, e.g. `symbol()`
        method: &'static str,
        /// Error message from the node
        reason: String,
    },

    /// The call returned data that could not be ABI-decoded.
    #[error("Could not decode {method} result from {endpoint}: {reason}")]
    Decode {
        /// Endpoint URL
        endpoint: String,
        /// Contract method, e.g. `name()`
        method: &'static str,
        /// Decoder message
        reason: String,
    },

    /// A pooled connection has no member endpoints.
    #[error("Pooled connection {label} has no member endpoints")]
    NoMembers {
        /// Pooled connection label
        label: String,
    },
}

impl EndpointError {
    /// Create an `Unreachable` error from any displayable transport error.
    pub fn unreachable(endpoint: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        EndpointError::Unreachable {
            endpoint: endpoint.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a `TimedOut` error.
    pub fn timed_out(endpoint: impl Into<String>, timeout: Duration) -> Self {
        EndpointError::TimedOut {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    /// Create a `CallFailed` error.
    pub fn call_failed(
        endpoint: impl Into<String>,
        method: &'static str,
        reason: impl std::fmt::Display,
    ) -> Self {
        EndpointError::CallFailed {
            endpoint: endpoint.into(),
            method,
            reason: reason.to_string(),
        }
    }

    /// Create a `Decode` error.
    pub fn decode(
        endpoint: impl Into<String>,
        method: &'static str,
        reason: impl std::fmt::Display,
    ) -> Self {
        EndpointError::Decode {
            endpoint: endpoint.into(),
            method,
            reason: reason.to_string(),
        }
    }

    /// Whether this failure came from the deadline rather than the endpoint.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, EndpointError::TimedOut { .. })
    }
}
