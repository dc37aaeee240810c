// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal errors surfaced by metadata resolution.

/// Errors returned by [`MetadataResolver`](crate::MetadataResolver).
///
/// Per-endpoint failures never appear here; they are absorbed while the
/// resolver walks its endpoint list. What remains is either a caller mistake
/// (bad address, unknown chain) or the terminal exhaustion case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The address does not match `^0x[0-9a-fA-F]{40}$`.
    #[error("Invalid token address: {input:?} (expected 0x followed by 40 hex characters)")]
    InvalidAddress {
        /// The rejected input
        input: String,
    },

    /// The chain key has no registry entry and no per-chain override.
    #[error("Unknown chain: {chain_key}")]
    UnknownChain {
        /// The chain key that was looked up
        chain_key: String,
    },

    /// The merged endpoint list for the chain is empty.
    #[error("No RPC endpoints configured for chain {chain_key}")]
    NoEndpoints {
        /// The chain key that was looked up
        chain_key: String,
    },

    /// Every candidate endpoint was probed or read without a usable answer.
    #[error("Metadata fetch failed for chain {chain_key}: all {attempted} RPC endpoints exhausted")]
    AllEndpointsExhausted {
        /// The chain key that was resolved
        chain_key: String,
        /// Number of endpoints in the merged list
        attempted: usize,
    },
}

impl ResolveError {
    /// Create an `InvalidAddress` error for the given input.
    pub fn invalid_address(input: impl Into<String>) -> Self {
        ResolveError::InvalidAddress {
            input: input.into(),
        }
    }

    /// Create an `UnknownChain` error.
    pub fn unknown_chain(chain_key: impl Into<String>) -> Self {
        ResolveError::UnknownChain {
            chain_key: chain_key.into(),
        }
    }

    /// Create a `NoEndpoints` error.
    pub fn no_endpoints(chain_key: impl Into<String>) -> Self {
        ResolveError::NoEndpoints {
            chain_key: chain_key.into(),
        }
    }

    /// Create an `AllEndpointsExhausted` error.
    pub fn all_endpoints_exhausted(chain_key: impl Into<String>, attempted: usize) -> Self {
        ResolveError::AllEndpointsExhausted {
            chain_key: chain_key.into(),
            attempted,
        }
    }

    /// Whether the error was raised before any network call was made.
    #[must_use]
    pub fn is_fail_fast(&self) -> bool {
        !matches!(self, ResolveError::AllEndpointsExhausted { .. })
    }
}
