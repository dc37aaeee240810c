// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from the token store collaborator.

/// Errors returned by a [`TokenStore`](crate::tokens::TokenStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// A record for the same `(address, chain_key)` pair already exists.
    #[error("Token {address} is already registered on chain {chain_key}")]
    Conflict {
        /// Checksummed token address
        address: String,
        /// Chain key of the existing record
        chain_key: String,
    },

    /// No record with this id.
    #[error("Token record {id} not found")]
    NotFound {
        /// The id that was looked up
        id: u64,
    },

    /// The backing store failed (lock poisoning, I/O, ...).
    #[error("Token store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Whether this error is caused by the caller's input (HTTP 4xx territory).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StorageError::Conflict { .. } | StorageError::NotFound { .. }
        )
    }
}
