// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the supplyscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ResolveError`],
//!   [`EndpointError`], [`StorageError`], ...)
//! - **Unified error type** ([`SupplyscanError`]) for callers that don't need
//!   to distinguish between error sources
//!
//! # Propagation
//!
//! [`EndpointError`] values describe a single endpoint misbehaving. The
//! resolver absorbs them (they are logged, never returned); only the terminal
//! [`ResolveError`] variants reach callers.
//!
//! # Example
//!
//! ```rust,ignore
//! use supplyscan::{MetadataResolver, ResolveError};
//!
//! match resolver.resolve_token_metadata(address, "eth").await {
//!     Ok(metadata) => println!("{metadata:?}"),
//!     Err(ResolveError::UnknownChain { chain_key }) => eprintln!("no such chain: {chain_key}"),
//!     Err(ResolveError::AllEndpointsExhausted { attempted, .. }) => {
//!         eprintln!("all {attempted} endpoints failed")
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod config;
mod endpoint;
mod resolve;
mod rpc;
mod storage;

pub use config::ConfigError;
pub use endpoint::EndpointError;
pub use resolve::ResolveError;
pub use rpc::RpcError;
pub use storage::StorageError;

/// Unified error type for all supplyscan operations.
///
/// All module-specific error types convert into `SupplyscanError` via `From`,
/// so `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SupplyscanError {
    /// Error from metadata resolution.
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error from the token store.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Error building an RPC connection.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error loading configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
