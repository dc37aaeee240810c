// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # Supplyscan
//!
//! Multi-chain ERC-20 token registry with fault-tolerant on-chain metadata
//! resolution.
//!
//! Given a contract address and a chain key, supplyscan reads `name`,
//! `symbol`, `decimals` and `totalSupply` from the first live endpoint in the
//! chain's prioritized RPC list. Dead or hanging endpoints are detected with a
//! bounded `eth_blockNumber` probe and skipped without issuing metadata reads.
//!
//! ## Features
//!
//! - **Chain registry**: built-in table of EVM chains and their public RPC
//!   endpoints, extended with keyed Alchemy/Infura endpoints and
//!   operator-supplied overrides
//! - **Metadata resolution**: pooled fast path per chain, then a sequential
//!   probe-and-read scan with bounded worst-case latency
//! - **Token registration**: create, refresh, brand, update, delete and list
//!   token records over a pluggable [`TokenStore`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use supplyscan::{MetadataResolver, ResolverConfig};
//!
//! let resolver = MetadataResolver::new(ResolverConfig::from_env()?);
//! let metadata = resolver
//!     .resolve_token_metadata("0xdAC17F958D2ee523a2206206994597C13D831ec7", "eth")
//!     .await?;
//!
//! println!("{} ({:?} decimals)", metadata.symbol.unwrap_or_default(), metadata.decimals);
//! ```
//!
//! ## Overriding endpoints
//!
//! ```rust,ignore
//! use supplyscan::{EndpointOverrides, MetadataResolver, ResolverConfig};
//!
//! let overrides = EndpointOverrides::new()
//!     .with_global(["https://my-node.example"])
//!     .with_chain("bsc", ["https://bsc-private.example"]);
//!
//! let metadata = resolver.resolve(token, "bsc", &overrides).await?;
//! ```

pub mod bootstrap;
pub mod chains;
pub mod config;
pub mod errors;
pub mod metadata;
pub mod provider;
pub(crate) mod spans;
pub mod tokens;
pub mod transport;
mod validation;

pub use chains::{ApiKeys, ChainDescriptor, ChainRegistry, EndpointOverrides};
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use errors::{
    ConfigError, EndpointError, ResolveError, RpcError, StorageError, SupplyscanError,
};
pub use metadata::{MetadataResolver, SharedResolver, TokenMetadata};
pub use provider::{EndpointConnector, HttpConnector, TokenEndpoint};
pub use tokens::{
    BrandingPreset, MemoryTokenStore, NewTokenRecord, NewTokenRequest, Registration,
    TokenRecord, TokenRegistrar, TokenStore, TokenUpdate,
};
pub use validation::parse_token_address;
