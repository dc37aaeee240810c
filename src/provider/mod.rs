// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! RPC connections for metadata resolution
//!
//! This module provides the connection side of resolution:
//! - [`TokenEndpoint`] - The read-only call surface (`eth_blockNumber` plus the
//!   four ERC-20 metadata reads)
//! - [`HttpEndpoint`] / [`HttpConnector`] - JSON-RPC over HTTP via alloy
//! - [`FallbackEndpoint`] - Several endpoints raced in priority order behind
//!   the same trait
//! - [`ProviderCache`] - One pooled connection per chain, rebuilt when the
//!   chain's endpoint list changes
//!
//! # Examples
//!
//! ## Single endpoint
//!
//! ```rust,ignore
//! use supplyscan::provider::{HttpEndpoint, ProviderConfig, TokenEndpoint};
//!
//! let endpoint = HttpEndpoint::connect(&ProviderConfig::new("https://rpc.ankr.com/eth"))?;
//! let symbol = endpoint.symbol(usdt).await?;
//! ```
//!
//! ## Pooled connection
//!
//! ```rust,ignore
//! use supplyscan::provider::{FallbackConfig, HttpConnector, ProviderCache};
//!
//! let cache = ProviderCache::new();
//! let pool = cache.get_or_build("eth", &endpoints, &HttpConnector::default(), &FallbackConfig::default());
//! ```

mod cache;
mod config;
mod endpoint;
mod factory;
mod fallback;

pub use cache::{PooledEndpoint, ProviderCache};
pub use config::ProviderConfig;
pub use endpoint::{EndpointConnector, HttpConnector, HttpEndpoint, TokenEndpoint};
pub use factory::create_http_provider;
pub use fallback::{FallbackConfig, FallbackEndpoint, FallbackMember};
