// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Defaults and well-known constants
//!
//! This module centralizes timing defaults, environment variable names and the
//! branding preset used throughout the supplyscan crate.

use std::time::Duration;

/// Deadline for the `eth_blockNumber` liveness probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(2500);

/// Deadline for each individual metadata read
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_millis(7000);

/// Stall timeout of the first member of a pooled connection
pub const DEFAULT_STALL_TIMEOUT: Duration = Duration::from_millis(750);

/// Added to the stall timeout per position in a pooled connection
pub const DEFAULT_STALL_STEP: Duration = Duration::from_millis(500);

/// Environment variable names read by [`ResolverConfig::from_env`](super::ResolverConfig::from_env)
pub mod env {
    /// JSON document `{"global": [...], "perChain": {...}}`
    pub const RPC_OVERRIDES: &str = "RPC_OVERRIDES";
    /// Comma-separated endpoints prepended for every chain
    pub const RPC_OVERRIDES_GLOBAL: &str = "RPC_OVERRIDES_GLOBAL";
    /// Prefix of per-chain comma-separated endpoint lists, e.g. `RPC_OVERRIDES_BSC_TESTNET`
    pub const RPC_OVERRIDES_CHAIN_PREFIX: &str = "RPC_OVERRIDES_";
    /// Alchemy API key
    pub const ALCHEMY_API_KEY: &str = "ALCHEMY_API_KEY";
    /// Infura project id
    pub const INFURA_PROJECT_ID: &str = "INFURA_PROJECT_ID";
    /// Probe deadline in milliseconds
    pub const PROBE_TIMEOUT_MS: &str = "PROBE_TIMEOUT_MS";
    /// Per-call deadline in milliseconds
    pub const CALL_TIMEOUT_MS: &str = "CALL_TIMEOUT_MS";
    /// Pooled connection stall timeout in milliseconds
    pub const STALL_TIMEOUT_MS: &str = "STALL_TIMEOUT_MS";
}

/// The MEDIAXR branding preset
pub mod branding {
    /// Branded token name
    pub const MEDIAXR_NAME: &str = "MEDIAXR";
    /// Branded token symbol
    pub const MEDIAXR_SYMBOL: &str = "RXR";
    /// Branded logo URL
    pub const MEDIAXR_LOGO: &str = "https://musicchain.netlify.app/android-chrome-512x512.png";
}
