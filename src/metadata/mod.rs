// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! On-chain token metadata resolution
//!
//! - [`probe`] - bounded-time `eth_blockNumber` liveness gate
//! - [`read_fields`] - the four ERC-20 reads, concurrently and independently bounded
//! - [`MetadataResolver`] - pooled fast path, then sequential per-endpoint fallback

mod probe;
mod reader;
mod resolver;
mod types;

pub use probe::probe;
pub use reader::read_fields;
pub use resolver::{MetadataResolver, SharedResolver};
pub use types::TokenMetadata;
