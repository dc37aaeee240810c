// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token record types

use alloy_primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metadata::TokenMetadata;

/// A registered token contract.
///
/// `(address, chain_key)` is unique across the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// Store-assigned id
    pub id: u64,
    /// Contract address
    pub address: Address,
    /// Chain key, e.g. `"eth"`
    pub chain_key: String,
    /// Display name of the chain
    pub chain_name: String,
    /// Operator-entered supply figure, or the fetched total supply
    pub supply_input: Option<String>,
    /// Last known metadata
    pub metadata: Option<TokenMetadata>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// A record about to be inserted; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTokenRecord {
    /// Contract address
    pub address: Address,
    /// Chain key
    pub chain_key: String,
    /// Display name of the chain
    pub chain_name: String,
    /// Operator-entered supply figure
    pub supply_input: Option<String>,
    /// Initial metadata
    pub metadata: Option<TokenMetadata>,
}

/// Input to [`TokenRegistrar::register`](super::TokenRegistrar::register).
///
/// Deserializes from the JSON body the HTTP layer receives
/// (`{"address": ..., "chainKey": ..., "fetchOnchain": true}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewTokenRequest {
    /// Contract address as typed by the operator
    pub address: String,
    /// Chain key
    pub chain_key: String,
    /// Display name; the registry's name for the chain when absent
    pub chain_name: Option<String>,
    /// Operator-entered supply figure
    pub supply_input: Option<String>,
    /// Resolve metadata on-chain before storing
    pub fetch_onchain: bool,
    /// Overlay the branding preset
    #[serde(alias = "applyMediaXr")]
    pub apply_branding: bool,
}

impl NewTokenRequest {
    /// Create a request with no on-chain fetch and no branding.
    pub fn new(address: impl Into<String>, chain_key: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            chain_key: chain_key.into(),
            ..Self::default()
        }
    }

    /// Set the chain display name.
    pub fn with_chain_name(mut self, chain_name: impl Into<String>) -> Self {
        self.chain_name = Some(chain_name.into());
        self
    }

    /// Set the supply figure.
    pub fn with_supply_input(mut self, supply_input: impl Into<String>) -> Self {
        self.supply_input = Some(supply_input.into());
        self
    }

    /// Resolve metadata on-chain before storing.
    pub fn fetch_onchain(mut self) -> Self {
        self.fetch_onchain = true;
        self
    }

    /// Overlay the branding preset.
    pub fn with_branding(mut self) -> Self {
        self.apply_branding = true;
        self
    }
}

/// Partial update of a stored record; `None` keeps the stored value.
///
/// `metadata`, when present, replaces the stored metadata wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenUpdate {
    /// New contract address
    pub address: Option<String>,
    /// New chain key
    pub chain_key: Option<String>,
    /// New chain display name
    pub chain_name: Option<String>,
    /// New supply figure
    pub supply_input: Option<String>,
    /// Replacement metadata
    pub metadata: Option<TokenMetadata>,
}

/// Outcome of a registration or refresh.
///
/// Metadata resolution failures do not abort the operation; they are reported
/// here alongside the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// The record as persisted
    pub record: TokenRecord,
    /// Non-fatal problems, e.g. a failed on-chain fetch
    pub warnings: Vec<String>,
}
