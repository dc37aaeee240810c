// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token metadata record

use std::str::FromStr;

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// ERC-20 style metadata for one token contract.
///
/// Every field is optional. An all-`None` value is valid (nothing known yet)
/// and is distinct from a failed resolution.
///
/// `total_supply` is kept as a base-10 string so that full `uint256` range
/// values survive serialization to JSON clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    /// `name()` result
    pub name: Option<String>,
    /// `symbol()` result
    pub symbol: Option<String>,
    /// `decimals()` result
    pub decimals: Option<u8>,
    /// `totalSupply()` result as a decimal string
    pub total_supply: Option<String>,
    /// Logo URL
    pub logo: Option<String>,
}

impl TokenMetadata {
    /// Whether this result is worth returning to a caller.
    ///
    /// Decimals alone do not count: nearly any contract can be coaxed into
    /// returning a small integer.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.name.is_some() || self.symbol.is_some() || self.total_supply.is_some()
    }

    /// Whether no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay every populated field of `other` onto `self`.
    ///
    /// Fields that are `None` in `other` leave `self` untouched.
    pub fn merge(&mut self, other: TokenMetadata) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.symbol.is_some() {
            self.symbol = other.symbol;
        }
        if other.decimals.is_some() {
            self.decimals = other.decimals;
        }
        if other.total_supply.is_some() {
            self.total_supply = other.total_supply;
        }
        if other.logo.is_some() {
            self.logo = other.logo;
        }
    }

    /// Total supply scaled by `decimals` into a human-readable amount.
    ///
    /// Returns `None` when either field is missing or the supply string is not
    /// a valid `uint256`. Any `decimals` value up to `u8::MAX` scales exactly,
    /// including those where `10^decimals` does not fit a `uint256`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use bigdecimal::BigDecimal;
    /// use supplyscan::TokenMetadata;
    ///
    /// let metadata = TokenMetadata {
    ///     decimals: Some(6),
    ///     total_supply: Some("1500000".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(metadata.normalized_supply(), Some(BigDecimal::from_str("1.5").unwrap()));
    /// ```
    #[must_use]
    pub fn normalized_supply(&self) -> Option<BigDecimal> {
        let raw = U256::from_str_radix(self.total_supply.as_deref()?, 10).ok()?;
        let decimals = self.decimals?;

        BigDecimal::from_str(&format!("{raw}e-{decimals}")).ok()
    }
}
