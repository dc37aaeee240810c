// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token address validation

use std::str::FromStr;

use alloy_primitives::Address;

use crate::errors::ResolveError;

/// Parse a token contract address.
///
/// Only the canonical form is accepted: `0x` followed by exactly 40 hex
/// characters, in any letter case. Mixed-case input is not checksum-verified.
///
/// # Errors
///
/// Returns [`ResolveError::InvalidAddress`] for anything else, including
/// unprefixed or padded input.
///
/// # Example
///
/// ```rust
/// use supplyscan::parse_token_address;
///
/// assert!(parse_token_address("0xdAC17F958D2ee523a2206206994597C13D831ec7").is_ok());
/// assert!(parse_token_address("dAC17F958D2ee523a2206206994597C13D831ec7").is_err());
/// ```
pub fn parse_token_address(input: &str) -> Result<Address, ResolveError> {
    let well_formed = input.len() == 42
        && input.starts_with("0x")
        && input[2..].bytes().all(|b| b.is_ascii_hexdigit());

    if !well_formed {
        return Err(ResolveError::invalid_address(input));
    }

    Address::from_str(input).map_err(|_| ResolveError::invalid_address(input))
}
