// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fixed branding overlay

use crate::config::constants::branding::{MEDIAXR_LOGO, MEDIAXR_NAME, MEDIAXR_SYMBOL};
use crate::metadata::TokenMetadata;

/// Name, symbol and logo forced onto a token's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandingPreset {
    /// Name to apply
    pub name: String,
    /// Symbol to apply
    pub symbol: String,
    /// Logo URL to apply
    pub logo: String,
}

impl BrandingPreset {
    /// The MEDIAXR / RXR preset.
    #[must_use]
    pub fn mediaxr() -> Self {
        Self {
            name: MEDIAXR_NAME.to_string(),
            symbol: MEDIAXR_SYMBOL.to_string(),
            logo: MEDIAXR_LOGO.to_string(),
        }
    }

    /// Overwrite name, symbol and logo; decimals and total supply are kept.
    pub fn apply(&self, metadata: &mut TokenMetadata) {
        metadata.name = Some(self.name.clone());
        metadata.symbol = Some(self.symbol.clone());
        metadata.logo = Some(self.logo.clone());
    }
}

impl Default for BrandingPreset {
    fn default() -> Self {
        Self::mediaxr()
    }
}
