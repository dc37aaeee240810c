// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token registration
//!
//! Records, their storage seam, the branding overlay and the
//! [`TokenRegistrar`] service tying them to metadata resolution.

mod branding;
mod record;
mod registrar;
mod store;

pub use branding::BrandingPreset;
pub use record::{NewTokenRecord, NewTokenRequest, Registration, TokenRecord, TokenUpdate};
pub use registrar::TokenRegistrar;
pub use store::{MemoryTokenStore, TokenStore};
