// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain registry and endpoint override merging
//!
//! The registry maps a short chain key (`"eth"`, `"polygon"`, `"bsc-testnet"`)
//! to a display name, an EIP-155 chain and an ordered list of RPC endpoints.
//! Operators adjust those lists at resolution time with
//! [`EndpointOverrides`].

mod defaults;
mod overrides;
mod registry;

pub use overrides::EndpointOverrides;
pub(crate) use overrides::split_endpoint_list;
pub use registry::{ApiKeys, ChainDescriptor, ChainRegistry};
