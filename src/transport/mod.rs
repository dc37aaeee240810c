// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transport layer utilities for Alloy providers.
//!
//! [`LoggingLayer`] is a Tower middleware plugged into
//! `alloy_rpc_client::ClientBuilder`. It records every JSON-RPC request with
//! its method, endpoint and duration.
//!
//! No retry or rate-limit layer is installed: a misbehaving endpoint is
//! abandoned for the next one in the chain's list rather than retried.

mod logging;

pub use logging::{LoggingLayer, LoggingService};
