// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building RPC connections.

/// Failures constructing a provider for an endpoint URL.
///
/// These surface from [`EndpointConnector::connect`](crate::provider::EndpointConnector::connect).
/// The resolver treats them like any other dead endpoint and moves on.
///
/// # Examples
///
/// ```rust
/// use supplyscan::RpcError;
///
/// let error = RpcError::ProviderUrlInvalid("not a url".to_string());
/// assert!(error.to_string().contains("not a url"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The endpoint URL could not be parsed.
    #[error("Invalid provider URL: {0}")]
    ProviderUrlInvalid(String),

    /// The provider could not be constructed for a reason other than the URL.
    #[error("Provider connection failed: {0}")]
    ProviderConnectionFailed(String),
}
