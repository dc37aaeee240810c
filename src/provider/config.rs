// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

/// Configuration for creating a single-endpoint provider
///
/// # Example
///
/// ```rust,ignore
/// use supplyscan::provider::ProviderConfig;
///
/// let config = ProviderConfig::new("https://rpc.ankr.com/eth").without_logging();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// RPC endpoint URL
    pub url: String,
    /// Whether requests go through the tracing [`LoggingLayer`](crate::transport::LoggingLayer)
    pub logging_enabled: bool,
}

impl ProviderConfig {
    /// Create a new provider configuration with the specified URL
    ///
    /// RPC logging is enabled by default.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            logging_enabled: true,
        }
    }

    /// Enable or disable RPC request logging
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Disable RPC request logging
    #[must_use]
    pub fn without_logging(self) -> Self {
        self.with_logging(false)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("http://localhost:8545")
    }
}
