// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading configuration.

/// Configuration values that could not be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The `RPC_OVERRIDES` JSON document is malformed.
    #[error("Invalid endpoint overrides in {source_name}")]
    InvalidOverrides {
        /// Where the document came from (env var name, file path)
        source_name: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A millisecond duration variable is not an unsigned integer.
    #[error("Invalid duration in {var}: {value:?}")]
    InvalidDuration {
        /// Environment variable name
        var: String,
        /// The offending value
        value: String,
    },
}
