// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Operator-supplied endpoint overrides
//!
//! Overrides are an explicit value handed to each resolution. Merging is
//! recomputed every time, so swapping the value takes effect on the next call.
//!
//! # Merge rules
//!
//! 1. A non-empty per-chain list replaces the registry default for that chain.
//! 2. A non-empty global list is prepended.
//! 3. Duplicates are dropped, keeping the first occurrence.
//!
//! # Example
//!
//! ```rust
//! use supplyscan::EndpointOverrides;
//!
//! let overrides = EndpointOverrides::from_json(
//!     r#"{"global": ["https://g.example"], "perChain": {"eth": ["https://b.example"]}}"#,
//! )
//! .unwrap();
//!
//! let defaults = vec!["https://a.example".to_string()];
//! assert_eq!(
//!     overrides.endpoints_for("eth", &defaults),
//!     vec!["https://g.example", "https://b.example"],
//! );
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Global and per-chain endpoint overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointOverrides {
    /// Endpoints prepended to every chain's list
    pub global: Vec<String>,
    /// Endpoint lists that replace a chain's registry defaults
    pub per_chain: HashMap<String, Vec<String>>,
}

impl EndpointOverrides {
    /// Create empty overrides (registry defaults apply unchanged).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse overrides from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverrides`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::InvalidOverrides {
            source_name: "json".to_string(),
            source,
        })
    }

    /// Set the global endpoint list.
    #[must_use]
    pub fn with_global<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global = endpoints.into_iter().map(Into::into).collect();
        self
    }

    /// Set the endpoint list for one chain.
    #[must_use]
    pub fn with_chain<I, S>(mut self, chain_key: impl Into<String>, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.per_chain.insert(
            chain_key.into(),
            endpoints.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Whether these overrides change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.per_chain.values().all(Vec::is_empty)
    }

    /// The non-empty per-chain override for `chain_key`, if any.
    #[must_use]
    pub fn chain_override(&self, chain_key: &str) -> Option<&[String]> {
        self.per_chain
            .get(chain_key)
            .filter(|endpoints| !endpoints.is_empty())
            .map(Vec::as_slice)
    }

    /// Layer `other` on top of `self`.
    ///
    /// Non-empty per-chain lists in `other` replace ours; `other`'s global
    /// endpoints are appended after ours.
    pub fn extend(&mut self, other: EndpointOverrides) {
        self.global.extend(other.global);
        for (chain_key, endpoints) in other.per_chain {
            if !endpoints.is_empty() {
                self.per_chain.insert(chain_key, endpoints);
            }
        }
    }

    /// Merge these overrides with a chain's default endpoint list.
    ///
    /// Blank entries are ignored.
    #[must_use]
    pub fn endpoints_for(&self, chain_key: &str, defaults: &[String]) -> Vec<String> {
        let base = self.chain_override(chain_key).unwrap_or(defaults);

        let mut seen = HashSet::new();
        self.global
            .iter()
            .chain(base)
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .filter(|url| seen.insert(*url))
            .map(str::to_string)
            .collect()
    }
}

/// Split a comma-separated endpoint list, dropping blanks.
pub(crate) fn split_endpoint_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let overrides = EndpointOverrides::new();
        assert_eq!(
            overrides.endpoints_for("eth", &urls(&["A", "B"])),
            urls(&["A", "B"])
        );
        assert!(overrides.is_empty());
    }

    #[test]
    fn per_chain_replaces_and_global_prepends() {
        let overrides = EndpointOverrides::new()
            .with_global(["G"])
            .with_chain("X", ["B"]);
        assert_eq!(overrides.endpoints_for("X", &urls(&["A"])), urls(&["G", "B"]));
    }

    #[test]
    fn empty_per_chain_list_does_not_replace() {
        let overrides = EndpointOverrides::new().with_chain("eth", Vec::<String>::new());
        assert_eq!(overrides.endpoints_for("eth", &urls(&["A"])), urls(&["A"]));
        assert!(overrides.chain_override("eth").is_none());
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let overrides = EndpointOverrides::new().with_global(["B", "G"]);
        assert_eq!(
            overrides.endpoints_for("eth", &urls(&["A", "B", "G"])),
            urls(&["B", "G", "A"])
        );
    }

    #[test]
    fn parses_camel_case_json() {
        let overrides =
            EndpointOverrides::from_json(r#"{"perChain": {"bsc": ["https://x"]}}"#).unwrap();
        assert!(overrides.global.is_empty());
        assert_eq!(overrides.chain_override("bsc"), Some(&urls(&["https://x"])[..]));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = EndpointOverrides::from_json("{\"global\": 3}").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverrides { .. }));
    }

    #[test]
    fn extend_layers_per_chain_and_appends_global() {
        let mut base = EndpointOverrides::new()
            .with_global(["G1"])
            .with_chain("eth", ["A"]);
        base.extend(
            EndpointOverrides::new()
                .with_global(["G2"])
                .with_chain("eth", ["B"])
                .with_chain("bsc", Vec::<String>::new()),
        );
        assert_eq!(base.global, urls(&["G1", "G2"]));
        assert_eq!(base.chain_override("eth"), Some(&urls(&["B"])[..]));
        assert!(base.chain_override("bsc").is_none());
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(
            split_endpoint_list(" https://a , ,https://b,"),
            urls(&["https://a", "https://b"])
        );
    }
}
