// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry point.
//!
//! ```text
//! supplyscan <address> <chain_key>   resolve and print token metadata as JSON
//! supplyscan chains                  list known chain keys
//! ```

use anyhow::{bail, Context};
use tracing::info;

use crate::{MetadataResolver, ResolverConfig};

const USAGE: &str = "usage: supplyscan <address> <chain_key> | supplyscan chains";

/// Main entry point for the application.
pub async fn run<I>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    // Honors a .env file in the working directory
    let config = ResolverConfig::from_env().context("Failed to load configuration")?;
    let resolver = MetadataResolver::new(config);

    match args.as_slice() {
        [command] if command == "chains" => {
            for key in resolver.registry().keys() {
                println!("{key}\t{}", resolver.registry().display_name(key));
            }
            Ok(())
        }
        [address, chain_key] => {
            info!(address = %address, chain_key = %chain_key, "Resolving token metadata");
            let metadata = resolver.resolve_token_metadata(address, chain_key).await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(())
        }
        _ => bail!(USAGE),
    }
}
