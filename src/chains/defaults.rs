// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Built-in chain table
//!
//! Public endpoints only. Keyed providers are injected by
//! [`ChainRegistry::with_api_keys`](super::ChainRegistry::with_api_keys).

use alloy_chains::Chain;

use super::ChainDescriptor;

/// `(key, display name, chain id, endpoints)` in preference order.
const DEFAULT_CHAINS: &[(&str, &str, u64, &[&str])] = &[
    (
        "eth",
        "Ethereum Mainnet",
        1,
        &["https://cloudflare-eth.com", "https://rpc.ankr.com/eth"],
    ),
    (
        "goerli",
        "Ethereum Goerli",
        5,
        &["https://rpc.ankr.com/eth_goerli"],
    ),
    (
        "sepolia",
        "Ethereum Sepolia",
        11_155_111,
        &["https://rpc.ankr.com/eth_sepolia"],
    ),
    (
        "polygon",
        "Polygon Mainnet",
        137,
        &["https://polygon-rpc.com", "https://rpc.ankr.com/polygon"],
    ),
    (
        "mumbai",
        "Polygon Mumbai",
        80_001,
        &["https://rpc.ankr.com/polygon_mumbai"],
    ),
    (
        "bsc",
        "BSC Mainnet",
        56,
        &["https://bsc-dataseed.binance.org", "https://rpc.ankr.com/bsc"],
    ),
    (
        "bsc-testnet",
        "BSC Testnet",
        97,
        &["https://rpc.ankr.com/bsc_testnet"],
    ),
    (
        "avalanche",
        "Avalanche C-Chain",
        43_114,
        &[
            "https://api.avax.network/ext/bc/C/rpc",
            "https://rpc.ankr.com/avalanche",
        ],
    ),
    (
        "fuji",
        "Avalanche Fuji",
        43_113,
        &["https://rpc.ankr.com/avalanche_fuji"],
    ),
    (
        "fantom",
        "Fantom Opera",
        250,
        &["https://rpc.ankr.com/fantom"],
    ),
    (
        "arbitrum",
        "Arbitrum One",
        42_161,
        &["https://arb1.arbitrum.io/rpc", "https://rpc.ankr.com/arbitrum"],
    ),
    (
        "arbitrum-goerli",
        "Arbitrum Goerli",
        421_613,
        &["https://rpc.ankr.com/arbitrum_goerli"],
    ),
    (
        "optimism",
        "Optimism",
        10,
        &["https://mainnet.optimism.io", "https://rpc.ankr.com/optimism"],
    ),
    (
        "optimism-goerli",
        "Optimism Goerli",
        420,
        &["https://rpc.ankr.com/optimism_goerli"],
    ),
    (
        "moonbeam",
        "Moonbeam",
        1284,
        &["https://rpc.ankr.com/moonbeam"],
    ),
    (
        "moonriver",
        "Moonriver",
        1285,
        &["https://rpc.ankr.com/moonriver"],
    ),
    (
        "aurora",
        "Aurora",
        1_313_161_554,
        &["https://mainnet.aurora.dev", "https://rpc.ankr.com/aurora"],
    ),
    (
        "celo",
        "Celo",
        42_220,
        &["https://forno.celo.org", "https://rpc.ankr.com/celo"],
    ),
    (
        "klaytn",
        "Klaytn",
        8217,
        &["https://public-node-api.klaytn.net/v1/cypress"],
    ),
    (
        "harmony",
        "Harmony (One)",
        1_666_600_000,
        &["https://rpc.ankr.com/harmony"],
    ),
    (
        "cronos",
        "Cronos",
        25,
        &["https://evm-cronos.crypto.org", "https://rpc.ankr.com/cronos"],
    ),
    (
        "metis",
        "Metis Andromeda",
        1088,
        &[
            "https://andromeda.metis.io/?owner=1088",
            "https://rpc.ankr.com/metis",
        ],
    ),
    (
        "okc",
        "OKC (OKExChain)",
        66,
        &["https://exchainrpc.okex.org"],
    ),
    (
        "zksync",
        "zkSync Era",
        324,
        &["https://mainnet.era.zksync.io"],
    ),
    ("base", "Base", 8453, &["https://mainnet.base.org"]),
    (
        "evmos",
        "Evmos",
        9001,
        &["https://evm.evmos.org:8545", "https://rpc.ankr.com/evmos"],
    ),
    (
        "palm",
        "Palm",
        11_297_108_109,
        &["https://palm-mainnet.infura.io"],
    ),
    (
        "boba",
        "Boba Network",
        288,
        &["https://mainnet.boba.network"],
    ),
    (
        "telos",
        "Telos EVM",
        40,
        &["https://mainnet.telos.net/evm"],
    ),
];

/// Descriptors for every built-in chain, in table order.
pub(crate) fn default_descriptors() -> impl Iterator<Item = ChainDescriptor> {
    DEFAULT_CHAINS
        .iter()
        .map(|(key, display_name, chain_id, endpoints)| {
            ChainDescriptor::new(
                *key,
                *display_name,
                Chain::from_id(*chain_id),
                endpoints.iter().map(|url| url.to_string()).collect(),
            )
        })
}
