// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for multi-endpoint metadata resolution
//!
//! These tests drive [`MetadataResolver`] against in-memory endpoints and
//! check which endpoints were contacted, in what order, and within what time.

mod helpers;

use alloy_primitives::{address, Address, U256};
use helpers::{resolver, Answers, MockEndpoint};
use supplyscan::{EndpointOverrides, ResolveError, TokenMetadata};
use tokio::time::Instant;

const DEAD: Address = address!("000000000000000000000000000000000000dEaD");

fn dead_token() -> Answers {
    Answers::token("Dead Token", "DEAD", 18, 1_000_000_000_000_000_000_000)
}

/// A healthy first endpoint answers alone; the second is never contacted
#[tokio::test]
async fn test_healthy_primary_short_circuits() {
    let ok = MockEndpoint::healthy("http://mock-ok", dead_token());
    let down = MockEndpoint::down("http://mock-down");
    let resolver = resolver(&["http://mock-ok", "http://mock-down"], &[&ok, &down]);

    let metadata = resolver
        .resolve_token_metadata("0x000000000000000000000000000000000000dEaD", "eth")
        .await
        .unwrap();

    assert_eq!(
        metadata,
        TokenMetadata {
            name: Some("Dead Token".into()),
            symbol: Some("DEAD".into()),
            decimals: Some(18),
            total_supply: Some("1000000000000000000000".into()),
            logo: None,
        }
    );
    assert_eq!(down.calls(), 0, "mock-down must never be contacted");
    assert_eq!(ok.probes(), 1);
}

/// Every endpoint dead: terminal failure without a single metadata read
#[tokio::test]
async fn test_all_endpoints_down_exhausts_without_reads() {
    let down1 = MockEndpoint::down("http://down-1");
    let down2 = MockEndpoint::down("http://down-2");
    let resolver = resolver(&["http://down-1", "http://down-2"], &[&down1, &down2]);

    let err = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ResolveError::AllEndpointsExhausted {
            chain_key: "eth".into(),
            attempted: 2,
        }
    );
    assert_eq!(down1.reads() + down2.reads(), 0);
    // At most once through the pool and once on its own
    assert!(down1.probes() <= 2, "down-1 checked {} times", down1.probes());
    assert!(down2.probes() <= 2, "down-2 checked {} times", down2.probes());
}

/// An endpoint rejected once inside the pool is retried on its own
#[tokio::test]
async fn test_rate_limited_endpoint_recovers_on_sequential_pass() {
    let flaky = MockEndpoint::flaky_start("http://flaky", dead_token());
    let resolver = resolver(&["http://flaky"], &[&flaky]);

    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(metadata.symbol.as_deref(), Some("DEAD"));
    assert_eq!(flaky.probes(), 2);
    assert!(flaky.reads() > 0);
}

/// A dead primary is skipped and the next live endpoint answers
#[tokio::test]
async fn test_dead_primary_falls_through_to_secondary() {
    let down = MockEndpoint::down("http://down");
    let ok = MockEndpoint::healthy("http://ok", dead_token());
    let resolver = resolver(&["http://down", "http://ok"], &[&down, &ok]);

    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(metadata.symbol.as_deref(), Some("DEAD"));
    assert_eq!(down.probes(), 1);
}

/// An endpoint that answers only `symbol()` still yields a usable result
#[tokio::test]
async fn test_symbol_only_endpoint_is_success() {
    let partial = MockEndpoint::healthy(
        "http://partial",
        Answers {
            symbol: Some("XYZ".into()),
            ..Answers::default()
        },
    );
    let resolver = resolver(&["http://partial"], &[&partial]);

    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(
        metadata,
        TokenMetadata {
            symbol: Some("XYZ".into()),
            ..TokenMetadata::default()
        }
    );
}

/// Decimals alone do not count as a usable answer
#[tokio::test]
async fn test_decimals_only_is_not_usable() {
    let decimals_only = MockEndpoint::healthy(
        "http://decimals-only",
        Answers {
            decimals: Some(18),
            ..Answers::default()
        },
    );
    let resolver = resolver(&["http://decimals-only"], &[&decimals_only]);

    let err = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::AllEndpointsExhausted { attempted: 1, .. }));
}

/// Empty strings from a contract are treated as missing
#[tokio::test]
async fn test_empty_strings_are_missing() {
    let blank = MockEndpoint::healthy(
        "http://blank",
        Answers {
            name: Some(String::new()),
            symbol: Some(String::new()),
            decimals: Some(18),
            total_supply: Some(U256::from(5u8)),
        },
    );
    let resolver = resolver(&["http://blank"], &[&blank]);

    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(metadata.name, None);
    assert_eq!(metadata.symbol, None);
    assert_eq!(metadata.total_supply.as_deref(), Some("5"));
}

/// A live endpoint with nothing to say is passed over for the next one
#[tokio::test]
async fn test_alive_but_empty_endpoint_falls_through() {
    let empty = MockEndpoint::empty("http://empty");
    let ok = MockEndpoint::healthy("http://ok", dead_token());
    let resolver = resolver(&["http://empty", "http://ok"], &[&empty, &ok]);

    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(metadata.name.as_deref(), Some("Dead Token"));
    assert!(ok.reads() > 0);
}

/// Hanging endpoints are bounded by the probe timeout
#[tokio::test(start_paused = true)]
async fn test_hanging_endpoints_respect_latency_bound() {
    let hang1 = MockEndpoint::hanging("http://hang-1");
    let hang2 = MockEndpoint::hanging("http://hang-2");
    let resolver = resolver(&["http://hang-1", "http://hang-2"], &[&hang1, &hang2]);
    let config = resolver.config().clone();
    let bound = (config.probe_timeout + config.call_timeout) * 2;

    let started = Instant::now();
    let err = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, ResolveError::AllEndpointsExhausted { attempted: 2, .. }));
    assert!(elapsed <= bound, "took {elapsed:?}, bound {bound:?}");
    assert_eq!(hang1.reads() + hang2.reads(), 0, "no reads after a timed out probe");
}

/// Endpoints that pass the liveness check but never answer a read
#[tokio::test(start_paused = true)]
async fn test_stalled_reads_respect_latency_bound() {
    let stalled1 = MockEndpoint::stalled("http://stalled-1");
    let stalled2 = MockEndpoint::stalled("http://stalled-2");
    let resolver = resolver(
        &["http://stalled-1", "http://stalled-2"],
        &[&stalled1, &stalled2],
    );
    let config = resolver.config().clone();
    let bound = (config.probe_timeout + config.call_timeout) * 2;

    let started = Instant::now();
    let err = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, ResolveError::AllEndpointsExhausted { attempted: 2, .. }));
    assert!(elapsed <= bound, "took {elapsed:?}, bound {bound:?}");
    assert!(stalled1.reads() > 0);
}

/// A hanging primary delays but does not prevent success
#[tokio::test(start_paused = true)]
async fn test_hanging_primary_then_healthy_secondary() {
    let hang = MockEndpoint::hanging("http://hang");
    let ok = MockEndpoint::healthy("http://ok", dead_token());
    let resolver = resolver(&["http://hang", "http://ok"], &[&hang, &ok]);
    let config = resolver.config().clone();

    let started = Instant::now();
    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(metadata.symbol.as_deref(), Some("DEAD"));
    assert!(started.elapsed() <= config.probe_timeout + config.call_timeout);
}

/// Invalid address and unknown chain fail before any network call
#[tokio::test]
async fn test_fail_fast_errors_make_no_calls() {
    let ok = MockEndpoint::healthy("http://ok", dead_token());
    let resolver = resolver(&["http://ok"], &[&ok]);

    for input in ["", "0x", "dEaD", "0xZZ0000000000000000000000000000000000dEaD"] {
        let err = resolver.resolve_token_metadata(input, "eth").await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidAddress { .. }), "{input:?}");
    }

    let err = resolver
        .resolve(DEAD, "does-not-exist", &EndpointOverrides::new())
        .await
        .unwrap_err();
    assert_eq!(err, ResolveError::unknown_chain("does-not-exist"));
    assert!(err.is_fail_fast());

    assert_eq!(ok.calls(), 0);
    assert!(resolver.cache().is_empty());
}

/// A registered chain with no endpoints at all
#[tokio::test]
async fn test_empty_endpoint_list_is_no_endpoints() {
    let resolver = resolver(&[], &[]);

    let err = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap_err();

    assert_eq!(err, ResolveError::no_endpoints("eth"));
}

/// Unreachable URLs are skipped
#[tokio::test]
async fn test_unconnectable_url_is_skipped() {
    let ok = MockEndpoint::healthy("http://ok", dead_token());
    let resolver = resolver(&["not a url", "http://ok"], &[&ok]);

    let metadata = resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();

    assert_eq!(metadata.name.as_deref(), Some("Dead Token"));
}

/// Repeated resolution gives the same answer and reuses the pooled connection
#[tokio::test]
async fn test_resolution_is_idempotent() {
    let ok = MockEndpoint::healthy("http://ok", dead_token());
    let resolver = resolver(&["http://ok"], &[&ok]);
    let overrides = EndpointOverrides::new();

    let first = resolver.resolve(DEAD, "eth", &overrides).await.unwrap();
    let pool = resolver.cache().get("eth").unwrap();
    let second = resolver.resolve(DEAD, "eth", &overrides).await.unwrap();

    assert_eq!(first, second);
    assert!(std::sync::Arc::ptr_eq(&pool, &resolver.cache().get("eth").unwrap()));
    assert_eq!(resolver.cache().len(), 1);
}

/// A per-chain override replaces the registry's endpoints
#[tokio::test]
async fn test_chain_override_replaces_defaults() {
    let default = MockEndpoint::healthy("http://default", dead_token());
    let custom = MockEndpoint::healthy("http://custom", Answers::token("Custom", "CST", 6, 42));
    let resolver = resolver(&["http://default"], &[&default, &custom]);

    let overrides = EndpointOverrides::new().with_chain("eth", ["http://custom"]);
    let metadata = resolver.resolve(DEAD, "eth", &overrides).await.unwrap();

    assert_eq!(metadata.symbol.as_deref(), Some("CST"));
    assert_eq!(default.calls(), 0);
}

/// Global overrides take priority over the chain's own list
#[tokio::test]
async fn test_global_override_is_tried_first() {
    let default = MockEndpoint::healthy("http://default", dead_token());
    let global = MockEndpoint::healthy("http://global", Answers::token("Global", "GLB", 18, 1));
    let resolver = resolver(&["http://default"], &[&default, &global]);

    let overrides = EndpointOverrides::new().with_global(["http://global"]);
    let metadata = resolver.resolve(DEAD, "eth", &overrides).await.unwrap();

    assert_eq!(metadata.symbol.as_deref(), Some("GLB"));
    assert_eq!(default.calls(), 0);
}

/// Changing overrides rebuilds the chain's pooled connection
#[tokio::test]
async fn test_changed_overrides_rebuild_pool() {
    let default = MockEndpoint::healthy("http://default", dead_token());
    let custom = MockEndpoint::healthy("http://custom", Answers::token("Custom", "CST", 6, 42));
    let resolver = resolver(&["http://default"], &[&default, &custom]);

    resolver
        .resolve(DEAD, "eth", &EndpointOverrides::new())
        .await
        .unwrap();
    assert_eq!(resolver.cache().get("eth").unwrap().urls(), vec!["http://default"]);

    let overrides = EndpointOverrides::new().with_chain("eth", ["http://custom"]);
    resolver.resolve(DEAD, "eth", &overrides).await.unwrap();
    assert_eq!(resolver.cache().get("eth").unwrap().urls(), vec!["http://custom"]);
}

/// A chain known only through a per-chain override is resolvable
#[tokio::test]
async fn test_override_only_chain() {
    let custom = MockEndpoint::healthy("http://custom", Answers::token("Custom", "CST", 6, 42));
    let resolver = resolver(&[], &[&custom]);

    let overrides = EndpointOverrides::new().with_chain("devnet", ["http://custom"]);
    let metadata = resolver.resolve(DEAD, "devnet", &overrides).await.unwrap();

    assert_eq!(metadata.name.as_deref(), Some("Custom"));
}
