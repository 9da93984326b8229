//! Tests against the live HistoGIS, GeoNames, GND and Wikidata services.
//!
//! Run with `cargo test -- --ignored`.

use histogis::{GazetteerClient, GazetteerConfig, LookupOptions};
use tracing_subscriber::EnvFilter;

const LINZ: &str = "https://www.geonames.org/2772400/";

/// Builds a client from `HISTOGIS_URL` (if set), logging per `RUST_LOG`.
fn client() -> GazetteerClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    GazetteerClient::with_config(GazetteerConfig::from_env()).expect("Could not build client")
}

#[test]
#[ignore = "requires network access"]
fn live_service_is_reachable() {
    assert!(client().check_reachable());
}

#[test]
#[ignore = "requires network access"]
fn live_dated_lookup_has_name() {
    let item = client()
        .resolve(LINZ, None, &LookupOptions::new().with_when("1860-12-12"))
        .expect("resolve failed");
    assert!(item.contains_key("name"));
    assert!(!item.contains_key("features"));
}

#[test]
#[ignore = "requires network access"]
fn live_polygon_lookup_has_features() {
    let item = client()
        .resolve(
            LINZ,
            None,
            &LookupOptions::new().with_when("1860-12-12").with_polygon(true),
        )
        .expect("resolve failed");
    assert!(!item.contains_key("name"));
    assert!(item.contains_key("features"));
}

#[test]
#[ignore = "requires network access"]
fn live_undated_polygon_lookup_has_features() {
    let item = client()
        .resolve(LINZ, None, &LookupOptions::new().without_when().with_polygon(true))
        .expect("resolve failed");
    assert!(!item.contains_key("name"));
    assert!(item.contains_key("features"));
}

#[test]
#[ignore = "requires network access"]
fn live_count_is_positive() {
    assert!(client().count().expect("count failed") > 0);
}
