//! Spatial lookup request building and response shaping.

mod common;

use common::{mock_client, where_was, MockHttpClient};
use histogis::spatial::empty_result;
use histogis::{HistogisError, LookupOptions, SpatialResult};

fn linz_client() -> histogis::GazetteerClient<MockHttpClient> {
    mock_client(MockHttpClient::new().with_fixture(&where_was(), "where_was_linz_1860.json"))
}

#[test]
fn test_dated_query_returns_first_feature_properties() {
    let client = linz_client();
    let result = client
        .query("48.2894", "14.304", &LookupOptions::new().with_when("1860-12-12"))
        .expect("query failed");

    assert!(result.contains_key("name"));
    assert!(!result.contains_key("features"));
    assert_eq!(result.get("name").and_then(|v| v.as_str()), Some("Oberösterreich"));
    assert_eq!(
        client.http().requests(),
        vec![format!(
            "{}?lat=48.2894&lng=14.304&when=1860-12-12&format=json",
            where_was()
        )]
    );
}

#[test]
fn test_polygon_query_returns_collection() {
    let client = linz_client();
    let result = client
        .query("48.2894", "14.304", &LookupOptions::new().with_polygon(true))
        .expect("query failed");

    assert!(matches!(result, SpatialResult::Collection(_)));
    assert!(result.contains_key("features"));
    assert!(!result.contains_key("name"));
    assert_eq!(
        result.get("features").and_then(|f| f.as_array()).map(Vec::len),
        Some(2)
    );
}

#[test]
fn test_undated_polygon_query_omits_when() {
    let client = linz_client();
    let result = client
        .query(
            "48.2894",
            "14.304",
            &LookupOptions::new().without_when().with_polygon(true),
        )
        .expect("query failed");

    assert!(result.contains_key("features"));
    let requested = &client.http().requests()[0];
    assert!(!requested.contains("when="));
    assert!(requested.ends_with("&format=json"));
}

#[test]
fn test_no_match_returns_empty_sentinel() {
    let client =
        mock_client(MockHttpClient::new().with_fixture(&where_was(), "where_was_empty.json"));
    let result = client
        .query("0", "0", &LookupOptions::new().with_when("0100-01-01"))
        .expect("query failed");

    assert_eq!(result, SpatialResult::Empty);
    assert_eq!(result.into_value(), empty_result());
}

#[test]
fn test_failed_lookup_is_not_empty() {
    let client = mock_client(MockHttpClient::new().with_status(&where_was(), 500));
    let err = client
        .query("48.2894", "14.304", &LookupOptions::new())
        .unwrap_err();
    assert!(matches!(err, HistogisError::Transport(_)));

    let client = mock_client(MockHttpClient::new().with_body(&where_was(), "not json"));
    let err = client
        .query("48.2894", "14.304", &LookupOptions::new())
        .unwrap_err();
    assert!(matches!(err, HistogisError::Transport(_)));
}

#[test]
fn test_unvalidated_date_is_forwarded() {
    let client = linz_client();
    client
        .query("48.2894", "14.304", &LookupOptions::new().with_when("last tuesday"))
        .expect("query failed");
    assert!(client.http().requests()[0].contains("when=last+tuesday"));
}
