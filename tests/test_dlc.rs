//! DLC resolution integration tests against a mock storefront.

mod common;

use serde_json::json;
use steamstore_sdk::models::UNKNOWN_NAME;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// empty input
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_empty_input_makes_no_network_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[]).await;

    assert!(resolved.is_empty());
}

// ---------------------------------------------------------------------------
// inclusion rules
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_keeps_successful_listings_only() {
    let server = MockServer::start().await;
    common::mount_listing(&server, 10, common::success_body(10, common::priced_dlc("Soundtrack", 499))).await;
    common::mount_listing(&server, 20, common::failure_body(20)).await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[10, 20]).await;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].appid, 10);
    assert_eq!(resolved[0].name, "Soundtrack");
}

#[tokio::test]
async fn resolve_skips_listing_with_missing_key() {
    let server = MockServer::start().await;
    // The response exists but has no entry for the requested id.
    common::mount_listing(&server, 30, json!({})).await;
    common::mount_listing(&server, 40, common::success_body(40, common::priced_dlc("Artbook", 299))).await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[30, 40]).await;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].appid, 40);
}

#[tokio::test]
async fn resolve_skips_successful_listing_without_data() {
    let server = MockServer::start().await;
    common::mount_listing(&server, 70, common::success_without_data_body(70)).await;
    common::mount_listing(&server, 80, common::success_body(80, common::priced_dlc("Kept", 199))).await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[70, 80]).await;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].appid, 80);
}

#[tokio::test]
async fn resolve_isolates_transport_failures_per_entry() {
    let server = MockServer::start().await;
    common::mount_listing(&server, 10, common::success_body(10, common::priced_dlc("First", 100))).await;
    common::mount_error(&server, 20, 500).await;
    common::mount_listing(&server, 30, common::success_body(30, common::priced_dlc("Third", 300))).await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[10, 20, 30]).await;

    // The failed id is skipped; siblings before and after survive.
    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved[0].appid, 10);
    assert_eq!(resolved[1].appid, 30);
}

// ---------------------------------------------------------------------------
// field defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_defaults_missing_fields() {
    let server = MockServer::start().await;
    common::mount_listing(&server, 50, common::success_body(50, json!({}))).await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[50]).await;

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].name, UNKNOWN_NAME);
    assert!(resolved[0].header_image.is_none());
    assert!(resolved[0].price_overview.is_none());
}

// ---------------------------------------------------------------------------
// ordering and request shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolve_preserves_input_order() {
    let server = MockServer::start().await;
    for (appid, name) in [(3u64, "C"), (1, "A"), (2, "B")] {
        common::mount_listing(&server, appid, common::success_body(appid, common::priced_dlc(name, 100))).await;
    }

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[3, 1, 2]).await;

    let order: Vec<u64> = resolved.iter().map(|d| d.appid).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[tokio::test]
async fn resolve_sends_locale_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appdetails"))
        .and(query_param("appids", "60"))
        .and(query_param("cc", "fr"))
        .and(query_param("l", "fr"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::success_body(60, common::priced_dlc("Localized", 100))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sdk = common::sdk_for(&server);
    let resolved = sdk.dlc().resolve(&[60]).await;

    assert_eq!(resolved.len(), 1);
}
