//! Shared test fixtures for the storefront SDK integration tests.
//!
//! Provides a wiremock-backed storefront: helpers mount `appdetails`
//! responses keyed by app id and build an SDK pointed at the mock server.

use serde_json::{json, Map, Value};
use steamstore_sdk::SteamStoreSdk;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an SDK with default options targeting the mock server.
pub fn sdk_for(server: &MockServer) -> SteamStoreSdk {
    SteamStoreSdk::builder()
        .base_url(server.uri())
        .build()
        .unwrap()
}

/// Mount an `appdetails` response body for one app id.
pub async fn mount_listing(server: &MockServer, appid: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path("/appdetails"))
        .and(query_param("appids", appid.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a server-side failure for one app id.
pub async fn mount_error(server: &MockServer, appid: u64, status: u16) {
    Mock::given(method("GET"))
        .and(path("/appdetails"))
        .and(query_param("appids", appid.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Response body with a successful listing for `appid`.
pub fn success_body(appid: u64, data: Value) -> Value {
    let mut root = Map::new();
    root.insert(
        appid.to_string(),
        json!({ "success": true, "data": data }),
    );
    Value::Object(root)
}

/// Response body marked successful but carrying no data payload.
pub fn success_without_data_body(appid: u64) -> Value {
    let mut root = Map::new();
    root.insert(appid.to_string(), json!({ "success": true }));
    Value::Object(root)
}

/// Response body with `success: false` for `appid`.
pub fn failure_body(appid: u64) -> Value {
    let mut root = Map::new();
    root.insert(appid.to_string(), json!({ "success": false }));
    Value::Object(root)
}

/// Minimal DLC listing data with a name and a final price in cents.
pub fn priced_dlc(name: &str, final_cents: u64) -> Value {
    json!({
        "type": "dlc",
        "name": name,
        "price_overview": {
            "currency": "EUR",
            "initial": final_cents,
            "final": final_cents,
            "discount_percent": 0,
            "initial_formatted": "",
            "final_formatted": "",
        },
    })
}
