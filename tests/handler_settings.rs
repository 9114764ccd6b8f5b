mod common;

use axum::Router;
use axum_test::TestServer;
use salat_times::api::routes::api_routes;
use salat_times::state::AppState;
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app: Router = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_settings_defaults() {
    let state = common::test_state();
    let server = server(state);

    let response = server.get("/api/settings").await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["default_method"], "MWL");
    assert_eq!(json["default_asr_school"], "Shafii");
    assert!(json["default_location"].is_null());
}

#[tokio::test]
async fn test_update_default_method() {
    let state = common::test_state();
    let server = server(state);

    let response = server
        .patch("/api/settings")
        .json(&json!({ "default_method": "egypt" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    // Method names are canonicalized on write
    assert_eq!(json["default_method"], "Egypt");

    let fetched = server.get("/api/settings").await;
    assert_eq!(fetched.json::<serde_json::Value>()["default_method"], "Egypt");
}

#[tokio::test]
async fn test_update_rejects_unknown_method() {
    let state = common::test_state();
    let server = server(state);

    let response = server
        .patch("/api/settings")
        .json(&json!({ "default_method": "Atlantis" }))
        .await;

    response.assert_status_bad_request();

    // Nothing was changed
    let fetched = server.get("/api/settings").await;
    assert_eq!(fetched.json::<serde_json::Value>()["default_method"], "MWL");
}

#[tokio::test]
async fn test_update_default_asr_school() {
    let state = common::test_state();
    let server = server(state);

    let response = server
        .patch("/api/settings")
        .json(&json!({ "default_asr_school": "hanafi" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["default_asr_school"], "Hanafi");
}

#[tokio::test]
async fn test_default_location_set_and_clear() {
    let state = common::test_state();
    common::seed_samarinda(&state).await;
    let server = server(state);

    let set = server
        .patch("/api/settings")
        .json(&json!({ "default_location": "samarinda" }))
        .await;
    set.assert_status_ok();
    assert_eq!(
        set.json::<serde_json::Value>()["default_location"],
        "samarinda"
    );

    let cleared = server
        .patch("/api/settings")
        .json(&json!({ "default_location": null }))
        .await;
    cleared.assert_status_ok();
    assert!(cleared.json::<serde_json::Value>()["default_location"].is_null());
}

#[tokio::test]
async fn test_default_location_must_exist() {
    let state = common::test_state();
    let server = server(state);

    let response = server
        .patch("/api/settings")
        .json(&json!({ "default_location": "nowhere" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_default_method_applies_to_times() {
    let state = common::test_state();
    let server = server(state);

    server
        .patch("/api/settings")
        .json(&json!({ "default_method": "Karachi" }))
        .await
        .assert_status_ok();

    let response = server
        .get("/api/times")
        .add_query_param("date", "2024-03-20")
        .add_query_param("latitude", "-0.502106")
        .add_query_param("longitude", "117.153709")
        .add_query_param("utc_offset", "8")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["method"], "Karachi");
}
