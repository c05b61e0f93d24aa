//! Integration tests for the documentation page endpoints.

mod helpers;

use http::StatusCode;

use helpers::{TestApp, item_field};

#[tokio::test]
async fn test_list_all_versions_newest_first() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/versions").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        item_field(&response.body, "version"),
        vec!["3.2.0", "3.1.5", "3.1.0"]
    );
    assert_eq!(response.body["data"]["state"], "unfiltered");
    assert_eq!(response.body["data"]["total"], 3);
}

#[tokio::test]
async fn test_filter_by_type() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/versions?type=major").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(item_field(&response.body, "version"), vec!["3.2.0"]);
    assert_eq!(response.body["data"]["state"], "matches");
}

#[tokio::test]
async fn test_search_by_version_number() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/versions?q=3.1").await;

    assert_eq!(
        item_field(&response.body, "version"),
        vec!["3.1.5", "3.1.0"]
    );
}

#[tokio::test]
async fn test_search_and_type_combine() {
    let app = TestApp::new();

    let response = app
        .get("/api/documentation/versions?q=3.1&type=patch")
        .await;

    assert_eq!(item_field(&response.body, "version"), vec!["3.1.5"]);
    assert_eq!(response.body["data"]["items"][0]["type"], "patch");
}

#[tokio::test]
async fn test_no_match_carries_message() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/versions?q=9.9.9").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["state"], "no_match");
    assert_eq!(response.body["data"]["shown"], 0);
    assert_eq!(response.body["data"]["empty_message"], "Версии не найдены");
}

#[tokio::test]
async fn test_unknown_type_is_rejected() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/versions?type=hotfix").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_version_with_and_without_prefix() {
    let app = TestApp::new();

    let plain = app.get("/api/documentation/versions/3.1.5").await;
    let prefixed = app.get("/api/documentation/versions/v3.1.5").await;

    assert_eq!(plain.status, StatusCode::OK);
    assert_eq!(prefixed.status, StatusCode::OK);
    assert_eq!(plain.body["data"]["display_version"], "v3.1.5");
    assert_eq!(plain.body["data"]["display_date"], "15.01.2026");
    assert_eq!(plain.body["data"], prefixed.body["data"]);
}

#[tokio::test]
async fn test_get_unknown_version() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/versions/1.0.0").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_type_filter_options() {
    let app = TestApp::new();

    let response = app.get("/api/documentation/filters").await;

    assert_eq!(response.status, StatusCode::OK);
    let values: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["all", "major", "minor", "patch"]);
}
