//! Integration tests for the objects page and its export.

mod helpers;

use http::{StatusCode, header};

use helpers::{TestApp, item_field};

const MODULE: &str = "%D0%9C%D0%BE%D0%B4%D1%83%D0%BB%D1%8C";
const IVANOV: &str = "%D0%98%D0%B2%D0%B0%D0%BD%D0%BE%D0%B2";

#[tokio::test]
async fn test_list_full_catalog() {
    let app = TestApp::new();

    let response = app.get("/api/objects").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], 6);
    assert_eq!(response.body["data"]["shown"], 6);
    assert_eq!(response.body["data"]["summary"], "Показано объектов: 6 из 6");
    assert_eq!(response.body["data"]["items"][0]["lastModified"], "2026-01-25");
}

#[tokio::test]
async fn test_search_by_author() {
    let app = TestApp::new();

    let response = app.get(&format!("/api/objects?q={IVANOV}")).await;

    assert_eq!(
        item_field(&response.body, "name"),
        vec!["UserAuthModule", "OldAPIHandler"]
    );
    assert_eq!(response.body["data"]["summary"], "Показано объектов: 2 из 6");
}

#[tokio::test]
async fn test_type_and_status_combine() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/objects?type={MODULE}&status=active"))
        .await;

    assert_eq!(
        item_field(&response.body, "name"),
        vec!["UserAuthModule", "NotificationSystem"]
    );
    assert_eq!(response.body["data"]["items"][0]["statusLabel"]["text"], "Активен");
}

#[tokio::test]
async fn test_unknown_type_yields_empty_result() {
    let app = TestApp::new();

    let response = app.get("/api/objects?type=Widget").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["state"], "no_match");
    assert_eq!(response.body["data"]["empty_message"], "Объекты не найдены");
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = TestApp::new();

    let response = app.get("/api/objects?status=retired").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_filter_options() {
    let app = TestApp::new();

    let response = app.get("/api/objects/filters").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["types"].as_array().unwrap().len(), 6);
    assert_eq!(response.body["data"]["statuses"].as_array().unwrap().len(), 4);
    assert_eq!(response.body["data"]["types"][0]["value"], "all");
}

#[tokio::test]
async fn test_export_csv_respects_filters() {
    let app = TestApp::new();

    let response = app
        .get(&format!("/api/objects/export?format=csv&q={IVANOV}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers[header::CONTENT_TYPE],
        "text/csv; charset=utf-8"
    );
    let disposition = response.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"system-objects-"));
    assert!(disposition.ends_with(".csv\""));
    assert_eq!(response.headers["x-record-count"], "2");

    let lines: Vec<&str> = response.text.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "id,name,type,version,status,lastModified,author");
    assert!(lines[2].starts_with("4,OldAPIHandler,API,2.8.0,deprecated"));
}

#[tokio::test]
async fn test_export_defaults_to_json() {
    let app = TestApp::new();

    let response = app.get("/api/objects/export").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "application/json");
    assert_eq!(response.body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_export_rejects_unknown_format() {
    let app = TestApp::new();

    let response = app.get("/api/objects/export?format=xlsx").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
