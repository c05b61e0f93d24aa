//! Integration tests for navigation, routing, home, contacts and health.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["versions"], 3);
    assert_eq!(response.body["data"]["objects"], 6);
}

#[tokio::test]
async fn test_navigation_marks_current_page() {
    let app = TestApp::new();

    let response = app.get("/api/navigation?path=/objects").await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    let active: Vec<&str> = items
        .iter()
        .filter(|i| i["active"] == true)
        .map(|i| i["path"].as_str().unwrap())
        .collect();
    assert_eq!(active, vec!["/objects"]);
}

#[tokio::test]
async fn test_resolve_known_and_unknown_paths() {
    let app = TestApp::new();

    let known = app.get("/api/routes/resolve?path=/Documentation/").await;
    let unknown = app.get("/api/routes/resolve?path=/admin").await;

    assert_eq!(known.body["data"]["route"], "documentation");
    assert_eq!(known.body["data"]["title"], "Документация");
    assert_eq!(unknown.body["data"]["route"], "not_found");
    assert_eq!(unknown.body["data"]["title"], "Страница не найдена");
}

#[tokio::test]
async fn test_unmatched_path_falls_back_to_not_found() {
    let app = TestApp::new();

    let response = app.get("/no/such/page").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["details"]["route"], "not_found");
    assert_eq!(response.body["details"]["path"], "/no/such/page");
}

#[tokio::test]
async fn test_home_page_content() {
    let app = TestApp::new();

    let response = app.get("/api/home").await;

    assert_eq!(response.status, StatusCode::OK);
    let features = response.body["data"]["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);
    assert_eq!(features[0]["route"], "documentation");
    assert!(features[2]["route"].is_null());
    assert_eq!(response.body["data"]["stats"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_spans_both_catalogs() {
    let app = TestApp::new();

    let response = app.get("/api/search?q=3.2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["versions"].as_array().unwrap().len(), 1);
    assert_eq!(response.body["data"]["total"], 1);
}

#[tokio::test]
async fn test_search_by_object_name() {
    let app = TestApp::new();

    let response = app.get("/api/search?q=adminpanel").await;

    assert_eq!(response.body["data"]["objects"][0]["name"], "AdminPanel");
    assert_eq!(response.body["data"]["total"], 1);
}

#[tokio::test]
async fn test_blank_search_is_rejected() {
    let app = TestApp::new();

    let response = app.get("/api/search?q=%20%20").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Search query is required");
}

#[tokio::test]
async fn test_contacts_page() {
    let app = TestApp::new();

    let response = app.get("/api/contacts").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["channels"].as_array().unwrap().len(), 4);
    assert_eq!(response.body["data"]["office"]["address"], "ул. Пушкина, 15");
}
