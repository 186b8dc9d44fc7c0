//! Integration tests for bureau-cms API endpoints
//!
//! Each test runs against a fresh content database in a temp directory.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use bureau_cms::{build_router, AppState};
use bureau_common::content::DEFAULTS;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::time::Duration;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: empty content database; keep the TempDir alive
async fn setup_db() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().unwrap();
    let pool = bureau_common::db::init_database(&dir.path().join("bureau.db"))
        .await
        .expect("Should create test database");
    (pool, dir)
}

/// Test helper: app over an empty database
async fn setup_app() -> (axum::Router, TempDir) {
    let (pool, dir) = setup_db().await;
    (build_router(AppState::new(pool)), dir)
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Find a rendered field by key in a page response
fn find_field<'a>(page: &'a Value, key: &str) -> &'a Value {
    page["sections"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|s| s["fields"].as_array().unwrap().iter())
        .find(|f| f["key"] == key)
        .unwrap_or_else(|| panic!("field {} not rendered", key))
}

async fn open_session(app: &axum::Router, page: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/sessions", json!({ "page": page })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = extract_json(response.into_body()).await;
    body["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "bureau-cms");
    assert!(body["version"].is_string());
}

// =============================================================================
// Pages and defaults
// =============================================================================

#[tokio::test]
async fn test_list_pages_in_navigation_order() {
    let (app, _dir) = setup_app().await;

    let response = app.oneshot(test_request("GET", "/api/pages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let pages = body["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 7);
    assert_eq!(pages[0]["page"], "home");
    assert_eq!(pages[0]["sections"][0], "hero");
    assert_eq!(
        pages[0]["field_count"],
        DEFAULTS.keys_for_page(bureau_common::Page::Home).len()
    );
    assert_eq!(pages[6]["page"], "footer");
}

#[tokio::test]
async fn test_defaults_for_page() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/api/defaults/team"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections[0]["id"], "hero");

    let defaults: Vec<&Value> = sections
        .iter()
        .flat_map(|s| s["defaults"].as_array().unwrap().iter())
        .collect();
    assert!(!defaults.is_empty());
    assert!(defaults
        .iter()
        .all(|d| d["key"].as_str().unwrap().starts_with("team.")));

    let members = defaults.iter().find(|d| d["key"] == "team.members.list").unwrap();
    assert_eq!(members["key"], "team.members.list");
    assert_eq!(members["kind"]["type"], "list");
    assert_eq!(members["kind"]["list_kind"], "team_members");
}

#[tokio::test]
async fn test_unknown_page_is_bad_request() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/api/pages/blog/render"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("blog"));
}

#[tokio::test]
async fn test_render_empty_store_uses_defaults() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(test_request("GET", "/api/pages/home/render"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["editor_mode"], false);

    let subtitle = find_field(&body, "home.hero.subtitle");
    assert_eq!(subtitle["value"], DEFAULTS.encoded("home.hero.subtitle").unwrap());
    assert_eq!(subtitle["modified"], false);
    assert_eq!(subtitle["control"], "static");
}

// =============================================================================
// Stored content
// =============================================================================

#[tokio::test]
async fn test_put_then_get_content() {
    let (app, _dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/content/home",
            json!({ "home.hero.title": "Custom Title" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await["saved"], 1);

    let response = app
        .clone()
        .oneshot(test_request("GET", "/api/content/home"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["content"], json!({ "home.hero.title": "Custom Title" }));
    assert!(body["updated_at"].is_string());

    let response = app
        .oneshot(test_request("GET", "/api/pages/home/render"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(find_field(&body, "home.hero.title")["value"], "Custom Title");
    assert_eq!(find_field(&body, "home.hero.title")["modified"], false);
}

#[tokio::test]
async fn test_all_content_grouped_by_page() {
    let (app, _dir) = setup_app().await;

    for (page, key, value) in [
        ("home", "home.hero.title", "Hi"),
        ("footer", "footer.legal.copyright", "2026"),
    ] {
        app.clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/content/{}", page),
                json!({ key: value }),
            ))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(test_request("GET", "/api/content"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["pages"]["home"], json!({ "home.hero.title": "Hi" }));
    assert_eq!(body["pages"]["footer"], json!({ "footer.legal.copyright": "2026" }));
    assert_eq!(body["pages"]["team"], json!({}));
}

#[tokio::test]
async fn test_put_rejects_key_from_other_page() {
    let (app, _dir) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/content/home",
            json!({ "home.hero.title": "Fine", "footer.legal.copyright": "Wrong page" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(test_request("GET", "/api/content/home"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["content"], json!({}));
}

#[tokio::test]
async fn test_delete_override_restores_default() {
    let (app, _dir) = setup_app().await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/content/footer",
            json!({ "footer.legal.copyright": "Old" }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(test_request("DELETE", "/api/content/footer/footer.legal.copyright"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(test_request("DELETE", "/api/content/footer/footer.legal.copyright"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(test_request("GET", "/api/pages/footer/render"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(
        find_field(&body, "footer.legal.copyright")["value"],
        DEFAULTS.encoded("footer.legal.copyright").unwrap()
    );
}

// =============================================================================
// Editor sessions
// =============================================================================

#[tokio::test]
async fn test_session_edit_preview_and_save() {
    let (app, _dir) = setup_app().await;
    let id = open_session(&app, "home").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/sessions/{}/content", id),
            json!({ "key": "home.hero.title", "value": "Custom Title" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["modified"], true);
    assert_eq!(body["has_changes"], true);

    let response = app
        .clone()
        .oneshot(test_request("GET", &format!("/api/sessions/{}/preview", id)))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["editor_mode"], true);
    let title = find_field(&body, "home.hero.title");
    assert_eq!(title["value"], "Custom Title");
    assert_eq!(title["modified"], true);
    assert_eq!(title["control"], "editable");
    assert_eq!(find_field(&body, "home.hero.subtitle")["modified"], false);

    // Nothing persisted until save
    let response = app
        .clone()
        .oneshot(test_request("GET", "/api/content/home"))
        .await
        .unwrap();
    assert_eq!(extract_json(response.into_body()).await["content"], json!({}));

    let response = app
        .clone()
        .oneshot(test_request("POST", &format!("/api/sessions/{}/save", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["saved"], 1);

    // A successful save ends the session
    let response = app
        .clone()
        .oneshot(test_request("GET", &format!("/api/sessions/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(test_request("GET", "/api/content/home"))
        .await
        .unwrap();
    assert_eq!(
        extract_json(response.into_body()).await["content"],
        json!({ "home.hero.title": "Custom Title" })
    );
}

#[tokio::test]
async fn test_session_list_edit_adds_logo() {
    let (app, _dir) = setup_app().await;

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/content/home",
            json!({ "home.client-logos.logos": r#"[{"name":"Acme","src":"/a.png"}]"# }),
        ))
        .await
        .unwrap();

    let id = open_session(&app, "home").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/sessions/{}/lists/home.client-logos.logos", id),
            json!({ "op": "add", "item": { "name": "Globex", "src": "/g.png" } }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(
        body["items"],
        json!([{ "name": "Acme", "src": "/a.png" }, { "name": "Globex", "src": "/g.png" }])
    );
    assert_eq!(body["modified"], true);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/sessions/{}/lists/home.client-logos.logos", id),
            json!({ "op": "remove", "index": 9 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(test_request("GET", &format!("/api/sessions/{}", id)))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["modified_keys"], json!(["home.client-logos.logos"]));
}

#[tokio::test]
async fn test_session_remove_last_logo_then_add() {
    let (app, _dir) = setup_app().await;
    let key = "home.client-logos.logos";

    app.clone()
        .oneshot(json_request(
            "PUT",
            "/api/content/home",
            json!({ key: r#"[{"name":"Acme","src":"/a.png"}]"# }),
        ))
        .await
        .unwrap();

    let id = open_session(&app, "home").await;
    let uri = format!("/api/sessions/{}/lists/{}", id, key);

    let response = app
        .clone()
        .oneshot(json_request("POST", &uri, json!({ "op": "remove", "index": 0 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(extract_json(response.into_body()).await["items"], json!([]));

    // An emptied list still renders its default
    let response = app
        .clone()
        .oneshot(test_request("GET", &format!("/api/sessions/{}/preview", id)))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let default_logos: Value = serde_json::from_str(DEFAULTS.encoded(key).unwrap()).unwrap();
    assert_eq!(find_field(&body, key)["value"], default_logos);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &uri,
            json!({ "op": "add", "item": { "name": "Globex", "src": "/g.png" } }),
        ))
        .await
        .unwrap();
    assert_eq!(
        extract_json(response.into_body()).await["items"],
        json!([{ "name": "Globex", "src": "/g.png" }])
    );

    app.clone()
        .oneshot(test_request("POST", &format!("/api/sessions/{}/save", id)))
        .await
        .unwrap();

    let response = app
        .oneshot(test_request("GET", "/api/content/home"))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let stored: Value = serde_json::from_str(body["content"][key].as_str().unwrap()).unwrap();
    assert_eq!(stored, json!([{ "name": "Globex", "src": "/g.png" }]));
}

#[tokio::test]
async fn test_failed_save_keeps_session_edits() {
    let (pool, _dir) = setup_db().await;
    let app = build_router(AppState::new(pool.clone()));
    let id = open_session(&app, "home").await;

    app.clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/sessions/{}/content", id),
            json!({ "key": "home.hero.title", "value": "Unsaved" }),
        ))
        .await
        .unwrap();

    pool.close().await;

    let response = app
        .clone()
        .oneshot(test_request("POST", &format!("/api/sessions/{}/save", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(extract_json(response.into_body()).await["error"].is_string());

    let response = app
        .oneshot(test_request("GET", &format!("/api/sessions/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["modified_keys"], json!(["home.hero.title"]));
    assert_eq!(body["has_changes"], true);
}

#[tokio::test]
async fn test_idle_session_dropped_when_next_opens() {
    let (pool, _dir) = setup_db().await;
    let app = build_router(AppState::with_session_timeout(pool, Duration::ZERO));

    let stale = open_session(&app, "home").await;
    let fresh = open_session(&app, "team").await;

    let response = app
        .clone()
        .oneshot(test_request("GET", &format!("/api/sessions/{}", stale)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(test_request("GET", &format!("/api/sessions/{}", fresh)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_session_rejects_key_from_other_page() {
    let (app, _dir) = setup_app().await;
    let id = open_session(&app, "team").await;

    let response = app
        .oneshot(json_request(
            "PATCH",
            &format!("/api/sessions/{}/content", id),
            json!({ "key": "home.hero.title", "value": "Nope" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_discarded_session_is_gone() {
    let (app, _dir) = setup_app().await;
    let id = open_session(&app, "contact").await;

    let response = app
        .clone()
        .oneshot(test_request("DELETE", &format!("/api/sessions/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(test_request("GET", &format!("/api/sessions/{}/preview", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_session_is_not_found() {
    let (app, _dir) = setup_app().await;

    let response = app
        .oneshot(test_request(
            "GET",
            "/api/sessions/00000000-0000-4000-8000-000000000000",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
