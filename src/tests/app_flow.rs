//! Whole-application checks: real wiring over a migrated SQLite database.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use crate::modules::settings::application::Settings;
use crate::shared::api::custom_json_config;
use crate::tests::support::sqlite::migrated_sqlite;
use crate::{build_app_state, init_routes};

macro_rules! app {
    ($db:expr) => {{
        let state = build_app_state(Arc::clone(&$db), Arc::new(Settings::default()));
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(Arc::clone(&$db)))
                .app_data(custom_json_config())
                .configure(init_routes),
        )
        .await
    }};
}

macro_rules! get_data {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["data"].clone()
    }};
}

#[actix_web::test]
async fn empty_store_serves_built_in_content() {
    let db = migrated_sqlite().await;
    let app = app!(db);

    let projects = get_data!(app, "/api/projects");
    assert_eq!(projects.as_array().unwrap().len(), 8);

    let info = get_data!(app, "/api/personal-info");
    assert_eq!(info["fullName"], "John Doe");

    let skills = get_data!(app, "/api/skills/grouped");
    assert_eq!(skills.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn one_stored_project_replaces_fallback_list() {
    let db = migrated_sqlite().await;
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/projects")
        .set_json(json!({
            "title": "Only One",
            "technologies": "[\"Rust\"]"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let projects = get_data!(app, "/api/projects");
    let projects = projects.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["title"], "Only One");
    assert_eq!(projects[0]["technologies"], json!(["Rust"]));

    // Other content types are unaffected.
    let experience = get_data!(app, "/api/experience");
    assert_eq!(experience.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn seeding_matches_fallback_and_clears_messages() {
    let db = migrated_sqlite().await;
    let app = app!(db);

    let before = get_data!(app, "/api/projects");

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post().uri("/api/init-db").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["skills"], 13);

    let after = get_data!(app, "/api/projects");
    assert_eq!(before, after);

    let messages = get_data!(app, "/api/contact");
    assert_eq!(messages, json!([]));

    // New rows continue after the seeded ids.
    let req = test::TestRequest::post()
        .uri("/api/skills")
        .set_json(json!({
            "name": "Zig",
            "category": "Languages",
            "proficiencyLevel": 2
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["id"], 16);
}

#[actix_web::test]
async fn contact_submission_is_stored_without_mail() {
    let db = migrated_sqlite().await;
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["notified"], false);

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({ "name": "", "email": "a@b.com", "message": "hi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let messages = get_data!(app, "/api/contact");
    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["name"], "Ada");
}
