use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

// ── GET /characters ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_no_characters_on_empty_store() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/characters").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn should_list_characters_in_insertion_order() {
    let app = TestApp::spawn().await;
    app.seed_character("Luke Skywalker").await;
    app.seed_character("Darth Vader").await;

    let response = app.server.get("/characters").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        {"id": 1, "name": "Luke Skywalker"},
        {"id": 2, "name": "Darth Vader"},
    ]));
}

// ── GET /characters/{id} ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_same_shape_as_list_entry() {
    let app = TestApp::spawn().await;
    app.seed_character("Luke Skywalker").await;
    app.seed_character("Darth Vader").await;

    let list: Value = app.server.get("/characters").await.json();
    for entry in list.as_array().unwrap() {
        let id = entry["id"].as_i64().unwrap();
        let response = app.server.get(&format!("/characters/{id}")).await;
        response.assert_status_ok();
        response.assert_json(entry);
    }
}

#[tokio::test]
async fn should_return_404_for_missing_character() {
    let app = TestApp::spawn().await;
    app.seed_character("Luke Skywalker").await;

    for id in [0, 2, 999, -1] {
        let response = app.server.get(&format!("/characters/{id}")).await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["msg"], "Character not found");
        assert_eq!(body["kind"], "CHARACTER_NOT_FOUND");
    }
}

#[tokio::test]
async fn should_reject_non_integer_character_id() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/characters/luke").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "API_ERROR");
    assert!(body["msg"].is_string());
}

// ── /planets ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_and_get_planets() {
    let app = TestApp::spawn().await;
    let tatooine = app.seed_planet("Tatooine").await;
    app.seed_planet("Hoth").await;

    let response = app.server.get("/planets").await;
    response.assert_status_ok();
    response.assert_json(&json!([
        {"id": 1, "name": "Tatooine"},
        {"id": 2, "name": "Hoth"},
    ]));

    let response = app.server.get(&format!("/planets/{}", tatooine.id)).await;
    response.assert_status_ok();
    response.assert_json(&json!({"id": tatooine.id, "name": "Tatooine"}));
}

#[tokio::test]
async fn should_return_404_for_missing_planet() {
    let app = TestApp::spawn().await;

    let response = app.server.get("/planets/7").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Planet not found");
}

#[tokio::test]
async fn should_return_404_for_character_id_beyond_i32() {
    let app = TestApp::spawn().await;
    app.seed_character("Luke Skywalker").await;

    let response = app.server.get("/characters/99999999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["kind"], "CHARACTER_NOT_FOUND");
    assert_eq!(body["msg"], "Character not found");
}

// ── Trailing slashes ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_route_paths_with_trailing_slash() {
    let app = TestApp::spawn().await;
    app.seed_character("Luke Skywalker").await;
    app.seed_planet("Tatooine").await;

    let response = app.server.get("/characters/").await;
    response.assert_status_ok();
    response.assert_json(&json!([{"id": 1, "name": "Luke Skywalker"}]));

    let response = app.server.get("/planets/1/").await;
    response.assert_status_ok();
    response.assert_json(&json!({"id": 1, "name": "Tatooine"}));
}
