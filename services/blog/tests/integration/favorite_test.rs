use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_add_list_and_remove_planet_favorite() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;
    app.seed_planet("Tatooine").await;

    let response = app.server.post("/favorite/planet/1").await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"msg": "Planet added to favorites"}));

    assert_eq!(
        app.favorites().await,
        json!([{"id": 1, "user_id": 1, "character_id": null, "planet_id": 1}])
    );

    let response = app.server.delete("/favorite/planet/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({"msg": "Planet removed from favorites"}));

    assert_eq!(app.favorites().await, json!([]));
}

#[tokio::test]
async fn should_restore_favorites_after_add_then_remove_character() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;
    app.seed_planet("Hoth").await;
    let vader = app.seed_character("Darth Vader").await;
    app.server.post("/favorite/planet/1").await;
    let before = app.favorites().await;

    let path = format!("/favorite/character/{}", vader.id);
    let response = app.server.post(&path).await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({"msg": "Character added to favorites"}));
    let response = app.server.delete(&path).await;
    response.assert_status_ok();
    response.assert_json(&json!({"msg": "Character removed from favorites"}));

    assert_eq!(app.favorites().await, before);
}

#[tokio::test]
async fn should_return_404_when_planet_is_missing() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;

    let response = app.server.post("/favorite/planet/5").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Planet not found");
    assert_eq!(app.favorites().await, json!([]));
}

#[tokio::test]
async fn should_return_404_when_character_is_missing() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;

    let response = app.server.post("/favorite/character/5").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Character not found");
    assert_eq!(app.favorites().await, json!([]));
}

#[tokio::test]
async fn should_return_404_on_delete_without_matching_favorite() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;
    app.seed_planet("Tatooine").await;
    app.seed_character("Luke Skywalker").await;
    app.server.post("/favorite/planet/1").await;
    let before = app.favorites().await;

    let response = app.server.delete("/favorite/character/1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Favorite not found");
    assert_eq!(app.favorites().await, before);
}

#[tokio::test]
async fn should_attach_favorites_to_first_user() {
    let app = TestApp::spawn().await;
    let first = app.seed_user("luke@tatooine.org").await;
    app.seed_user("leia@alderaan.org").await;
    app.seed_planet("Alderaan").await;

    app.server
        .post("/favorite/planet/1")
        .await
        .assert_status(StatusCode::CREATED);

    let favorites = app.favorites().await;
    assert_eq!(favorites[0]["user_id"], first.id);
}

#[tokio::test]
async fn should_return_404_when_no_user_exists() {
    let app = TestApp::spawn().await;
    app.seed_planet("Tatooine").await;

    let response = app.server.post("/favorite/planet/1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "User not found");
}

#[tokio::test]
async fn should_remove_duplicate_favorites_one_at_a_time() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;
    app.seed_planet("Tatooine").await;
    app.server.post("/favorite/planet/1").await;
    app.server.post("/favorite/planet/1").await;

    app.server.delete("/favorite/planet/1").await.assert_status_ok();
    assert_eq!(
        app.favorites().await,
        json!([{"id": 2, "user_id": 1, "character_id": null, "planet_id": 1}])
    );

    app.server.delete("/favorite/planet/1").await.assert_status_ok();
    app.server
        .delete("/favorite/planet/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_accept_trailing_slash_on_favorite_routes() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;
    app.seed_planet("Tatooine").await;

    app.server
        .post("/favorite/planet/1/")
        .await
        .assert_status(StatusCode::CREATED);

    let response = app.server.get("/favorites/").await;
    response.assert_status_ok();
    response.assert_json(&json!([
        {"id": 1, "user_id": 1, "character_id": null, "planet_id": 1}
    ]));
}

#[tokio::test]
async fn should_return_404_for_favorite_ids_beyond_i32() {
    let app = TestApp::spawn().await;
    app.seed_user("luke@tatooine.org").await;

    let response = app.server.post("/favorite/planet/99999999999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Planet not found");

    let response = app.server.delete("/favorite/character/99999999999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["msg"], "Favorite not found");
    assert_eq!(app.favorites().await, json!([]));
}
