//! Integration tests for /favorites and /favorite/*.

mod common;

use axum::http::StatusCode;
use common::{create_character, create_planet, create_user, delete, get, post, test_app};
use serde_json::json;

#[tokio::test]
async fn empty_favorites_list() {
    let app = test_app().await;
    let (status, json) = get(&app, "/favorites").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"], json!([]));
    assert_eq!(json["meta"]["count"], 0);
}

#[tokio::test]
async fn favorite_planet_keeps_ids_from_body() {
    let app = test_app().await;
    let user = create_user(&app, "rey@jakku.net").await;
    let planet = create_planet(&app, "Jakku").await;
    create_planet(&app, "Ahch-To").await;

    // Path id deliberately differs: the body decides.
    let (status, json) = post(
        &app,
        "/favorite/planets/2",
        json!({ "user_id": user["id"], "planet_id": planet["id"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let fav = &json["data"];
    assert_eq!(fav["user_id"], user["id"]);
    assert_eq!(fav["planet_id"], planet["id"]);
    assert!(fav["character_id"].is_null());
}

#[tokio::test]
async fn favorite_character_falls_back_to_path_id() {
    let app = test_app().await;
    let user = create_user(&app, "finn@first-order.mil").await;
    let character = create_character(&app, "Poe Dameron").await;

    let (status, json) = post(
        &app,
        &format!("/favorite/characters/{}", character["id"]),
        json!({ "user_id": user["id"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["character_id"], character["id"]);
    assert!(json["data"]["planet_id"].is_null());

    let (_, json) = get(&app, "/favorites").await;
    assert_eq!(json["meta"]["count"], 1);
}

#[tokio::test]
async fn favorite_for_missing_user_is_a_conflict() {
    let app = test_app().await;
    let planet = create_planet(&app, "Scarif").await;

    let (status, json) = post(
        &app,
        "/favorite/planets/1",
        json!({ "user_id": 404, "planet_id": planet["id"] }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "conflict");
}

#[tokio::test]
async fn missing_user_id_is_a_validation_error() {
    let app = test_app().await;
    let (status, json) = post(&app, "/favorite/planets/1", json!({ "planet_id": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn delete_uses_the_favorite_id() {
    let app = test_app().await;
    let user = create_user(&app, "mace@jedi.org").await;
    let character = create_character(&app, "Mace Windu").await;
    let (_, json) = post(
        &app,
        "/favorite/characters/1",
        json!({ "user_id": user["id"], "character_id": character["id"] }),
    )
    .await;
    let fav_id = json["data"]["id"].as_i64().unwrap();

    let (status, json) = delete(&app, &format!("/favorite/characters/{fav_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], fav_id);

    let (status, _) = delete(&app, &format!("/favorite/planets/{fav_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_planet_removes_its_favorites() {
    let app = test_app().await;
    let user = create_user(&app, "cassian@rebellion.org").await;
    let planet = create_planet(&app, "Jedha").await;
    post(
        &app,
        "/favorite/planets/1",
        json!({ "user_id": user["id"], "planet_id": planet["id"] }),
    )
    .await;

    let (status, _) = delete(&app, &format!("/planets/{}", planet["id"])).await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get(&app, "/favorites").await;
    assert_eq!(json["data"], json!([]));
}
