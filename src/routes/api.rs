//! Resource routes: planets, people, users and favorites.

use crate::handlers::{self, favorites, people, planets, users};
use crate::models::{Character, Favorite, Planet, User};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/planets", get(handlers::list::<Planet>).post(planets::create))
        .route(
            "/planets/:id",
            get(handlers::read::<Planet>).delete(handlers::delete::<Planet>),
        )
        .route("/people", get(handlers::list::<Character>).post(people::create))
        .route(
            "/people/:id",
            get(handlers::read::<Character>).delete(handlers::delete::<Character>),
        )
        .route("/user", get(handlers::list::<User>).post(users::create))
        .route(
            "/user/:id",
            get(handlers::read::<User>).delete(handlers::delete::<User>),
        )
        .route("/favorites", get(handlers::list::<Favorite>))
        .route(
            "/favorite/planets/:id",
            post(favorites::add_planet).delete(handlers::delete::<Favorite>),
        )
        .route(
            "/favorite/characters/:id",
            post(favorites::add_character).delete(handlers::delete::<Favorite>),
        )
        .with_state(state)
}
