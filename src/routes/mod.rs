//! Router assembly: resource routes, status routes, fallback and middleware.

mod api;
mod common;

pub use api::api_routes;
pub use common::status_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::Uri;
use axum::Router;
use tower_http::trace::TraceLayer;

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("route {}", uri.path()))
}

/// The full application as served by the binary; integration tests drive the same router.
/// Bodies over `body_limit` bytes are rejected by [`crate::extractors::JsonBody`] with a JSON 413.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(status_routes(state.clone()))
        .merge(api_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
