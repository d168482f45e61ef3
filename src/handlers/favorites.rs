//! Favorite creation. The planet / character id comes from the body; the path id only fills in when the body omits it.
//! Deletion goes through the shared handler: the path id there is the favorite's own id.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::handlers::parse_id;
use crate::models::{FavoriteCharacterRequest, FavoritePlanetRequest, NewFavorite};
use crate::response::Data;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// POST /favorite/planets/:id
pub async fn add_planet(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<FavoritePlanetRequest>,
) -> Result<impl IntoResponse, AppError> {
    let path_id = parse_id(&id_str)?;
    let new = NewFavorite::planet(body.user_id, body.planet_id.unwrap_or(path_id));
    let favorite = CrudService::create_favorite(&state.pool, &new).await?;
    tracing::info!(id = favorite.id, user_id = favorite.user_id, planet_id = ?favorite.planet_id, "favorite added");
    Ok(Data(favorite))
}

/// POST /favorite/characters/:id
pub async fn add_character(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<FavoriteCharacterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let path_id = parse_id(&id_str)?;
    let new = NewFavorite::character(body.user_id, body.character_id.unwrap_or(path_id));
    let favorite = CrudService::create_favorite(&state.pool, &new).await?;
    tracing::info!(id = favorite.id, user_id = favorite.user_id, character_id = ?favorite.character_id, "favorite added");
    Ok(Data(favorite))
}
