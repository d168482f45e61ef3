use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewCharacter;
use crate::response::Data;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// POST /people
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewCharacter>,
) -> Result<impl IntoResponse, AppError> {
    let character = CrudService::create_character(&state.pool, &body).await?;
    tracing::info!(id = character.id, name = %character.name, "character created");
    Ok(Data(character))
}
