use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewUser;
use crate::response::Data;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// POST /user
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = CrudService::create_user(&state.pool, state.backend, &body).await?;
    tracing::info!(id = user.id, "user created");
    Ok(Data(user))
}
