use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::models::NewPlanet;
use crate::response::Data;
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

/// POST /planets
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewPlanet>,
) -> Result<impl IntoResponse, AppError> {
    let planet = CrudService::create_planet(&state.pool, state.backend, &body).await?;
    tracing::info!(id = planet.id, name = %planet.name, "planet created");
    Ok(Data(planet))
}
