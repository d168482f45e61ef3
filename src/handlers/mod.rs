//! HTTP handlers. List / read / delete are shared by every table; each resource module holds its create handler.

pub mod favorites;
pub mod people;
pub mod planets;
pub mod users;

use crate::error::AppError;
use crate::models::Record;
use crate::response::{Data, DataList};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// Path ids are positive integers; anything else is a bad request rather than a routing miss.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    match id_str.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::BadRequest(format!("invalid id '{}'", id_str))),
    }
}

pub async fn list<T: Record>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<T>(&state.pool).await?;
    Ok(DataList(rows))
}

pub async fn read<T: Record>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CrudService::read::<T>(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(T::KIND, id))?;
    Ok(Data(row))
}

/// Responds with the row as it was before deletion.
pub async fn delete<T: Record>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = CrudService::delete::<T>(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(T::KIND, id))?;
    tracing::info!(kind = T::KIND, id, "deleted");
    Ok(Data(row))
}
