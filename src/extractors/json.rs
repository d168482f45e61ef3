//! Extract a typed, validated request struct from a JSON body.

use crate::error::AppError;
use crate::service::Validate;
use async_trait::async_trait;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body extractor for create endpoints. Rejections come back as [`AppError`] so clients see
/// the same JSON error body as every other failure:
/// unreadable JSON or a non-object body is `bad_request`, a missing or mistyped field or a failed rule is `validation_error`,
/// and a body over the router's limit is `payload_too_large`.
#[derive(Clone, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(reject)?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        let parsed: T = serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))?;
        parsed.validate()?;
        Ok(JsonBody(parsed))
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BadRequest(rejection.body_text())
    }
}
