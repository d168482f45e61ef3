//! Success bodies. Every 200 carries `{"data": ...}`; lists add `{"meta": {"count": n}}`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
struct Envelope<T> {
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<ListMeta>,
}

#[derive(Serialize)]
struct ListMeta {
    count: usize,
}

/// One row.
pub struct Data<T>(pub T);

/// Rows of one table, counted.
pub struct DataList<T>(pub Vec<T>);

impl<T: Serialize> IntoResponse for Data<T> {
    fn into_response(self) -> Response {
        Json(Envelope {
            data: self.0,
            meta: None,
        })
        .into_response()
    }
}

impl<T: Serialize> IntoResponse for DataList<T> {
    fn into_response(self) -> Response {
        let count = self.0.len();
        Json(Envelope {
            data: self.0,
            meta: Some(ListMeta { count }),
        })
        .into_response()
    }
}
