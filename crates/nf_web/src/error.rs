use std::any::Any;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// The only failure text callers ever see.
pub const GENERIC_ERROR: &str = "Something went wrong on the server.";

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn generic_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error: GENERIC_ERROR }),
    )
        .into_response()
}

/// Any failure while serving a request. The cause is logged, never returned.
#[derive(Debug)]
pub struct ApiError(pub nf_core::Error);

impl From<nf_core::Error> for ApiError {
    fn from(e: nf_core::Error) -> Self {
        Self(e)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(nf_core::Error::InvalidQuery(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "request failed");
        generic_response()
    }
}

pub(crate) fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");
    generic_response()
}
