use crate::core::SearchError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::any::Any;

/// The only message callers see for failures that are not their fault.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to retrieve flight prices";

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        if self.is_bad_request() {
            return error_body(StatusCode::BAD_REQUEST, &self.to_string());
        }
        tracing::error!("Internal Server Error: {self:#}");
        error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
    }
}

/// Turns a panic inside a handler into the generic 500 response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("Handler panicked: {detail}");
    error_body(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
}
