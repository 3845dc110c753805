use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug)]
pub struct AppError(pub &'static str);

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AppError {
    fn description(&self) -> &str {
        self.0
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// Upstream failures all render the same way: a 500 with a generic message.
/// Whatever the platform actually said only goes to the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: self.0 })).into_response()
    }
}
