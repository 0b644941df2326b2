//! Mapping from core errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pomodrive_core::CoreError;
use tracing::error;

use super::responses::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Core(CoreError),
    /// The request body could not be decoded.
    BadRequest(String),
    /// A previous holder of the app lock panicked.
    Poisoned,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Core(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Config(_) | CoreError::Validation(_)) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Core(CoreError::TaskNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(_) | ApiError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Core(e) => e.to_string(),
            ApiError::BadRequest(message) => message.clone(),
            ApiError::Poisoned => "timer state unavailable".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!("request failed: {message}");
        }
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
