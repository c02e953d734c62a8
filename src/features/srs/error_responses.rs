use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::ReviewError;

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        let status = match &self {
            ReviewError::NotFound => StatusCode::NOT_FOUND,
            ReviewError::InvalidGrade(_) | ReviewError::Validation(_) => StatusCode::BAD_REQUEST,
            ReviewError::Unauthorized => StatusCode::UNAUTHORIZED,
            ReviewError::DatabaseError(e) => {
                log::error!("Database error during review: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ReviewError::PoolError(e) => {
                log::error!("Failed to get DB connection: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ReviewError::TaskError(e) => {
                log::error!("Review task failed: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
