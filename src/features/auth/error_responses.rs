use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::data::models::AuthError;

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            AuthError::EmailTaken => (StatusCode::CONFLICT, self.to_string()),
            AuthError::ValidationError(e) => (StatusCode::BAD_REQUEST, e),
            AuthError::DatabaseError(e) => {
                log::error!("Database error during authentication: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AuthError::HashingError(e) => {
                log::error!("Password hashing failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Hashing error".to_string())
            }
            AuthError::SessionError(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Session error: {}", e),
            ),
            AuthError::PoolError(e) => {
                log::error!("Failed to get DB connection: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AuthError::TaskError(e) => {
                log::error!("Authentication task failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = json!({
            "error": message,
            "status": status.as_u16()
        });

        (status, axum::Json(body)).into_response()
    }
}
