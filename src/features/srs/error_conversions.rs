use axum::extract::rejection::JsonRejection;
use diesel::result::Error as DieselError;
use tokio::task::JoinError;
use validator::ValidationErrors;

use crate::data::models::ReviewError;

impl From<DieselError> for ReviewError {
    fn from(err: DieselError) -> Self {
        ReviewError::DatabaseError(err)
    }
}

impl From<r2d2::Error> for ReviewError {
    fn from(err: r2d2::Error) -> Self {
        ReviewError::PoolError(err)
    }
}

impl From<JoinError> for ReviewError {
    fn from(err: JoinError) -> Self {
        ReviewError::TaskError(err.to_string())
    }
}

impl From<ValidationErrors> for ReviewError {
    fn from(err: ValidationErrors) -> Self {
        ReviewError::Validation(err.to_string())
    }
}

/// Malformed or mistyped request bodies are reported like any other invalid
/// input.
impl From<JsonRejection> for ReviewError {
    fn from(rejection: JsonRejection) -> Self {
        ReviewError::Validation(rejection.body_text())
    }
}
