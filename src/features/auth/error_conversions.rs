use bcrypt::BcryptError;
use diesel::result::Error as DieselError;
use tokio::task::JoinError;
use tower_sessions::session::Error as SessionError;
use validator::ValidationErrors;

use crate::data::models::AuthError;

impl From<DieselError> for AuthError {
    fn from(err: DieselError) -> Self {
        AuthError::DatabaseError(err)
    }
}

impl From<BcryptError> for AuthError {
    fn from(err: BcryptError) -> Self {
        AuthError::HashingError(err)
    }
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        AuthError::SessionError(err.to_string())
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(err: ValidationErrors) -> Self {
        AuthError::ValidationError(err.to_string())
    }
}

impl From<r2d2::Error> for AuthError {
    fn from(err: r2d2::Error) -> Self {
        AuthError::PoolError(err)
    }
}

impl From<JoinError> for AuthError {
    fn from(err: JoinError) -> Self {
        AuthError::TaskError(err.to_string())
    }
}
