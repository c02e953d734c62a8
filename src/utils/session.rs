use tower_sessions::Session;

use crate::data::models::{AuthError, ReviewError};

const USER_ID_KEY: &str = "user_id";

pub async fn set_user_session(session: &Session, user_id: i32, email: &str) -> Result<(), AuthError> {
    session.cycle_id().await?;
    session.insert("logged_in", true).await?;
    session.insert(USER_ID_KEY, user_id).await?;
    session.insert("user_email", email).await?;
    Ok(())
}

pub async fn clear_user_session(session: &Session) -> Result<(), AuthError> {
    session.flush().await?;
    Ok(())
}

pub async fn get_current_user_id(session: &Session) -> Option<i32> {
    match session.get::<i32>(USER_ID_KEY).await {
        Ok(user_id) => user_id,
        Err(e) => {
            log::error!("Failed to get user_id from session: {}", e);
            None
        }
    }
}

/// Owner id of the logged-in user, or `Unauthorized`.
pub async fn require_user(session: &Session) -> Result<i32, ReviewError> {
    get_current_user_id(session).await.ok_or(ReviewError::Unauthorized)
}
