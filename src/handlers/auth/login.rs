use axum::{extract::State, Json};
use tower_sessions::Session;

use crate::{
    data::models::{ApiResponse, AuthError, LoginForm},
    data::repositories::UserRepository,
    db,
    handlers::AppState,
    utils::{clear_user_session, set_user_session},
};

pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<LoginForm>,
) -> Result<Json<ApiResponse>, AuthError> {
    let user = db::run_blocking(&state.pool, move |conn| {
        let Some(user) = UserRepository::find_by_email(conn, &form.email)? else {
            log::warn!("User not found: {}", form.email);
            return Err(AuthError::InvalidCredentials);
        };

        if UserRepository::verify_password(&user.password, &form.password)? {
            Ok(user)
        } else {
            log::warn!("Invalid password for user: {}", form.email);
            Err(AuthError::InvalidCredentials)
        }
    })
    .await?;

    set_user_session(&session, user.user_id, &user.email).await?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Logged in".to_string(),
    }))
}

pub async fn handle_logout(session: Session) -> Result<Json<ApiResponse>, AuthError> {
    clear_user_session(&session).await?;
    Ok(Json(ApiResponse {
        success: true,
        message: "Logged out".to_string(),
    }))
}
