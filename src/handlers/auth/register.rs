use axum::{extract::State, http::StatusCode, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    data::models::{ApiResponse, AuthError, RegisterForm},
    data::repositories::UserRepository,
    db,
    handlers::AppState,
    utils::set_user_session,
};

pub async fn handle_register(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, Json<ApiResponse>), AuthError> {
    form.validate()?;

    let cost = state.bcrypt_cost;
    let user = db::run_blocking(&state.pool, move |conn| {
        if UserRepository::email_exists(conn, &form.email)? {
            log::warn!("Registration attempt with existing email: {}", form.email);
            return Err(AuthError::EmailTaken);
        }
        UserRepository::create_user(conn, &form.email, &form.password, cost)
    })
    .await?;

    set_user_session(&session, user.user_id, &user.email).await?;

    log::info!("New user registered: {}", user.email);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse {
            success: true,
            message: "Registration successful".to_string(),
        }),
    ))
}
