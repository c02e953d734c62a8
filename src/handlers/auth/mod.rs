use axum::{routing::post, Router};

use crate::handlers::AppState;

pub mod login;
pub mod register;

pub fn auth_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register::handle_register))
        .route("/login", post(login::handle_login))
        .route("/logout", post(login::handle_logout))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::handlers::test_support::{post_json, register, send_get, TestApp};

    #[tokio::test]
    async fn register_logs_the_user_in() {
        let app = TestApp::new();
        let cookie = register(&app, "user@example.com").await;
        assert!(!cookie.is_empty());

        let (status, _) = send_get(&app, "/api/flashcards/due", Some(&cookie)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let app = TestApp::new();
        register(&app, "user@example.com").await;

        let (status, _, body) = post_json(
            &app,
            "/auth/register",
            None,
            json!({"email": "user@example.com", "password": "password123"}),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Email already registered");
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let app = TestApp::new();
        let (status, _, body) = post_json(
            &app,
            "/auth/register",
            None,
            json!({"email": "user@example.com", "password": "short"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn login_checks_password() {
        let app = TestApp::new();
        register(&app, "user@example.com").await;

        let (status, cookie, _) = post_json(
            &app,
            "/auth/login",
            None,
            json!({"email": "user@example.com", "password": "wrong-password"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(cookie.is_none());

        let (status, _, body) = post_json(
            &app,
            "/auth/login",
            None,
            json!({"email": "nobody@example.com", "password": "password123"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");

        let (status, cookie, _) = post_json(
            &app,
            "/auth/login",
            None,
            json!({"email": "user@example.com", "password": "password123"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send_get(&app, "/api/flashcards/due", cookie.as_deref()).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn logout_ends_the_session() {
        let app = TestApp::new();
        let cookie = register(&app, "user@example.com").await;

        let (status, _, _) = post_json(&app, "/auth/logout", Some(&cookie), json!({})).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send_get(&app, "/api/flashcards/due", Some(&cookie)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
