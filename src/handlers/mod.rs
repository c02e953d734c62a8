use std::sync::Arc;

use axum::Router;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::db::DbPool;
use crate::features::srs::ReviewService;

pub mod auth;
pub mod flashcards;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub reviews: Arc<ReviewService>,
    pub bcrypt_cost: u32,
}

pub fn session_layer(expiry_days: i64, secure: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_expiry(Expiry::OnInactivity(Duration::days(expiry_days)))
        .with_secure(secure)
}

pub fn app_router(state: AppState, sessions: SessionManagerLayer<MemoryStore>) -> Router {
    let api_router = Router::new().nest("/flashcards", flashcards::flashcard_router(state.clone()));

    Router::new()
        .nest("/auth", auth::auth_router(state))
        .nest("/api", api_router)
        .layer(sessions)
}
