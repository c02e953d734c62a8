use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::AppState;

pub mod cards;
pub mod review;
pub mod stats;

pub fn flashcard_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(cards::list_flashcards).post(cards::create_flashcard))
        .route("/decks", get(cards::list_decks).post(cards::create_deck))
        .route("/due", get(review::list_due))
        .route("/{id}/review", post(review::review_flashcard))
        .route("/review-logs", get(stats::list_review_logs))
        .route("/daily-stats", get(stats::list_daily_stats))
        .route("/today-stats", get(stats::today_stats))
        .with_state(state)
}
