use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    data::models::{FlashcardSummary, ReviewError, ReviewOutcome, ReviewRequest},
    data::repositories::FlashcardRepository,
    db,
    handlers::AppState,
    utils::require_user,
};

pub async fn review_flashcard(
    State(state): State<AppState>,
    session: Session,
    Path(flashcard_id): Path<i32>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewOutcome>, ReviewError> {
    let owner_id = require_user(&session).await?;
    let Json(payload) = payload?;

    let reviews = state.reviews.clone();
    let outcome = db::run_blocking(&state.pool, move |conn| {
        reviews.submit_review(conn, flashcard_id, owner_id, payload.grade)
    })
    .await
    .inspect_err(|e| {
        if matches!(e, ReviewError::NotFound) {
            log::warn!("User {} tried to review missing flashcard {}", owner_id, flashcard_id);
        }
    })?;

    Ok(Json(outcome))
}

pub async fn list_due(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<FlashcardSummary>>, ReviewError> {
    let owner_id = require_user(&session).await?;

    let cards = db::run_blocking(&state.pool, move |conn| {
        FlashcardRepository::list_due(conn, owner_id, Utc::now().naive_utc())
            .map_err(ReviewError::from)
    })
    .await?;

    Ok(Json(cards.into_iter().map(FlashcardSummary::from).collect()))
}
