use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    data::models::{
        CreateDeckRequest, CreateFlashcardRequest, Deck, FlashcardDetail, FlashcardListQuery,
        FlashcardSummary, ReviewError,
    },
    data::repositories::{DeckRepository, FlashcardRepository},
    db,
    handlers::AppState,
    utils::require_user,
};

pub async fn list_decks(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Deck>>, ReviewError> {
    let owner_id = require_user(&session).await?;

    let decks = db::run_blocking(&state.pool, move |conn| {
        DeckRepository::list_for_owner(conn, owner_id).map_err(ReviewError::from)
    })
    .await?;

    Ok(Json(decks))
}

pub async fn create_deck(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateDeckRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Deck>), ReviewError> {
    let owner_id = require_user(&session).await?;
    let Json(request) = payload?;
    request.validate()?;

    let deck = db::run_blocking(&state.pool, move |conn| {
        DeckRepository::create(conn, owner_id, &request.name, Utc::now().naive_utc()).map_err(
            |e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    ReviewError::Validation("A deck with this name already exists".to_string())
                }
                other => ReviewError::DatabaseError(other),
            },
        )
    })
    .await?;

    log::info!("User {} created deck {}", owner_id, deck.deck_id);
    Ok((StatusCode::CREATED, Json(deck)))
}

pub async fn list_flashcards(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<FlashcardListQuery>,
) -> Result<Json<Vec<FlashcardSummary>>, ReviewError> {
    let owner_id = require_user(&session).await?;

    let cards = db::run_blocking(&state.pool, move |conn| {
        FlashcardRepository::list_for_owner(conn, owner_id, query.deck).map_err(ReviewError::from)
    })
    .await?;

    Ok(Json(cards.into_iter().map(FlashcardSummary::from).collect()))
}

/// New cards start in the learning phase and are due immediately.
pub async fn create_flashcard(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateFlashcardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FlashcardDetail>), ReviewError> {
    let owner_id = require_user(&session).await?;
    let Json(request) = payload?;
    request.validate()?;

    let card = db::run_blocking(&state.pool, move |conn| {
        let deck = DeckRepository::find_by_id_and_owner(conn, request.deck, owner_id)?
            .ok_or_else(|| {
                ReviewError::Validation(
                    "You can only assign flashcards to your own decks".to_string(),
                )
            })?;
        FlashcardRepository::create(
            conn,
            owner_id,
            deck.deck_id,
            &request.question,
            &request.answer,
            Utc::now().naive_utc(),
        )
        .map_err(ReviewError::from)
    })
    .await?;

    log::info!("User {} created flashcard {}", owner_id, card.flashcard_id);
    Ok((StatusCode::CREATED, Json(FlashcardDetail::from(card))))
}
