use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::models::{normalize_ease_factor, SchedulingState};
use crate::features::srs::interval_display;
use crate::schema::{decks, flashcards};

#[derive(Debug, Queryable, Selectable, Serialize)]
#[diesel(table_name = decks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Deck {
    #[serde(rename = "id")]
    pub deck_id: i32,
    #[serde(skip)]
    pub user_id: i32,
    #[serde(rename = "name")]
    pub deck_name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = decks)]
pub struct NewDeck<'a> {
    pub user_id: i32,
    pub deck_name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateDeckRequest {
    #[validate(length(min = 1, max = 100, message = "Deck name must be 1 to 100 characters"))]
    pub name: String,
}

/// A flashcard row. The scheduling fields are embedded in the card.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = flashcards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Flashcard {
    pub flashcard_id: i32,
    pub user_id: i32,
    pub deck_id: i32,
    pub question: String,
    pub answer: String,
    pub next_review: NaiveDateTime,
    pub interval: i32,
    pub ease_factor: f64,
    pub repetition: i32,
    pub is_learning: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Flashcard {
    pub fn scheduling_state(&self) -> SchedulingState {
        SchedulingState {
            ease_factor: normalize_ease_factor(self.ease_factor),
            interval: self.interval,
            repetition: self.repetition,
            is_learning: self.is_learning,
        }
    }
}

#[derive(Insertable)]
#[diesel(table_name = flashcards)]
pub struct NewFlashcard<'a> {
    pub user_id: i32,
    pub deck_id: i32,
    pub question: &'a str,
    pub answer: &'a str,
    pub next_review: NaiveDateTime,
    pub interval: i32,
    pub ease_factor: f64,
    pub repetition: i32,
    pub is_learning: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateFlashcardRequest {
    #[validate(length(min = 1, message = "Question cannot be empty"))]
    pub question: String,
    #[validate(length(min = 1, message = "Answer cannot be empty"))]
    pub answer: String,
    pub deck: i32,
}

#[derive(Debug, Deserialize)]
pub struct FlashcardListQuery {
    pub deck: Option<i32>,
}

/// Card as listed in the card and due queues.
#[derive(Debug, Serialize)]
pub struct FlashcardSummary {
    pub id: i32,
    pub deck: i32,
    pub question: String,
    pub answer: String,
    pub next_review: NaiveDateTime,
    pub interval_display: String,
    pub is_learning: bool,
}

impl From<Flashcard> for FlashcardSummary {
    fn from(card: Flashcard) -> Self {
        FlashcardSummary {
            id: card.flashcard_id,
            deck: card.deck_id,
            interval_display: interval_display(card.interval),
            question: card.question,
            answer: card.answer,
            next_review: card.next_review,
            is_learning: card.is_learning,
        }
    }
}

/// Full card, including its scheduling state.
#[derive(Debug, Serialize)]
pub struct FlashcardDetail {
    pub id: i32,
    pub deck: i32,
    pub question: String,
    pub answer: String,
    pub next_review: NaiveDateTime,
    pub interval: i32,
    pub interval_display: String,
    pub ease_factor: i32,
    pub repetition: i32,
    pub is_learning: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Flashcard> for FlashcardDetail {
    fn from(card: Flashcard) -> Self {
        let state = card.scheduling_state();
        FlashcardDetail {
            id: card.flashcard_id,
            deck: card.deck_id,
            interval_display: interval_display(state.interval),
            interval: state.interval,
            ease_factor: state.ease_factor,
            repetition: state.repetition,
            is_learning: state.is_learning,
            question: card.question,
            answer: card.answer,
            next_review: card.next_review,
            created_at: card.created_at,
            updated_at: card.updated_at,
        }
    }
}
