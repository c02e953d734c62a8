use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::data::models::{Flashcard, NewFlashcard, SchedulingState};
use crate::schema::flashcards;

/// Card store. Every lookup is scoped to the owning user.
pub struct FlashcardRepository;

impl FlashcardRepository {
    /// Inserts a card with a fresh scheduling state, due immediately.
    pub fn create(
        conn: &mut SqliteConnection,
        owner_id: i32,
        deck_id: i32,
        question: &str,
        answer: &str,
        now: NaiveDateTime,
    ) -> Result<Flashcard, diesel::result::Error> {
        let state = SchedulingState::new_card();
        diesel::insert_into(flashcards::table)
            .values(&NewFlashcard {
                user_id: owner_id,
                deck_id,
                question,
                answer,
                next_review: now,
                interval: state.interval,
                ease_factor: f64::from(state.ease_factor),
                repetition: state.repetition,
                is_learning: state.is_learning,
                created_at: now,
                updated_at: now,
            })
            .returning(Flashcard::as_returning())
            .get_result(conn)
    }

    pub fn find_by_id_and_owner(
        conn: &mut SqliteConnection,
        flashcard_id: i32,
        owner_id: i32,
    ) -> Result<Option<Flashcard>, diesel::result::Error> {
        flashcards::table
            .filter(flashcards::flashcard_id.eq(flashcard_id))
            .filter(flashcards::user_id.eq(owner_id))
            .select(Flashcard::as_select())
            .first(conn)
            .optional()
    }

    /// Writes the scheduling fields and `next_review` in one statement.
    pub fn update_scheduling_fields(
        conn: &mut SqliteConnection,
        card: &Flashcard,
        state: &SchedulingState,
        next_review: NaiveDateTime,
        now: NaiveDateTime,
    ) -> Result<Flashcard, diesel::result::Error> {
        diesel::update(flashcards::table.find(card.flashcard_id))
            .set((
                flashcards::ease_factor.eq(f64::from(state.ease_factor)),
                flashcards::interval.eq(state.interval),
                flashcards::repetition.eq(state.repetition),
                flashcards::is_learning.eq(state.is_learning),
                flashcards::next_review.eq(next_review),
                flashcards::updated_at.eq(now),
            ))
            .returning(Flashcard::as_returning())
            .get_result(conn)
    }

    /// All of the owner's cards, optionally narrowed to one deck.
    pub fn list_for_owner(
        conn: &mut SqliteConnection,
        owner_id: i32,
        deck_id: Option<i32>,
    ) -> Result<Vec<Flashcard>, diesel::result::Error> {
        let mut query = flashcards::table
            .filter(flashcards::user_id.eq(owner_id))
            .select(Flashcard::as_select())
            .into_boxed();

        if let Some(deck_id) = deck_id {
            query = query.filter(flashcards::deck_id.eq(deck_id));
        }

        query.order(flashcards::flashcard_id.asc()).load(conn)
    }

    pub fn list_due(
        conn: &mut SqliteConnection,
        owner_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<Flashcard>, diesel::result::Error> {
        flashcards::table
            .filter(flashcards::user_id.eq(owner_id))
            .filter(flashcards::next_review.le(now))
            .order((flashcards::next_review.asc(), flashcards::flashcard_id.asc()))
            .select(Flashcard::as_select())
            .load(conn)
    }
}
