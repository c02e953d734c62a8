use chrono::{NaiveDateTime, Utc};
use diesel::SqliteConnection;

use super::interval::interval_display;
use super::scheduler::Scheduler;
use crate::data::models::{Grade, ReviewError, ReviewOutcome};
use crate::data::repositories::{DailyStatsRepository, FlashcardRepository, ReviewLogRepository};

/// Applies a graded review to a card: reschedules it, logs the review and
/// bumps the owner's counters for the day.
#[derive(Debug, Clone, Default)]
pub struct ReviewService {
    scheduler: Scheduler,
}

impl ReviewService {
    pub fn new(scheduler: Scheduler) -> Self {
        ReviewService { scheduler }
    }

    pub fn submit_review(
        &self,
        conn: &mut SqliteConnection,
        flashcard_id: i32,
        owner_id: i32,
        grade: i32,
    ) -> Result<ReviewOutcome, ReviewError> {
        self.submit_review_at(conn, flashcard_id, owner_id, grade, Utc::now().naive_utc())
    }

    /// Runs the whole review in one `IMMEDIATE` transaction. The write lock
    /// is held from the card lookup onwards, so concurrent reviews of the
    /// same card are applied one after the other.
    pub fn submit_review_at(
        &self,
        conn: &mut SqliteConnection,
        flashcard_id: i32,
        owner_id: i32,
        grade: i32,
        now: NaiveDateTime,
    ) -> Result<ReviewOutcome, ReviewError> {
        conn.immediate_transaction::<_, ReviewError, _>(|conn| {
            let card = FlashcardRepository::find_by_id_and_owner(conn, flashcard_id, owner_id)?
                .ok_or(ReviewError::NotFound)?;
            let grade = Grade::try_from(grade)?;

            let state = self.scheduler.advance(grade, &card.scheduling_state());
            let next_review = state.next_review_from(now);

            FlashcardRepository::update_scheduling_fields(conn, &card, &state, next_review, now)?;
            ReviewLogRepository::append(conn, card.flashcard_id, owner_id, grade, now)?;
            let today = DailyStatsRepository::get_or_create(conn, owner_id, now.date(), now)?;
            let today = DailyStatsRepository::increment(conn, &today, grade.is_correct(), now)?;

            log::info!(
                "User {} reviewed flashcard {} with grade {}: next review in {}",
                owner_id,
                card.flashcard_id,
                i32::from(grade),
                interval_display(state.interval)
            );

            Ok(ReviewOutcome {
                grade: grade.into(),
                new_interval: state.interval,
                new_interval_display: interval_display(state.interval),
                new_ease_factor: state.ease_factor,
                new_repetition: state.repetition,
                new_next_review: next_review,
                is_learning: state.is_learning,
                reviews_today: today.flashcards_reviewed,
            })
        })
    }
}
