use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::data::models::{Grade, NewReviewLog, ReviewLog};
use crate::schema::review_logs;

/// Append-only review log.
pub struct ReviewLogRepository;

impl ReviewLogRepository {
    pub fn append(
        conn: &mut SqliteConnection,
        flashcard_id: i32,
        owner_id: i32,
        grade: Grade,
        reviewed_at: NaiveDateTime,
    ) -> Result<ReviewLog, diesel::result::Error> {
        diesel::insert_into(review_logs::table)
            .values(&NewReviewLog {
                flashcard_id,
                user_id: owner_id,
                reviewed_at,
                grade: grade.into(),
            })
            .returning(ReviewLog::as_returning())
            .get_result(conn)
    }

    /// Newest first, optionally narrowed to one card.
    pub fn list_for_owner(
        conn: &mut SqliteConnection,
        owner_id: i32,
        flashcard_id: Option<i32>,
    ) -> Result<Vec<ReviewLog>, diesel::result::Error> {
        let mut query = review_logs::table
            .filter(review_logs::user_id.eq(owner_id))
            .select(ReviewLog::as_select())
            .into_boxed();

        if let Some(flashcard_id) = flashcard_id {
            query = query.filter(review_logs::flashcard_id.eq(flashcard_id));
        }

        query
            .order((review_logs::reviewed_at.desc(), review_logs::review_id.desc()))
            .load(conn)
    }
}
