use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::data::models::{DailyReviewStats, NewDailyReviewStats};
use crate::schema::daily_review_stats;

/// Daily aggregate store: one row per (owner, day), created on first use.
pub struct DailyStatsRepository;

impl DailyStatsRepository {
    pub fn get_or_create(
        conn: &mut SqliteConnection,
        owner_id: i32,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<DailyReviewStats, diesel::result::Error> {
        diesel::insert_into(daily_review_stats::table)
            .values(&NewDailyReviewStats {
                user_id: owner_id,
                review_date: date,
                created_at: now,
                updated_at: now,
            })
            .on_conflict((daily_review_stats::user_id, daily_review_stats::review_date))
            .do_nothing()
            .execute(conn)?;

        daily_review_stats::table
            .filter(daily_review_stats::user_id.eq(owner_id))
            .filter(daily_review_stats::review_date.eq(date))
            .select(DailyReviewStats::as_select())
            .first(conn)
    }

    /// Counters are incremented in SQL, not from the loaded copy.
    pub fn increment(
        conn: &mut SqliteConnection,
        stats: &DailyReviewStats,
        correct: bool,
        now: NaiveDateTime,
    ) -> Result<DailyReviewStats, diesel::result::Error> {
        let (correct_step, incorrect_step) = if correct { (1, 0) } else { (0, 1) };

        diesel::update(daily_review_stats::table.find(stats.stats_id))
            .set((
                daily_review_stats::flashcards_reviewed
                    .eq(daily_review_stats::flashcards_reviewed + 1),
                daily_review_stats::correct_reviews
                    .eq(daily_review_stats::correct_reviews + correct_step),
                daily_review_stats::incorrect_reviews
                    .eq(daily_review_stats::incorrect_reviews + incorrect_step),
                daily_review_stats::updated_at.eq(now),
            ))
            .returning(DailyReviewStats::as_returning())
            .get_result(conn)
    }

    pub fn find_for_day(
        conn: &mut SqliteConnection,
        owner_id: i32,
        date: NaiveDate,
    ) -> Result<Option<DailyReviewStats>, diesel::result::Error> {
        daily_review_stats::table
            .filter(daily_review_stats::user_id.eq(owner_id))
            .filter(daily_review_stats::review_date.eq(date))
            .select(DailyReviewStats::as_select())
            .first(conn)
            .optional()
    }

    /// Most recent `days` rows, newest first.
    pub fn list_recent(
        conn: &mut SqliteConnection,
        owner_id: i32,
        days: i64,
    ) -> Result<Vec<DailyReviewStats>, diesel::result::Error> {
        daily_review_stats::table
            .filter(daily_review_stats::user_id.eq(owner_id))
            .order(daily_review_stats::review_date.desc())
            .limit(days)
            .select(DailyReviewStats::as_select())
            .load(conn)
    }
}
