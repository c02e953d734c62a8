use chrono::{NaiveDate, NaiveDateTime};
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::{daily_review_stats, review_logs};

/// Immutable record of one review.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = review_logs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ReviewLog {
    pub review_id: i32,
    pub flashcard_id: i32,
    pub user_id: i32,
    pub reviewed_at: NaiveDateTime,
    pub grade: i32,
}

#[derive(Insertable)]
#[diesel(table_name = review_logs)]
pub struct NewReviewLog {
    pub flashcard_id: i32,
    pub user_id: i32,
    pub reviewed_at: NaiveDateTime,
    pub grade: i32,
}

/// Per-owner, per-day review counters.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = daily_review_stats)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyReviewStats {
    pub stats_id: i32,
    pub user_id: i32,
    pub review_date: NaiveDate,
    pub flashcards_reviewed: i32,
    pub correct_reviews: i32,
    pub incorrect_reviews: i32,
    pub total_review_time_minutes: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl DailyReviewStats {
    pub fn accuracy_percentage(&self) -> f64 {
        accuracy(self.correct_reviews, self.flashcards_reviewed)
    }
}

fn accuracy(correct: i32, reviewed: i32) -> f64 {
    if reviewed == 0 {
        return 0.0;
    }
    (f64::from(correct) / f64::from(reviewed) * 1000.0).round() / 10.0
}

#[derive(Insertable)]
#[diesel(table_name = daily_review_stats)]
pub struct NewDailyReviewStats {
    pub user_id: i32,
    pub review_date: NaiveDate,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request payload for reviewing a flashcard
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub grade: i32,
}

/// Result of a review, as returned to the client.
#[derive(Debug, Serialize)]
pub struct ReviewOutcome {
    pub grade: i32,
    pub new_interval: i32,
    pub new_interval_display: String,
    pub new_ease_factor: i32,
    pub new_repetition: i32,
    pub new_next_review: NaiveDateTime,
    pub is_learning: bool,
    pub reviews_today: i32,
}

#[derive(Debug, Serialize)]
pub struct ReviewLogEntry {
    pub id: i32,
    pub flashcard_id: i32,
    pub user_id: i32,
    pub reviewed_at: NaiveDateTime,
    pub grade: i32,
}

impl From<ReviewLog> for ReviewLogEntry {
    fn from(log: ReviewLog) -> Self {
        ReviewLogEntry {
            id: log.review_id,
            flashcard_id: log.flashcard_id,
            user_id: log.user_id,
            reviewed_at: log.reviewed_at,
            grade: log.grade,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DailyStatsEntry {
    pub id: Option<i32>,
    pub date: NaiveDate,
    pub flashcards_reviewed: i32,
    pub correct_reviews: i32,
    pub incorrect_reviews: i32,
    pub accuracy_percentage: f64,
    pub total_review_time_minutes: i32,
}

impl DailyStatsEntry {
    /// Placeholder for a day without any reviews yet.
    pub fn empty(date: NaiveDate) -> Self {
        DailyStatsEntry {
            id: None,
            date,
            flashcards_reviewed: 0,
            correct_reviews: 0,
            incorrect_reviews: 0,
            accuracy_percentage: 0.0,
            total_review_time_minutes: 0,
        }
    }
}

impl From<DailyReviewStats> for DailyStatsEntry {
    fn from(stats: DailyReviewStats) -> Self {
        DailyStatsEntry {
            id: Some(stats.stats_id),
            date: stats.review_date,
            accuracy_percentage: stats.accuracy_percentage(),
            flashcards_reviewed: stats.flashcards_reviewed,
            correct_reviews: stats.correct_reviews,
            incorrect_reviews: stats.incorrect_reviews,
            total_review_time_minutes: stats.total_review_time_minutes,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReviewLogQuery {
    pub flashcard_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DailyStatsQuery {
    #[validate(range(min = 1, max = 365, message = "days must be between 1 and 365"))]
    pub days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_rounds_to_one_decimal() {
        assert_eq!(accuracy(0, 0), 0.0);
        assert_eq!(accuracy(2, 3), 66.7);
        assert_eq!(accuracy(1, 3), 33.3);
        assert_eq!(accuracy(4, 4), 100.0);
    }

    #[test]
    fn days_query_is_bounded() {
        assert!(DailyStatsQuery { days: None }.validate().is_ok());
        assert!(DailyStatsQuery { days: Some(30) }.validate().is_ok());
        assert!(DailyStatsQuery { days: Some(0) }.validate().is_err());
        assert!(DailyStatsQuery { days: Some(366) }.validate().is_err());
    }
}
