use chrono::{Duration, NaiveDateTime};
use diesel::result::Error as DieselError;
use thiserror::Error;

/// Recall grade given by the user for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Again = 1,
    Good = 2,
    Easy = 3,
}

impl Grade {
    /// Anything but a lapse counts as a correct answer for the daily stats.
    pub fn is_correct(self) -> bool {
        !matches!(self, Grade::Again)
    }
}

impl TryFrom<i32> for Grade {
    type Error = ReviewError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Grade::Again),
            2 => Ok(Grade::Good),
            3 => Ok(Grade::Easy),
            other => Err(ReviewError::InvalidGrade(other)),
        }
    }
}

impl From<Grade> for i32 {
    fn from(grade: Grade) -> Self {
        grade as i32
    }
}

/// Memory-scheduling status of one flashcard.
///
/// `ease_factor` is an integer percentage (250 = 2.5x) and `interval` is in
/// minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulingState {
    pub ease_factor: i32,
    pub interval: i32,
    pub repetition: i32,
    pub is_learning: bool,
}

impl SchedulingState {
    pub fn new_card() -> Self {
        SchedulingState {
            ease_factor: 250,
            interval: 1,
            repetition: 0,
            is_learning: true,
        }
    }

    /// A one-minute interval means "due now".
    pub fn next_review_from(&self, now: NaiveDateTime) -> NaiveDateTime {
        if self.interval <= 1 {
            now
        } else {
            now + Duration::minutes(i64::from(self.interval))
        }
    }
}

/// Converts a stored ease factor to integer percentage form. Values below 10
/// are taken to be multipliers (2.5) rather than percentages (250).
pub fn normalize_ease_factor(raw: f64) -> i32 {
    if raw < 10.0 {
        (raw * 100.0) as i32
    } else {
        raw as i32
    }
}

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Flashcard not found")]
    NotFound,
    #[error("Grade must be 1 (again), 2 (good) or 3 (easy), got {0}")]
    InvalidGrade(i32),
    #[error("{0}")]
    Validation(String),
    #[error("Not logged in")]
    Unauthorized,
    #[error("Database error")]
    DatabaseError(DieselError),
    #[error("Connection pool error")]
    PoolError(r2d2::Error),
    #[error("Background task failed: {0}")]
    TaskError(String),
}
