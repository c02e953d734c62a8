pub mod auth_models;
pub mod flashcard_models;
pub mod review_models;
pub mod srs_models;

pub use auth_models::{ApiResponse, AuthError, LoginForm, NewUser, RegisterForm, User};
pub use flashcard_models::{
    CreateDeckRequest, CreateFlashcardRequest, Deck, Flashcard, FlashcardDetail,
    FlashcardListQuery, FlashcardSummary, NewDeck, NewFlashcard,
};
pub use review_models::{
    DailyReviewStats, DailyStatsEntry, DailyStatsQuery, NewDailyReviewStats, NewReviewLog,
    ReviewLog, ReviewLogEntry, ReviewLogQuery, ReviewOutcome, ReviewRequest,
};
pub use srs_models::{normalize_ease_factor, Grade, ReviewError, SchedulingState};
