pub mod daily_stats;
pub mod deck;
pub mod flashcard;
pub mod review_log;
pub mod user;

pub use daily_stats::DailyStatsRepository;
pub use deck::DeckRepository;
pub use flashcard::FlashcardRepository;
pub use review_log::ReviewLogRepository;
pub use user::UserRepository;
