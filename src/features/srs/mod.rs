mod error_conversions;
mod error_responses;
pub mod interval;
pub mod review;
pub mod scheduler;

pub use interval::interval_display;
pub use review::ReviewService;
pub use scheduler::{Scheduler, SchedulerConfig};
