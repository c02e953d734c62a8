pub mod session;

pub use session::{clear_user_session, require_user, set_user_session};
