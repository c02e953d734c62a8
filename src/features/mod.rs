pub mod auth;
pub mod srs;
