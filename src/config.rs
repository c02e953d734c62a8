use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
    pub session_expiry_days: i64,
    pub session_secure: bool,
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "srs.db".into()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:5000".into()),
            pool_size: parse_or(&lookup, "DB_POOL_SIZE", 10)?,
            busy_timeout_ms: parse_or(&lookup, "DB_BUSY_TIMEOUT_MS", 5000)?,
            session_expiry_days: parse_or(&lookup, "SESSION_EXPIRY_DAYS", 1)?,
            session_secure: parse_or(&lookup, "SESSION_SECURE", false)?,
            bcrypt_cost: parse_or(&lookup, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(default),
    }
}
