use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

mod config;
mod data;
mod db;
mod features;
mod handlers;
mod schema;
mod utils;

use config::Config;
use features::srs::{ReviewService, Scheduler, SchedulerConfig};
use handlers::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("Invalid configuration")?;

    // Database configuration
    let pool = db::build_pool(&config).context("Failed to create DB pool")?;
    {
        let mut conn = pool.get().context("Failed to get DB connection")?;
        db::bootstrap_schema(&mut conn).context("Failed to create database schema")?;
    }

    let state = AppState {
        pool,
        reviews: Arc::new(ReviewService::new(Scheduler::new(SchedulerConfig::default()))),
        bcrypt_cost: config.bcrypt_cost,
    };

    let sessions = handlers::session_layer(config.session_expiry_days, config.session_secure);
    let app = handlers::app_router(state, sessions);

    let listener = TcpListener::bind(config.bind_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
