use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use tower_sessions::Session;
use validator::Validate;

use crate::{
    data::models::{DailyStatsEntry, DailyStatsQuery, ReviewError, ReviewLogEntry, ReviewLogQuery},
    data::repositories::{DailyStatsRepository, ReviewLogRepository},
    db,
    handlers::AppState,
    utils::require_user,
};

const DEFAULT_STATS_DAYS: i64 = 30;

pub async fn list_review_logs(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ReviewLogQuery>,
) -> Result<Json<Vec<ReviewLogEntry>>, ReviewError> {
    let owner_id = require_user(&session).await?;

    let logs = db::run_blocking(&state.pool, move |conn| {
        ReviewLogRepository::list_for_owner(conn, owner_id, query.flashcard_id)
            .map_err(ReviewError::from)
    })
    .await?;

    Ok(Json(logs.into_iter().map(ReviewLogEntry::from).collect()))
}

pub async fn list_daily_stats(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DailyStatsQuery>,
) -> Result<Json<Vec<DailyStatsEntry>>, ReviewError> {
    let owner_id = require_user(&session).await?;
    query.validate()?;

    let days = query.days.unwrap_or(DEFAULT_STATS_DAYS);
    let stats = db::run_blocking(&state.pool, move |conn| {
        DailyStatsRepository::list_recent(conn, owner_id, days).map_err(ReviewError::from)
    })
    .await?;

    Ok(Json(stats.into_iter().map(DailyStatsEntry::from).collect()))
}

/// Today's counters. Does not create the row when there were no reviews yet.
pub async fn today_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<DailyStatsEntry>, ReviewError> {
    let owner_id = require_user(&session).await?;

    let today = Utc::now().date_naive();
    let stats = db::run_blocking(&state.pool, move |conn| {
        DailyStatsRepository::find_for_day(conn, owner_id, today).map_err(ReviewError::from)
    })
    .await?;

    Ok(Json(
        stats.map_or_else(|| DailyStatsEntry::empty(today), DailyStatsEntry::from),
    ))
}
