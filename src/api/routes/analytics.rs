use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::{require_user, ApiError};
use crate::calculate::{
    extras_ratio, leaderboard, run_rate_series, runs_per_match, summarize, top_performer, Metric,
    TeamSummary, TrendSeries,
};
use crate::models::Player;

// ── Summary Endpoint ────────────────────────────────────────────

pub async fn summary(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TeamSummary>, ApiError> {
    let user = require_user(&headers)?;
    let players = state.store.players(&user);
    let matches = state.store.matches(&user);

    Ok(Json(summarize(&players, &matches)))
}

// ── Leaderboards Endpoint ───────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub name: String,
    pub value: u32,
}

impl LeaderboardEntry {
    fn new(player: &Player, metric: Metric) -> Self {
        Self {
            id: player.id.to_string(),
            name: player.name.clone(),
            value: metric.value(player),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardsResponse {
    pub batting: Vec<LeaderboardEntry>,
    pub bowling: Vec<LeaderboardEntry>,
    pub fielding: Vec<LeaderboardEntry>,
    pub top_batsman: Option<LeaderboardEntry>,
    pub top_bowler: Option<LeaderboardEntry>,
    pub top_fielder: Option<LeaderboardEntry>,
}

pub async fn leaderboards(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LeaderboardsResponse>, ApiError> {
    let user = require_user(&headers)?;
    let players = state.store.players(&user);

    let board = |metric: Metric| -> Vec<LeaderboardEntry> {
        leaderboard(&players, metric)
            .into_iter()
            .map(|p| LeaderboardEntry::new(p, metric))
            .collect()
    };
    let top = |metric: Metric| -> Option<LeaderboardEntry> {
        top_performer(&players, metric).map(|p| LeaderboardEntry::new(p, metric))
    };

    Ok(Json(LeaderboardsResponse {
        batting: board(Metric::Runs),
        bowling: board(Metric::Wickets),
        fielding: board(Metric::Catches),
        top_batsman: top(Metric::Runs),
        top_bowler: top(Metric::Wickets),
        top_fielder: top(Metric::Catches),
    }))
}

// ── Trends Endpoint ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub runs_per_match: TrendSeries,
    pub run_rate: TrendSeries,
    /// Fraction in [0,1]; consumers display it as a percentage
    pub extras_ratio: f64,
}

pub async fn trends(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TrendsResponse>, ApiError> {
    let user = require_user(&headers)?;
    let matches = state.store.matches(&user);

    Ok(Json(TrendsResponse {
        runs_per_match: runs_per_match(&matches),
        run_rate: run_rate_series(&matches),
        extras_ratio: extras_ratio(&matches),
    }))
}
