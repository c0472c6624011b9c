use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{require_user, ApiError, Pagination, PaginationMeta};
use crate::models::{Match, MatchId, MatchResult, Performance, TournamentId};

#[derive(Debug, Deserialize)]
pub struct ListMatchesParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub matches: Vec<Match>,
    pub pagination: PaginationMeta,
}

pub async fn list_matches(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListMatchesParams>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let user = require_user(&headers)?;
    let mut matches = state.store.matches(&user);

    // Filter by date range
    if let Some(ref from) = params.from {
        if let Ok(from_date) = from.parse::<chrono::NaiveDate>() {
            matches.retain(|m| m.date >= from_date);
        }
    }
    if let Some(ref to) = params.to {
        if let Ok(to_date) = to.parse::<chrono::NaiveDate>() {
            matches.retain(|m| m.date <= to_date);
        }
    }

    // Most recent first
    matches.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.opponent.cmp(&b.opponent)));

    let pagination = Pagination::new(params.page, params.page_size);
    let total_items = matches.len() as u32;
    let page: Vec<Match> = matches
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.page_size as usize)
        .collect();

    Ok(Json(MatchListResponse {
        matches: page,
        pagination: PaginationMeta::new(&pagination, total_items),
    }))
}

/// Match-recording submission.
///
/// `result` arrives as free text from data entry and is classified into
/// the closed outcome enum exactly once, here at the boundary.
#[derive(Debug, Deserialize)]
pub struct RecordMatchRequest {
    pub date: chrono::NaiveDate,
    pub opponent: String,
    pub venue: Option<String>,
    pub team1: Option<String>,
    pub tournament_id: Option<String>,
    pub result: String,
    #[serde(default)]
    pub wides: u32,
    #[serde(default)]
    pub no_balls: u32,
    #[serde(default)]
    pub performances: Vec<Performance>,
    pub notes: Option<String>,
}

pub async fn record_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RecordMatchRequest>,
) -> Result<(StatusCode, Json<Match>), ApiError> {
    let user = require_user(&headers)?;
    if req.opponent.trim().is_empty() {
        return Err(ApiError::BadRequest("opponent must not be empty".into()));
    }

    let result = MatchResult::from_free_text(&req.result);
    let mut m = Match::new(req.date, req.opponent, result)
        .with_extras(req.wides, req.no_balls)
        .with_performances(req.performances);
    if let Some(venue) = req.venue {
        m = m.with_venue(venue);
    }
    if let Some(team1) = req.team1 {
        m = m.with_team1(team1);
    }
    if let Some(tid) = req.tournament_id {
        m = m.with_tournament(TournamentId::from(tid));
    }
    if let Some(notes) = req.notes {
        m = m.with_notes(notes);
    }

    let recorded = state
        .store
        .record_match(&user, m)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(recorded)))
}

pub async fn delete_match(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(&headers)?;
    let id = MatchId::from(id);

    let deleted = state
        .store
        .delete_match(&user, &id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !deleted {
        return Err(ApiError::NotFound(format!("match {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
