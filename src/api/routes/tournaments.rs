use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{require_user, ApiError};
use crate::calculate::compute_standings;
use crate::models::{Standing, Tournament, TournamentId, TournamentStatus};

#[derive(Debug, Serialize)]
pub struct TournamentListResponse {
    pub tournaments: Vec<Tournament>,
}

pub async fn list_tournaments(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TournamentListResponse>, ApiError> {
    let user = require_user(&headers)?;
    let mut tournaments = state.store.tournaments(&user);
    tournaments.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(TournamentListResponse { tournaments }))
}

#[derive(Debug, Deserialize)]
pub struct NewTournamentRequest {
    pub name: String,
    pub format: String,
    #[serde(default)]
    pub teams: u32,
    #[serde(default)]
    pub matches: u32,
    pub status: Option<TournamentStatus>,
}

pub async fn add_tournament(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<NewTournamentRequest>,
) -> Result<(StatusCode, Json<Tournament>), ApiError> {
    let user = require_user(&headers)?;
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "tournament name must not be empty".into(),
        ));
    }

    let mut tournament =
        Tournament::new(req.name, req.format).with_counts(req.teams, req.matches);
    if let Some(status) = req.status {
        tournament = tournament.with_status(status);
    }

    state
        .store
        .add_tournament(&user, &tournament)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(tournament)))
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub tournament_id: String,
    pub standings: Vec<Standing>,
}

pub async fn standings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let user = require_user(&headers)?;
    let id = TournamentId::from(id);

    if state.store.tournament(&user, &id).is_none() {
        return Err(ApiError::NotFound(format!("tournament {}", id)));
    }

    let matches = state.store.tournament_matches(&user, &id);
    let standings = compute_standings(&matches);

    Ok(Json(StandingsResponse {
        tournament_id: id.to_string(),
        standings,
    }))
}
