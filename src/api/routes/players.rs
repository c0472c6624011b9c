use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::{require_user, ApiError, Pagination, PaginationMeta};
use crate::models::{Player, PlayerId, PlayerRole, PlayerStats};

#[derive(Debug, Deserialize)]
pub struct ListPlayersParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
    pub pagination: PaginationMeta,
}

pub async fn list_players(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListPlayersParams>,
) -> Result<Json<PlayerListResponse>, ApiError> {
    let user = require_user(&headers)?;
    let mut players = state.store.players(&user);
    players.sort_by(|a, b| a.name.cmp(&b.name));

    let pagination = Pagination::new(params.page, params.page_size);
    let total_items = players.len() as u32;
    let page: Vec<Player> = players
        .into_iter()
        .skip(pagination.offset() as usize)
        .take(pagination.page_size as usize)
        .collect();

    Ok(Json(PlayerListResponse {
        players: page,
        pagination: PaginationMeta::new(&pagination, total_items),
    }))
}

#[derive(Debug, Deserialize)]
pub struct NewPlayerRequest {
    pub name: String,
    pub role: PlayerRole,
    pub team: Option<String>,
    #[serde(default)]
    pub stats: PlayerStats,
}

pub async fn add_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<NewPlayerRequest>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let user = require_user(&headers)?;
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("player name must not be empty".into()));
    }

    let mut player = Player::new(req.name, req.role).with_stats(req.stats);
    if let Some(team) = req.team {
        player = player.with_team(team);
    }

    state
        .store
        .add_player(&user, &player)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(player)))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlayerRequest {
    pub name: String,
    pub role: PlayerRole,
    pub team: Option<String>,
    /// Full replacement stats record; there is no partial merge
    #[serde(default)]
    pub stats: PlayerStats,
}

pub async fn update_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlayerRequest>,
) -> Result<Json<Player>, ApiError> {
    let user = require_user(&headers)?;
    let id = PlayerId::from(id);

    let mut player = state
        .store
        .players(&user)
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| ApiError::NotFound(format!("player {}", id)))?;

    player.name = req.name;
    player.role = req.role;
    player.team = req.team;
    player.replace_stats(req.stats);

    let updated = state
        .store
        .update_player(&user, &player)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !updated {
        return Err(ApiError::NotFound(format!("player {}", id)));
    }

    Ok(Json(player))
}

pub async fn delete_player(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(&headers)?;
    let id = PlayerId::from(id);

    let deleted = state
        .store
        .delete_player(&user, &id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !deleted {
        return Err(ApiError::NotFound(format!("player {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
