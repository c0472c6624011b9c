use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::{require_user, ApiError};
use crate::models::{MatchId, VictoryPost};
use crate::store::WallDelete;

#[derive(Debug, Serialize)]
pub struct WallResponse {
    pub posts: Vec<VictoryPost>,
}

/// The wall is globally readable; no user header required.
pub async fn list_posts(State(state): State<AppState>) -> Json<WallResponse> {
    Json(WallResponse {
        posts: state.store.victory_posts(),
    })
}

#[derive(Debug, Deserialize)]
pub struct NewPostRequest {
    pub match_id: String,
    pub caption: String,
    pub image_uri: Option<String>,
}

pub async fn add_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<NewPostRequest>,
) -> Result<(StatusCode, Json<VictoryPost>), ApiError> {
    let user = require_user(&headers)?;
    let match_id = MatchId::from(req.match_id);

    let m = state
        .store
        .matches(&user)
        .into_iter()
        .find(|m| m.id == match_id)
        .ok_or_else(|| ApiError::NotFound(format!("match {}", match_id)))?;

    let mut post = VictoryPost::from_match(&m, req.caption, user);
    if let Some(uri) = req.image_uri {
        post = post.with_image(uri);
    }

    state
        .store
        .add_victory_post(&post)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user = require_user(&headers)?;

    let outcome = state
        .store
        .delete_victory_post(&user, &id)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    match outcome {
        WallDelete::Deleted => Ok(StatusCode::NO_CONTENT),
        WallDelete::NotFound => Err(ApiError::NotFound(format!("post {}", id))),
        WallDelete::Forbidden => Err(ApiError::Forbidden(
            "only the author may delete a post".into(),
        )),
    }
}
