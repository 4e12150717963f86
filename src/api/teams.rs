//! Team draft endpoint

use crate::api::error::ApiError;
use crate::service::{AppState, DraftRequest, DraftResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

/// Draft routes, relative to the `/api` prefix
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/teams", post(generate_teams))
}

async fn generate_teams(
    State(state): State<Arc<AppState>>,
    body: Result<Json<DraftRequest>, JsonRejection>,
) -> Result<Json<DraftResult>, ApiError> {
    let Json(request) = body?;
    debug!(
        "Draft requested: {} selected players, team count {:?}",
        request
            .player_ids
            .as_ref()
            .map_or_else(|| "all".to_string(), |ids| ids.len().to_string()),
        request.team_count
    );

    let result = state.draft_teams(request).await?;
    Ok(Json(result))
}
