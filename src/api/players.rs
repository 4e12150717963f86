//! Roster endpoints under `/api/players`

use crate::api::error::ApiError;
use crate::service::AppState;
use crate::types::{Player, PlayerId, PlayerInput, PlayerPatch};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Player routes, relative to the `/api` prefix
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route(
            "/players/{id}",
            get(get_player)
                .put(replace_player)
                .patch(patch_player)
                .delete(delete_player),
        )
        .route("/players/search/{query}", get(search_players))
}

fn parse_id(raw: &str) -> ApiResult<PlayerId> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid player ID"))
}

fn player_not_found() -> ApiError {
    ApiError::not_found("Player not found")
}

/// Count a roster operation before handing the result on
fn tracked<T>(state: &AppState, operation: &str, result: crate::Result<T>) -> crate::Result<T> {
    state
        .metrics()
        .record_roster_operation(operation, result.is_ok());
    result
}

async fn list_players(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Player>>> {
    debug!("Listing players");
    let players = tracked(&state, "list", state.roster().list_players().await)?;
    Ok(Json(players))
}

async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Player>> {
    let id = parse_id(&id)?;
    debug!("Fetching player {}", id);

    tracked(&state, "get", state.roster().get_player(id).await)?
        .map(Json)
        .ok_or_else(player_not_found)
}

async fn create_player(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<PlayerInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let Json(input) = body?;
    debug!("Creating player {}", input.name);

    let player = tracked(&state, "create", state.roster().create_player(input).await)?;
    state.refresh_metrics().await;
    Ok((StatusCode::CREATED, Json(player)))
}

async fn replace_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: std::result::Result<Json<PlayerInput>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let id = parse_id(&id)?;
    let Json(input) = body?;
    debug!("Replacing player {}", id);

    let result = state.roster().update_player(id, input.into()).await;
    tracked(&state, "update", result)?
        .map(Json)
        .ok_or_else(player_not_found)
}

async fn patch_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: std::result::Result<Json<PlayerPatch>, JsonRejection>,
) -> ApiResult<Json<Player>> {
    let id = parse_id(&id)?;
    let Json(patch) = body?;
    debug!("Patching player {}", id);

    let result = state.roster().update_player(id, patch).await;
    tracked(&state, "update", result)?
        .map(Json)
        .ok_or_else(player_not_found)
}

async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Player>> {
    let id = parse_id(&id)?;
    debug!("Deleting player {}", id);

    let deleted = tracked(&state, "delete", state.roster().delete_player(id).await)?
        .ok_or_else(player_not_found)?;
    state.refresh_metrics().await;
    Ok(Json(deleted))
}

async fn search_players(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> ApiResult<Json<Vec<Player>>> {
    debug!("Searching players for {:?}", query);
    let players = tracked(&state, "search", state.roster().search_players(&query).await)?;
    Ok(Json(players))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balancer::SnakeDraftBalancer;
    use crate::config::AppConfig;
    use crate::error::DraftError;
    use crate::metrics::MetricsCollector;
    use crate::roster::storage::MockRosterStore;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app_with_store(store: MockRosterStore) -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::with_components(
            AppConfig::default(),
            Arc::new(store),
            Arc::new(SnakeDraftBalancer::default()),
            Arc::new(MetricsCollector::new().unwrap()),
        ));
        let router = Router::new()
            .nest("/api", routes())
            .with_state(state.clone());
        (router, state)
    }

    async fn get_status(router: Router, uri: &str) -> StatusCode {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(
            parse_id("abc").unwrap_err().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let mut store = MockRosterStore::new();
        store.expect_list_players().returning(|| {
            Err(DraftError::Storage {
                message: "lock poisoned".to_string(),
            }
            .into())
        });
        let (router, state) = app_with_store(store);

        assert_eq!(
            get_status(router, "/api/players").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            state
                .metrics()
                .roster()
                .operations_total
                .with_label_values(&["list", "error"])
                .get(),
            1
        );
    }

    #[tokio::test]
    async fn test_missing_player_is_404() {
        let mut store = MockRosterStore::new();
        store
            .expect_get_player()
            .withf(|id| *id == 7)
            .returning(|_| Ok(None));
        let (router, _) = app_with_store(store);

        assert_eq!(
            get_status(router, "/api/players/7").await,
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_bad_id_never_reaches_store() {
        let mut store = MockRosterStore::new();
        store.expect_get_player().never();
        let (router, _) = app_with_store(store);

        assert_eq!(
            get_status(router, "/api/players/seven").await,
            StatusCode::BAD_REQUEST
        );
    }
}
