//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use team_draft::api::build_router;
use team_draft::config::AppConfig;
use team_draft::service::AppState;
use team_draft::types::{Player, PlayerInput, SkillProfile};
use tower::ServiceExt;

/// Player with the same rating in every dimension
pub fn uniform_player(id: i64, name: &str, rating: u8) -> Player {
    Player::new(id, name, None, SkillProfile::uniform(rating))
}

/// Players named "Player N" with the given uniform ratings, ids from 1
pub fn roster_with_ratings(ratings: &[u8]) -> Vec<Player> {
    ratings
        .iter()
        .enumerate()
        .map(|(i, rating)| uniform_player(i as i64 + 1, &format!("Player {}", i + 1), *rating))
        .collect()
}

/// A realistic mixed roster of twelve players
pub fn club_roster() -> Vec<Player> {
    let profiles: [(&str, [u8; 7]); 12] = [
        ("Beatriz", [9, 8, 9, 8, 7, 9, 8]),
        ("Caio", [5, 6, 5, 7, 6, 5, 6]),
        ("Daniela", [7, 7, 8, 6, 6, 7, 7]),
        ("Eduardo", [8, 6, 6, 9, 9, 6, 7]),
        ("Fernanda", [4, 5, 5, 4, 3, 5, 5]),
        ("Gustavo", [6, 7, 6, 6, 7, 6, 6]),
        ("Helena", [10, 9, 9, 9, 8, 9, 9]),
        ("Igor", [3, 4, 4, 5, 5, 3, 4]),
        ("Julia", [7, 8, 7, 7, 6, 8, 8]),
        ("Lucas", [6, 5, 6, 8, 8, 5, 6]),
        ("Mariana", [8, 8, 8, 7, 7, 8, 8]),
        ("Nicolas", [5, 5, 4, 6, 6, 5, 5]),
    ];

    profiles
        .iter()
        .enumerate()
        .map(|(i, (name, r))| {
            Player::new(
                i as i64 + 1,
                *name,
                None,
                SkillProfile {
                    serve: r[0],
                    reception: r[1],
                    passing: r[2],
                    attack: r[3],
                    block: r[4],
                    defense: r[5],
                    mobility: r[6],
                },
            )
        })
        .collect()
}

/// Valid create body
pub fn player_input(name: &str, rating: u8) -> PlayerInput {
    PlayerInput {
        name: name.to_string(),
        photo_url: None,
        skills: SkillProfile::uniform(rating),
    }
}

/// Running service state with an empty roster
pub async fn test_state(config: AppConfig) -> Arc<AppState> {
    let state = Arc::new(
        AppState::new(config)
            .await
            .expect("Failed to create app state"),
    );
    state.start().await.expect("Failed to start app state");
    state
}

/// Router over a running state seeded with the sample roster
pub async fn seeded_app() -> (Router, Arc<AppState>) {
    let mut config = AppConfig::default();
    config.roster.seed_sample_players = true;
    let state = test_state(config).await;
    (build_router(state.clone()), state)
}

/// Router over a running state with an empty roster
pub async fn empty_app() -> (Router, Arc<AppState>) {
    let state = test_state(AppConfig::default()).await;
    (build_router(state.clone()), state)
}

/// Send a request with an optional JSON body
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed")
}

/// Send raw text as a JSON body
pub async fn send_raw(router: &Router, method: &str, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    router
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed")
}

/// Status and decoded JSON body
pub async fn json_response(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Status and body text
pub async fn text_response(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
