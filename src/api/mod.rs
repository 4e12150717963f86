//! HTTP surface of the team draft service
//!
//! Roster and draft endpoints live under `/api`; health, statistics and
//! metrics endpoints sit at the root.

pub mod error;
pub mod health;
pub mod players;
pub mod server;
pub mod teams;

pub use error::ApiError;
pub use server::ApiServer;

use crate::service::AppState;
use axum::Router;
use std::sync::Arc;

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = players::routes().merge(teams::routes());

    Router::new()
        .nest("/api", api)
        .merge(health::routes())
        .with_state(state)
}
