//! HTTP API module
//!
//! A local mirror of the timer commands plus the task and sound edits.

pub mod error;
pub mod handlers;
pub mod responses;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::ServerState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/start", post(start_handler))
        .route("/api/pause", post(pause_handler))
        .route("/api/status", get(status_handler))
        .route("/api/snapshot", get(snapshot_handler))
        .route("/api/reset", post(reset_handler))
        .route("/api/phase", post(phase_handler))
        .route("/api/durations", put(durations_handler))
        .route("/api/tasks", get(list_tasks_handler).post(add_task_handler))
        .route("/api/tasks/:id/toggle", post(toggle_task_handler))
        .route("/api/tasks/:id", axum::routing::delete(delete_task_handler))
        .route("/api/sound/toggle", post(sound_toggle_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
