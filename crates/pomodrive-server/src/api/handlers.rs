//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use pomodrive_core::{Task, TaskList};
use tracing::info;

use super::{
    error::ApiError,
    responses::{
        DurationsRequest, HealthResponse, NewTaskRequest, PhaseRequest, RunResponse,
        SnapshotResponse, SoundToggleResponse, StartRequest, StatusResponse,
    },
};
use crate::state::ServerState;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Handle POST /api/start - Start the countdown, optionally in continuous mode
///
/// An empty body starts single-shot. A body that is present must decode as
/// [`StartRequest`].
pub async fn start_handler(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> ApiResult<RunResponse> {
    let continuous = if body.iter().all(u8::is_ascii_whitespace) {
        false
    } else {
        serde_json::from_slice::<StartRequest>(&body)
            .map_err(|e| ApiError::BadRequest(format!("invalid start request: {e}")))?
            .continuous
    };
    state.with_app(|app| {
        if continuous {
            app.start_continuous()
        } else {
            app.start()
        }
    })?;
    info!(continuous, "timer started");
    Ok(Json(RunResponse::running(true)))
}

/// Handle POST /api/pause
pub async fn pause_handler(State(state): State<Arc<ServerState>>) -> ApiResult<RunResponse> {
    if state.with_app(|app| app.pause())?.is_some() {
        info!("timer paused");
    }
    Ok(Json(RunResponse::running(false)))
}

/// Handle GET /api/status
pub async fn status_handler(State(state): State<Arc<ServerState>>) -> ApiResult<StatusResponse> {
    let status = state.read(|app| StatusResponse::from(app.state()))?;
    Ok(Json(status))
}

/// Handle GET /api/snapshot
pub async fn snapshot_handler(State(state): State<Arc<ServerState>>) -> ApiResult<SnapshotResponse> {
    let snapshot = state.read(|app| SnapshotResponse {
        state: *app.state(),
        progress: app.engine().progress(),
        durations: *app.durations(),
    })?;
    Ok(Json(snapshot))
}

/// Handle POST /api/reset
pub async fn reset_handler(State(state): State<Arc<ServerState>>) -> ApiResult<StatusResponse> {
    let status = state.with_app(|app| {
        app.reset();
        StatusResponse::from(app.state())
    })?;
    info!("timer reset");
    Ok(Json(status))
}

/// Handle POST /api/phase - Manual phase override
pub async fn phase_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<PhaseRequest>,
) -> ApiResult<StatusResponse> {
    let status = state.with_app(|app| {
        app.set_phase(req.phase);
        StatusResponse::from(app.state())
    })?;
    info!(phase = %req.phase, "phase selected");
    Ok(Json(status))
}

/// Handle PUT /api/durations
pub async fn durations_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<DurationsRequest>,
) -> ApiResult<SnapshotResponse> {
    let snapshot = state.with_app(|app| {
        app.set_durations(req.work_duration, req.short_break_duration, req.long_break_duration)?;
        Ok::<_, ApiError>(SnapshotResponse {
            state: *app.state(),
            progress: app.engine().progress(),
            durations: *app.durations(),
        })
    })??;
    Ok(Json(snapshot))
}

/// Handle GET /api/tasks
pub async fn list_tasks_handler(State(state): State<Arc<ServerState>>) -> ApiResult<TaskList> {
    Ok(Json(state.read(|app| app.tasks().clone())?))
}

/// Handle POST /api/tasks
pub async fn add_task_handler(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<NewTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = state.with_app(|app| app.add_task(&req.title, req.est_pomos))??;
    info!(id = %task.id, "task added");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Handle POST /api/tasks/:id/toggle
pub async fn toggle_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ApiResult<Task> {
    Ok(Json(state.with_app(|app| app.toggle_task(&id))??))
}

/// Handle DELETE /api/tasks/:id
pub async fn delete_task_handler(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ApiResult<Task> {
    let task = state.with_app(|app| app.delete_task(&id))??;
    info!(id = %task.id, "task deleted");
    Ok(Json(task))
}

/// Handle POST /api/sound/toggle
pub async fn sound_toggle_handler(
    State(state): State<Arc<ServerState>>,
) -> ApiResult<SoundToggleResponse> {
    let on = state.with_app(|app| app.toggle_sound())??;
    Ok(Json(SoundToggleResponse { on }))
}

/// Handle GET /health - Health check
pub async fn health_handler(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.uptime()))
}
