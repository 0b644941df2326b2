//! API request and response structures

use chrono::{DateTime, Utc};
use pomodrive_core::{DurationConfig, Phase, TimerState};
use serde::{Deserialize, Serialize};

/// Reply to start and pause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
    pub ok: bool,
    pub running: bool,
}

impl RunResponse {
    pub fn running(running: bool) -> Self {
        Self { ok: true, running }
    }
}

/// Compact status payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub phase: Phase,
    pub seconds_left: u64,
    pub is_running: bool,
    pub cycle: u8,
}

impl From<&TimerState> for StatusResponse {
    fn from(s: &TimerState) -> Self {
        Self {
            phase: s.phase,
            seconds_left: s.seconds_left,
            is_running: s.is_running,
            cycle: s.cycle,
        }
    }
}

/// Full timer state plus derived progress and the active durations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    #[serde(flatten)]
    pub state: TimerState,
    pub progress: f64,
    pub durations: DurationConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartRequest {
    #[serde(default)]
    pub continuous: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhaseRequest {
    pub phase: Phase,
}

/// Durations are signed so that a negative value reaches validation and
/// gets a 400 instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationsRequest {
    pub work_duration: i64,
    pub short_break_duration: i64,
    pub long_break_duration: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskRequest {
    pub title: String,
    #[serde(default)]
    pub est_pomos: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundToggleResponse {
    pub on: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { ok: false, error }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
