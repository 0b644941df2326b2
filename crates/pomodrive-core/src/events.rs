use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, TimerState};

/// Every timer command produces an Event.
/// Front-ends print or forward them; the server publishes snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Event {
    TimerStarted {
        phase: Phase,
        continuous: bool,
        seconds_left: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        phase: Phase,
        seconds_left: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        phase: Phase,
        seconds_left: u64,
        at: DateTime<Utc>,
    },
    /// Manual jump to a phase (the phase tabs).
    PhaseSelected {
        phase: Phase,
        seconds_left: u64,
        at: DateTime<Utc>,
    },
    /// A phase ran out and the machine moved on.
    PhaseCompleted {
        completed: Phase,
        next: Phase,
        cycle: u8,
        /// True when continuous mode started the next phase immediately.
        auto_started: bool,
        /// Task credited with the session, if the completed phase was Work.
        credited_task: Option<String>,
        at: DateTime<Utc>,
    },
    DurationsChanged {
        work_secs: u64,
        short_break_secs: u64,
        long_break_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        #[serde(flatten)]
        state: TimerState,
        progress: f64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Short machine-friendly name, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::TimerStarted { .. } => "timer_started",
            Event::TimerPaused { .. } => "timer_paused",
            Event::TimerReset { .. } => "timer_reset",
            Event::PhaseSelected { .. } => "phase_selected",
            Event::PhaseCompleted { .. } => "phase_completed",
            Event::DurationsChanged { .. } => "durations_changed",
            Event::StateSnapshot { .. } => "state_snapshot",
        }
    }
}
