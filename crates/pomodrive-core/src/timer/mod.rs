mod durations;
mod engine;
mod hooks;
mod phase;

pub use durations::{
    DurationConfig, DEFAULT_LONG_BREAK_SECS, DEFAULT_SHORT_BREAK_SECS, DEFAULT_WORK_SECS,
};
pub use engine::{TimerEngine, TimerState};
pub use hooks::{SoundCoordinator, TaskId, TaskTracker};
pub use phase::{next_cycle, next_phase, AmbienceKind, Phase, CYCLE_LEN};
