//! Timer engine implementation.
//!
//! The engine is a pulse-driven state machine. It does not use internal
//! threads or read the clock - the caller invokes `tick()` once per elapsed
//! second.
//!
//! ## State Transitions
//!
//! ```text
//!            start / start_continuous
//!   Idle  ───────────────────────────>  Running
//!    ^  <───────────────────────────     |
//!    |        pause / reset / set_phase  |  tick at 1s left
//!    |                                   v
//!    +──── (single-shot) ───── next phase ──── (continuous) ──> Running
//! ```
//!
//! Work is followed by a short break while `cycle < 3`, otherwise by a long
//! break; every break is followed by Work, and entering Work advances `cycle`
//! modulo 4.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(DurationConfig::default(), sound, tasks);
//! engine.start();
//! // Once per second:
//! engine.tick(); // Returns Some(Event) when a phase completes
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::durations::DurationConfig;
use super::hooks::{SoundCoordinator, TaskTracker};
use super::phase::{next_cycle, next_phase, Phase};
use crate::error::ConfigError;
use crate::events::Event;

/// Observable run-state of the timer.
///
/// Only the engine mutates it; everyone else gets a shared reference or a
/// copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub phase: Phase,
    pub seconds_left: u64,
    pub total_duration: u64,
    pub is_running: bool,
    pub is_continuous: bool,
    pub cycle: u8,
}

impl TimerState {
    /// Fresh idle state at the start of a Work phase.
    pub fn initial(durations: &DurationConfig) -> Self {
        let work = durations.duration_for(Phase::Work);
        Self {
            phase: Phase::Work,
            seconds_left: work,
            total_duration: work,
            is_running: false,
            is_continuous: false,
            cycle: 0,
        }
    }

    /// `seconds_left / total_duration`, 1.0 at phase start.
    pub fn remaining_fraction(&self) -> f64 {
        if self.total_duration == 0 {
            return 0.0;
        }
        self.seconds_left as f64 / self.total_duration as f64
    }
}

/// Core timer engine.
///
/// Owns the run-state, the duration configuration and the two collaborators
/// it notifies at phase boundaries.
#[derive(Debug)]
pub struct TimerEngine<S, T> {
    durations: DurationConfig,
    state: TimerState,
    sound: S,
    tasks: T,
}

impl<S: SoundCoordinator, T: TaskTracker> TimerEngine<S, T> {
    /// Create an idle engine at the start of a Work phase.
    pub fn new(durations: DurationConfig, sound: S, tasks: T) -> Self {
        Self {
            state: TimerState::initial(&durations),
            durations,
            sound,
            tasks,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn durations(&self) -> &DurationConfig {
        &self.durations
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn sound_mut(&mut self) -> &mut S {
        &mut self.sound
    }

    pub fn tasks(&self) -> &T {
        &self.tasks
    }

    pub fn tasks_mut(&mut self) -> &mut T {
        &mut self.tasks
    }

    /// 0.0 .. 1.0 progress within the current phase.
    pub fn progress(&self) -> f64 {
        1.0 - self.state.remaining_fraction()
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            progress: self.progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Run the current phase, pausing again when it expires.
    pub fn start(&mut self) -> Event {
        self.run(false)
    }

    /// Run the current phase and keep auto-advancing through later ones.
    pub fn start_continuous(&mut self) -> Event {
        self.run(true)
    }

    /// Stop counting down. Ambience keeps playing.
    ///
    /// Returns `None` if the timer was already idle.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.state.is_running {
            return None;
        }
        self.state.is_running = false;
        debug!(phase = %self.state.phase, seconds_left = self.state.seconds_left, "timer paused");
        Some(Event::TimerPaused {
            phase: self.state.phase,
            seconds_left: self.state.seconds_left,
            at: Utc::now(),
        })
    }

    /// Rewind the current phase to its configured length and go idle.
    ///
    /// Phase and cycle are kept. Picks up duration changes made while the
    /// phase was running.
    pub fn reset(&mut self) -> Event {
        self.enter(self.state.phase);
        self.state.is_running = false;
        if self.sound.enabled() {
            self.sound.play_ambience(self.state.phase);
        }
        debug!(phase = %self.state.phase, "timer reset");
        Event::TimerReset {
            phase: self.state.phase,
            seconds_left: self.state.seconds_left,
            at: Utc::now(),
        }
    }

    /// Jump to `phase` without touching the cycle counter.
    pub fn set_phase(&mut self, phase: Phase) -> Event {
        self.enter(phase);
        self.state.is_running = false;
        debug!(%phase, "phase selected");
        Event::PhaseSelected {
            phase,
            seconds_left: self.state.seconds_left,
            at: Utc::now(),
        }
    }

    /// Replace the configured durations.
    ///
    /// The running phase keeps its countdown; the new values apply from the
    /// next reset, phase selection or transition.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if any value is not positive. The
    /// previous durations are kept.
    pub fn set_durations(&mut self, work: i64, short_break: i64, long_break: i64) -> Result<Event, ConfigError> {
        let durations = DurationConfig::new(work, short_break, long_break)?;
        Ok(self.apply_durations(durations))
    }

    /// Replace the configured durations with an already validated config.
    pub fn apply_durations(&mut self, durations: DurationConfig) -> Event {
        self.durations = durations;
        info!(
            work = durations.work_secs(),
            short_break = durations.short_break_secs(),
            long_break = durations.long_break_secs(),
            "durations updated"
        );
        Event::DurationsChanged {
            work_secs: self.durations.work_secs(),
            short_break_secs: self.durations.short_break_secs(),
            long_break_secs: self.durations.long_break_secs(),
            at: Utc::now(),
        }
    }

    /// Advance by one second. Returns `Some(Event::PhaseCompleted)` when a
    /// phase finishes.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.state.is_running || self.state.seconds_left == 0 {
            return None;
        }
        if self.state.seconds_left > 1 {
            self.state.seconds_left -= 1;
            return None;
        }
        Some(self.complete_phase())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn run(&mut self, continuous: bool) -> Event {
        self.state.is_running = true;
        self.state.is_continuous = continuous;
        if self.sound.enabled() {
            self.sound.play_ambience(self.state.phase);
        }
        debug!(phase = %self.state.phase, continuous, "timer started");
        Event::TimerStarted {
            phase: self.state.phase,
            continuous,
            seconds_left: self.state.seconds_left,
            at: Utc::now(),
        }
    }

    fn enter(&mut self, phase: Phase) {
        let secs = self.durations.duration_for(phase);
        self.state.phase = phase;
        self.state.seconds_left = secs;
        self.state.total_duration = secs;
    }

    fn complete_phase(&mut self) -> Event {
        let completed = self.state.phase;
        let next = next_phase(completed, self.state.cycle);
        let cycle = next_cycle(next, self.state.cycle);
        let continuing = self.state.is_continuous;

        self.enter(next);
        self.state.cycle = cycle;
        self.state.is_running = continuing;

        let credited_task = if completed == Phase::Work {
            let active = self.tasks.find_active_task();
            if let Some(id) = &active {
                self.tasks.increment_completed_sessions(id);
            }
            active
        } else {
            None
        };

        self.sound.play_alarm();
        if continuing {
            self.sound.play_ambience(next);
        } else {
            self.sound.stop();
        }

        info!(%completed, %next, cycle, continuing, "phase completed");
        Event::PhaseCompleted {
            completed,
            next,
            cycle,
            auto_started: continuing,
            credited_task,
            at: Utc::now(),
        }
    }
}
