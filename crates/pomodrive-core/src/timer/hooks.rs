//! Collaborators the timer engine notifies at phase boundaries.
//!
//! The engine owns one implementation of each trait and never names the
//! concrete sound or task modules. Notifications are fire-and-forget: they
//! return nothing and the engine's own state has already been updated by the
//! time they run.

use super::phase::Phase;

pub type TaskId = String;

/// Sessions are credited to whatever task this reports as active.
pub trait TaskTracker {
    /// The task that should receive credit for a finished work phase.
    fn find_active_task(&self) -> Option<TaskId>;

    /// Add one completed session to the task.
    fn increment_completed_sessions(&mut self, id: &str);
}

/// Audio side of the timer.
pub trait SoundCoordinator {
    /// User-controlled switch. Ambience is only requested while this is true.
    fn enabled(&self) -> bool;

    /// Start the looping ambience for `phase`.
    ///
    /// `phase.ambience_kind()` gives the work/break family; the phase itself is
    /// passed so short and long breaks can use different tracks.
    fn play_ambience(&mut self, phase: Phase);

    /// One-shot alarm at the end of a phase.
    fn play_alarm(&mut self);

    /// Stop the looping ambience.
    fn stop(&mut self);
}

impl TaskTracker for () {
    fn find_active_task(&self) -> Option<TaskId> {
        None
    }

    fn increment_completed_sessions(&mut self, _id: &str) {}
}

impl SoundCoordinator for () {
    fn enabled(&self) -> bool {
        false
    }

    fn play_ambience(&mut self, _phase: Phase) {}

    fn play_alarm(&mut self) {}

    fn stop(&mut self) {}
}
