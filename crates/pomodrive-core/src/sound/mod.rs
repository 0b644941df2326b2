//! Alarm and ambience coordination.
//!
//! [`SoundBoard`] is the engine's [`SoundCoordinator`]. It resolves a phase to
//! the track chosen in [`SoundPreferences`] and hands play/stop requests to an
//! [`AudioSink`]. Decoding and output are the sink's business; the default
//! [`LogSink`] only records what would be playing.

pub mod catalog;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ValidationError;
use crate::timer::{Phase, SoundCoordinator};

/// User sound settings, persisted as the `sound-storage` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundPreferences {
    #[serde(default = "default_true")]
    pub on: bool,
    #[serde(default = "default_alarm")]
    pub alarm_sound: String,
    #[serde(default = "default_work_ambience")]
    pub work_ambience: String,
    #[serde(default = "default_short_break_ambience")]
    pub short_break_ambience: String,
    #[serde(default = "default_long_break_ambience")]
    pub long_break_ambience: String,
}

fn default_true() -> bool {
    true
}
fn default_alarm() -> String {
    "basic-alarm.mp3".into()
}
fn default_work_ambience() -> String {
    "lofi/work.mp3".into()
}
fn default_short_break_ambience() -> String {
    "lofi/break.mp3".into()
}
fn default_long_break_ambience() -> String {
    "nature/calming-rain.mp3".into()
}

impl Default for SoundPreferences {
    fn default() -> Self {
        Self {
            on: true,
            alarm_sound: default_alarm(),
            work_ambience: default_work_ambience(),
            short_break_ambience: default_short_break_ambience(),
            long_break_ambience: default_long_break_ambience(),
        }
    }
}

impl SoundPreferences {
    pub fn ambience_for(&self, phase: Phase) -> &str {
        match phase {
            Phase::Work => &self.work_ambience,
            Phase::ShortBreak => &self.short_break_ambience,
            Phase::LongBreak => &self.long_break_ambience,
        }
    }

    /// # Errors
    /// Returns [`ValidationError::InvalidValue`] for an id not in [`catalog::ALARMS`].
    pub fn set_alarm(&mut self, id: &str) -> Result<(), ValidationError> {
        if !catalog::is_alarm(id) {
            return Err(unknown_sound("alarmSound", id));
        }
        self.alarm_sound = id.to_string();
        Ok(())
    }

    /// # Errors
    /// Returns [`ValidationError::InvalidValue`] for an id not in [`catalog::AMBIENCES`].
    pub fn set_ambience(&mut self, phase: Phase, id: &str) -> Result<(), ValidationError> {
        if !catalog::is_ambience(id) {
            return Err(unknown_sound("ambience", id));
        }
        let slot = match phase {
            Phase::Work => &mut self.work_ambience,
            Phase::ShortBreak => &mut self.short_break_ambience,
            Phase::LongBreak => &mut self.long_break_ambience,
        };
        *slot = id.to_string();
        Ok(())
    }
}

fn unknown_sound(field: &str, id: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        message: format!("unknown sound '{id}'"),
    }
}

/// Where audio requests end up.
pub trait AudioSink: Send {
    /// Play `track`. A looping track replaces the current loop.
    fn play(&mut self, track: &str, looping: bool);

    /// Stop the current loop, if any. One-shot sounds finish on their own.
    fn stop_loop(&mut self);
}

/// Sink that only logs.
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, track: &str, looping: bool) {
        info!(track, looping, "play");
    }

    fn stop_loop(&mut self) {
        debug!("stop loop");
    }
}

pub struct SoundBoard {
    prefs: SoundPreferences,
    sink: Box<dyn AudioSink>,
    looping: Option<String>,
}

impl fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundBoard")
            .field("prefs", &self.prefs)
            .field("looping", &self.looping)
            .finish_non_exhaustive()
    }
}

impl SoundBoard {
    pub fn new(prefs: SoundPreferences, sink: Box<dyn AudioSink>) -> Self {
        Self {
            prefs,
            sink,
            looping: None,
        }
    }

    pub fn prefs(&self) -> &SoundPreferences {
        &self.prefs
    }

    /// Ambience track currently looping.
    pub fn now_playing(&self) -> Option<&str> {
        self.looping.as_deref()
    }

    /// Flip the master switch. Turning sound off silences the loop.
    pub fn toggle(&mut self) -> bool {
        self.set_on(!self.prefs.on);
        self.prefs.on
    }

    pub fn set_on(&mut self, on: bool) {
        if !on {
            self.stop();
        }
        self.prefs.on = on;
    }

    pub fn set_alarm(&mut self, id: &str) -> Result<(), ValidationError> {
        self.prefs.set_alarm(id)
    }

    /// Changes the track for `phase`. A loop that is already playing keeps
    /// going until the next ambience request.
    pub fn set_ambience(&mut self, phase: Phase, id: &str) -> Result<(), ValidationError> {
        self.prefs.set_ambience(phase, id)
    }
}

impl SoundCoordinator for SoundBoard {
    fn enabled(&self) -> bool {
        self.prefs.on
    }

    fn play_ambience(&mut self, phase: Phase) {
        if !self.prefs.on {
            return;
        }
        self.stop();
        let track = self.prefs.ambience_for(phase).to_string();
        self.sink.play(&track, true);
        self.looping = Some(track);
    }

    fn play_alarm(&mut self) {
        if !self.prefs.on {
            return;
        }
        self.sink.play(&self.prefs.alarm_sound, false);
    }

    fn stop(&mut self) {
        if self.looping.take().is_some() {
            self.sink.stop_loop();
        }
    }
}
