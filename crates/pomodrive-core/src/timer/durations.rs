use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::error::ConfigError;

pub const DEFAULT_WORK_SECS: u64 = 25 * 60;
pub const DEFAULT_SHORT_BREAK_SECS: u64 = 5 * 60;
pub const DEFAULT_LONG_BREAK_SECS: u64 = 15 * 60;

/// Configured length of each phase, in seconds.
///
/// Persisted as the `timer-durations` record. Values are always positive:
/// [`DurationConfig::new`] rejects zero, and a stored record that fails
/// [`DurationConfig::validate`] is discarded at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationConfig {
    #[serde(rename = "workDuration")]
    work_secs: u64,
    #[serde(rename = "shortBreakDuration")]
    short_break_secs: u64,
    #[serde(rename = "longBreakDuration")]
    long_break_secs: u64,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            short_break_secs: DEFAULT_SHORT_BREAK_SECS,
            long_break_secs: DEFAULT_LONG_BREAK_SECS,
        }
    }
}

impl DurationConfig {
    /// Build a validated config.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first non-positive field.
    pub fn new(work: i64, short_break: i64, long_break: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            work_secs: positive("workDuration", work)?,
            short_break_secs: positive("shortBreakDuration", short_break)?,
            long_break_secs: positive("longBreakDuration", long_break)?,
        })
    }

    /// Same as [`DurationConfig::new`] but takes whole minutes.
    pub fn from_minutes(work: i64, short_break: i64, long_break: i64) -> Result<Self, ConfigError> {
        Self::new(
            work.saturating_mul(60),
            short_break.saturating_mul(60),
            long_break.saturating_mul(60),
        )
    }

    pub fn work_secs(&self) -> u64 {
        self.work_secs
    }

    pub fn short_break_secs(&self) -> u64 {
        self.short_break_secs
    }

    pub fn long_break_secs(&self) -> u64 {
        self.long_break_secs
    }

    pub fn duration_for(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_secs,
            Phase::ShortBreak => self.short_break_secs,
            Phase::LongBreak => self.long_break_secs,
        }
    }

    /// Rejects records that were hand-edited into an invalid shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::new(
            self.work_secs as i64,
            self.short_break_secs as i64,
            self.long_break_secs as i64,
        )
        .map(|_| ())
    }
}

fn positive(key: &str, value: i64) -> Result<u64, ConfigError> {
    if value > 0 {
        Ok(value as u64)
    } else {
        Err(ConfigError::InvalidValue {
            key: key.into(),
            message: format!("duration must be a positive number of seconds, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_25_5_15_minutes() {
        let d = DurationConfig::default();
        assert_eq!(d.work_secs(), 1500);
        assert_eq!(d.short_break_secs(), 300);
        assert_eq!(d.long_break_secs(), 900);
    }

    #[test]
    fn new_rejects_non_positive() {
        let err = DurationConfig::new(-5, 10, 10).unwrap_err();
        assert!(err.to_string().contains("workDuration"));

        let err = DurationConfig::new(10, 0, 10).unwrap_err();
        assert!(err.to_string().contains("shortBreakDuration"));
    }

    #[test]
    fn from_minutes_rejects_non_positive() {
        assert!(DurationConfig::from_minutes(25, 5, 0).is_err());
    }

    #[test]
    fn new_sets_all_three() {
        let d = DurationConfig::new(60, 20, 40).unwrap();
        assert_eq!(d.duration_for(Phase::Work), 60);
        assert_eq!(d.duration_for(Phase::ShortBreak), 20);
        assert_eq!(d.duration_for(Phase::LongBreak), 40);
    }

    #[test]
    fn from_minutes_scales() {
        let d = DurationConfig::from_minutes(50, 10, 30).unwrap();
        assert_eq!(d.work_secs(), 3000);
        assert_eq!(d.long_break_secs(), 1800);
    }

    #[test]
    fn record_uses_camel_case_keys() {
        let json = serde_json::to_value(DurationConfig::default()).unwrap();
        assert_eq!(json["workDuration"], 1500);
        assert_eq!(json["shortBreakDuration"], 300);
        assert_eq!(json["longBreakDuration"], 900);
    }

    #[test]
    fn validate_catches_zeroed_record() {
        let d: DurationConfig = serde_json::from_str(
            r#"{"workDuration":0,"shortBreakDuration":300,"longBreakDuration":900}"#,
        )
        .unwrap();
        assert!(d.validate().is_err());
    }
}
