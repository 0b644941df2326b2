use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of cycle slots before the counter wraps.
pub const CYCLE_LEN: u8 = 4;

/// The activity segment the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

/// Which ambience family a phase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbienceKind {
    Work,
    Break,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Work, Phase::ShortBreak, Phase::LongBreak];

    pub fn is_break(self) -> bool {
        !matches!(self, Phase::Work)
    }

    pub fn ambience_kind(self) -> AmbienceKind {
        if self.is_break() {
            AmbienceKind::Break
        } else {
            AmbienceKind::Work
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Work => "work",
            Phase::ShortBreak => "shortBreak",
            Phase::LongBreak => "longBreak",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Short Break",
            Phase::LongBreak => "Long Break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Phase {
    type Err = ValidationError;

    /// Accepts the wire names plus the kebab/snake spellings a shell user types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "work" => Ok(Phase::Work),
            "shortbreak" | "short" => Ok(Phase::ShortBreak),
            "longbreak" | "long" => Ok(Phase::LongBreak),
            _ => Err(ValidationError::InvalidValue {
                field: "phase".into(),
                message: format!("unknown phase '{s}'"),
            }),
        }
    }
}

/// Phase that follows `phase` when it expires at the given cycle count.
///
/// Work routes to a long break once the counter has reached 3; every break
/// returns to Work.
pub fn next_phase(phase: Phase, cycle: u8) -> Phase {
    match phase {
        Phase::Work if cycle < CYCLE_LEN - 1 => Phase::ShortBreak,
        Phase::Work => Phase::LongBreak,
        Phase::ShortBreak | Phase::LongBreak => Phase::Work,
    }
}

/// Cycle count after entering `next`.
///
/// The counter advances on entry into Work, i.e. after a break finishes.
pub fn next_cycle(next: Phase, cycle: u8) -> u8 {
    if next == Phase::Work {
        (cycle + 1) % CYCLE_LEN
    } else {
        cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_routes_by_cycle() {
        assert_eq!(next_phase(Phase::Work, 0), Phase::ShortBreak);
        assert_eq!(next_phase(Phase::Work, 2), Phase::ShortBreak);
        assert_eq!(next_phase(Phase::Work, 3), Phase::LongBreak);
    }

    #[test]
    fn breaks_return_to_work() {
        for cycle in 0..CYCLE_LEN {
            assert_eq!(next_phase(Phase::ShortBreak, cycle), Phase::Work);
            assert_eq!(next_phase(Phase::LongBreak, cycle), Phase::Work);
        }
    }

    #[test]
    fn cycle_advances_only_into_work() {
        assert_eq!(next_cycle(Phase::ShortBreak, 2), 2);
        assert_eq!(next_cycle(Phase::LongBreak, 3), 3);
        assert_eq!(next_cycle(Phase::Work, 1), 2);
        assert_eq!(next_cycle(Phase::Work, 3), 0);
    }

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("work".parse::<Phase>().unwrap(), Phase::Work);
        assert_eq!("short-break".parse::<Phase>().unwrap(), Phase::ShortBreak);
        assert_eq!("longBreak".parse::<Phase>().unwrap(), Phase::LongBreak);
        assert_eq!("long".parse::<Phase>().unwrap(), Phase::LongBreak);
        assert!("lunch".parse::<Phase>().is_err());
    }

    #[test]
    fn serializes_with_wire_names() {
        assert_eq!(serde_json::to_string(&Phase::ShortBreak).unwrap(), "\"shortBreak\"");
        assert_eq!(Phase::LongBreak.to_string(), "longBreak");
    }
}
