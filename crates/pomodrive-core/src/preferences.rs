//! Presentation preferences, persisted as the `preference-storage` record.
//!
//! The core does not render anything; it only stores the choice so every
//! front-end picks up the same look.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Dark,
    Oled,
    #[default]
    EInk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgEffect {
    #[default]
    None,
    Zen,
    Progress,
    Pulse,
    Rain,
    Particles,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Oled, Theme::EInk];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Oled => "oled",
            Theme::EInk => "e-ink",
        }
    }
}

impl BgEffect {
    pub const ALL: [BgEffect; 6] = [
        BgEffect::None,
        BgEffect::Zen,
        BgEffect::Progress,
        BgEffect::Pulse,
        BgEffect::Rain,
        BgEffect::Particles,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BgEffect::None => "none",
            BgEffect::Zen => "zen",
            BgEffect::Progress => "progress",
            BgEffect::Pulse => "pulse",
            BgEffect::Rain => "rain",
            BgEffect::Particles => "particles",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BgEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted || (wanted == "eink" && *t == Theme::EInk))
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "theme".into(),
                message: format!("unknown theme '{s}'"),
            })
    }
}

impl FromStr for BgEffect {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_ascii_lowercase();
        BgEffect::ALL
            .into_iter()
            .find(|e| e.as_str() == wanted)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "bgEffect".into(),
                message: format!("unknown background effect '{s}'"),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub bg_effect: BgEffect,
}

impl Preferences {
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_bg_effect(&mut self, effect: BgEffect) {
        self.bg_effect = effect;
    }
}
