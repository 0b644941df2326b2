//! Built-in sound identifiers.
//!
//! Identifiers are file paths relative to the sounds directory of whatever
//! front-end does the actual playback.

/// A selectable sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SoundOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn opt(id: &'static str, label: &'static str) -> SoundOption {
    SoundOption { id, label }
}

pub const ALARMS: &[SoundOption] = &[
    opt("basic-alarm.mp3", "Basic"),
    opt("casio-alarm.mp3", "Casio"),
    opt("clock-alarm.mp3", "Clock"),
    opt("digital-alarm.mp3", "Digital"),
    opt("dreamscape-alarm.mp3", "Dreamscape"),
    opt("funny-alarm.mp3", "Funny"),
    opt("gingle-alarm.mp3", "Gingle"),
    opt("life-calm-alarm.mp3", "Life Calm"),
    opt("lo-fi-gradual-alarm.mp3", "Lo-Fi Gradual"),
    opt("oversimplified-alarm.mp3", "Oversimplified"),
    opt("watch-alarm.mp3", "Watch"),
];

pub const AMBIENCES: &[SoundOption] = &[
    opt("lofi/break.mp3", "Lofi - Break"),
    opt("lofi/creative-time.mp3", "Lofi - Creative Time"),
    opt("lofi/evening.mp3", "Lofi - Evening"),
    opt("lofi/kawaii.mp3", "Lofi - Kawaii"),
    opt("lofi/work.mp3", "Lofi - Work"),
    opt("nature/birds-in-forest.mp3", "Nature - Birds in Forest"),
    opt("nature/calming-rain.mp3", "Nature - Calming Rain"),
    opt("nature/early-morning.mp3", "Nature - Early Morning"),
    opt("nature/jungle.mp3", "Nature - Jungle"),
    opt("nature/night.mp3", "Nature - Night"),
    opt("nature/soothing-ocean-waves.mp3", "Nature - Ocean Waves"),
    opt("nature/spring-forest-nature.mp3", "Nature - Spring Forest"),
];

pub fn is_alarm(id: &str) -> bool {
    ALARMS.iter().any(|o| o.id == id)
}

pub fn is_ambience(id: &str) -> bool {
    AMBIENCES.iter().any(|o| o.id == id)
}

/// Display label for any known id.
pub fn label(id: &str) -> Option<&'static str> {
    ALARMS
        .iter()
        .chain(AMBIENCES)
        .find(|o| o.id == id)
        .map(|o| o.label)
}
