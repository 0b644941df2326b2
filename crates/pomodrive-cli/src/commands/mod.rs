pub mod config;
pub mod durations;
pub mod prefs;
pub mod run;
pub mod sound;
pub mod task;
pub mod timer;

use pomodrive_core::{App, Database};

/// Open the app over the default store.
pub(crate) fn open_app() -> Result<App, Box<dyn std::error::Error>> {
    Ok(App::open(Database::open()?)?)
}

/// `mm:ss`, or `h:mm:ss` past an hour.
pub(crate) fn clock(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
