use clap::Subcommand;
use pomodrive_core::{BgEffect, Theme};

use super::open_app;

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show theme and background effect
    Show,
    /// Set the theme (dark, oled, e-ink)
    Theme { theme: Theme },
    /// Set the background effect (none, zen, progress, pulse, rain, particles)
    Effect { effect: BgEffect },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        PrefsAction::Show => {
            println!("{}", serde_json::to_string_pretty(app.preferences())?);
        }
        PrefsAction::Theme { theme } => {
            app.set_theme(theme)?;
            println!("theme: {theme}");
        }
        PrefsAction::Effect { effect } => {
            app.set_bg_effect(effect)?;
            println!("background effect: {effect}");
        }
    }
    Ok(())
}
