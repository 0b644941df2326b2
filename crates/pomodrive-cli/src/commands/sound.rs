use clap::Subcommand;
use pomodrive_core::sound::catalog;
use pomodrive_core::Phase;

use super::open_app;

#[derive(Subcommand)]
pub enum SoundAction {
    /// Show the sound settings
    Show,
    /// Turn all sound on or off
    Toggle,
    /// Choose the alarm played at every phase boundary
    Alarm {
        /// Alarm id from `sound catalog`
        id: String,
    },
    /// Choose the ambience looped during a phase
    Ambience {
        /// work, short-break or long-break
        phase: Phase,
        /// Ambience id from `sound catalog`
        id: String,
    },
    /// List the built-in sounds
    Catalog,
}

pub fn run(action: SoundAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        SoundAction::Catalog => {
            println!("Alarms:");
            for o in catalog::ALARMS {
                println!("  {:<28} {}", o.id, o.label);
            }
            println!("Ambiences:");
            for o in catalog::AMBIENCES {
                println!("  {:<34} {}", o.id, o.label);
            }
            return Ok(());
        }
        SoundAction::Show => {
            let app = open_app()?;
            println!("{}", serde_json::to_string_pretty(app.sound().prefs())?);
        }
        SoundAction::Toggle => {
            let mut app = open_app()?;
            let on = app.toggle_sound()?;
            println!("sound {}", if on { "on" } else { "off" });
        }
        SoundAction::Alarm { id } => {
            let mut app = open_app()?;
            app.set_alarm(&id)?;
            println!("alarm: {id}");
        }
        SoundAction::Ambience { phase, id } => {
            let mut app = open_app()?;
            app.set_ambience(phase, &id)?;
            println!("{} ambience: {id}", phase.label());
        }
    }
    Ok(())
}
