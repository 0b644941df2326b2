use clap::Subcommand;
use pomodrive_core::DurationConfig;

use super::{clock, open_app};

#[derive(Subcommand)]
pub enum DurationsAction {
    /// Show the configured phase lengths
    Show {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Replace all three phase lengths
    Set {
        /// Work length
        #[arg(allow_negative_numbers = true)]
        work: i64,
        /// Short break length
        #[arg(allow_negative_numbers = true)]
        short_break: i64,
        /// Long break length
        #[arg(allow_negative_numbers = true)]
        long_break: i64,
        /// Interpret values as minutes instead of seconds
        #[arg(long)]
        minutes: bool,
    },
}

pub fn run(action: DurationsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;

    match action {
        DurationsAction::Show { json } => {
            let d = app.durations();
            if json {
                println!("{}", serde_json::to_string_pretty(d)?);
            } else {
                println!("work         {}", clock(d.work_secs()));
                println!("short break  {}", clock(d.short_break_secs()));
                println!("long break   {}", clock(d.long_break_secs()));
            }
        }
        DurationsAction::Set {
            work,
            short_break,
            long_break,
            minutes,
        } => {
            let durations = if minutes {
                DurationConfig::from_minutes(work, short_break, long_break)?
            } else {
                DurationConfig::new(work, short_break, long_break)?
            };
            app.apply_durations(durations)?;
            println!("{}", serde_json::to_string_pretty(app.durations())?);
        }
    }
    Ok(())
}
