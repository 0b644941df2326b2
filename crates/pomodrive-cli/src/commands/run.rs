//! Foreground timer driven by a local 1 Hz pulse.

use std::io::Write;
use std::time::Duration;

use clap::Args;
use pomodrive_core::{App, Event};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use super::{clock, open_app};

#[derive(Args)]
pub struct RunArgs {
    /// Chain phases automatically instead of stopping after one
    #[arg(long)]
    pub continuous: bool,
    /// Pulse period in milliseconds
    #[arg(long, default_value = "1000", hide = true)]
    pub pulse_ms: u64,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = open_app()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()?;
    runtime.block_on(drive(&mut app, args))?;
    Ok(())
}

async fn drive(app: &mut App, args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.continuous {
        app.start_continuous();
    } else {
        app.start();
    }
    print_line(app)?;

    let mut ticker = interval(Duration::from_millis(args.pulse_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick of an interval completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                app.pause();
                println!();
                println!("paused at {} in {}", clock(app.state().seconds_left), app.state().phase.label());
                return Ok(());
            }
        }

        match app.tick() {
            Some(Event::PhaseCompleted { completed, next, credited_task, .. }) => {
                println!();
                match credited_task.and_then(|id| app.tasks().get(&id).map(|t| t.title.clone())) {
                    Some(title) => println!("{} done, credited \"{title}\"", completed.label()),
                    None => println!("{} done", completed.label()),
                }
                info!(%completed, %next, "phase boundary");
                if !app.state().is_running {
                    println!("next up: {} ({})", next.label(), clock(app.state().seconds_left));
                    return Ok(());
                }
            }
            Some(_) | None => {}
        }
        print_line(app)?;
    }
}

fn print_line(app: &App) -> std::io::Result<()> {
    let s = app.state();
    let mut out = std::io::stdout().lock();
    write!(
        out,
        "\r{:<11} {}  cycle {}/4  {:>3.0}%",
        s.phase.label(),
        clock(s.seconds_left),
        s.cycle + 1,
        app.engine().progress() * 100.0
    )?;
    out.flush()
}
