//! Remote control of a running `pomodrive-server`.
//!
//! Run-state lives only in the server process, so these commands go over
//! HTTP instead of touching the store.

use clap::Subcommand;
use pomodrive_core::{Config, Phase};
use reqwest::{Client, Method, Response};
use serde_json::{json, Value};

use super::clock;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start the countdown
    Start {
        /// Chain phases automatically
        #[arg(long)]
        continuous: bool,
    },
    /// Pause the countdown
    Pause,
    /// Restore the full duration of the current phase
    Reset,
    /// Jump to a phase (work, short-break, long-break)
    Phase {
        phase: Phase,
    },
    /// Print current timer state
    Status {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(server: Option<String>, action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let base = match server {
        Some(url) => url,
        None => Config::load_or_default().client.server_url,
    };
    let base = base.trim_end_matches('/').to_string();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(dispatch(&base, action))
}

async fn dispatch(base: &str, action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    match action {
        TimerAction::Start { continuous } => {
            let body = json!({ "continuous": continuous });
            call(&client, Method::POST, base, "/api/start", Some(body)).await?;
            println!("started{}", if continuous { " (continuous)" } else { "" });
        }
        TimerAction::Pause => {
            call(&client, Method::POST, base, "/api/pause", None).await?;
            println!("paused");
        }
        TimerAction::Reset => {
            let status = call(&client, Method::POST, base, "/api/reset", None).await?;
            print_status(&status);
        }
        TimerAction::Phase { phase } => {
            let body = json!({ "phase": phase });
            let status = call(&client, Method::POST, base, "/api/phase", Some(body)).await?;
            print_status(&status);
        }
        TimerAction::Status { json } => {
            let status = call(&client, Method::GET, base, "/api/status", None).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(&status);
            }
        }
    }
    Ok(())
}

async fn call(
    client: &Client,
    method: Method,
    base: &str,
    path: &str,
    body: Option<Value>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let url = format!("{base}{path}");
    let mut request = client.request(method, &url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let response = request
        .send()
        .await
        .map_err(|e| format!("cannot reach pomodrive-server at {base}: {e}"))?;
    read_json(response).await
}

async fn read_json(response: Response) -> Result<Value, Box<dyn std::error::Error>> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if !status.is_success() {
        let message = body["error"].as_str().unwrap_or("request failed");
        return Err(format!("{status}: {message}").into());
    }
    Ok(body)
}

fn print_status(status: &Value) {
    let phase = status["phase"]
        .as_str()
        .and_then(|p| p.parse::<Phase>().ok())
        .map(Phase::label)
        .unwrap_or("?");
    let seconds_left = status["secondsLeft"].as_u64().unwrap_or(0);
    let running = status["isRunning"].as_bool().unwrap_or(false);
    let cycle = status["cycle"].as_u64().unwrap_or(0);
    println!(
        "{phase} {}  cycle {}/4  {}",
        clock(seconds_left),
        cycle + 1,
        if running { "running" } else { "paused" }
    );
}
