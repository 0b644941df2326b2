use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pomodrive-cli", version, about = "Pomodrive CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the timer in the foreground
    Run(commands::run::RunArgs),
    /// Control a running pomodrive-server
    Timer {
        /// Server base URL (defaults to `client.server_url` in config.toml)
        #[arg(long, global = true)]
        server: Option<String>,
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Phase durations
    Durations {
        #[command(subcommand)]
        action: commands::durations::DurationsAction,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Sound settings
    Sound {
        #[command(subcommand)]
        action: commands::sound::SoundAction,
    },
    /// Theme and background effect
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Timer { server, action } => commands::timer::run(server, action),
        Commands::Durations { action } => commands::durations::run(action),
        Commands::Task { action } => commands::task::run(action),
        Commands::Sound { action } => commands::sound::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
