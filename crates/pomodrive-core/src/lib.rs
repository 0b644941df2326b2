//! # Pomodrive Core Library
//!
//! This library provides the core logic for the Pomodrive Pomodoro timer.
//! The CLI and the local HTTP mirror are thin layers over the same [`App`].
//!
//! ## Architecture
//!
//! - **Timer Engine**: A pulse-driven phase state machine; the caller invokes
//!   `tick()` once per second
//! - **Collaborators**: The task list and the sound board, injected into the
//!   engine through the [`TaskTracker`] and [`SoundCoordinator`] traits
//! - **Storage**: SQLite key-value records for user settings and TOML for
//!   process configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`App`]: Owner of the engine, collaborators and persistence
//! - [`Database`]: Durable record store
//! - [`Config`]: Process configuration

pub mod app;
pub mod error;
pub mod events;
pub mod preferences;
pub mod sound;
pub mod storage;
pub mod task;
pub mod timer;

pub use app::{App, Engine};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use preferences::{BgEffect, Preferences, Theme};
pub use sound::{AudioSink, LogSink, SoundBoard, SoundPreferences};
pub use storage::{Config, Database};
pub use task::{Task, TaskList};
pub use timer::{DurationConfig, Phase, SoundCoordinator, TaskTracker, TimerEngine, TimerState};
