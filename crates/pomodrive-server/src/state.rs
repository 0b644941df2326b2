//! Shared server state.
//!
//! The [`App`] sits behind one std mutex. Handlers and the pulse task each
//! take the lock for exactly one operation and never hold it across an
//! `.await`, so commands and ticks are serialized.

use std::{
    sync::{Mutex, MutexGuard},
    time::Instant,
};

use pomodrive_core::{App, Event, TimerState};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::api::error::ApiError;

pub struct ServerState {
    app: Mutex<App>,
    /// Latest timer state, for observers that want push updates.
    updates_tx: watch::Sender<TimerState>,
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(app: App) -> Self {
        let (updates_tx, _) = watch::channel(*app.state());
        Self {
            app: Mutex::new(app),
            updates_tx,
            start_time: Instant::now(),
        }
    }

    /// Run one operation against the app and publish the resulting state.
    pub fn with_app<R>(&self, op: impl FnOnce(&mut App) -> R) -> Result<R, ApiError> {
        let mut app = self.lock()?;
        let out = op(&mut app);
        let state = *app.state();
        drop(app);
        self.updates_tx.send_if_modified(|current| {
            let changed = *current != state;
            *current = state;
            changed
        });
        Ok(out)
    }

    /// Read-only access.
    pub fn read<R>(&self, op: impl FnOnce(&App) -> R) -> Result<R, ApiError> {
        let app = self.lock()?;
        Ok(op(&app))
    }

    /// One pulse from the ticker.
    pub fn tick(&self) -> Result<Option<Event>, ApiError> {
        let event = self.with_app(App::tick)?;
        if let Some(Event::PhaseCompleted { completed, next, cycle, .. }) = &event {
            info!(%completed, %next, cycle, "phase boundary");
        }
        Ok(event)
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.updates_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
        if hours > 0 {
            format!("{hours}h {minutes}m {seconds}s")
        } else if minutes > 0 {
            format!("{minutes}m {seconds}s")
        } else {
            format!("{seconds}s")
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, App>, ApiError> {
        self.app.lock().map_err(|e| {
            warn!("app lock poisoned: {e}");
            ApiError::Poisoned
        })
    }
}
