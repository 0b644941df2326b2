//! Pomodrive Server - a local HTTP mirror of the Pomodoro timer
//!
//! One [`pomodrive_core::App`] lives behind [`ServerState`]. A background
//! pulse ticks it once per second and the HTTP handlers issue the same
//! commands a terminal would.

pub mod api;
pub mod pulse;
pub mod state;

pub use api::create_router;
pub use pulse::{pulse_task, PULSE_PERIOD};
pub use state::ServerState;
