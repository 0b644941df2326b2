//! The 1 Hz pulse that drives the timer.

use std::{sync::Arc, time::Duration};

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::ServerState;

pub const PULSE_PERIOD: Duration = Duration::from_secs(1);

/// Tick the timer once per `period` for as long as the runtime lives.
///
/// Late ticks are dropped rather than replayed, so a stalled runtime never
/// makes the countdown jump.
pub async fn pulse_task(state: Arc<ServerState>, period: Duration) {
    info!("Starting pulse task ({}ms)", period.as_millis());
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        match state.tick() {
            Ok(Some(event)) => debug!(kind = event.kind(), "pulse produced event"),
            Ok(None) => {}
            Err(e) => {
                error!("pulse failed: {e:?}");
                break;
            }
        }
    }
}
