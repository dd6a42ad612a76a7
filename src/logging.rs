use log::{debug, info, warn};

use crate::domain::CountdownSnapshot;

pub fn log_tick(snapshot: &CountdownSnapshot) {
    debug!(
        "⏳ {} remaining ({} ms)",
        snapshot.countdown, snapshot.remaining_ms
    );
}

pub fn log_expired(label: &str) {
    warn!("⛔ Deadline passed: {}", label);
}

pub fn log_override(now: &str) {
    info!("🕒 Evaluating at fixed instant {}", now);
}
