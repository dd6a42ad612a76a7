use crate::clock::{Clock, DeadlineClock};
use crate::domain::CountdownSnapshot;
use crate::logging::{log_expired, log_tick};
use log::info;
use tokio::time::{sleep, Duration};

pub struct CountdownMonitor<C: Clock> {
    clock: DeadlineClock<C>,
    tick_interval: Duration,
    max_ticks: Option<u64>,
}

impl<C: Clock> CountdownMonitor<C> {
    pub fn new(clock: C, tick_interval_ms: u64) -> Self {
        Self {
            clock: DeadlineClock::new(clock),
            tick_interval: Duration::from_millis(tick_interval_ms),
            max_ticks: None,
        }
    }

    /// Stop after `n` snapshots even if the deadline is still ahead.
    pub fn with_max_ticks(mut self, n: u64) -> Self {
        self.max_ticks = Some(n);
        self
    }

    /// Emits one snapshot per tick. Returns after the first expired
    /// snapshot or once `max_ticks` is reached; yields the tick count.
    pub async fn start_monitoring<F, Fut>(&self, on_snapshot: F) -> u64
    where
        F: Fn(CountdownSnapshot) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        info!("🎬 Countdown monitor starting...");

        let mut ticks = 0u64;

        loop {
            let snapshot = self.clock.snapshot();
            let expired = snapshot.past_deadline;
            let label = snapshot.deadline_label.clone();

            log_tick(&snapshot);
            on_snapshot(snapshot).await;
            ticks += 1;

            if expired {
                log_expired(&label);
                return ticks;
            }
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                return ticks;
            }

            sleep(self.tick_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::time::DEADLINE;
    use chrono::TimeDelta;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn stops_after_first_expired_snapshot() {
        let monitor = CountdownMonitor::new(FixedClock(*DEADLINE), 1).with_max_ticks(10);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let ticks = monitor
            .start_monitoring(|snap| {
                let seen = seen.clone();
                async move { seen.lock().unwrap().push(snap) }
            })
            .await;

        assert_eq!(ticks, 1);
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].countdown, "已截止");
    }

    #[tokio::test]
    async fn respects_max_ticks_before_deadline() {
        let now = *DEADLINE - TimeDelta::days(2);
        let monitor = CountdownMonitor::new(FixedClock(now), 1).with_max_ticks(3);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let ticks = monitor
            .start_monitoring(|snap| {
                let seen = seen.clone();
                async move { seen.lock().unwrap().push(snap.countdown) }
            })
            .await;

        assert_eq!(ticks, 3);
        assert!(seen.lock().unwrap().iter().all(|c| c == "2天 00:00:00"));
    }
}
