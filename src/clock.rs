use chrono::{DateTime, Utc};

use crate::domain::time;
use crate::domain::CountdownSnapshot;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ===============================
// DEADLINE CLOCK
// ===============================

/// Deadline queries where `now` is read from a [`Clock`] on every call.
#[derive(Debug, Clone)]
pub struct DeadlineClock<C: Clock = SystemClock> {
    clock: C,
}

impl DeadlineClock<SystemClock> {
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> DeadlineClock<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn remaining_ms(&self) -> i64 {
        time::remaining_ms(self.clock.now())
    }

    pub fn is_past_deadline(&self) -> bool {
        time::is_past_deadline(self.clock.now())
    }

    pub fn countdown(&self) -> String {
        time::format_countdown(self.remaining_ms())
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot::at(self.clock.now())
    }
}
