use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::LazyLock;

// ==================================================
// DEADLINE
// ==================================================

// 2025-09-03 13:00 Beijing time (UTC+8)
pub const DEADLINE_UTC_ISO: &str = "2025-09-03T05:00:00Z";
pub const DEADLINE_LABEL: &str = "2025年9月3日 北京时间 13:00";
pub const EXPIRED_LABEL: &str = "已截止";

/// Deadline as epoch milliseconds.
pub const DEADLINE_TS: i64 = 1_756_875_600_000;

// In range; `deadline_constants_agree` pins it to DEADLINE_UTC_ISO.
pub static DEADLINE: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| DateTime::from_timestamp_millis(DEADLINE_TS).unwrap_or_default());

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

// ==================================================
// REMAINING / PAST
// ==================================================

/// Milliseconds left until the deadline, clamped to zero.
pub fn remaining_ms(now: DateTime<Utc>) -> i64 {
    remaining_ms_at(now.timestamp_millis())
}

/// Same as [`remaining_ms`] for a raw epoch-millis `now`.
pub fn remaining_ms_at(now_ms: i64) -> i64 {
    DEADLINE_TS.saturating_sub(now_ms).max(0)
}

pub fn is_past_deadline(now: DateTime<Utc>) -> bool {
    is_past_deadline_at(now.timestamp_millis())
}

pub fn is_past_deadline_at(now_ms: i64) -> bool {
    now_ms >= DEADLINE_TS
}

// ==================================================
// COUNTDOWN FORMATTING
// ==================================================

/// Whole days/hours/minutes/seconds of a positive duration.
/// Sub-second remainders are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn from_millis(ms: i64) -> Self {
        let total = ms.max(0) / 1000;

        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    /// Total milliseconds represented by the parts.
    pub fn as_millis(&self) -> i64 {
        (self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds)
            * 1000
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}天 ", self.days)?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Countdown text for `ms` remaining; zero or negative is the expired label.
pub fn format_countdown(ms: i64) -> String {
    if ms <= 0 {
        return EXPIRED_LABEL.to_string();
    }

    CountdownParts::from_millis(ms).to_string()
}
