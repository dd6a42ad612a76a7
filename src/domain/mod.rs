pub mod time;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use self::time::{format_countdown, is_past_deadline, remaining_ms, DEADLINE, DEADLINE_LABEL};

// ==================================================
// COUNTDOWN SNAPSHOT
// ==================================================

/// Deadline state evaluated at a single instant, shaped for the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownSnapshot {
    pub deadline: DateTime<Utc>,
    pub deadline_label: String,
    pub evaluated_at: DateTime<Utc>,
    pub remaining_ms: i64,
    pub past_deadline: bool,
    pub countdown: String,
}

impl CountdownSnapshot {
    pub fn at(now: DateTime<Utc>) -> Self {
        let remaining = remaining_ms(now);

        Self {
            deadline: *DEADLINE,
            deadline_label: DEADLINE_LABEL.to_string(),
            evaluated_at: now,
            remaining_ms: remaining,
            past_deadline: is_past_deadline(now),
            countdown: format_countdown(remaining),
        }
    }
}
