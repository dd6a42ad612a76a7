use submission_deadline::domain::time::{
    format_countdown, is_past_deadline, remaining_ms, remaining_ms_at, DEADLINE, DEADLINE_TS,
};

use chrono::TimeDelta;

/// Parses `[<d>天 ]HH:MM:SS` back into whole milliseconds.
fn parse_countdown(text: &str) -> i64 {
    let (days, hms) = match text.split_once("天 ") {
        Some((d, rest)) => (d.parse::<i64>().unwrap(), rest),
        None => (0, text),
    };
    let fields: Vec<i64> = hms.split(':').map(|f| f.parse().unwrap()).collect();
    assert_eq!(fields.len(), 3, "bad countdown {text}");

    ((days * 86_400) + fields[0] * 3_600 + fields[1] * 60 + fields[2]) * 1000
}

#[test]
fn remaining_equals_difference_before_deadline() {
    for offset in [1i64, 999, 1_000, 3_661_000, 90_000_000, 400 * 86_400_000] {
        let now = *DEADLINE - TimeDelta::milliseconds(offset);
        assert_eq!(remaining_ms(now), offset);
        assert!(!is_past_deadline(now));
    }
}

#[test]
fn remaining_is_zero_from_deadline_on() {
    for offset in [0i64, 1, 60_000, 365 * 86_400_000] {
        let now = *DEADLINE + TimeDelta::milliseconds(offset);
        assert_eq!(remaining_ms(now), 0);
        assert!(is_past_deadline(now));
    }
}

#[test]
fn remaining_is_monotonic() {
    let mut previous = i64::MAX;
    let mut now_ms = DEADLINE_TS - 3 * 86_400_000;

    while now_ms <= DEADLINE_TS + 86_400_000 {
        let remaining = remaining_ms_at(now_ms);
        assert!(remaining >= 0);
        assert!(remaining <= previous);
        previous = remaining;
        now_ms += 4_321_987;
    }
}

#[test]
fn formatted_countdown_round_trips_to_floored_millis() {
    for ms in [1i64, 999, 1_000, 59_999, 3_661_000, 86_399_999, 90_000_000, 1_234_567_890] {
        let text = format_countdown(ms);
        assert_eq!(parse_countdown(&text), (ms / 1000) * 1000, "{text}");
    }
}

#[test]
fn documented_examples() {
    assert_eq!(format_countdown(0), "已截止");
    assert_eq!(format_countdown(-5_000), "已截止");
    assert_eq!(format_countdown(1000), "00:00:01");
    assert_eq!(format_countdown(3_661_000), "01:01:01");
    assert_eq!(format_countdown(90_000_000), "1天 01:00:00");
}
