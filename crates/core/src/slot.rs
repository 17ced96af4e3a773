//! Slot label handling.
//!
//! The backend is inconsistent about slot labels: some records carry a bare
//! `"10:00-11:00"` range, others embed the day as `"Monday_10:00-11:00"`.
//! Everything that groups or orders slots goes through this module first.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::weekday::Weekday;

static WEEKDAY_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(monday|tuesday|wednesday|thursday|friday|saturday|sunday)_")
        .expect("weekday prefix pattern is valid")
});

static START_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})").expect("start time pattern is valid"));

/// Strips a leading `"<Weekday>_"` prefix. Anything else comes back unchanged.
pub fn normalize_slot(label: &str) -> &str {
    match WEEKDAY_PREFIX.find(label) {
        Some(prefix) => &label[prefix.end()..],
        None => label,
    }
}

/// The weekday embedded in a composite label, if there is one.
pub fn slot_weekday(label: &str) -> Option<Weekday> {
    WEEKDAY_PREFIX
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|day| day.as_str().parse().ok())
}

/// Minutes since midnight of the label's start time.
///
/// Labels that do not begin with `HH:MM` yield `0`, so they sort to the start
/// of the day instead of failing.
pub fn start_minutes(label: &str) -> u32 {
    START_TIME
        .captures(label)
        .and_then(|caps| {
            let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
            let minutes: u32 = caps.get(2)?.as_str().parse().ok()?;
            Some(hours * 60 + minutes)
        })
        .unwrap_or(0)
}

/// Orders two labels by start time.
pub fn compare_slots(a: &str, b: &str) -> Ordering {
    start_minutes(a).cmp(&start_minutes(b))
}
