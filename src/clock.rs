//! Time source for `lastSaved` stamps

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Format used for `lastSaved`: 12-hour clock with seconds, e.g. `9:05:00 PM`
pub const LAST_SAVED_FORMAT: &str = "%-I:%M:%S %p";

/// Source of the current wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Render a time as a human-readable `lastSaved` string
pub fn format_last_saved<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(LAST_SAVED_FORMAT).to_string()
}
