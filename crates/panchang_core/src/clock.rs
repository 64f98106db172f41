//! Wall-clock time-of-day values formatted as `"HH:MM"`.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

/// Hour/minute pair, displayed and serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

impl ClockTime {
    /// Build a clock time from hour and minute.
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A start/end clock-time window within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    /// Window start.
    pub start: ClockTime,
    /// Window end.
    pub end: ClockTime,
}

impl TimePeriod {
    /// Build a window from start and end clock times.
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }
}
