use crate::utils::error::{AddTimeError, ArgPosition, Result};
use crate::utils::validation::validate_range;
use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3600;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// A time of day. Fields are always within clock bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockTime {
    pub fn new(hour: i64, minute: i64, second: i64) -> Result<Self> {
        validate_range("hour", hour, 0, 23)?;
        validate_range("minute", minute, 0, 59)?;
        validate_range("second", second, 0, 59)?;

        Ok(Self {
            hour: hour as u32,
            minute: minute as u32,
            second: second as u32,
        })
    }

    pub fn from_hours(hours: i64) -> Result<Self> {
        Self::new(hours, 0, 0)
    }

    pub fn midnight() -> Self {
        Self { hour: 0, minute: 0, second: 0 }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn seconds_from_midnight(&self) -> u64 {
        u64::from(self.hour) * SECONDS_PER_HOUR
            + u64::from(self.minute) * SECONDS_PER_MINUTE
            + u64::from(self.second)
    }

    /// Builds a clock time from any second count, wrapping at 24 hours.
    pub fn from_seconds_wrapping(total: u64) -> Self {
        let secs = total % SECONDS_PER_DAY;
        Self {
            hour: (secs / SECONDS_PER_HOUR) as u32,
            minute: ((secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u32,
            second: (secs % SECONDS_PER_MINUTE) as u32,
        }
    }

    pub fn add(self, duration: Duration) -> Self {
        let total = self.seconds_from_midnight() + duration.seconds_mod_day();
        tracing::trace!(
            "{} + {}s (mod day) = {}s",
            self,
            duration.seconds_mod_day(),
            total
        );
        Self::from_seconds_wrapping(total)
    }

    pub fn as_triple(&self) -> (u32, u32, u32) {
        (self.hour, self.minute, self.second)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl TryFrom<NaiveTime> for ClockTime {
    type Error = AddTimeError;

    fn try_from(time: NaiveTime) -> Result<Self> {
        use chrono::Timelike;
        // chrono encodes a leap second as nanosecond >= 1e9; reject it as second 60.
        let second = if time.nanosecond() >= 1_000_000_000 { 60 } else { time.second() };
        Self::new(time.hour().into(), time.minute().into(), second.into())
    }
}

/// An elapsed-time offset. Components are unbounded above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Duration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Duration {
    pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
        Self { hours, minutes, seconds }
    }

    /// The offset reduced to less than one day. Never overflows.
    pub fn seconds_mod_day(&self) -> u64 {
        let hours = self.hours % 24;
        let minutes = self.minutes % (24 * 60);
        let seconds = self.seconds % SECONDS_PER_DAY;
        (hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds) % SECONDS_PER_DAY
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PT{}H{}M{}S", self.hours, self.minutes, self.seconds)
    }
}

/// The first argument after its dynamic type has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeArg {
    Hours(i64),
    Text(String),
}

impl TryFrom<&serde_json::Value> for TimeArg {
    type Error = AddTimeError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Number(n) => {
                let hours = match n.as_i64() {
                    Some(h) => h,
                    None => truncate_hours(n)?,
                };
                Ok(TimeArg::Hours(hours))
            }
            serde_json::Value::String(s) => Ok(TimeArg::Text(s.clone())),
            _ => Err(AddTimeError::Type { position: ArgPosition::First }),
        }
    }
}

/// Non-integer and out-of-i64 numbers: truncate toward zero, never round.
fn truncate_hours(n: &serde_json::Number) -> Result<i64> {
    if n.is_u64() {
        // Larger than i64::MAX, far beyond 23.
        return Err(AddTimeError::Range);
    }
    let f = n.as_f64().ok_or(AddTimeError::Type { position: ArgPosition::First })?;
    let truncated = f.trunc();
    if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
        return Err(AddTimeError::Range);
    }
    Ok(truncated as i64)
}

/// What the function hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Text(String),
    Triple(u32, u32, u32),
}

impl Output {
    pub fn from_clock(time: ClockTime, triple: bool) -> Self {
        if triple {
            let (h, m, s) = time.as_triple();
            Output::Triple(h, m, s)
        } else {
            Output::Text(time.to_string())
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(s) => write!(f, "{}", s),
            Output::Triple(h, m, s) => write!(f, "[{}, {}, {}]", h, m, s),
        }
    }
}
