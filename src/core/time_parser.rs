use crate::domain::model::{ClockTime, TimeArg};
use crate::utils::error::{AddTimeError, ArgPosition, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

// `hh`, `hh:mm` or `hh:mm:ss`; ASCII digits only.
fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]+)(?::([0-9]+))?(?::([0-9]+))?$").expect("time pattern is valid")
    })
}

/// Parses the first argument: a number of hours or a time string.
pub fn parse_time(value: &Value) -> Result<ClockTime> {
    match TimeArg::try_from(value)? {
        TimeArg::Hours(hours) => {
            tracing::debug!("time argument is numeric: {} hours", hours);
            ClockTime::from_hours(hours)
        }
        TimeArg::Text(text) => parse_time_str(&text),
    }
}

pub fn parse_time_str(text: &str) -> Result<ClockTime> {
    let caps = time_pattern()
        .captures(text)
        .ok_or(AddTimeError::Format { position: ArgPosition::First })?;

    let field = |i: usize| -> Result<i64> {
        match caps.get(i) {
            // Too many digits for i64 is out of range anyway.
            Some(m) => m.as_str().parse::<i64>().map_err(|_| AddTimeError::Range),
            None => Ok(0),
        }
    };

    let (hour, minute, second) = (field(1)?, field(2)?, field(3)?);
    tracing::debug!("parsed time '{}' as {}/{}/{}", text, hour, minute, second);
    ClockTime::new(hour, minute, second)
}
