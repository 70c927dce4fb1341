//! ISO 8601 time-only durations: `PT[n]H[n]M[n]S`, ASCII case-insensitive.

use crate::domain::model::{Duration, SECONDS_PER_DAY};
use crate::utils::error::{AddTimeError, ArgPosition, Result};
use regex::Regex;
use serde_json::Value;
use std::str::FromStr;
use std::sync::OnceLock;

fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[Pp][Tt][0-9]").expect("duration prefix pattern is valid"))
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[Pp][Tt](?:([0-9]+)[Hh])?(?:([0-9]+)[Mm])?(?:([0-9]+)[Ss])?$")
            .expect("duration pattern is valid")
    })
}

const FORMAT_ERROR: AddTimeError = AddTimeError::Format { position: ArgPosition::Second };

pub fn parse_duration(value: &Value) -> Result<Duration> {
    match value {
        Value::String(s) => s.parse(),
        _ => Err(AddTimeError::Type { position: ArgPosition::Second }),
    }
}

impl FromStr for Duration {
    type Err = AddTimeError;

    fn from_str(s: &str) -> Result<Self> {
        // "PT" alone would otherwise match the all-optional pattern
        if !prefix_pattern().is_match(s) {
            return Err(FORMAT_ERROR);
        }
        let caps = duration_pattern().captures(s).ok_or(FORMAT_ERROR)?;

        let component = |i: usize, period: u64| -> u64 {
            caps.get(i).map_or(0, |m| parse_component(m.as_str(), period))
        };

        let duration = Duration::new(
            component(1, 24),
            component(2, 24 * 60),
            component(3, SECONDS_PER_DAY),
        );
        tracing::debug!("parsed duration '{}' as {}", s, duration);
        Ok(duration)
    }
}

/// Digit runs that overflow u64 are reduced modulo `period`, which leaves
/// the wrapped sum unchanged.
fn parse_component(digits: &str, period: u64) -> u64 {
    digits.parse::<u64>().unwrap_or_else(|_| {
        let reduced = digits
            .bytes()
            .fold(0u64, |acc, b| (acc * 10 + u64::from(b - b'0')) % period);
        tracing::debug!("duration component {} reduced to {}", digits, reduced);
        reduced
    })
}
