pub mod toml_config;

use crate::domain::model::ClockTime;
use crate::utils::error::Result;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "addtime")]
#[command(about = "Add an ISO 8601 duration (PT[n]H[n]M[n]S) to a time of day")]
#[command(version)]
pub struct CliConfig {
    /// Arguments passed to addtime: TIME DURATION [AS_ARRAY]. TIME may be `now`.
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// TOML file with a batch of evaluations
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn values(&self) -> Result<Vec<Value>> {
        resolve_cli_values(&self.args, chrono::Local::now().time())
    }
}

/// Turns command line words into call arguments. A first word of `now`
/// is replaced by the given local time as `hh:mm:ss`.
pub fn resolve_cli_values(args: &[String], now: NaiveTime) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(args.len());
    for (i, raw) in args.iter().enumerate() {
        if i == 0 && raw.eq_ignore_ascii_case("now") {
            let time = ClockTime::try_from(now)?;
            tracing::debug!("'now' resolved to {}", time);
            values.push(Value::String(time.to_string()));
        } else {
            values.push(parse_cli_value(raw));
        }
    }
    Ok(values)
}

/// Reads a command line word as a JSON scalar when it is one (`5`, `1.5`,
/// `true`, `null`, `"07"`), otherwise as a plain string.
pub fn parse_cli_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(_) => Value::String(raw.to_string()),
    }
}
