pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{toml_config::TomlConfig, OutputFormat};
pub use core::addtime::{is_truthy, AddTime};
pub use core::duration_parser::parse_duration;
pub use core::evaluator::{EvaluationResult, Evaluator};
pub use core::time_parser::{parse_time, parse_time_str};
pub use domain::model::{ClockTime, Duration, Output, TimeArg};
pub use domain::ports::Function;
pub use utils::error::{AddTimeError, ArgPosition, ErrorCategory, Result};
