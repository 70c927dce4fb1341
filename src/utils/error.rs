use std::fmt;
use thiserror::Error;

/// Which positional argument a type or format error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgPosition {
    First,
    Second,
}

impl fmt::Display for ArgPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgPosition::First => write!(f, "first"),
            ArgPosition::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AddTimeError {
    #[error("wrong number of arguments given ({given})")]
    Arity { given: usize },

    #[error("wrong type for {position} argument")]
    Type { position: ArgPosition },

    #[error("wrong format for {position} argument")]
    Format { position: ArgPosition },

    #[error("time argument out of range")]
    Range,

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments handed to the function.
    Validation,
    Config,
    System,
}

impl AddTimeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AddTimeError::Arity { .. }
            | AddTimeError::Type { .. }
            | AddTimeError::Format { .. }
            | AddTimeError::Range => ErrorCategory::Validation,
            AddTimeError::Config { .. } => ErrorCategory::Config,
            AddTimeError::Io(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的訊息，帶上函式名稱前綴
    pub fn user_friendly_message(&self, function: &str) -> String {
        match self.category() {
            ErrorCategory::Validation => format!("{}(): {}", function, self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AddTimeError::Arity { .. } => {
                "Pass a time, a duration and optionally a boolean flag"
            }
            AddTimeError::Type { position: ArgPosition::First } => {
                "The time must be a number of hours or a string like 'hh:mm:ss'"
            }
            AddTimeError::Type { position: ArgPosition::Second } => {
                "The duration must be a string like 'PT1H30M'"
            }
            AddTimeError::Format { position: ArgPosition::First } => {
                "Use the 'hh', 'hh:mm' or 'hh:mm:ss' format for the time"
            }
            AddTimeError::Format { position: ArgPosition::Second } => {
                "Use the ISO 8601 'PT[n]H[n]M[n]S' format for the duration"
            }
            AddTimeError::Range => {
                "Hours must be between 0 and 23, minutes and seconds between 0 and 59"
            }
            AddTimeError::Config { .. } => "Check the configuration file syntax and values",
            AddTimeError::Io(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AddTimeError>;
