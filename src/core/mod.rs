pub mod addtime;
pub mod duration_parser;
pub mod evaluator;
pub mod time_parser;

pub use crate::domain::model::{ClockTime, Duration, Output, TimeArg};
pub use crate::domain::ports::Function;
pub use crate::utils::error::Result;
