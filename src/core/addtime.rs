use crate::core::duration_parser::parse_duration;
use crate::core::time_parser::parse_time;
use crate::domain::model::Output;
use crate::domain::ports::Function;
use crate::utils::error::Result;
use crate::utils::validation::validate_arity;
use serde_json::Value;

/// Adds an ISO 8601 duration to a time of day, wrapping at midnight.
///
/// Arguments, in order:
///
/// 1. the time: a number of hours, or a string in `hh`, `hh:mm` or
///    `hh:mm:ss` format. Hours must be 0..=23, minutes and seconds 0..=59.
/// 2. the duration: a `PT[n]H[n]M[n]S` string. At least one component is
///    required and components have no upper bound.
/// 3. optional flag: when truthy the result is `[h, m, s]`, otherwise an
///    `hh:mm:ss` string.
///
/// ```
/// use addtime::{AddTime, Output};
/// use serde_json::json;
///
/// let f = AddTime;
/// assert_eq!(f.compute(&[json!("23:59:59"), json!("PT1S")]).unwrap(),
///            Output::Text("00:00:00".to_string()));
/// assert_eq!(f.compute(&[json!("00:00"), json!("PT6H"), json!(true)]).unwrap(),
///            Output::Triple(6, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AddTime;

impl AddTime {
    pub const NAME: &'static str = "addtime";

    pub fn compute(&self, args: &[Value]) -> Result<Output> {
        validate_arity(args.len(), &[2, 3])?;

        let time = parse_time(&args[0])?;
        let duration = parse_duration(&args[1])?;
        let triple = args.get(2).is_some_and(is_truthy);

        let result = time.add(duration);
        tracing::debug!("{} + {} = {}", time, duration, result);

        Ok(Output::from_clock(result, triple))
    }
}

impl Function for AddTime {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn call(&self, args: &[Value]) -> Result<Output> {
        self.compute(args)
    }
}

/// Host truthiness: only `null` and `false` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}
