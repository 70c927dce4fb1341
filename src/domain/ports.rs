use crate::domain::model::Output;
use crate::utils::error::Result;
use serde_json::Value;

/// A function the host calls with an ordered argument list.
pub trait Function: Send + Sync {
    fn name(&self) -> &str;
    fn call(&self, args: &[Value]) -> Result<Output>;
}
