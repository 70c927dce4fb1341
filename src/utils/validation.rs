use crate::utils::error::{AddTimeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_arity(given: usize, allowed: &[usize]) -> Result<()> {
    if !allowed.contains(&given) {
        return Err(AddTimeError::Arity { given });
    }
    Ok(())
}

/// Inclusive range check on one clock field.
pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        tracing::debug!("{} = {} outside {}..={}", field_name, value, min, max);
        return Err(AddTimeError::Range);
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AddTimeError::Config {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}
