//! Numeric range checks for configuration values.

use crate::error::ValidationError;

/// `value >= gte`
pub fn float_gte(key: &str, value: f64, gte: f64) -> Result<(), ValidationError> {
    if value >= gte {
        return Ok(());
    }
    Err(ValidationError::BelowMinimum {
        key: key.to_string(),
        gte,
        value,
    })
}

/// `value >= min` (inclusive), reported with fixed precision.
pub fn float_at_least(key: &str, value: f64, min: f64) -> Result<(), ValidationError> {
    if value < min || value.is_nan() {
        return Err(ValidationError::NotAtLeast {
            key: key.to_string(),
            min,
            value,
        });
    }
    Ok(())
}

/// `value <= max` (inclusive). Non-finite values always fail.
pub fn float_at_most(key: &str, value: f64, max: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value <= max {
        return Ok(());
    }
    Err(ValidationError::NotAtMost {
        key: key.to_string(),
        max,
        value,
    })
}
