//! Numerical parameters for a flight
//!
//! `Parameters` holds runtime settings:
//! - integration step size,
//! - the time bound after which an airborne ball is abandoned

use crate::error::SimError;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub delta: f64, // step size (s)
    pub t_end: f64, // time bound (s)
}

impl Parameters {
    /// Both values must be positive and finite
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [("delta", self.delta), ("t_end", self.t_end)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidStep { name, value });
            }
        }
        Ok(())
    }
}
