//! Error types for model construction, scenarios and unit parsing.

use std::fmt;

/// Errors raised while building models or scenarios.
///
/// Stepping itself never fails; these only surface at construction time.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Acceleration components must be finite.
    NonFiniteAcceleration,
    /// Time step and time bound must be positive and finite.
    InvalidStep { name: &'static str, value: f64 },
    /// Launch height must be finite and not below the ground.
    InvalidHeight(f64),
    /// Offline strings look like `L1.5`, `R3` or a plain number.
    InvalidOffline(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::NonFiniteAcceleration => write!(f, "acceleration must be finite"),
            SimError::InvalidStep { name, value } => {
                write!(f, "{} must be positive and finite (got {})", name, value)
            }
            SimError::InvalidHeight(h) => {
                write!(f, "launch height must be finite and >= 0 (got {})", h)
            }
            SimError::InvalidOffline(s) => write!(f, "invalid offline measurement {:?}", s),
        }
    }
}

impl std::error::Error for SimError {}
