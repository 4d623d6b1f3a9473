//! Signed lateral offsets written the way launch monitors print them
//!
//! The z axis points right, so negative offsets are left: `-0.5` is `L0.5`
//! and `300` is `R300`. Zero has no side marker.

use crate::error::SimError;

/// Side marker for a signed offset: "L", "R" or "" for zero
pub fn offline_side(x: f64) -> &'static str {
    if x < 0.0 {
        "L"
    } else if x > 0.0 {
        "R"
    } else {
        ""
    }
}

/// Render a signed offset with its side marker, e.g. `-0.5` -> `L0.5`
pub fn format_offline(x: f64) -> String {
    format!("{}{}", offline_side(x), x.abs())
}

/// Parse `L0.5` -> -0.5, `R300` -> 300, plain numbers unchanged
pub fn parse_offline(s: &str) -> Result<f64, SimError> {
    let s = s.trim();
    let (sign, digits) = if let Some(rest) = s.strip_prefix('L') {
        (-1.0, rest)
    } else if let Some(rest) = s.strip_prefix('R') {
        (1.0, rest)
    } else {
        (1.0, s)
    };

    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(sign * v),
        _ => Err(SimError::InvalidOffline(s.to_string())),
    }
}
