//! Scalar unit conversions used when preparing launches and reporting results

/// Meters per second in one mile per hour
pub const MPS_PER_MPH: f64 = 0.44704;
/// Yards in one meter
pub const YARDS_PER_METER: f64 = 1.09361;

pub fn mph_to_mps(x: f64) -> f64 {
    x * MPS_PER_MPH
}

pub fn mps_to_mph(x: f64) -> f64 {
    x / MPS_PER_MPH
}

pub fn meters_to_yards(x: f64) -> f64 {
    x * YARDS_PER_METER
}

pub fn yards_to_meters(x: f64) -> f64 {
    x / YARDS_PER_METER
}

pub fn deg_to_rad(x: f64) -> f64 {
    x.to_radians()
}

/// Rotations per minute to radians per second
pub fn rpm_to_radps(x: f64) -> f64 {
    deg_to_rad(x / 60.0 * 360.0)
}
