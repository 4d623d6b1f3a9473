//! Core state types for projectile flight.
//!
//! Vectors are `NVec3` (nalgebra, f64) with the axis convention
//! x = forward, y = upward, z = rightward.
//!
//! `Sample` is one observation emitted per completed integration step.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// One trajectory observation: elapsed time plus post-step velocity and position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub t: f64, // elapsed time (s)
    pub v: NVec3, // velocity (m/s)
    pub x: NVec3, // position (m)
}

impl Sample {
    /// Height above the launch plane
    pub fn height(&self) -> f64 {
        self.x.y
    }

    /// Magnitude of the velocity vector
    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}
