//! Acceleration models for projectile flight
//!
//! Defines the [`AccelerationModel`] contract driven by the RK4 loop, a
//! constant-acceleration model (uniform gravity) and [`AccelSet`], which
//! sums several models into one

use crate::error::SimError;
use crate::simulation::states::NVec3;

/// Standard gravity (m/s^2)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Trait for acceleration laws driving a projectile
///
/// `project` is evaluated four times per outer step with trial states and
/// must not change anything later `project` calls depend on. `update` runs
/// once per completed step with the blended state and is the only place
/// where per-step state (spin decay, fuel burn, ...) may evolve.
pub trait AccelerationModel {
    /// Acceleration (m/s^2) over `delta` seconds for the given velocity (m/s)
    /// and position (m)
    fn project(&self, delta: f64, velocity: &NVec3, position: &NVec3) -> NVec3;

    /// Commit per-step state after the RK4 blend. No-op by default
    fn update(&mut self, _delta: f64, _velocity: &NVec3, _position: &NVec3) {}
}

impl<M: AccelerationModel + ?Sized> AccelerationModel for &mut M {
    fn project(&self, delta: f64, velocity: &NVec3, position: &NVec3) -> NVec3 {
        (**self).project(delta, velocity, position)
    }

    fn update(&mut self, delta: f64, velocity: &NVec3, position: &NVec3) {
        (**self).update(delta, velocity, position)
    }
}

impl<M: AccelerationModel + ?Sized> AccelerationModel for Box<M> {
    fn project(&self, delta: f64, velocity: &NVec3, position: &NVec3) -> NVec3 {
        (**self).project(delta, velocity, position)
    }

    fn update(&mut self, delta: f64, velocity: &NVec3, position: &NVec3) {
        (**self).update(delta, velocity, position)
    }
}

/// Fixed acceleration, independent of state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantAcceleration {
    a: NVec3,
}

impl ConstantAcceleration {
    /// Rejects vectors with NaN or infinite components
    pub fn new(a: NVec3) -> Result<Self, SimError> {
        if a.iter().any(|c| !c.is_finite()) {
            return Err(SimError::NonFiniteAcceleration);
        }
        Ok(Self { a })
    }

    /// Uniform gravity pointing down the y axis
    pub fn gravity() -> Self {
        Self {
            a: NVec3::new(0.0, -STANDARD_GRAVITY, 0.0),
        }
    }

    pub fn acceleration(&self) -> NVec3 {
        self.a
    }
}

impl AccelerationModel for ConstantAcceleration {
    fn project(&self, _delta: f64, _velocity: &NVec3, _position: &NVec3) -> NVec3 {
        self.a
    }
}

/// Collection of acceleration terms (gravity, drag, lift, etc.)
/// Contributions are summed per `project` call and `update` is forwarded
/// to every term in insertion order
pub struct AccelSet {
    terms: Vec<Box<dyn AccelerationModel + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: AccelerationModel + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelerationModel for AccelSet {
    fn project(&self, delta: f64, velocity: &NVec3, position: &NVec3) -> NVec3 {
        // An empty set is force-free
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.project(delta, velocity, position))
    }

    fn update(&mut self, delta: f64, velocity: &NVec3, position: &NVec3) {
        for term in self.terms.iter_mut() {
            term.update(delta, velocity, position);
        }
    }
}
