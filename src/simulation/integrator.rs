//! Fixed-step RK4 time integration for a single projectile
//!
//! Treats flight as the coupled first-order system dx/dt = v,
//! dv/dt = a(delta, v, x) and exposes it as an endless, lazily pulled
//! [`Trajectory`]. Callers decide when to stop pulling.

use super::forces::AccelerationModel;
use super::states::{NVec3, Sample};

/// How the four RK4 stages are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StageRule {
    /// Every stage sees the start-of-step position and the full step `h`.
    #[default]
    Legacy,
    /// Textbook RK4: stage i sees position x + k_{i-1}_x * c_i h and
    /// sub-step c_i h, with c = (0, 1/2, 1/2, 1)
    Canonical,
}

/// Advance (v, x) by one step of size `h`.
/// Calls `project` exactly four times and never calls `update`.
pub fn rk4_step<M: AccelerationModel + ?Sized>(
    model: &M,
    h: f64,
    v: &NVec3,
    x: &NVec3,
    rule: StageRule,
) -> (NVec3, NVec3) {
    let half_h = 0.5 * h;

    let (k1_x, k1_v, k2_x, k2_v, k3_x, k3_v, k4_x, k4_v) = match rule {
        StageRule::Legacy => {
            let k1_x = *v;
            let k1_v = model.project(h, &k1_x, x);
            let k2_x = v + k1_v * half_h;
            let k2_v = model.project(h, &k2_x, x);
            let k3_x = v + k2_v * half_h;
            let k3_v = model.project(h, &k3_x, x);
            let k4_x = v + k3_v * h;
            let k4_v = model.project(h, &k4_x, x);
            (k1_x, k1_v, k2_x, k2_v, k3_x, k3_v, k4_x, k4_v)
        }
        StageRule::Canonical => {
            let k1_x = *v;
            let k1_v = model.project(0.0, &k1_x, x);
            let k2_x = v + k1_v * half_h;
            let k2_v = model.project(half_h, &k2_x, &(x + k1_x * half_h));
            let k3_x = v + k2_v * half_h;
            let k3_v = model.project(half_h, &k3_x, &(x + k2_x * half_h));
            let k4_x = v + k3_v * h;
            let k4_v = model.project(h, &k4_x, &(x + k3_x * h));
            (k1_x, k1_v, k2_x, k2_v, k3_x, k3_v, k4_x, k4_v)
        }
    };

    // Blend: y_n+1 = y_n + h/6 (k1 + 2 k2 + 2 k3 + k4)
    let v_next = v + (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * (h / 6.0);
    let x_next = x + (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * (h / 6.0);
    (v_next, x_next)
}

/// Endless stream of trajectory samples
///
/// Owns the running state (t, v, x); `next` never returns `None`.
/// Dropping the iterator discards the state, there is no restart.
pub struct Trajectory<M: AccelerationModel> {
    model: M,
    delta: f64,
    rule: StageRule,
    t: f64, // time label of the next sample
    v: NVec3, // current velocity
    x: NVec3, // current position
}

impl<M: AccelerationModel> Trajectory<M> {
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn rule(&self) -> StageRule {
        self.rule
    }

    /// Borrow the model, e.g. to inspect state committed by `update`
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Give the model back, discarding the stream state
    pub fn into_model(self) -> M {
        self.model
    }
}

impl<M: AccelerationModel> Iterator for Trajectory<M> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        let h = self.delta;
        let (v, x) = rk4_step(&self.model, h, &self.v, &self.x, self.rule);

        // commit per-step model state once the blend is known
        self.model.update(h, &v, &x);

        let sample = Sample { t: self.t, v, x };
        self.v = v;
        self.x = x;
        self.t += self.delta;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Start a trajectory with the legacy stage rule.
/// Missing initial velocity or position default to the zero vector.
/// `delta` is not validated; NaN and infinities flow through unchanged.
pub fn simulate<M: AccelerationModel>(
    model: M,
    delta: f64,
    velocity: Option<NVec3>,
    position: Option<NVec3>,
) -> Trajectory<M> {
    simulate_with(model, delta, velocity, position, StageRule::Legacy)
}

/// Start a trajectory with an explicit stage rule
pub fn simulate_with<M: AccelerationModel>(
    model: M,
    delta: f64,
    velocity: Option<NVec3>,
    position: Option<NVec3>,
    rule: StageRule,
) -> Trajectory<M> {
    Trajectory {
        model,
        delta,
        rule,
        t: 0.0,
        v: velocity.unwrap_or_else(NVec3::zeros),
        x: position.unwrap_or_else(NVec3::zeros),
    }
}
