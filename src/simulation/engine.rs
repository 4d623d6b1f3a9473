//! Flight driver on top of the trajectory stream
//!
//! Pulls samples until the ball is back on the launch plane (y <= 0) or a
//! time bound is hit, and derives carry, apex and offline from the result

use tracing::debug;

use crate::error::SimError;

use super::forces::AccelerationModel;
use super::integrator::{simulate_with, StageRule};
use super::params::Parameters;
use super::states::{NVec3, Sample};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub rule: StageRule, // legacy or canonical rk4 stages
}

impl Engine {
    /// Fly a model from the given launch state with step `params.delta`.
    /// The launch point must not be below the ground.
    /// Keeps every sample up to and including the first grounded one, or
    /// the first one past `params.t_end`.
    pub fn flight<M: AccelerationModel>(
        &self,
        model: M,
        params: &Parameters,
        v0: NVec3,
        x0: NVec3,
    ) -> Result<Flight, SimError> {
        // a zero or NaN step would never reach t_end
        params.validate()?;
        if !(x0.y.is_finite() && x0.y >= 0.0) {
            return Err(SimError::InvalidHeight(x0.y));
        }

        let mut samples = Vec::new();
        let mut landed = false;

        for sample in simulate_with(model, params.delta, Some(v0), Some(x0), self.rule) {
            let grounded = sample.x.y <= 0.0;
            let timed_out = sample.t > params.t_end;
            samples.push(sample);

            if grounded {
                landed = true;
                debug!(t = sample.t, x = sample.x.x, z = sample.x.z, "ball landed");
                break;
            }
            if timed_out {
                debug!(t = sample.t, y = sample.x.y, "flight exceeded t_end before landing");
                break;
            }
        }

        Ok(Flight {
            launch: Sample { t: 0.0, v: v0, x: x0 },
            delta: params.delta,
            samples,
            landed,
        })
    }
}

/// Samples of one flight plus derived metrics
///
/// Sample labels lag the state they hold by one step, so times reported
/// here are state times: label + delta, with the launch at t = 0.
#[derive(Debug, Clone)]
pub struct Flight {
    launch: Sample, // launch state at t = 0
    delta: f64, // step size (s)
    samples: Vec<Sample>,
    landed: bool,
}

impl Flight {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// `false` when the time bound stopped the flight
    pub fn landed(&self) -> bool {
        self.landed
    }

    /// Time of the y = 0 crossing, interpolated like [`Flight::landing`].
    /// Without a landing, the state time of the last sample kept
    pub fn flight_time(&self) -> f64 {
        // a label is the state time of the sample before it
        let label = self.samples.last().map_or(0.0, |s| s.t);
        match self.final_segment() {
            Some((_, _, s)) => label + s * self.delta,
            None => label + self.delta,
        }
    }

    /// Highest state of the flight, launch point included
    pub fn apex(&self) -> Sample {
        self.samples
            .iter()
            .map(|s| Sample { t: s.t + self.delta, ..*s })
            .fold(self.launch, |best, s| if s.x.y > best.x.y { s } else { best })
    }

    /// Position where the path crosses y = 0, linearly interpolated between
    /// the last airborne sample (or the launch point) and the grounded one
    pub fn landing(&self) -> Option<NVec3> {
        self.final_segment()
            .map(|(prev, last, s)| prev + (last - prev) * s)
    }

    /// Forward distance from the launch point to the landing point (m)
    pub fn carry(&self) -> Option<f64> {
        self.landing().map(|p| p.x - self.launch.x.x)
    }

    /// Signed lateral distance at landing (m), negative is left
    pub fn offline(&self) -> Option<f64> {
        self.landing().map(|p| p.z - self.launch.x.z)
    }

    /// Last airborne position, grounded position and the fraction of the
    /// step between them spent above y = 0
    fn final_segment(&self) -> Option<(NVec3, NVec3, f64)> {
        if !self.landed {
            return None;
        }
        let n = self.samples.len();
        let last = self.samples[n - 1].x;
        let prev = if n >= 2 { self.samples[n - 2].x } else { self.launch.x };

        let dy = prev.y - last.y;
        let s = if dy > 0.0 { prev.y / dy } else { 1.0 };
        Some((prev, last, s))
    }
}
