//! Configuration types for loading flight scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – stage rule of the RK4 integrator
//! - [`ParametersConfig`] – step size and time bound
//! - [`LaunchConfig`]     – ball speed, launch angle, direction and tee height
//! - [`ModelConfig`]      – constant acceleration acting on the ball
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "rk4_legacy"   # or "rk4"
//!
//! parameters:
//!   delta: 0.001               # step size (s)
//!   t_end: 30.0                # abandon the flight after this time (s)
//!
//! launch:
//!   speed_mph: 160.0
//!   launch_deg: 11.0
//!   direction: "R2.0"          # degrees, L = left, R = right
//!   height_m: 0.0
//!
//! model:
//!   acceleration: [0.0, -9.80665, 0.0]
//! ```
//!
//! `engine` and `model` may be omitted; they default to the legacy stage
//! rule and standard gravity.

use serde::Deserialize;

use crate::simulation::forces::STANDARD_GRAVITY;

/// Which RK4 stage rule the engine uses
/// `integrator: "rk4_legacy"` or `integrator: "rk4"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[serde(rename = "rk4_legacy")] // Stages share the start-of-step position and full step
    #[default]
    Rk4Legacy,

    #[serde(rename = "rk4")] // Textbook RK4 with per-stage position and sub-step
    Rk4,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub delta: f64, // time step (s)
    pub t_end: f64, // time bound (s)
}

/// Launch conditions as a launch monitor reports them
#[derive(Deserialize, Debug, Clone)]
pub struct LaunchConfig {
    pub speed_mph: f64, // ball speed
    pub launch_deg: f64, // vertical launch angle
    #[serde(default = "default_direction")]
    pub direction: String, // horizontal angle in degrees, e.g. "L1.5"
    #[serde(default)]
    pub height_m: f64, // starting height above the ground
}

fn default_direction() -> String {
    "0".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_acceleration")]
    pub acceleration: [f64; 3], // m/s^2, x forward, y up, z right
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            acceleration: default_acceleration(),
        }
    }
}

fn default_acceleration() -> [f64; 3] {
    [0.0, -STANDARD_GRAVITY, 0.0]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub launch: LaunchConfig,
    #[serde(default)]
    pub model: ModelConfig,
}
