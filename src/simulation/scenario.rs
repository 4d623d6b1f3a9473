//! Build fully-initialized flight scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - launch velocity and position in SI units
//! - the active force set (`AccelSet`)

use crate::configuration::config::{IntegratorConfig, LaunchConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::{Engine, Flight};
use crate::simulation::forces::{AccelSet, ConstantAcceleration};
use crate::simulation::integrator::StageRule;
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec3;
use crate::units::conversions::{deg_to_rad, mph_to_mps};
use crate::units::offline::parse_offline;

/// Everything needed to fly one shot
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub v0: NVec3, // launch velocity (m/s)
    pub x0: NVec3, // launch position (m)
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            delta: cfg.parameters.delta,
            t_end: cfg.parameters.t_end,
        };
        parameters.validate()?;

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            rule: match cfg.engine.integrator {
                IntegratorConfig::Rk4Legacy => StageRule::Legacy,
                IntegratorConfig::Rk4 => StageRule::Canonical,
            },
        };

        let (v0, x0) = launch_state(&cfg.launch)?;

        // Forces: a single constant term for now
        let forces = AccelSet::new()
            .with(ConstantAcceleration::new(NVec3::from(cfg.model.acceleration))?);

        Ok(Self {
            engine,
            parameters,
            v0,
            x0,
            forces,
        })
    }

    /// Fly the shot, consuming the scenario
    pub fn fly(self) -> Result<Flight, SimError> {
        self.engine.flight(self.forces, &self.parameters, self.v0, self.x0)
    }
}

/// Launch velocity and position from monitor-style launch numbers
///
/// velocity = speed * (cos(la) cos(dir), sin(la), cos(la) sin(dir))
pub fn launch_state(launch: &LaunchConfig) -> Result<(NVec3, NVec3), SimError> {
    if !(launch.height_m.is_finite() && launch.height_m >= 0.0) {
        return Err(SimError::InvalidHeight(launch.height_m));
    }

    let speed = mph_to_mps(launch.speed_mph);
    let la = deg_to_rad(launch.launch_deg);
    let dir = deg_to_rad(parse_offline(&launch.direction)?);

    let v0 = speed * NVec3::new(la.cos() * dir.cos(), la.sin(), la.cos() * dir.sin());
    let x0 = NVec3::new(0.0, launch.height_m, 0.0);
    Ok((v0, x0))
}
