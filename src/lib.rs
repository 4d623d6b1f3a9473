pub mod simulation;
pub mod configuration;
pub mod units;
pub mod benchmark;
pub mod error;

pub use simulation::states::{NVec3, Sample};
pub use simulation::forces::{AccelerationModel, AccelSet, ConstantAcceleration, STANDARD_GRAVITY};
pub use simulation::integrator::{rk4_step, simulate, simulate_with, StageRule, Trajectory};
pub use simulation::engine::{Engine, Flight};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, LaunchConfig, ModelConfig, ScenarioConfig};

pub use units::conversions::{mph_to_mps, mps_to_mph, meters_to_yards, yards_to_meters, deg_to_rad, rpm_to_radps};
pub use units::offline::{offline_side, format_offline, parse_offline};

pub use error::SimError;

pub use benchmark::benchmark::{bench_stream, bench_delta_curve};
