pub mod simulation;
pub mod configuration;
pub mod error;

pub use simulation::states::{Body, System, NVec, NVec2, NVec3, Body2, Body3, System2, System3};
pub use simulation::params::{Parameters, Clock, G};
pub use simulation::forces::{ForceLaw, pairwise_force, net_forces};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::{Scenario, AnyScenario, BodySpec, Builtin, two_body, three_body_planar, three_body_spatial};
pub use simulation::engine::{Engine, Command, RunState};

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig};

pub use error::SimError;
