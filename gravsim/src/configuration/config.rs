//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario file consists of:
//!
//! - [`ScenarioConfig`]   – top-level wrapper (name, dimension, force law)
//! - [`ParametersConfig`] – step size, declared softening, trail limit
//! - [`BodyConfig`]       – initial state and display data for each body
//!
//! # YAML format
//! The built-in two-body scenario written as a file:
//!
//! ```yaml
//! name: two-body
//! dimension: 2              # 2 or 3
//! force_law: planar         # "planar" or "spatial"
//!
//! parameters:
//!   dt: 0.005               # fixed step size
//!   soft: 0.0               # declared softening, not applied to the force
//!   trail_limit: ~          # max trajectory samples per body, ~ = unbounded
//!
//! bodies:
//!   - x: [ -0.3333333333333333, 0.3 ]
//!     v: [ 0.5, 0.1 ]
//!     m: 2.0
//!     label: alpha
//!     color: "xkcd:red pink"
//!   - x: [ 0.3333333333333333, -0.3 ]
//!     v: [ -0.5, -0.1 ]
//!     m: 2.0
//!     label: beta
//!     color: "xkcd:bright turquoise"
//! ```
//!
//! [`AnyScenario::from_config`](crate::simulation::scenario::AnyScenario::from_config)
//! validates this and turns it into a runtime scenario.

use std::io::Read;

use serde::Deserialize;

use crate::simulation::forces::ForceLaw;

/// Numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub dt: f64, // fixed time step
    #[serde(default)]
    pub soft: f64, // softening length, kept for reference only
    #[serde(default)]
    pub trail_limit: Option<usize>, // cap on stored trajectory samples
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position, one entry per dimension
    pub v: Vec<f64>, // initial velocity, one entry per dimension
    pub m: f64, // mass, must be > 0
    #[serde(default = "default_radius")]
    pub radius: f64, // display radius
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_radius() -> f64 {
    0.1
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    pub dimension: usize, // 2 or 3
    pub force_law: ForceLaw,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_D: &str = r#"
name: lifted
dimension: 3
force_law: spatial
parameters:
  dt: 0.01
  trail_limit: 50
bodies:
  - x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
    m: 5.0
  - x: [1.0, 0.0, 0.5]
    v: [0.0, 1.0, 0.0]
    m: 0.5
    radius: 0.05
    label: moon
"#;

    #[test]
    fn parses_minimal_fields_with_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(THREE_D).unwrap();
        assert_eq!(cfg.dimension, 3);
        assert_eq!(cfg.force_law, ForceLaw::Spatial);
        assert_eq!(cfg.parameters.soft, 0.0);
        assert_eq!(cfg.parameters.trail_limit, Some(50));
        assert_eq!(cfg.bodies[0].radius, 0.1);
        assert_eq!(cfg.bodies[0].label, None);
        assert_eq!(cfg.bodies[1].label.as_deref(), Some("moon"));
        assert_eq!(cfg.bodies[1].radius, 0.05);
    }

    #[test]
    fn rejects_unknown_force_law() {
        let bad = THREE_D.replace("force_law: spatial", "force_law: cubic");
        assert!(ScenarioConfig::from_yaml_str(&bad).is_err());
    }

    #[test]
    fn reads_shipped_scenario_files() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios");
        for name in ["two_body.yaml", "three_body_2d.yaml", "three_body_3d.yaml"] {
            let file = std::fs::File::open(dir.join(name)).unwrap();
            let cfg = ScenarioConfig::from_yaml_reader(std::io::BufReader::new(file)).unwrap();
            assert!(!cfg.bodies.is_empty(), "{name} has no bodies");
        }
    }
}
