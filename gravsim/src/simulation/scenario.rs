//! Scenario definitions: named initial conditions
//!
//! A [`Scenario`] bundles everything needed to (re)build a body registry:
//! - the body templates (`BodySpec`) with their initial state
//! - the force law the variant uses
//! - the numerical parameters (`dt`, softening, trail limit)
//!
//! Scenarios are validated once, when built, and never change afterwards; the
//! engine rebuilds its [`System`](super::states::System) from the same scenario
//! on every reset. [`AnyScenario`] carries the dimension chosen at runtime,
//! either from one of the [`Builtin`] variants or from a YAML file.

use std::fmt;
use std::str::FromStr;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use super::forces::ForceLaw;
use super::params::Parameters;
use super::states::{NVec, NVec2, NVec3};

/// Initial distance scale shared by the built-in scenarios
pub const INITIAL_DISTANCE: f64 = 1.0;
/// Initial speed scale shared by the built-in scenarios
pub const INITIAL_SPEED: f64 = 1.0;
/// Fixed step of the built-in scenarios
pub const DEFAULT_DT: f64 = 0.005;

// sin(60°) and sqrt(3) as literals so the built-ins start from exactly these values
const SIN_60: f64 = 0.8660254037844386;
const SQRT_3: f64 = 1.7320508075688772;

/// Template for one body: its initial state plus display data
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec<const D: usize> {
    pub x: NVec<D>,
    pub v: NVec<D>,
    pub m: f64,
    pub radius: f64,
    pub label: String,
    pub color: String,
}

impl<const D: usize> BodySpec<D> {
    pub fn new(x: NVec<D>, v: NVec<D>, m: f64) -> Self {
        Self {
            x,
            v,
            m,
            radius: 0.1,
            label: String::new(),
            color: String::new(),
        }
    }

    pub fn labeled(mut self, label: &str, color: &str) -> Self {
        self.label = label.to_owned();
        self.color = color.to_owned();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// A validated, immutable initial condition for `D`-dimensional bodies
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario<const D: usize> {
    name: String,
    law: ForceLaw,
    parameters: Parameters,
    bodies: Vec<BodySpec<D>>,
}

impl<const D: usize> Scenario<D> {
    /// Build a scenario, rejecting dimensions other than 2 and 3, empty body
    /// lists, non-positive masses and unusable time steps
    pub fn new(
        name: impl Into<String>,
        law: ForceLaw,
        parameters: Parameters,
        bodies: Vec<BodySpec<D>>,
    ) -> Result<Self, SimError> {
        if D != 2 && D != 3 {
            return Err(SimError::UnsupportedDimension(D));
        }
        if bodies.is_empty() {
            return Err(SimError::EmptyScenario);
        }
        for (index, b) in bodies.iter().enumerate() {
            if !b.m.is_finite() || b.m <= 0.0 {
                return Err(SimError::InvalidMass { index, mass: b.m });
            }
        }
        parameters.validate()?;

        Ok(Self {
            name: name.into(),
            law,
            parameters,
            bodies,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn law(&self) -> ForceLaw {
        self.law
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn dt(&self) -> f64 {
        self.parameters.dt
    }

    pub fn bodies(&self) -> &[BodySpec<D>] {
        &self.bodies
    }
}

/// Two equal masses on a slanted, mutually orbiting path
pub fn two_body() -> Scenario<2> {
    let (l, v) = (INITIAL_DISTANCE, INITIAL_SPEED);
    let bodies = vec![
        BodySpec::new(NVec2::new(-l / 3.0, 0.3), NVec2::new(v / 2.0, 0.1), 2.0)
            .labeled("alpha", "xkcd:red pink"),
        BodySpec::new(NVec2::new(l / 3.0, -0.3), NVec2::new(-v / 2.0, -0.1), 2.0)
            .labeled("beta", "xkcd:bright turquoise"),
    ];
    builtin_scenario("two-body", ForceLaw::Planar, 0.0, bodies)
}

/// Three bodies on the vertices of an equilateral triangle in the plane
pub fn three_body_planar() -> Scenario<2> {
    let (l, v) = (INITIAL_DISTANCE, INITIAL_SPEED);
    let bodies = vec![
        BodySpec::new(NVec2::new(-l / 2.0, 0.0), NVec2::new(v, 0.0), 2.0)
            .labeled("alpha", "xkcd:red pink"),
        BodySpec::new(NVec2::new(l / 2.0, 0.0), NVec2::new(-v / 2.0, v * SIN_60), 2.0)
            .labeled("beta", "xkcd:bright magenta"),
        BodySpec::new(NVec2::new(0.0, l * SIN_60), NVec2::new(-v / 2.0, -v * SIN_60), 1.0)
            .labeled("gamma", "xkcd:bright turquoise"),
    ];
    builtin_scenario("three-body-2d", ForceLaw::Planar, 0.01, bodies)
}

/// A heavy body, a light companion and a test-particle-like third body,
/// with the third lifted out of the plane
pub fn three_body_spatial() -> Scenario<3> {
    let (l, v) = (INITIAL_DISTANCE, INITIAL_SPEED);
    let bodies = vec![
        BodySpec::new(NVec3::new(-l / 2.0, 0.0, 0.0), NVec3::new(0.0, v, 0.0), 10.0)
            .labeled("alpha", "xkcd:red pink"),
        BodySpec::new(NVec3::new(l / 2.0, 0.0, 0.0), NVec3::new(0.0, -v, 0.0), 1.0)
            .labeled("beta", "xkcd:bright magenta"),
        BodySpec::new(
            NVec3::new(0.0, l * SIN_60, l / SQRT_3),
            NVec3::new(v / 2.0, 0.0, v / 2.0),
            0.1,
        )
        .labeled("gamma", "xkcd:bright turquoise"),
    ];
    builtin_scenario("three-body-3d", ForceLaw::Spatial, 0.05, bodies)
}

// The built-in constants are known-good, so construction cannot fail
fn builtin_scenario<const D: usize>(
    name: &str,
    law: ForceLaw,
    soft: f64,
    bodies: Vec<BodySpec<D>>,
) -> Scenario<D> {
    Scenario {
        name: name.to_owned(),
        law,
        parameters: Parameters {
            dt: DEFAULT_DT,
            soft,
            trail_limit: None,
        },
        bodies,
    }
}

/// The three built-in variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    TwoBody,
    ThreeBodyPlanar,
    ThreeBodySpatial,
}

impl Builtin {
    pub const ALL: [Builtin; 3] = [
        Builtin::TwoBody,
        Builtin::ThreeBodyPlanar,
        Builtin::ThreeBodySpatial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Builtin::TwoBody => "two-body",
            Builtin::ThreeBodyPlanar => "three-body-2d",
            Builtin::ThreeBodySpatial => "three-body-3d",
        }
    }

    pub fn scenario(self) -> AnyScenario {
        match self {
            Builtin::TwoBody => AnyScenario::Planar(two_body()),
            Builtin::ThreeBodyPlanar => AnyScenario::Planar(three_body_planar()),
            Builtin::ThreeBodySpatial => AnyScenario::Spatial(three_body_spatial()),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Builtin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Builtin::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| format!("unknown scenario '{s}'"))
    }
}

/// A scenario whose dimension is only known at runtime
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScenario {
    Planar(Scenario<2>),
    Spatial(Scenario<3>),
}

impl AnyScenario {
    /// Build and validate a scenario from its YAML-facing configuration
    pub fn from_config(cfg: ScenarioConfig) -> Result<Self, SimError> {
        let mut parameters = Parameters::new(cfg.parameters.dt)?.with_soft(cfg.parameters.soft);
        parameters.trail_limit = cfg.parameters.trail_limit;

        match cfg.dimension {
            2 => Ok(AnyScenario::Planar(Scenario::new(
                cfg.name,
                cfg.force_law,
                parameters,
                body_specs(&cfg.bodies)?,
            )?)),
            3 => Ok(AnyScenario::Spatial(Scenario::new(
                cfg.name,
                cfg.force_law,
                parameters,
                body_specs(&cfg.bodies)?,
            )?)),
            d => Err(SimError::UnsupportedDimension(d)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyScenario::Planar(s) => s.name(),
            AnyScenario::Spatial(s) => s.name(),
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            AnyScenario::Planar(_) => 2,
            AnyScenario::Spatial(_) => 3,
        }
    }
}

// BodyConfig -> BodySpec, checking each vector has exactly D components
fn body_specs<const D: usize>(configs: &[BodyConfig]) -> Result<Vec<BodySpec<D>>, SimError> {
    configs
        .iter()
        .enumerate()
        .map(|(index, bc)| {
            Ok(BodySpec {
                x: to_vector(index, &bc.x)?,
                v: to_vector(index, &bc.v)?,
                m: bc.m,
                radius: bc.radius,
                label: bc.label.clone().unwrap_or_else(|| format!("body {index}")),
                color: bc.color.clone().unwrap_or_default(),
            })
        })
        .collect()
}

fn to_vector<const D: usize>(index: usize, values: &[f64]) -> Result<NVec<D>, SimError> {
    if values.len() != D {
        return Err(SimError::DimensionMismatch {
            index,
            expected: D,
            found: values.len(),
        });
    }
    Ok(NVec::<D>::from_column_slice(values))
}
