//! Core state types for the simulation.
//!
//! Bodies and the body registry are generic over the dimension `D` (2 or 3):
//! - `Body<D>`   one point mass with its recorded trajectory
//! - `System<D>` the body registry plus the simulation clock
//!
//! `NVec2`/`NVec3` and the `Body2`/`Body3`/`System2`/`System3` aliases name
//! the two concrete variants.

use std::collections::VecDeque;

use nalgebra::{SVector, Vector2, Vector3};

use super::params::{Clock, G};
use super::scenario::{BodySpec, Scenario};

pub type NVec<const D: usize> = SVector<f64, D>;
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

pub type Body2 = Body<2>;
pub type Body3 = Body<3>;
pub type System2 = System<2>;
pub type System3 = System<3>;

/// One simulated point mass.
///
/// Only the integrator mutates a body; everything else sees it through the
/// read-only accessors. The mass is validated by [`Scenario::new`] before any
/// body is built from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Body<const D: usize> {
    pub(crate) x: NVec<D>, // position
    pub(crate) v: NVec<D>, // velocity
    pub(crate) m: f64, // mass
    radius: f64, // display radius
    label: String,
    color: String,
    pub(crate) trajectory: VecDeque<NVec<D>>, // past positions, oldest first
}

impl<const D: usize> Body<D> {
    fn from_spec(spec: &BodySpec<D>) -> Self {
        Self {
            x: spec.x,
            v: spec.v,
            m: spec.m,
            radius: spec.radius,
            label: spec.label.clone(),
            color: spec.color.clone(),
            trajectory: VecDeque::new(),
        }
    }

    pub fn position(&self) -> &NVec<D> {
        &self.x
    }

    pub fn velocity(&self) -> &NVec<D> {
        &self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Recorded positions in chronological order. The last entry, if any, is
    /// the current position.
    pub fn trajectory(&self) -> &VecDeque<NVec<D>> {
        &self.trajectory
    }

    pub fn momentum(&self) -> NVec<D> {
        self.m * self.v
    }

    /// Append the current position, dropping the oldest samples past `limit`.
    /// Returns the number of dropped samples.
    pub(crate) fn record(&mut self, limit: Option<usize>) -> usize {
        self.trajectory.push_back(self.x);
        let Some(limit) = limit else {
            return 0;
        };
        // keep at least the current position so the trail still ends on it
        let limit = limit.max(1);
        let excess = self.trajectory.len().saturating_sub(limit);
        self.trajectory.drain(..excess);
        excess
    }
}

/// The body registry: every simulated body plus the simulation clock.
///
/// A registry is always rebuilt wholesale from a [`Scenario`]; there is no API
/// to add, remove or edit individual bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct System<const D: usize> {
    pub(crate) bodies: Vec<Body<D>>,
    pub(crate) clock: Clock,
}

impl<const D: usize> System<D> {
    /// Fresh bodies at the scenario's initial condition, empty trajectories,
    /// clock at zero
    pub fn create(scenario: &Scenario<D>) -> Self {
        Self {
            bodies: scenario.bodies().iter().map(Body::from_spec).collect(),
            clock: Clock::default(),
        }
    }

    /// Replace every body with a freshly created one. Prior trajectories are
    /// discarded.
    pub fn reset(&mut self, scenario: &Scenario<D>) {
        *self = Self::create(scenario);
        log::debug!(
            "reset registry to scenario '{}' ({} bodies)",
            scenario.name(),
            self.bodies.len()
        );
    }

    pub fn bodies(&self) -> &[Body<D>] {
        &self.bodies
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec<D> {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Velocity of the centre of mass (total momentum / total mass)
    pub fn centroid_velocity(&self) -> NVec<D> {
        self.total_momentum() / self.total_mass()
    }

    pub fn center_of_mass(&self) -> NVec<D> {
        let weighted: NVec<D> = self.bodies.iter().map(|b| b.m * b.x).sum();
        weighted / self.total_mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }

    /// Newtonian potential energy summed over unordered pairs.
    /// Coincident bodies give negative infinity.
    pub fn potential_energy(&self) -> f64 {
        let mut u = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                u -= G * bi.m * bj.m / (bj.x - bi.x).norm();
            }
        }
        u
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }
}
