//! Numerical and physical parameters for a scenario
//!
//! `Parameters` holds the per-scenario runtime settings:
//! - the fixed integration step `dt`,
//! - the softening length `soft` declared by the scenario,
//! - an optional cap on the stored trajectory length
//!
//! The gravitational constant is fixed at [`G`] and is not configurable.

use crate::error::SimError;

/// Gravitational constant in simulation units
pub const G: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub soft: f64, // softening length, recorded only: the force laws do not apply it
    pub trail_limit: Option<usize>, // max trajectory samples kept per body, None = unbounded
}

impl Parameters {
    /// Parameters with no softening and unbounded trails
    pub fn new(dt: f64) -> Result<Self, SimError> {
        let params = Self {
            dt,
            soft: 0.0,
            trail_limit: None,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_soft(mut self, soft: f64) -> Self {
        self.soft = soft;
        self
    }

    pub fn with_trail_limit(mut self, limit: usize) -> Self {
        self.trail_limit = Some(limit);
        self
    }

    /// Check that `dt` can drive a fixed-step integrator
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        Ok(())
    }
}

/// Simulation clock: number of completed steps and the elapsed time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Clock {
    pub steps: u64, // completed steps
    pub t: f64, // elapsed simulated time
}

impl Clock {
    pub(crate) fn advance(&mut self, dt: f64) {
        self.steps += 1;
        self.t += dt;
    }
}
