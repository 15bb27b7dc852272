//! Error type shared by scenario construction and integration
//!
//! Every fallible operation in the crate returns [`SimError`]. Integration
//! errors are local to a single step: the system is left exactly as it was
//! before the failed step.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Mass must be finite and strictly positive (accelerations divide by it)
    #[error("body {index} has invalid mass {mass} (must be finite and > 0)")]
    InvalidMass { index: usize, mass: f64 },

    /// Two bodies share the same position, the force between them is undefined
    #[error("bodies {i} and {j} are at the same position")]
    SingularSeparation { i: usize, j: usize },

    #[error("body {index} cannot exert a force on itself")]
    SelfInteraction { index: usize },

    /// A step produced a NaN or infinite position/velocity for this body
    #[error("step produced a non-finite state for body {index}")]
    NonFiniteState { index: usize },

    #[error("time step must be finite and > 0, got {0}")]
    InvalidTimeStep(f64),

    /// A body vector in a scenario file has the wrong number of components
    #[error("body {index}: expected {expected} components, found {found}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("unsupported dimension {0} (only 2 and 3 are supported)")]
    UnsupportedDimension(usize),

    #[error("scenario has no bodies")]
    EmptyScenario,
}
