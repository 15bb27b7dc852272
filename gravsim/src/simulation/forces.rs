//! Pairwise Newtonian gravity for the fixed-step engine
//!
//! Each scenario names the [`ForceLaw`] it uses. The two laws are the same
//! inverse-square force but evaluate the `r²` denominator differently, which
//! is observable in the last bits of every trajectory, so they are kept apart.

use serde::Deserialize;

use crate::error::SimError;
use super::params::G;
use super::states::{Body, NVec};

/// How the `r²` in `F = G m_a m_b / r²` is evaluated
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceLaw {
    /// Planar variants: the distance is rooted first and the square is taken
    /// again from it, `G m_a m_b / (r * r)`
    #[serde(rename = "planar")]
    Planar,

    /// Spatial variant: the squared distance is used directly,
    /// `G m_a m_b / |d|²`
    #[serde(rename = "spatial")]
    Spatial,
}

impl ForceLaw {
    /// Force that `b` exerts on `a`, or `None` if they coincide
    pub fn force<const D: usize>(self, a: &Body<D>, b: &Body<D>) -> Option<NVec<D>> {
        // d points from a to b: a is pulled along +d
        let d = b.x - a.x;
        let r2 = d.norm_squared();
        if r2 == 0.0 {
            return None;
        }
        let r = r2.sqrt();

        let magnitude = match self {
            ForceLaw::Planar => G * a.m * b.m / (r * r),
            ForceLaw::Spatial => G * a.m * b.m / r2,
        };

        // magnitude times the unit vector d / r
        Some(magnitude * (d / r))
    }
}

/// Force body `j` exerts on body `i`.
///
/// `i` and `j` must index into `bodies` (out-of-range indices panic). A body
/// exerts no force on itself, so `i == j` is refused with `SelfInteraction`.
pub fn pairwise_force<const D: usize>(
    law: ForceLaw,
    bodies: &[Body<D>],
    i: usize,
    j: usize,
) -> Result<NVec<D>, SimError> {
    if i == j {
        return Err(SimError::SelfInteraction { index: i });
    }
    law.force(&bodies[i], &bodies[j])
        .ok_or(SimError::SingularSeparation { i, j })
}

/// Net force on every body, summed over all other bodies in index order.
///
/// Every ordered pair is evaluated on its own (no reuse of `-F(j, i)`), which
/// keeps the summation order identical for every body.
pub fn net_forces<const D: usize>(
    law: ForceLaw,
    bodies: &[Body<D>],
) -> Result<Vec<NVec<D>>, SimError> {
    let n = bodies.len();
    let mut out = vec![NVec::<D>::zeros(); n];

    for (i, f) in out.iter_mut().enumerate() {
        for j in (0..n).filter(|&j| j != i) {
            *f += pairwise_force(law, bodies, i, j)?;
        }
    }
    Ok(out)
}
