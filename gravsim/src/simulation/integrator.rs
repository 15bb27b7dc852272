//! Fixed-step semi-implicit Euler integrator
//!
//! One step runs in two phases over the whole system:
//! 1. every velocity is kicked with the net force cached from the current
//!    positions, `v_n+1 = v_n + (F_n / m) dt`
//! 2. only then every position drifts with its new velocity,
//!    `x_n+1 = x_n + v_n+1 dt`, and is appended to the body's trajectory
//!
//! The new state is built in scratch buffers and committed only when every
//! component is finite, so a failed step leaves the system untouched.

use crate::error::SimError;
use super::forces::{net_forces, ForceLaw};
use super::params::Parameters;
use super::states::{NVec, System};

/// Advance `sys` by one step of `params.dt` under `law`
pub fn euler_step<const D: usize>(
    sys: &mut System<D>,
    law: ForceLaw,
    params: &Parameters,
) -> Result<(), SimError> {
    params.validate()?;
    let dt = params.dt;

    // F_n for every body, from positions x_n
    let forces = net_forces(law, &sys.bodies)?;

    // Kick: all velocities first
    let v_new: Vec<NVec<D>> = sys
        .bodies
        .iter()
        .zip(forces.iter())
        .map(|(b, f)| b.v + (f / b.m) * dt)
        .collect();

    // Drift: positions with the velocities from this same step
    let x_new: Vec<NVec<D>> = sys
        .bodies
        .iter()
        .zip(v_new.iter())
        .map(|(b, v)| b.x + v * dt)
        .collect();

    let faulted = (0..sys.bodies.len()).find(|&i| !is_finite(&v_new[i]) || !is_finite(&x_new[i]));
    if let Some(index) = faulted {
        log::warn!(
            "step {} faulted: body {index} went non-finite",
            sys.clock.steps + 1
        );
        return Err(SimError::NonFiniteState { index });
    }

    // Commit
    let mut dropped = 0;
    for ((b, v), x) in sys.bodies.iter_mut().zip(v_new).zip(x_new) {
        b.v = v;
        b.x = x;
        dropped += b.record(params.trail_limit);
    }
    sys.clock.advance(dt);

    if dropped > 0 {
        log::trace!("dropped {dropped} trajectory samples past the trail limit");
    }
    Ok(())
}

fn is_finite<const D: usize>(v: &NVec<D>) -> bool {
    v.iter().all(|c| c.is_finite())
}
