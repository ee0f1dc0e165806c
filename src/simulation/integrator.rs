//! Time step handling and the semi-implicit Euler pass
//!
//! `sanitize_dt` turns whatever the frame clock reports into a usable step,
//! and `euler_integrator` advances every dynamic body by one step using the
//! accelerations accumulated so far.

use crate::simulation::params::Parameters;
use crate::simulation::states::Body;

/// Clamp a frame delta into a positive, finite step
/// - non-finite or non-positive -> `min_dt`
/// - larger than `max_dt` (when set) -> `max_dt`
pub fn sanitize_dt(dt: f64, params: &Parameters) -> f64 {
    let mut dt = if dt.is_finite() && dt > 0.0 { dt } else { params.min_dt };
    if let Some(max_dt) = params.max_dt {
        dt = dt.min(max_dt);
    }
    dt.max(params.min_dt)
}

/// Split one frame into `sub_steps` equal steps
pub fn sub_step_dt(dt: f64, sub_steps: u32) -> f64 {
    dt / f64::from(sub_steps.max(1))
}

/// Advance all bodies by one step.
/// v_n+1 = v_n + dt a_n, then x_n+1 = x_n + dt v_n+1. Clears the accumulators.
pub fn euler_integrator(bodies: &mut [Body], dt: f64) {
    for b in bodies.iter_mut() {
        b.integrate(dt);
    }
}
