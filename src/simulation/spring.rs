//! Damped Hookean springs between two bodies of the arena.
//!
//! A spring stores handles, not references, so it stays valid as the
//! arena grows. Forces are turned into accelerations (`force / mass`) on
//! both endpoints; static endpoints ignore them.

use serde::Deserialize;

use crate::simulation::states::{Body, BodyHandle, NVec2, EPSILON};

/// Distance at which a spring exerts no stretch force
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestLength {
    /// Pulls the centres together
    #[serde(rename = "zero")]
    #[default]
    Zero,
    /// Rests when the two bounding circles touch
    #[serde(rename = "radius_sum")]
    RadiusSum,
}

#[derive(Debug, Clone)]
pub struct Spring {
    pub a: BodyHandle,
    pub b: BodyHandle,
    pub stiffness: f64, // spring constant k
    pub damping: f64,   // damping constant c, along the spring axis
    pub rest: RestLength,
}

impl Spring {
    pub fn new(a: BodyHandle, b: BodyHandle, stiffness: f64, damping: f64, rest: RestLength) -> Self {
        Self { a, b, stiffness, damping, rest }
    }

    pub fn rest_length(&self, bodies: &[Body]) -> f64 {
        match self.rest {
            RestLength::Zero => 0.0,
            RestLength::RadiusSum => {
                bodies[self.a.index()].bounding_radius() + bodies[self.b.index()].bounding_radius()
            }
        }
    }

    /// Force acting on endpoint `a`; endpoint `b` feels the opposite.
    ///
    /// f = k (d - rest) + c ((v_b - v_a) . dir), directed from `a` toward `b`,
    /// so a stretched spring pulls the ends together and closing speed is damped.
    /// Returns `None` when the endpoints coincide and the axis is undefined.
    pub fn force(&self, bodies: &[Body]) -> Option<NVec2> {
        let ba = &bodies[self.a.index()];
        let bb = &bodies[self.b.index()];

        let delta = bb.position - ba.position;
        let distance = delta.norm();
        if distance < EPSILON {
            return None;
        }
        let dir = delta / distance;

        let stretch = distance - self.rest_length(bodies);
        let closing = (bb.velocity - ba.velocity).dot(&dir);
        let magnitude = self.stiffness * stretch + self.damping * closing;

        Some(magnitude * dir)
    }

    /// Accumulate the spring's accelerations on both endpoints
    pub fn apply(&self, bodies: &mut [Body]) {
        let Some(force) = self.force(bodies) else {
            tracing::trace!(a = %self.a, b = %self.b, "spring endpoints coincide, skipped");
            return;
        };
        bodies[self.a.index()].apply_force(force);
        bodies[self.b.index()].apply_force(-force);
    }
}
