//! Circular containment constraint.

use crate::simulation::states::{Body, NVec2, EPSILON};

/// Bodies are kept inside a circle of `radius` around `center`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleBoundary {
    pub center: NVec2,
    pub radius: f64,
}

impl CircleBoundary {
    pub fn new(center: NVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Largest centre distance a body of `body_radius` may have
    pub fn reach(&self, body_radius: f64) -> f64 {
        (self.radius - body_radius).max(0.0)
    }

    /// Project a body that left the circle back onto its edge, along the
    /// radial direction. Bodies already inside and static bodies are untouched.
    /// Returns true when the body was moved.
    pub fn apply(&self, body: &mut Body) -> bool {
        if body.is_static {
            return false;
        }
        let offset = body.position - self.center;
        let distance = offset.norm();
        let reach = self.reach(body.bounding_radius());
        if distance <= reach {
            return false;
        }
        body.position = if distance < EPSILON {
            self.center
        } else {
            self.center + offset * (reach / distance)
        };
        true
    }

    /// Apply to every body; returns how many were corrected
    pub fn apply_all(&self, bodies: &mut [Body]) -> usize {
        bodies.iter_mut().map(|b| self.apply(b)).filter(|&moved| moved).count()
    }
}
