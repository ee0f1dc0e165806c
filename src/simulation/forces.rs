//! Global acceleration contributors for the sandbox
//!
//! Defines the `Acceleration` trait and the two scene-wide terms:
//! uniform gravity and linear air drag. Spring forces are pairwise and
//! live in `spring.rs`.

use crate::simulation::states::{Body, NVec2};

/// Collection of global acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total global accelerations for all bodies
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for global acceleration sources
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]);
}

/// Same acceleration for every body, independent of mass
pub struct UniformGravity {
    pub g: NVec2,
}

impl Acceleration for UniformGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]) {
        for a in out.iter_mut().take(bodies.len()) {
            *a += self.g;
        }
    }
}

/// Drag opposing velocity: a = -coefficient * v
pub struct LinearDrag {
    pub coefficient: f64,
}

impl Acceleration for LinearDrag {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec2]) {
        if self.coefficient == 0.0 {
            return;
        }
        for (a, b) in out.iter_mut().zip(bodies.iter()) {
            *a -= self.coefficient * b.velocity;
        }
    }
}
