//! Core state types for the sandbox.
//!
//! Defines the body arena entries and their shapes:
//! - `Body`       point mass with shape, static flag and colour group
//! - `Shape`      closed set of body outlines (circle collides, box is render-only)
//! - `BodyHandle` stable index of a body inside the scene arena
//!
//! All vectors are `NVec2` in screen units with y pointing down.

use std::f64::consts::PI;
use std::fmt;

use nalgebra::Vector2;

pub type NVec2 = Vector2<f64>;

/// Distances below this are treated as coincident points.
pub const EPSILON: f64 = 1e-9;

/// Stable index of a body in the scene arena.
/// Bodies are never removed, so a handle stays valid for the scene's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub usize);

impl BodyHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    /// Axis-aligned rectangle centred on the body position. Drawn, never collided.
    Box { width: f64, height: f64 },
}

impl Shape {
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => radius * radius * PI,
            Shape::Box { width, height } => width * height,
        }
    }

    /// Radius of the smallest circle around the body centre containing the shape
    pub fn bounding_radius(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Box { width, height } => 0.5 * width.hypot(height),
        }
    }

    pub fn is_valid(&self) -> bool {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match *self {
            Shape::Circle { radius } => positive(radius),
            Shape::Box { width, height } => positive(width) && positive(height),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub position: NVec2,
    pub previous_position: NVec2, // position before the last integration step
    pub velocity: NVec2,
    pub acceleration: NVec2, // accumulated for the next integration step
    pub shape: Shape,
    pub mass: f64,
    pub is_static: bool,
    pub group: u8, // colour group, see `Palette`
}

impl Body {
    /// Circle with mass derived from its area
    pub fn circle(position: NVec2, radius: f64) -> Self {
        Self::with_shape(position, Shape::Circle { radius })
    }

    /// Box with mass derived from its area
    pub fn rect(position: NVec2, width: f64, height: f64) -> Self {
        Self::with_shape(position, Shape::Box { width, height })
    }

    pub fn with_shape(position: NVec2, shape: Shape) -> Self {
        Self {
            position,
            previous_position: position,
            velocity: NVec2::zeros(),
            acceleration: NVec2::zeros(),
            mass: shape.area(),
            shape,
            is_static: false,
            group: 0,
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_velocity(mut self, velocity: NVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_group(mut self, group: u8) -> Self {
        self.group = group;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Accumulate an acceleration for the next step. Static bodies ignore it.
    pub fn apply_acceleration(&mut self, acceleration: NVec2) {
        if !self.is_static {
            self.acceleration += acceleration;
        }
    }

    /// Accumulate `force / mass`
    pub fn apply_force(&mut self, force: NVec2) {
        self.apply_acceleration(force * self.inverse_mass());
    }

    /// Semi-implicit Euler: velocity first, then position with the new velocity.
    pub fn integrate(&mut self, dt: f64) {
        if self.is_static {
            return;
        }
        self.previous_position = self.position;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;
        self.acceleration = NVec2::zeros();
    }

    /// Zero for static bodies, which behave as infinitely heavy in collisions
    pub fn inverse_mass(&self) -> f64 {
        if self.is_static || self.mass <= 0.0 {
            0.0
        } else {
            self.mass.recip()
        }
    }

    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Box { .. } => None,
        }
    }

    pub fn bounding_radius(&self) -> f64 {
        self.shape.bounding_radius()
    }

    pub fn momentum(&self) -> NVec2 {
        if self.is_static {
            NVec2::zeros()
        } else {
            self.mass * self.velocity
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        if self.is_static {
            0.0
        } else {
            0.5 * self.mass * self.velocity.norm_squared()
        }
    }
}
