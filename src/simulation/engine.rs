//! High-level runtime engine settings
//!
//! Selects which parts of the step run (springs, boundary), how collisions
//! are resolved, and how many sub-steps a frame is split into.

use crate::simulation::collision::{CollisionMode, Separation};
use crate::simulation::constraint::CircleBoundary;
use crate::simulation::spring::RestLength;

pub const DEFAULT_MAX_BODIES: usize = 4096;

#[derive(Debug, Clone)]
pub struct Engine {
    pub springs_enabled: bool,
    pub sub_steps: u32, // steps per frame, each with dt / sub_steps
    pub collision: CollisionMode,
    pub separation: Separation,
    pub collision_iterations: u32, // collision passes per sub-step, stops early once nothing overlaps
    pub rest_length: RestLength, // used by `Scene::add_spring`
    pub boundary: Option<CircleBoundary>, // None = unbounded
    pub max_bodies: usize,
}

impl Engine {
    pub fn with_sub_steps(mut self, sub_steps: u32) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    pub fn with_collision(mut self, collision: CollisionMode) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_collision_iterations(mut self, iterations: u32) -> Self {
        self.collision_iterations = iterations.max(1);
        self
    }

    pub fn with_boundary(mut self, boundary: CircleBoundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn with_max_bodies(mut self, max_bodies: usize) -> Self {
        self.max_bodies = max_bodies;
        self
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            springs_enabled: true,
            sub_steps: 1,
            collision: CollisionMode::Elastic,
            separation: Separation::Halves,
            collision_iterations: 1,
            rest_length: RestLength::Zero,
            boundary: None,
            max_bodies: DEFAULT_MAX_BODIES,
        }
    }
}
