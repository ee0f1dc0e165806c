//! The scene: body arena, springs, and the per-frame physics step
//!
//! `Scene` is the runtime bundle the viewer drives: it owns every body
//! and spring, the engine flags, the physical parameters and any extra
//! global force terms. It is inserted into Bevy as a `Resource`.
//!
//! Gravity and drag are read from `parameters` on every sub-step, so
//! changing them between frames takes effect on the next `update`.
//!
//! One sub-step runs, in order:
//! 1. spring forces
//! 2. global forces (gravity, drag)
//! 3. semi-implicit Euler integration
//! 4. pairwise collision resolution, repeated up to
//!    `engine.collision_iterations` times while contacts remain
//! 5. the optional circular boundary

use bevy::prelude::Resource;

use crate::error::{SceneError, SceneResult};
use crate::simulation::collision::resolve_collisions;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, Acceleration, LinearDrag, UniformGravity};
use crate::simulation::integrator::{euler_integrator, sanitize_dt, sub_step_dt};
use crate::simulation::params::Parameters;
use crate::simulation::spring::{RestLength, Spring};
use crate::simulation::states::{Body, BodyHandle, NVec2, Shape};
use crate::visualization::render::{Palette, RenderTarget};

/// Colour of the boundary outline
const BOUNDARY_COLOR: [f32; 3] = [0.35, 0.35, 0.35];

#[derive(Resource)]
pub struct Scene {
    pub engine: Engine,
    pub parameters: Parameters,
    extra_forces: AccelSet, // added on top of gravity and drag
    bodies: Vec<Body>,
    springs: Vec<Spring>,
    accel_buf: Vec<NVec2>, // reused by the global force pass
    t: f64, // simulated time
}

impl Scene {
    /// Empty scene with gravity and drag taken from `parameters`
    pub fn new(engine: Engine, parameters: Parameters) -> Self {
        Self::with_forces(engine, parameters, AccelSet::new())
    }

    /// Empty scene with extra global terms applied after gravity and drag
    pub fn with_forces(engine: Engine, parameters: Parameters, extra_forces: AccelSet) -> Self {
        Self {
            engine,
            parameters,
            extra_forces,
            bodies: Vec::new(),
            springs: Vec::new(),
            accel_buf: Vec::new(),
            t: 0.0,
        }
    }

    pub fn add_body(&mut self, body: Body) -> SceneResult<BodyHandle> {
        if self.bodies.len() >= self.engine.max_bodies {
            return Err(SceneError::CapacityExceeded { capacity: self.engine.max_bodies });
        }
        if !body.shape.is_valid() {
            return Err(SceneError::InvalidShape);
        }
        if !(body.mass.is_finite() && body.mass > 0.0) {
            return Err(SceneError::InvalidMass(body.mass));
        }

        let handle = BodyHandle(self.bodies.len());
        self.bodies.push(body);
        Ok(handle)
    }

    /// Connect two bodies with the engine's default rest length
    pub fn add_spring(&mut self, a: BodyHandle, b: BodyHandle, stiffness: f64, damping: f64) -> SceneResult<()> {
        let rest = self.engine.rest_length;
        self.add_spring_with_rest(a, b, stiffness, damping, rest)
    }

    pub fn add_spring_with_rest(
        &mut self,
        a: BodyHandle,
        b: BodyHandle,
        stiffness: f64,
        damping: f64,
        rest: RestLength,
    ) -> SceneResult<()> {
        self.check_handle(a)?;
        self.check_handle(b)?;
        if a == b {
            return Err(SceneError::SelfLoop { handle: a });
        }
        self.springs.push(Spring::new(a, b, stiffness, damping, rest));
        Ok(())
    }

    fn check_handle(&self, handle: BodyHandle) -> SceneResult<()> {
        if handle.index() < self.bodies.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownBody { handle, count: self.bodies.len() })
        }
    }

    /// Advance the scene by one frame of `dt` seconds.
    /// Bad `dt` values are clamped (see `sanitize_dt`); the frame is split
    /// into `engine.sub_steps` equal sub-steps.
    pub fn update(&mut self, dt: f64) {
        let dt = sanitize_dt(dt, &self.parameters);
        let sub_steps = self.engine.sub_steps.max(1);
        let h = sub_step_dt(dt, sub_steps);

        for _ in 0..sub_steps {
            self.step(h);
        }
        self.t += dt;
    }

    /// One sub-step: forces -> integrate -> collide -> constrain
    fn step(&mut self, dt: f64) {
        if self.bodies.is_empty() {
            return;
        }

        if self.engine.springs_enabled {
            for spring in &self.springs {
                spring.apply(&mut self.bodies);
            }
        }

        self.accel_buf.resize(self.bodies.len(), NVec2::zeros());
        self.extra_forces.accumulate_accels(&self.bodies, &mut self.accel_buf);
        UniformGravity { g: self.parameters.gravity }.acceleration(&self.bodies, &mut self.accel_buf);
        LinearDrag { coefficient: self.parameters.air_resistance }.acceleration(&self.bodies, &mut self.accel_buf);
        for (b, a) in self.bodies.iter_mut().zip(self.accel_buf.iter()) {
            b.apply_acceleration(*a);
        }

        euler_integrator(&mut self.bodies, dt);

        for _ in 0..self.engine.collision_iterations.max(1) {
            if resolve_collisions(&mut self.bodies, self.engine.collision, self.engine.separation) == 0 {
                break;
            }
        }

        if let Some(boundary) = &self.engine.boundary {
            boundary.apply_all(&mut self.bodies);
        }
    }

    /// Emit bodies in arena order, then springs, then the boundary outline
    pub fn draw<R: RenderTarget>(&self, target: &mut R, palette: &Palette) {
        for b in &self.bodies {
            let color = palette.color(b.group);
            match b.shape {
                Shape::Circle { radius } => target.circle(b.position, radius, color),
                Shape::Box { width, height } => target.rect(b.position, width, height, color),
            }
        }

        for s in &self.springs {
            let (ba, bb) = (&self.bodies[s.a.index()], &self.bodies[s.b.index()]);
            target.line(ba.position, bb.position, palette.color(ba.group), palette.color(bb.group));
        }

        if let Some(boundary) = &self.engine.boundary {
            target.ring(boundary.center, boundary.radius, BOUNDARY_COLOR);
        }
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle.index())
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.index())
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn is_full(&self) -> bool {
        self.bodies.len() >= self.engine.max_bodies
    }

    /// Simulated time in seconds
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Sum of m v over dynamic bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}
