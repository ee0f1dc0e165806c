//! Build the startup scene and spawn bodies at runtime
//!
//! The scene is hard-coded: a 15 x 15 lattice of heavy circles tied to
//! their row and column neighbours by springs, each starting with a random
//! velocity. `SimConfig` only tunes the engine and constants around it.
//!
//! `BodySpawner` adds random circles on demand and `SpawnTrigger` turns a
//! held key into a single spawn per press.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::SimConfig;
use crate::error::SceneResult;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scene::Scene;
use crate::simulation::states::{Body, BodyHandle, NVec2};

/// Number of groups the spawner and lattice pick colours from
pub const GROUPS: u8 = 4;

/// Layout of the startup lattice
#[derive(Debug, Clone)]
pub struct Lattice {
    pub rows: usize,
    pub cols: usize,
    pub origin: NVec2, // centre of the first body
    pub spacing: f64,
    pub radius: f64,
    pub mass: f64,
    pub max_speed: f64, // initial velocity components drawn from [-max_speed, max_speed)
    pub stiffness: f64,
    pub damping: f64,
}

impl Default for Lattice {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            origin: NVec2::new(250.0, 250.0),
            spacing: 30.0,
            radius: 9.0,
            mass: 250.0,
            max_speed: 50.0,
            stiffness: 10.0,
            damping: 0.1,
        }
    }
}

impl Lattice {
    /// Add the lattice bodies and springs to `scene`, returning the handles
    /// in column-major order (`i * rows + j`)
    pub fn populate<R: Rng>(&self, scene: &mut Scene, rng: &mut R) -> SceneResult<Vec<BodyHandle>> {
        let mut handles = Vec::with_capacity(self.rows * self.cols);

        for i in 0..self.cols {
            for j in 0..self.rows {
                let position = self.origin + NVec2::new(i as f64, j as f64) * self.spacing;
                let velocity = if self.max_speed > 0.0 {
                    NVec2::new(
                        rng.gen_range(-self.max_speed..self.max_speed),
                        rng.gen_range(-self.max_speed..self.max_speed),
                    )
                } else {
                    NVec2::zeros()
                };
                let body = Body::circle(position, self.radius)
                    .with_mass(self.mass)
                    .with_velocity(velocity)
                    .with_group(rng.gen_range(0..GROUPS));
                handles.push(scene.add_body(body)?);
            }
        }

        // neighbours inside a column
        for i in 0..self.cols {
            for j in 0..self.rows.saturating_sub(1) {
                let k = i * self.rows + j;
                scene.add_spring(handles[k], handles[k + 1], self.stiffness, self.damping)?;
            }
        }
        // neighbours across columns
        for i in 0..self.cols.saturating_sub(1) {
            for j in 0..self.rows {
                let k = i * self.rows + j;
                scene.add_spring(handles[k], handles[k + self.rows], self.stiffness, self.damping)?;
            }
        }

        tracing::debug!(
            bodies = handles.len(),
            springs = scene.spring_count(),
            "lattice populated"
        );
        Ok(handles)
    }
}

/// Runtime bundle handed to the viewer or the headless runner
pub struct Scenario {
    pub scene: Scene,
    pub spawner: BodySpawner,
}

impl Scenario {
    /// The startup scene: engine and constants from `cfg`, lattice in code
    pub fn build_scenario(cfg: &SimConfig) -> SceneResult<Self> {
        let engine = Engine::from(&cfg.engine);
        let parameters = Parameters::from(&cfg.parameters);
        let mut scene = Scene::new(engine, parameters);

        let mut rng = StdRng::seed_from_u64(cfg.view.seed);
        Lattice::default().populate(&mut scene, &mut rng)?;

        let area = NVec2::new(f64::from(cfg.view.width), f64::from(cfg.view.height));
        // separate stream so spawns don't depend on lattice size
        let spawner = BodySpawner::new(cfg.view.seed.wrapping_add(1), area);

        Ok(Self { scene, spawner })
    }
}

/// Adds random circles inside a rectangular area
pub struct BodySpawner {
    rng: StdRng,
    pub area: NVec2, // spawn positions fall in [0, area.x) x [0, area.y)
    pub min_radius: f64,
    pub max_radius: f64,
}

impl BodySpawner {
    pub fn new(seed: u64, area: NVec2) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            area,
            min_radius: 10.0,
            max_radius: 110.0,
        }
    }

    /// Random circle with area-derived mass and a random group
    pub fn random_body(&mut self) -> Body {
        let position = NVec2::new(
            self.rng.gen_range(0.0..self.area.x.max(1.0)),
            self.rng.gen_range(0.0..self.area.y.max(1.0)),
        );
        // an empty or inverted range pins the radius to `min_radius`
        let radius = if self.max_radius > self.min_radius {
            self.rng.gen_range(self.min_radius..self.max_radius)
        } else {
            self.min_radius
        };
        Body::circle(position, radius).with_group(self.rng.gen_range(0..GROUPS))
    }

    pub fn spawn(&mut self, scene: &mut Scene) -> SceneResult<BodyHandle> {
        let body = self.random_body();
        let handle = scene.add_body(body)?;
        tracing::debug!(%handle, count = scene.body_count(), "spawned body");
        Ok(handle)
    }
}

/// Rising-edge detector for the spawn key
#[derive(Debug, Default, Clone)]
pub struct SpawnTrigger {
    held: bool,
}

impl SpawnTrigger {
    /// Feed the current key state once per frame; true only on the frame the
    /// key goes down
    pub fn update(&mut self, pressed: bool) -> bool {
        let fire = pressed && !self.held;
        self.held = pressed;
        fire
    }
}
