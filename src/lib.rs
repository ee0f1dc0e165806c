pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyHandle, Shape, NVec2};
pub use simulation::spring::{Spring, RestLength};
pub use simulation::forces::{Acceleration, AccelSet, UniformGravity, LinearDrag};
pub use simulation::collision::{CollisionMode, Separation};
pub use simulation::constraint::CircleBoundary;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scene::Scene;
pub use simulation::scenario::{Scenario, Lattice, BodySpawner, SpawnTrigger};

pub use configuration::config::{SimConfig, EngineConfig, ParametersConfig, ViewConfig, BoundaryConfig};

pub use visualization::render::{RenderTarget, Palette, Rgb};
pub use visualization::viewer::run_2d;

pub use benchmark::benchmark::{run_headless, bench_update, bench_sub_steps, RunSummary};

pub use error::{SceneError, ConfigError};
