//! Configuration types for tuning the sandbox from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of the
//! engine settings and physical constants. It does not describe bodies: the
//! scene itself is built in code by `Scenario`.
//!
//! - [`EngineConfig`]     – step composition (springs, sub-steps, collisions, boundary)
//! - [`ParametersConfig`] – gravity, drag and time step limits
//! - [`ViewConfig`]       – window, palette, spawn seed
//! - [`SimConfig`]        – top-level wrapper loaded from a file
//!
//! # YAML format
//! Every field is optional; missing ones take their defaults.
//!
//! ```yaml
//! engine:
//!   springs: true
//!   sub_steps: 8
//!   collision: "elastic"      # or "positional"
//!   separation: "halves"      # or "mass_weighted"
//!   collision_iterations: 4   # passes per sub-step for stacked contacts
//!   rest_length: "zero"       # or "radius_sum"
//!   boundary:
//!     center: [500.0, 500.0]
//!     radius: 450.0
//!   max_bodies: 4096
//!
//! parameters:
//!   gravity: [0.0, 50.0]      # y points down
//!   air_resistance: 1.0
//!   min_dt: 1.0e-6
//!   max_dt: 0.05
//!
//! view:
//!   width: 1000
//!   height: 1000
//!   title: "pure chaos"
//!   seed: 7
//!   palette: [[1.0, 1.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::collision::{CollisionMode, Separation};
use crate::simulation::constraint::CircleBoundary;
use crate::simulation::engine::{Engine, DEFAULT_MAX_BODIES};
use crate::simulation::params::Parameters;
use crate::simulation::spring::RestLength;
use crate::simulation::states::NVec2;
use crate::visualization::render::Palette;

/// Circular region bodies are kept inside
#[derive(Deserialize, Debug, Clone)]
pub struct BoundaryConfig {
    pub center: [f64; 2],
    pub radius: f64,
}

/// Which stages of the step run, and how
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub springs: bool, // `false` skips the spring pass entirely
    pub sub_steps: u32, // frame is split into this many equal steps
    pub collision: CollisionMode,
    pub separation: Separation,
    pub collision_iterations: u32, // repeat the pair pass so chains of contacts settle
    pub rest_length: RestLength, // rest length for lattice springs
    pub boundary: Option<BoundaryConfig>, // no boundary when absent
    pub max_bodies: usize, // spawns past this are rejected
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            springs: true,
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

/// Global physical constants and time step limits
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: [f64; 2],
    pub air_resistance: f64,
    pub min_dt: f64,
    pub max_dt: Option<f64>,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, 50.0],
            air_resistance: 1.0,
            min_dt: 1e-6,
            max_dt: None,
        }
    }
}

/// Window and presentation settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub seed: u64, // seeds initial velocities and spawns, runs are reproducible
    pub palette: Palette,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            title: "pure chaos".to_string(),
            seed: 0,
            palette: Palette::default(),
        }
    }
}

/// Top-level configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct SimConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub view: ViewConfig,
}

impl SimConfig {
    /// Read and validate a YAML config file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: SimConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate YAML text
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let cfg: SimConfig = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.sub_steps == 0 {
            return Err(ConfigError::ZeroSubSteps);
        }
        if self.engine.collision_iterations == 0 {
            return Err(ConfigError::ZeroCollisionIterations);
        }
        if let Some(b) = &self.engine.boundary {
            if !(b.radius.is_finite() && b.radius > 0.0) {
                return Err(ConfigError::InvalidBoundary(b.radius));
            }
        }
        let p = &self.parameters;
        if !(p.air_resistance.is_finite() && p.air_resistance >= 0.0) {
            return Err(ConfigError::NegativeDrag(p.air_resistance));
        }
        if !(p.min_dt.is_finite() && p.min_dt > 0.0) {
            return Err(ConfigError::NonPositive { name: "min_dt", value: p.min_dt });
        }
        if let Some(max_dt) = p.max_dt {
            if !(max_dt.is_finite() && max_dt > 0.0) {
                return Err(ConfigError::NonPositive { name: "max_dt", value: max_dt });
            }
            if max_dt < p.min_dt {
                return Err(ConfigError::InvertedDtRange { min_dt: p.min_dt, max_dt });
            }
        }
        Ok(())
    }
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Engine {
            springs_enabled: cfg.springs,
            sub_steps: cfg.sub_steps.max(1),
            collision: cfg.collision,
            separation: cfg.separation,
            collision_iterations: cfg.collision_iterations.max(1),
            rest_length: cfg.rest_length,
            boundary: cfg
                .boundary
                .as_ref()
                .map(|b| CircleBoundary::new(NVec2::new(b.center[0], b.center[1]), b.radius)),
            max_bodies: cfg.max_bodies,
        }
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Parameters {
            gravity: NVec2::new(cfg.gravity[0], cfg.gravity[1]),
            air_resistance: cfg.air_resistance,
            min_dt: cfg.min_dt,
            max_dt: cfg.max_dt,
        }
    }
}
