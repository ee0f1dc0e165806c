//! Error types for scene construction and configuration.
//!
//! The physics step itself never fails: degenerate geometry and bad time
//! steps are skipped or clamped. Errors only come from building a scene
//! with invalid bodies or springs, or from an invalid config file.

use thiserror::Error;

use crate::simulation::states::BodyHandle;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("shape dimensions must be positive and finite")]
    InvalidShape,

    #[error("scene is full ({capacity} bodies)")]
    CapacityExceeded { capacity: usize },

    #[error("body {handle} does not exist (count: {count})")]
    UnknownBody { handle: BodyHandle, count: usize },

    #[error("spring cannot connect body {handle} to itself")]
    SelfLoop { handle: BodyHandle },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sub_steps must be at least 1")]
    ZeroSubSteps,

    #[error("collision_iterations must be at least 1")]
    ZeroCollisionIterations,

    #[error("boundary radius must be positive, got {0}")]
    InvalidBoundary(f64),

    #[error("air_resistance must be non-negative, got {0}")]
    NegativeDrag(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("max_dt ({max_dt}) is smaller than min_dt ({min_dt})")]
    InvertedDtRange { min_dt: f64, max_dt: f64 },

    #[error("palette needs at least one colour")]
    EmptyPalette,
}

pub type SceneResult<T> = Result<T, SceneError>;
