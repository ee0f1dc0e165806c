//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - scene-wide gravity and linear air resistance,
//! - the accepted range for frame time steps

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: NVec2, // acceleration applied to every body, y down
    pub air_resistance: f64, // linear drag coefficient
    pub min_dt: f64, // smallest accepted step, also used for zero/negative dt
    pub max_dt: Option<f64>, // clamp for frame spikes
}

impl Parameters {
    /// No gravity, no drag
    pub fn vacuum() -> Self {
        Self {
            gravity: NVec2::zeros(),
            air_resistance: 0.0,
            ..Self::default()
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: NVec2::new(0.0, 50.0),
            air_resistance: 1.0,
            min_dt: 1e-6,
            max_dt: None,
        }
    }
}
