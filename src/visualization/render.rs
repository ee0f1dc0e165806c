//! Drawing seam between the scene and whatever puts pixels on screen.
//!
//! `Scene::draw` only talks to a `RenderTarget`; the Bevy viewer implements
//! it with gizmos, tests implement it with a recorder.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::states::NVec2;

/// Linear RGB in [0, 1]
pub type Rgb = [f32; 3];

pub trait RenderTarget {
    /// Filled or outlined circle centred at `center`
    fn circle(&mut self, center: NVec2, radius: f64, color: Rgb);

    /// Axis-aligned rectangle centred at `center`
    fn rect(&mut self, center: NVec2, width: f64, height: f64, color: Rgb);

    /// Segment with a colour gradient from `a` to `b`
    fn line(&mut self, a: NVec2, b: NVec2, color_a: Rgb, color_b: Rgb);

    /// Outline only, used for the boundary
    fn ring(&mut self, center: NVec2, radius: f64, color: Rgb) {
        self.circle(center, radius, color);
    }
}

/// Maps a body's group to a colour, wrapping around the list.
/// Never empty: both `new` and deserialisation reject an empty list.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn color(&self, group: u8) -> Rgb {
        self.colors[usize::from(group) % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<Rgb>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl Default for Palette {
    /// White, red, green, blue
    fn default() -> Self {
        Self {
            colors: vec![
                [1.0, 1.0, 1.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }
}
