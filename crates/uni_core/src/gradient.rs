//! Framework-agnostic gradient values
//!
//! Gradients are stored as plain data: an ordered stop list plus geometry
//! in unit coordinate space. Converting them into a renderer's native
//! gradient type happens outside this crate.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color::Color;

/// A single gradient stop: a color at a position along the gradient axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    /// Position along the gradient, clamped to `[0.0, 1.0]`.
    pub position: f32,
}

impl GradientStop {
    pub fn new(color: Color, position: f32) -> Self {
        Self {
            color,
            position: position.clamp(0.0, 1.0),
        }
    }
}

/// Gradient geometry, expressed in unit space (`[0, 1]` per axis).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GradientGeometry {
    /// Axis gradient at an angle in degrees, `0.0` pointing right.
    Linear { angle_deg: f32 },
    /// Circular gradient from `center`, radius in unit space.
    Radial { center: [f32; 2], radius: f32 },
    /// Angular sweep around `center`, starting at `angle_deg`.
    Conic { center: [f32; 2], angle_deg: f32 },
}

/// An ordered stop list with geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub geometry: GradientGeometry,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl Gradient {
    pub fn linear(angle_deg: f32, stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Self {
            geometry: GradientGeometry::Linear { angle_deg },
            stops: stops.into_iter().collect(),
        }
    }

    pub fn radial(
        center: [f32; 2],
        radius: f32,
        stops: impl IntoIterator<Item = GradientStop>,
    ) -> Self {
        Self {
            geometry: GradientGeometry::Radial { center, radius },
            stops: stops.into_iter().collect(),
        }
    }

    pub fn conic(
        center: [f32; 2],
        angle_deg: f32,
        stops: impl IntoIterator<Item = GradientStop>,
    ) -> Self {
        Self {
            geometry: GradientGeometry::Conic { center, angle_deg },
            stops: stops.into_iter().collect(),
        }
    }

    /// Two-stop gradient between `from` and `to`, horizontal axis.
    pub fn simple(from: Color, to: Color) -> Self {
        Self::linear(
            0.0,
            [GradientStop::new(from, 0.0), GradientStop::new(to, 1.0)],
        )
    }
}
