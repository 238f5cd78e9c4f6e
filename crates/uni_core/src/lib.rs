//! Uni Core Value Types
//!
//! This crate provides the framework-agnostic primitives shared by the Uni
//! design system:
//!
//! - [`Color`]: an immutable sRGB color with clamped floating-point channels
//! - [`Gradient`]: gradient stop lists with linear/radial/conic geometry
//!
//! Nothing in this crate knows about any UI framework. Conversion of these
//! values into renderable paint types is the job of the rendering layer.
//!
//! # Example
//!
//! ```rust
//! use uni_core::{Color, Gradient, GradientStop};
//!
//! let accent = Color::from_hex(0x0A84FF);
//! let faded = accent.with_alpha(0.3);
//! assert_eq!(faded.r, accent.r);
//!
//! let hero = Gradient::linear(
//!     45.0,
//!     [
//!         GradientStop::new(accent, 0.0),
//!         GradientStop::new(Color::from_hex(0xBF5AF2), 1.0),
//!     ],
//! );
//! assert_eq!(hero.stops.len(), 2);
//! ```

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{Gradient, GradientGeometry, GradientStop};
