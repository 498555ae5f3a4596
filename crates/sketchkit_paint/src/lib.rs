//! Sketchkit drawing surface
//!
//! A stateful 2D painting API in the spirit of HTML Canvas or p5:
//! the context carries the *current* fill, stroke, shadow, blur,
//! transform, and text state, and primitive calls consume whatever
//! state is set at that moment.
//!
//! Every state mutation and primitive call is also recorded as a
//! [`PaintCommand`], so the surface doubles as a headless backend:
//! tests assert on the command stream and a renderer replays it.

pub mod color;
pub mod context;
pub mod gradient;
pub mod primitives;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext, PaintState, ScopedSurface, StrokeStyle};
pub use gradient::{Gradient, GradientStop};
pub use primitives::*;
