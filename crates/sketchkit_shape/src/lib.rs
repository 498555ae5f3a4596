//! Sketchkit styled-shape pipeline
//!
//! A decorator layer over the [`sketchkit_paint`] surface: request a
//! rectangle, ellipse, or text run with a declarative [`StyleOptions`]
//! (fill or gradient, border, drop shadow, blur, rotation, shear,
//! alignment) instead of sequencing the low-level paint state calls
//! yourself.
//!
//! Every draw call is stateless: sparse options are resolved against
//! documented defaults, geometry is derived for gradient placement,
//! and a fixed transform + appearance pipeline runs inside a scoped
//! push/pop of the surface state.
//!
//! ```
//! use sketchkit_paint::{PaintContext, Point};
//! use sketchkit_shape::{draw_rect, Align, BorderOptions, StyleOptions};
//!
//! let mut ctx = PaintContext::new(400.0, 400.0);
//! draw_rect(
//!     &mut ctx,
//!     Point::new(100.0, 100.0),
//!     50.0,
//!     &StyleOptions::new()
//!         .align(Align::Center)
//!         .color("red")
//!         .border(BorderOptions::new().visible(true).weight(3.0)),
//! );
//! ```

pub mod appearance;
pub mod geometry;
pub mod gradient;
pub mod options;
pub mod shape;
pub mod text;
pub mod transform;

pub use geometry::Geometry;
pub use options::{
    Align, BackgroundOptions, BorderOptions, ColorSpec, DropShadowOptions, GradientKind,
    GradientSpec, Resolved, ShapeSize, ShearOptions, StyleOptions, TextAlignOptions,
};
pub use shape::{draw_ellipse, draw_line, draw_point, draw_rect, draw_triangle, Shape, ShapeKind};
pub use text::draw_text;
