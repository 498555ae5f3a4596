//! Gradient paint styles

use crate::color::Color;
use crate::primitives::Point;

/// A gradient stop
///
/// Stops are consumed in the order they were supplied. The surface
/// never sorts or validates offsets; an out-of-order stop list is the
/// caller's contract with the paint backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// 0.0 to 1.0 along the gradient axis
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Gradient paint style
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Point,
        /// Inner radius is always zero; this is the outer extent.
        radius: f32,
        stops: Vec<GradientStop>,
    },
    Conic {
        center: Point,
        /// Sweep start angle in radians
        angle: f32,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Two-color linear gradient between `start` and `end`
    pub fn linear_simple(start: Point, end: Point, from: Color, to: Color) -> Self {
        Gradient::Linear {
            start,
            end,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Two-color radial gradient around `center`
    pub fn radial_simple(center: Point, radius: f32, from: Color, to: Color) -> Self {
        Gradient::Radial {
            center,
            radius,
            stops: vec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// The stop list, in supplied order
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. }
            | Gradient::Radial { stops, .. }
            | Gradient::Conic { stops, .. } => stops,
        }
    }
}
