//! Anchors a gradient descriptor on the shape geometry

use sketchkit_paint::{Gradient, GradientStop, Point};

use crate::geometry::Geometry;
use crate::options::{GradientKind, GradientSpec};

/// Build a surface paint style from a gradient descriptor.
///
/// Anchor points come from the pre-transform geometry:
/// - linear: the axis passes through the shape center at the given
///   angle, spanning the bounding radius on each side;
/// - radial: anchored at the center, inner radius 0, outer extent =
///   the bounding *diameter* (the original formula, preserved);
/// - conic: anchored at the center with the given sweep angle.
///
/// Stops are copied in caller order, unvalidated.
pub fn build(spec: &GradientSpec, geometry: &Geometry) -> Gradient {
    let stops: Vec<GradientStop> = spec
        .stops
        .iter()
        .map(|&(offset, color)| GradientStop::new(offset, color))
        .collect();
    let center = geometry.center;

    match spec.kind {
        GradientKind::Linear => {
            let opposite = spec.angle + std::f32::consts::PI;
            let start = Point::new(
                center.x + geometry.radius * spec.angle.cos(),
                center.y + geometry.radius * spec.angle.sin(),
            );
            let end = Point::new(
                center.x + geometry.radius * opposite.cos(),
                center.y + geometry.radius * opposite.sin(),
            );
            Gradient::Linear { start, end, stops }
        }
        GradientKind::Radial => Gradient::Radial {
            center,
            radius: geometry.diameter,
            stops,
        },
        GradientKind::Conic => Gradient::Conic {
            center,
            angle: spec.angle,
            stops,
        },
    }
}
