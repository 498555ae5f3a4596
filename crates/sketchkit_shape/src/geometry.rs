//! Shape geometry derived from resolved size and alignment

use sketchkit_paint::Point;

use crate::options::{Align, ShapeSize};

/// Derived, read-only geometry for one draw call.
///
/// `radius` is the distance from the bounding box's top-left offset
/// to the center - a half-diagonal measure, not a circumscribed
/// radius for non-square sizes. It is used only to place gradients,
/// and the approximation is kept deliberately for visual parity with
/// the gradients it was tuned against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Center offset from the anchor position, in the local frame
    pub center: Point,
    /// Top-left offset in center-aligned mode, zero otherwise
    pub edge_offset: Point,
    pub radius: f32,
    pub diameter: f32,
}

impl Geometry {
    pub fn compute(size: ShapeSize, align: Align) -> Self {
        let (w, h) = (size.width(), size.height());
        let (edge_offset, center) = match align {
            Align::Center => (Point::new(-w / 2.0, -h / 2.0), Point::ZERO),
            Align::Corner => (Point::ZERO, Point::new(w / 2.0, h / 2.0)),
        };
        let radius = edge_offset.distance(center);
        Self {
            center,
            edge_offset,
            radius,
            diameter: radius * 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_aligned_scalar() {
        let g = Geometry::compute(ShapeSize::Scalar(50.0), Align::Center);
        assert_eq!(g.edge_offset, Point::new(-25.0, -25.0));
        assert_eq!(g.center, Point::ZERO);
        assert!((g.radius - 50.0 * std::f32::consts::SQRT_2 / 2.0).abs() < 1e-4);
        assert_eq!(g.diameter, g.radius * 2.0);
    }

    #[test]
    fn test_corner_aligned_scalar() {
        let g = Geometry::compute(ShapeSize::Scalar(50.0), Align::Corner);
        assert_eq!(g.edge_offset, Point::ZERO);
        assert_eq!(g.center, Point::new(25.0, 25.0));
        // Same radius as the center-aligned case
        assert!((g.radius - 50.0 * std::f32::consts::SQRT_2 / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_square_dims() {
        let g = Geometry::compute(ShapeSize::Dims { width: 60.0, height: 80.0 }, Align::Corner);
        assert_eq!(g.center, Point::new(30.0, 40.0));
        assert_eq!(g.radius, 50.0);
        assert_eq!(g.diameter, 100.0);
    }
}
