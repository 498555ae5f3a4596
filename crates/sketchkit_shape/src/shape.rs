//! Shape drawer: the per-call pipeline and public entry points
//!
//! One draw call is a linear state machine with no branching back:
//! acquire surface state, transform, appearance, geometry emission,
//! release. Acquisition is the context's scoped guard, so styling
//! never leaks into the caller's frame on any exit path.

use sketchkit_paint::{PaintContext, Point};

use crate::appearance;
use crate::geometry::Geometry;
use crate::options::{Resolved, ShapeSize, StyleOptions};
use crate::transform;

/// Which primitive a draw call emits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Ellipse,
    Text,
}

/// Handle returned by a draw call that has already happened.
///
/// Carries the parameters the call resolved and the geometry it
/// derived, for inspection and debugging. Nothing here is retained
/// by the pipeline; the next call starts from scratch.
#[derive(Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub position: Point,
    pub resolved: Resolved,
    pub geometry: Geometry,
}

/// Draw a styled rectangle at `position`.
///
/// A scalar size draws a square.
pub fn draw_rect(
    ctx: &mut PaintContext,
    position: Point,
    size: impl Into<ShapeSize>,
    options: &StyleOptions,
) -> Shape {
    draw_shape(ctx, ShapeKind::Rect, position, size.into(), options)
}

/// Draw a styled ellipse at `position`.
///
/// A scalar size draws a circle.
pub fn draw_ellipse(
    ctx: &mut PaintContext,
    position: Point,
    size: impl Into<ShapeSize>,
    options: &StyleOptions,
) -> Shape {
    draw_shape(ctx, ShapeKind::Ellipse, position, size.into(), options)
}

fn draw_shape(
    ctx: &mut PaintContext,
    kind: ShapeKind,
    position: Point,
    size: ShapeSize,
    options: &StyleOptions,
) -> Shape {
    let resolved = Resolved::resolve(Some(size), options);
    let geometry = Geometry::compute(resolved.size, resolved.align);
    tracing::trace!(?kind, x = position.x, y = position.y, "draw shape");

    let mut surface = ctx.scoped();
    transform::apply(&mut surface, &resolved, position);
    appearance::apply(&mut surface, &resolved, &geometry);
    emit(&mut surface, kind, resolved.size);
    drop(surface);

    Shape {
        kind,
        position,
        resolved,
        geometry,
    }
}

fn emit(ctx: &mut PaintContext, kind: ShapeKind, size: ShapeSize) {
    let (w, h) = (size.width(), size.height());
    match kind {
        ShapeKind::Rect => ctx.rect(0.0, 0.0, w, h),
        ShapeKind::Ellipse => ctx.ellipse(0.0, 0.0, w, h),
        // Text runs through its own emission stage.
        ShapeKind::Text => unreachable!("text is drawn by draw_text"),
    }
}

// Thin wrappers over bare primitives; no pipeline involved.

/// Line between two points, with the ambient stroke.
pub fn draw_line(ctx: &mut PaintContext, from: Point, to: Point) {
    ctx.line(from, to);
}

/// Triangle through three points, with the ambient paint.
pub fn draw_triangle(ctx: &mut PaintContext, a: Point, b: Point, c: Point) {
    ctx.triangle(a, b, c);
}

/// Single point, with the ambient stroke.
pub fn draw_point(ctx: &mut PaintContext, at: Point) {
    ctx.point(at);
}
