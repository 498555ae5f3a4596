//! Transform pipeline: alignment mode, rotation, shear
//!
//! Shapes are always emitted in a local frame at the origin and
//! repositioned by translation, never by absolute coordinates in the
//! primitive call. Shear runs after rotation so skew angles are
//! expressed in the already-rotated frame.

use sketchkit_paint::{DrawMode, PaintContext, Point};

use crate::options::{Align, Resolved};

/// Run alignment, rotation, and shear against the surface transform.
pub fn apply(ctx: &mut PaintContext, resolved: &Resolved, anchor: Point) {
    align(ctx, resolved.align);
    rotate(ctx, resolved.rotate, anchor);
    shear(ctx, resolved);
}

/// Set the origin interpretation for both box primitives.
pub fn align(ctx: &mut PaintContext, align: Align) {
    let mode = match align {
        Align::Corner => DrawMode::Corner,
        Align::Center => DrawMode::Center,
    };
    ctx.set_rect_mode(mode);
    ctx.set_ellipse_mode(mode);
}

/// Position the local frame, pivoting any rotation at the anchor.
pub fn rotate(ctx: &mut PaintContext, angle: Option<f32>, anchor: Point) {
    match angle {
        Some(angle) => {
            ctx.translate(anchor);
            ctx.rotate(angle);
            ctx.translate(-anchor);
        }
        None => ctx.translate(anchor),
    }
}

/// Skew the (rotated) frame when shear is enabled.
pub fn shear(ctx: &mut PaintContext, resolved: &Resolved) {
    if resolved.shear.enabled {
        ctx.shear_x(resolved.shear.x);
        ctx.shear_y(resolved.shear.y);
    }
}
