//! Appearance pipeline: drop shadow, blur, stroke, fill
//!
//! The stage order is a contract. Shadow and blur prime the surface
//! before any paint is chosen, stroke comes before fill, and fill is
//! always last so an installed gradient fill style is never
//! overwritten by a later stroke call.

use sketchkit_paint::{Color, PaintContext, Shadow};

use crate::geometry::Geometry;
use crate::gradient;
use crate::options::{ColorSpec, Resolved};

/// Run the four appearance stages against the surface state.
pub fn apply(ctx: &mut PaintContext, resolved: &Resolved, geometry: &Geometry) {
    drop_shadow(ctx, resolved);
    blur(ctx, resolved);
    stroke(ctx, resolved);
    fill(ctx, resolved, geometry);
}

fn drop_shadow(ctx: &mut PaintContext, resolved: &Resolved) {
    let shadow = &resolved.drop_shadow;
    if shadow.visible {
        ctx.set_shadow(Shadow::new(
            shadow.offset.x,
            shadow.offset.y,
            shadow.blur,
            shadow.color,
        ));
    }
}

fn blur(ctx: &mut PaintContext, resolved: &Resolved) {
    if let Some(radius) = resolved.blur {
        ctx.set_blur(radius);
    }
}

fn stroke(ctx: &mut PaintContext, resolved: &Resolved) {
    let border = &resolved.border;
    if border.visible {
        ctx.set_stroke(border.color, border.weight);
    } else {
        ctx.no_stroke();
    }
}

fn fill(ctx: &mut PaintContext, resolved: &Resolved, geometry: &Geometry) {
    match &resolved.color {
        ColorSpec::Disabled => ctx.no_fill(),
        ColorSpec::Named(name) => match Color::named(name) {
            Some(color) => ctx.set_fill(color),
            // Unknown keyword: no fill call at all, ambient fill stands.
            None => tracing::debug!(name = %name, "unknown color name, fill left unchanged"),
        },
        ColorSpec::Gray(value) => ctx.set_fill(Color::gray(value / 255.0)),
        ColorSpec::Rgba(color) => ctx.set_fill(*color),
        ColorSpec::Gradient(spec) => ctx.set_fill(gradient::build(spec, geometry)),
    }
}
