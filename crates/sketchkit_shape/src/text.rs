//! Text specialization of the shape drawer
//!
//! Text replaces the geometry-emission stage with font, size,
//! alignment, and spacing state plus the text run itself, and may
//! draw a background box behind the run first. Shear is not applied
//! to text.

use sketchkit_paint::{PaintContext, Point};

use crate::appearance;
use crate::geometry::Geometry;
use crate::options::{BorderOptions, Resolved, ShapeSize, StyleOptions};
use crate::shape::{draw_rect, Shape, ShapeKind};
use crate::transform;

/// Draw a styled text run at `position`; `size` is the font size.
pub fn draw_text(
    ctx: &mut PaintContext,
    string: &str,
    position: Point,
    size: f32,
    options: &StyleOptions,
) -> Shape {
    let resolved = Resolved::resolve(Some(ShapeSize::Scalar(size)), options);
    let geometry = Geometry::compute(resolved.size, resolved.align);
    tracing::trace!(string, x = position.x, y = position.y, "draw text");

    let mut surface = ctx.scoped();
    transform::align(&mut surface, resolved.align);
    transform::rotate(&mut surface, resolved.rotate, position);
    background(&mut surface, &resolved, string, size);
    appearance::apply(&mut surface, &resolved, &geometry);
    emit(&mut surface, &resolved, string, size);
    drop(surface);

    Shape {
        kind: ShapeKind::Text,
        position,
        resolved,
        geometry,
    }
}

/// Box behind the text run, sized to the measured run width and the
/// text size. A nested scoped draw: the ambient appearance is reset
/// to neutral, and the background's own color and border go through
/// the regular shape pipeline.
fn background(ctx: &mut PaintContext, resolved: &Resolved, string: &str, size: f32) {
    if !resolved.background.visible {
        return;
    }

    let mut scope = ctx.scoped();
    scope.reset_appearance();
    scope.set_text_size(size);
    let width = scope.measure_text(string);

    let mut options = StyleOptions::new().color(resolved.background.color.clone());
    let border = &resolved.background.border;
    if border.visible {
        options = options.border(
            BorderOptions::new()
                .visible(true)
                .color(border.color)
                .weight(border.weight),
        );
    }
    draw_rect(&mut scope, Point::ZERO, (width, size), &options);
}

fn emit(ctx: &mut PaintContext, resolved: &Resolved, string: &str, size: f32) {
    ctx.set_text_align(resolved.text_align.horiz, resolved.text_align.vert);
    if let Some(spacing) = resolved.letter_spacing {
        ctx.set_letter_spacing(spacing);
    }
    if let Some(spacing) = resolved.word_spacing {
        ctx.set_word_spacing(spacing);
    }
    ctx.set_font(resolved.font.clone());
    ctx.set_text_size(size);
    ctx.text(string, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BackgroundOptions, ShearOptions, TextAlignOptions};
    use sketchkit_paint::{HorizAlign, PaintCommand, VertAlign};

    #[test]
    fn test_text_sets_font_state_before_run() {
        let mut ctx = PaintContext::new(400.0, 400.0);
        draw_text(&mut ctx, "Hi", Point::ZERO, 16.0, &StyleOptions::new());

        let commands = ctx.commands();
        let font_at = commands
            .iter()
            .position(|c| c == &PaintCommand::SetFont("serif".to_string()))
            .expect("font set");
        let run_at = commands
            .iter()
            .position(|c| matches!(c, PaintCommand::Text { .. }))
            .expect("text emitted");
        assert!(font_at < run_at);
        assert!(commands.contains(&PaintCommand::SetTextSize(16.0)));
    }

    #[test]
    fn test_vertical_align_only_when_set() {
        let mut ctx = PaintContext::new(400.0, 400.0);
        draw_text(&mut ctx, "a", Point::ZERO, 12.0, &StyleOptions::new());
        assert!(ctx.commands().contains(&PaintCommand::SetTextAlign {
            horiz: HorizAlign::Left,
            vert: None
        }));

        let mut ctx = PaintContext::new(400.0, 400.0);
        let options = StyleOptions::new()
            .text_align(TextAlignOptions::new(HorizAlign::Center).vert(VertAlign::Top));
        draw_text(&mut ctx, "a", Point::ZERO, 12.0, &options);
        assert!(ctx.commands().contains(&PaintCommand::SetTextAlign {
            horiz: HorizAlign::Center,
            vert: Some(VertAlign::Top)
        }));
    }

    #[test]
    fn test_no_background_box_by_default() {
        let mut ctx = PaintContext::new(400.0, 400.0);
        draw_text(&mut ctx, "Hi", Point::ZERO, 16.0, &StyleOptions::new());
        assert!(!ctx
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::Rect { .. })));
    }

    #[test]
    fn test_background_box_is_drawn_behind_the_run() {
        let mut ctx = PaintContext::new(400.0, 400.0);
        let options =
            StyleOptions::new().background(BackgroundOptions::new().visible(true).color(200.0));
        draw_text(&mut ctx, "Hi", Point::ZERO, 10.0, &options);

        let commands = ctx.commands();
        let box_at = commands
            .iter()
            .position(|c| matches!(c, PaintCommand::Rect { .. }))
            .expect("background box");
        let run_at = commands
            .iter()
            .position(|c| matches!(c, PaintCommand::Text { .. }))
            .unwrap();
        assert!(box_at < run_at);

        // Sized by the headless metric: 10px * 0.6 em * 2 chars.
        assert_eq!(
            commands[box_at],
            PaintCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 12.0,
                height: 10.0
            }
        );
    }

    #[test]
    fn test_text_skips_shear() {
        let mut ctx = PaintContext::new(400.0, 400.0);
        let options = StyleOptions::new().shear(ShearOptions::new().x(0.4));
        draw_text(&mut ctx, "Hi", Point::ZERO, 16.0, &options);
        assert!(!ctx
            .commands()
            .iter()
            .any(|c| matches!(c, PaintCommand::ShearX(_) | PaintCommand::ShearY(_))));
    }

    #[test]
    fn test_spacing_recorded_when_set() {
        let mut ctx = PaintContext::new(400.0, 400.0);
        let options = StyleOptions::new().letter_spacing(1.5).word_spacing(3.0);
        draw_text(&mut ctx, "a b", Point::ZERO, 12.0, &options);

        assert!(ctx.commands().contains(&PaintCommand::SetLetterSpacing(1.5)));
        assert!(ctx.commands().contains(&PaintCommand::SetWordSpacing(3.0)));
    }
}
