//! End-to-end pipeline scenarios against the recorded command stream

use sketchkit_paint::{
    Color, DrawMode, FillStyle, Gradient, HorizAlign, PaintCommand, PaintContext, Point,
    StrokeStyle,
};
use sketchkit_shape::{
    draw_rect, draw_text, Align, BackgroundOptions, BorderOptions, GradientKind, GradientSpec,
    StyleOptions, TextAlignOptions,
};

#[test]
fn test_centered_red_rect_with_border() {
    let mut ctx = PaintContext::new(400.0, 400.0);
    let options = StyleOptions::new()
        .align(Align::Center)
        .color("red")
        .border(BorderOptions::new().visible(true).color("black").weight(3.0));
    draw_rect(&mut ctx, Point::new(100.0, 100.0), 50.0, &options);

    assert_eq!(
        ctx.commands(),
        &[
            PaintCommand::Push,
            PaintCommand::RectMode(DrawMode::Center),
            PaintCommand::EllipseMode(DrawMode::Center),
            PaintCommand::Translate(Point::new(100.0, 100.0)),
            PaintCommand::SetStroke(StrokeStyle {
                color: Color::BLACK,
                weight: 3.0
            }),
            PaintCommand::SetFill(FillStyle::Color(Color::RED)),
            PaintCommand::Rect {
                x: 0.0,
                y: 0.0,
                width: 50.0,
                height: 50.0
            },
            PaintCommand::Pop,
        ]
    );
}

#[test]
fn test_default_text_run() {
    let mut ctx = PaintContext::new(400.0, 400.0);
    let options = StyleOptions::new().text_align(TextAlignOptions::new(HorizAlign::Left));
    draw_text(&mut ctx, "Hi", Point::ZERO, 16.0, &options);

    assert_eq!(
        ctx.commands(),
        &[
            PaintCommand::Push,
            PaintCommand::RectMode(DrawMode::Corner),
            PaintCommand::EllipseMode(DrawMode::Corner),
            PaintCommand::Translate(Point::ZERO),
            PaintCommand::NoStroke,
            PaintCommand::SetFill(FillStyle::Color(Color::BLACK)),
            PaintCommand::SetTextAlign {
                horiz: HorizAlign::Left,
                vert: None
            },
            PaintCommand::SetFont("serif".to_string()),
            PaintCommand::SetTextSize(16.0),
            PaintCommand::Text {
                string: "Hi".to_string(),
                x: 0.0,
                y: 0.0
            },
            PaintCommand::Pop,
        ]
    );
}

#[test]
fn test_gradient_fill_uses_pretransform_geometry() {
    let mut ctx = PaintContext::new(400.0, 400.0);
    let spec = GradientSpec::new(GradientKind::Linear, 0.0)
        .stop(0.0, Color::RED)
        .stop(1.0, Color::BLUE);
    let options = StyleOptions::new().align(Align::Center).color(spec).rotate(1.0);
    let shape = draw_rect(&mut ctx, Point::new(200.0, 200.0), 50.0, &options);

    let fill = ctx
        .commands()
        .iter()
        .find_map(|c| match c {
            PaintCommand::SetFill(FillStyle::Gradient(g)) => Some(g.clone()),
            _ => None,
        })
        .expect("gradient fill installed");

    // Anchors come from the local pre-transform geometry: the center
    // is the local origin in center-aligned mode, and the axis spans
    // the bounding radius on each side.
    let Gradient::Linear { start, end, .. } = fill else {
        panic!("expected linear gradient");
    };
    let radius = shape.geometry.radius;
    assert!((start.x - radius).abs() < 1e-4);
    assert!(start.y.abs() < 1e-4);
    assert!((end.x + radius).abs() < 1e-4);
    assert!(end.y.abs() < 1e-4);

    // The fill installation happens after the rotation is set up...
    let rotate_at = ctx
        .commands()
        .iter()
        .position(|c| matches!(c, PaintCommand::Rotate(_)))
        .unwrap();
    let fill_at = ctx
        .commands()
        .iter()
        .position(|c| matches!(c, PaintCommand::SetFill(_)))
        .unwrap();
    assert!(rotate_at < fill_at);
}

#[test]
fn test_text_background_box_is_a_nested_scope() {
    let mut ctx = PaintContext::new(400.0, 400.0);
    let options = StyleOptions::new().background(
        BackgroundOptions::new()
            .visible(true)
            .color(220.0)
            .border(BorderOptions::new().visible(true).weight(2.0)),
    );
    draw_text(&mut ctx, "Hello", Point::new(50.0, 50.0), 20.0, &options);

    let commands = ctx.commands();

    // Outer scope, background scope, and the nested rect's own scope
    let pushes = commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Push))
        .count();
    let pops = commands
        .iter()
        .filter(|c| matches!(c, PaintCommand::Pop))
        .count();
    assert_eq!(pushes, 3);
    assert_eq!(pops, 3);

    // The background border goes through the regular border
    // resolution and is actually stroked before the box is emitted.
    let stroke_at = commands
        .iter()
        .position(|c| {
            c == &PaintCommand::SetStroke(StrokeStyle {
                color: Color::gray(0.0),
                weight: 2.0,
            })
        })
        .expect("background border stroked");
    let box_at = commands
        .iter()
        .position(|c| matches!(c, PaintCommand::Rect { .. }))
        .unwrap();
    assert!(stroke_at < box_at);

    // Box sized by the headless text metric: 20px * 0.6 em * 5 chars.
    assert_eq!(
        commands[box_at],
        PaintCommand::Rect {
            x: 0.0,
            y: 0.0,
            width: 60.0,
            height: 20.0
        }
    );

    // The run itself comes after the background box.
    let run_at = commands
        .iter()
        .position(|c| matches!(c, PaintCommand::Text { .. }))
        .unwrap();
    assert!(box_at < run_at);
}

#[test]
fn test_sequential_draw_calls_do_not_share_state() {
    let mut ctx = PaintContext::new(400.0, 400.0);
    draw_rect(
        &mut ctx,
        Point::ZERO,
        10.0,
        &StyleOptions::new()
            .color("blue")
            .border(BorderOptions::new().visible(true).weight(8.0)),
    );
    let ambient = ctx.state().clone();
    draw_rect(&mut ctx, Point::ZERO, 10.0, &StyleOptions::new());

    // The second call saw the caller's ambient state, not the first
    // call's styling.
    assert_eq!(ctx.state(), &ambient);
}
