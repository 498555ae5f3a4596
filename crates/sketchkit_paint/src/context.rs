//! Paint context - the stateful drawing surface
//!
//! The context mirrors a Canvas/p5-style surface: fill, stroke,
//! shadow, blur, draw modes, and text settings are *current state*,
//! and primitive calls consume whatever is set when they happen.
//! Each mutation and primitive is also recorded as a
//! [`PaintCommand`] so a renderer (or a test) can replay the stream.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use crate::color::Color;
use crate::gradient::Gradient;
use crate::primitives::{DrawMode, HorizAlign, Point, Shadow, VertAlign};

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub weight: f32,
}

/// A recorded surface operation
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    Push,
    Pop,
    SetFill(FillStyle),
    NoFill,
    SetStroke(StrokeStyle),
    NoStroke,
    SetShadow(Shadow),
    ClearShadow,
    SetBlur(f32),
    ClearBlur,
    RectMode(DrawMode),
    EllipseMode(DrawMode),
    Translate(Point),
    Rotate(f32),
    ShearX(f32),
    ShearY(f32),
    SetFont(String),
    SetTextSize(f32),
    SetTextAlign {
        horiz: HorizAlign,
        vert: Option<VertAlign>,
    },
    SetLetterSpacing(f32),
    SetWordSpacing(f32),
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Ellipse {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line {
        from: Point,
        to: Point,
    },
    Triangle {
        a: Point,
        b: Point,
        c: Point,
    },
    PlotPoint(Point),
    Text {
        string: String,
        x: f32,
        y: f32,
    },
}

/// The mutable paint state a `push`/`pop` pair snapshots and restores
#[derive(Clone, Debug, PartialEq)]
pub struct PaintState {
    pub fill: Option<FillStyle>,
    pub stroke: Option<StrokeStyle>,
    pub shadow: Option<Shadow>,
    pub blur: Option<f32>,
    pub rect_mode: DrawMode,
    pub ellipse_mode: DrawMode,
    pub font: String,
    pub text_size: f32,
    pub text_align: (HorizAlign, Option<VertAlign>),
    pub letter_spacing: Option<f32>,
    pub word_spacing: Option<f32>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            fill: Some(FillStyle::Color(Color::WHITE)),
            stroke: Some(StrokeStyle {
                color: Color::BLACK,
                weight: 1.0,
            }),
            shadow: None,
            blur: None,
            rect_mode: DrawMode::Corner,
            ellipse_mode: DrawMode::Center,
            font: "sans-serif".to_string(),
            text_size: 12.0,
            text_align: (HorizAlign::Left, None),
            letter_spacing: None,
            word_spacing: None,
        }
    }
}

/// The drawing surface
pub struct PaintContext {
    width: f32,
    height: f32,
    state: PaintState,
    state_stack: SmallVec<[PaintState; 8]>,
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            state: PaintState::default(),
            state_stack: SmallVec::new(),
            commands: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The canvas center point
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Current paint state
    pub fn state(&self) -> &PaintState {
        &self.state
    }

    /// All recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    // === Scoped state ===

    /// Snapshot the current state
    pub fn push(&mut self) {
        self.state_stack.push(self.state.clone());
        self.commands.push(PaintCommand::Push);
    }

    /// Restore the most recent snapshot
    pub fn pop(&mut self) {
        match self.state_stack.pop() {
            Some(state) => {
                self.state = state;
                self.commands.push(PaintCommand::Pop);
            }
            None => tracing::warn!("pop without matching push"),
        }
    }

    /// Push now, pop when the returned guard drops.
    ///
    /// The guard derefs to the context, so a whole draw call runs
    /// through it and the ambient state is restored on every exit
    /// path.
    pub fn scoped(&mut self) -> ScopedSurface<'_> {
        self.push();
        ScopedSurface { ctx: self }
    }

    // === Appearance state ===

    pub fn set_fill(&mut self, style: impl Into<FillStyle>) {
        let style = style.into();
        self.state.fill = Some(style.clone());
        self.commands.push(PaintCommand::SetFill(style));
    }

    pub fn no_fill(&mut self) {
        self.state.fill = None;
        self.commands.push(PaintCommand::NoFill);
    }

    pub fn set_stroke(&mut self, color: Color, weight: f32) {
        let style = StrokeStyle { color, weight };
        self.state.stroke = Some(style);
        self.commands.push(PaintCommand::SetStroke(style));
    }

    pub fn no_stroke(&mut self) {
        self.state.stroke = None;
        self.commands.push(PaintCommand::NoStroke);
    }

    pub fn set_shadow(&mut self, shadow: Shadow) {
        self.state.shadow = Some(shadow);
        self.commands.push(PaintCommand::SetShadow(shadow));
    }

    pub fn clear_shadow(&mut self) {
        self.state.shadow = None;
        self.commands.push(PaintCommand::ClearShadow);
    }

    pub fn set_blur(&mut self, radius: f32) {
        self.state.blur = Some(radius);
        self.commands.push(PaintCommand::SetBlur(radius));
    }

    pub fn clear_blur(&mut self) {
        self.state.blur = None;
        self.commands.push(PaintCommand::ClearBlur);
    }

    /// Stroke, shadow, and blur back to neutral
    pub fn reset_appearance(&mut self) {
        self.no_stroke();
        self.clear_shadow();
        self.clear_blur();
    }

    // === Draw modes ===

    pub fn set_rect_mode(&mut self, mode: DrawMode) {
        self.state.rect_mode = mode;
        self.commands.push(PaintCommand::RectMode(mode));
    }

    pub fn set_ellipse_mode(&mut self, mode: DrawMode) {
        self.state.ellipse_mode = mode;
        self.commands.push(PaintCommand::EllipseMode(mode));
    }

    // === Transforms ===

    pub fn translate(&mut self, offset: Point) {
        self.commands.push(PaintCommand::Translate(offset));
    }

    pub fn rotate(&mut self, angle: f32) {
        self.commands.push(PaintCommand::Rotate(angle));
    }

    pub fn shear_x(&mut self, angle: f32) {
        self.commands.push(PaintCommand::ShearX(angle));
    }

    pub fn shear_y(&mut self, angle: f32) {
        self.commands.push(PaintCommand::ShearY(angle));
    }

    // === Text state ===

    pub fn set_font(&mut self, font: impl Into<String>) {
        let font = font.into();
        self.state.font = font.clone();
        self.commands.push(PaintCommand::SetFont(font));
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.state.text_size = size;
        self.commands.push(PaintCommand::SetTextSize(size));
    }

    pub fn set_text_align(&mut self, horiz: HorizAlign, vert: Option<VertAlign>) {
        self.state.text_align = (horiz, vert);
        self.commands.push(PaintCommand::SetTextAlign { horiz, vert });
    }

    pub fn set_letter_spacing(&mut self, spacing: f32) {
        self.state.letter_spacing = Some(spacing);
        self.commands.push(PaintCommand::SetLetterSpacing(spacing));
    }

    pub fn set_word_spacing(&mut self, spacing: f32) {
        self.state.word_spacing = Some(spacing);
        self.commands.push(PaintCommand::SetWordSpacing(spacing));
    }

    /// Width of `text` at the current text size.
    ///
    /// Headless metric: a fixed 0.6 em advance per char. A renderer
    /// backend with a real font stack would override the value.
    pub fn measure_text(&self, text: &str) -> f32 {
        self.state.text_size * 0.6 * text.chars().count() as f32
    }

    // === Primitives ===

    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(PaintCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    pub fn ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(PaintCommand::Ellipse {
            x,
            y,
            width,
            height,
        });
    }

    pub fn line(&mut self, from: Point, to: Point) {
        self.commands.push(PaintCommand::Line { from, to });
    }

    pub fn triangle(&mut self, a: Point, b: Point, c: Point) {
        self.commands.push(PaintCommand::Triangle { a, b, c });
    }

    pub fn point(&mut self, at: Point) {
        self.commands.push(PaintCommand::PlotPoint(at));
    }

    pub fn text(&mut self, string: impl Into<String>, x: f32, y: f32) {
        self.commands.push(PaintCommand::Text {
            string: string.into(),
            x,
            y,
        });
    }
}

/// RAII scope over the context's state stack.
///
/// Created by [`PaintContext::scoped`]; pops on drop, so the state a
/// draw call mutates can never leak into the caller's frame.
pub struct ScopedSurface<'a> {
    ctx: &'a mut PaintContext,
}

impl Deref for ScopedSurface<'_> {
    type Target = PaintContext;

    fn deref(&self) -> &PaintContext {
        self.ctx
    }
}

impl DerefMut for ScopedSurface<'_> {
    fn deref_mut(&mut self) -> &mut PaintContext {
        self.ctx
    }
}

impl Drop for ScopedSurface<'_> {
    fn drop(&mut self) {
        self.ctx.pop();
    }
}
