//! Style options and the option resolver
//!
//! `StyleOptions` is the sparse, caller-facing structure: every field
//! is optional and absence means "use the default". [`Resolved`] is
//! its total counterpart - the only structure the rest of the
//! pipeline reads, so default logic lives in exactly one place.
//!
//! Recognized options and their defaults:
//!
//! | Option | Default | Effect |
//! |---|---|---|
//! | `color` | `Named("black")` | fill color, gradient, or `Disabled` for no fill |
//! | `align` | `Corner` | position/size describe a corner- or center-origin box |
//! | `border` | disabled | stroke around the shape; weight 2, gray 0 |
//! | `background` | disabled | box behind a text run; gray 0, own border (weight 2, gray 0) |
//! | `drop_shadow` | disabled | native shadow; offset (4,4), blur 4, gray 1 |
//! | `rotate` | off | rotation angle in radians, pivoting at the anchor |
//! | `blur` | off | filter blur radius |
//! | `shear` | off | x/y skew angles, applied after rotation |
//! | `font` | `"serif"` | text font family |
//! | `text_align` | left, vertical unset | text run alignment |
//! | `letter_spacing` | unset | extra per-glyph advance |
//! | `word_spacing` | unset | extra per-word advance |
//!
//! Gray values use the canvas-style 0-255 scale.

use sketchkit_paint::{Color, HorizAlign, Point, VertAlign};

/// Shape size: a scalar edge length or explicit dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeSize {
    Scalar(f32),
    Dims { width: f32, height: f32 },
}

impl ShapeSize {
    pub fn width(&self) -> f32 {
        match *self {
            ShapeSize::Scalar(s) => s,
            ShapeSize::Dims { width, .. } => width,
        }
    }

    pub fn height(&self) -> f32 {
        match *self {
            ShapeSize::Scalar(s) => s,
            ShapeSize::Dims { height, .. } => height,
        }
    }
}

impl From<f32> for ShapeSize {
    fn from(size: f32) -> Self {
        ShapeSize::Scalar(size)
    }
}

impl From<(f32, f32)> for ShapeSize {
    fn from((width, height): (f32, f32)) -> Self {
        ShapeSize::Dims { width, height }
    }
}

/// Whether position/size describe a corner-origin or center-origin box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Corner,
    Center,
}

/// Gradient variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
    Conic,
}

/// A gradient color specification: kind, angle, and ordered stops.
///
/// Stops are consumed exactly as given. Offsets are expected to be
/// non-decreasing in `[0, 1]` for sensible rendering, but that is the
/// caller's contract - nothing here sorts or validates them.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    pub kind: GradientKind,
    /// Sweep/axis angle in radians
    pub angle: f32,
    /// `(offset, color)` pairs in paint order
    pub stops: Vec<(f32, Color)>,
}

impl GradientSpec {
    pub fn new(kind: GradientKind, angle: f32) -> Self {
        Self {
            kind,
            angle,
            stops: Vec::new(),
        }
    }

    /// Append a color stop
    pub fn stop(mut self, offset: f32, color: Color) -> Self {
        self.stops.push((offset, color));
        self
    }
}

/// Any color-like value the options accept.
///
/// The tagged replacement for a canvas API's polymorphic color
/// argument: a flat value (`Named` keyword or 0-255 `Gray`), a native
/// color, a gradient descriptor, or `Disabled` for no fill at all.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    Disabled,
    Named(String),
    Gray(f32),
    Rgba(Color),
    Gradient(GradientSpec),
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Named("black".to_string())
    }
}

impl From<&str> for ColorSpec {
    fn from(name: &str) -> Self {
        ColorSpec::Named(name.to_string())
    }
}

impl From<f32> for ColorSpec {
    fn from(gray: f32) -> Self {
        ColorSpec::Gray(gray)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgba(color)
    }
}

impl From<GradientSpec> for ColorSpec {
    fn from(gradient: GradientSpec) -> Self {
        ColorSpec::Gradient(gradient)
    }
}

impl ColorSpec {
    /// The solid color this spec names, if any.
    ///
    /// `Disabled`, gradients, and unknown names yield `None`; callers
    /// fall back to their own default (permissive merge).
    pub fn to_solid(&self) -> Option<Color> {
        match self {
            ColorSpec::Disabled => None,
            ColorSpec::Named(name) => Color::named(name),
            ColorSpec::Gray(value) => Some(Color::gray(value / 255.0)),
            ColorSpec::Rgba(color) => Some(*color),
            ColorSpec::Gradient(_) => None,
        }
    }
}

/// Border sub-spec
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderOptions {
    pub visible: bool,
    pub color: Option<ColorSpec>,
    pub weight: Option<f32>,
}

impl BorderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Drop-shadow sub-spec
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropShadowOptions {
    pub visible: bool,
    pub offset: Option<Point>,
    pub blur: Option<f32>,
    pub color: Option<ColorSpec>,
}

impl DropShadowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Some(Point::new(x, y));
        self
    }

    pub fn blur(mut self, blur: f32) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Background-box sub-spec (text runs only)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundOptions {
    pub visible: bool,
    pub color: Option<ColorSpec>,
    pub border: Option<BorderOptions>,
}

impl BackgroundOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn border(mut self, border: BorderOptions) -> Self {
        self.border = Some(border);
        self
    }
}

/// Shear sub-spec: skew angles in radians
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShearOptions {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl ShearOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, angle: f32) -> Self {
        self.x = Some(angle);
        self
    }

    pub fn y(mut self, angle: f32) -> Self {
        self.y = Some(angle);
        self
    }
}

/// Text alignment sub-spec
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextAlignOptions {
    pub horiz: HorizAlign,
    pub vert: Option<VertAlign>,
}

impl TextAlignOptions {
    pub fn new(horiz: HorizAlign) -> Self {
        Self { horiz, vert: None }
    }

    pub fn vert(mut self, vert: VertAlign) -> Self {
        self.vert = Some(vert);
        self
    }
}

/// Sparse, caller-supplied appearance options.
///
/// All properties are optional - a draw call resolves the set it was
/// given against the defaults in the module table and never reads
/// this structure again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOptions {
    pub color: Option<ColorSpec>,
    pub align: Option<Align>,
    pub background: Option<BackgroundOptions>,
    pub drop_shadow: Option<DropShadowOptions>,
    /// Rotation angle in radians
    pub rotate: Option<f32>,
    /// Filter blur radius
    pub blur: Option<f32>,
    pub border: Option<BorderOptions>,
    pub shear: Option<ShearOptions>,
    pub font: Option<String>,
    pub text_align: Option<TextAlignOptions>,
    pub letter_spacing: Option<f32>,
    pub word_spacing: Option<f32>,
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Disable fill entirely
    pub fn no_color(mut self) -> Self {
        self.color = Some(ColorSpec::Disabled);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn background(mut self, background: BackgroundOptions) -> Self {
        self.background = Some(background);
        self
    }

    pub fn drop_shadow(mut self, drop_shadow: DropShadowOptions) -> Self {
        self.drop_shadow = Some(drop_shadow);
        self
    }

    pub fn rotate(mut self, angle: f32) -> Self {
        self.rotate = Some(angle);
        self
    }

    pub fn blur(mut self, radius: f32) -> Self {
        self.blur = Some(radius);
        self
    }

    pub fn border(mut self, border: BorderOptions) -> Self {
        self.border = Some(border);
        self
    }

    pub fn shear(mut self, shear: ShearOptions) -> Self {
        self.shear = Some(shear);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn text_align(mut self, text_align: TextAlignOptions) -> Self {
        self.text_align = Some(text_align);
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }

    pub fn word_spacing(mut self, spacing: f32) -> Self {
        self.word_spacing = Some(spacing);
        self
    }
}

/// Fully-resolved border
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedBorder {
    pub visible: bool,
    pub color: Color,
    pub weight: f32,
}

/// Fully-resolved drop shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedDropShadow {
    pub visible: bool,
    pub offset: Point,
    pub blur: f32,
    pub color: Color,
}

/// Fully-resolved background box
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBackground {
    pub visible: bool,
    pub color: ColorSpec,
    pub border: ResolvedBorder,
}

/// Fully-resolved shear
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedShear {
    pub enabled: bool,
    pub x: f32,
    pub y: f32,
}

/// Fully-resolved text alignment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedTextAlign {
    pub horiz: HorizAlign,
    pub vert: Option<VertAlign>,
}

/// Every option populated with the caller's value or its default.
///
/// Nothing downstream of [`Resolved::resolve`] consults
/// [`StyleOptions`] again.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub align: Align,
    pub size: ShapeSize,
    pub color: ColorSpec,
    pub background: ResolvedBackground,
    pub drop_shadow: ResolvedDropShadow,
    pub rotate: Option<f32>,
    pub blur: Option<f32>,
    pub border: ResolvedBorder,
    pub shear: ResolvedShear,
    pub font: String,
    pub text_align: ResolvedTextAlign,
    pub letter_spacing: Option<f32>,
    pub word_spacing: Option<f32>,
}

impl Resolved {
    /// Merge sparse options against the defaults.
    ///
    /// Pure function of its inputs: resolving the same input twice
    /// yields identical output, and no field is left unset.
    /// Sub-fields that cannot be used as given (a gradient handed to
    /// a border color, an unknown color keyword) fall back to their
    /// default rather than failing the resolution.
    pub fn resolve(size: Option<ShapeSize>, options: &StyleOptions) -> Self {
        Self {
            align: options.align.unwrap_or_default(),
            size: size.unwrap_or(ShapeSize::Scalar(16.0)),
            color: options.color.clone().unwrap_or_default(),
            background: resolve_background(options.background.as_ref()),
            drop_shadow: resolve_drop_shadow(options.drop_shadow.as_ref()),
            rotate: options.rotate,
            blur: options.blur,
            border: resolve_border(options.border.as_ref()),
            shear: ResolvedShear {
                enabled: options.shear.is_some(),
                x: options.shear.and_then(|s| s.x).unwrap_or(0.0),
                y: options.shear.and_then(|s| s.y).unwrap_or(0.0),
            },
            font: options.font.clone().unwrap_or_else(|| "serif".to_string()),
            text_align: options
                .text_align
                .map(|a| ResolvedTextAlign {
                    horiz: a.horiz,
                    vert: a.vert,
                })
                .unwrap_or(ResolvedTextAlign {
                    horiz: HorizAlign::Left,
                    vert: None,
                }),
            letter_spacing: options.letter_spacing,
            word_spacing: options.word_spacing,
        }
    }
}

fn resolve_border(spec: Option<&BorderOptions>) -> ResolvedBorder {
    ResolvedBorder {
        visible: spec.map(|b| b.visible).unwrap_or(false),
        color: spec
            .and_then(|b| b.color.as_ref())
            .and_then(ColorSpec::to_solid)
            .unwrap_or(Color::gray(0.0)),
        weight: spec.and_then(|b| b.weight).unwrap_or(2.0),
    }
}

fn resolve_drop_shadow(spec: Option<&DropShadowOptions>) -> ResolvedDropShadow {
    ResolvedDropShadow {
        visible: spec.map(|d| d.visible).unwrap_or(false),
        offset: spec.and_then(|d| d.offset).unwrap_or(Point::new(4.0, 4.0)),
        blur: spec.and_then(|d| d.blur).unwrap_or(4.0),
        color: spec
            .and_then(|d| d.color.as_ref())
            .and_then(ColorSpec::to_solid)
            .unwrap_or(Color::gray(1.0 / 255.0)),
    }
}

fn resolve_background(spec: Option<&BackgroundOptions>) -> ResolvedBackground {
    ResolvedBackground {
        visible: spec.map(|b| b.visible).unwrap_or(false),
        color: spec
            .and_then(|b| b.color.clone())
            .unwrap_or(ColorSpec::Gray(0.0)),
        border: resolve_border(spec.and_then(|b| b.border.as_ref())),
    }
}
