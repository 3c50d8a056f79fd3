//! Immediate-mode draw commands.
//!
//! Scenes never touch a real canvas: they append commands to a [`DrawList`]
//! through methods shaped like the Canvas2D API, and the web frontend replays
//! the list onto a `CanvasRenderingContext2d`. This keeps every scene a pure
//! function that can be inspected on the host.

use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Straight (non-premultiplied) RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);
    pub const INK: Color = Color::hex(0x1f2a44); // default label colour
    pub const ORANGE: Color = Color::hex(0xff9b45); // force / current accents
    pub const BLUE: Color = Color::hex(0x4c7be5);

    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    /// `rgba(r,g,b,a)`; alpha is clamped to \[0, 1\].
    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        let a = if a.is_finite() { a.clamp(0.0, 1.0) } else { 0.0 };
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }
}

pub type GradientStops = SmallVec<[(f32, Color); 2]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear {
        from: Vec2,
        to: Vec2,
        stops: GradientStops,
    },
    Radial {
        inner: Vec2,
        inner_radius: f32,
        outer: Vec2,
        outer_radius: f32,
        stops: GradientStops,
    },
}

impl Paint {
    pub fn linear(from: Vec2, to: Vec2, start: Color, end: Color) -> Self {
        Paint::Linear {
            from,
            to,
            stops: smallvec::smallvec![(0.0, start), (1.0, end)],
        }
    }

    /// Concentric radial gradient between two radii.
    pub fn radial(center: Vec2, r0: f32, r1: f32, start: Color, end: Color) -> Self {
        Paint::Radial {
            inner: center,
            inner_radius: r0.max(0.0),
            outer: center,
            outer_radius: r1.max(0.0),
            stops: smallvec::smallvec![(0.0, start), (1.0, end)],
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
    FillStyle(Paint),
    StrokeStyle(Paint),
    LineWidth(f32),
    LineDash(SmallVec<[f32; 2]>),
    LineCap(LineCap),
    GlobalAlpha(f32),
    FontPx(f32),
    TextAlign(TextAlign),
    BeginPath,
    ClosePath,
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo {
        ctrl: Vec2,
        to: Vec2,
    },
    BezierTo {
        c1: Vec2,
        c2: Vec2,
        to: Vec2,
    },
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        ccw: bool,
    },
    Ellipse {
        center: Vec2,
        radii: Vec2,
        rotation: f32,
        start: f32,
        end: f32,
    },
    Fill,
    Stroke,
    FillRect(Rect),
    StrokeRect(Rect),
    ClearRect(Rect),
    FillText {
        text: String,
        at: Vec2,
    },
}

/// Ordered list of commands for one frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[inline]
    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    pub fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Translate(Vec2::new(x, y)));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.push(DrawCommand::Rotate(radians));
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Scale(Vec2::new(x, y)));
    }

    pub fn fill_style(&mut self, paint: impl Into<Paint>) {
        self.push(DrawCommand::FillStyle(paint.into()));
    }

    pub fn stroke_style(&mut self, paint: impl Into<Paint>) {
        self.push(DrawCommand::StrokeStyle(paint.into()));
    }

    pub fn line_width(&mut self, w: f32) {
        self.push(DrawCommand::LineWidth(w));
    }

    pub fn line_dash(&mut self, pattern: &[f32]) {
        self.push(DrawCommand::LineDash(SmallVec::from_slice(pattern)));
    }

    pub fn line_cap(&mut self, cap: LineCap) {
        self.push(DrawCommand::LineCap(cap));
    }

    pub fn global_alpha(&mut self, a: f32) {
        self.push(DrawCommand::GlobalAlpha(a.clamp(0.0, 1.0)));
    }

    pub fn font_px(&mut self, px: f32) {
        self.push(DrawCommand::FontPx(px));
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.push(DrawCommand::TextAlign(align));
    }

    pub fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    pub fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo(Vec2::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo(Vec2::new(x, y)));
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.push(DrawCommand::QuadTo {
            ctrl: Vec2::new(cx, cy),
            to: Vec2::new(x, y),
        });
    }

    pub fn bezier_to(&mut self, c1: Vec2, c2: Vec2, to: Vec2) {
        self.push(DrawCommand::BezierTo { c1, c2, to });
    }

    pub fn arc(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32) {
        self.push(DrawCommand::Arc {
            center: Vec2::new(cx, cy),
            radius: r.max(0.0),
            start,
            end,
            ccw: false,
        });
    }

    pub fn arc_ccw(&mut self, cx: f32, cy: f32, r: f32, start: f32, end: f32) {
        self.push(DrawCommand::Arc {
            center: Vec2::new(cx, cy),
            radius: r.max(0.0),
            start,
            end,
            ccw: true,
        });
    }

    pub fn ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, start: f32, end: f32) {
        self.push(DrawCommand::Ellipse {
            center: Vec2::new(cx, cy),
            radii: Vec2::new(rx.max(0.0), ry.max(0.0)),
            rotation: 0.0,
            start,
            end,
        });
    }

    pub fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    pub fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::FillRect(rect(x, y, w, h)));
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::StrokeRect(rect(x, y, w, h)));
    }

    pub fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(DrawCommand::ClearRect(rect(x, y, w, h)));
    }

    pub fn fill_text(&mut self, text: impl Into<String>, x: f32, y: f32) {
        self.push(DrawCommand::FillText {
            text: text.into(),
            at: Vec2::new(x, y),
        });
    }

    // ---- conveniences used by nearly every scene ----

    /// New path holding a full circle.
    pub fn circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.begin_path();
        self.arc(cx, cy, r, 0.0, TAU);
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32) {
        self.circle(cx, cy, r);
        self.fill();
    }

    /// New path holding a full axis-aligned ellipse.
    pub fn full_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32) {
        self.begin_path();
        self.ellipse(cx, cy, rx, ry, 0.0, TAU);
    }

    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.stroke();
    }

    /// Open polyline through `points`, stroked.
    pub fn polyline(&mut self, points: &[Vec2]) {
        let mut it = points.iter();
        let Some(first) = it.next() else {
            return;
        };
        self.begin_path();
        self.move_to(first.x, first.y);
        for p in it {
            self.line_to(p.x, p.y);
        }
        self.stroke();
    }

    /// Closed polygon through `points`, filled.
    pub fn fill_polygon(&mut self, points: &[Vec2]) {
        let mut it = points.iter();
        let Some(first) = it.next() else {
            return;
        };
        self.begin_path();
        self.move_to(first.x, first.y);
        for p in it {
            self.line_to(p.x, p.y);
        }
        self.close_path();
        self.fill();
    }

    /// Every finite coordinate check in one place; used by tests and debug
    /// assertions in the frame loop.
    pub fn all_finite(&self) -> bool {
        self.commands.iter().all(command_is_finite)
    }
}

#[inline]
fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect {
        origin: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

fn paint_is_finite(p: &Paint) -> bool {
    match p {
        Paint::Solid(c) => c.a.is_finite(),
        Paint::Linear { from, to, stops } => {
            from.is_finite() && to.is_finite() && stops.iter().all(|(o, _)| o.is_finite())
        }
        Paint::Radial {
            inner,
            inner_radius,
            outer,
            outer_radius,
            stops,
        } => {
            inner.is_finite()
                && outer.is_finite()
                && inner_radius.is_finite()
                && outer_radius.is_finite()
                && stops.iter().all(|(o, _)| o.is_finite())
        }
    }
}

fn command_is_finite(cmd: &DrawCommand) -> bool {
    use DrawCommand::*;
    match cmd {
        Save | Restore | BeginPath | ClosePath | Fill | Stroke | LineCap(_) | TextAlign(_) => true,
        Translate(v) | Scale(v) | MoveTo(v) | LineTo(v) => v.is_finite(),
        Rotate(x) | LineWidth(x) | GlobalAlpha(x) | FontPx(x) => x.is_finite(),
        FillStyle(p) | StrokeStyle(p) => paint_is_finite(p),
        LineDash(d) => d.iter().all(|x| x.is_finite()),
        QuadTo { ctrl, to } => ctrl.is_finite() && to.is_finite(),
        BezierTo { c1, c2, to } => c1.is_finite() && c2.is_finite() && to.is_finite(),
        Arc {
            center,
            radius,
            start,
            end,
            ..
        } => center.is_finite() && radius.is_finite() && start.is_finite() && end.is_finite(),
        Ellipse {
            center,
            radii,
            rotation,
            start,
            end,
        } => {
            center.is_finite()
                && radii.is_finite()
                && rotation.is_finite()
                && start.is_finite()
                && end.is_finite()
        }
        FillRect(r) | StrokeRect(r) | ClearRect(r) => r.origin.is_finite() && r.size.is_finite(),
        FillText { at, .. } => at.is_finite(),
    }
}
