use super::draw::{Color, DrawList};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

pub const ARROW_HEAD_LEN: f32 = 12.0;
pub const ARROW_HEAD_ANGLE: f32 = PI / 6.0;

/// Starts a new path holding a rounded rectangle. The corner radius is
/// limited to half the shorter side.
pub fn rounded_rect_path(d: &mut DrawList, x: f32, y: f32, w: f32, h: f32, r: f32) {
    let w = w.max(0.0);
    let h = h.max(0.0);
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    d.begin_path();
    d.move_to(x + r, y);
    d.line_to(x + w - r, y);
    d.arc(x + w - r, y + r, r, -FRAC_PI_2, 0.0);
    d.line_to(x + w, y + h - r);
    d.arc(x + w - r, y + h - r, r, 0.0, FRAC_PI_2);
    d.line_to(x + r, y + h);
    d.arc(x + r, y + h - r, r, FRAC_PI_2, PI);
    d.line_to(x, y + r);
    d.arc(x + r, y + r, r, PI, PI + FRAC_PI_2);
    d.close_path();
}

pub fn fill_rounded_rect(d: &mut DrawList, x: f32, y: f32, w: f32, h: f32, r: f32) {
    rounded_rect_path(d, x, y, w, h, r);
    d.fill();
}

/// Shaft from `from` to `to` plus a filled head at `to`.
pub fn arrow(d: &mut DrawList, from: Vec2, to: Vec2, color: Color, width: f32) {
    let delta = to - from;
    // zero-length arrows still get a head pointing right
    let angle = if delta.length_squared() > 0.0 {
        delta.y.atan2(delta.x)
    } else {
        0.0
    };
    d.save();
    d.stroke_style(color);
    d.fill_style(color);
    d.line_width(width);
    d.line(from.x, from.y, to.x, to.y);
    let left = to - ARROW_HEAD_LEN * Vec2::from_angle(angle - ARROW_HEAD_ANGLE);
    let right = to - ARROW_HEAD_LEN * Vec2::from_angle(angle + ARROW_HEAD_ANGLE);
    d.fill_polygon(&[to, left, right]);
    d.restore();
}

/// Labelled arrow; the label sits just past the head.
pub fn labelled_arrow(d: &mut DrawList, from: Vec2, to: Vec2, color: Color, label: &str) {
    arrow(d, from, to, color, 3.0);
    d.fill_style(color);
    d.font_px(13.0);
    d.fill_text(label, to.x + 6.0, to.y - 6.0);
}

/// Plain text at 14px in the default label colour.
pub fn label(d: &mut DrawList, text: impl Into<String>, x: f32, y: f32) {
    d.fill_style(Color::INK);
    d.font_px(14.0);
    d.fill_text(text, x, y);
}
