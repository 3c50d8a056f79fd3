//! Per-principle scenes.
//!
//! Every scene is a set of free functions: closed-form physics helpers, a
//! live detail line, the practice metric and a `draw_*` renderer. Renderers
//! read nothing but their arguments, so the same inputs always produce the
//! same [`DrawList`](super::draw::DrawList).

pub mod circuits;
pub mod electromagnetism;
pub mod electrostatics;
pub mod fluids;
pub mod heat;
pub mod mechanics;
pub mod optics;
pub mod waves;

use super::draw::{Color, DrawList, Paint};
use glam::Vec2;

/// Signature shared by every renderer: surface width, height, parameters,
/// elapsed seconds.
pub type RenderFn = fn(&mut DrawList, f32, f32, &super::params::ParamSnapshot, f32);

// Palette shared across scenes
pub(crate) const SKY_TOP: Color = Color::hex(0xb1d4ff);
pub(crate) const SKY_BOTTOM: Color = Color::hex(0xe8f1ff);
pub(crate) const DESK: Color = Color::hex(0xd7e0f7);
pub(crate) const WIRE: Color = Color::hex(0x4c7be5);
pub(crate) const CHARGE_DOT: Color = Color::hex(0xff9b45);
pub(crate) const SKIN: Color = Color::hex(0xffcc8c);
pub(crate) const BATTERY: Color = Color::hex(0x444444);

/// Fill `[0, w] x [y0, y1]` with a flat colour.
pub(crate) fn band(d: &mut DrawList, w: f32, y0: f32, y1: f32, color: Color) {
    d.fill_style(color);
    d.fill_rect(0.0, y0, w, y1 - y0);
}

/// Vertical gradient band.
pub(crate) fn gradient_band(d: &mut DrawList, w: f32, y0: f32, y1: f32, top: Color, bottom: Color) {
    d.fill_style(Paint::linear(
        Vec2::new(0.0, y0),
        Vec2::new(0.0, y1),
        top,
        bottom,
    ));
    d.fill_rect(0.0, y0, w, y1 - y0);
}

/// Soft radial glow; `strength` is the centre alpha.
pub(crate) fn glow(d: &mut DrawList, center: Vec2, r0: f32, r1: f32, rgb: u32, strength: f32) {
    let c = Color::hex(rgb);
    d.fill_style(Paint::radial(
        center,
        r0,
        r1,
        c.with_alpha(strength),
        c.with_alpha(0.0),
    ));
    d.fill_circle(center.x, center.y, r1);
}

/// Evenly spaced dots along a horizontal wire, shifted by `phase` wire
/// lengths.
pub(crate) fn current_dots(
    d: &mut DrawList,
    x0: f32,
    length: f32,
    y: f32,
    count: usize,
    phase: f32,
) {
    d.fill_style(CHARGE_DOT);
    for i in 0..count {
        let t = (i as f32 / count as f32 + phase).rem_euclid(1.0);
        d.fill_circle(x0 + t * length, y, 5.0);
    }
}

/// Four-bladed rotor centred at `(cx, cy)`.
pub(crate) fn rotor(d: &mut DrawList, cx: f32, cy: f32, angle: f32, blade: (f32, f32), color: Color) {
    d.save();
    d.translate(cx, cy);
    d.rotate(angle);
    d.fill_style(color);
    for _ in 0..4 {
        d.rotate(std::f32::consts::FRAC_PI_2);
        d.fill_rect(0.0, -blade.1 / 2.0, blade.0, blade.1);
    }
    d.restore();
}
