use super::band;
use crate::core::constants::{floor_denominator, K_ELECTRO};
use crate::core::draw::{Color, DrawList, TextAlign};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::{arrow, label};
use glam::Vec2;

const MICRO: f32 = 1e-6;

/// Magnitude of the force (N) between charges `q1`, `q2` (μC) at
/// `distance` metres.
pub fn coulomb_force(q1: f32, q2: f32, distance: f32) -> f32 {
    let r = floor_denominator(distance);
    K_ELECTRO * (q1 * MICRO * q2 * MICRO).abs() / (r * r)
}

/// Like charges repel; zero charge counts as repelling.
pub fn repels(q1: f32, q2: f32) -> bool {
    q1 * q2 >= 0.0
}

pub fn coulomb_metric(p: &ParamSnapshot) -> f32 {
    coulomb_force(p.get("q1"), p.get("q2"), p.get("distance"))
}

pub fn coulomb_details(p: &ParamSnapshot) -> String {
    let kind = if repels(p.get("q1"), p.get("q2")) {
        "repel"
    } else {
        "attract"
    };
    format!("Coulomb force ≈ {:.3} N ({})", coulomb_metric(p), kind)
}

pub fn format_newtons_2(v: f32) -> String {
    format!("{:.2}N", v)
}

fn charge_colors(q: f32) -> (Color, Color) {
    if q >= 0.0 {
        (Color::hex(0xffb3b3), Color::hex(0xd94848))
    } else {
        (Color::hex(0xb3d1ff), Color::hex(0x3768d9))
    }
}

fn draw_charge(d: &mut DrawList, center: Vec2, q: f32) {
    let (fill, rim) = charge_colors(q);
    d.fill_style(fill);
    d.stroke_style(rim);
    d.line_width(4.0);
    d.full_ellipse(center.x, center.y, 46.0, 46.0);
    d.fill();
    d.stroke();
    d.fill_style(rim);
    d.font_px(34.0);
    d.text_align(TextAlign::Center);
    d.fill_text(if q >= 0.0 { "+" } else { "−" }, center.x, center.y + 12.0);
    d.font_px(13.0);
    d.fill_text(format!("{:.1} μC", q), center.x, center.y + 70.0);
    d.text_align(TextAlign::Start);
}

/// Two charged spheres with field lines and the force on each.
pub fn draw_coulomb(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let q1 = p.get("q1");
    let q2 = p.get("q2");
    let distance = p.get("distance");
    let force = coulomb_metric(p);
    let repel = repels(q1, q2);

    d.save();
    band(d, w, 0.0, h, Color::hex(0xf4f6ff));

    let mid_y = h * 0.5;
    let gap = (distance * 260.0).clamp(120.0, w * 0.7);
    let left = Vec2::new(w * 0.5 - gap / 2.0, mid_y);
    let right = Vec2::new(w * 0.5 + gap / 2.0, mid_y);

    d.stroke_style(Color::rgba(90, 110, 160, 0.35));
    d.line_width(2.0);
    let bulge = if repel { -1.0 } else { 1.0 };
    for i in 0..5 {
        let spread = (i as f32 - 2.0) * 30.0;
        let wobble = (time * 2.0 + i as f32).sin() * 4.0;
        d.begin_path();
        d.move_to(left.x + 46.0, left.y + spread * 0.3);
        d.bezier_to(
            Vec2::new(left.x + gap * 0.3, mid_y + spread * (1.0 + bulge) + wobble),
            Vec2::new(right.x - gap * 0.3, mid_y + spread * (1.0 + bulge) - wobble),
            Vec2::new(right.x - 46.0, right.y + spread * 0.3),
        );
        d.stroke();
    }

    draw_charge(d, left, q1);
    draw_charge(d, right, q2);

    let len = (force * 80.0).clamp(25.0, 120.0);
    // repulsion pushes outward, attraction pulls inward
    let dir = if repel { -1.0 } else { 1.0 };
    arrow(
        d,
        Vec2::new(left.x, mid_y - 70.0),
        Vec2::new(left.x + dir * len, mid_y - 70.0),
        Color::ORANGE,
        4.0,
    );
    arrow(
        d,
        Vec2::new(right.x, mid_y - 70.0),
        Vec2::new(right.x - dir * len, mid_y - 70.0),
        Color::ORANGE,
        4.0,
    );

    label(d, format!("r = {:.1} m", distance), w * 0.5 - 30.0, mid_y + 110.0);
    label(d, format!("F ≈ {:.3} N", force), 30.0, 40.0);
    let note = if repel {
        "Like charges repel"
    } else {
        "Opposite charges attract"
    };
    label(d, note, 30.0, 64.0);
    d.restore();
}
