use super::band;
use crate::core::draw::{Color, DrawList, TextAlign};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::{arrow, fill_rounded_rect, label};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

// ------------------------------------------------------------- magnetic

/// Lorentz force (N) on a 1 C charge moving perpendicular to the field.
pub fn lorentz_force(velocity: f32, field: f32) -> f32 {
    velocity * field
}

pub fn magnetic_metric(p: &ParamSnapshot) -> f32 {
    lorentz_force(p.get("velocity"), p.get("magneticField"))
}

pub fn magnetic_details(p: &ParamSnapshot) -> String {
    format!("Lorentz force F ≈ {:.2} N (q = 1 C, θ = 90°)", magnetic_metric(p))
}

const ORBIT_RADIUS: f32 = 110.0;

/// A charge circling between two magnet poles.
pub fn draw_magnetic(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let velocity = p.get("velocity");
    let field = p.get("magneticField");
    let center = Vec2::new(w * 0.5, h * 0.5);

    d.save();
    band(d, w, 0.0, h, Color::hex(0xf2f4fb));

    d.fill_style(Color::hex(0xd94848));
    fill_rounded_rect(d, center.x - 60.0, 20.0, 120.0, 50.0, 8.0);
    d.fill_style(Color::BLUE);
    fill_rounded_rect(d, center.x - 60.0, h - 70.0, 120.0, 50.0, 8.0);
    d.fill_style(Color::WHITE);
    d.font_px(24.0);
    d.text_align(TextAlign::Center);
    d.fill_text("N", center.x, 54.0);
    d.fill_text("S", center.x, h - 36.0);
    d.text_align(TextAlign::Start);

    d.stroke_style(Color::rgba(76, 123, 229, 0.25));
    d.line_width(2.0);
    d.line_dash(&[8.0, 8.0]);
    for i in -3..=3 {
        let x = center.x + i as f32 * 40.0;
        d.line(x, 70.0, x, h - 70.0);
    }
    d.line_dash(&[]);

    d.stroke_style(Color::rgba(255, 155, 69, 0.5));
    d.line_width(2.0);
    d.circle(center.x, center.y, ORBIT_RADIUS);
    d.stroke();

    let angle = (time * velocity * field * 0.2) % TAU;
    let particle = center + ORBIT_RADIUS * Vec2::from_angle(angle);
    d.fill_style(Color::ORANGE);
    d.fill_circle(particle.x, particle.y, 12.0);
    d.fill_style(Color::WHITE);
    d.font_px(14.0);
    d.text_align(TextAlign::Center);
    d.fill_text("+", particle.x, particle.y + 5.0);
    d.text_align(TextAlign::Start);

    let tangent = Vec2::from_angle(angle + PI / 2.0);
    arrow(d, particle, particle + tangent * 50.0, Color::INK, 3.0);
    arrow(
        d,
        particle,
        particle + (center - particle).normalize_or_zero() * 40.0,
        Color::hex(0xd94848),
        3.0,
    );

    label(d, format!("v = {:.0} m/s", velocity), 30.0, 40.0);
    label(d, format!("B = {:.1} T", field), 30.0, 64.0);
    label(d, format!("F = qvB ≈ {:.2} N", lorentz_force(velocity, field)), 30.0, 88.0);
    d.restore();
}

// ------------------------------------------------------------ induction

/// Flux change per unit of magnet speed, per turn.
const FLUX_RATE: f32 = 0.04;

pub fn induced_emf(turns: f32, speed: f32) -> f32 {
    turns * speed * FLUX_RATE
}

pub fn induction_metric(p: &ParamSnapshot) -> f32 {
    induced_emf(p.get("turns"), p.get("speed"))
}

pub fn induction_details(p: &ParamSnapshot) -> String {
    format!("Induced EMF ≈ {:.2} V", induction_metric(p))
}

pub fn format_volts(v: f32) -> String {
    format!("{:.2}V", v)
}

/// Needle deflection in \[-0.9, 0.9\] rad for the magnet's current motion.
pub fn galvanometer_deflection(motion: f32, turns: f32) -> f32 {
    (motion * turns * 0.2).clamp(-0.9, 0.9)
}

/// A bar magnet pushed in and out of a coil drives a galvanometer.
pub fn draw_induction(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let speed = p.get("speed");
    let turns = p.get("turns");
    let mid_y = h * 0.5;
    let coil_x = w * 0.55;

    d.save();
    band(d, w, 0.0, h, Color::hex(0xf5f6fb));

    let loops = (turns / 10.0).round().clamp(2.0, 15.0) as usize;
    let spacing = 160.0 / loops as f32;
    d.stroke_style(Color::hex(0xc47a40));
    d.line_width(4.0);
    for i in 0..loops {
        let x = coil_x - 80.0 + i as f32 * spacing;
        d.begin_path();
        d.ellipse(x, mid_y, 12.0, 60.0, 0.0, TAU);
        d.stroke();
    }

    let position = (time * speed).sin();
    let motion = (time * speed).cos() * speed;
    let magnet_x = coil_x - 200.0 + position * 90.0;
    d.fill_style(Color::hex(0xd94848));
    d.fill_rect(magnet_x - 60.0, mid_y - 20.0, 60.0, 40.0);
    d.fill_style(Color::BLUE);
    d.fill_rect(magnet_x, mid_y - 20.0, 60.0, 40.0);
    d.fill_style(Color::WHITE);
    d.font_px(18.0);
    d.text_align(TextAlign::Center);
    d.fill_text("S", magnet_x - 30.0, mid_y + 6.0);
    d.fill_text("N", magnet_x + 30.0, mid_y + 6.0);
    d.text_align(TextAlign::Start);

    let gauge = Vec2::new(w * 0.85, mid_y + 40.0);
    d.stroke_style(Color::INK);
    d.line_width(2.0);
    d.polyline(&[
        Vec2::new(coil_x + 80.0, mid_y + 60.0),
        Vec2::new(coil_x + 80.0, gauge.y + 60.0),
        Vec2::new(gauge.x, gauge.y + 60.0),
        Vec2::new(gauge.x, gauge.y + 40.0),
    ]);
    d.fill_style(Color::WHITE);
    d.begin_path();
    d.arc(gauge.x, gauge.y + 40.0, 60.0, PI, TAU);
    d.close_path();
    d.fill();
    d.stroke();

    let deflection = galvanometer_deflection(motion, turns);
    let needle = Vec2::new(gauge.x, gauge.y + 40.0)
        + 50.0 * Vec2::from_angle(-PI / 2.0 + deflection);
    d.stroke_style(Color::hex(0xd94848));
    d.line_width(3.0);
    d.line(gauge.x, gauge.y + 40.0, needle.x, needle.y);

    label(d, format!("N = {:.0} turns", turns), 30.0, 40.0);
    label(d, format!("Magnet speed {:.1} m/s", speed), 30.0, 64.0);
    label(
        d,
        format!("EMF ≈ {:.2} V", induced_emf(turns, speed)),
        30.0,
        88.0,
    );
    label(d, "Only a changing flux drives current", 30.0, 112.0);
    d.restore();
}
