use super::{band, gradient_band};
use crate::core::constants::{to_rad, N_AIR, N_WATER};
use crate::core::draw::{Color, DrawList, LineCap};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::label;
use glam::Vec2;

// ----------------------------------------------------------- reflection

pub fn reflection_metric(p: &ParamSnapshot) -> f32 {
    p.get("angle")
}

pub fn reflection_details(p: &ParamSnapshot) -> String {
    format!("Angle of incidence = angle of reflection = {:.0}°", p.get("angle"))
}

/// Beam path through a row of vertical mirrors at `mirrors_x`, starting at
/// `source` and heading up-right at `angle_deg`. The beam flips horizontal
/// direction at every mirror it reaches inside `[y_min, y_max]`; the final
/// point is `target`.
pub fn mirror_maze_path(
    source: Vec2,
    angle_deg: f32,
    mirrors_x: &[f32],
    (y_min, y_max): (f32, f32),
    target: Vec2,
) -> Vec<Vec2> {
    let base = to_rad(angle_deg).clamp(to_rad(5.0), to_rad(75.0));
    let mut dir = Vec2::new(base.cos(), -base.sin());
    let mut current = source;
    let mut points = vec![source];
    for &mx in mirrors_x {
        let t = (mx - current.x) / dir.x;
        if t <= 0.0 || !t.is_finite() {
            continue;
        }
        let y = current.y + dir.y * t;
        if y < y_min || y > y_max {
            continue;
        }
        current = Vec2::new(mx, y);
        points.push(current);
        dir.x = -dir.x;
    }
    points.push(target);
    points
}

pub fn draw_reflection(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, _time: f32) {
    let angle = p.get("angle");
    d.save();
    gradient_band(d, w, 0.0, h, Color::hex(0x1a1d24), Color::hex(0x2c3141));
    d.fill_style(Color::rgba(255, 255, 255, 0.05));
    for i in 0..6 {
        d.fill_rect(i as f32 * 120.0 + 40.0, 60.0, 60.0, h - 120.0);
    }

    let mirrors = [w * 0.35, w * 0.55, w * 0.75];
    d.fill_style(Color::rgba(150, 200, 255, 0.25));
    for mx in mirrors {
        d.fill_rect(mx - 6.0, 80.0, 12.0, h - 160.0);
    }

    let source = Vec2::new(w * 0.15, h * 0.7);
    let target = Vec2::new(w * 0.85, h * 0.35);
    let path = mirror_maze_path(source, angle, &mirrors, (120.0, h - 120.0), target);
    d.stroke_style(Color::hex(0x00ff9c));
    d.line_width(5.0);
    d.polyline(&path);

    d.fill_style(Color::hex(0xff4d4d));
    d.fill_circle(source.x, source.y, 14.0);
    d.fill_style(Color::WHITE);
    d.fill_rect(target.x - 12.0, target.y - 12.0, 24.0, 24.0);

    d.fill_style(Color::hex(0x1f8fff));
    d.font_px(14.0);
    d.fill_text(format!("θi = θr = {:.0}°", angle), 30.0, 40.0);
    d.fill_text(
        "Mirror maze: at every mirror the angle of reflection equals the angle of incidence",
        30.0,
        64.0,
    );
    d.restore();
}

// ----------------------------------------------------------- refraction

/// Refraction angle (degrees) for a ray entering water from air. The sine
/// is kept inside ±0.999 so the result is always finite.
pub fn refraction_angle(incidence_deg: f32) -> f32 {
    let s = (N_AIR / N_WATER * to_rad(incidence_deg).sin()).clamp(-0.999, 0.999);
    s.asin().to_degrees()
}

pub fn refraction_metric(p: &ParamSnapshot) -> f32 {
    refraction_angle(p.get("angle"))
}

pub fn refraction_details(p: &ParamSnapshot) -> String {
    format!("Refraction angle θ₂ ≈ {:.1}°", refraction_metric(p))
}

/// A chopstick in a glass of water appears bent.
pub fn draw_refraction(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, _time: f32) {
    let incidence = p.get("angle");
    d.save();
    band(d, w, 0.0, h, Color::hex(0xf7fbff));
    let table_y = h * 0.75;
    band(d, w, table_y, h, Color::hex(0xd9d9e3));

    let cup_x = w * 0.45;
    let cup_y = table_y - 20.0;
    d.fill_style(Color::rgba(200, 220, 255, 0.5));
    d.full_ellipse(cup_x, cup_y, 110.0, 30.0);
    d.fill();
    d.fill_rect(cup_x - 110.0, cup_y - 160.0, 220.0, 140.0);
    d.stroke_style(Color::rgba(150, 190, 255, 0.8));
    d.line_width(4.0);
    d.stroke_rect(cup_x - 110.0, cup_y - 160.0, 220.0, 140.0);

    d.fill_style(Color::rgba(120, 190, 255, 0.25));
    d.fill_rect(cup_x - 108.0, cup_y - 160.0, 216.0, 100.0);
    d.fill_style(Color::WHITE);
    d.global_alpha(0.25);
    d.fill_rect(cup_x - 70.0, cup_y - 152.0, 30.0, 152.0);
    d.global_alpha(1.0);

    let stick_mid = Vec2::new(cup_x, cup_y - 60.0);
    d.stroke_style(Color::hex(0xc47a40));
    d.line_width(8.0);
    d.line_cap(LineCap::Round);
    d.polyline(&[
        Vec2::new(w * 0.2, table_y - 60.0),
        stick_mid,
        Vec2::new(cup_x + 40.0, cup_y - 150.0),
    ]);
    d.line_cap(LineCap::Butt);

    let origin = stick_mid + Vec2::new(10.0, -10.0);
    let theta1 = to_rad(incidence);
    let theta2 = to_rad(refraction_angle(incidence));
    d.stroke_style(Color::hex(0xffb347));
    d.line_width(5.0);
    d.line(
        origin.x,
        origin.y,
        origin.x + theta1.cos() * 160.0,
        origin.y - theta1.sin() * 160.0,
    );
    d.stroke_style(Color::hex(0x66d9ff));
    d.line(
        origin.x,
        origin.y,
        origin.x + theta2.cos() * 220.0,
        origin.y - theta2.sin() * 220.0,
    );

    label(d, format!("θ₁ (air) = {:.0}°", incidence), w * 0.1, 60.0);
    label(
        d,
        format!("θ₂ (water) = {:.1}°", theta2.to_degrees()),
        w * 0.1,
        84.0,
    );
    label(
        d,
        "The chopstick only looks broken: light bends at the water surface",
        w * 0.1,
        110.0,
    );
    d.restore();
}
