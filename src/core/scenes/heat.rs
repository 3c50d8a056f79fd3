use super::{band, glow};
use crate::core::draw::{Color, DrawList};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::{fill_rounded_rect, label};
use glam::Vec2;

// -------------------------------------------------------------- thermal

/// Length of the rail segment in the scene (m).
const RAIL_LENGTH_M: f32 = 1.0;

/// Expansion (mm) of a 1 m rail with coefficient `alpha` ×10⁻⁶/°C heated
/// by `delta_t` °C.
pub fn thermal_expansion_mm(alpha: f32, delta_t: f32) -> f32 {
    alpha * 1e-6 * RAIL_LENGTH_M * delta_t * 1000.0
}

pub fn thermal_metric(p: &ParamSnapshot) -> f32 {
    thermal_expansion_mm(p.get("alpha"), p.get("deltaT"))
}

pub fn thermal_details(p: &ParamSnapshot) -> String {
    format!("Rail expansion ΔL ≈ {:.2} mm", thermal_metric(p))
}

/// Visible gap (px) between rail segments for an expansion in metres.
pub fn rail_gap(expansion_m: f32) -> f32 {
    (18.0 - expansion_m * 4000.0).clamp(2.0, 18.0)
}

/// Rail joints closing up in the summer heat.
pub fn draw_thermal(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let delta_t = p.get("deltaT");
    let expansion_mm = thermal_metric(p);
    let gap = rail_gap(expansion_mm / 1000.0);
    let rail_y = h * 0.6;

    d.save();
    band(d, w, 0.0, rail_y, Color::hex(0xfff4e0));
    band(d, w, rail_y, h, Color::hex(0xcdb89a));
    glow(
        d,
        Vec2::new(w * 0.85, h * 0.15),
        10.0,
        90.0,
        0xffc15e,
        (delta_t / 80.0).clamp(0.2, 0.9),
    );

    // sleepers
    d.fill_style(Color::hex(0x7a5a3a));
    let mut x = 20.0;
    while x < w {
        d.fill_rect(x, rail_y + 10.0, 24.0, 40.0);
        x += 60.0;
    }

    let segment = (w - 3.0 * gap) / 4.0;
    d.fill_style(Color::hex(0x9aa3b5));
    for i in 0..4 {
        let sx = i as f32 * (segment + gap);
        d.fill_rect(sx, rail_y, segment, 14.0);
    }
    d.stroke_style(Color::hex(0xff6b3d));
    d.line_width(2.0);
    for i in 1..4 {
        let gx = i as f32 * (segment + gap) - gap / 2.0;
        d.line(gx, rail_y - 14.0, gx, rail_y - 4.0);
    }

    // heat shimmer
    d.stroke_style(Color::rgba(255, 150, 80, 0.35));
    d.line_width(2.0);
    for i in 0..8 {
        let fi = i as f32;
        let bx = fi * w / 8.0 + 30.0;
        let sway = (time * 3.0 + fi).sin() * 6.0;
        d.begin_path();
        d.move_to(bx, rail_y - 20.0);
        d.quad_to(bx + sway, rail_y - 45.0, bx, rail_y - 70.0);
        d.stroke();
    }

    // thermometer
    let tx = w * 0.08;
    let ty = h * 0.12;
    d.fill_style(Color::WHITE);
    fill_rounded_rect(d, tx - 10.0, ty, 20.0, 150.0, 10.0);
    let level = (delta_t / 80.0).clamp(0.0, 1.0) * 130.0;
    d.fill_style(Color::hex(0xe0533d));
    d.fill_rect(tx - 5.0, ty + 140.0 - level, 10.0, level);
    d.fill_circle(tx, ty + 150.0, 14.0);

    label(d, format!("ΔT = {:.0} °C", delta_t), tx + 24.0, ty + 20.0);
    label(d, format!("ΔL ≈ {:.2} mm", expansion_mm), tx + 24.0, ty + 44.0);
    label(
        d,
        "Joint gaps leave room for the rail to expand",
        tx + 24.0,
        ty + 68.0,
    );
    d.restore();
}

// ----------------------------------------------------------- energyFlow

pub fn energy_flow_metric(p: &ParamSnapshot) -> f32 {
    p.get("tempDiff")
}

pub fn energy_flow_details(p: &ParamSnapshot) -> String {
    format!(
        "Wave height shows heat-flow intensity, ΔT = {:.0}°C",
        p.get("tempDiff")
    )
}

/// Radiator warming a room by convection.
pub fn draw_energy_flow(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let diff = p.get("tempDiff");
    let floor_y = h * 0.8;

    d.save();
    band(d, w, 0.0, floor_y, Color::hex(0xf5efe6));
    band(d, w, floor_y, h, Color::hex(0xb58b5c));

    let rx = w * 0.15;
    let ry = floor_y - 140.0;
    d.fill_style(Color::hex(0xe6e9f0));
    d.fill_rect(rx, ry, 140.0, 120.0);
    d.fill_style(Color::hex(0xc2c8d6));
    for i in 0..7 {
        d.fill_rect(rx + 8.0 + i as f32 * 19.0, ry + 6.0, 10.0, 108.0);
    }
    glow(
        d,
        Vec2::new(rx + 70.0, ry + 60.0),
        20.0,
        140.0,
        0xff8a50,
        (diff / 30.0).clamp(0.1, 0.7),
    );

    // rising warm air
    let amplitude = diff * 4.0;
    d.stroke_style(Color::rgba(255, 120, 60, 0.6));
    d.line_width(3.0);
    for column in 0..3 {
        let base_x = rx + 30.0 + column as f32 * 40.0;
        let points: Vec<Vec2> = (0..=20)
            .map(|i| {
                let y = ry - i as f32 * 12.0;
                let x = base_x + (time * 2.0 + i as f32 * 0.5 + column as f32).sin() * amplitude * 0.2;
                Vec2::new(x, y)
            })
            .collect();
        d.polyline(&points);
    }

    // cool air returning along the floor
    d.stroke_style(Color::rgba(80, 140, 255, 0.5));
    let drift = (time * 40.0) % 80.0;
    for i in 0..5 {
        let x = w * 0.9 - i as f32 * 80.0 - drift;
        d.line(x, floor_y - 12.0, x - 40.0, floor_y - 12.0);
    }

    label(d, format!("ΔT = {:.0} °C", diff), 30.0, 40.0);
    label(d, "Warm air rises, cool air sinks: convection", 30.0, 64.0);
    d.restore();
}
