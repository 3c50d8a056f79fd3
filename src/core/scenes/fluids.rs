use super::{band, WIRE};
use crate::core::constants::G;
use crate::core::draw::{Color, DrawList};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::{arrow, fill_rounded_rect, label};
use glam::Vec2;

// ------------------------------------------------------------- buoyancy

/// Density of water (kg/m³).
const WATER_DENSITY: f32 = 1000.0;

/// Buoyant force and weight (N) of a body of relative density `density`
/// (g/cm³) displacing `volume_l` litres of water.
pub fn buoyancy_forces(density: f32, volume_l: f32) -> (f32, f32) {
    let volume_m3 = volume_l / 1000.0;
    let buoy = WATER_DENSITY * G * volume_m3;
    let weight = density * WATER_DENSITY * G * volume_m3;
    (buoy, weight)
}

/// Buoyancy minus weight; zero at neutral buoyancy.
pub fn buoyancy_metric(p: &ParamSnapshot) -> f32 {
    let (buoy, weight) = buoyancy_forces(p.get("density"), p.get("volume"));
    buoy - weight
}

pub fn buoyancy_details(p: &ParamSnapshot) -> String {
    let (buoy, weight) = buoyancy_forces(p.get("density"), p.get("volume"));
    let verdict = if buoy >= weight { "rises" } else { "sinks" };
    format!(
        "Buoyancy ≈ {:.1}N, weight ≈ {:.1}N → {}",
        buoy, weight, verdict
    )
}

pub fn format_newtons_1(v: f32) -> String {
    format!("{:.1}N", v)
}

pub fn draw_buoyancy(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let water_top = h * 0.32;
    let density = p.get("density");
    let volume = p.get("volume");
    d.save();
    band(d, w, 0.0, water_top, Color::hex(0xcfe8ff));
    band(d, w, water_top, h, Color::hex(0x86c4ff));
    d.stroke_style(Color::hex(0xbfe2ff));
    for i in 0..40 {
        let fi = i as f32;
        let wave_y = water_top + (time * 2.0 + fi).sin() * (4.0 + density);
        d.full_ellipse(fi / 40.0 * w, wave_y, 30.0, 10.0);
        d.stroke();
    }

    let (buoy, weight) = buoyancy_forces(density, volume);
    let ratio = if buoy > 0.0 {
        (weight / buoy).clamp(0.2, 1.5)
    } else {
        1.5
    };
    let bob = (time * 1.4).sin() * 6.0;
    let boat_w = 240.0;
    let boat_h = 70.0;
    let boat_x = w * 0.5 - boat_w / 2.0;
    let boat_y = water_top + 45.0 * ratio + bob;

    d.fill_style(Color::hex(0xb16c36));
    d.begin_path();
    d.move_to(boat_x, boat_y);
    d.line_to(boat_x + boat_w, boat_y);
    d.quad_to(
        boat_x + boat_w - 40.0,
        boat_y + boat_h,
        boat_x + boat_w / 2.0,
        boat_y + boat_h + 10.0,
    );
    d.quad_to(boat_x + 40.0, boat_y + boat_h, boat_x, boat_y);
    d.fill();
    d.fill_style(Color::hex(0xf8d8b0));
    d.fill_rect(boat_x + 40.0, boat_y - 55.0, 60.0, 55.0);
    d.fill_rect(boat_x + boat_w - 110.0, boat_y - 45.0, 70.0, 45.0);
    d.fill_style(WIRE);
    fill_rounded_rect(d, boat_x + boat_w / 2.0 - 22.0, boat_y - 75.0, 44.0, 65.0, 16.0);
    d.fill_style(Color::hex(0xfbd3a5));
    d.fill_circle(boat_x + boat_w / 2.0, boat_y - 85.0, 22.0);

    let cx = boat_x + boat_w / 2.0;
    let up_tip = boat_y + 12.0 - buoy * 0.012;
    let down_tip = boat_y - 80.0 + weight * 0.012;
    arrow(d, Vec2::new(cx, boat_y + 12.0), Vec2::new(cx, up_tip), Color::ORANGE, 5.0);
    arrow(
        d,
        Vec2::new(cx, boat_y - 80.0),
        Vec2::new(cx, down_tip),
        Color::hex(0x1f3f7a),
        5.0,
    );

    d.fill_style(Color::WHITE);
    d.font_px(15.0);
    d.fill_text("Buoyancy", cx + 14.0, up_tip - 6.0);
    d.fill_text("Weight", cx + 14.0, down_tip + 16.0);
    label(d, format!("ρ = {:.2} g/cm³", density), boat_x + 12.0, boat_y - 95.0);
    label(d, format!("Displaced = {:.1} L", volume), boat_x + 12.0, boat_y - 72.0);
    let verdict = if weight > buoy {
        "Hull sinking → overloaded"
    } else {
        "Buoyancy ≥ weight → floats steadily"
    };
    label(d, verdict, boat_x + 12.0, boat_y - 50.0);

    d.stroke_style(Color::rgba(255, 255, 255, 0.85));
    d.line_width(3.0);
    d.line(boat_x + 60.0, boat_y + 10.0, boat_x + boat_w - 60.0, boat_y + 10.0);
    d.restore();
}

// ------------------------------------------------------------- pressure

/// Hydrostatic pressure (Pa) at `depth` metres in a fluid of relative
/// density `density` (g/cm³).
pub fn hydrostatic_pressure(density: f32, depth: f32) -> f32 {
    density * WATER_DENSITY * G * depth
}

pub fn pressure_metric(p: &ParamSnapshot) -> f32 {
    hydrostatic_pressure(p.get("density"), p.get("depth"))
}

pub fn pressure_details(p: &ParamSnapshot) -> String {
    format!("Pressure at the bottom ≈ {:.1} kPa", pressure_metric(p) / 1000.0)
}

pub fn format_kilopascal(v: f32) -> String {
    format!("{:.1} kPa", v / 1000.0)
}

// piston areas of the hydraulic jack (m²)
const SMALL_PISTON_AREA: f32 = 0.02;
const LARGE_PISTON_AREA: f32 = 0.12;

/// Hydraulic jack: the same pressure on a larger piston lifts a car.
pub fn draw_pressure(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let fluid_top = h * 0.2;
    d.save();
    band(d, w, 0.0, h, Color::hex(0xe9f4ff));
    d.fill_style(Color::hex(0xb2d9ff));
    d.fill_rect(w * 0.1, fluid_top, w * 0.8, h * 0.6);

    let pressure = pressure_metric(p);
    let output_force = pressure * LARGE_PISTON_AREA;
    let input_force = pressure * SMALL_PISTON_AREA;
    let lift = (output_force / 4500.0).clamp(0.0, 1.4) * 90.0;

    let small_x = w * 0.25;
    let large_x = w * 0.7;
    let base_y = fluid_top + h * 0.5;

    d.fill_style(Color::hex(0xf6f7fb));
    d.fill_rect(small_x - 20.0, fluid_top - 30.0, 40.0, fluid_top - 10.0);
    d.fill_rect(large_x - 50.0, fluid_top - 30.0, 100.0, fluid_top - 10.0);

    d.fill_style(Color::hex(0x4a6fd8));
    d.fill_rect(small_x - 18.0, base_y - 40.0, 36.0, 40.0);
    d.fill_rect(large_x - 60.0, base_y - lift - 40.0, 120.0, 40.0);

    // operator on the small piston
    d.fill_style(Color::hex(0xf1d5b9));
    d.fill_circle(small_x, base_y - 60.0 + (time * 1.5).sin() * 5.0, 20.0);
    d.fill_style(Color::hex(0x5a81e5));
    d.fill_rect(small_x - 18.0, base_y - 50.0, 36.0, 50.0);

    // car on the large piston
    d.fill_style(Color::hex(0xd6dceb));
    d.fill_rect(large_x - 90.0, base_y - lift - 80.0, 180.0, 40.0);
    d.fill_style(WIRE);
    d.fill_polygon(&[
        Vec2::new(large_x - 80.0, base_y - lift - 80.0),
        Vec2::new(large_x + 80.0, base_y - lift - 80.0),
        Vec2::new(large_x + 60.0, base_y - lift - 120.0),
        Vec2::new(large_x - 60.0, base_y - lift - 120.0),
    ]);
    d.fill_style(Color::INK);
    d.fill_rect(large_x - 50.0, base_y - lift - 70.0, 100.0, 30.0);

    arrow(
        d,
        Vec2::new(small_x, base_y - 60.0),
        Vec2::new(small_x, base_y - 120.0),
        Color::ORANGE,
        4.0,
    );
    arrow(
        d,
        Vec2::new(large_x, base_y - lift - 40.0),
        Vec2::new(large_x, base_y - lift - 100.0),
        Color::ORANGE,
        6.0,
    );

    label(
        d,
        format!("Input pressure P = {:.1} kPa", pressure / 1000.0),
        w * 0.08,
        fluid_top - 40.0,
    );
    label(
        d,
        format!("Input force ≈ {:.0} N", input_force),
        small_x - 40.0,
        base_y + 24.0,
    );
    label(
        d,
        format!("Output force ≈ {:.0} N", output_force),
        large_x - 90.0,
        base_y - lift - 140.0,
    );
    label(
        d,
        "Pascal's law: P spreads through the fluid → the large piston lifts the car",
        w * 0.12,
        fluid_top + h * 0.62,
    );

    d.stroke_style(Color::rgba(255, 255, 255, 0.6));
    d.line_width(3.0);
    for i in 0..6 {
        let fi = i as f32;
        d.line(
            w * 0.1,
            fluid_top + fi * 30.0,
            w * 0.9,
            fluid_top + fi * 30.0 + (time + fi).sin() * 6.0,
        );
    }
    d.restore();
}
