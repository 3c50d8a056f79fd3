use super::{band, current_dots, glow, rotor, BATTERY, DESK, WIRE};
use crate::core::draw::{Color, DrawList};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::label;
use glam::Vec2;

/// Smallest resistance (Ω) the circuit scenes divide by.
pub const MIN_RESISTANCE: f32 = 0.2;
/// Smallest fuse load (Ω).
pub const MIN_FUSE_LOAD: f32 = 0.1;

// ------------------------------------------------------------------ ohm

pub fn ohm_current(voltage: f32, resistance: f32) -> f32 {
    voltage / resistance.max(MIN_RESISTANCE)
}

pub fn ohm_metric(p: &ParamSnapshot) -> f32 {
    ohm_current(p.get("voltage"), p.get("resistance"))
}

pub fn ohm_details(p: &ParamSnapshot) -> String {
    format!("Current I = {:.2} A", ohm_metric(p))
}

/// Workbench with a lamp, a monitor and a motor sharing one supply.
pub fn draw_ohm(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let desk_y = h * 0.72;
    let voltage = p.get("voltage");
    let current = ohm_metric(p);
    let brightness = (current / 0.4).clamp(0.0, 2.4);
    let monitor_glow = (current / 0.35).clamp(0.1, 1.2);
    let motor_speed = (current * 120.0).clamp(10.0, 420.0);

    d.save();
    band(d, w, 0.0, desk_y, Color::hex(0xf1f5ff));
    band(d, w, desk_y, h, DESK);
    d.fill_style(Color::hex(0xc08a56));
    d.fill_rect(w * 0.18, desk_y - 15.0, w * 0.64, 15.0);

    d.fill_style(Color::hex(0x3b3c4f));
    d.fill_rect(w * 0.2, desk_y - 90.0, 28.0, 90.0);
    d.fill_rect(w * 0.77, desk_y - 90.0, 28.0, 90.0);

    let lamp = Vec2::new(w * 0.45, desk_y - 110.0);
    d.fill_style(Color::rgba(247, 193, 74, 0.6 + 0.2 * brightness.min(1.0)));
    d.fill_circle(lamp.x, lamp.y, 34.0);
    d.fill_style(Color::hex(0xfff7de));
    d.fill_circle(lamp.x, lamp.y, 20.0);
    glow(d, lamp, 15.0, 120.0, 0xffe996, 0.8 * brightness.min(1.0));

    d.fill_style(Color::hex(0x1f1f2f));
    d.fill_rect(w * 0.3, desk_y - 70.0, 90.0, 55.0);
    d.fill_style(Color::rgba(80, 190, 255, 0.2 + 0.4 * monitor_glow));
    d.fill_rect(w * 0.31, desk_y - 65.0, 72.0, 42.0);
    d.fill_style(Color::rgba(255, 255, 255, 0.15 * monitor_glow));
    d.fill_rect(w * 0.31, desk_y - 65.0, 72.0 * monitor_glow, 42.0);

    let motor = Vec2::new(w * 0.65, desk_y - 70.0);
    d.fill_style(Color::hex(0x6c7bd8));
    d.fill_rect(motor.x - 40.0, motor.y - 40.0, 80.0, 80.0);
    rotor(
        d,
        motor.x,
        motor.y,
        time * motor_speed * 0.02,
        (32.0, 12.0),
        Color::hex(0xf5f5f5),
    );
    d.fill_style(Color::hex(0xf1a45c));
    d.fill_rect(motor.x - 60.0, motor.y + 50.0, 120.0, 14.0);
    d.fill_style(Color::hex(0xffd27a));
    for i in 0..3 {
        let offset = (time * motor_speed * 0.4 + i as f32 * 60.0) % 160.0;
        d.fill_rect(motor.x - 70.0 + offset, motor.y + 36.0, 24.0, 14.0);
    }

    d.stroke_style(WIRE);
    d.line_width(5.0);
    d.polyline(&[
        Vec2::new(w * 0.22, desk_y - 40.0),
        Vec2::new(lamp.x - 34.0, desk_y - 60.0),
        Vec2::new(w * 0.62, desk_y - 45.0),
        Vec2::new(w * 0.79, desk_y - 30.0),
    ]);
    d.stroke_style(Color::ORANGE);
    d.line_width(4.0);
    d.line(w * 0.22, desk_y - 10.0, w * 0.79, desk_y - 10.0);
    current_dots(d, w * 0.22, w * 0.57, desk_y - 10.0, 12, time * current * 0.5);

    label(d, "Battery", w * 0.2, desk_y - 105.0);
    label(d, "Lamp + desk", lamp.x - 45.0, desk_y - 140.0);
    label(d, "Monitor", w * 0.31, desk_y - 80.0);
    label(d, "Factory motor", motor.x + 20.0, motor.y - 45.0);
    label(d, format!("I = {:.2} A", current), w * 0.48, desk_y - 135.0);
    label(
        d,
        format!("P = UI = {:.1} W", voltage * current),
        w * 0.48,
        desk_y - 110.0,
    );
    label(
        d,
        format!("Speed ~ {:.0} rpm", motor_speed),
        w * 0.48,
        desk_y - 85.0,
    );
    d.restore();
}

// --------------------------------------------------------------- series

pub fn series_total(r1: f32, r2: f32) -> f32 {
    r1 + r2
}

pub fn series_current(voltage: f32, r1: f32, r2: f32) -> f32 {
    voltage / series_total(r1, r2).max(MIN_RESISTANCE)
}

pub fn series_metric(p: &ParamSnapshot) -> f32 {
    series_total(p.get("r1"), p.get("r2"))
}

pub fn series_details(p: &ParamSnapshot) -> String {
    let total = series_metric(p);
    let current = series_current(p.get("voltage"), p.get("r1"), p.get("r2"));
    format!("Total resistance = {:.1}Ω, current = {:.2}A", total, current)
}

pub fn draw_series(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let table_y = h * 0.75;
    let current = series_current(p.get("voltage"), p.get("r1"), p.get("r2"));
    d.save();
    band(d, w, 0.0, table_y, Color::hex(0xeef3ff));
    band(d, w, table_y, h, Color::hex(0xd8e0f0));

    d.fill_style(BATTERY);
    d.fill_rect(w * 0.18, table_y - 70.0, 25.0, 70.0);
    d.fill_rect(w * 0.82 - 25.0, table_y - 70.0, 25.0, 70.0);
    let lamp = Vec2::new(w * 0.3, table_y - 80.0);
    d.fill_style(Color::hex(0xf0c44a));
    d.full_ellipse(lamp.x, lamp.y, 30.0, 18.0);
    d.fill();

    d.fill_style(Color::hex(0xa0c6ff));
    d.fill_rect(w * 0.42, table_y - 90.0, 60.0, 60.0);
    d.fill_style(Color::hex(0x789ddc));
    d.fill_rect(w * 0.55, table_y - 70.0, 60.0, 40.0);
    d.fill_style(Color::hex(0xf2f5ff));
    d.fill_rect(w * 0.64, table_y - 35.0, 80.0, 20.0);

    d.stroke_style(WIRE);
    d.line_width(4.0);
    d.begin_path();
    d.move_to(w * 0.18 + 25.0, table_y - 40.0);
    d.line_to(w * 0.3 - 30.0, table_y - 40.0);
    d.move_to(w * 0.3 + 30.0, table_y - 40.0);
    d.line_to(w * 0.42, table_y - 60.0);
    d.line_to(w * 0.55, table_y - 50.0);
    d.line_to(w * 0.64, table_y - 20.0);
    d.line_to(w * 0.82 - 25.0, table_y - 40.0);
    d.stroke();

    current_dots(d, w * 0.2, w * 0.6, table_y - 35.0, 14, time * current);

    let lamp_brightness = (current / 0.35).clamp(0.0, 2.2);
    glow(d, lamp, 15.0, 80.0, 0xffe68c, 0.65 * lamp_brightness.min(1.0));

    let fan_speed = (current * 140.0).clamp(0.0, 480.0);
    rotor(
        d,
        w * 0.54,
        table_y - 50.0,
        time * fan_speed * 0.03,
        (32.0, 10.0),
        Color::hex(0xf6f8ff),
    );

    let conveyor_y = table_y - 10.0;
    d.fill_style(Color::hex(0xbabeca));
    d.fill_rect(w * 0.62, conveyor_y, w * 0.18, 12.0);
    d.stroke_style(Color::hex(0x888888));
    d.line_width(3.0);
    d.begin_path();
    d.arc(w * 0.62, conveyor_y + 6.0, 10.0, 0.0, std::f32::consts::TAU);
    d.arc(w * 0.8, conveyor_y + 6.0, 10.0, 0.0, std::f32::consts::TAU);
    d.stroke();
    let conveyor_speed = (current * 90.0).clamp(15.0, 260.0);
    let belt = (w * 0.18).max(1.0);
    d.fill_style(Color::hex(0xf9cc7a));
    for i in 0..3 {
        let offset = (time * conveyor_speed + i as f32 * 60.0) % belt;
        d.fill_rect(w * 0.62 + offset, conveyor_y - 25.0, 28.0, 20.0);
    }

    d.fill_style(Color::INK);
    d.font_px(13.0);
    d.fill_text("Series lamp", w * 0.28, table_y - 110.0);
    d.fill_text("Fan (motor)", w * 0.44, table_y - 95.0);
    d.fill_text("PC / resistor box", w * 0.54, table_y - 30.0);
    d.fill_text(format!("I={:.2}A", current), w * 0.65, table_y - 90.0);
    d.fill_text(
        format!("Conveyor ≈ {:.1} m/s", conveyor_speed * 0.05),
        w * 0.6,
        table_y - 55.0,
    );
    d.restore();
}

// ------------------------------------------------------------ capacitor

/// RC time constant (s) for `resistance_k` kΩ and `capacitance_uf` μF.
pub fn time_constant(resistance_k: f32, capacitance_uf: f32) -> f32 {
    resistance_k * 1e3 * capacitance_uf * 1e-6
}

pub fn capacitor_metric(p: &ParamSnapshot) -> f32 {
    time_constant(p.get("resistance"), p.get("capacitance"))
}

pub fn capacitor_details(p: &ParamSnapshot) -> String {
    format!("Time constant τ ≈ {:.2} s", capacitor_metric(p))
}

const FLASH_CYCLE: f32 = 7.0;
const CHARGE_PHASE: f32 = FLASH_CYCLE - 1.5;

/// Charge level in \[0, 1\] at `time`: exponential charge for most of the
/// cycle, then a fast discharge through the flash tube.
pub fn charge_level(tau: f32, time: f32) -> f32 {
    let t = time % FLASH_CYCLE;
    let level = if t < CHARGE_PHASE {
        1.0 - (-t / tau.max(MIN_RESISTANCE)).exp()
    } else {
        (1.0 - (t - CHARGE_PHASE) * 4.0).max(0.0)
    };
    level.clamp(0.0, 1.0)
}

/// Camera flash: slow charge, instant discharge.
pub fn draw_capacitor(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    d.save();
    band(d, w, 0.0, h, Color::hex(0xeff4ff));
    band(d, w, h * 0.25, h, Color::hex(0xd7dee9));

    let camera = Vec2::new(w * 0.25, h * 0.55);
    d.fill_style(Color::hex(0x1f243c));
    d.fill_rect(camera.x - 90.0, camera.y - 70.0, 180.0, 120.0);
    d.fill_style(Color::hex(0x3a4263));
    d.fill_rect(camera.x - 110.0, camera.y - 20.0, 220.0, 40.0);
    d.fill_style(Color::hex(0x101320));
    d.fill_circle(camera.x + 70.0, camera.y - 10.0, 38.0);
    d.fill_style(Color::hex(0x5778d3));
    d.fill_circle(camera.x + 70.0, camera.y - 10.0, 26.0);

    let cap = Vec2::new(w * 0.45, h * 0.5);
    d.fill_style(WIRE);
    d.fill_rect(cap.x - 45.0, cap.y - 110.0, 90.0, 220.0);
    d.fill_style(Color::hex(0x1f2f56));
    d.fill_rect(cap.x - 12.0, cap.y - 120.0, 24.0, 240.0);

    let tau = capacitor_metric(p);
    let level = charge_level(tau, time);
    d.fill_style(Color::rgba(255, 255, 255, 0.25 + level * 0.6));
    d.fill_rect(cap.x - 32.0, cap.y - 85.0, 64.0, 170.0);

    let led = Vec2::new(w * 0.68, h * 0.45);
    d.fill_style(Color::hex(0x1a1d2d));
    d.fill_rect(led.x - 40.0, led.y - 30.0, 80.0, 60.0);
    d.fill_style(Color::rgba(255, 100, 100, 0.3 + level * 0.7));
    d.fill_circle(led.x, led.y, 18.0);

    d.stroke_style(Color::hex(0xffae5f));
    d.line_width(3.0);
    d.polyline(&[
        Vec2::new(cap.x + 80.0, cap.y),
        Vec2::new(led.x - 60.0, led.y),
        Vec2::new(led.x + 70.0, led.y),
    ]);

    let particles = 16;
    let run = led.x - 60.0 - (cap.x + 80.0);
    d.fill_style(Color::rgba(255, 255, 255, 0.2 + level * 0.6));
    for i in 0..particles {
        let progress = (i as f32 / particles as f32 + level * time * 0.2) % 1.0;
        d.fill_circle(cap.x + 80.0 + progress * run, led.y, 3.0);
    }

    if time % FLASH_CYCLE >= CHARGE_PHASE {
        d.fill_style(Color::rgba(255, 255, 255, level));
        d.fill_rect(0.0, 0.0, w, h);
    }

    label(d, format!("τ ≈ {:.2} s", tau), cap.x - 45.0, cap.y + 140.0);
    let state = if level > 0.95 {
        "Fully charged → ready to flash"
    } else {
        "Slow charge in progress"
    };
    label(d, state, cap.x - 60.0, cap.y + 160.0);
    d.restore();
}

// ----------------------------------------------------------------- fuse

pub fn fuse_current(voltage: f32, load: f32) -> f32 {
    voltage / load.max(MIN_FUSE_LOAD)
}

/// True when the current exceeds the fuse rating.
pub fn fuse_overloaded(voltage: f32, load: f32, rating: f32) -> bool {
    fuse_current(voltage, load) > rating
}

pub fn fuse_metric(p: &ParamSnapshot) -> f32 {
    fuse_current(p.get("voltage"), p.get("load"))
}

pub fn fuse_details(p: &ParamSnapshot) -> String {
    let current = fuse_metric(p);
    if current > p.get("fuseRating") {
        format!("I ≈ {:.2}A > rating → fuse blows", current)
    } else {
        format!("I ≈ {:.2}A (safe)", current)
    }
}

pub fn draw_fuse(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let rating = p.get("fuseRating");
    let current = fuse_metric(p);
    let overload = current > rating;
    d.save();
    band(d, w, 0.0, h, Color::hex(0xf5f7ff));
    let table_y = h * 0.7;
    band(d, w, table_y, h, Color::hex(0xd8e0ef));

    d.fill_style(BATTERY);
    d.fill_rect(w * 0.2, table_y - 80.0, 20.0, 80.0);
    d.fill_rect(w * 0.8 - 20.0, table_y - 80.0, 20.0, 80.0);

    d.stroke_style(WIRE);
    d.line_width(4.0);
    d.polyline(&[
        Vec2::new(w * 0.21, table_y - 40.0),
        Vec2::new(w * 0.35, table_y - 40.0),
        Vec2::new(w * 0.5, table_y - 50.0),
        Vec2::new(w * 0.65, table_y - 50.0),
        Vec2::new(w * 0.79, table_y - 40.0),
    ]);

    let fuse_x = w * 0.5;
    d.fill_style(Color::hex(0xf6f6f6));
    d.fill_rect(fuse_x - 50.0, table_y - 65.0, 100.0, 30.0);
    d.stroke_style(Color::hex(0xc8c8c8));
    d.stroke_rect(fuse_x - 50.0, table_y - 65.0, 100.0, 30.0);

    if overload {
        d.stroke_style(Color::hex(0xff7b4a));
        d.line_width(4.0);
        d.polyline(&[
            Vec2::new(fuse_x - 40.0, table_y - 50.0),
            Vec2::new(fuse_x - 15.0, table_y - 50.0 + (time * 20.0).sin() * 5.0),
            Vec2::new(fuse_x + 10.0, table_y - 50.0 - (time * 15.0).sin() * 5.0),
            Vec2::new(fuse_x + 35.0, table_y - 50.0),
        ]);
        d.fill_style(Color::rgba(255, 120, 60, 0.45));
        d.fill_rect(fuse_x - 50.0, table_y - 65.0, 100.0, 30.0);
        // smoke
        d.fill_style(Color::rgba(120, 120, 120, 0.3 + 0.3 * (time * 5.0).sin()));
        d.full_ellipse(fuse_x, table_y - 80.0, 70.0, 20.0);
        d.fill();
    } else {
        d.stroke_style(Color::hex(0xb0b7c9));
        d.line_width(4.0);
        d.line(fuse_x - 40.0, table_y - 50.0, fuse_x + 40.0, table_y - 50.0);
    }

    let bulb = Vec2::new(w * 0.7, table_y - 70.0);
    d.fill_style(Color::hex(0xffd467));
    d.fill_circle(bulb.x, bulb.y, 18.0);
    d.fill_style(Color::hex(0xffa200));
    d.fill_rect(bulb.x - 10.0, bulb.y, 20.0, 25.0);
    let bulb_glow = if overload {
        0.1
    } else if rating > 0.0 {
        (current / rating).clamp(0.0, 1.0)
    } else {
        0.0
    };
    glow(d, bulb, 10.0, 80.0, 0xffd278, 0.5 * bulb_glow);

    label(d, format!("I = {:.2}A", current), w * 0.22, table_y - 100.0);
    label(d, format!("Rated {:.1}A", rating), fuse_x - 40.0, table_y - 80.0);
    let state = if overload {
        "Fuse blown!"
    } else {
        "Circuit running safely"
    };
    label(d, state, w * 0.6, table_y - 100.0);
    d.restore();
}
