use super::{band, gradient_band, SKY_BOTTOM, SKY_TOP};
use crate::core::constants::SOUND_SPEED;
use crate::core::draw::{Color, DrawList};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::{fill_rounded_rect, label};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

// ------------------------------------------------------------- harmonic

pub fn angular_frequency(frequency: f32) -> f32 {
    TAU * frequency
}

pub fn harmonic_metric(p: &ParamSnapshot) -> f32 {
    p.get("amplitude")
}

pub fn harmonic_details(p: &ParamSnapshot) -> String {
    format!("ω = {:.2} rad/s", angular_frequency(p.get("frequency")))
}

/// Horizontal displacement of the bob at `time`.
pub fn pendulum_offset(amplitude: f32, frequency: f32, time: f32) -> f32 {
    amplitude * (time * frequency * PI).sin()
}

/// Playground swing.
pub fn draw_harmonic(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let amplitude = p.get("amplitude");
    let frequency = p.get("frequency");
    let pivot = Vec2::new(w * 0.5, h * 0.18);
    let rope = h * 0.5;
    let x = pendulum_offset(amplitude, frequency, time);
    let bob = Vec2::new(pivot.x + x, pivot.y + (rope * rope - x * x).max(0.0).sqrt());

    d.save();
    gradient_band(d, w, 0.0, h * 0.85, SKY_TOP, SKY_BOTTOM);
    band(d, w, h * 0.85, h, Color::hex(0x8fc47a));

    d.stroke_style(Color::hex(0x8a5a34));
    d.line_width(10.0);
    d.line(pivot.x - 160.0, h * 0.85, pivot.x - 120.0, pivot.y);
    d.line(pivot.x + 160.0, h * 0.85, pivot.x + 120.0, pivot.y);
    d.line(pivot.x - 130.0, pivot.y, pivot.x + 130.0, pivot.y);

    d.stroke_style(Color::hex(0x555555));
    d.line_width(3.0);
    d.line(pivot.x, pivot.y, bob.x, bob.y);

    d.fill_style(Color::hex(0xf4a259));
    fill_rounded_rect(d, bob.x - 30.0, bob.y - 6.0, 60.0, 12.0, 4.0);
    d.fill_style(Color::hex(0xfbd3a5));
    d.fill_circle(bob.x, bob.y - 34.0, 14.0);
    d.fill_style(Color::BLUE);
    fill_rounded_rect(d, bob.x - 10.0, bob.y - 22.0, 20.0, 18.0, 6.0);

    // equilibrium and turning points
    d.stroke_style(Color::rgba(31, 42, 68, 0.3));
    d.line_width(1.0);
    d.line_dash(&[6.0, 6.0]);
    let floor = pivot.y + rope + 20.0;
    for dx in [-amplitude, 0.0, amplitude] {
        d.line(pivot.x + dx, pivot.y + rope - 20.0, pivot.x + dx, floor);
    }
    d.line_dash(&[]);

    label(d, format!("A = {:.0} px", amplitude), 30.0, 40.0);
    label(d, format!("f = {:.1} Hz", frequency), 30.0, 64.0);
    label(d, format!("x = {:.1} px", x), 30.0, 88.0);
    d.restore();
}

// ----------------------------------------------------------------- wave

/// Peak height of two equal waves in partial phase.
const SUPERPOSITION_GAIN: f32 = 1.8;

pub fn wave_metric(p: &ParamSnapshot) -> f32 {
    p.get("frequency")
}

pub fn wave_details(p: &ParamSnapshot) -> String {
    format!(
        "Max superposed amplitude ≈ {:.1} px",
        p.get("amplitude") * SUPERPOSITION_GAIN
    )
}

pub fn rope_height(amplitude: f32, frequency: f32, x: f32, time: f32) -> f32 {
    amplitude * (x / 80.0 * frequency * PI - time).sin()
}

/// Two children shaking a skipping rope.
pub fn draw_wave(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let amplitude = p.get("amplitude");
    let frequency = p.get("frequency");
    let mid_y = h * 0.5;
    let x0 = w * 0.12;
    let x1 = w * 0.88;

    d.save();
    band(d, w, 0.0, h, Color::hex(0xf3f9ff));
    band(d, w, h * 0.8, h, Color::hex(0xcfe3c4));

    for x in [x0, x1] {
        d.fill_style(Color::hex(0xfbd3a5));
        d.fill_circle(x, mid_y - 70.0, 18.0);
        d.fill_style(Color::BLUE);
        fill_rounded_rect(d, x - 16.0, mid_y - 50.0, 32.0, 60.0, 10.0);
    }

    let samples = 120;
    let points: Vec<Vec2> = (0..=samples)
        .map(|i| {
            let x = x0 + (x1 - x0) * i as f32 / samples as f32;
            Vec2::new(x, mid_y + rope_height(amplitude, frequency, x - x0, time))
        })
        .collect();
    d.stroke_style(Color::hex(0xe0533d));
    d.line_width(4.0);
    d.polyline(&points);

    d.stroke_style(Color::rgba(31, 42, 68, 0.25));
    d.line_width(1.0);
    d.line_dash(&[4.0, 6.0]);
    d.line(x0, mid_y - amplitude, x1, mid_y - amplitude);
    d.line(x0, mid_y + amplitude, x1, mid_y + amplitude);
    d.line_dash(&[]);

    label(d, format!("f = {:.1} Hz", frequency), 30.0, 40.0);
    label(d, format!("A = {:.0} px", amplitude), 30.0, 64.0);
    label(
        d,
        "Crests add where waves meet: superposition",
        30.0,
        h * 0.8 + 30.0,
    );
    d.restore();
}

// -------------------------------------------------------------- doppler

/// Observed frequencies (Hz) in front of and behind a source moving at
/// `source_speed` m/s.
pub fn doppler_shift(frequency: f32, source_speed: f32) -> (f32, f32) {
    let front = frequency * SOUND_SPEED / (SOUND_SPEED - source_speed).max(1.0);
    let back = frequency * SOUND_SPEED / (SOUND_SPEED + source_speed);
    (front, back)
}

pub fn doppler_metric(p: &ParamSnapshot) -> f32 {
    p.get("sourceSpeed")
}

pub fn doppler_details(p: &ParamSnapshot) -> String {
    let (front, back) = doppler_shift(p.get("frequency"), p.get("sourceSpeed"));
    format!("Front ≈ {:.0}Hz, behind ≈ {:.0}Hz", front, back)
}

/// Ambulance siren with compressed wavefronts ahead of it.
pub fn draw_doppler(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let speed = p.get("sourceSpeed");
    let frequency = p.get("frequency");
    let road_y = h * 0.7;
    let (front, back) = doppler_shift(frequency, speed);

    d.save();
    gradient_band(d, w, 0.0, road_y, SKY_TOP, SKY_BOTTOM);
    band(d, w, road_y, h, Color::hex(0x5d6270));
    d.stroke_style(Color::WHITE);
    d.line_width(4.0);
    d.line_dash(&[30.0, 20.0]);
    d.line(0.0, road_y + (h - road_y) / 2.0, w, road_y + (h - road_y) / 2.0);
    d.line_dash(&[]);

    let travel = (w * 0.6).max(1.0);
    let van_x = w * 0.2 + (time * speed * 4.0) % travel;
    let van_y = road_y - 50.0;

    let front_spacing = 35.0 * (1.0 - speed / 200.0);
    let back_spacing = 35.0 * (1.0 + speed / 200.0);
    d.stroke_style(Color::rgba(255, 80, 80, 0.5));
    d.line_width(2.0);
    for i in 1..=6 {
        let fi = i as f32;
        d.begin_path();
        d.arc(van_x + 60.0, van_y, fi * front_spacing, -PI / 3.0, PI / 3.0);
        d.stroke();
        d.begin_path();
        d.arc(van_x, van_y, fi * back_spacing, PI * 2.0 / 3.0, PI * 4.0 / 3.0);
        d.stroke();
    }

    d.fill_style(Color::WHITE);
    fill_rounded_rect(d, van_x - 10.0, van_y - 30.0, 90.0, 50.0, 8.0);
    d.fill_style(Color::hex(0xe0533d));
    d.fill_rect(van_x, van_y - 10.0, 70.0, 8.0);
    let beacon = if (time * 6.0).sin() > 0.0 {
        Color::hex(0xff4d4d)
    } else {
        Color::BLUE
    };
    d.fill_style(beacon);
    d.fill_rect(van_x + 25.0, van_y - 40.0, 20.0, 10.0);
    d.fill_style(Color::hex(0x222222));
    d.fill_circle(van_x + 10.0, van_y + 22.0, 10.0);
    d.fill_circle(van_x + 62.0, van_y + 22.0, 10.0);

    label(d, format!("Source speed {:.0} m/s", speed), 30.0, 40.0);
    label(d, format!("Ahead: {:.0} Hz (higher)", front), 30.0, 64.0);
    label(d, format!("Behind: {:.0} Hz (lower)", back), 30.0, 88.0);
    d.restore();
}
