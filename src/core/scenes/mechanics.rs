use super::{band, gradient_band, SKIN, SKY_BOTTOM, SKY_TOP, WIRE};
use crate::core::constants::{floor_denominator, to_rad, G, MIN_DENOMINATOR};
use crate::core::draw::{Color, DrawList};
use crate::core::params::ParamSnapshot;
use crate::core::shapes::{arrow, fill_rounded_rect, label, rounded_rect_path};
use glam::Vec2;
use std::f32::consts::{PI, TAU};

// ---------------------------------------------------------------- newton

pub fn newton_acceleration(force: f32, mass: f32) -> f32 {
    force / floor_denominator(mass)
}

pub fn newton_metric(p: &ParamSnapshot) -> f32 {
    newton_acceleration(p.get("force"), p.get("mass"))
}

pub fn newton_details(p: &ParamSnapshot) -> String {
    format!("Live acceleration a = {:.2} m/s²", newton_metric(p))
}

/// Empty cart vs loaded cart pushed with the same force.
pub fn draw_newton(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let ground_y = h * 0.8;
    let force = p.get("force");
    d.save();
    gradient_band(d, w, 0.0, ground_y, SKY_TOP, SKY_BOTTOM);
    band(d, w, ground_y, h, Color::hex(0x9ea7ba));
    d.fill_style(Color::WHITE);
    d.global_alpha(0.15);
    for i in 0..5 {
        d.fill_rect(i as f32 * 120.0, ground_y - 40.0, 80.0, 160.0);
    }
    d.global_alpha(1.0);

    let base_mass = 25.0;
    let heavy_mass = base_mass + p.get("mass") * 25.0;
    let carts = [
        ("Empty", base_mass, 0xf8fbff, 0x94c1ff),
        ("Loaded", heavy_mass, 0xfff1d6, 0xf59f45),
    ];
    let t = time % 4.0;
    let scale = 55.0;

    for (index, (name, mass, body, stripe)) in carts.into_iter().enumerate() {
        let acc = newton_acceleration(force, mass);
        let displacement = 0.5 * acc * t * t * scale;
        let cart_x = w * 0.18 + displacement + index as f32 * 0.28 * w;
        let cart_y = ground_y - 65.0;

        // shopper in the background
        d.fill_style(Color::rgba(255, 255, 255, 0.35));
        d.fill_circle(
            cart_x - 140.0,
            ground_y - 60.0 + (time + index as f32).sin() * 2.0,
            16.0,
        );
        d.fill_rect(cart_x - 148.0, ground_y - 60.0, 16.0, 40.0);

        // basket
        d.fill_style(Color::hex(body));
        rounded_rect_path(d, cart_x, cart_y - 30.0, 140.0, 55.0, 18.0);
        d.fill();
        d.stroke_style(Color::hex(0xc5ccd8));
        d.line_width(2.0);
        d.stroke();
        d.fill_style(Color::hex(stripe));
        d.fill_rect(cart_x + 8.0, cart_y - 12.0, 124.0, 10.0);
        d.fill_style(Color::hex(0xd9dfea));
        d.fill_rect(cart_x + 10.0, cart_y + 8.0, 120.0, 6.0);
        d.fill_style(Color::hex(0xa7b4ca));
        d.fill_rect(cart_x - 8.0, cart_y + 6.0, 10.0, 45.0);

        if index == 1 {
            for i in 0..3 {
                let crate_color = if i == 0 { 0x9fc0ff } else { 0x7aa5ff };
                d.fill_style(Color::hex(crate_color));
                d.fill_rect(cart_x + 15.0 + i as f32 * 35.0, cart_y - 25.0, 30.0, 22.0);
            }
        }

        for wx in [cart_x + 25.0, cart_x + 95.0] {
            d.fill_style(Color::hex(0x2f2f3c));
            d.fill_circle(wx, ground_y - 8.0, 16.0);
            d.stroke_style(Color::hex(0x54607c));
            d.line_width(3.0);
            d.circle(wx, ground_y - 8.0, 8.0);
            d.stroke();
        }

        // person pushing; the loaded cart needs a deeper lean
        let (arms, lean, shirt) = if index == 0 {
            (0xfdd1a3, -0.15, 0x4c93ff)
        } else {
            (0xf09a5b, -0.35, 0xff6f4e)
        };
        d.save();
        d.translate(cart_x - 40.0, ground_y - 70.0);
        d.rotate(lean);
        d.fill_style(Color::hex(arms));
        d.fill_rect(-6.0, 0.0, 12.0, 55.0);
        d.fill_rect(-20.0, 10.0, 12.0, 55.0);
        d.fill_style(SKIN);
        d.fill_circle(0.0, -12.0, 16.0);
        d.fill_style(Color::hex(shirt));
        d.fill_rect(-20.0, 20.0, 40.0, 46.0);
        d.restore();

        let arrow_len = 40.0 + force * 6.0;
        arrow(
            d,
            Vec2::new(cart_x - 20.0, cart_y + 10.0),
            Vec2::new(cart_x - 20.0 + arrow_len, cart_y + 10.0),
            Color::ORANGE,
            5.0,
        );
        d.fill_style(Color::INK);
        d.font_px(13.0);
        d.fill_text(format!("{} a={:.2}m/s²", name, acc), cart_x, cart_y - 40.0);
    }

    label(d, format!("F = {:.1} N", force), w * 0.12, ground_y + 30.0);
    label(
        d,
        format!("Loaded mass ≈ {:.1} kg", heavy_mass),
        w * 0.12,
        ground_y + 52.0,
    );
    d.restore();
}

// -------------------------------------------------------------- reaction

/// Thrust (N) of the escaping air for a balloon pressure in kPa.
pub fn reaction_thrust(pressure: f32) -> f32 {
    pressure * 35.0
}

pub fn reaction_metric(p: &ParamSnapshot) -> f32 {
    reaction_thrust(p.get("pressure")) / floor_denominator(p.get("mass"))
}

pub fn reaction_details(p: &ParamSnapshot) -> String {
    format!(
        "Jet thrust ≈ {:.1} N; the reaction force is equal and opposite",
        reaction_thrust(p.get("pressure"))
    )
}

pub fn draw_reaction(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let floor = h * 0.78;
    let pressure = p.get("pressure");
    let mass = p.get("mass");
    d.save();
    band(d, w, 0.0, floor, Color::hex(0xffe9ff));
    band(d, w, floor, h, Color::hex(0xf5d0e8));
    d.fill_style(Color::rgba(255, 255, 255, 0.25));
    for i in 0..5 {
        let fi = i as f32;
        d.fill_circle(80.0 + fi * 120.0, 90.0 + (time + fi).sin() * 8.0, 30.0);
    }

    let thrust = reaction_thrust(pressure);
    let accel = reaction_metric(p);
    let t = time % 2.5;
    let base_x = w * 0.2;
    let path_y = floor - 120.0;
    let distance = accel * t * t * 60.0;
    let balloon_x = base_x + distance;
    let balloon_y = path_y - (t * 3.0).sin() * 40.0;

    // two kids watching
    for (x, y, r, shirt) in [
        (w * 0.15, floor - 40.0, 20.0, 0x8cc7ff),
        (w * 0.8, floor - 35.0, 18.0, 0xffb077),
    ] {
        d.fill_style(Color::hex(0xffd8a8));
        d.fill_circle(x, y, r);
        d.fill_style(Color::hex(shirt));
        d.fill_rect(x - r * 0.75, y, r * 1.5, r * 2.5);
    }

    d.save();
    d.translate(balloon_x, balloon_y);
    d.rotate((time * 1.5).sin() * 0.2);
    d.scale(1.0, 1.0 + pressure * 0.1);
    d.fill_style(Color::hex(0xff6fb2));
    d.full_ellipse(0.0, 0.0, 40.0, 24.0);
    d.fill();
    d.restore();

    // jet leaves the nozzle backwards and downwards
    let jet_length = thrust * 0.6;
    let plume = PI / 6.0;
    d.stroke_style(Color::rgba(255, 255, 255, 0.7));
    d.line_width(6.0);
    d.line(
        balloon_x - 30.0,
        balloon_y + 5.0,
        balloon_x - 30.0 - jet_length,
        balloon_y + 5.0 + plume.tan() * jet_length,
    );
    for i in 0..6 {
        let fi = i as f32;
        d.fill_style(Color::rgba(255, 255, 255, 0.4 - fi * 0.05));
        d.fill_circle(
            balloon_x - 30.0 - fi * 15.0,
            balloon_y + 15.0 + (time * 4.0 + fi).sin() * 6.0,
            6.0 - fi * 0.6,
        );
    }

    d.stroke_style(Color::rgba(255, 111, 178, 0.3));
    d.line_dash(&[6.0, 8.0]);
    d.begin_path();
    d.move_to(base_x, path_y);
    d.quad_to(base_x + distance * 0.4, path_y - 60.0, balloon_x, balloon_y);
    d.stroke();
    d.line_dash(&[]);

    label(d, format!("Thrust ≈ {:.1} N", thrust), w * 0.05, floor + 26.0);
    label(d, format!("Balloon mass ≈ {:.1} g", mass), w * 0.35, floor + 26.0);
    label(d, format!("Acceleration ≈ {:.2} m/s²", accel), w * 0.62, floor + 26.0);
    d.restore();
}

// ----------------------------------------------------------------- lever

/// Right-hand arm length (m); fixed by the apparatus.
pub const LEVER_RIGHT_ARM: f32 = 3.0;

pub fn lever_balancing_force(left_force: f32, left_arm: f32) -> f32 {
    left_force * left_arm / LEVER_RIGHT_ARM
}

pub fn lever_metric(p: &ParamSnapshot) -> f32 {
    lever_balancing_force(p.get("leftForce"), p.get("leftArm"))
}

pub fn lever_details(p: &ParamSnapshot) -> String {
    format!(
        "Balancing force on the right F₂ = {:.2} N (L₂ = 3 m)",
        lever_metric(p)
    )
}

pub fn draw_lever(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, _time: f32) {
    let pivot_x = w * 0.5;
    let pivot_y = h * 0.7;
    let left_force = p.get("leftForce");
    let left_arm = p.get("leftArm");
    d.save();
    d.fill_style(Color::hex(0xc76f3c));
    d.fill_polygon(&[
        Vec2::new(pivot_x - 25.0, pivot_y),
        Vec2::new(pivot_x + 25.0, pivot_y),
        Vec2::new(pivot_x + 5.0, pivot_y + 70.0),
        Vec2::new(pivot_x - 5.0, pivot_y + 70.0),
    ]);
    d.stroke_style(Color::hex(0xa75625));
    d.line_width(5.0);
    d.line(w * 0.15, pivot_y - 40.0, w * 0.85, pivot_y + 40.0);

    let left_pos = pivot_x - left_arm * 45.0;
    let right_pos = pivot_x + LEVER_RIGHT_ARM * 45.0;
    let tilt = (left_force * left_arm - LEVER_RIGHT_ARM * 3.0) * 0.005;

    d.save();
    d.translate(pivot_x, pivot_y);
    d.rotate(tilt);
    d.fill_style(Color::hex(0xe4a653));
    d.fill_rect(-w * 0.35, -12.0, w * 0.7, 24.0);
    d.restore();

    let child_radius = 28.0;
    d.fill_style(Color::hex(0xffcd9b));
    d.fill_circle(left_pos, pivot_y - 70.0 - tilt * 40.0, child_radius);
    d.fill_style(Color::ORANGE);
    d.fill_rect(left_pos - 18.0, pivot_y - 60.0 - tilt * 40.0, 36.0, 45.0);

    d.fill_style(Color::hex(0xcbe5ff));
    d.fill_circle(right_pos, pivot_y - 40.0 + tilt * 40.0, child_radius);
    d.fill_style(Color::BLUE);
    d.fill_rect(right_pos - 18.0, pivot_y - 30.0 + tilt * 40.0, 36.0, 45.0);

    arrow(
        d,
        Vec2::new(left_pos, pivot_y - 80.0),
        Vec2::new(left_pos, pivot_y - 80.0 + left_force * 8.0),
        Color::ORANGE,
        4.0,
    );
    let needed = lever_balancing_force(left_force, left_arm);
    arrow(
        d,
        Vec2::new(right_pos, pivot_y - 50.0),
        Vec2::new(right_pos, pivot_y - 50.0 + needed * 8.0),
        Color::BLUE,
        4.0,
    );
    d.restore();
}

// ---------------------------------------------------------------- energy

pub fn potential_energy(mass: f32, height: f32) -> f32 {
    mass * G * height
}

pub fn energy_metric(p: &ParamSnapshot) -> f32 {
    potential_energy(p.get("mass"), p.get("height"))
}

pub fn energy_details(p: &ParamSnapshot) -> String {
    format!("Ep = {:.1} J", energy_metric(p))
}

pub fn draw_energy(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let mass = p.get("mass");
    let height = p.get("height");
    d.save();
    band(d, w, 0.0, h, Color::hex(0xe5f2ff));
    d.fill_style(Color::hex(0xbedc9a));
    d.begin_path();
    d.move_to(0.0, h * 0.8);
    d.quad_to(w * 0.3, h * 0.5, w * 0.6, h * 0.72);
    d.line_to(w, h);
    d.line_to(0.0, h);
    d.close_path();
    d.fill();

    let tower_x = w * 0.25;
    d.fill_style(Color::hex(0xc0c9db));
    d.fill_rect(tower_x - 25.0, h * 0.2, 50.0, h * 0.7);

    let lift = h * 0.75 - height / 10.0 * 250.0 - (time * 1.4).sin() * 8.0;
    d.fill_style(WIRE);
    d.fill_rect(tower_x - 40.0, lift - 5.0, 80.0, 5.0);
    d.fill_style(Color::hex(0xffaf6e));
    d.fill_rect(tower_x - 40.0, lift - 55.0, 80.0, 55.0);
    d.fill_style(Color::hex(0xf6d0a3));
    d.fill_circle(tower_x, lift - 70.0, 18.0);

    d.fill_style(Color::INK);
    d.font_px(16.0);
    d.fill_text(
        format!("Ep = mgh = {:.1} J", potential_energy(mass, height)),
        w * 0.5,
        h * 0.3,
    );
    d.fill_text(format!("m = {:.1} kg", mass), w * 0.5, h * 0.34);
    d.fill_text(format!("h = {:.1} m", height), w * 0.5, h * 0.38);

    d.stroke_style(Color::ORANGE);
    d.line_width(4.0);
    d.line(tower_x + 50.0, lift, tower_x + 50.0, lift + height * 10.0);
    d.restore();
}

// -------------------------------------------------------------- momentum

/// Final velocities `(v1', v2')` of a 1-D elastic collision with body 2 at
/// rest.
pub fn elastic_collision(m1: f32, m2: f32, v1: f32) -> (f32, f32) {
    let total = floor_denominator(m1 + m2);
    ((m1 - m2) / total * v1, 2.0 * m1 / total * v1)
}

pub fn momentum_metric(p: &ParamSnapshot) -> f32 {
    p.get("mass1") - p.get("mass2")
}

pub fn format_kilograms(v: f32) -> String {
    format!("{:.2}kg", v)
}

pub fn momentum_details(p: &ParamSnapshot) -> String {
    let (v1p, v2p) = elastic_collision(p.get("mass1"), p.get("mass2"), p.get("v1"));
    format!("After collision v₁′ ≈ {:.2} m/s, v₂′ ≈ {:.2} m/s", v1p, v2p)
}

pub fn draw_momentum(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let track_y = h * 0.78;
    let v1 = p.get("v1");
    d.save();
    d.stroke_style(Color::hex(0xd8e2ff));
    d.line_width(2.0);
    d.line(30.0, track_y, w - 30.0, track_y);

    let block_h = 55.0;
    let b1w = 70.0;
    let b2w = 80.0;
    let cycle = (time % 4.0) / 4.0;
    let collision_x = w * 0.55;
    let (b1x, b2x) = if cycle < 0.5 {
        let t = cycle / 0.5;
        (w * 0.15 + t * (collision_x - w * 0.15 - b1w), w * 0.72)
    } else {
        let t = (cycle - 0.5) / 0.5;
        let (v1p, v2p) = elastic_collision(p.get("mass1"), p.get("mass2"), v1);
        (collision_x - b1w + v1p * t * 6.0, w * 0.65 + v2p * t * 5.0)
    };
    // narrow surfaces collapse the clamp range; keep min <= max
    let b1x = b1x.clamp(30.0, (w - b1w - 30.0).max(30.0));
    let b2x = b2x.clamp(30.0, (w - b2w - 30.0).max(30.0));

    for (x, bw, edge) in [(b1x, b1w, WIRE), (b2x, b2w, Color::ORANGE)] {
        d.fill_style(Color::WHITE);
        d.stroke_style(edge);
        rounded_rect_path(d, x, track_y - block_h - 10.0, bw, block_h, 10.0);
        d.fill();
        d.stroke();
    }
    arrow(
        d,
        Vec2::new(b1x + b1w / 2.0, track_y - block_h - 25.0),
        Vec2::new(b1x + b1w / 2.0 + v1 * 4.0, track_y - block_h - 25.0),
        WIRE,
        3.0,
    );
    d.restore();
}

// -------------------------------------------------------------- circular

pub fn centripetal_acceleration(speed: f32, radius: f32) -> f32 {
    speed * speed / floor_denominator(radius)
}

pub fn circular_metric(p: &ParamSnapshot) -> f32 {
    centripetal_acceleration(p.get("speed"), p.get("radius"))
}

pub fn circular_details(p: &ParamSnapshot) -> String {
    format!("a꜀ = {:.2} m/s²", circular_metric(p))
}

/// Spinning umbrella flinging droplets along the tangent.
pub fn draw_circular(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let cx = w / 2.0;
    let cy = h / 2.0 + 40.0;
    let speed = p.get("speed");
    let radius = p.get("radius");
    d.save();
    gradient_band(d, w, 0.0, h, Color::hex(0x1d2233), Color::hex(0x343d58));
    band(d, w, cy + 70.0, h, Color::hex(0x2a2f44));
    d.fill_style(Color::rgba(255, 255, 255, 0.1));
    for i in 0..5 {
        d.fill_rect(40.0 + i as f32 * 140.0, cy + 80.0, 100.0, 8.0);
    }

    d.fill_style(Color::hex(0x444c66));
    d.begin_path();
    d.arc(cx, cy + 40.0, 80.0, PI, 0.0);
    d.line_to(cx + 80.0, cy + 100.0);
    d.line_to(cx - 80.0, cy + 100.0);
    d.close_path();
    d.fill();

    d.fill_style(Color::hex(0xffcf7d));
    d.fill_circle(cx, cy - 120.0, 35.0);
    d.fill_style(Color::hex(0x6d88ff));
    d.fill_rect(cx - 30.0, cy - 120.0, 60.0, 110.0);

    let umbrella = 120.0 + radius * 6.0;
    let mut canopy = Vec::with_capacity(8);
    canopy.push(Vec2::new(cx, cy - 40.0));
    for i in 0..=6 {
        let a = i as f32 / 6.0 * PI;
        canopy.push(Vec2::new(cx + umbrella * a.cos(), cy - 40.0 - umbrella * a.sin()));
    }
    d.fill_style(Color::hex(0xf05b72));
    d.fill_polygon(&canopy);

    let angular = speed * 0.8;
    let droplets = 20;
    for i in 0..droplets {
        let theta = time * angular + i as f32 / droplets as f32 * TAU;
        let start = Vec2::new(cx + umbrella * theta.cos(), cy - 40.0 + umbrella * theta.sin());
        let vel = Vec2::new(theta.cos() * speed * 4.0, theta.sin() * speed * 1.2);
        let life = (time * 3.0 + i as f32) % 1.0;
        let splash = start + vel * 15.0 * life;
        d.fill_style(Color::rgba(132, 200, 255, 1.0 - life));
        d.fill_circle(splash.x, splash.y, 3.0 + speed * 0.2 * (1.0 - life));
    }

    d.fill_style(Color::rgba(255, 255, 255, 0.3));
    d.fill_circle(cx + 30.0, cy - 160.0, 25.0);

    d.fill_style(Color::hex(0x9ad5ff));
    let lane = w.max(1.0);
    for i in 0..8 {
        let offset = (time * 50.0 + i as f32 * 60.0) % lane;
        d.fill_circle(offset, cy + 70.0, 6.0);
    }

    d.fill_style(Color::WHITE);
    d.font_px(14.0);
    d.fill_text(
        format!(
            "Centripetal acceleration a = v² / r = {:.2} m/s²",
            centripetal_acceleration(speed, radius)
        ),
        30.0,
        40.0,
    );
    d.fill_text(
        "Droplets leave along the tangent: \"centrifugal force\" is just inertia",
        30.0,
        64.0,
    );
    d.restore();
}

// ------------------------------------------------------------ projectile

/// Closed-form launch from ground level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    pub vx: f32,
    pub vy: f32,
    /// Time of flight, never below 0.2 s.
    pub flight_time: f32,
    pub range: f32,
    pub max_height: f32,
}

impl Trajectory {
    pub fn new(speed: f32, angle_deg: f32) -> Self {
        let a = to_rad(angle_deg);
        let vx = speed * a.cos();
        let vy = speed * a.sin();
        let flight_time = (vy * 2.0 / G).max(0.2);
        Self {
            vx,
            vy,
            flight_time,
            range: vx * flight_time,
            max_height: vy * vy / (2.0 * G),
        }
    }

    pub fn height_at(&self, t: f32) -> f32 {
        self.vy * t - 0.5 * G * t * t
    }

    /// Elapsed time folded into one flight.
    pub fn phase(&self, time: f32) -> f32 {
        time % self.flight_time
    }
}

/// `R = v² sin 2θ / g`.
pub fn projectile_range(speed: f32, angle_deg: f32) -> f32 {
    speed * speed * (2.0 * to_rad(angle_deg)).sin() / G
}

pub fn projectile_metric(p: &ParamSnapshot) -> f32 {
    projectile_range(p.get("speed"), p.get("angle"))
}

pub fn projectile_details(p: &ParamSnapshot) -> String {
    format!("Range ≈ {:.1} m", projectile_metric(p))
}

pub fn draw_projectile(d: &mut DrawList, w: f32, h: f32, p: &ParamSnapshot, time: f32) {
    let ground_y = h - 80.0;
    let margin = 70.0;
    let speed = p.get("speed");
    let angle_deg = p.get("angle");
    let angle = to_rad(angle_deg);
    d.save();
    gradient_band(d, w, 0.0, ground_y, Color::hex(0xa6d8ff), Color::hex(0xeaf7ff));
    band(d, w, ground_y, h, Color::hex(0xb4d28d));

    d.fill_style(Color::hex(0x87b6e0));
    d.fill_polygon(&[
        Vec2::new(0.0, ground_y - 180.0),
        Vec2::new(w * 0.2, ground_y - 250.0),
        Vec2::new(w * 0.4, ground_y - 150.0),
        Vec2::new(w * 0.6, ground_y - 260.0),
        Vec2::new(w * 0.8, ground_y - 150.0),
        Vec2::new(w, ground_y - 220.0),
        Vec2::new(w, ground_y),
        Vec2::new(0.0, ground_y),
    ]);

    let traj = Trajectory::new(speed, angle_deg);
    let scale_x = (w - margin * 2.0) / traj.range.max(5.0);
    let scale_y = (ground_y - margin) / (traj.max_height * 1.3).max(5.0);
    let scale = scale_x.min(scale_y).max(MIN_DENOMINATOR);
    let origin = Vec2::new(margin, ground_y);
    let to_canvas = |x: f32, y: f32| Vec2::new(origin.x + x * scale, origin.y - y * scale);

    // runway
    d.fill_style(Color::hex(0x7c5c42));
    d.fill_rect(origin.x - 40.0, origin.y - 20.0, 160.0, 20.0);
    d.fill_style(Color::hex(0x4b3d2c));
    d.fill_rect(origin.x - 60.0, origin.y - 10.0, 200.0, 10.0);

    // cannon
    d.save();
    d.translate(origin.x, origin.y - 10.0);
    d.rotate(-angle);
    d.fill_style(Color::hex(0x3d4f88));
    fill_rounded_rect(d, -30.0, -18.0, 90.0, 36.0, 16.0);
    d.restore();
    d.fill_style(Color::ORANGE);
    d.begin_path();
    d.move_to(origin.x, origin.y);
    d.arc(origin.x, origin.y, 48.0, -angle, 0.0);
    d.fill();
    d.fill_style(Color::WHITE);
    d.font_px(12.0);
    d.fill_text(
        format!("{:.0}°", angle_deg),
        origin.x + 40.0 * (-angle / 2.0).cos(),
        origin.y - 40.0 * (angle / 2.0).sin(),
    );

    // target
    let target_x = origin.x + (traj.range * scale * 0.9).min(w - margin * 1.6);
    d.fill_style(Color::hex(0xf7f3c1));
    d.fill_rect(target_x - 20.0, origin.y - 60.0, 40.0, 60.0);
    d.fill_style(Color::hex(0xf36e6e));
    d.fill_circle(target_x, origin.y - 75.0, 18.0);

    d.stroke_style(Color::rgba(255, 255, 255, 0.35));
    d.line_width(1.0);
    d.begin_path();
    for i in 0..6 {
        let gy = ground_y - i as f32 * 60.0;
        d.move_to(origin.x - 20.0, gy);
        d.line_to(w - margin, gy);
    }
    d.stroke();

    let segments = 120;
    let path: Vec<Vec2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32 * traj.flight_time;
            to_canvas(traj.vx * t, traj.height_at(t))
        })
        .collect();
    d.stroke_style(WIRE);
    d.line_width(3.0);
    d.polyline(&path);

    d.line_dash(&[8.0, 6.0]);
    d.stroke_style(Color::rgba(76, 123, 229, 0.35));
    d.line(origin.x, origin.y, origin.x + traj.range * scale, origin.y);
    d.line_dash(&[]);
    d.fill_style(Color::INK);
    d.font_px(13.0);
    d.fill_text(
        format!("Range ≈ {:.1} m", traj.range),
        origin.x + traj.range * scale / 2.0 - 40.0,
        origin.y + 22.0,
    );

    let apex = to_canvas(traj.vx * (traj.vy / G), traj.max_height);
    d.fill_style(Color::hex(0xffcc7c));
    d.fill_circle(apex.x, apex.y, 9.0);
    d.fill_style(Color::INK);
    d.fill_text("Apex", apex.x - 24.0, apex.y - 12.0);

    let progress = traj.phase(time);
    let ball = to_canvas(traj.vx * progress, traj.height_at(progress).max(0.0));
    d.fill_style(Color::ORANGE);
    d.fill_circle(ball.x, ball.y, 13.0);

    d.fill_style(Color::rgba(255, 155, 69, 0.35));
    for i in 1..=10 {
        let t = (progress - i as f32 * 0.05).max(0.0);
        let spot = to_canvas(traj.vx * t, traj.height_at(t).max(0.0));
        d.fill_circle(spot.x, spot.y, (8.0 - i as f32).max(1.0));
    }

    // velocity components at the ball
    arrow(
        d,
        ball,
        ball + Vec2::new(traj.vx * scale * 0.18, 0.0),
        Color::hex(0x3cc5ff),
        4.0,
    );
    arrow(
        d,
        ball,
        ball + Vec2::new(0.0, -traj.vy * scale * 0.12 + G * progress * scale * 0.12),
        Color::hex(0xff6b81),
        4.0,
    );
    d.fill_style(Color::INK);
    d.fill_text(format!("vx={:.1} m/s", traj.vx), ball.x + 15.0, ball.y + 14.0);
    d.fill_text(
        format!("vy={:.1} m/s", traj.vy - G * progress),
        ball.x - 100.0,
        ball.y - 12.0,
    );

    // scoreboard
    d.fill_style(Color::rgba(255, 255, 255, 0.85));
    d.fill_rect(w - 220.0, 40.0, 180.0, 110.0);
    let rows = [
        format!("Time {:.2}/{:.2} s", progress, traj.flight_time),
        format!("Max height {:.1} m", traj.max_height),
        format!("Range {:.1} m", traj.range),
        format!("Speed {:.1} m/s", speed),
    ];
    for (i, row) in rows.into_iter().enumerate() {
        label(d, row, w - 210.0, 65.0 + i as f32 * 23.0);
    }
    d.restore();
}
