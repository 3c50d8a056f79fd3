// Host-side tests for scene physics and rendering into draw lists.

use glam::Vec2;
use physics_lab::core::catalog::{Principle, PrincipleId};
use physics_lab::core::draw::{Color, DrawCommand, DrawList, Paint};
use physics_lab::core::params::ParamSnapshot;
use physics_lab::core::scenes::{
    circuits, electromagnetism, electrostatics, fluids, heat, mechanics, optics, waves,
};
use physics_lab::core::session::{render_principle, BACKGROUND};
use physics_lab::core::shapes::{arrow, rounded_rect_path, ARROW_HEAD_LEN};

fn close(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn every_scene_renders_finite_commands() {
    for id in PrincipleId::ALL {
        let p = Principle::lookup(id);
        let mut low = ParamSnapshot::default();
        let mut high = ParamSnapshot::default();
        for spec in p.params {
            low.set(spec.id, spec.min);
            high.set(spec.id, spec.max);
        }
        for params in [p.default_params(), low, high] {
            for t in [0.0_f32, 0.4, 3.3, 17.9] {
                let list = render_principle(id, 800.0, 450.0, &params, t);
                assert!(list.len() > 3, "{} rendered nothing", id);
                assert!(list.all_finite(), "{} produced a non-finite command at t={}", id, t);
            }
        }
    }
}

#[test]
fn background_is_painted_first() {
    let list = render_principle(
        PrincipleId::Ohm,
        300.0,
        200.0,
        &Principle::lookup(PrincipleId::Ohm).default_params(),
        0.0,
    );
    let cmds = list.commands();
    assert!(matches!(cmds[0], DrawCommand::ClearRect(_)));
    assert!(matches!(&cmds[1], DrawCommand::FillStyle(paint) if *paint == Paint::Solid(BACKGROUND)));
    assert!(matches!(cmds[2], DrawCommand::FillRect(_)));
}

#[test]
fn scenes_keep_save_restore_balanced() {
    for id in PrincipleId::ALL {
        let params = Principle::lookup(id).default_params();
        let list = render_principle(id, 640.0, 360.0, &params, 1.0);
        let mut depth = 0i32;
        for cmd in list.commands() {
            match cmd {
                DrawCommand::Save => depth += 1,
                DrawCommand::Restore => {
                    depth -= 1;
                    assert!(depth >= 0, "{} restored more than saved", id);
                }
                _ => {}
            }
        }
        assert_eq!(depth, 0, "{} left state saved", id);
    }
}

#[test]
fn mechanics_formulas() {
    assert!(close(mechanics::newton_acceleration(6.0, 2.0), 3.0, 1e-6));
    assert!(close(mechanics::lever_balancing_force(4.0, 3.0), 4.0, 1e-6));
    let (v1, v2) = mechanics::elastic_collision(2.0, 3.0, 8.0);
    assert!(close(v1, -1.6, 1e-5));
    assert!(close(v2, 6.4, 1e-5));
    // momentum is conserved
    assert!(close(2.0 * v1 + 3.0 * v2, 2.0 * 8.0, 1e-4));
    assert_eq!(mechanics::format_kilograms(1.0), "1.00kg");
}

#[test]
fn fluids_formulas() {
    let (buoy, weight) = fluids::buoyancy_forces(0.9, 1.2);
    assert!(close(buoy, 11.76, 1e-3));
    assert!(close(weight, 10.584, 1e-3));
    assert!(close(fluids::hydrostatic_pressure(1.0, 6.0), 58_800.0, 0.5));
    assert_eq!(fluids::format_newtons_1(2.345), "2.3N");
}

#[test]
fn optics_formulas() {
    assert_eq!(optics::refraction_angle(0.0), 0.0);
    let theta2 = optics::refraction_angle(30.0);
    assert!(close(theta2, 22.08, 0.05), "{}", theta2);
    for deg in [10.0_f32, 45.0, 80.0] {
        assert!(optics::refraction_angle(deg) < deg);
    }
    let path = optics::mirror_maze_path(
        Vec2::new(0.0, 300.0),
        45.0,
        &[100.0, 200.0],
        (0.0, 400.0),
        Vec2::new(400.0, 0.0),
    );
    assert_eq!(path.len(), 3);
    assert!(close(path[1].x, 100.0, 1e-4));
    assert!(close(path[1].y, 200.0, 1e-3));
    assert_eq!(path[2], Vec2::new(400.0, 0.0));
}

#[test]
fn circuit_formulas() {
    assert!(close(circuits::ohm_current(6.0, 20.0), 0.3, 1e-6));
    assert!(close(circuits::ohm_current(6.0, 0.0), 30.0, 1e-4));
    assert!(close(circuits::series_total(15.0, 30.0), 45.0, 1e-6));
    assert!(close(circuits::time_constant(6.0, 400.0), 2.4, 1e-5));
    assert!(circuits::fuse_overloaded(9.0, 2.0, 2.0));
    assert!(!circuits::fuse_overloaded(9.0, 15.0, 2.0));
    assert!(close(circuits::fuse_current(9.0, 15.0), 0.6, 1e-6));
    assert!(circuits::fuse_overloaded(9.0, 15.0, 0.5));
    let tau = 2.0;
    assert!(circuits::charge_level(tau, 0.5) < circuits::charge_level(tau, 3.0));
}

#[test]
fn coulomb_force_and_sign() {
    let f = electrostatics::coulomb_force(3.0, -2.0, 0.8);
    assert!(close(f, 0.0843, 1e-3), "{}", f);
    assert!(!electrostatics::repels(3.0, -2.0));
    assert!(electrostatics::repels(-1.0, -2.0));
    let p = Principle::lookup(PrincipleId::Coulomb).default_params();
    assert!(electrostatics::coulomb_details(&p).ends_with("(attract)"));
}

#[test]
fn wave_and_doppler_formulas() {
    let (front, back) = waves::doppler_shift(440.0, 20.0);
    assert!(close(front, 467.5, 0.01));
    assert!(close(back, 415.56, 0.01));
    assert!(front > 440.0 && back < 440.0);
    let (still_front, still_back) = waves::doppler_shift(440.0, 0.0);
    assert!(close(still_front, 440.0, 1e-3) && close(still_back, 440.0, 1e-3));
}

#[test]
fn heat_and_em_formulas() {
    assert!(close(heat::thermal_expansion_mm(12.0, 30.0), 0.36, 1e-4));
    assert!(close(electromagnetism::induced_emf(60.0, 0.8), 1.92, 1e-4));
    assert!(close(electromagnetism::lorentz_force(8.0, 0.5), 4.0, 1e-6));
}

#[test]
fn rounded_rect_radius_is_limited() {
    let mut d = DrawList::new();
    rounded_rect_path(&mut d, 0.0, 0.0, 20.0, 10.0, 50.0);
    let radii: Vec<f32> = d
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Arc { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(radii.len(), 4);
    assert!(radii.iter().all(|r| *r == 5.0));
}

#[test]
fn arrow_head_sits_at_tip() {
    let mut d = DrawList::new();
    arrow(&mut d, Vec2::ZERO, Vec2::new(100.0, 0.0), Color::ORANGE, 3.0);
    assert!(d.all_finite());
    let points: Vec<Vec2> = d
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert!(points.contains(&Vec2::new(100.0, 0.0)));
    let back = points
        .iter()
        .filter(|p| p.x < 100.0 && p.y != 0.0)
        .map(|p| 100.0 - p.x)
        .fold(0.0_f32, f32::max);
    assert!(close(back, ARROW_HEAD_LEN * (std::f32::consts::PI / 6.0).cos(), 1e-3));
}

#[test]
fn color_css_strings() {
    assert_eq!(Color::hex(0xf3f9ff).to_css(), "#f3f9ff");
    assert_eq!(Color::rgba(255, 0, 0, 0.5).to_css(), "rgba(255,0,0,0.500)");
    assert_eq!(Color::rgba(0, 0, 0, 7.0).a, 1.0);
    assert_eq!(Color::rgba(0, 0, 0, f32::NAN).a, 0.0);
}
