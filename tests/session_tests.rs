// Host-side tests for the session controller.

use physics_lab::core::catalog::PrincipleId;
use physics_lab::core::{LabConfig, LabError, Session};

fn session_on(id: PrincipleId) -> Session {
    Session::new(LabConfig {
        initial: id,
        seed: Some(42),
    })
}

#[test]
fn starts_on_newton_by_default() {
    let s = Session::default();
    assert_eq!(s.active(), PrincipleId::Newton);
    assert_eq!(s.params().get("force"), 6.0);
    assert_eq!(s.params().get("mass"), 2.0);
    assert!(!s.audio_enabled());
}

#[test]
fn newton_detail_reports_acceleration() {
    let s = session_on(PrincipleId::Newton);
    assert_eq!(s.live_detail_text(), "Live acceleration a = 3.00 m/s²");
    assert!(s.summary_html().contains("<span class=\"detail-extra\">"));
}

#[test]
fn ohm_current_detail() {
    let s = session_on(PrincipleId::Ohm);
    assert_eq!(s.live_detail_text(), "Current I = 0.30 A");
}

#[test]
fn fuse_overload_is_reported() {
    let mut s = session_on(PrincipleId::Fuse);
    assert!(s.live_detail_text().contains("safe"));
    s.set_parameter(PrincipleId::Fuse, "load", 2.0).expect("load is a fuse parameter");
    let text = s.live_detail_text();
    assert!(text.contains("4.50"), "{}", text);
    assert!(text.contains("fuse blows"), "{}", text);
}

#[test]
fn buoyancy_practice_reaches_neutral() {
    let mut s = session_on(PrincipleId::Buoyancy);
    let before = s.practice_state().expect("buoyancy has practice");
    assert!(!before.satisfied);
    s.set_parameter(PrincipleId::Buoyancy, "density", 1.0)
        .expect("density is a buoyancy parameter");
    let after = s.practice_state().expect("buoyancy has practice");
    assert!(after.satisfied);
    assert_eq!(after.percent, 100);
}

#[test]
fn set_parameter_clamps_and_returns_stored_value() {
    let mut s = session_on(PrincipleId::Newton);
    assert_eq!(s.set_parameter(PrincipleId::Newton, "force", 99.0), Ok(10.0));
    assert_eq!(s.params().get("force"), 10.0);
    assert_eq!(s.set_parameter(PrincipleId::Newton, "mass", -1.0), Ok(1.0));
    assert_eq!(
        s.set_parameter(PrincipleId::Newton, "force", f32::INFINITY),
        Ok(10.0)
    );
}

#[test]
fn set_parameter_errors() {
    let mut s = session_on(PrincipleId::Newton);
    assert_eq!(
        s.set_parameter(PrincipleId::Ohm, "voltage", 3.0),
        Err(LabError::InactivePrinciple {
            requested: "ohm",
            active: "newton",
        })
    );
    assert!(matches!(
        s.set_parameter(PrincipleId::Newton, "voltage", 3.0),
        Err(LabError::UnknownParameter { .. })
    ));
    assert!(matches!(
        s.set_parameter(PrincipleId::Newton, "force", f32::NAN),
        Err(LabError::InvalidValue { .. })
    ));
    assert_eq!(s.params().get("force"), 6.0);
}

#[test]
fn text_entry_parses_or_rejects() {
    let mut s = session_on(PrincipleId::Newton);
    assert_eq!(
        s.set_parameter_text(PrincipleId::Newton, "force", " 7.5 "),
        Ok(7.5)
    );
    assert!(matches!(
        s.set_parameter_text(PrincipleId::Newton, "force", "7."),
        Ok(_)
    ));
    assert!(matches!(
        s.set_parameter_text(PrincipleId::Newton, "force", ""),
        Err(LabError::InvalidValue { .. })
    ));
    assert!(matches!(
        s.set_parameter_text(PrincipleId::Newton, "force", "abc"),
        Err(LabError::InvalidValue { .. })
    ));
}

#[test]
fn selecting_resets_params_but_keeps_targets() {
    let mut s = session_on(PrincipleId::Newton);
    s.set_parameter(PrincipleId::Newton, "force", 9.0).expect("valid");
    let view = s.practice_state().expect("newton has practice");
    let target = s.practice_target(PrincipleId::Newton).expect("target chosen");
    assert!(view.prompt.contains("target:"));

    s.select_principle(PrincipleId::Ohm);
    assert_eq!(s.active(), PrincipleId::Ohm);
    assert_eq!(s.params().get("voltage"), 6.0);
    assert!(!s.params().contains("force"));

    s.select_principle(PrincipleId::Newton);
    assert_eq!(s.params().get("force"), 6.0);
    assert_eq!(s.practice_target(PrincipleId::Newton), Some(target));
    s.practice_state();
    assert_eq!(s.practice_target(PrincipleId::Newton), Some(target));
}

#[test]
fn reroll_picks_from_candidates() {
    let mut s = session_on(PrincipleId::Newton);
    let candidates = [1.5_f32, 2.0, 2.5, 3.2, 3.8];
    for _ in 0..8 {
        let t = s.reroll_practice_target().expect("newton has practice");
        assert!(candidates.contains(&t));
        assert_eq!(s.practice_target(PrincipleId::Newton), Some(t));
    }
}

#[test]
fn step_wraps_around_catalog() {
    let mut s = session_on(PrincipleId::Newton);
    assert_eq!(s.step_principle(-1), PrincipleId::Induction);
    assert_eq!(s.step_principle(1), PrincipleId::Newton);
    assert_eq!(s.step_principle(1), PrincipleId::Reaction);
}

#[test]
fn random_selection_is_a_catalog_entry() {
    let mut s = session_on(PrincipleId::Newton);
    for _ in 0..10 {
        let id = s.select_random();
        assert_eq!(s.active(), id);
        assert_eq!(s.params().len(), s.principle().params.len());
    }
}

#[test]
fn clock_feeds_animation_time() {
    let mut s = session_on(PrincipleId::Wave);
    s.advance_clock(1500.0);
    assert_eq!(s.elapsed_seconds(), 1.5);
    s.advance_clock(900.0);
    assert_eq!(s.elapsed_seconds(), 1.5);
    s.advance_clock(f64::NAN);
    assert_eq!(s.elapsed_seconds(), 1.5);
}

#[test]
fn pane_html_contains_formula_and_lists() {
    let s = session_on(PrincipleId::Newton);
    let formula = s.formula_html();
    assert!(formula.starts_with("<div class=\"formula-main math-text\">F = m &times; a</div>"));
    assert!(formula.contains("<ul class=\"formula-extras\">"));
    let summary = s.summary_html();
    assert!(summary.starts_with("<p class=\"summary-main\">"));
    assert!(summary.contains("<ul class=\"teach-list\"><li>"));
}

#[test]
fn textbook_and_tips() {
    let s = session_on(PrincipleId::Reaction);
    let html = s.textbook_html();
    assert!(html.contains("<strong>Concept:</strong>"));
    assert!(html.contains("<ul><li>"));
    let tips = s.teaching_tips();
    assert!(tips.starts_with("1. "));
    assert!(tips.contains("\n2. "));
}

#[test]
fn audio_flag_toggles() {
    let mut s = session_on(PrincipleId::Newton);
    s.set_audio_enabled(true);
    assert!(s.audio_enabled());
    let sig = s.audio_signature();
    assert!(sig.frequency >= 60.0 && sig.frequency <= 1200.0);
    s.set_audio_enabled(false);
    assert!(!s.audio_enabled());
}

#[test]
fn render_frame_starts_with_background() {
    let s = session_on(PrincipleId::Capacitor);
    let list = s.render_frame(640.0, 360.0, 2.0);
    assert!(list.len() > 3);
    assert!(list.all_finite());
}

#[test]
fn menu_lists_every_principle() {
    let s = Session::default();
    let entries = s.list_principles();
    assert_eq!(entries.len(), PrincipleId::COUNT);
    assert_eq!(entries[0].id, PrincipleId::Newton);
    assert_eq!(entries[0].name, "Newton's second law");
}
