// Host-side tests for the audio signature mapping.

use physics_lab::core::catalog::{Principle, PrincipleId};
use physics_lab::core::constants::{
    SIGNATURE_FREQ_FALLBACK, SIGNATURE_FREQ_MAX, SIGNATURE_FREQ_MIN, SIGNATURE_VOLUME_FALLBACK,
    SIGNATURE_VOLUME_MAX, SIGNATURE_VOLUME_MIN,
};
use physics_lab::core::params::ParamSnapshot;
use physics_lab::core::signature::{compute_signature, tone_target};

fn defaults(id: PrincipleId) -> ParamSnapshot {
    Principle::lookup(id).default_params()
}

#[test]
fn newton_tone_tracks_acceleration() {
    let sig = compute_signature(PrincipleId::Newton, &defaults(PrincipleId::Newton), 0.0);
    assert!((sig.frequency - 300.0).abs() < 1e-3);
    assert!((sig.volume - 0.3).abs() < 1e-6);
}

#[test]
fn ohm_tone_uses_current() {
    let sig = compute_signature(PrincipleId::Ohm, &defaults(PrincipleId::Ohm), 0.0);
    assert!((sig.frequency - 196.0).abs() < 1e-3);
    assert!((sig.volume - 0.075).abs() < 1e-6);
}

#[test]
fn fallback_uses_first_parameter() {
    // lever: first parameter leftForce = 4
    let sig = compute_signature(PrincipleId::Lever, &defaults(PrincipleId::Lever), 0.0);
    assert!((sig.frequency - 190.0).abs() < 1e-3);
    assert!((sig.volume - 0.07).abs() < 1e-6);
}

#[test]
fn fuse_volume_follows_rating_ratio() {
    let p = defaults(PrincipleId::Fuse).with("fuseRating", 0.0);
    let sig = compute_signature(PrincipleId::Fuse, &p, 0.0);
    assert_eq!(sig.volume, 0.5);

    // 0 A through a 0 A fuse is an undefined ratio
    let idle = p.with("voltage", 0.0);
    let sig = compute_signature(PrincipleId::Fuse, &idle, 0.0);
    assert_eq!(sig.volume, SIGNATURE_VOLUME_FALLBACK);
    assert_eq!(sig.frequency, 220.0);
}

#[test]
fn empty_snapshot_is_clamped_into_range() {
    let empty = ParamSnapshot::default();
    for id in PrincipleId::ALL {
        for t in [0.0_f32, 0.7, 13.0, 250.0] {
            let sig = compute_signature(id, &empty, t);
            assert!(sig.frequency.is_finite() && sig.volume.is_finite(), "{}", id);
            assert!(
                (SIGNATURE_FREQ_MIN..=SIGNATURE_FREQ_MAX).contains(&sig.frequency),
                "{} freq {}",
                id,
                sig.frequency
            );
            assert!(
                (SIGNATURE_VOLUME_MIN..=SIGNATURE_VOLUME_MAX).contains(&sig.volume),
                "{} vol {}",
                id,
                sig.volume
            );
        }
    }
}

#[test]
fn defaults_stay_in_range_over_time() {
    for id in PrincipleId::ALL {
        let p = defaults(id);
        for step in 0..40 {
            let sig = compute_signature(id, &p, step as f32 * 0.37);
            assert!((SIGNATURE_FREQ_MIN..=SIGNATURE_FREQ_MAX).contains(&sig.frequency));
            assert!((SIGNATURE_VOLUME_MIN..=SIGNATURE_VOLUME_MAX).contains(&sig.volume));
        }
    }
}

#[test]
fn fallback_constants_are_in_range() {
    assert!((SIGNATURE_FREQ_MIN..=SIGNATURE_FREQ_MAX).contains(&SIGNATURE_FREQ_FALLBACK));
    assert!((SIGNATURE_VOLUME_MIN..=SIGNATURE_VOLUME_MAX).contains(&SIGNATURE_VOLUME_FALLBACK));
}

#[test]
fn disabled_tone_fades_out() {
    let sig = compute_signature(PrincipleId::Newton, &defaults(PrincipleId::Newton), 0.0);
    let on = tone_target(true, sig);
    assert_eq!(on.gain, sig.volume);
    assert_eq!(on.frequency, sig.frequency);
    assert!((on.ramp_sec - 0.05).abs() < 1e-9);

    let off = tone_target(false, sig);
    assert_eq!(off.gain, 0.0);
    assert!((off.ramp_sec - 0.1).abs() < 1e-9);
}
