//! Map the active principle's state to a tone.

use super::catalog::{Principle, PrincipleId};
use super::constants::{
    to_rad, G, SIGNATURE_FREQ_FALLBACK, SIGNATURE_FREQ_MAX, SIGNATURE_FREQ_MIN,
    SIGNATURE_VOLUME_FALLBACK, SIGNATURE_VOLUME_MAX, SIGNATURE_VOLUME_MIN, TONE_FADE_SEC,
    TONE_RAMP_SEC,
};
use super::params::ParamSnapshot;
use super::scenes::{circuits, fluids, mechanics};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioSignature {
    pub frequency: f32,
    pub volume: f32,
}

/// Where the oscillator and gain should glide to, and how fast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneTarget {
    pub frequency: f32,
    pub gain: f32,
    pub ramp_sec: f64,
}

fn raw_signature(id: PrincipleId, p: &ParamSnapshot, time: f32) -> (f32, f32) {
    match id {
        PrincipleId::Newton => {
            let acc = mechanics::newton_metric(p);
            (180.0 + acc * 40.0, (acc / 10.0).clamp(0.05, 0.5))
        }
        PrincipleId::Ohm => {
            let current = circuits::ohm_metric(p);
            (160.0 + current * 120.0, (current / 4.0).clamp(0.05, 0.45))
        }
        PrincipleId::Series => {
            let current = circuits::series_current(p.get("voltage"), p.get("r1"), p.get("r2"));
            (140.0 + current * 100.0, (current / 3.0).clamp(0.05, 0.4))
        }
        PrincipleId::Capacitor => {
            let tau = circuits::capacitor_metric(p);
            (120.0 + 260.0 / tau.max(0.1), 0.08 + 0.05 * time.sin())
        }
        PrincipleId::Fuse => {
            let current = circuits::fuse_metric(p);
            let ratio = current / p.get("fuseRating");
            // a NaN ratio falls through to the volume fallback below
            let volume = if ratio.is_nan() {
                ratio
            } else {
                ratio.clamp(0.05, 0.5)
            };
            (220.0 + current * 60.0, volume)
        }
        PrincipleId::Reflection | PrincipleId::Refraction => (350.0 + p.get("angle") * 3.0, 0.08),
        PrincipleId::Buoyancy => (
            120.0 + p.get("density") * 40.0,
            0.07 + 0.03 * (time * 1.5).sin(),
        ),
        PrincipleId::Pressure => {
            let pressure = fluids::pressure_metric(p);
            (
                140.0 + pressure / 4000.0,
                0.08 + (pressure / 400_000.0).min(0.25),
            )
        }
        PrincipleId::Projectile => {
            let v = p.get("speed");
            let vy = v * to_rad(p.get("angle")).sin();
            let total = (vy * 2.0 / G).max(0.2);
            let t = time % total;
            let height = vy * t - 0.5 * G * t * t;
            (
                220.0 + height.max(0.0) * 5.0 + vy * 15.0,
                0.1 + (v / 40.0).min(0.3),
            )
        }
        PrincipleId::Circular => {
            let acc = mechanics::circular_metric(p);
            (180.0 + acc * 30.0, 0.06 + (acc / 20.0).min(0.3))
        }
        PrincipleId::Reaction => {
            let thrust = mechanics::reaction_thrust(p.get("pressure"));
            (220.0 + thrust, 0.08 + (thrust / 200.0).min(0.4))
        }
        _ => {
            let base = Principle::lookup(id)
                .params
                .first()
                .map(|spec| p.get(spec.id))
                .unwrap_or(1.0);
            (150.0 + base * 10.0, 0.07)
        }
    }
}

/// Tone for `id` at `time` seconds, always inside the playable range.
pub fn compute_signature(id: PrincipleId, p: &ParamSnapshot, time: f32) -> AudioSignature {
    let (frequency, volume) = raw_signature(id, p, time);
    let frequency = if frequency == 0.0 || !frequency.is_finite() {
        SIGNATURE_FREQ_FALLBACK
    } else {
        frequency
    };
    let volume = if volume == 0.0 || !volume.is_finite() {
        SIGNATURE_VOLUME_FALLBACK
    } else {
        volume
    };
    AudioSignature {
        frequency: frequency.clamp(SIGNATURE_FREQ_MIN, SIGNATURE_FREQ_MAX),
        volume: volume.clamp(SIGNATURE_VOLUME_MIN, SIGNATURE_VOLUME_MAX),
    }
}

pub fn tone_target(enabled: bool, sig: AudioSignature) -> ToneTarget {
    if enabled {
        ToneTarget {
            frequency: sig.frequency,
            gain: sig.volume,
            ramp_sec: TONE_RAMP_SEC,
        }
    } else {
        ToneTarget {
            frequency: sig.frequency,
            gain: 0.0,
            ramp_sec: TONE_FADE_SEC,
        }
    }
}
