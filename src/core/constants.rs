// Physical constants and audio tuning shared by the scenes, the signature
// mapper and the web frontend.

// Physics
pub const G: f32 = 9.8; // gravitational acceleration (m/s²)
pub const N_AIR: f32 = 1.0; // refractive index of air
pub const N_WATER: f32 = 1.33; // refractive index of water
pub const K_ELECTRO: f32 = 8.99e9; // Coulomb constant (N·m²/C²)
pub const SOUND_SPEED: f32 = 340.0; // speed of sound in air (m/s)

/// Smallest denominator any scene divides by.
pub const MIN_DENOMINATOR: f32 = 1e-3;

// Audio signature clamps
pub const SIGNATURE_FREQ_MIN: f32 = 60.0;
pub const SIGNATURE_FREQ_MAX: f32 = 1200.0;
pub const SIGNATURE_FREQ_FALLBACK: f32 = 220.0;
pub const SIGNATURE_VOLUME_MIN: f32 = 0.0;
pub const SIGNATURE_VOLUME_MAX: f32 = 0.6;
pub const SIGNATURE_VOLUME_FALLBACK: f32 = 0.05;

// Tone ramps (seconds)
pub const TONE_RAMP_SEC: f64 = 0.05; // glide toward a new signature
pub const TONE_FADE_SEC: f64 = 0.1; // fade out when audio is switched off

// Practice progress ring
pub const PRACTICE_DIFF_BASE_TOL_MULT: f32 = 3.0;
pub const PRACTICE_ABS_BASE_TOL_MULT: f32 = 4.0;

/// Floor `x` to [`MIN_DENOMINATOR`] before it is used as a divisor.
#[inline]
pub fn floor_denominator(x: f32) -> f32 {
    if x.is_finite() {
        x.max(MIN_DENOMINATOR)
    } else {
        MIN_DENOMINATOR
    }
}

#[inline]
pub fn to_rad(deg: f32) -> f32 {
    deg * std::f32::consts::PI / 180.0
}
