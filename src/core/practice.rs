//! Practice mini-game: drive a derived quantity toward a randomly chosen
//! target.
//!
//! A principle's target is picked lazily the first time it is evaluated and
//! then kept for the whole session, across principle switches, until it is
//! explicitly rerolled.

use super::catalog::PrincipleId;
use super::constants::{PRACTICE_ABS_BASE_TOL_MULT, PRACTICE_DIFF_BASE_TOL_MULT};
use super::params::ParamSnapshot;
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PracticeMode {
    /// Metric should land within tolerance of the chosen target.
    Absolute,
    /// Metric is itself a difference that should approach zero.
    DifferenceToZero,
}

#[derive(Clone, Copy, Debug)]
pub struct PracticeSpec {
    pub prompt: &'static str,
    pub unit: &'static str,
    /// Candidate targets; never empty.
    pub targets: &'static [f32],
    pub tolerance: f32,
    pub mode: PracticeMode,
    pub target_label: Option<&'static str>,
    pub metric: fn(&ParamSnapshot) -> f32,
    pub format: Option<fn(f32) -> String>,
}

impl PracticeSpec {
    pub fn format_value(&self, value: f32) -> String {
        match self.format {
            Some(f) => f(value),
            None => with_unit(format!("{:.2}", value), self.unit),
        }
    }

    pub fn target_display(&self, target: f32) -> String {
        match self.mode {
            PracticeMode::DifferenceToZero => self
                .target_label
                .map(str::to_owned)
                .unwrap_or_else(|| with_unit("≈0".to_owned(), self.unit)),
            PracticeMode::Absolute => match self.format {
                Some(f) => f(target),
                None => with_unit(format!("{}", target), self.unit),
            },
        }
    }
}

fn with_unit(value: String, unit: &str) -> String {
    if unit.is_empty() {
        value
    } else {
        format!("{} {}", value, unit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PracticeEvaluation {
    pub current: f32,
    pub distance: f32,
    pub ratio: f32,
    pub satisfied: bool,
}

/// Normalisation base for the progress ring. Always at least 1 in
/// difference mode and at least `4 * tolerance` otherwise.
pub fn progress_base(mode: PracticeMode, target: f32, tolerance: f32) -> f32 {
    match mode {
        PracticeMode::DifferenceToZero => (tolerance * PRACTICE_DIFF_BASE_TOL_MULT).max(1.0),
        PracticeMode::Absolute => target.abs().max(tolerance * PRACTICE_ABS_BASE_TOL_MULT),
    }
}

pub fn progress_ratio(mode: PracticeMode, distance: f32, target: f32, tolerance: f32) -> f32 {
    let base = progress_base(mode, target, tolerance);
    if base <= 0.0 || base.is_nan() || !distance.is_finite() {
        return 0.0;
    }
    (1.0 - distance / base).clamp(0.0, 1.0)
}

pub fn evaluate(spec: &PracticeSpec, target: f32, params: &ParamSnapshot) -> PracticeEvaluation {
    let current = (spec.metric)(params);
    let distance = match spec.mode {
        PracticeMode::DifferenceToZero => current.abs(),
        PracticeMode::Absolute => (current - target).abs(),
    };
    PracticeEvaluation {
        current,
        distance,
        ratio: progress_ratio(spec.mode, distance, target, spec.tolerance),
        satisfied: distance <= spec.tolerance,
    }
}

/// Everything the practice panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct PracticeView {
    pub prompt: String,
    pub target_display: String,
    pub current_display: String,
    pub diff_display: String,
    pub ratio: f32,
    pub percent: u32,
    pub satisfied: bool,
    pub status: String,
}

pub fn view(spec: &PracticeSpec, target: f32, params: &ParamSnapshot) -> PracticeView {
    let eval = evaluate(spec, target, params);
    let target_display = spec.target_display(target);
    let current_display = spec.format_value(eval.current);
    let diff_display = with_unit(format!("{:.2}", eval.distance), spec.unit);
    let status = if eval.satisfied {
        format!(
            "Done! Current {} meets the goal. Reroll for a new target.",
            current_display
        )
    } else {
        format!(
            "Current: {}, off by ≈{}. Keep adjusting the sliders.",
            current_display, diff_display
        )
    };
    PracticeView {
        prompt: format!("{} (target: {})", spec.prompt, target_display),
        target_display,
        current_display,
        diff_display,
        ratio: eval.ratio,
        percent: (eval.ratio * 100.0).round() as u32,
        satisfied: eval.satisfied,
        status,
    }
}

/// Session-scoped record of chosen targets.
pub struct PracticeBook {
    targets: FnvHashMap<PrincipleId, f32>,
    rng: StdRng,
}

impl PracticeBook {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            targets: FnvHashMap::default(),
            rng,
        }
    }

    /// The persisted target, if one has been chosen.
    pub fn target(&self, id: PrincipleId) -> Option<f32> {
        self.targets.get(&id).copied()
    }

    pub fn ensure_target(&mut self, id: PrincipleId, spec: &PracticeSpec) -> f32 {
        if let Some(t) = self.targets.get(&id) {
            return *t;
        }
        self.reroll(id, spec)
    }

    pub fn reroll(&mut self, id: PrincipleId, spec: &PracticeSpec) -> f32 {
        let target = spec.targets.choose(&mut self.rng).copied().unwrap_or(0.0);
        self.targets.insert(id, target);
        log::debug!("practice target for {} -> {}", id, target);
        target
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
