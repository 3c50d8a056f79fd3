//! The controller the UI shell talks to.
//!
//! A `Session` owns all mutable lab state: the active principle, its
//! parameter snapshot, the practice targets, the animation clock and the
//! audio flag. Everything shown on screen is derived from it on demand.

use super::catalog::{self, Category, Principle, PrincipleId, PRINCIPLES};
use super::clock::AnimationClock;
use super::draw::{Color, DrawList};
use super::error::{LabError, LabResult};
use super::formula::format_formula;
use super::params::ParamSnapshot;
use super::practice::{self, PracticeBook, PracticeView};
use super::signature::{compute_signature, AudioSignature};
use rand::seq::SliceRandom;

/// Canvas background painted under every scene.
pub const BACKGROUND: Color = Color::hex(0xf3f9ff);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabConfig {
    /// Principle shown on start-up.
    pub initial: PrincipleId,
    /// Fixed seed for practice targets and random picks; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            initial: PrincipleId::Newton,
            seed: None,
        }
    }
}

/// Menu entry for one principle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrincipleEntry {
    pub id: PrincipleId,
    pub name: &'static str,
    pub category: Category,
}

/// Render one principle into a fresh draw list: background first, then the
/// scene.
pub fn render_principle(
    id: PrincipleId,
    width: f32,
    height: f32,
    params: &ParamSnapshot,
    seconds: f32,
) -> DrawList {
    let mut d = DrawList::new();
    d.clear_rect(0.0, 0.0, width, height);
    d.fill_style(BACKGROUND);
    d.fill_rect(0.0, 0.0, width, height);
    (Principle::lookup(id).render)(&mut d, width, height, params, seconds);
    d
}

pub struct Session {
    active: PrincipleId,
    params: ParamSnapshot,
    practice: PracticeBook,
    clock: AnimationClock,
    audio_enabled: bool,
}

impl Session {
    pub fn new(config: LabConfig) -> Self {
        let principle = Principle::lookup(config.initial);
        log::info!("lab session starting on {}", config.initial);
        Self {
            active: config.initial,
            params: principle.default_params(),
            practice: PracticeBook::new(config.seed),
            clock: AnimationClock::new(),
            audio_enabled: false,
        }
    }

    pub fn list_principles(&self) -> Vec<PrincipleEntry> {
        PRINCIPLES
            .iter()
            .map(|p| PrincipleEntry {
                id: p.id,
                name: p.name,
                category: p.category,
            })
            .collect()
    }

    pub fn outline(&self) -> Vec<(Category, Vec<PrincipleId>)> {
        catalog::outline()
    }

    pub fn active(&self) -> PrincipleId {
        self.active
    }

    pub fn principle(&self) -> &'static Principle {
        Principle::lookup(self.active)
    }

    pub fn params(&self) -> &ParamSnapshot {
        &self.params
    }

    /// Activate `id` with its default parameters. Practice targets are kept.
    pub fn select_principle(&mut self, id: PrincipleId) {
        let principle = Principle::lookup(id);
        self.active = id;
        self.params = principle.default_params();
        log::info!("selected principle {} ({})", id, principle.name);
    }

    pub fn select_random(&mut self) -> PrincipleId {
        let pick = PrincipleId::ALL
            .choose(self.practice.rng())
            .copied()
            .unwrap_or(self.active);
        self.select_principle(pick);
        pick
    }

    /// Move `delta` places through the catalog, wrapping at both ends.
    pub fn step_principle(&mut self, delta: i32) -> PrincipleId {
        let next = self.active.step(delta);
        self.select_principle(next);
        next
    }

    /// Store a clamped value for `param` of the active principle and return
    /// what was stored.
    pub fn set_parameter(
        &mut self,
        principle: PrincipleId,
        param: &str,
        value: f32,
    ) -> LabResult<f32> {
        if principle != self.active {
            return Err(LabError::InactivePrinciple {
                requested: principle.as_str(),
                active: self.active.as_str(),
            });
        }
        let spec = self
            .principle()
            .param(param)
            .ok_or_else(|| LabError::UnknownParameter {
                principle: principle.as_str(),
                param: param.to_owned(),
            })?;
        if value.is_nan() {
            return Err(LabError::InvalidValue {
                param: param.to_owned(),
            });
        }
        let stored = spec.clamp(value);
        self.params.set(spec.id, stored);
        log::debug!("{}.{} = {}", principle, spec.id, stored);
        Ok(stored)
    }

    /// Like [`Session::set_parameter`] for free-text numeric entry.
    pub fn set_parameter_text(
        &mut self,
        principle: PrincipleId,
        param: &str,
        text: &str,
    ) -> LabResult<f32> {
        let value: f32 = text
            .trim()
            .parse()
            .map_err(|_| LabError::InvalidValue {
                param: param.to_owned(),
            })?;
        self.set_parameter(principle, param, value)
    }

    pub fn advance_clock(&mut self, timestamp_ms: f64) {
        self.clock.advance(timestamp_ms);
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.clock.seconds()
    }

    pub fn render_frame(&self, width: f32, height: f32, seconds: f32) -> DrawList {
        render_principle(self.active, width, height, &self.params, seconds)
    }

    pub fn audio_signature(&self) -> AudioSignature {
        compute_signature(self.active, &self.params, self.clock.seconds())
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
        log::info!("audio {}", if enabled { "on" } else { "off" });
    }

    pub fn live_detail_text(&self) -> String {
        (self.principle().details)(&self.params)
    }

    pub fn formatted_formula(&self) -> String {
        format_formula(self.principle().formula)
    }

    /// Summary pane: summary, teaching points, live detail.
    pub fn summary_html(&self) -> String {
        let p = self.principle();
        let mut html = format!("<p class=\"summary-main\">{}</p>", p.summary);
        html.push_str(&list_html("teach-list", p.teaching_points));
        let detail = self.live_detail_text();
        if !detail.is_empty() {
            html.push_str(&format!("<span class=\"detail-extra\">{}</span>", detail));
        }
        html
    }

    /// Formula pane: rendered formula, explanation, worked steps.
    pub fn formula_html(&self) -> String {
        let p = self.principle();
        let mut html = format!(
            "<div class=\"formula-main math-text\">{}</div><p class=\"formula-detail\">{}</p>",
            self.formatted_formula(),
            p.formula_detail
        );
        if let Some(steps) = p.formula_steps {
            html.push_str(&list_html("formula-extras", steps));
        }
        html
    }

    pub fn textbook_html(&self) -> String {
        let p = self.principle();
        let mut html = String::new();
        if !p.summary.is_empty() {
            html.push_str(&format!("<p><strong>Concept:</strong> {}</p>", p.summary));
        }
        if !p.formula_detail.is_empty() {
            html.push_str(&format!(
                "<p><strong>Formula notes:</strong> {}</p>",
                p.formula_detail
            ));
        }
        if !p.teaching_points.is_empty() {
            html.push_str("<p><strong>Textbook points:</strong></p><ul>");
            for point in p.teaching_points {
                html.push_str(&format!("<li>{}</li>", point));
            }
            html.push_str("</ul>");
        }
        if let Some(text) = p.textbook {
            html.push_str(&format!("<p>{}</p>", text));
        }
        if html.is_empty() {
            html.push_str("<p>No textbook notes for this topic yet.</p>");
        }
        html
    }

    /// Numbered teaching points, or the summary when there are none.
    pub fn teaching_tips(&self) -> String {
        let p = self.principle();
        if p.teaching_points.is_empty() {
            return p.summary.to_owned();
        }
        p.teaching_points
            .iter()
            .enumerate()
            .map(|(i, t)| format!("{}. {}", i + 1, t))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Practice panel state; picks a target on first use.
    pub fn practice_state(&mut self) -> Option<PracticeView> {
        let spec = self.principle().practice.as_ref()?;
        let target = self.practice.ensure_target(self.active, spec);
        Some(practice::view(spec, target, &self.params))
    }

    /// The persisted target for `id`, if one has been chosen.
    pub fn practice_target(&self, id: PrincipleId) -> Option<f32> {
        self.practice.target(id)
    }

    pub fn reroll_practice_target(&mut self) -> Option<f32> {
        let spec = self.principle().practice.as_ref()?;
        Some(self.practice.reroll(self.active, spec))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}

fn list_html(class: &str, items: &[&str]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = format!("<ul class=\"{}\">", class);
    for item in items {
        html.push_str(&format!("<li>{}</li>", item));
    }
    html.push_str("</ul>");
    html
}
