use crate::audio::ToneEngine;
use crate::constants::*;
use crate::core::catalog::{PrincipleId, LEARNING_PATH};
use crate::core::{LabError, Session};
use crate::{dom, overlay, panels};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles shared by every UI callback.
#[derive(Clone)]
pub struct Controls {
    pub document: web::Document,
    pub session: Rc<RefCell<Session>>,
    pub tone: Rc<RefCell<ToneEngine>>,
}

impl Controls {
    fn refresh_after_select(&self) {
        let mut session = self.session.borrow_mut();
        panels::refresh_all(&self.document, &mut session);
        if overlay::is_open(&self.document) {
            overlay::show(&self.document, &session.textbook_html());
        }
    }

    pub fn select(&self, id: PrincipleId) {
        self.session.borrow_mut().select_principle(id);
        self.refresh_after_select();
    }

    pub fn select_random(&self) {
        self.session.borrow_mut().select_random();
        self.refresh_after_select();
        flash_active(&self.document, RANDOM_BUTTON_ID);
    }

    pub fn step(&self, delta: i32) {
        self.session.borrow_mut().step_principle(delta);
        self.refresh_after_select();
    }

    pub fn reroll_practice(&self) {
        let mut session = self.session.borrow_mut();
        _ = session.reroll_practice_target();
        panels::refresh_practice(&self.document, &mut session);
    }

    pub fn toggle_audio(&self) {
        let enabled = {
            let mut session = self.session.borrow_mut();
            let next = !session.audio_enabled();
            session.set_audio_enabled(next);
            next
        };
        if enabled {
            self.tone.borrow_mut().enable();
        }
        panels::refresh_sound_button(&self.document, enabled);
    }

    pub fn toggle_textbook(&self) {
        let html = self.session.borrow().textbook_html();
        overlay::toggle(&self.document, &html);
    }

    pub fn open_textbook(&self) {
        let html = self.session.borrow().textbook_html();
        overlay::show(&self.document, &html);
    }

    pub fn close_textbook(&self) {
        overlay::hide(&self.document);
    }

    pub fn explain_practice(&self) {
        let tips = self.session.borrow().teaching_tips();
        if let Some(window) = web::window() {
            _ = window.alert_with_message(&format!("Teaching tips\n\n{}", tips));
        }
    }

    /// A range or number input under the slider panel changed.
    fn parameter_input(&self, input: &web::HtmlInputElement) {
        let Some(param) = input.get_attribute(panels::DATA_PARAM) else {
            return;
        };
        let mut session = self.session.borrow_mut();
        let active = session.active();
        match session.set_parameter_text(active, &param, &input.value()) {
            Ok(stored) => {
                if let Some(spec) = session.principle().param(&param) {
                    panels::sync_slider(&self.document, spec, stored);
                }
                panels::refresh_info(&self.document, &mut session);
            }
            // half-typed numbers are ignored until they parse
            Err(LabError::InvalidValue { .. }) => {}
            Err(e) => log::warn!("parameter input rejected: {}", e),
        }
    }
}

fn flash_active(document: &web::Document, element_id: &str) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    _ = el.class_list().add_1("active");
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        _ = el.class_list().remove_1("active");
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        RANDOM_FLASH_MS,
    );
}

fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

/// Closest ancestor-or-self of the event target carrying `attr`, and its value.
fn marked_target(ev: &web::Event, attr: &str) -> Option<String> {
    event_element(ev)?
        .closest(&format!("[{}]", attr))
        .ok()
        .flatten()?
        .get_attribute(attr)
}

/// Wire navigation, slider, practice and modal controls. Containers whose
/// content is rebuilt use a single delegated listener.
pub fn wire_controls(controls: &Controls) -> anyhow::Result<()> {
    let document = &controls.document;

    let outline = document
        .get_element_by_id(OUTLINE_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", OUTLINE_ID))?;
    let c = controls.clone();
    dom::listen(&outline, "click", move |ev: web::Event| {
        if let Some(id) = marked_target(&ev, panels::DATA_PRINCIPLE) {
            match id.parse::<PrincipleId>() {
                Ok(id) => c.select(id),
                Err(e) => log::warn!("{}", e),
            }
            return;
        }
        let header = event_element(&ev)
            .and_then(|el| el.closest(".outline-group-header").ok().flatten());
        if let Some(group) = header.and_then(|h| h.parent_element()) {
            _ = group.class_list().toggle("collapsed");
        }
    });

    if let Some(path) = document.get_element_by_id(LEARNING_PATH_ID) {
        let c = controls.clone();
        dom::listen(&path, "click", move |ev: web::Event| {
            let Some(node_id) = marked_target(&ev, panels::DATA_PATH_NODE) else {
                return;
            };
            if let Some(first) = LEARNING_PATH
                .iter()
                .find(|n| n.id == node_id)
                .and_then(|n| n.first())
            {
                c.select(first);
            }
        });
    }

    let sliders = document
        .get_element_by_id(SLIDERS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SLIDERS_ID))?;
    let c = controls.clone();
    dom::listen(&sliders, "input", move |ev: web::Event| {
        if let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        {
            c.parameter_input(&input);
        }
    });

    let c = controls.clone();
    dom::add_click_listener(document, RANDOM_BUTTON_ID, move || c.select_random());
    let c = controls.clone();
    dom::add_click_listener(document, SOUND_BUTTON_ID, move || c.toggle_audio());
    let c = controls.clone();
    dom::add_click_listener(document, PRACTICE_RESET_ID, move || c.reroll_practice());
    let c = controls.clone();
    dom::add_click_listener(document, PRACTICE_EXPLAIN_ID, move || c.explain_practice());
    let c = controls.clone();
    dom::add_click_listener(document, TEXTBOOK_BUTTON_ID, move || c.open_textbook());
    let c = controls.clone();
    dom::add_click_listener(document, TEXTBOOK_CLOSE_ID, move || c.close_textbook());

    if let Some(modal) = document.get_element_by_id(TEXTBOOK_MODAL_ID) {
        let c = controls.clone();
        dom::listen(&modal, "click", move |ev: web::Event| {
            // only clicks on the backdrop itself, not the dialog body
            if event_element(&ev)
                .map(|el| el.id() == TEXTBOOK_MODAL_ID)
                .unwrap_or(false)
            {
                c.close_textbook();
            }
        });
    }
    Ok(())
}
