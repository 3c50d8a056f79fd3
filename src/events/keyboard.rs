use super::controls::Controls;
use crate::core::input::{is_text_entry, key_action, KeyAction};
use wasm_bindgen::JsCast;
use web_sys as web;

fn typing_in_field(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_text_entry(&el.tag_name()))
        .unwrap_or(false)
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, controls: &Controls) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || typing_in_field(ev) {
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    log::debug!("[keys] {:?}", action);
    match action {
        KeyAction::Next => controls.step(1),
        KeyAction::Previous => controls.step(-1),
        KeyAction::Reroll => controls.reroll_practice(),
        KeyAction::ToggleAudio => controls.toggle_audio(),
        KeyAction::Random => controls.select_random(),
        KeyAction::ToggleTextbook => controls.toggle_textbook(),
        KeyAction::CloseModal => controls.close_textbook(),
    }
    ev.prevent_default();
}

pub fn wire_global_keydown(controls: Controls) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &controls);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
