use crate::audio::ToneEngine;
use crate::canvas;
use crate::core::signature::tone_target;
use crate::core::Session;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub tone: Rc<RefCell<ToneEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    /// One animation tick at host time `timestamp_ms`.
    pub fn frame(&mut self, timestamp_ms: f64) {
        dom::sync_canvas_backing_size(&self.canvas);
        let (css_w, css_h, dpr) = dom::canvas_css_size(&self.canvas);

        let (list, target) = {
            let mut session = self.session.borrow_mut();
            session.advance_clock(timestamp_ms);
            let seconds = session.elapsed_seconds();
            let list = session.render_frame(css_w as f32, css_h as f32, seconds);
            let target = tone_target(session.audio_enabled(), session.audio_signature());
            (list, target)
        };

        canvas::replay(&self.ctx, &list, dpr);
        self.tone.borrow().apply(&target);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        frame_ctx.borrow_mut().frame(timestamp_ms);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
