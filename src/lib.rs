//! Interactive physics principle lab.
//!
//! `core` holds the catalog, scenes, practice scoring, audio signatures and
//! the session controller and builds on any target. The remaining modules
//! are the browser front-end: DOM panels, Canvas2D replay, a WebAudio tone
//! and the animation loop.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod panels;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::audio::ToneEngine;
    use crate::constants::CANVAS_ID;
    use crate::core::{LabConfig, Session};
    use crate::{canvas, dom, events, frame, panels};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
        dom::sync_canvas_backing_size(canvas);
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
        }
        resize_closure.forget();
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("physics-lab starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas_el = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
        let canvas: web::HtmlCanvasElement = canvas_el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let ctx = canvas::context_2d(&canvas)?;

        // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
        wire_canvas_resize(&canvas);

        let session = Rc::new(RefCell::new(Session::new(LabConfig::default())));
        let tone = Rc::new(RefCell::new(ToneEngine::new()));

        {
            let mut s = session.borrow_mut();
            panels::render_outline(&document, &s)?;
            panels::render_learning_path(&document)?;
            panels::refresh_all(&document, &mut s);
            panels::refresh_sound_button(&document, s.audio_enabled());
        }

        let controls = events::Controls {
            document: document.clone(),
            session: session.clone(),
            tone: tone.clone(),
        };
        events::wire_controls(&controls)?;
        events::wire_global_keydown(controls);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            session,
            tone,
            canvas,
            ctx,
        }));
        frame::start_loop(frame_ctx);
        log::info!("physics-lab ready");
        Ok(())
    }
}
