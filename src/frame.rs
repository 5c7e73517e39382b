use crate::constants::PROMPT_DELAY_MS;
use crate::dom;
use crate::events::SharedTracker;
use crate::overlay::{self, PanelSnapshot};
use animus_core::{sync_level, SharedCoordinator};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Delayed audio prompt for visitors who have not answered it yet.
pub struct PromptState {
    pub started: Instant,
    pub pending: bool,
    pub decided: Rc<Cell<bool>>,
}

impl PromptState {
    fn due(&self, now: Instant) -> bool {
        self.pending
            && !self.decided.get()
            && now - self.started >= Duration::from_millis(PROMPT_DELAY_MS)
    }
}

pub struct FrameContext {
    pub document: web::Document,
    pub coordinator: SharedCoordinator,
    pub tracker: SharedTracker,
    pub prompt: PromptState,
    pub last_panel: Option<PanelSnapshot>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();

        // At most one section recomputation per frame, however many
        // scroll events arrived.
        if self.tracker.borrow().has_pending() {
            let (top, height, viewport) = dom::scroll_metrics(&self.document);
            overlay::update_sync(&self.document, sync_level(top, height, viewport));
            self.tracker.borrow_mut().flush();
        }

        self.coordinator.borrow_mut().poll_transport();
        let panel = PanelSnapshot::of(&self.coordinator.borrow());
        if self.last_panel != Some(panel) {
            overlay::update_audio_panel(&self.document, &panel);
            self.last_panel = Some(panel);
        }

        if self.prompt.due(now) {
            self.prompt.pending = false;
            overlay::show_prompt(&self.document);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
