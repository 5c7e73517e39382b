use crate::constants::{CLICKABLE_SELECTOR, SOUND_ATTR};
use animus_core::{HoverLatch, SharedCoordinator, SoundKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub coordinator: SharedCoordinator,
    pub hover: Rc<RefCell<HoverLatch>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_sound_clicks(&w);
}

fn event_element(ev: &web::Event) -> Option<web::Element> {
    ev.target().and_then(|t| t.dyn_into::<web::Element>().ok())
}

fn closest(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.closest(selector).ok().flatten()
}

// Hover cue when the pointer first lands on something clickable.
fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let over = event_element(&ev)
            .and_then(|el| closest(&el, CLICKABLE_SELECTOR))
            .is_some();
        if w.hover.borrow_mut().update(over) {
            w.coordinator.borrow_mut().play(SoundKey::Hover);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Every press clicks, and counts as the user gesture autoplay waits for.
fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut audio = w.coordinator.borrow_mut();
        audio.notify_user_gesture();
        audio.play(SoundKey::Click);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Markup opts into extra cues declaratively: `<button data-sound="marker">`.
fn wire_sound_clicks(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let selector = format!("[{}]", SOUND_ATTR);
        let Some(el) = event_element(&ev).and_then(|el| closest(&el, &selector)) else {
            return;
        };
        if let Some(name) = el.get_attribute(SOUND_ATTR) {
            w.coordinator.borrow_mut().play_effect(&name);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
