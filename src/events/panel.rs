use crate::constants::*;
use crate::dom;
use crate::overlay;
use animus_core::{SharedCoordinator, SoundKey};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// "Enable audio" / "Maybe later". `decided` stops the delayed prompt from
/// appearing once either button was used.
pub fn wire_prompt_buttons(
    document: &web::Document,
    coordinator: &SharedCoordinator,
    decided: &Rc<Cell<bool>>,
) {
    let audio_ok = coordinator.clone();
    let decided_ok = decided.clone();
    let doc_ok = document.clone();
    dom::add_click_listener(document, PROMPT_ENABLE_ID, move || {
        decided_ok.set(true);
        overlay::hide_prompt(&doc_ok);
        audio_ok.borrow_mut().grant_autoplay_permission();
        log::info!("[audio] permission granted");
    });

    let decided_later = decided.clone();
    let doc_later = document.clone();
    dom::add_click_listener(document, PROMPT_LATER_ID, move || {
        decided_later.set(true);
        overlay::hide_prompt(&doc_later);
    });
}

pub fn wire_audio_panel(document: &web::Document, coordinator: &SharedCoordinator) {
    let audio = coordinator.clone();
    let doc = document.clone();
    dom::add_click_listener(document, AUDIO_PANEL_TOGGLE_ID, move || {
        let open = overlay::toggle_audio_panel(&doc);
        let cue = if open { SoundKey::MenuOpen } else { SoundKey::MenuClose };
        audio.borrow_mut().play(cue);
    });

    let audio = coordinator.clone();
    dom::add_click_listener(document, AUDIO_TOGGLE_ID, move || {
        audio.borrow_mut().toggle_music();
    });

    let audio = coordinator.clone();
    dom::add_click_listener(document, AUDIO_PREV_ID, move || {
        audio.borrow_mut().previous_track();
    });

    let audio = coordinator.clone();
    dom::add_click_listener(document, AUDIO_NEXT_ID, move || {
        audio.borrow_mut().next_track();
    });

    let Some(slider) = document
        .get_element_by_id(AUDIO_VOLUME_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing #{}", AUDIO_VOLUME_ID);
        return;
    };
    let audio = coordinator.clone();
    let slider_in = slider.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let level = slider_in.value_as_number();
        if level.is_finite() {
            audio.borrow_mut().set_volume(level as f32);
        }
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Release all audio when the page goes away for good. A page parked in the
/// back/forward cache only pauses and picks up again on `pageshow`.
pub fn wire_page_lifecycle(coordinator: &SharedCoordinator) {
    let Some(wnd) = web::window() else {
        return;
    };

    let audio = coordinator.clone();
    let on_hide = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |ev: web::PageTransitionEvent| {
            log::info!("[page] hide persisted={}", ev.persisted());
            audio.borrow_mut().page_hidden(ev.persisted());
        },
    ) as Box<dyn FnMut(_)>);
    _ = wnd.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();

    let audio = coordinator.clone();
    let on_show = wasm_bindgen::closure::Closure::wrap(Box::new(
        move |ev: web::PageTransitionEvent| {
            audio.borrow_mut().page_shown(ev.persisted());
        },
    ) as Box<dyn FnMut(_)>);
    _ = wnd.add_event_listener_with_callback("pageshow", on_show.as_ref().unchecked_ref());
    on_show.forget();
}
