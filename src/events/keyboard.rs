use crate::constants::EAGLE_VISION_CLASS;
use crate::dom;
use animus_core::constants::VOLUME_STEP;
use animus_core::{key_action, KeyAction, SharedCoordinator, SoundKey};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    coordinator: &SharedCoordinator,
    document: &web::Document,
) {
    coordinator.borrow_mut().notify_user_gesture();
    // leave browser shortcuts (zoom, tab switching) alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    if dom::is_editable_target(ev) {
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    let mut audio = coordinator.borrow_mut();
    match action {
        KeyAction::ToggleEagleVision => {
            let on = dom::toggle_root_class(document, EAGLE_VISION_CLASS);
            if on {
                audio.play(SoundKey::Eagle);
            }
            log::info!("[keys] eagle vision={}", on);
        }
        KeyAction::ToggleMusic => audio.toggle_music(),
        KeyAction::NextTrack => audio.next_track(),
        KeyAction::PreviousTrack => audio.previous_track(),
        KeyAction::VolumeUp => audio.adjust_volume(VOLUME_STEP),
        KeyAction::VolumeDown => audio.adjust_volume(-VOLUME_STEP),
    }
}

pub fn wire_global_keydown(coordinator: SharedCoordinator, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &coordinator, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
