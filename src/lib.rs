#![cfg(target_arch = "wasm32")]
use animus_core::{
    AudioConfig, HoverLatch, HudState, Section, SectionTracker, SharedCoordinator, SoundKey,
    TrackerConfig,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;

use dom::DomSection;
use events::SharedTracker;

/// Register every section element present in the layout. A section id with
/// no element is a markup bug; it is logged and left out.
fn build_tracker(document: &web::Document) -> SharedTracker {
    let elements = Section::ALL.iter().filter_map(|&section| {
        let el = document
            .get_element_by_id(section.id())
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if el.is_none() {
            log::warn!("[sections] no element for #{}", section.id());
        }
        el.map(|el| (section, DomSection(el)))
    });
    Rc::new(RefCell::new(SectionTracker::new(
        TrackerConfig::default(),
        elements,
    )))
}

// Navbar highlight, HUD readout and HUD log all follow the one tracker.
fn wire_section_consumers(
    document: &web::Document,
    tracker: &SharedTracker,
    coordinator: &SharedCoordinator,
) {
    let hud = Rc::new(RefCell::new(HudState::default()));
    let mut t = tracker.borrow_mut();

    let doc_nav = document.clone();
    t.subscribe(move |change| overlay::highlight_nav(&doc_nav, change.current));

    let doc_hud = document.clone();
    let hud_loc = hud.clone();
    t.subscribe(move |change| {
        hud_loc.borrow_mut().set_location(change.current);
        overlay::render_hud(&doc_hud, &hud_loc.borrow());
    });

    let doc_log = document.clone();
    let audio = coordinator.clone();
    t.on_entered(move |entered| {
        hud.borrow_mut().enter(entered.section);
        overlay::render_hud(&doc_log, &hud.borrow());
        audio.borrow_mut().play(SoundKey::Notification);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("animus-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // One coordinator for the whole page, handed to every consumer.
    let coordinator = audio::build_coordinator(AudioConfig::default());
    let permitted = coordinator.borrow().autoplay_permitted();
    if permitted {
        coordinator.borrow_mut().start_music_playback();
    }

    let tracker = build_tracker(&document);
    wire_section_consumers(&document, &tracker, &coordinator);
    tracker.borrow_mut().observe(dom::scroll_y());
    let (top, height, viewport) = dom::scroll_metrics(&document);
    overlay::update_sync(&document, animus_core::sync_level(top, height, viewport));
    events::wire_scroll(&tracker);
    events::wire_nav_links(&document);

    let decided = Rc::new(Cell::new(false));
    events::wire_prompt_buttons(&document, &coordinator, &decided);
    events::wire_audio_panel(&document, &coordinator);
    events::wire_page_lifecycle(&coordinator);
    events::wire_global_keydown(coordinator.clone(), document.clone());
    events::wire_pointer_handlers(events::PointerWiring {
        coordinator: coordinator.clone(),
        hover: Rc::new(RefCell::new(HoverLatch::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        coordinator,
        tracker,
        prompt: frame::PromptState {
            started: Instant::now(),
            pending: !permitted,
            decided,
        },
        last_panel: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
