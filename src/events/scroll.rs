use crate::constants::SECTION_ATTR;
use crate::dom::{self, DomSection};
use animus_core::{Section, SectionTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedTracker = Rc<RefCell<SectionTracker<Section, DomSection>>>;

/// Scroll events only record the offset; the frame loop does the work.
pub fn wire_scroll(tracker: &SharedTracker) {
    let tracker = tracker.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        tracker.borrow_mut().queue_scroll(dom::scroll_y());
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Navbar links smooth-scroll to their section. The click cue comes from the
/// global pointerdown handler.
pub fn wire_nav_links(document: &web::Document) {
    for section in Section::ALL {
        let selector = format!("[{}=\"{}\"]", SECTION_ATTR, section.id());
        for link in dom::query_all(document, &selector) {
            let doc = document.clone();
            let closure =
                wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
                    ev.prevent_default();
                    if let Some(target) = doc.get_element_by_id(section.id()) {
                        let opts = web::ScrollIntoViewOptions::new();
                        opts.set_behavior(web::ScrollBehavior::Smooth);
                        target.scroll_into_view_with_scroll_into_view_options(&opts);
                    }
                }) as Box<dyn FnMut(_)>);
            _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
