use animus_core::{is_text_entry, Extent, SectionElement};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Toggle a class on `<html>`; returns whether it is now present.
pub fn toggle_root_class(document: &web::Document, class: &str) -> bool {
    match document.document_element() {
        Some(root) => root.class_list().toggle(class).unwrap_or(false),
        None => false,
    }
}

/// Every element matching `selector`, skipping non-element nodes.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// (scroll top, document scroll height, viewport height)
pub fn scroll_metrics(document: &web::Document) -> (f64, f64, f64) {
    let top = scroll_y();
    let height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (top, height, viewport)
}

/// True when the event target takes typed input itself (form fields,
/// contenteditable), so page shortcuts must stay out of the way.
pub fn is_editable_target(ev: &web::Event) -> bool {
    let Some(el) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
        return false;
    };
    let editable = el
        .dyn_ref::<web::HtmlElement>()
        .is_some_and(|h| h.is_content_editable());
    is_text_entry(&el.tag_name(), editable)
}

/// A page section element measured live from the layout.
pub struct DomSection(pub web::HtmlElement);

impl SectionElement for DomSection {
    fn extent(&self) -> Option<Extent> {
        if !self.0.is_connected() {
            return None;
        }
        Some(Extent::new(
            self.0.offset_top() as f64,
            self.0.offset_height() as f64,
        ))
    }
}
