use crate::constants::*;
use crate::dom;
use animus_core::{format_coordinates, AudioCoordinator, HudState, Section};
use web_sys as web;

#[inline]
pub fn show_prompt(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PROMPT_ID) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_prompt(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PROMPT_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Mark the navbar link(s) of the current section as active.
pub fn highlight_nav(document: &web::Document, current: Option<Section>) {
    for section in Section::ALL {
        let selector = format!("[{}=\"{}\"]", SECTION_ATTR, section.id());
        for el in dom::query_all(document, &selector) {
            dom::set_class(&el, ACTIVE_CLASS, current == Some(section));
        }
    }
}

pub fn render_hud(document: &web::Document, hud: &HudState) {
    if let Some(el) = document.get_element_by_id(HUD_LOCATION_ID) {
        dom::set_class(&el, HIDDEN_CLASS, hud.location().is_none());
    }
    if let Some(section) = hud.location() {
        dom::set_text(document, HUD_LOCATION_NAME_ID, section.hud_name());
        dom::set_text(
            document,
            HUD_COORDINATES_ID,
            &format_coordinates(section.coordinates()),
        );
    }
    if let Some(el) = document.get_element_by_id(HUD_LOG_ID) {
        let mut html = String::new();
        for (i, line) in hud.log().iter_newest_first().enumerate() {
            let class = if i == 0 { "hud-line latest" } else { "hud-line" };
            html.push_str(&format!("<div class='{}'>{}</div>", class, line));
        }
        el.set_inner_html(&html);
    }
}

pub fn update_sync(document: &web::Document, level: f64) {
    if let Some(el) = document.get_element_by_id(SYNC_BAR_ID) {
        _ = el.set_attribute("style", &format!("width:{:.2}%", level));
    }
    dom::set_text(
        document,
        SYNC_PERCENT_ID,
        &format!("SYNC: {}%", level.round() as i32),
    );
}

/// What the audio panel currently shows; re-rendered only when it changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSnapshot {
    pub playing: bool,
    pub track: usize,
    pub track_count: usize,
    pub volume: f32,
}

impl PanelSnapshot {
    pub fn of(coordinator: &AudioCoordinator) -> Self {
        Self {
            playing: coordinator.is_music_playing(),
            track: coordinator.current_track(),
            track_count: coordinator.track_count(),
            volume: coordinator.volume(),
        }
    }
}

pub fn update_audio_panel(document: &web::Document, panel: &PanelSnapshot) {
    dom::set_text(
        document,
        AUDIO_TRACK_READOUT_ID,
        &format!("Track {}/{}", panel.track + 1, panel.track_count),
    );
    dom::set_text(
        document,
        AUDIO_VOLUME_READOUT_ID,
        &format!("Volume {}%", (panel.volume * 100.0).round() as i32),
    );
    if let Some(el) = document.get_element_by_id(AUDIO_TOGGLE_ID) {
        _ = el.set_attribute("data-playing", if panel.playing { "1" } else { "0" });
        let label = if panel.playing { "Pause music" } else { "Play music" };
        _ = el.set_attribute("aria-label", label);
    }
    if let Some(slider) = document
        .get_element_by_id(AUDIO_VOLUME_ID)
        .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web::HtmlInputElement>(el).ok())
    {
        slider.set_value(&format!("{:.2}", panel.volume));
    }
}

/// Toggle the audio panel open; returns whether it is now open.
pub fn toggle_audio_panel(document: &web::Document) -> bool {
    match document.get_element_by_id(AUDIO_PANEL_ID) {
        Some(el) => el.class_list().toggle(OPEN_CLASS).unwrap_or(false),
        None => false,
    }
}
