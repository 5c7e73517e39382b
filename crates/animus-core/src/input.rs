// Pure input helpers shared by the DOM event handlers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleEagleVision,
    ToggleMusic,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "v" | "V" => Some(KeyAction::ToggleEagleVision),
        "m" | "M" => Some(KeyAction::ToggleMusic),
        "]" => Some(KeyAction::NextTrack),
        "[" => Some(KeyAction::PreviousTrack),
        "=" | "+" => Some(KeyAction::VolumeUp),
        "-" | "_" => Some(KeyAction::VolumeDown),
        _ => None,
    }
}

/// Whether a key press aimed at this element belongs to the element
/// (text entry, form control) rather than to the page shortcuts.
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable
        || ["INPUT", "TEXTAREA", "SELECT"]
            .iter()
            .any(|t| tag_name.eq_ignore_ascii_case(t))
}

/// Rising-edge detector for "pointer is over something clickable".
/// Fires once on entry and re-arms after the pointer leaves.
#[derive(Default, Clone, Copy, Debug)]
pub struct HoverLatch {
    over: bool,
}

impl HoverLatch {
    pub fn update(&mut self, over_clickable: bool) -> bool {
        let entered = over_clickable && !self.over;
        self.over = over_clickable;
        entered
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}

/// Scroll depth in percent, 0..=100. A page that cannot scroll reads 0.
#[inline]
pub fn sync_level(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}
