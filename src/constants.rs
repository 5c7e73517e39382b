// DOM contract and timing constants for the web frontend.
//
// Element ids and classes the page markup must provide. Section elements use
// the ids from `animus_core::Section::id`; navbar links carry
// `data-section="<id>"`.

// Audio permission prompt
pub const PROMPT_ID: &str = "audio-prompt";
pub const PROMPT_ENABLE_ID: &str = "audio-enable";
pub const PROMPT_LATER_ID: &str = "audio-later";
pub const PROMPT_DELAY_MS: u64 = 1500; // let the page settle before asking

// Audio control panel
pub const AUDIO_PANEL_ID: &str = "audio-panel";
pub const AUDIO_PANEL_TOGGLE_ID: &str = "audio-panel-toggle";
pub const AUDIO_TOGGLE_ID: &str = "audio-toggle";
pub const AUDIO_PREV_ID: &str = "audio-prev";
pub const AUDIO_NEXT_ID: &str = "audio-next";
pub const AUDIO_VOLUME_ID: &str = "audio-volume";
pub const AUDIO_TRACK_READOUT_ID: &str = "audio-track";
pub const AUDIO_VOLUME_READOUT_ID: &str = "audio-volume-readout";

// HUD overlay
pub const HUD_LOCATION_ID: &str = "hud-location";
pub const HUD_LOCATION_NAME_ID: &str = "hud-location-name";
pub const HUD_COORDINATES_ID: &str = "hud-coordinates";
pub const HUD_LOG_ID: &str = "hud-log";

// Synchronization bar
pub const SYNC_BAR_ID: &str = "sync-bar";
pub const SYNC_PERCENT_ID: &str = "sync-percentage";

// Classes and selectors
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";
pub const EAGLE_VISION_CLASS: &str = "eagle-vision";
pub const CLICKABLE_SELECTOR: &str = "a, button, .interactive-marker";
pub const SOUND_ATTR: &str = "data-sound";
pub const SECTION_ATTR: &str = "data-section";
