// Shared audio/section tuning constants used by the web frontend and tests.

// Audio
pub const DEFAULT_VOLUME: f32 = 0.3; // initial level for music and effects
pub const VOLUME_STEP: f32 = 0.05; // keyboard volume nudge
pub const MAX_CONCURRENT_EFFECTS: usize = 8; // one-shot effects allowed in flight
pub const SOUND_BASE_PATH: &str = "/sounds/assassins-creed";

// Persisted autoplay permission flag
pub const AUDIO_PERMISSION_KEY: &str = "audio_permission_granted";
pub const AUDIO_PERMISSION_VALUE: &str = "true";

// Sections
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0; // compensates for the fixed navbar
pub const HUD_LOG_CAPACITY: usize = 4; // notification lines kept on screen
