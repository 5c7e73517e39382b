// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include its DOM constants directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use animus_core::constants::*;
use animus_core::{MusicPlaylist, Section, SoundKey, SoundLibrary};
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_constants_are_within_reasonable_bounds() {
    assert!((0.0..=1.0).contains(&DEFAULT_VOLUME));
    assert!(VOLUME_STEP > 0.0 && VOLUME_STEP < 0.5);
    assert!(MAX_CONCURRENT_EFFECTS > 0);
    assert!(!AUDIO_PERMISSION_KEY.is_empty());
    assert!(SOUND_BASE_PATH.starts_with('/'));
    assert!(!SOUND_BASE_PATH.ends_with('/'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn section_constants_are_positive() {
    assert!(SECTION_LOOKAHEAD_PX > 0.0);
    assert!(HUD_LOG_CAPACITY > 0);
    assert!(PROMPT_DELAY_MS > 0);
}

#[test]
fn every_sound_key_is_in_the_standard_library() {
    let library = SoundLibrary::standard();
    assert_eq!(library.len(), SoundKey::ALL.len());
    for key in SoundKey::ALL {
        let src = library.resolve(key.as_str());
        assert_eq!(
            src.map(str::to_string),
            Some(format!("{}/{}.mp3", SOUND_BASE_PATH, key.as_str()))
        );
        assert_eq!(key.as_str().parse::<SoundKey>(), Ok(key));
    }
    assert!("fanfare".parse::<SoundKey>().is_err());
}

#[test]
fn standard_playlist_is_not_empty() {
    let playlist = MusicPlaylist::standard();
    assert!(!playlist.is_empty());
    assert_eq!(playlist.index(), 0);
    for i in 0..playlist.len() {
        let src = playlist.get(i).unwrap_or_default();
        assert!(src.starts_with(SOUND_BASE_PATH), "{}", src);
    }
}

#[test]
fn dom_ids_do_not_collide_with_sections() {
    let ids = [
        PROMPT_ID,
        PROMPT_ENABLE_ID,
        PROMPT_LATER_ID,
        AUDIO_PANEL_ID,
        AUDIO_PANEL_TOGGLE_ID,
        AUDIO_TOGGLE_ID,
        AUDIO_PREV_ID,
        AUDIO_NEXT_ID,
        AUDIO_VOLUME_ID,
        AUDIO_TRACK_READOUT_ID,
        AUDIO_VOLUME_READOUT_ID,
        HUD_LOCATION_ID,
        HUD_LOCATION_NAME_ID,
        HUD_COORDINATES_ID,
        HUD_LOG_ID,
        SYNC_BAR_ID,
        SYNC_PERCENT_ID,
    ];
    for (i, id) in ids.iter().enumerate() {
        assert!(!ids[i + 1..].contains(id), "duplicate id {}", id);
        assert!(Section::from_id(id).is_none(), "{} shadows a section", id);
    }
}
