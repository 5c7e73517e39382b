use crate::constants::{DEFAULT_VOLUME, MAX_CONCURRENT_EFFECTS};
use crate::error::{AudioError, AudioResult};
use crate::library::{MusicPlaylist, SoundKey, SoundLibrary, TrackDirection};
use crate::state::{AudioSessionState, EffectBudget, EffectSlot};
use std::cell::RefCell;
use std::rc::Rc;

/// Background music output. At most one track is loaded at a time.
pub trait MusicTransport {
    /// Start `src`, or resume it from its paused position if it is already loaded.
    fn play(&mut self, src: &str) -> AudioResult<()>;
    /// Load `src` without starting it.
    fn cue(&mut self, _src: &str) -> AudioResult<()> {
        Ok(())
    }
    /// Pause, keeping the position.
    fn pause(&mut self);
    /// Halt the loaded track and discard its position.
    fn stop(&mut self);
    fn set_volume(&mut self, volume: f32);
    /// Report a rejection that arrived after `play` returned (async platforms).
    fn take_rejection(&mut self) -> Option<AudioError> {
        None
    }
    /// Drop decode buffers and detach from the output.
    fn release(&mut self) {
        self.stop();
    }
}

/// Fire-and-forget effect output.
///
/// The backend must hold `slot` until the sound has finished (or failed to
/// start) and then drop it.
pub trait EffectSink {
    fn fire(&mut self, src: &str, volume: f32, slot: EffectSlot) -> AudioResult<()>;
    fn release(&mut self) {}
}

/// Persisted "the user accepted audio" flag.
pub trait PermissionStore {
    fn is_granted(&self) -> bool;
    fn grant(&mut self) -> AudioResult<()>;
}

/// Non-persistent permission flag, used when no durable storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryPermission {
    granted: bool,
}

impl MemoryPermission {
    pub fn new(granted: bool) -> Self {
        Self { granted }
    }
}

impl PermissionStore for MemoryPermission {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn grant(&mut self) -> AudioResult<()> {
        self.granted = true;
        Ok(())
    }
}

/// Backend that accepts everything and produces nothing. Used when the
/// platform cannot create audio elements at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl MusicTransport for SilentAudio {
    fn play(&mut self, _src: &str) -> AudioResult<()> {
        Ok(())
    }
    fn pause(&mut self) {}
    fn stop(&mut self) {}
    fn set_volume(&mut self, _volume: f32) {}
}

impl EffectSink for SilentAudio {
    fn fire(&mut self, _src: &str, _volume: f32, _slot: EffectSlot) -> AudioResult<()> {
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct AudioConfig {
    pub library: SoundLibrary,
    pub playlist: MusicPlaylist,
    pub initial_volume: f32,
    pub max_concurrent_effects: usize,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            library: SoundLibrary::standard(),
            playlist: MusicPlaylist::standard(),
            initial_volume: DEFAULT_VOLUME,
            max_concurrent_effects: MAX_CONCURRENT_EFFECTS,
        }
    }
}

pub type SharedCoordinator = Rc<RefCell<AudioCoordinator>>;

/// Single owner of every audio resource on the page.
///
/// Consumers get a `SharedCoordinator` and call into it; none of them hold
/// audio resources of their own. No operation returns an error: backend
/// failures are logged and dropped.
pub struct AudioCoordinator {
    library: SoundLibrary,
    playlist: MusicPlaylist,
    state: AudioSessionState,
    budget: EffectBudget,
    transport: Box<dyn MusicTransport>,
    effects: Box<dyn EffectSink>,
    permission: Box<dyn PermissionStore>,
    // the current user gesture already started deferred music
    gesture_resumed: bool,
    // music was playing when the page went into the back/forward cache
    resume_on_show: bool,
    released: bool,
}

impl AudioCoordinator {
    pub fn new(
        config: AudioConfig,
        mut transport: Box<dyn MusicTransport>,
        effects: Box<dyn EffectSink>,
        permission: Box<dyn PermissionStore>,
    ) -> Self {
        let volume = sanitize_volume(config.initial_volume).unwrap_or(DEFAULT_VOLUME);
        transport.set_volume(volume);
        let state = AudioSessionState {
            current_track: config.playlist.index(),
            volume,
            ..AudioSessionState::default()
        };
        Self {
            library: config.library,
            playlist: config.playlist,
            state,
            budget: EffectBudget::new(config.max_concurrent_effects),
            transport,
            effects,
            permission,
            gesture_resumed: false,
            resume_on_show: false,
            released: false,
        }
    }

    pub fn into_shared(self) -> SharedCoordinator {
        Rc::new(RefCell::new(self))
    }

    pub fn state(&self) -> &AudioSessionState {
        &self.state
    }

    pub fn is_music_playing(&self) -> bool {
        self.state.is_music_playing
    }

    pub fn current_track(&self) -> usize {
        self.state.current_track
    }

    pub fn track_count(&self) -> usize {
        self.playlist.len()
    }

    pub fn volume(&self) -> f32 {
        self.state.volume
    }

    pub fn effects_in_flight(&self) -> usize {
        self.budget.in_flight()
    }

    pub fn autoplay_permitted(&self) -> bool {
        self.permission.is_granted()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn play(&mut self, key: SoundKey) {
        self.play_effect(key.as_str());
    }

    /// Dispatch a one-shot effect at the current volume. Unknown names,
    /// a full budget and backend failures are all silent no-ops.
    pub fn play_effect(&mut self, name: &str) {
        if self.released {
            return;
        }
        let Some(src) = self.library.resolve(name) else {
            log::debug!("[audio] unknown effect '{}'", name);
            return;
        };
        let Some(slot) = self.budget.try_acquire() else {
            log::debug!(
                "[audio] effect '{}' dropped, {} already in flight",
                name,
                self.budget.in_flight()
            );
            return;
        };
        if let Err(e) = self.effects.fire(src, self.state.volume, slot) {
            log::warn!("[audio] effect '{}' failed: {}", name, e);
        }
    }

    /// Flip music on/off. The transport button confirms itself with a click.
    ///
    /// When the gesture that triggered this call has just retried deferred
    /// music, the music is already doing what the user asked for and keeps
    /// playing.
    pub fn toggle_music(&mut self) {
        if self.released {
            return;
        }
        let just_resumed = std::mem::take(&mut self.gesture_resumed);
        if just_resumed && self.state.is_music_playing {
            log::debug!("[audio] toggle satisfied by deferred retry");
        } else if self.state.is_music_playing {
            self.pause_music();
        } else {
            self.resume_music();
        }
        self.play(SoundKey::Click);
    }

    pub fn next_track(&mut self) {
        self.advance_track(TrackDirection::Next);
    }

    pub fn previous_track(&mut self) {
        self.advance_track(TrackDirection::Previous);
    }

    /// Move the playlist cursor. The old track is always stopped before the
    /// new one is touched; the new one only starts if music was playing.
    pub fn advance_track(&mut self, direction: TrackDirection) {
        if self.released || self.playlist.is_empty() {
            return;
        }
        self.gesture_resumed = false;
        let was_playing = self.state.is_music_playing;
        self.transport.stop();
        self.state.current_track = self.playlist.advance(direction);
        log::info!(
            "[audio] track {}/{}",
            self.state.current_track + 1,
            self.playlist.len()
        );
        if was_playing {
            self.resume_music();
        } else if let Some(src) = self.playlist.current() {
            if let Err(e) = self.transport.cue(src) {
                log::warn!("[audio] cue failed: {}", e);
            }
        }
        self.play(SoundKey::Click);
    }

    /// Clamp to \[0, 1\] and apply to music immediately. Effects already in
    /// flight keep the level they were fired with. NaN is ignored.
    pub fn set_volume(&mut self, level: f32) {
        let Some(volume) = sanitize_volume(level) else {
            return;
        };
        self.state.volume = volume;
        if !self.released {
            self.transport.set_volume(volume);
        }
    }

    pub fn adjust_volume(&mut self, delta: f32) {
        self.set_volume(self.state.volume + delta);
    }

    /// Start music automatically, but only for visitors who already
    /// accepted audio. A refusal from the platform defers the attempt to
    /// the next user gesture.
    pub fn start_music_playback(&mut self) {
        if self.released || self.state.is_music_playing {
            return;
        }
        if !self.permission.is_granted() {
            log::debug!("[audio] autoplay not permitted yet");
            return;
        }
        self.resume_music();
    }

    /// The user accepted the audio prompt: remember it and start.
    pub fn grant_autoplay_permission(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.permission.grant() {
            log::warn!("[audio] could not persist permission: {}", e);
        }
        if !self.state.is_music_playing {
            self.resume_music();
        }
        self.play(SoundKey::Synchronize);
    }

    /// Called first thing for genuine user interactions (pointer down,
    /// key down), before the interaction's own action runs.
    pub fn notify_user_gesture(&mut self) {
        self.gesture_resumed = false;
        if self.released || !self.state.autoplay_deferred || self.state.is_music_playing {
            return;
        }
        log::info!("[audio] retrying deferred music after user gesture");
        self.state.autoplay_deferred = false;
        self.resume_music();
        self.gesture_resumed = self.state.is_music_playing;
    }

    /// Pick up asynchronous refusals reported by the transport. Run once
    /// per frame.
    pub fn poll_transport(&mut self) {
        if self.released {
            return;
        }
        if let Some(e) = self.transport.take_rejection() {
            log::warn!("[audio] music playback rejected: {}", e);
            if self.state.is_music_playing {
                self.state.is_music_playing = false;
                // only a missing gesture is worth retrying
                self.state.autoplay_deferred = matches!(e, AudioError::PlaybackDenied(_));
            }
        }
    }

    /// The page is going away. A page kept in the back/forward cache
    /// (`persisted`) may come back, so it only pauses; anything else
    /// releases all audio.
    pub fn page_hidden(&mut self, persisted: bool) {
        if !persisted {
            self.shutdown();
            return;
        }
        if self.released {
            return;
        }
        self.gesture_resumed = false;
        self.resume_on_show = self.state.is_music_playing;
        if self.state.is_music_playing {
            self.pause_music();
        }
    }

    /// The page was shown again. Restores music paused by `page_hidden`.
    pub fn page_shown(&mut self, persisted: bool) {
        let resume = std::mem::take(&mut self.resume_on_show);
        if !persisted || self.released || !resume {
            return;
        }
        log::info!("[audio] page restored, resuming music");
        self.resume_music();
    }

    /// Stop and release everything. Idempotent; also run on drop.
    pub fn shutdown(&mut self) {
        if self.released {
            return;
        }
        self.transport.stop();
        self.transport.release();
        self.effects.release();
        self.state.is_music_playing = false;
        self.state.autoplay_deferred = false;
        self.gesture_resumed = false;
        self.resume_on_show = false;
        self.released = true;
        log::info!("[audio] released");
    }

    fn resume_music(&mut self) {
        let Some(src) = self.playlist.current() else {
            log::debug!("[audio] playlist is empty");
            return;
        };
        match self.transport.play(src) {
            Ok(()) => {
                self.state.is_music_playing = true;
                self.state.autoplay_deferred = false;
            }
            Err(e) => {
                log::warn!("[audio] music playback failed: {}", e);
                self.state.is_music_playing = false;
                self.state.autoplay_deferred = matches!(e, AudioError::PlaybackDenied(_));
            }
        }
    }

    fn pause_music(&mut self) {
        self.transport.pause();
        self.state.is_music_playing = false;
        self.state.autoplay_deferred = false;
    }
}

impl Drop for AudioCoordinator {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn sanitize_volume(level: f32) -> Option<f32> {
    (!level.is_nan()).then(|| level.clamp(0.0, 1.0))
}
