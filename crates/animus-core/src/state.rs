//! Mutable audio session state and effect accounting.
//!
//! Nothing in here touches a platform API. The coordinator owns one
//! `AudioSessionState` and one `EffectBudget`; backends only ever see an
//! `EffectSlot`, which they keep alive for as long as the sound is audible.

use crate::constants::DEFAULT_VOLUME;
use std::cell::Cell;
use std::rc::Rc;

/// Transport state shared by every consumer of the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub struct AudioSessionState {
    pub is_music_playing: bool,
    /// Index into the playlist, always `< playlist.len()` for a non-empty playlist.
    pub current_track: usize,
    /// Applied to music and to every effect dispatched from now on, in \[0, 1\].
    pub volume: f32,
    /// Music was requested automatically but the platform refused; retry on
    /// the next user gesture.
    pub autoplay_deferred: bool,
}

impl Default for AudioSessionState {
    fn default() -> Self {
        Self {
            is_music_playing: false,
            current_track: 0,
            volume: DEFAULT_VOLUME,
            autoplay_deferred: false,
        }
    }
}

/// Caps how many one-shot effects may be audible at once.
#[derive(Clone, Debug)]
pub struct EffectBudget {
    in_flight: Rc<Cell<usize>>,
    cap: usize,
}

impl EffectBudget {
    pub fn new(cap: usize) -> Self {
        Self {
            in_flight: Rc::new(Cell::new(0)),
            cap,
        }
    }

    /// Reserve a slot, or `None` when the cap is reached.
    pub fn try_acquire(&self) -> Option<EffectSlot> {
        let n = self.in_flight.get();
        if n >= self.cap {
            return None;
        }
        self.in_flight.set(n + 1);
        Some(EffectSlot {
            in_flight: self.in_flight.clone(),
        })
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

/// One in-flight effect. Dropping it frees the slot.
#[derive(Debug)]
pub struct EffectSlot {
    in_flight: Rc<Cell<usize>>,
}

impl Drop for EffectSlot {
    fn drop(&mut self) {
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
    }
}
