// Recording backends shared by the host-side tests.

#![allow(dead_code)]

use animus_core::{
    AudioConfig, AudioCoordinator, AudioError, AudioResult, EffectSink, EffectSlot,
    MemoryPermission, MusicPlaylist, MusicTransport,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Play(String),
    Cue(String),
    Pause,
    Stop,
    Volume(f32),
    Release,
}

#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub calls: Rc<RefCell<Vec<Call>>>,
    /// Returned by every `play` while set.
    pub fail_with: Rc<RefCell<Option<AudioError>>>,
    pub late_rejection: Rc<RefCell<Option<AudioError>>>,
}

impl RecordingTransport {
    pub fn deny(&self) {
        *self.fail_with.borrow_mut() = Some(denied());
    }

    pub fn allow(&self) {
        *self.fail_with.borrow_mut() = None;
    }
}

impl MusicTransport for RecordingTransport {
    fn play(&mut self, src: &str) -> AudioResult<()> {
        self.calls.borrow_mut().push(Call::Play(src.to_string()));
        match self.fail_with.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn cue(&mut self, src: &str) -> AudioResult<()> {
        self.calls.borrow_mut().push(Call::Cue(src.to_string()));
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.borrow_mut().push(Call::Pause);
    }

    fn stop(&mut self) {
        self.calls.borrow_mut().push(Call::Stop);
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.borrow_mut().push(Call::Volume(volume));
    }

    fn take_rejection(&mut self) -> Option<AudioError> {
        self.late_rejection.borrow_mut().take()
    }

    fn release(&mut self) {
        self.calls.borrow_mut().push(Call::Release);
    }
}

/// Records fired effects. With `hold` set, slots are kept (sound "still
/// playing") until the test clears `held`.
#[derive(Clone, Default)]
pub struct RecordingEffects {
    pub fired: Rc<RefCell<Vec<(String, f32)>>>,
    pub held: Rc<RefCell<Vec<EffectSlot>>>,
    pub hold: Rc<Cell<bool>>,
    pub fail: Rc<Cell<bool>>,
}

impl EffectSink for RecordingEffects {
    fn fire(&mut self, src: &str, volume: f32, slot: EffectSlot) -> AudioResult<()> {
        if self.fail.get() {
            return Err(AudioError::Backend("decode failed".into()));
        }
        self.fired.borrow_mut().push((src.to_string(), volume));
        if self.hold.get() {
            self.held.borrow_mut().push(slot);
        }
        Ok(())
    }
}

pub struct Probe {
    pub transport: RecordingTransport,
    pub effects: RecordingEffects,
}

impl Probe {
    pub fn calls(&self) -> Vec<Call> {
        self.transport.calls.borrow().clone()
    }

    /// Transport calls other than volume changes.
    pub fn transport_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Volume(_)))
            .collect()
    }

    pub fn plays(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Play(src) => Some(src),
                _ => None,
            })
            .collect()
    }

    pub fn fired(&self) -> Vec<String> {
        self.effects
            .fired
            .borrow()
            .iter()
            .map(|(src, _)| src.clone())
            .collect()
    }

    pub fn fired_count(&self, name: &str) -> usize {
        let suffix = format!("/{}.mp3", name);
        self.fired().iter().filter(|src| src.ends_with(&suffix)).count()
    }
}

pub fn coordinator_with(config: AudioConfig, granted: bool) -> (AudioCoordinator, Probe) {
    let transport = RecordingTransport::default();
    let effects = RecordingEffects::default();
    let probe = Probe {
        transport: transport.clone(),
        effects: effects.clone(),
    };
    let coordinator = AudioCoordinator::new(
        config,
        Box::new(transport),
        Box::new(effects),
        Box::new(MemoryPermission::new(granted)),
    );
    (coordinator, probe)
}

pub fn coordinator(granted: bool) -> (AudioCoordinator, Probe) {
    coordinator_with(AudioConfig::default(), granted)
}

pub fn denied() -> AudioError {
    AudioError::PlaybackDenied("NotAllowedError".into())
}

pub fn track(i: usize) -> String {
    MusicPlaylist::standard()
        .get(i)
        .map(str::to_string)
        .unwrap_or_default()
}
