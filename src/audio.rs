//! HTML media backends for the audio coordinator.
//!
//! Music goes through a single looping `<audio>` element; effects are clones
//! of preloaded template elements so they can overlap. Every browser-side
//! failure is mapped to an `AudioError` and handed back to the coordinator,
//! which logs it.

use animus_core::constants::{AUDIO_PERMISSION_KEY, AUDIO_PERMISSION_VALUE};
use animus_core::{
    AudioConfig, AudioCoordinator, AudioError, AudioResult, EffectSink, EffectSlot,
    MemoryPermission, MusicTransport, PermissionStore, SharedCoordinator, SilentAudio,
    SoundLibrary,
};
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Browsers reject un-prompted playback with this DOMException name.
const NOT_ALLOWED: &str = "NotAllowedError";

fn js_error_name(e: &JsValue) -> Option<String> {
    js_sys::Reflect::get(e, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
}

fn classify(e: &JsValue) -> AudioError {
    match js_error_name(e).as_deref() {
        Some(NOT_ALLOWED) => AudioError::PlaybackDenied(format!("{:?}", e)),
        _ => AudioError::Backend(format!("{:?}", e)),
    }
}

pub struct HtmlMusicTransport {
    element: web::HtmlAudioElement,
    loaded: Option<String>,
    // bumped by every play/pause/stop so stale promise rejections are ignored
    generation: Rc<Cell<u32>>,
    rejection: Rc<RefCell<Option<AudioError>>>,
}

impl HtmlMusicTransport {
    pub fn new() -> AudioResult<Self> {
        let element = web::HtmlAudioElement::new().map_err(|e| classify(&e))?;
        element.set_loop(true);
        element.set_preload("auto");
        Ok(Self {
            element,
            loaded: None,
            generation: Rc::new(Cell::new(0)),
            rejection: Rc::new(RefCell::new(None)),
        })
    }

    fn load(&mut self, src: &str) {
        if self.loaded.as_deref() == Some(src) {
            return;
        }
        self.element.set_src(src);
        self.element.load();
        self.loaded = Some(src.to_string());
    }

    fn bump(&self) -> u32 {
        let g = self.generation.get().wrapping_add(1);
        self.generation.set(g);
        g
    }
}

impl MusicTransport for HtmlMusicTransport {
    fn play(&mut self, src: &str) -> AudioResult<()> {
        self.load(src);
        let generation = self.bump();
        let promise = self.element.play().map_err(|e| classify(&e))?;
        let current = self.generation.clone();
        let rejection = self.rejection.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                if current.get() == generation {
                    *rejection.borrow_mut() = Some(classify(&e));
                }
            }
        });
        Ok(())
    }

    fn cue(&mut self, src: &str) -> AudioResult<()> {
        self.load(src);
        Ok(())
    }

    fn pause(&mut self) {
        self.bump();
        _ = self.element.pause();
    }

    fn stop(&mut self) {
        self.bump();
        _ = self.element.pause();
        self.element.set_current_time(0.0);
    }

    fn set_volume(&mut self, volume: f32) {
        self.element.set_volume(volume as f64);
    }

    fn take_rejection(&mut self) -> Option<AudioError> {
        self.rejection.borrow_mut().take()
    }

    fn release(&mut self) {
        self.bump();
        _ = self.element.pause();
        _ = self.element.remove_attribute("src");
        self.element.load();
        self.loaded = None;
    }
}

pub struct HtmlEffectSink {
    templates: FnvHashMap<String, web::HtmlAudioElement>,
}

impl HtmlEffectSink {
    /// Preload one template element per library entry. Entries that fail to
    /// preload are created on demand instead.
    pub fn preload(library: &SoundLibrary) -> Self {
        let mut templates = FnvHashMap::default();
        for (name, src) in library.iter() {
            match web::HtmlAudioElement::new_with_src(src) {
                Ok(el) => {
                    el.set_preload("auto");
                    templates.insert(src.to_string(), el);
                }
                Err(e) => log::warn!("[audio] preload '{}' failed: {:?}", name, e),
            }
        }
        Self { templates }
    }

    fn instance(&self, src: &str) -> AudioResult<web::HtmlAudioElement> {
        match self.templates.get(src) {
            Some(template) => template
                .clone_node()
                .map_err(|e| classify(&e))?
                .dyn_into::<web::HtmlAudioElement>()
                .map_err(|_| AudioError::Backend("cloned node is not <audio>".into())),
            None => web::HtmlAudioElement::new_with_src(src).map_err(|e| classify(&e)),
        }
    }
}

impl EffectSink for HtmlEffectSink {
    fn fire(&mut self, src: &str, volume: f32, slot: EffectSlot) -> AudioResult<()> {
        let el = self.instance(src)?;
        el.set_volume(volume as f64);
        let started = el.play().map_err(|e| classify(&e))?;
        spawn_local(async move {
            // The slot stays reserved until this clone has finished.
            let _slot = slot;
            if let Err(e) = JsFuture::from(started).await {
                log::debug!("[audio] effect prevented: {:?}", js_error_name(&e));
                return;
            }
            if !el.ended() {
                let finished = js_sys::Promise::new(&mut |resolve, _reject| {
                    el.set_onended(Some(&resolve));
                    el.set_onerror(Some(&resolve));
                });
                _ = JsFuture::from(finished).await;
            }
            el.set_onended(None);
            el.set_onerror(None);
        });
        Ok(())
    }

    fn release(&mut self) {
        for el in self.templates.values() {
            _ = el.pause();
            _ = el.remove_attribute("src");
        }
        self.templates.clear();
    }
}

/// Permission flag in `localStorage`, read once at construction.
pub struct LocalStoragePermission {
    storage: Option<web::Storage>,
    granted: bool,
}

impl LocalStoragePermission {
    pub fn load() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        let granted = storage
            .as_ref()
            .and_then(|s| s.get_item(AUDIO_PERMISSION_KEY).ok().flatten())
            .is_some_and(|v| v == AUDIO_PERMISSION_VALUE);
        Self { storage, granted }
    }
}

impl PermissionStore for LocalStoragePermission {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn grant(&mut self) -> AudioResult<()> {
        self.granted = true;
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| AudioError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(AUDIO_PERMISSION_KEY, AUDIO_PERMISSION_VALUE)
            .map_err(|e| AudioError::Storage(format!("{:?}", e)))
    }
}

/// Build the page's single coordinator. Falls back to silent backends when
/// the browser cannot create media elements, so the page still works.
pub fn build_coordinator(config: AudioConfig) -> SharedCoordinator {
    let effects = HtmlEffectSink::preload(&config.library);
    let transport: Box<dyn MusicTransport> = match HtmlMusicTransport::new() {
        Ok(t) => Box::new(t),
        Err(e) => {
            log::warn!("[audio] music unavailable, running silent: {}", e);
            Box::new(SilentAudio)
        }
    };
    let permission: Box<dyn PermissionStore> = {
        let stored = LocalStoragePermission::load();
        if stored.storage.is_some() {
            Box::new(stored)
        } else {
            log::warn!("[audio] no localStorage, permission will not persist");
            Box::new(MemoryPermission::default())
        }
    };
    AudioCoordinator::new(config, transport, Box::new(effects), permission).into_shared()
}
