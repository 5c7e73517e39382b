use crate::constants::SOUND_BASE_PATH;
use fnv::FnvHashMap;
use std::str::FromStr;

/// Symbolic names of the UI sound effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundKey {
    Click,
    Hover,
    Marker,
    Notification,
    Synchronize,
    Blade,
    MenuOpen,
    MenuClose,
    Eagle,
}

impl SoundKey {
    pub const ALL: [SoundKey; 9] = [
        SoundKey::Click,
        SoundKey::Hover,
        SoundKey::Marker,
        SoundKey::Notification,
        SoundKey::Synchronize,
        SoundKey::Blade,
        SoundKey::MenuOpen,
        SoundKey::MenuClose,
        SoundKey::Eagle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SoundKey::Click => "click",
            SoundKey::Hover => "hover",
            SoundKey::Marker => "marker",
            SoundKey::Notification => "notification",
            SoundKey::Synchronize => "synchronize",
            SoundKey::Blade => "blade",
            SoundKey::MenuOpen => "menu_open",
            SoundKey::MenuClose => "menu_close",
            SoundKey::Eagle => "eagle",
        }
    }
}

impl FromStr for SoundKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or(())
    }
}

/// Fixed mapping from effect name to resource path. Built once at startup.
#[derive(Clone, Debug, Default)]
pub struct SoundLibrary {
    entries: FnvHashMap<String, String>,
}

impl SoundLibrary {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The stock catalog served from `SOUND_BASE_PATH`.
    pub fn standard() -> Self {
        Self::new(
            SoundKey::ALL
                .iter()
                .map(|k| (k.as_str(), format!("{}/{}.mp3", SOUND_BASE_PATH, k.as_str()))),
        )
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackDirection {
    Next,
    Previous,
}

/// Ordered background tracks with a wrapping cursor.
#[derive(Clone, Debug)]
pub struct MusicPlaylist {
    tracks: Vec<String>,
    cursor: usize,
}

impl MusicPlaylist {
    pub fn new<I, S>(tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracks: tracks.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            ["rogue-theme", "ezio-theme", "revelations"]
                .iter()
                .map(|name| format!("{}/{}.mp3", SOUND_BASE_PATH, name)),
        )
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&str> {
        self.tracks.get(self.cursor).map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tracks.get(index).map(String::as_str)
    }

    /// Move the cursor one step, wrapping at both ends. No-op when empty.
    pub fn advance(&mut self, direction: TrackDirection) -> usize {
        let n = self.tracks.len();
        if n == 0 {
            return 0;
        }
        self.cursor = match direction {
            TrackDirection::Next => (self.cursor + 1) % n,
            TrackDirection::Previous => (self.cursor + n - 1) % n,
        };
        self.cursor
    }
}
