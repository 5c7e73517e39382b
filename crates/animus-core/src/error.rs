use thiserror::Error;

/// Failures reported by audio backends.
///
/// None of these ever reach the user: the coordinator logs them and carries
/// on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The platform refused to start audio without a user gesture.
    #[error("playback denied: {0}")]
    PlaybackDenied(String),

    /// A sound key or resource path did not resolve.
    #[error("resource missing: {0}")]
    ResourceMissing(String),

    /// The persisted permission flag could not be read or written.
    #[error("storage error: {0}")]
    Storage(String),

    /// Any other backend failure (element creation, decode, ...).
    #[error("audio backend error: {0}")]
    Backend(String),
}

pub type AudioResult<T> = std::result::Result<T, AudioError>;
