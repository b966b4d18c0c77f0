//! Playback state machine

use serde::Serialize;

/// Coarse playback status, without the video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

/// Playback state machine. A video id is held exactly when not stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(String),
    Paused(String),
}

impl PlaybackState {
    pub fn status(&self) -> PlaybackStatus {
        match self {
            PlaybackState::Stopped => PlaybackStatus::Stopped,
            PlaybackState::Playing(_) => PlaybackStatus::Playing,
            PlaybackState::Paused(_) => PlaybackStatus::Paused,
        }
    }

    /// The loaded video, if any
    pub fn current_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    pub fn is_loaded(&self, video_id: &str) -> bool {
        self.current_id() == Some(video_id)
    }
}
