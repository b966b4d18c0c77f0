//! Command and operation errors
//!
//! Every error here is recoverable: the caller reports it and keeps
//! reading commands. None of them leave partially applied state behind.

use std::fmt;
use thiserror::Error;

/// Any failure surfaced by the command dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Malformed command invocation (no tokens, wrong number of arguments)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UsageError {
    pub message: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A well-formed command whose precondition did not hold
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {action}: {failure}")]
pub struct OperationError {
    pub action: Action,
    pub failure: Failure,
}

impl OperationError {
    pub fn new(action: Action, failure: Failure) -> Self {
        Self { action, failure }
    }
}

/// What the user was trying to do when an operation failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PlayVideo,
    PauseVideo,
    ContinueVideo,
    CreatePlaylist,
    AddToPlaylist(String),
    RemoveFromPlaylist(String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    FlagVideo,
    AllowVideo,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayVideo => write!(f, "play video"),
            Action::PauseVideo => write!(f, "pause video"),
            Action::ContinueVideo => write!(f, "continue video"),
            Action::CreatePlaylist => write!(f, "create playlist"),
            Action::AddToPlaylist(name) => write!(f, "add video to {name}"),
            Action::RemoveFromPlaylist(name) => write!(f, "remove video from {name}"),
            Action::ClearPlaylist(name) => write!(f, "clear playlist {name}"),
            Action::DeletePlaylist(name) => write!(f, "delete playlist {name}"),
            Action::ShowPlaylist(name) => write!(f, "show playlist {name}"),
            Action::FlagVideo => write!(f, "flag video"),
            Action::AllowVideo => write!(f, "remove flag from video"),
        }
    }
}

/// Why an operation was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Video is currently flagged (reason: {reason})")]
    VideoFlagged { reason: String },

    #[error("Video already added")]
    AlreadyInPlaylist,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("Video is already flagged")]
    AlreadyFlagged,
}

impl Failure {
    /// Stable snake_case name, used for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            Failure::VideoNotFound => "video_not_found",
            Failure::PlaylistNotFound => "playlist_not_found",
            Failure::PlaylistExists => "playlist_exists",
            Failure::VideoFlagged { .. } => "video_flagged",
            Failure::AlreadyInPlaylist => "already_in_playlist",
            Failure::NotInPlaylist => "not_in_playlist",
            Failure::NothingPlaying => "nothing_playing",
            Failure::NotPaused => "not_paused",
            Failure::NoVideosAvailable => "no_videos_available",
            Failure::NotFlagged => "not_flagged",
            Failure::AlreadyFlagged => "already_flagged",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_error_message() {
        let err = OperationError::new(
            Action::AddToPlaylist("my_PLAYLIST".to_string()),
            Failure::VideoFlagged {
                reason: "dont_like_cats".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Cannot add video to my_PLAYLIST: Video is currently flagged (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_command_error_is_transparent() {
        let usage: CommandError = UsageError::new("Please enter PLAY command followed by video_id.").into();
        assert_eq!(usage.to_string(), "Please enter PLAY command followed by video_id.");

        let op: CommandError = OperationError::new(Action::PauseVideo, Failure::NothingPlaying).into();
        assert_eq!(op.to_string(), "Cannot pause video: No video is currently playing");
    }
}
