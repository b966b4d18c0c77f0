//! Playback and moderation operations

use super::flags::{FlagTable, DEFAULT_FLAG_REASON};
use super::picker::{RandomPicker, VideoPicker};
use super::state::PlaybackState;
use super::store::PlaylistStore;
use crate::config::SessionConfig;
use crate::error::{Action, Failure, OperationError};
use crate::model::{Catalog, Video};
use crate::output::{Outcome, Payload, VideoEntry};
use crate::records::parse_catalog;
use anyhow::Result;
use std::sync::Arc;

/// One session's player: playback state, flags and playlists over a
/// shared read-only catalog.
///
/// Every operation validates before it mutates, so an `Err` always
/// leaves the player exactly as it was.
pub struct VideoPlayer {
    pub(super) catalog: Arc<Catalog>,
    pub(super) playback: PlaybackState,
    pub(super) flags: FlagTable,
    pub(super) playlists: PlaylistStore,
    picker: Box<dyn VideoPicker>,
}

impl VideoPlayer {
    /// Create a player with an entropy-seeded random picker
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_picker(catalog, RandomPicker::new())
    }

    pub fn with_picker(catalog: Arc<Catalog>, picker: impl VideoPicker + 'static) -> Self {
        Self {
            catalog,
            playback: PlaybackState::default(),
            flags: FlagTable::new(),
            playlists: PlaylistStore::new(),
            picker: Box::new(picker),
        }
    }

    /// Load the configured catalog and start a fresh session over it
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let catalog = Arc::new(parse_catalog(&config.catalog_path)?);
        let picker = match config.seed {
            Some(seed) => {
                log::debug!("PLAY_RANDOM seeded with {}", seed);
                RandomPicker::with_seed(seed)
            }
            None => RandomPicker::new(),
        };
        Ok(Self::with_picker(catalog, picker))
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    pub fn flags(&self) -> &FlagTable {
        &self.flags
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Look up a catalog video or fail with VideoNotFound
    pub(super) fn require_video(&self, video_id: &str, action: Action) -> Result<Video, OperationError> {
        self.catalog
            .get_video(video_id)
            .cloned()
            .ok_or_else(|| OperationError::new(action, Failure::VideoNotFound))
    }

    /// Fail with VideoFlagged if the video carries a flag
    pub(super) fn require_unflagged(&self, video_id: &str, action: Action) -> Result<(), OperationError> {
        match self.flags.reason(video_id) {
            Some(reason) => Err(OperationError::new(
                action,
                Failure::VideoFlagged {
                    reason: reason.to_string(),
                },
            )),
            None => Ok(()),
        }
    }

    pub(super) fn entry(&self, video: &Video) -> VideoEntry {
        VideoEntry {
            video: video.clone(),
            flag_reason: self.flags.reason(&video.id).map(str::to_string),
        }
    }

    fn title_of<'a>(&'a self, video_id: &'a str) -> &'a str {
        self.catalog
            .get_video(video_id)
            .map(|v| v.title.as_str())
            .unwrap_or(video_id)
    }

    pub fn number_of_videos(&self) -> Outcome {
        let count = self.catalog.video_count();
        Outcome::ok(format!("{count} videos in the library")).with_payload(Payload::Count(count))
    }

    /// Every catalog video sorted by title, flagged ones annotated
    pub fn show_all_videos(&self) -> Outcome {
        let entries = self
            .catalog
            .sorted_by_title()
            .into_iter()
            .map(|video| self.entry(video))
            .collect();
        Outcome::ok("Here's a list of all available videos:").with_payload(Payload::Videos(entries))
    }

    /// Play a video, implicitly stopping whatever is loaded
    pub fn play_video(&mut self, video_id: &str) -> Result<Outcome, OperationError> {
        let video = self.require_video(video_id, Action::PlayVideo)?;
        self.require_unflagged(&video.id, Action::PlayVideo)?;

        let mut messages = Vec::new();
        if let Some(current) = self.playback.current_id() {
            messages.push(format!("Stopping video: {}", self.title_of(current)));
        }
        messages.push(format!("Playing video: {}", video.title));

        log::debug!("{:?} -> Playing({})", self.playback, video.id);
        self.playback = PlaybackState::Playing(video.id.clone());

        Ok(Outcome::lines(messages).with_payload(Payload::NowPlaying {
            video,
            paused: false,
        }))
    }

    /// Play a uniformly chosen unflagged video
    pub fn play_random_video(&mut self) -> Result<Outcome, OperationError> {
        let eligible: Vec<String> = self
            .catalog
            .sorted_by_title()
            .into_iter()
            .filter(|video| !self.flags.is_flagged(&video.id))
            .map(|video| video.id.clone())
            .collect();

        let index = self
            .picker
            .pick(eligible.len())
            .ok_or_else(|| OperationError::new(Action::PlayVideo, Failure::NoVideosAvailable))?;

        self.play_video(&eligible[index])
    }

    /// Stopping with nothing loaded is a warning, not an error
    pub fn stop_video(&mut self) -> Outcome {
        let Some(current) = self.playback.current_id() else {
            return Outcome::warning("No video is currently playing");
        };

        let message = format!("Stopping video: {}", self.title_of(current));
        log::debug!("{:?} -> Stopped", self.playback);
        self.playback = PlaybackState::Stopped;
        Outcome::ok(message)
    }

    /// Pausing an already paused video is a warning, not an error
    pub fn pause_video(&mut self) -> Result<Outcome, OperationError> {
        match &self.playback {
            PlaybackState::Playing(id) => {
                let id = id.clone();
                let outcome = Outcome::ok(format!("Pausing video: {}", self.title_of(&id)));
                log::debug!("Playing({}) -> Paused", id);
                self.playback = PlaybackState::Paused(id);
                Ok(outcome)
            }
            PlaybackState::Paused(id) => Ok(Outcome::warning(format!(
                "Video already paused: {}",
                self.title_of(id)
            ))),
            PlaybackState::Stopped => Err(OperationError::new(
                Action::PauseVideo,
                Failure::NothingPlaying,
            )),
        }
    }

    pub fn continue_video(&mut self) -> Result<Outcome, OperationError> {
        match &self.playback {
            PlaybackState::Paused(id) => {
                let id = id.clone();
                let outcome = Outcome::ok(format!("Continuing video: {}", self.title_of(&id)));
                log::debug!("Paused({}) -> Playing", id);
                self.playback = PlaybackState::Playing(id);
                Ok(outcome)
            }
            PlaybackState::Playing(_) => Err(OperationError::new(
                Action::ContinueVideo,
                Failure::NotPaused,
            )),
            PlaybackState::Stopped => Err(OperationError::new(
                Action::ContinueVideo,
                Failure::NothingPlaying,
            )),
        }
    }

    pub fn show_playing(&self) -> Outcome {
        let (id, paused) = match &self.playback {
            PlaybackState::Stopped => return Outcome::ok("No video is currently playing"),
            PlaybackState::Playing(id) => (id, false),
            PlaybackState::Paused(id) => (id, true),
        };

        match self.catalog.get_video(id) {
            Some(video) => {
                let suffix = if paused { " - PAUSED" } else { "" };
                Outcome::ok(format!("Currently playing: {video}{suffix}")).with_payload(
                    Payload::NowPlaying {
                        video: video.clone(),
                        paused,
                    },
                )
            }
            None => Outcome::ok("No video is currently playing"),
        }
    }

    /// Flag a video, stopping it first if it is loaded
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<Outcome, OperationError> {
        let video = self.require_video(video_id, Action::FlagVideo)?;
        if self.flags.is_flagged(&video.id) {
            return Err(OperationError::new(Action::FlagVideo, Failure::AlreadyFlagged));
        }

        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON).to_string();
        let mut messages = Vec::new();
        if self.playback.is_loaded(&video.id) {
            messages.push(format!("Stopping video: {}", video.title));
            self.playback = PlaybackState::Stopped;
        }
        messages.push(format!(
            "Successfully flagged video: {} (reason: {})",
            video.title, reason
        ));

        log::debug!("Flagged {} ({})", video.id, reason);
        self.flags.flag(video.id, reason);
        Ok(Outcome::lines(messages))
    }

    pub fn allow_video(&mut self, video_id: &str) -> Result<Outcome, OperationError> {
        let video = self.require_video(video_id, Action::AllowVideo)?;
        if self.flags.allow(&video.id).is_none() {
            return Err(OperationError::new(Action::AllowVideo, Failure::NotFlagged));
        }

        log::debug!("Allowed {}", video.id);
        Ok(Outcome::ok(format!(
            "Successfully removed flag from video: {}",
            video.title
        )))
    }
}
