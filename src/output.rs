//! Structured results returned by player operations
//!
//! Operations never print. They hand back an [`Outcome`] that the
//! presentation layer renders, either through `Display` or as JSON.

use crate::model::Video;
use serde::Serialize;
use std::fmt;

/// Whether an operation did what was asked or was a harmless no-op
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warning,
}

/// A video as shown in listings, with its flag reason if flagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEntry {
    pub video: Video,
    pub flag_reason: Option<String>,
}

impl fmt::Display for VideoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.video)?;
        if let Some(reason) = &self.flag_reason {
            write!(f, " - FLAGGED (reason: {reason})")?;
        }
        Ok(())
    }
}

/// Typed data attached to an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    Count(usize),
    Videos(Vec<VideoEntry>),
    NowPlaying { video: Video, paused: bool },
    Playlist { name: String, videos: Vec<VideoEntry> },
    Playlists(Vec<String>),
    SearchResults(Vec<Video>),
    Help(String),
}

/// Result of a single successful command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: Status,
    pub messages: Vec<String>,
    pub payload: Option<Payload>,
}

impl Outcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: Status::Ok,
            messages: vec![message.into()],
            payload: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            status: Status::Warning,
            messages: vec![message.into()],
            payload: None,
        }
    }

    /// Outcome made of several message lines, in order
    pub fn lines(messages: Vec<String>) -> Self {
        Self {
            status: Status::Ok,
            messages,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Search results carried by this outcome, if any
    pub fn search_results(&self) -> Option<&[Video]> {
        match &self.payload {
            Some(Payload::SearchResults(videos)) => Some(videos),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = self.messages.clone();

        match &self.payload {
            Some(Payload::Videos(entries)) | Some(Payload::Playlist { videos: entries, .. }) => {
                lines.extend(entries.iter().map(|entry| format!("  {entry}")));
            }
            Some(Payload::Playlists(names)) => {
                lines.extend(names.iter().map(|name| format!("  {name}")));
            }
            Some(Payload::SearchResults(videos)) => {
                lines.extend(
                    videos
                        .iter()
                        .enumerate()
                        .map(|(i, video)| format!("  {}) {video}", i + 1)),
                );
            }
            Some(Payload::Help(text)) => lines.push(text.clone()),
            Some(Payload::Count(_)) | Some(Payload::NowPlaying { .. }) | None => {}
        }

        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cats() -> Video {
        Video::new(
            "Amazing Cats",
            "amazing_cats_video_id",
            vec!["#cat".to_string(), "#animal".to_string()],
        )
    }

    #[test]
    fn test_flagged_entry_display() {
        let entry = VideoEntry {
            video: cats(),
            flag_reason: Some("dont_like_cats".to_string()),
        };
        assert_eq!(
            entry.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_search_results_are_numbered() {
        let outcome = Outcome::ok("Here are the results for cat:")
            .with_payload(Payload::SearchResults(vec![cats()]));

        assert_eq!(
            outcome.to_string(),
            "Here are the results for cat:\n  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
        assert_eq!(outcome.search_results().map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_json_shape() {
        let outcome = Outcome::warning("Video already paused: Amazing Cats");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "warning");
        assert!(json["payload"].is_null());

        let counted = Outcome::ok("5 videos in the library").with_payload(Payload::Count(5));
        let json = serde_json::to_value(&counted).unwrap();
        assert_eq!(json["payload"]["kind"], "count");
        assert_eq!(json["payload"]["data"], 5);
    }
}
