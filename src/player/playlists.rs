//! Playlist operations

use super::VideoPlayer;
use crate::error::{Action, Failure, OperationError};
use crate::model::Playlist;
use crate::output::{Outcome, Payload};

impl VideoPlayer {
    fn require_playlist(&self, name: &str, action: &Action) -> Result<&Playlist, OperationError> {
        self.playlists
            .get(name)
            .ok_or_else(|| OperationError::new(action.clone(), Failure::PlaylistNotFound))
    }

    pub fn create_playlist(&mut self, name: &str) -> Result<Outcome, OperationError> {
        if !self.playlists.insert(Playlist::new(name.to_string())) {
            return Err(OperationError::new(
                Action::CreatePlaylist,
                Failure::PlaylistExists,
            ));
        }

        log::debug!("Created playlist {:?}", name);
        Ok(Outcome::ok(format!(
            "Successfully created new playlist: {name}"
        )))
    }

    /// Checks run in order: playlist, video, flag, membership
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Outcome, OperationError> {
        let action = Action::AddToPlaylist(name.to_string());
        let already_added = self.require_playlist(name, &action)?.contains(video_id);
        let video = self.require_video(video_id, action.clone())?;
        self.require_unflagged(&video.id, action.clone())?;
        if already_added {
            return Err(OperationError::new(action, Failure::AlreadyInPlaylist));
        }

        if let Some(playlist) = self.playlists.get_mut(name) {
            playlist.add_video(video.id);
        }
        Ok(Outcome::ok(format!("Added video to {name}: {}", video.title)))
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<Outcome, OperationError> {
        let action = Action::RemoveFromPlaylist(name.to_string());
        let is_member = self.require_playlist(name, &action)?.contains(video_id);
        let video = self.require_video(video_id, action.clone())?;
        if !is_member {
            return Err(OperationError::new(action, Failure::NotInPlaylist));
        }

        if let Some(playlist) = self.playlists.get_mut(name) {
            playlist.remove_video(&video.id);
        }
        Ok(Outcome::ok(format!(
            "Removed video from {name}: {}",
            video.title
        )))
    }

    /// Empty a playlist; the playlist itself is kept
    pub fn clear_playlist(&mut self, name: &str) -> Result<Outcome, OperationError> {
        let action = Action::ClearPlaylist(name.to_string());
        match self.playlists.get_mut(name) {
            Some(playlist) => {
                playlist.clear();
                Ok(Outcome::ok(format!(
                    "Successfully removed all videos from {name}"
                )))
            }
            None => Err(OperationError::new(action, Failure::PlaylistNotFound)),
        }
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<Outcome, OperationError> {
        match self.playlists.remove(name) {
            Some(_) => {
                log::debug!("Deleted playlist {:?}", name);
                Ok(Outcome::ok(format!("Deleted playlist: {name}")))
            }
            None => Err(OperationError::new(
                Action::DeletePlaylist(name.to_string()),
                Failure::PlaylistNotFound,
            )),
        }
    }

    /// Videos in insertion order, flagged ones annotated
    pub fn show_playlist(&self, name: &str) -> Result<Outcome, OperationError> {
        let playlist = self.require_playlist(name, &Action::ShowPlaylist(name.to_string()))?;

        let videos: Vec<_> = playlist
            .video_ids
            .iter()
            .filter_map(|id| self.catalog.get_video(id))
            .map(|video| self.entry(video))
            .collect();

        let mut messages = vec![format!("Showing playlist: {name}")];
        if videos.is_empty() {
            messages.push("No videos here yet".to_string());
        }

        Ok(Outcome::lines(messages).with_payload(Payload::Playlist {
            name: playlist.name.clone(),
            videos,
        }))
    }

    pub fn show_all_playlists(&self) -> Outcome {
        let names: Vec<String> = self.playlists.playlists().map(|p| p.name.clone()).collect();
        let message = if names.is_empty() {
            "No playlists exist yet"
        } else {
            "Showing all playlists:"
        };
        Outcome::ok(message).with_payload(Payload::Playlists(names))
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{sample_catalog, FixedPicker};
    use super::*;

    fn player() -> VideoPlayer {
        VideoPlayer::with_picker(sample_catalog(), FixedPicker(0))
    }

    fn ids(player: &VideoPlayer, name: &str) -> Vec<String> {
        player.playlists().get(name).unwrap().video_ids.clone()
    }

    #[test]
    fn test_create_duplicate_name_any_case() {
        let mut player = player();
        player.create_playlist("Foo").unwrap();

        let err = player.create_playlist("foo").unwrap_err();
        assert_eq!(err.failure, Failure::PlaylistExists);
        assert_eq!(player.playlists().len(), 1);
    }

    #[test]
    fn test_empty_playlist_shows_placeholder() {
        let mut player = player();
        player.create_playlist("my_list").unwrap();

        let outcome = player.show_playlist("my_list").unwrap();
        assert_eq!(
            outcome.messages,
            vec!["Showing playlist: my_list", "No videos here yet"]
        );
    }

    #[test]
    fn test_add_then_show() {
        let mut player = player();
        player.create_playlist("my_list").unwrap();

        let added = player.add_to_playlist("MY_LIST", "amazing_cats_video_id").unwrap();
        assert_eq!(added.messages, vec!["Added video to MY_LIST: Amazing Cats"]);

        let Some(Payload::Playlist { name, videos }) = player.show_playlist("my_list").unwrap().payload
        else {
            panic!("expected a playlist payload");
        };
        assert_eq!(name, "my_list");
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].video.id, "amazing_cats_video_id");
    }

    #[test]
    fn test_add_failures_in_order() {
        let mut player = player();
        assert_eq!(
            player.add_to_playlist("nope", "bogus").unwrap_err().failure,
            Failure::PlaylistNotFound
        );

        player.create_playlist("mix").unwrap();
        assert_eq!(
            player.add_to_playlist("mix", "bogus").unwrap_err().failure,
            Failure::VideoNotFound
        );

        player.add_to_playlist("mix", "funny_dogs_video_id").unwrap();
        assert_eq!(
            player.add_to_playlist("mix", "funny_dogs_video_id").unwrap_err().failure,
            Failure::AlreadyInPlaylist
        );

        player.flag_video("amazing_cats_video_id", Some("dont_like_cats")).unwrap();
        let err = player.add_to_playlist("mix", "amazing_cats_video_id").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot add video to mix: Video is currently flagged (reason: dont_like_cats)"
        );
        assert_eq!(ids(&player, "mix"), vec!["funny_dogs_video_id"]);
    }

    #[test]
    fn test_add_then_remove_restores_sequence() {
        let mut player = player();
        player.create_playlist("mix").unwrap();
        player.add_to_playlist("mix", "funny_dogs_video_id").unwrap();
        player.add_to_playlist("mix", "life_at_google_video_id").unwrap();
        let before = ids(&player, "mix");

        player.add_to_playlist("mix", "amazing_cats_video_id").unwrap();
        player.remove_from_playlist("mix", "amazing_cats_video_id").unwrap();

        assert_eq!(ids(&player, "mix"), before);
    }

    #[test]
    fn test_remove_failures() {
        let mut player = player();
        assert_eq!(
            player.remove_from_playlist("nope", "funny_dogs_video_id").unwrap_err().failure,
            Failure::PlaylistNotFound
        );

        player.create_playlist("mix").unwrap();
        assert_eq!(
            player.remove_from_playlist("mix", "bogus").unwrap_err().failure,
            Failure::VideoNotFound
        );
        assert_eq!(
            player.remove_from_playlist("mix", "funny_dogs_video_id").unwrap_err().failure,
            Failure::NotInPlaylist
        );
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let mut player = player();
        player.create_playlist("mix").unwrap();
        player.add_to_playlist("mix", "funny_dogs_video_id").unwrap();

        player.clear_playlist("Mix").unwrap();
        assert!(ids(&player, "mix").is_empty());
        assert!(player.playlists().contains("mix"));

        assert_eq!(
            player.clear_playlist("nope").unwrap_err().failure,
            Failure::PlaylistNotFound
        );
    }

    #[test]
    fn test_delete_playlist() {
        let mut player = player();
        player.create_playlist("mix").unwrap();
        player.delete_playlist("MIX").unwrap();

        assert!(!player.playlists().contains("mix"));
        assert_eq!(
            player.delete_playlist("mix").unwrap_err().failure,
            Failure::PlaylistNotFound
        );
    }

    #[test]
    fn test_show_playlist_annotates_flagged() {
        let mut player = player();
        player.create_playlist("mix").unwrap();
        player.add_to_playlist("mix", "amazing_cats_video_id").unwrap();
        player.flag_video("amazing_cats_video_id", None).unwrap();

        let outcome = player.show_playlist("mix").unwrap();
        assert_eq!(
            outcome.to_string(),
            "Showing playlist: mix\n  Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: Not supplied)"
        );
    }

    #[test]
    fn test_show_all_playlists() {
        let mut player = player();
        assert_eq!(
            player.show_all_playlists().messages,
            vec!["No playlists exist yet"]
        );

        for name in ["rock", "Jazz", "ambient"] {
            player.create_playlist(name).unwrap();
        }
        assert_eq!(
            player.show_all_playlists().payload,
            Some(Payload::Playlists(vec![
                "ambient".to_string(),
                "Jazz".to_string(),
                "rock".to_string(),
            ]))
        );
    }
}
