//! Case-insensitive playlist store

use crate::model::Playlist;
use std::collections::BTreeMap;

/// Playlists keyed by lowercase name; iterates alphabetically
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(&Playlist::key(name))
    }

    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::key(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&Playlist::key(name))
    }

    /// Insert a playlist. Returns false (store unchanged) if the name is taken.
    pub fn insert(&mut self, playlist: Playlist) -> bool {
        let key = Playlist::key(&playlist.name);
        if self.playlists.contains_key(&key) {
            return false;
        }
        self.playlists.insert(key, playlist);
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<Playlist> {
        self.playlists.remove(&Playlist::key(name))
    }

    /// Playlists in case-insensitive alphabetical order
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
