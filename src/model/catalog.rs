use super::Video;
use std::collections::HashMap;

/// Read-only set of known videos, keyed by id
#[derive(Debug, Clone)]
pub struct Catalog {
    videos: HashMap<String, Video>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video, returning the record it replaced (if any)
    pub fn add_video(&mut self, video: Video) -> Option<Video> {
        self.videos.insert(video.id.clone(), video)
    }

    /// Get a video by ID
    pub fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.contains_key(id)
    }

    /// Get all videos (unordered)
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// All videos sorted case-insensitively by title, then raw title, then id
    pub fn sorted_by_title(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort_by_cached_key(|v| (v.title.to_lowercase(), v.title.clone(), v.id.clone()));
        videos
    }

    /// Total number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for Catalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for video in iter {
            catalog.add_video(video);
        }
        catalog
    }
}
