//! Title and tag search, plus numeric follow-up selection

use super::VideoPlayer;
use crate::error::OperationError;
use crate::model::Video;
use crate::output::{Outcome, Payload};

/// Map a 1-based answer onto `0..len`. Anything else means "no".
pub fn selection_index(answer: &str, len: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

impl VideoPlayer {
    /// Unflagged videos accepted by `matches`, sorted by title
    fn search(&self, matches: impl Fn(&Video) -> bool) -> Vec<Video> {
        self.catalog
            .sorted_by_title()
            .into_iter()
            .filter(|video| !self.flags.is_flagged(&video.id) && matches(*video))
            .cloned()
            .collect()
    }

    fn search_outcome(query: &str, results: Vec<Video>) -> Outcome {
        let message = if results.is_empty() {
            format!("No search results for {query}")
        } else {
            format!("Here are the results for {query}:")
        };
        Outcome::ok(message).with_payload(Payload::SearchResults(results))
    }

    pub fn search_videos(&self, term: &str) -> Outcome {
        let results = self.search(|video| video.title_contains(term));
        log::debug!("SEARCH_VIDEOS {:?}: {} hits", term, results.len());
        Self::search_outcome(term, results)
    }

    pub fn search_videos_with_tag(&self, tag: &str) -> Outcome {
        let results = self.search(|video| video.has_tag(tag));
        log::debug!("SEARCH_VIDEOS_WITH_TAG {:?}: {} hits", tag, results.len());
        Self::search_outcome(tag, results)
    }

    /// Play the `answer`-th (1-based) search result. `Ok(None)` when the
    /// answer is not a valid index.
    pub fn play_search_selection(
        &mut self,
        results: &[Video],
        answer: &str,
    ) -> Result<Option<Outcome>, OperationError> {
        match selection_index(answer, results.len()) {
            Some(index) => self.play_video(&results[index].id).map(Some),
            None => Ok(None),
        }
    }
}
