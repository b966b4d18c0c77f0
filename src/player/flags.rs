//! Moderation flag table

use std::collections::HashMap;

/// Reason stored when FLAG_VIDEO is given none
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Moderation flags: video id -> reason. Presence means flagged.
#[derive(Debug, Clone, Default)]
pub struct FlagTable {
    reasons: HashMap<String, String>,
}

impl FlagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flagged(&self, video_id: &str) -> bool {
        self.reasons.contains_key(video_id)
    }

    pub fn reason(&self, video_id: &str) -> Option<&str> {
        self.reasons.get(video_id).map(String::as_str)
    }

    pub fn flag(&mut self, video_id: String, reason: String) {
        self.reasons.insert(video_id, reason);
    }

    /// Clear a flag, returning its reason if the video was flagged
    pub fn allow(&mut self, video_id: &str) -> Option<String> {
        self.reasons.remove(video_id)
    }

    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_and_allow() {
        let mut flags = FlagTable::new();
        flags.flag("a".to_string(), DEFAULT_FLAG_REASON.to_string());

        assert!(flags.is_flagged("a"));
        assert_eq!(flags.reason("a"), Some("Not supplied"));
        assert_eq!(flags.allow("a").as_deref(), Some("Not supplied"));
        assert_eq!(flags.allow("a"), None);
        assert!(flags.is_empty());
    }
}
