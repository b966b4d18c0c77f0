//! Per-session player
//!
//! Holds the playback state machine, the flag table and the playlist
//! store over a shared read-only catalog. Operations are split by
//! concern across the submodules but all live on [`VideoPlayer`].

mod flags;
mod picker;
#[allow(clippy::module_inception)]
mod player;
mod playlists;
mod search;
mod state;
mod store;

pub use flags::{FlagTable, DEFAULT_FLAG_REASON};
pub use picker::{RandomPicker, VideoPicker};
pub use player::VideoPlayer;
pub use search::selection_index;
pub use state::{PlaybackState, PlaybackStatus};
pub use store::PlaylistStore;
