//! In-memory data model for the video service
//!
//! These types are independent of the catalog file format and of how
//! outcomes are rendered.

mod catalog;
mod playlist;
mod video;

pub use catalog::Catalog;
pub use playlist::Playlist;
pub use video::Video;
