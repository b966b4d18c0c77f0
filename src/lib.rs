//! YT Terminal - a text-command video player simulator
//!
//! This library loads a video catalog from a pipe-delimited records
//! file and drives a per-session player (playback, playlists, search,
//! flagging) from whitespace-separated commands.

pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod player;
pub mod records;
pub mod repl;

pub use command::{execute, execute_line};
pub use config::SessionConfig;
pub use error::{CommandError, OperationError, UsageError};
pub use output::Outcome;
pub use player::VideoPlayer;
