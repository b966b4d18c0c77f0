//! Dispatch table: command name -> arity, usage text and handler

use crate::error::OperationError;
use crate::output::{Outcome, Payload};
use crate::player::VideoPlayer;

/// Handler invoked with the arguments that follow the command name
pub type Handler = fn(&mut VideoPlayer, &[&str]) -> Result<Outcome, OperationError>;

/// Number of positional arguments a command accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive range
    Between(usize, usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::Between(min, max) => (min..=max).contains(&count),
        }
    }
}

/// One row of the dispatch table
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub arity: Arity,
    /// Argument placeholders shown in HELP
    pub synopsis: &'static str,
    /// Message of the UsageError raised on wrong arity
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "NUMBER_OF_VIDEOS",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter NUMBER_OF_VIDEOS command without arguments.",
        summary: "Shows how many videos are in the library.",
        handler: number_of_videos,
    },
    CommandSpec {
        name: "SHOW_ALL_VIDEOS",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter SHOW_ALL_VIDEOS command without arguments.",
        summary: "Lists all videos from the library.",
        handler: show_all_videos,
    },
    CommandSpec {
        name: "PLAY",
        arity: Arity::Exact(1),
        synopsis: "<video_id>",
        usage: "Please enter PLAY command followed by video_id.",
        summary: "Plays specified video.",
        handler: play,
    },
    CommandSpec {
        name: "PLAY_RANDOM",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter PLAY_RANDOM command without arguments.",
        summary: "Plays a random video from the library.",
        handler: play_random,
    },
    CommandSpec {
        name: "STOP",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter STOP command without arguments.",
        summary: "Stop the current video.",
        handler: stop,
    },
    CommandSpec {
        name: "PAUSE",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter PAUSE command without arguments.",
        summary: "Pause the current video.",
        handler: pause,
    },
    CommandSpec {
        name: "CONTINUE",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter CONTINUE command without arguments.",
        summary: "Resume the current paused video.",
        handler: continue_video,
    },
    CommandSpec {
        name: "SHOW_PLAYING",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter SHOW_PLAYING command without arguments.",
        summary: "Displays the title, id, tags and paused status of the current video.",
        handler: show_playing,
    },
    CommandSpec {
        name: "CREATE_PLAYLIST",
        arity: Arity::Exact(1),
        synopsis: "<playlist_name>",
        usage: "Please enter CREATE_PLAYLIST command followed by a playlist name.",
        summary: "Creates a new (empty) playlist with the provided name.",
        handler: create_playlist,
    },
    CommandSpec {
        name: "ADD_TO_PLAYLIST",
        arity: Arity::Exact(2),
        synopsis: "<playlist_name> <video_id>",
        usage: "Please enter ADD_TO_PLAYLIST command followed by a playlist name and video_id to add.",
        summary: "Adds the requested video to the playlist.",
        handler: add_to_playlist,
    },
    CommandSpec {
        name: "REMOVE_FROM_PLAYLIST",
        arity: Arity::Exact(2),
        synopsis: "<playlist_name> <video_id>",
        usage: "Please enter REMOVE_FROM_PLAYLIST command followed by a playlist name and video_id to remove.",
        summary: "Removes the specified video from the specified playlist.",
        handler: remove_from_playlist,
    },
    CommandSpec {
        name: "CLEAR_PLAYLIST",
        arity: Arity::Exact(1),
        synopsis: "<playlist_name>",
        usage: "Please enter CLEAR_PLAYLIST command followed by a playlist name.",
        summary: "Removes all the videos from the playlist.",
        handler: clear_playlist,
    },
    CommandSpec {
        name: "DELETE_PLAYLIST",
        arity: Arity::Exact(1),
        synopsis: "<playlist_name>",
        usage: "Please enter DELETE_PLAYLIST command followed by a playlist name.",
        summary: "Deletes the playlist.",
        handler: delete_playlist,
    },
    CommandSpec {
        name: "SHOW_PLAYLIST",
        arity: Arity::Exact(1),
        synopsis: "<playlist_name>",
        usage: "Please enter SHOW_PLAYLIST command followed by a playlist name.",
        summary: "List all the videos in this playlist.",
        handler: show_playlist,
    },
    CommandSpec {
        name: "SHOW_ALL_PLAYLISTS",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter SHOW_ALL_PLAYLISTS command without arguments.",
        summary: "Display all the available playlists.",
        handler: show_all_playlists,
    },
    CommandSpec {
        name: "SEARCH_VIDEOS",
        arity: Arity::Exact(1),
        synopsis: "<search_term>",
        usage: "Please enter SEARCH_VIDEOS command followed by a search term.",
        summary: "Display all the videos whose titles contain the search_term.",
        handler: search_videos,
    },
    CommandSpec {
        name: "SEARCH_VIDEOS_WITH_TAG",
        arity: Arity::Exact(1),
        synopsis: "<tag_name>",
        usage: "Please enter SEARCH_VIDEOS_WITH_TAG command followed by a video tag.",
        summary: "Display all videos whose tags contains the provided tag.",
        handler: search_videos_with_tag,
    },
    CommandSpec {
        name: "FLAG_VIDEO",
        arity: Arity::Between(1, 2),
        synopsis: "<video_id> [flag_reason]",
        usage: "Please enter FLAG_VIDEO command followed by a video_id and an optional flag reason.",
        summary: "Mark a video as flagged.",
        handler: flag_video,
    },
    CommandSpec {
        name: "ALLOW_VIDEO",
        arity: Arity::Exact(1),
        synopsis: "<video_id>",
        usage: "Please enter ALLOW_VIDEO command followed by a video_id.",
        summary: "Removes a flag from a video.",
        handler: allow_video,
    },
    CommandSpec {
        name: "HELP",
        arity: Arity::Exact(0),
        synopsis: "",
        usage: "Please enter HELP command without arguments.",
        summary: "Displays help.",
        handler: help,
    },
];

/// Case-insensitive lookup by command name
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}

/// Help text built from the table, plus the REPL-only EXIT line
pub fn help_text() -> String {
    let mut lines = vec!["Available commands:".to_string()];
    for spec in COMMANDS {
        let invocation = if spec.synopsis.is_empty() {
            spec.name.to_string()
        } else {
            format!("{} {}", spec.name, spec.synopsis)
        };
        lines.push(format!("    {} - {}", invocation, spec.summary));
    }
    lines.push("    EXIT - Terminates the program execution.".to_string());
    lines.join("\n")
}

// Arity is checked before any handler runs, so indexing `args` is safe.

fn number_of_videos(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.number_of_videos())
}

fn show_all_videos(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.show_all_videos())
}

fn play(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.play_video(args[0])
}

fn play_random(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    player.play_random_video()
}

fn stop(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.stop_video())
}

fn pause(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    player.pause_video()
}

fn continue_video(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    player.continue_video()
}

fn show_playing(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.show_playing())
}

fn create_playlist(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.create_playlist(args[0])
}

fn add_to_playlist(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.add_to_playlist(args[0], args[1])
}

fn remove_from_playlist(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.remove_from_playlist(args[0], args[1])
}

fn clear_playlist(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.clear_playlist(args[0])
}

fn delete_playlist(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.delete_playlist(args[0])
}

fn show_playlist(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.show_playlist(args[0])
}

fn show_all_playlists(player: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.show_all_playlists())
}

fn search_videos(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.search_videos(args[0]))
}

fn search_videos_with_tag(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    Ok(player.search_videos_with_tag(args[0]))
}

fn flag_video(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.flag_video(args[0], args.get(1).copied())
}

fn allow_video(player: &mut VideoPlayer, args: &[&str]) -> Result<Outcome, OperationError> {
    player.allow_video(args[0])
}

fn help(_: &mut VideoPlayer, _: &[&str]) -> Result<Outcome, OperationError> {
    Ok(Outcome::lines(Vec::new()).with_payload(Payload::Help(help_text())))
}
