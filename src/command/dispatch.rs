//! Command dispatch

use super::table;
use crate::error::{CommandError, UsageError};
use crate::output::Outcome;
use crate::player::VideoPlayer;

/// Shown for empty input and unknown commands
pub const INVALID_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// Execute one tokenized command against a session's player.
///
/// The first token selects the command (case-insensitive). Empty input
/// and wrong argument counts are `UsageError`s; an unknown command name
/// is a warning outcome so the caller can keep going.
pub fn execute<S: AsRef<str>>(player: &mut VideoPlayer, tokens: &[S]) -> Result<Outcome, CommandError> {
    let tokens: Vec<&str> = tokens.iter().map(|token| token.as_ref()).collect();
    let Some((name, args)) = tokens.split_first() else {
        return Err(UsageError::new(INVALID_COMMAND).into());
    };

    let Some(spec) = table::find(name) else {
        log::debug!("Unknown command {:?}", name);
        return Ok(Outcome::warning(INVALID_COMMAND));
    };

    if !spec.arity.accepts(args.len()) {
        log::debug!("{} given {} argument(s)", spec.name, args.len());
        return Err(UsageError::new(spec.usage).into());
    }

    log::debug!("Dispatching {} {:?}", spec.name, args);
    (spec.handler)(player, args).map_err(|err| {
        log::debug!("{} failed: {}", spec.name, err);
        CommandError::from(err)
    })
}

/// Split a raw line on whitespace and execute it
pub fn execute_line(player: &mut VideoPlayer, line: &str) -> Result<Outcome, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    execute(player, &tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Failure, OperationError};
    use crate::output::{Payload, Status};
    use crate::player::testing::{sample_catalog, FixedPicker};
    use crate::player::PlaybackStatus;

    fn player() -> VideoPlayer {
        VideoPlayer::with_picker(sample_catalog(), FixedPicker(0))
    }

    fn usage(result: Result<Outcome, CommandError>) -> String {
        match result {
            Err(CommandError::Usage(err)) => err.message,
            other => panic!("expected usage error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_usage_error() {
        let mut player = player();
        let empty: [&str; 0] = [];
        assert_eq!(usage(execute(&mut player, &empty)), INVALID_COMMAND);
        assert_eq!(usage(execute_line(&mut player, "   ")), INVALID_COMMAND);
    }

    #[test]
    fn test_unknown_command_is_warning() {
        let mut player = player();
        let outcome = execute_line(&mut player, "REWIND 10").unwrap();
        assert_eq!(outcome.status, Status::Warning);
        assert_eq!(outcome.messages, vec![INVALID_COMMAND]);
    }

    #[test]
    fn test_wrong_arity() {
        let mut player = player();
        assert_eq!(
            usage(execute_line(&mut player, "PLAY")),
            "Please enter PLAY command followed by video_id."
        );
        assert_eq!(
            usage(execute_line(&mut player, "ADD_TO_PLAYLIST mix")),
            "Please enter ADD_TO_PLAYLIST command followed by a playlist name and video_id to add."
        );
        assert_eq!(
            usage(execute_line(&mut player, "FLAG_VIDEO a b c")),
            "Please enter FLAG_VIDEO command followed by a video_id and an optional flag reason."
        );
        assert_eq!(
            usage(execute_line(&mut player, "STOP now")),
            "Please enter STOP command without arguments."
        );
        assert_eq!(player.playback().status(), PlaybackStatus::Stopped);
    }

    #[test]
    fn test_command_names_ignore_case() {
        let mut player = player();
        execute_line(&mut player, "play amazing_cats_video_id").unwrap();
        execute_line(&mut player, "Pause").unwrap();
        assert_eq!(player.playback().status(), PlaybackStatus::Paused);
    }

    #[test]
    fn test_arguments_keep_case() {
        let mut player = player();
        let err = execute_line(&mut player, "PLAY AMAZING_CATS_VIDEO_ID").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Operation(OperationError {
                failure: Failure::VideoNotFound,
                ..
            })
        ));
    }

    #[test]
    fn test_flag_with_and_without_reason() {
        let mut player = player();
        execute_line(&mut player, "FLAG_VIDEO funny_dogs_video_id").unwrap();
        execute_line(&mut player, "FLAG_VIDEO amazing_cats_video_id dont_like_cats").unwrap();

        assert_eq!(player.flags().reason("funny_dogs_video_id"), Some("Not supplied"));
        assert_eq!(
            player.flags().reason("amazing_cats_video_id"),
            Some("dont_like_cats")
        );
    }

    #[test]
    fn test_help() {
        let mut player = player();
        let outcome = execute_line(&mut player, "help").unwrap();
        assert!(matches!(outcome.payload, Some(Payload::Help(ref text)) if text.starts_with("Available commands:")));
    }
}
