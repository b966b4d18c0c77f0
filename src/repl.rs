//! Interactive command loop
//!
//! Text mode greets the user, prompts before each command and asks a
//! follow-up question after a search with results. JSON mode writes
//! exactly one JSON object per command line and nothing else, so it can
//! be scripted.

use crate::command::execute_line;
use crate::config::{OutputFormat, SessionConfig};
use crate::error::CommandError;
use crate::output::Outcome;
use crate::player::VideoPlayer;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Hello and welcome to YouTube, what would you like to do?\n    \
     Enter HELP for list of available commands or EXIT to terminate.";

pub const GOODBYE: &str = "YouTube has now terminated its execution. Thank you and goodbye!";

pub const SELECTION_QUESTION: &str = "Would you like to play any of the above? If yes, specify the number of the video.\n\
     If your answer is not a valid number, we will assume it's a no.";

/// Run commands from `input` until EXIT or end of input
pub fn run<R: BufRead, W: Write>(
    player: &mut VideoPlayer,
    config: &SessionConfig,
    input: R,
    mut output: W,
) -> Result<()> {
    let text = config.format == OutputFormat::Text;
    let mut lines = input.lines();

    if text {
        writeln!(output, "{WELCOME}")?;
    }

    loop {
        if text {
            write!(output, "{}", config.prompt)?;
            output.flush().context("Failed to flush output")?;
        }
        let Some(line) = lines.next().transpose().context("Failed to read command")? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("EXIT") {
            break;
        }

        let result = execute_line(player, &line);
        report(config, &mut output, &result)?;

        // JSON sessions never consume a line as a selection answer
        if !text {
            continue;
        }
        let Ok(outcome) = result else { continue };
        let Some(results) = outcome.search_results().filter(|r| !r.is_empty()) else {
            continue;
        };

        writeln!(output, "{SELECTION_QUESTION}")?;
        output.flush().context("Failed to flush output")?;
        let Some(answer) = lines.next().transpose().context("Failed to read answer")? else {
            break;
        };
        match player.play_search_selection(results, &answer) {
            Ok(Some(played)) => report(config, &mut output, &Ok(played))?,
            Ok(None) => log::debug!("Search selection {:?} declined", answer),
            Err(err) => report(config, &mut output, &Err(err.into()))?,
        }
    }

    if text {
        writeln!(output, "{GOODBYE}")?;
    }
    Ok(())
}

fn report<W: Write>(
    config: &SessionConfig,
    output: &mut W,
    result: &Result<Outcome, CommandError>,
) -> Result<()> {
    match config.format {
        OutputFormat::Text => match result {
            Ok(outcome) => writeln!(output, "{outcome}")?,
            Err(err) => writeln!(output, "{err}")?,
        },
        OutputFormat::Json => {
            let value = match result {
                Ok(outcome) => serde_json::to_value(outcome)?,
                Err(CommandError::Usage(err)) => serde_json::json!({
                    "status": "error",
                    "error": "usage",
                    "message": err.message,
                }),
                Err(CommandError::Operation(err)) => serde_json::json!({
                    "status": "error",
                    "error": err.failure.code(),
                    "message": err.to_string(),
                }),
            };
            writeln!(output, "{value}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::testing::{sample_catalog, FixedPicker};
    use std::io::Cursor;

    fn session(format: OutputFormat, input: &str) -> (VideoPlayer, String) {
        let mut player = VideoPlayer::with_picker(sample_catalog(), FixedPicker(0));
        let config = SessionConfig::default().with_format(format);
        let mut output = Vec::new();
        run(&mut player, &config, Cursor::new(input), &mut output).unwrap();
        (player, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_text_selection_plays_result() {
        let (player, output) = session(OutputFormat::Text, "SEARCH_VIDEOS cat\n2\nEXIT\n");

        assert_eq!(player.playback().current_id(), Some("another_cat_video_id"));
        assert!(output.starts_with(WELCOME));
        assert!(output.contains(SELECTION_QUESTION));
        assert!(output.contains("Playing video: Another Cat Video"));
        assert!(output.ends_with(&format!("{GOODBYE}\n")));
    }

    #[test]
    fn test_text_selection_declined() {
        let (player, output) =
            session(OutputFormat::Text, "SEARCH_VIDEOS cat\nno thanks\nSHOW_PLAYING\n");

        assert_eq!(player.playback().current_id(), None);
        assert!(output.contains("No video is currently playing"));
    }

    #[test]
    fn test_no_question_without_results() {
        let (_, output) = session(OutputFormat::Text, "SEARCH_VIDEOS blah\nEXIT\n");
        assert!(output.contains("No search results for blah"));
        assert!(!output.contains(SELECTION_QUESTION));
    }

    #[test]
    fn test_json_runs_every_line_as_a_command() {
        let (player, output) = session(
            OutputFormat::Json,
            "SEARCH_VIDEOS cat\nPLAY funny_dogs_video_id\nSHOW_PLAYING\nSTOP\nPLAY bogus\nEXIT\n",
        );

        let records: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["payload"]["kind"], "search_results");
        assert_eq!(records[1]["messages"][0], "Playing video: Funny Dogs");
        assert_eq!(records[2]["payload"]["data"]["video"]["id"], "funny_dogs_video_id");
        assert_eq!(records[3]["status"], "ok");
        assert_eq!(records[4]["error"], "video_not_found");
        assert_eq!(player.playback().current_id(), None);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = session(OutputFormat::Json, "NUMBER_OF_VIDEOS");
        assert_eq!(output.lines().count(), 1);
    }
}
