//! Line parser for the records file

use crate::model::Video;
use anyhow::Result;
use std::io::BufRead;

const FIELD_DELIMITER: char = '|';
const TAG_DELIMITER: char = ',';

/// Result of parsing a single records line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLine {
    Video(Video),
    Blank,
    Malformed(&'static str),
}

/// Parse one `title | id | tag, tag` line
pub fn parse_line(line: &str) -> RecordLine {
    if line.trim().is_empty() {
        return RecordLine::Blank;
    }

    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    let [title, id, tags] = fields.as_slice() else {
        return RecordLine::Malformed("expected 3 fields");
    };

    if title.is_empty() {
        return RecordLine::Malformed("empty title");
    }
    if id.is_empty() {
        return RecordLine::Malformed("empty id");
    }

    let tags = tags
        .split(TAG_DELIMITER)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    RecordLine::Video(Video::new(*title, *id, tags))
}

/// Parse every record from a reader, skipping blank and malformed lines
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Video>> {
    let mut videos = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            RecordLine::Video(video) => videos.push(video),
            RecordLine::Blank => {}
            RecordLine::Malformed(reason) => {
                log::warn!("Skipping records line {}: {} ({:?})", index + 1, reason, line);
            }
        }
    }

    log::debug!("Parsed {} video records", videos.len());
    Ok(videos)
}
