//! Catalog records file loading
//!
//! Reads the pipe-delimited `title | id | tags` file that seeds the
//! catalog at startup.

mod parser;

pub use parser::{parse_line, parse_records, RecordLine};

use crate::model::Catalog;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load the complete catalog from a records file
///
/// # Arguments
/// * `path` - Path to the records file (e.g. data/videos.txt)
///
/// # Returns
/// A catalog holding every well-formed record; later duplicates win
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    log::info!("Loading video catalog from {:?}", path);

    let file = File::open(path)
        .with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let videos = parse_records(BufReader::new(file))
        .with_context(|| format!("Failed to read video catalog: {:?}", path))?;

    let mut catalog = Catalog::new();
    for video in videos {
        if let Some(previous) = catalog.add_video(video) {
            log::warn!(
                "Duplicate video id {:?}; replacing {:?}",
                previous.id,
                previous.title
            );
        }
    }

    log::info!("Loaded catalog: {} videos", catalog.video_count());
    Ok(catalog)
}
