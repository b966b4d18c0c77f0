//! Session configuration

use std::path::PathBuf;

/// Default location of the catalog records file
pub const DEFAULT_CATALOG_PATH: &str = "data/videos.txt";

pub const DEFAULT_PROMPT: &str = "YT> ";

/// Configuration for one interactive session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Pipe-delimited catalog file loaded at startup
    pub catalog_path: PathBuf,

    /// Seed for PLAY_RANDOM (None = entropy)
    pub seed: Option<u64>,

    /// Prompt shown before each command
    pub prompt: String,

    /// How outcomes are written to stdout
    pub format: OutputFormat,
}

/// Rendering of command outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,

    /// One JSON object per command
    Json,
}

impl SessionConfig {
    /// Create a new session configuration
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            seed: None,
            prompt: DEFAULT_PROMPT.to_string(),
            format: OutputFormat::Text,
        }
    }

    /// Make PLAY_RANDOM deterministic
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_CATALOG_PATH))
    }
}
