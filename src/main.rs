use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use yt_terminal::config::{OutputFormat, DEFAULT_CATALOG_PATH, DEFAULT_PROMPT};
use yt_terminal::{repl, SessionConfig, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "yt-terminal")]
#[command(about = "Interactive text-command video player simulator", long_about = None)]
struct Args {
    /// Path to the pipe-delimited video catalog
    #[arg(short = 'c', long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: String,

    /// Seed PLAY_RANDOM for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Output format for command results (json: one object per command line)
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Prompt shown before each command
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr; kept quiet so it does not interleave with the REPL)
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);

    let mut config = SessionConfig::new(PathBuf::from(catalog_path.as_ref()))
        .with_prompt(args.prompt)
        .with_format(args.format);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut player = VideoPlayer::open(&config)?;
    log::info!(
        "Session started with {} videos",
        player.catalog().video_count()
    );

    repl::run(&mut player, &config, io::stdin().lock(), io::stdout().lock())
}
