//! quakewatch CLI
//!
//! Polls one USGS summary feed and redraws a color-coded table every minute.

use std::path::PathBuf;

use clap::{Args, Parser};
use quakewatch::{
    error::Result,
    models::{Config, Feed},
    pipeline,
};

/// quakewatch - live earthquake table for the terminal
#[derive(Parser, Debug)]
#[command(
    name = "quakewatch",
    version,
    about = "Live USGS earthquake feed in your terminal"
)]
struct Cli {
    #[command(flatten)]
    feed: FeedArgs,

    /// Path to an optional TOML config file
    #[arg(short, long, default_value = "quakewatch.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Feed selection. Exactly one flag is required.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct FeedArgs {
    /// M4.5+ earthquakes, past hour
    #[arg(long)]
    hour45: bool,

    /// M2.5+ earthquakes, past hour
    #[arg(long)]
    hour25: bool,

    /// M1.0+ earthquakes, past hour
    #[arg(long)]
    hour10: bool,

    /// M4.5+ earthquakes, past day
    #[arg(long)]
    day45: bool,

    /// M2.5+ earthquakes, past day
    #[arg(long)]
    day25: bool,

    /// M1.0+ earthquakes, past day
    #[arg(long)]
    day10: bool,
}

impl FeedArgs {
    /// The feed named by the flag that was set. clap's required group
    /// guarantees exactly one, so the last flag is the fallthrough.
    fn selected(&self) -> Feed {
        if self.hour45 {
            Feed::Hour45
        } else if self.hour25 {
            Feed::Hour25
        } else if self.hour10 {
            Feed::Hour10
        } else if self.day45 {
            Feed::Day45
        } else if self.day25 {
            Feed::Day25
        } else {
            Feed::Day10
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let feed = cli.feed.selected();

    // A missing file means defaults; a file that is present must parse.
    let config = if cli.config.exists() {
        Config::load(&cli.config).inspect_err(|e| {
            log::error!("Config load failed from {}: {}", cli.config.display(), e)
        })?
    } else {
        log::debug!("No config at {}, using defaults", cli.config.display());
        Config::default()
    };

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    pipeline::run_watcher(&config, feed).await
}
