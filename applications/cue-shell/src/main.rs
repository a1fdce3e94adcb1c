/// Cue Shell - interactive playlist engine
use clap::Parser;
use cue_playlist::RepeatMode;
use cue_shell::{Shell, ShellConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cue-shell")]
#[command(about = "Drive a Cue playlist from the command line", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./cue.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible shuffles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Initial repeat mode: off, all or one
    #[arg(short, long)]
    repeat: Option<RepeatMode>,

    /// Shuffle before the first command
    #[arg(long)]
    shuffle: bool,

    /// Initial tracks (replace tracks from the config file)
    tracks: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so replies on stdout stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cue_shell=info,cue_playlist=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ShellConfig::load(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.playlist.seed = Some(seed);
    }
    if let Some(repeat) = cli.repeat {
        config.playlist.repeat = repeat;
    }
    if cli.shuffle {
        config.playlist.shuffle = true;
    }
    if !cli.tracks.is_empty() {
        config.tracks = cli.tracks;
    }

    tracing::info!("Starting Cue shell");
    tracing::info!("Tracks: {}", config.tracks.len());
    tracing::info!("Repeat: {}", config.playlist.repeat);

    let mut shell = Shell::from_config(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
