// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, bail, Context, Result};
use playlist::config::{validate_config, Config, DisplayConfig, LoggingConfig};
use playlist::{Playlist, Song};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("PLAYLIST - Build a playlist and mark songs as played");
    println!();
    println!("Usage: playlist [OPTIONS] <SONG>...");
    println!();
    println!("Options:");
    println!("  --config <FILE>   Load settings from a YAML file");
    println!("  --stars <N>       Rate every song N stars (at most 5)");
    println!("  --play-all        Mark every song as played");
    println!("  --help            Show this help message");
}

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    stars: Option<i32>,
    play_all: bool,
    help: bool,
    songs: Vec<String>,
}

fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or_else(|| anyhow!("--config requires a file"))?;
                options.config = Some(PathBuf::from(path));
            }
            "--stars" => {
                let value = args.next().ok_or_else(|| anyhow!("--stars requires a number"))?;
                let stars = value
                    .parse::<i32>()
                    .with_context(|| format!("Invalid star rating: {}", value))?;
                options.stars = Some(stars);
            }
            "--play-all" => options.play_all = true,
            "--help" | "-h" => options.help = true,
            flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
            _ => options.songs.push(arg),
        }
    }

    Ok(options)
}

fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level)
            .with_context(|| format!("Invalid log level: {}", logging.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn render_song(song: &Song, display: &DisplayConfig) -> String {
    let mut line = song.name().to_string();

    if display.show_stars {
        line.push(' ');
        line.push_str(&song.star_bar());
    }
    if song.is_played() {
        line.push(' ');
        line.push_str(&display.played_marker);
    }

    line
}

/// Load settings, falling back to defaults when no file is given or the
/// given file does not exist. A file that exists must parse and validate.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) if path.exists() => validate_config(path),
        _ => Ok(Config::default()),
    }
}

fn run(options: &Options, config: &Config) -> Result<()> {
    if options.songs.is_empty() {
        bail!("No songs given");
    }

    let mut songs = Vec::with_capacity(options.songs.len());
    for name in &options.songs {
        let mut song = Song::new(name.as_str());
        if let Some(stars) = options.stars {
            song.set_stars(stars)
                .with_context(|| format!("Failed to rate {:?}", name))?;
        }
        songs.push(song.into_shared());
    }

    let mut playlist: Playlist = Playlist::new();
    playlist.add(songs);
    info!(count = playlist.count(), "playlist built");

    if options.play_all {
        playlist.mark_all_as_played();
    }

    for (i, song) in playlist.songs().enumerate() {
        println!("{:>3}. {}", i + 1, render_song(&song.borrow(), &config.display));
    }
    println!();
    println!("{} songs, {} played", playlist.count(), playlist.played_count());

    Ok(())
}

fn main() -> Result<()> {
    let options = parse_args(env::args().skip(1))?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let config = load_config(options.config.as_deref())?;
    init_logging(&config.logging)?;

    if let Some(path) = options.config.as_deref().filter(|path| !path.exists()) {
        warn!(path = ?path, "config file not found, using defaults");
    }

    run(&options, &config)
}
