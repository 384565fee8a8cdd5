//! Radiofinder CLI: search the station directory and resolve stream URLs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use radiofinder::config::ScanStrategy;
use radiofinder::stream::{PlaylistResolver, Resolution};
use radiofinder_app::app::Finder;
use radiofinder_app::data::{save_m3u, ChannelList, ChannelListEntry, Settings, Station};
use radiofinder_app::directory::{Category, DirectoryClient, StationLookup};

/// Exit code when a playlist holds no playable stream
const EXIT_UNAVAILABLE: u8 = 2;

#[derive(Parser)]
#[command(
    name = "radiofinder",
    about = "Find internet radio stations and their stream URLs",
    version
)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory API server
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Saved channel list file
    #[arg(long, global = true)]
    channels: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search stations by name
    Search {
        term: String,
        /// Exact name match only
        #[arg(long)]
        exact: bool,
        /// Two-letter country code
        #[arg(long)]
        country: Option<String>,
        /// Save the results as an .m3u playlist
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },
    /// Stations by name, country, codec, language, tag or uuid
    Lookup { by: StationLookup, term: String },
    /// List countries, codecs, states, languages or tags
    List {
        category: Category,
        filter: Option<String>,
    },
    /// Resolve a station URL (.pls/.m3u or direct) to a stream URL
    Resolve {
        url: String,
        /// Parse playlist entries instead of taking the first http line
        #[arg(long)]
        structured: bool,
    },
    /// Ask the directory for a station's stream URL by station id
    Playable { station_id: String },
    /// Manage saved channels
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Show saved channels, optionally filtered by name
    List { filter: Option<String> },
    /// Save a channel
    Add { name: String, url: String },
    /// Remove a saved channel
    Remove { name: String },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(cli: &Cli) -> Settings {
    let mut settings = Settings::load().unwrap_or_else(|e| {
        warn!("using default settings: {e}");
        Settings::default()
    });
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(channels) = &cli.channels {
        settings.channels_file = Some(channels.clone());
    }
    settings
}

fn print_stations(stations: &[Station]) {
    if stations.is_empty() {
        println!("No stations found.");
        return;
    }
    for (i, station) in stations.iter().enumerate() {
        let mut details = Vec::new();
        if let Some(code) = &station.country_code {
            details.push(code.clone());
        }
        if let Some(codec) = &station.codec {
            details.push(codec.clone());
        }
        if let Some(bitrate) = station.bitrate {
            details.push(format!("{bitrate} kbps"));
        }
        if details.is_empty() {
            println!("{:>3}. {}", i + 1, station.name);
        } else {
            println!("{:>3}. {} [{}]", i + 1, station.name, details.join(", "));
        }
        println!("     {}", station.url);
    }
}

fn print_resolution(resolution: Resolution) -> ExitCode {
    match resolution {
        Resolution::Playable(stream) => {
            debug!(source = %stream.source(), original = stream.original_url(), "resolved");
            println!("{stream}");
            ExitCode::SUCCESS
        }
        Resolution::Unavailable { playlist_url } => {
            debug!(%playlist_url, "no playable entry");
            eprintln!("station unavailable");
            ExitCode::from(EXIT_UNAVAILABLE)
        }
    }
}

fn favorites(settings: &Settings, action: FavoritesAction) -> Result<()> {
    let path = settings.channels_path()?;
    let mut channels = ChannelList::load_from(&path)
        .with_context(|| format!("reading channel list {}", path.display()))?;

    match action {
        FavoritesAction::List { filter } => {
            let entries = channels.filter(filter.as_deref().unwrap_or(""));
            if entries.is_empty() {
                println!("No saved channels.");
            }
            for entry in entries {
                println!("{}\t{}", entry.name, entry.url);
            }
        }
        FavoritesAction::Add { name, url } => {
            let entry = Station::new(&name, url).to_channel();
            let saved_as = entry.name.clone();
            channels.add(entry)?;
            println!("Saved '{saved_as}'.");
        }
        FavoritesAction::Remove { name } => {
            let ChannelListEntry { name, .. } = channels.remove(&name)?;
            println!("Removed '{name}'.");
        }
    }

    if channels.is_dirty() {
        channels
            .save_to(&path)
            .with_context(|| format!("writing channel list {}", path.display()))?;
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let settings = load_settings(&cli);

    match cli.command {
        Command::Search {
            term,
            exact,
            country,
            export,
        } => {
            let finder = Finder::from_settings(&settings)?;
            let country = country.or_else(|| settings.default_country.clone());
            let stations = finder.search_stations(
                &term,
                exact || settings.exact_match,
                country.as_deref(),
            )?;
            print_stations(&stations);

            if let Some(path) = export {
                if save_m3u(&path, &stations)? {
                    println!("Exported {} stations to {}", stations.len(), path.display());
                } else {
                    println!("Nothing to export.");
                }
            }
        }
        Command::Lookup { by, term } => {
            let client = DirectoryClient::with_config(settings.directory_config())?;
            print_stations(&client.stations_by(by, &term)?);
        }
        Command::List { category, filter } => {
            let client = DirectoryClient::with_config(settings.directory_config())?;
            for entry in client.list(category, filter.as_deref())? {
                println!("{}\t{}", entry.name, entry.stationcount);
            }
        }
        Command::Resolve { url, structured } => {
            let mut config = settings.resolver_config();
            if structured {
                config = config.with_strategy(ScanStrategy::Structured);
            }
            let resolver = PlaylistResolver::with_config(config)?;
            return Ok(print_resolution(resolver.resolve(&url)?));
        }
        Command::Playable { station_id } => {
            let finder = Finder::from_settings(&settings)?;
            println!("{}", finder.resolve_playable(&station_id)?);
        }
        Command::Favorites { action } => favorites(&settings, action)?,
    }

    Ok(ExitCode::SUCCESS)
}
