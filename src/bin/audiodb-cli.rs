use std::sync::Arc;
use std::time::Duration;

use audiodb_view::config::{DEFAULT_API_KEY, DEFAULT_BASE_URL};
use audiodb_view::{
    AlbumController, AlbumViewState, ApiConfig, ArtistController, ArtistViewState, AudioDbApi,
    MetadataRepository, StateStream,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "audiodb-cli")]
#[command(about = "Browse TheAudioDB artists, albums and tracks", long_about = None)]
struct Cli {
    /// API base URL, without the key segment
    #[arg(long, env = "AUDIODB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// TheAudioDB API key
    #[arg(long, env = "AUDIODB_API_KEY", default_value = DEFAULT_API_KEY)]
    api_key: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an artist and their albums
    Artist {
        #[arg(default_value = "Taylor Swift")]
        name: String,
    },
    /// Show the tracks of one of an artist's albums
    Album {
        #[arg(default_value = "Taylor Swift")]
        artist: String,

        /// Album position in the artist's list (1-based)
        #[arg(short, long, default_value_t = 1)]
        index: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("audiodb_view=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ApiConfig::default()
        .with_base_url(cli.base_url)
        .with_api_key(cli.api_key)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let api = Arc::new(AudioDbApi::new(config)?);
    let repository = MetadataRepository::new(api);
    let artists = ArtistController::new(repository.clone());
    let albums = AlbumController::new(repository);

    match cli.command {
        Commands::Artist { name } => {
            let state = load_artist(&artists, &name).await?;
            print_artist(&state);
        }
        Commands::Album { artist, index } => {
            let state = load_artist(&artists, &artist).await?;
            if state.error.is_some() {
                print_artist(&state);
                return Ok(());
            }
            let Some(album) = index.checked_sub(1).and_then(|i| state.albums.get(i)) else {
                eprintln!(
                    "No album #{} for {} ({} albums)",
                    index,
                    artist,
                    state.albums.len()
                );
                return Ok(());
            };

            let states = albums.subscribe();
            albums.launch_load_album_details(album.clone());
            let state = settle(states, |s: &AlbumViewState| {
                !s.is_loading && s.album.is_some()
            })
            .await?;
            print_album(&state);
        }
    }

    Ok(())
}

async fn load_artist(
    controller: &ArtistController,
    name: &str,
) -> Result<Arc<ArtistViewState>, &'static str> {
    let states = controller.subscribe();
    controller.launch_load_artist(name);
    settle(states, |s: &ArtistViewState| {
        !s.is_loading && (s.artist.is_some() || s.error.is_some())
    })
    .await
}

/// Log each snapshot as it arrives until `done` holds.
///
/// Falls back to the last snapshot seen if the store goes away first.
async fn settle<S, F>(mut states: StateStream<S>, done: F) -> Result<Arc<S>, &'static str>
where
    S: std::fmt::Debug + Send + Sync + 'static,
    F: Fn(&S) -> bool,
{
    let mut last = None;
    while let Some(state) = states.next().await {
        tracing::debug!("state: {:?}", state);
        if done(&state) {
            return Ok(state);
        }
        last = Some(state);
    }
    last.ok_or("state stream closed before any snapshot")
}

fn print_artist(state: &ArtistViewState) {
    if let Some(error) = &state.error {
        println!("Error: {}", error);
    }
    let Some(artist) = &state.artist else {
        return;
    };
    println!(
        "{} ({})",
        artist.name,
        artist.genre.as_deref().unwrap_or("unknown genre")
    );
    if let Some(image) = artist.header_image() {
        println!("   {}", image);
    }
    for (i, album) in state.albums.iter().enumerate() {
        println!(
            "{}. {} [{}] (ID: {})",
            i + 1,
            album.title,
            album.subtitle(),
            album.id
        );
    }
}

fn print_album(state: &AlbumViewState) {
    if let Some(album) = &state.album {
        println!(
            "{} - {}",
            album.artist_name.as_deref().unwrap_or("?"),
            album.title
        );
        println!("   {}", album.subtitle());
    }
    if let Some(error) = &state.error {
        println!("Error: {}", error);
        return;
    }
    for (i, track) in state.tracks.iter().enumerate() {
        println!(
            "{:>2}. {} {}",
            i + 1,
            track.title,
            track.duration_formatted().unwrap_or_default()
        );
    }
}
