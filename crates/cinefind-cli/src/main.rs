//! cinefind - terminal movie/TV discovery over the TMDB API.

/// Application configuration (TOML).
mod config;
/// Terminal UI components.
mod tui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{AppConfig, resolve_config_path};
use crate::tui::run_browser;
use cinefind_api::tmdb::{
    FilterState, GenreCatalog, Language, LocalTmdbApi, MediaItem, MediaType, SearchState,
    TmdbClient, TrendingWindow, fetch_browse_rows, fetch_trailer_url,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Browse movies and TV shows interactively (TUI).
    Browse,
    /// Run a one-shot discover query.
    Discover(DiscoverArgs),
    /// Run a one-shot free-text search.
    Search(SearchArgs),
    /// Show the trending list.
    Trending(TrendingArgs),
    /// Print the genre catalog.
    Genres,
    /// Resolve and print the trailer URL for a title.
    Trailer(TrailerArgs),
}

/// Arguments for the `discover` subcommand.
#[derive(clap::Args)]
struct DiscoverArgs {
    /// Genre name (e.g. "Action"); unknown names are silently ignored.
    #[arg(long)]
    genre: Option<String>,

    /// Release year for movies, first-air-date year for TV.
    #[arg(long)]
    year: Option<String>,

    /// Original-language code (e.g. "en", "ja").
    #[arg(long)]
    language: Option<String>,

    /// Media type: "movie" or "tv" (default: movie).
    #[arg(long = "type", value_name = "TYPE")]
    media_type: Option<MediaType>,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search text.
    query: String,

    /// Media type: "movie" or "tv" (default: movie).
    #[arg(long = "type", value_name = "TYPE")]
    media_type: Option<MediaType>,
}

/// Arguments for the `trending` subcommand.
#[derive(clap::Args)]
struct TrendingArgs {
    /// Media type: "movie" or "tv" (default: movie).
    #[arg(long = "type", value_name = "TYPE")]
    media_type: Option<MediaType>,

    /// Time window: "day" or "week" (default: week).
    #[arg(long, default_value = "week")]
    window: TrendingWindow,
}

/// Arguments for the `trailer` subcommand.
#[derive(clap::Args)]
struct TrailerArgs {
    /// TMDB title ID.
    id: u64,

    /// Media type: "movie" or "tv" (default: movie).
    #[arg(long = "type", value_name = "TYPE")]
    media_type: Option<MediaType>,
}

/// Builds a `TmdbClient` from the `TMDB_API_KEY` environment variable.
///
/// # Errors
///
/// Returns an error if `TMDB_API_KEY` is not set or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client() -> Result<TmdbClient> {
    let api_key =
        std::env::var("TMDB_API_KEY").context("TMDB_API_KEY environment variable is required")?;

    TmdbClient::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .context("failed to build TMDB client")
}

/// Loads the app config from `--config` or the default path.
fn load_config(file: Option<&PathBuf>) -> Result<AppConfig> {
    let config_path = resolve_config_path(file).context("failed to resolve config path")?;
    AppConfig::load(&config_path).context("failed to load config")
}

/// Fetches the genre catalog, degrading to empty on failure.
///
/// Matches the browse-path failure semantics: genre filters silently no-op
/// when the catalog could not be fetched.
#[instrument(skip_all)]
async fn fetch_catalog(client: &TmdbClient, language: &str) -> GenreCatalog {
    match client.genre_list(language).await {
        Ok(response) => GenreCatalog::new(response.genres),
        Err(error) => {
            tracing::warn!(error = %error, "genre catalog fetch failed, continuing without it");
            GenreCatalog::default()
        }
    }
}

/// Prints a result table for one-shot commands.
fn print_items(items: &[MediaItem]) {
    if items.is_empty() {
        tracing::info!("No movies found.");
        return;
    }

    tracing::info!("ID\tTitle\t\t\tDate\t\tLang\tPopularity");
    for item in items {
        tracing::info!(
            "{}\t{}\t{}\t{}\t{:.1}",
            item.id,
            item.display_title(),
            item.date().unwrap_or("-"),
            item.original_language.as_deref().unwrap_or("-"),
            item.popularity,
        );
    }
    tracing::info!("Total: {} titles", items.len());
}

/// Runs the `browse` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the TUI fails.
#[instrument(skip_all)]
async fn run_browse(config_file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_file)?;
    let client = build_tmdb_client()?;

    let catalog = fetch_catalog(&client, &config.api.language).await;
    if catalog.is_empty() {
        tracing::warn!("genre catalog is empty, genre filters will have no effect");
    }

    run_browser(client, catalog, config.grid.row_size)
        .await
        .context("browser TUI failed")
}

/// Runs the `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
async fn run_discover(args: &DiscoverArgs, config_file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_file)?;
    let client = build_tmdb_client()?;
    let catalog = fetch_catalog(&client, &config.api.language).await;

    let filters = FilterState {
        genre: args.genre.clone(),
        year: args.year.clone(),
        language: args
            .language
            .as_ref()
            .map(|code| Language::new(code.clone(), code.clone())),
        media_type: args.media_type,
    };

    let items = fetch_browse_rows(
        &client,
        &filters,
        &SearchState::default(),
        &catalog,
        config.grid.row_size,
    )
    .await;
    print_items(&items);

    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, config_file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_file)?;
    let client = build_tmdb_client()?;

    let mut search = SearchState {
        input: args.query.clone(),
        committed: None,
    };
    search.submit();

    let filters = FilterState {
        media_type: args.media_type,
        ..FilterState::default()
    };

    let items = fetch_browse_rows(
        &client,
        &filters,
        &search,
        &GenreCatalog::default(),
        config.grid.row_size,
    )
    .await;
    print_items(&items);

    Ok(())
}

/// Runs the `trending` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_trending(args: &TrendingArgs, config_file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_file)?;
    let client = build_tmdb_client()?;

    let page = client
        .trending(args.media_type.unwrap_or_default(), args.window)
        .await
        .context("TMDB trending request failed")?;

    let items = cinefind_api::tmdb::trim_to_full_rows(page.results, config.grid.row_size);
    print_items(&items);

    Ok(())
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_genres(config_file: Option<&PathBuf>) -> Result<()> {
    let config = load_config(config_file)?;
    let client = build_tmdb_client()?;

    let response = client
        .genre_list(&config.api.language)
        .await
        .context("TMDB genre list request failed")?;

    tracing::info!("ID\tName");
    for genre in &response.genres {
        tracing::info!("{}\t{}", genre.id, genre.name);
    }
    tracing::info!("Total: {} genres", response.genres.len());

    Ok(())
}

/// Runs the `trailer` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_trailer(args: &TrailerArgs) -> Result<()> {
    let client = build_tmdb_client()?;

    let url = fetch_trailer_url(&client, args.media_type.unwrap_or_default(), args.id)
        .await
        .context("trailer resolution failed")?;

    match url {
        Some(url) => tracing::info!("{url}"),
        None => tracing::info!("Trailer not available."),
    }

    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse => run_browse(cli.config.as_ref()).await,
        Commands::Discover(args) => run_discover(&args, cli.config.as_ref()).await,
        Commands::Search(args) => run_search(&args, cli.config.as_ref()).await,
        Commands::Trending(args) => run_trending(&args, cli.config.as_ref()).await,
        Commands::Genres => run_genres(cli.config.as_ref()).await,
        Commands::Trailer(args) => run_trailer(&args).await,
    }
}
