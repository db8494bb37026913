//! moodshelf CLI
//!
//! Terminal front end for mood-driven discovery: pick a mood, pull a
//! page (or several) of movie or book matches, optionally expand one
//! item into a detail block.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use moodshelf::{
    config::Config,
    error::{AppError, Result},
    models::CatalogItem,
    moods::Mood,
    services::{BookClient, CatalogClient, MovieClient},
    session::{ResultSession, SessionPhase},
    utils::http,
};

/// moodshelf - mood-based movie and book discovery
#[derive(Parser, Debug)]
#[command(
    name = "moodshelf",
    version,
    about = "Find movies and books that match your mood"
)]
struct Cli {
    /// Path to a TOML config file (API keys may also come from env)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available moods
    Moods,

    /// Discover movies matching a mood
    Movies {
        /// Mood key (see `moods` for the list)
        #[arg(short, long)]
        mood: String,

        /// Number of result pages to pull
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Expand the item at this 1-based position into a detail block
        #[arg(long)]
        detail: Option<usize>,

        /// Print the items as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },

    /// Discover books matching a mood
    Books {
        /// Mood key (see `moods` for the list)
        #[arg(short, long)]
        mood: String,

        /// Number of result pages to pull
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Expand the item at this 1-based position into a detail block
        #[arg(long)]
        detail: Option<usize>,

        /// Print the items as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration (API keys present, URLs well-formed)
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            log::info!("Loaded configuration from {}", path.display());
            config
        }
        None => Config::from_env(),
    };

    match cli.command {
        Command::Moods => print_moods(),

        Command::Movies {
            mood,
            pages,
            detail,
            json,
        } => {
            let client = http::create_client(&config.http)?;
            let movies = MovieClient::new(client, &config.movies, config.page_size)?;
            run_discovery(Arc::new(movies), &mood, pages, detail, json).await?;
        }

        Command::Books {
            mood,
            pages,
            detail,
            json,
        } => {
            let client = http::create_client(&config.http)?;
            let books = BookClient::new(client, &config.books, config.page_size)?;
            run_discovery(Arc::new(books), &mood, pages, detail, json).await?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            log::info!("✓ Config OK (API keys present, URLs well-formed)");
        }
    }

    Ok(())
}

/// Drive one result session: resolve the mood, pull any extra pages,
/// and render whatever state it lands in.
async fn run_discovery(
    client: Arc<dyn CatalogClient>,
    mood: &str,
    pages: u32,
    detail: Option<usize>,
    json: bool,
) -> Result<()> {
    let mood_key = mood.trim().to_lowercase();
    let provider = client.provider();
    let mut session = ResultSession::new(client);

    if !session.resolve_mood(&mood_key).await {
        log::warn!("Unknown mood '{}'", mood_key);
        println!("Unknown mood '{mood_key}'. Pick one of these:\n");
        print_moods();
        return Ok(());
    }

    for _ in 1..pages {
        if session.phase() != SessionPhase::Loaded {
            break;
        }
        session.load_more().await;
    }

    if session.phase() == SessionPhase::Failed {
        let reason = session.error().unwrap_or("fetch failed").to_string();
        log::error!("{reason}");
        return Err(AppError::fetch(provider, reason));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(session.items())?);
    } else {
        render_items(&session);
    }

    if let Some(position) = detail {
        render_detail(&mut session, position);
    }

    Ok(())
}

/// Print the mood menu.
fn print_moods() {
    println!("Available moods:\n");
    for mood in Mood::ALL {
        println!("  {:<10} {}", mood.key(), mood.entry().label);
    }
}

/// Render the current item list as numbered text cards.
fn render_items(session: &ResultSession) {
    let label = session
        .mood()
        .map(|mood| mood.entry().label)
        .unwrap_or("?");

    if session.items().is_empty() {
        println!("No results for {label}. Try another mood.");
        return;
    }

    println!("Results for {label}:\n");
    for (position, item) in session.items().iter().enumerate() {
        println!("{:>3}. {}", position + 1, summary_line(item));
    }
}

/// Select the item at a 1-based list position and print its detail
/// block. Out-of-range positions only warn.
fn render_detail(session: &mut ResultSession, position: usize) {
    let key = match position
        .checked_sub(1)
        .and_then(|index| session.items().get(index))
    {
        Some(item) => item.key(),
        None => {
            log::warn!(
                "No item at position {} (the list has {})",
                position,
                session.items().len()
            );
            return;
        }
    };

    if session.select_item(&key) {
        if let Some(item) = session.selected() {
            print_detail(item);
        }
    }
}

/// One-line summary of an item, as shown in the result list.
fn summary_line(item: &CatalogItem) -> String {
    match item {
        CatalogItem::Movie(movie) => {
            let mut line = movie.title.as_deref().unwrap_or("(untitled)").to_string();
            if let Some(year) = movie.release_date.as_deref().and_then(|date| date.get(..4)) {
                line.push_str(&format!(" ({year})"));
            }
            if let Some(score) = movie.vote_average {
                line.push_str(&format!("  {score:.1}/10"));
            }
            let genres: Vec<&str> = movie.genres.iter().map(|g| g.name.as_str()).collect();
            if !genres.is_empty() {
                line.push_str(&format!("  [{}]", genres.join(", ")));
            }
            line
        }
        CatalogItem::Book(book) => {
            let mut line = book.title.as_deref().unwrap_or("(untitled)").to_string();
            if let Some(byline) = book.byline() {
                line.push_str(&format!(" by {byline}"));
            }
            if let Some(date) = book.published_date.as_deref() {
                line.push_str(&format!(" ({date})"));
            }
            line
        }
    }
}

/// Full detail block for the selected item.
fn print_detail(item: &CatalogItem) {
    println!("\n{}", "-".repeat(40));
    println!("{}", summary_line(item));
    if let Some(synopsis) = item.synopsis() {
        println!("\n{synopsis}");
    }
    if let Some(poster) = item.poster() {
        println!("\nPoster: {poster}");
    }
    if let Some(link) = item.detail_link() {
        println!("More:   {link}");
    }
    println!("{}", "-".repeat(40));
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodshelf::config::MovieConfig;

    fn movie_client(base_url: String) -> MovieClient {
        let config = MovieConfig {
            api_key: "test-key".to_string(),
            base_url,
            ..MovieConfig::default()
        };
        MovieClient::new(reqwest::Client::new(), &config, 10).unwrap()
    }

    #[tokio::test]
    async fn failed_session_surfaces_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/discover/movie")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = movie_client(server.url());
        let result = run_discovery(Arc::new(client), "happy", 1, None, false).await;
        assert!(matches!(result, Err(AppError::Fetch { .. })));
    }

    #[tokio::test]
    async fn unknown_mood_is_not_an_error() {
        let client = movie_client("https://api.themoviedb.org/3".to_string());
        let result = run_discovery(Arc::new(client), "grumpy", 1, None, false).await;
        assert!(result.is_ok());
    }
}
