/**
 * Rewatch command-line client
 *
 * Drives the watchlist synchronizer against the backend and the Jikan API.
 * Output is plain text; failures print one error line and exit non-zero.
 */

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rewatch::client::jikan::DEFAULT_BROWSE_PAUSE;
use rewatch::client::{
    load_config, ApiClient, ClientError, JikanClient, ProgressBook, SessionStore, Synchronizer,
};
use rewatch::shared::{
    ClientConfig, Credentials, ItemId, ReleaseYear, RewatchError, UserRef, WatchItem, Watchlist,
};

#[derive(Parser)]
#[command(name = "rewatch")]
#[command(about = "Track the anime you are watching", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Create an account and log in")]
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    #[command(about = "Log in to an existing account")]
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Show the logged-in user")]
    Whoami,

    #[command(about = "Show your watchlist")]
    List,

    #[command(about = "Add an anime to your watchlist")]
    Add {
        #[arg(long, help = "Anime id (MyAnimeList id)")]
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        poster: Option<String>,
    },

    #[command(about = "Remove an anime from your watchlist")]
    Remove {
        #[arg(help = "Anime id")]
        id: String,
    },

    #[command(about = "Search anime by title")]
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    #[command(about = "Top, current season and upcoming anime")]
    Browse,

    #[command(about = "Show details of one anime")]
    Show { anime_id: u64 },

    #[command(about = "List episodes and which ones you have watched")]
    Episodes { anime_id: u64 },

    #[command(about = "Toggle an episode between watched and unwatched")]
    Watch { anime_id: u64, episode: u32 },

    #[command(about = "Show your progress on an anime")]
    Status { anime_id: u64 },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let config = load_config()?;
    let session = SessionStore::new(&config.data_dir);

    match cli.command {
        Commands::Signup { email, password } => {
            let user = api(&config).signup(&Credentials::new(email, password)).await?;
            session.save(&user)?;
            println!("Signed up as {}", user.email);
        }
        Commands::Login { email, password } => {
            let user = api(&config).login(&Credentials::new(email, password)).await?;
            session.save(&user)?;
            println!("Logged in as {}", user.email);
        }
        Commands::Logout => {
            session.clear()?;
            println!("Logged out");
        }
        Commands::Whoami => match session.load() {
            Some(user) => println!("{} ({})", user.email, user.id),
            None => println!("Not logged in"),
        },
        Commands::List => {
            let sync = synchronizer(&config, require_user(&session)?).await?;
            print_watchlist(&sync.watchlist());
        }
        Commands::Add {
            id,
            title,
            year,
            poster,
        } => {
            let sync = synchronizer(&config, require_user(&session)?).await?;
            let mut item = WatchItem::new(parse_item_id(&id), title);
            if let Some(year) = year {
                item = item.with_year(parse_year(&year));
            }
            if let Some(poster) = poster {
                item = item.with_poster(poster);
            }
            print_watchlist(&sync.add(item).await?);
        }
        Commands::Remove { id } => {
            let sync = synchronizer(&config, require_user(&session)?).await?;
            print_watchlist(&sync.remove(&parse_item_id(&id)).await?);
        }
        Commands::Search { query } => {
            let results = jikan(&config).search(&query.join(" ")).await?;
            print_cards(&results);
        }
        Commands::Browse => {
            let sections = jikan(&config).browse(DEFAULT_BROWSE_PAUSE).await;
            for (heading, section) in [
                ("All-Time Trending", sections.top),
                ("Current Trending", sections.current_season),
                ("Upcoming Anime", sections.upcoming),
            ] {
                println!("== {heading} ==");
                match section {
                    Ok(cards) => print_cards(&cards),
                    Err(err) => println!("  (failed to load: {err})"),
                }
            }
        }
        Commands::Show { anime_id } => {
            let anime = jikan(&config).anime(anime_id).await?;
            let episodes = anime
                .episodes
                .map(|n| n.to_string())
                .unwrap_or_else(|| "Unknown".into());
            let year = anime
                .release_year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Unknown".into());

            println!("{} ({year})", anime.display_title());
            println!("Status:   {}", anime.status.as_deref().unwrap_or("Unknown"));
            match anime.score {
                Some(score) => match anime.scored_by.filter(|n| *n > 0) {
                    Some(users) => println!("Score:    {score}/10 ({users} users)"),
                    None => println!("Score:    {score}/10"),
                },
                None => println!("Score:    N/A"),
            }
            println!("Episodes: {episodes}");
            if let Some(user) = session.load() {
                let book = ProgressBook::open(&config.data_dir)?;
                println!("Progress: {}", book.status(&user.id, anime_id));
            }
            println!();
            println!(
                "{}",
                anime
                    .synopsis
                    .as_deref()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or("No synopsis available.")
            );
        }
        Commands::Episodes { anime_id } => {
            let client = jikan(&config);
            let anime = client.anime(anime_id).await?;
            let episodes = client
                .episodes_or_placeholder(anime_id, anime.episodes)
                .await?;
            let user = session.load();
            let mut book = ProgressBook::open(&config.data_dir)?;
            if let Some(user) = &user {
                if !episodes.is_empty() {
                    book.set_total(&user.id, anime_id, episodes.len() as u32)?;
                }
            }
            let progress = user.as_ref().and_then(|u| book.progress(&u.id, anime_id));
            for ep in &episodes {
                let mark = match progress {
                    Some(p) if p.watched.contains(&ep.number) => "x",
                    _ => " ",
                };
                let filler = if ep.filler { " (filler)" } else { "" };
                println!("[{mark}] {:>4}  {}{filler}", ep.number, ep.title);
            }
        }
        Commands::Watch { anime_id, episode } => {
            let user = require_user(&session)?;
            let mut book = ProgressBook::open(&config.data_dir)?;
            let watched = book.toggle_episode(&user.id, anime_id, episode)?;
            let verb = if watched { "watched" } else { "unwatched" };
            println!("Episode {episode} marked {verb} ({})", book.status(&user.id, anime_id));
        }
        Commands::Status { anime_id } => {
            let user = require_user(&session)?;
            let book = ProgressBook::open(&config.data_dir)?;
            let status = book.status(&user.id, anime_id);
            match book.progress(&user.id, anime_id) {
                Some(p) => {
                    let total = p.total.map(|t| t.to_string()).unwrap_or_else(|| "?".into());
                    println!("{status}: {}/{total} episodes", p.watched.len());
                }
                None => println!("{status}"),
            }
        }
    }

    Ok(())
}

fn api(config: &ClientConfig) -> ApiClient {
    ApiClient::new(config.api_url.clone())
}

fn jikan(config: &ClientConfig) -> JikanClient {
    JikanClient::new(config.jikan_url.clone())
}

fn require_user(session: &SessionStore) -> Result<UserRef, ClientError> {
    session
        .load()
        .ok_or_else(|| RewatchError::Unauthenticated.into())
}

async fn synchronizer(
    config: &ClientConfig,
    user: UserRef,
) -> Result<Synchronizer<ApiClient>, ClientError> {
    let sync = Synchronizer::new(api(config));
    sync.start_session(user);
    sync.load().await?;
    Ok(sync)
}

/// Integer-looking ids are sent as JSON numbers, anything else as strings
fn parse_item_id(raw: &str) -> ItemId {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(n) => ItemId::from(n),
        Err(_) => ItemId::from(raw),
    }
}

fn parse_year(raw: &str) -> ReleaseYear {
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(n) => ReleaseYear::Number(n),
        Err(_) => ReleaseYear::Text(raw.to_string()),
    }
}

fn print_watchlist(list: &Watchlist) {
    if list.is_empty() {
        println!("Your watchlist is empty");
        return;
    }
    for item in list {
        let id = item.id.as_ref().map(ToString::to_string).unwrap_or_else(|| "-".into());
        let year = item.year.as_ref().map(ToString::to_string).unwrap_or_else(|| "Unknown".into());
        println!("{id:>8}  {} ({year})", item.title);
    }
}

fn print_cards(cards: &[WatchItem]) {
    if cards.is_empty() {
        println!("  No results");
    }
    for card in cards {
        let id = card.id.as_ref().map(ToString::to_string).unwrap_or_default();
        let year = card.year.as_ref().map(ToString::to_string).unwrap_or_default();
        println!("{id:>8}  {} ({year})", card.title);
    }
}
