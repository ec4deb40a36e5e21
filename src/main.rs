use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use blogroll::cache::CacheStore;
use blogroll::cli::{Cli, Commands, OutputFormat};
use blogroll::config::{Config, WidgetConfig};
use blogroll::domain::{Achievement, Post, RepoSummary};
use blogroll::errors::BlogrollResult;
use blogroll::render;
use blogroll::services::{PostService, RepoService};
use blogroll::sources::{GitHubRepoSource, SourceRegistry};
use blogroll::storage::{SqliteKeyValueStore, SqliteStorage};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout only carries rendered output.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blogroll=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

async fn run() -> BlogrollResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let widget = WidgetConfig::default();

    match cli.command {
        Commands::Achievements { format } => cmd_achievements(&widget.achievements, format),
        Commands::Posts { refresh, format } => {
            let storage = SqliteStorage::new(&config.cache_path)?;
            cmd_posts(&config, &widget, storage, refresh, format).await
        }
        Commands::Repos { refresh, format } => {
            let storage = SqliteStorage::new(&config.cache_path)?;
            cmd_repos(&config, &widget, storage, refresh, format).await
        }
        Commands::Page => {
            let storage = SqliteStorage::new(&config.cache_path)?;
            cmd_page(&config, &widget, storage).await
        }
        Commands::ClearCache => {
            let storage = SqliteStorage::new(&config.cache_path)?;
            cmd_clear_cache(storage)
        }
    }
}

fn post_service(
    config: &Config,
    widget: &WidgetConfig,
    storage: SqliteStorage,
) -> PostService<SqliteKeyValueStore> {
    let sources = SourceRegistry::from_config(widget, config.http_timeout);
    let cache = CacheStore::new(SqliteKeyValueStore::new(storage));
    PostService::new(widget, sources, cache)
}

fn repo_service(
    config: &Config,
    widget: &WidgetConfig,
    storage: SqliteStorage,
) -> RepoService<SqliteKeyValueStore> {
    let source = GitHubRepoSource::new(widget, config.http_timeout);
    let cache = CacheStore::new(SqliteKeyValueStore::new(storage));
    RepoService::new(widget, Box::new(source), cache)
}

async fn cmd_posts(
    config: &Config,
    widget: &WidgetConfig,
    storage: SqliteStorage,
    refresh: bool,
    format: OutputFormat,
) -> BlogrollResult<()> {
    let service = post_service(config, widget, storage);

    let posts = if refresh {
        service.refresh_posts().await
    } else {
        service.load_posts().await
    };

    match format {
        OutputFormat::Html => println!("{}", render::posts_html(&posts)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&posts)?),
        OutputFormat::Text => print_posts(&posts),
    }

    Ok(())
}

async fn cmd_repos(
    config: &Config,
    widget: &WidgetConfig,
    storage: SqliteStorage,
    refresh: bool,
    format: OutputFormat,
) -> BlogrollResult<()> {
    let service = repo_service(config, widget, storage);

    let repos = if refresh {
        service.refresh_repos().await
    } else {
        service.load_repos().await
    };

    match format {
        OutputFormat::Html => println!("{}", render::repos_html(&repos)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&repos)?),
        OutputFormat::Text => print_repos(&repos),
    }

    Ok(())
}

fn cmd_achievements(achievements: &[Achievement], format: OutputFormat) -> BlogrollResult<()> {
    match format {
        OutputFormat::Html => println!("{}", render::achievements_html(achievements)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(achievements)?),
        OutputFormat::Text => {
            for achievement in achievements {
                match &achievement.tier {
                    Some(tier) => println!("  {} ({})", achievement.name, tier),
                    None => println!("  {}", achievement.name),
                }
                println!("    {}", achievement.description);
            }
        }
    }

    Ok(())
}

/// Same order as the widget page: repos, achievements, posts.
async fn cmd_page(
    config: &Config,
    widget: &WidgetConfig,
    storage: SqliteStorage,
) -> BlogrollResult<()> {
    let repo_service = repo_service(config, widget, storage.clone());
    let post_service = post_service(config, widget, storage);

    let (repos, posts) = tokio::join!(repo_service.load_repos(), post_service.load_posts());

    println!("{}", render::repos_html(&repos));
    println!("{}", render::achievements_html(&widget.achievements));
    println!("{}", render::posts_html(&posts));

    Ok(())
}

fn cmd_clear_cache(storage: SqliteStorage) -> BlogrollResult<()> {
    let cache = CacheStore::new(SqliteKeyValueStore::new(storage));
    cache.clear()?;
    println!("Cache cleared.");
    Ok(())
}

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("{}", render::POSTS_ERROR);
        return;
    }

    for post in posts {
        let marker = if post.pinned { "[pinned] " } else { "" };
        println!("  {}{}", marker, post.title);
        println!(
            "    {} | {}",
            render::format_date(&post.date),
            render::source_label(post)
        );
        println!("    {}", post.url);
        println!();
    }
}

fn print_repos(repos: &[RepoSummary]) {
    for repo in repos {
        if repo.language.is_empty() {
            println!("  {}", repo.name);
        } else {
            println!("  {} [{}]", repo.name, repo.language);
        }
        if !repo.description.is_empty() {
            println!("    {}", repo.description);
        }
        println!("    {} stars, {} forks", repo.star_count, repo.fork_count);
        println!("    {}", repo.url);
        println!();
    }
}
