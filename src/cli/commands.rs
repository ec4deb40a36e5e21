use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "blogroll")]
#[command(about = "Blog post, repository and achievement widgets with a local cache")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest posts from Medium and Dev.to, pinned posts first
    Posts {
        /// Ignore the cached list and fetch again
        #[arg(long)]
        refresh: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Show the pinned GitHub repositories
    Repos {
        /// Ignore the cached list and fetch again
        #[arg(long)]
        refresh: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Show the GitHub achievements list
    Achievements {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },

    /// Render every widget fragment as HTML
    Page,

    /// Remove all cached posts and repositories
    ClearCache,
}
