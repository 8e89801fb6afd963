use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use newspulse::config::Config;
use newspulse::news::{GnewsClient, NewsApiClient, NewsFetcher};
use newspulse::sentiment::Lexicon;
use newspulse::server::ApiServer;
use newspulse::service::{AnalysisService, AnalyzeRequest};
use newspulse::storage::create_sqlite_repository;

#[derive(Parser)]
#[command(
    name = "newspulse",
    version,
    about = "News sentiment analysis service with lexicon scoring and trending topics",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true, default_value = "text")]
    log_format: String,

    /// Configuration file (TOML); environment variables otherwise
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Bind address override (e.g. 0.0.0.0:3000)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Analyze news sentiment for a query and store the result
    Analyze {
        /// Search query
        query: String,

        /// Comma-separated provider source ids
        #[arg(short, long)]
        sources: Option<String>,

        /// Start of the date range (YYYY-MM-DD, default: 7 days ago)
        #[arg(long)]
        from: Option<String>,

        /// End of the date range (YYYY-MM-DD, default: now)
        #[arg(long)]
        to: Option<String>,
    },

    /// List past analyses
    History {
        /// Filter by query substring (case-insensitive)
        #[arg(short, long)]
        query: Option<String>,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show trending topics from the past week's analyses
    Trending,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_tracing(&cli.log_format, cli.verbose)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };

    match cli.command {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind_address = bind
                    .parse()
                    .with_context(|| format!("invalid bind address: {bind}"))?;
            }
            serve(config).await?;
        }

        Commands::Analyze {
            query,
            sources,
            from,
            to,
        } => {
            tracing::info!(query = %query, sources = ?sources, "starting analyze command");
            analyze(config, query, sources, from, to).await?;
        }

        Commands::History { query, limit } => {
            history(config, query, limit).await?;
        }

        Commands::Trending => {
            trending(config).await?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("newspulse=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("newspulse=info,warn")
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

async fn serve(config: Config) -> Result<()> {
    if config.providers.news_api_key.is_empty() {
        tracing::warn!("NEWS_API_KEY is not set; primary provider requests will fail");
    }
    if config.providers.gnews_api_key.is_empty() {
        tracing::warn!("GNEWS_API_KEY is not set; fallback provider requests will fail");
    }

    let repository = create_sqlite_repository(&config.database.sqlite_path)?;
    let server = ApiServer::new(config, repository)?;

    server
        .start_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}

/// Build the analysis service for one-shot CLI commands
fn build_service(config: &Config) -> Result<AnalysisService> {
    let timeout = config.request_timeout();
    let primary = NewsApiClient::with_base_url(
        config.providers.news_api_key.clone(),
        config.providers.news_api_url.clone(),
        timeout,
    )?;
    let fallback = GnewsClient::with_base_url(
        config.providers.gnews_api_key.clone(),
        config.providers.gnews_api_url.clone(),
        timeout,
    )?;

    let repository = create_sqlite_repository(&config.database.sqlite_path)?;
    Ok(AnalysisService::new(
        Arc::new(Lexicon::afinn()),
        NewsFetcher::new(Box::new(primary), Box::new(fallback)),
        repository,
    ))
}

/// Parse a CLI date (YYYY-MM-DD) into a UTC timestamp at midnight
fn parse_cli_date(raw: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date: {raw} (expected YYYY-MM-DD)"))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .context("date has no midnight representation")?;
    Ok(DateTime::from_naive_utc_and_offset(midnight, Utc))
}

async fn analyze(
    config: Config,
    query: String,
    sources: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<()> {
    let service = build_service(&config)?;

    let request = AnalyzeRequest {
        query,
        sources,
        date_from: from.as_deref().map(parse_cli_date).transpose()?,
        date_to: to.as_deref().map(parse_cli_date).transpose()?,
    };

    let response = service.analyze(request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

async fn history(config: Config, query: Option<String>, limit: usize) -> Result<()> {
    let service = build_service(&config)?;
    let summaries = service.history(query, Some(limit)).await?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

async fn trending(config: Config) -> Result<()> {
    let service = build_service(&config)?;
    let topics = service.trending().await?;
    println!("{}", serde_json::to_string_pretty(&topics)?);
    Ok(())
}
