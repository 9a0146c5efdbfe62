//! # HotNews Scraper
//!
//! A command-line scraper for the HotNews.ro homepage. It extracts the
//! linked headlines from the listing page, then visits each article in turn
//! and prints its title together with the first 500 characters of its body.
//!
//! ## Usage
//!
//! ```sh
//! hotnews_scraper
//! RUST_LOG=debug hotnews_scraper -n 5
//! ```
//!
//! ## Architecture
//!
//! The run is strictly sequential:
//! 1. **Indexing**: Fetch the listing page and extract headline links
//! 2. **Fetching**: Visit each article one at a time, in document order
//! 3. **Output**: Print the transcript to stdout as each article arrives
//!
//! Any HTTP failure aborts the whole run; missing page structure never does
//! (placeholders are printed instead).

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod config;
mod models;
mod scrapers;
mod utils;

use cli::Cli;
use config::ScraperConfig;
use utils::{normalize_link, preview};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("hotnews_scraper starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.config, ?args.url, ?args.limit, "Parsed CLI arguments");

    // --- Load configuration ---
    let mut config = match args.config.as_deref() {
        Some(path) => ScraperConfig::load(path)?,
        None => ScraperConfig::default(),
    };
    if let Some(url) = args.url {
        config.source_url = url;
    }

    // Reject an unfetchable source URL before any network traffic
    let source = Url::parse(&config.source_url)?;
    info!(%source, base = %config.base_url, "Configuration loaded");

    // ---- Index headlines ----
    let headlines = scrapers::hotnews::index_headlines(&config.source_url).await?;

    let limit = args.limit.unwrap_or(headlines.len());

    // ---- Fetch and print each article, one at a time ----
    for (idx, headline) in headlines.iter().take(limit).enumerate() {
        println!("{}. {}\n   {}", idx + 1, headline.title, headline.link);

        // Make sure the link is absolute
        let link = normalize_link(&headline.link, &config.base_url);
        debug!(index = idx + 1, %link, "Fetching article");

        let article = scrapers::hotnews::fetch_article(&link).await?;

        println!("   Article Title: {}", article.title);
        println!(
            "   Article Content (first {} chars): {}...\n",
            config.preview_chars,
            preview(&article.content, config.preview_chars)
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
