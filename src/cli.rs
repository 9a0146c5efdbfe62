//! Command-line interface definitions for the HotNews scraper.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default, so running the binary with no arguments
//! scrapes the HotNews homepage.

use clap::Parser;

/// Command-line arguments for the HotNews scraper.
///
/// # Examples
///
/// ```sh
/// # Scrape the HotNews homepage
/// hotnews_scraper
///
/// # Scrape a different listing page
/// hotnews_scraper -u https://hotnews.ro/economie
///
/// # Only the first five headlines
/// hotnews_scraper -n 5
///
/// # With a config file
/// hotnews_scraper -c scraper.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listing page URL to scrape (overrides the config)
    #[arg(short, long)]
    pub url: Option<String>,

    /// Process at most this many headlines
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_arguments() {
        let cli = Cli::parse_from(&["hotnews_scraper"]);
        assert!(cli.config.is_none());
        assert!(cli.url.is_none());
        assert!(cli.limit.is_none());
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::parse_from(&[
            "hotnews_scraper",
            "--config",
            "scraper.yaml",
            "--url",
            "https://hotnews.ro/economie",
            "--limit",
            "3",
        ]);
        assert_eq!(cli.config.as_deref(), Some("scraper.yaml"));
        assert_eq!(cli.url.as_deref(), Some("https://hotnews.ro/economie"));
        assert_eq!(cli.limit, Some(3));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(&["hotnews_scraper", "-c", "/tmp/c.yaml", "-n", "10"]);
        assert_eq!(cli.config.as_deref(), Some("/tmp/c.yaml"));
        assert_eq!(cli.limit, Some(10));
    }
}
