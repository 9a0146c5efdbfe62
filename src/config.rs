//! Runtime configuration for the scraper.
//!
//! Configuration is optional: the built-in defaults point at HotNews.ro, and
//! running the binary with no arguments uses them as-is. A YAML file can
//! override any subset of the fields:
//!
//! ```yaml
//! source_url: "https://hotnews.ro"
//! base_url: "https://www.hotnews.ro"
//! preview_chars: 500
//! ```

use serde::Deserialize;
use std::error::Error;
use std::fs;
use tracing::info;

/// Listing page scraped when no override is given.
pub const DEFAULT_SOURCE_URL: &str = "https://hotnews.ro";
/// Prefix prepended to relative article links.
pub const DEFAULT_BASE_URL: &str = "https://www.hotnews.ro";
/// Number of content characters echoed per article.
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Scraper settings, with HotNews defaults for every field.
///
/// Fields missing from a config file fall back to the defaults, so a file
/// containing only `preview_chars: 200` is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// The listing page URL to scrape headlines from.
    pub source_url: String,
    /// The base URL prepended to relative article links.
    pub base_url: String,
    /// How many characters of article content to print.
    pub preview_chars: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML config file
    ///
    /// # Returns
    ///
    /// The parsed configuration, or an error if the file cannot be read or
    /// is not valid YAML.
    pub fn load(path: &str) -> Result<Self, Box<dyn Error>> {
        let raw = fs::read_to_string(path)?;
        let config: ScraperConfig = serde_yaml::from_str(&raw)?;
        info!(path, "Loaded configuration file");
        Ok(config)
    }
}
