//! Scraping support: the shared page fetcher and the HotNews site module.
//!
//! The scraper follows a two-phase pattern:
//!
//! 1. **Indexing**: Discover headline links from the listing page
//! 2. **Fetching**: Download and parse article content from each link
//!
//! Both phases go through [`fetch_page`], so HTTP failure semantics are
//! identical everywhere: any transport error or non-success status aborts
//! the whole run. There is deliberately no retry and no per-page isolation.
//!
//! Site-specific selector knowledge lives in [`hotnews`]; nothing in this
//! module knows what the pages look like.

use std::error::Error;
use tracing::{info, instrument};

pub mod hotnews;

/// Fetch a page over HTTP and return its body as text.
///
/// Issues a plain GET with no custom headers. Redirects are followed by the
/// client; a 4xx or 5xx final status is converted into an error.
///
/// # Arguments
///
/// * `url` - The absolute URL to fetch
///
/// # Returns
///
/// The response body as text, or an error on any transport failure or
/// non-success status. Errors are fatal to the run by design: the caller
/// propagates them straight out of `main`.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_page(url: &str) -> Result<String, Box<dyn Error>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    info!(bytes = body.len(), "Fetched page");
    Ok(body)
}
