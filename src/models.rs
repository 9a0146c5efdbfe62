//! Data models for scraped headlines and articles.
//!
//! This module defines the two transient structures produced while scraping:
//! - [`Headline`]: a title/link pair taken from the listing page
//! - [`Article`]: the title and body text of one article page
//!
//! Neither is persisted anywhere; both exist only long enough to be printed
//! by the driver loop.

/// A headline entry extracted from the listing page.
///
/// Each headline pairs the visible anchor text with the `href` it points at.
/// The link is kept exactly as it appears in the markup, which on HotNews is
/// usually site-relative (`/stiri/...`); the driver makes it absolute before
/// fetching.
///
/// # Fields
///
/// * `title` - The trimmed visible text of the headline link
/// * `link` - The raw `href` attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline {
    /// The trimmed headline text.
    pub title: String,
    /// The raw link target, possibly relative.
    pub link: String,
}

/// The extracted title and body text of a single article page.
///
/// Extraction never fails structurally: when the page lacks a top-level
/// heading or a recognized content container, the corresponding field holds
/// a placeholder string instead (`"No title found"` / `"No content found"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// The article title, or a placeholder when the page has no `<h1>`.
    pub title: String,
    /// The article body with one line per text node, or a placeholder when
    /// no content container was found.
    pub content: String,
}
