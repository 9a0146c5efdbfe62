//! HotNews.ro scraper.
//!
//! This module encodes where the interesting bits live in HotNews markup:
//!
//! - On the homepage, only entries rendered as
//!   `<article class="post-has-image">` carry a linked `<h2>` headline; other
//!   card styles are navigation or promo blocks and are ignored.
//! - Article bodies sit in `<div class="entry-content">` on current pages,
//!   while pages served from the older site template still use
//!   `<div class="articol">`. The newer class is preferred, the legacy class
//!   is the fallback.
//!
//! Parsing is split from fetching so the selector logic can be tested
//! offline against fixture HTML: [`parse_headlines`] and [`parse_article`]
//! are pure, and [`index_headlines`] / [`fetch_article`] wrap them with an
//! HTTP fetch.

use crate::models::{Article, Headline};
use crate::scrapers::fetch_page;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

/// Placeholder title for article pages without an `<h1>`.
const NO_TITLE: &str = "No title found";
/// Placeholder body for article pages without a recognized content container.
const NO_CONTENT: &str = "No content found";

static POST_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("article.post-has-image").unwrap());
static HEADING_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static ANCHOR_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.entry-content").unwrap());
static LEGACY_CONTENT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.articol").unwrap());

/// Extract headline title/link pairs from listing page HTML.
///
/// For every `article.post-has-image` container, takes the first `<h2>`, and
/// within it the first `<a>` carrying an `href`. The pair is kept only when
/// the anchor's visible text is non-empty after trimming.
///
/// Containers without a heading, headings without a link, and links with
/// whitespace-only text are skipped silently; a page with no matching
/// containers yields an empty vector. Output order matches document order.
pub fn parse_headlines(html: &str) -> Vec<Headline> {
    let document = Html::parse_document(html);

    let mut headlines = Vec::new();
    for post in document.select(&POST_SELECTOR) {
        let Some(heading) = post.select(&HEADING_SELECTOR).next() else {
            continue;
        };
        let Some(anchor) = heading.select(&ANCHOR_SELECTOR).next() else {
            continue;
        };
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        headlines.push(Headline {
            title,
            link: href.to_string(),
        });
    }
    headlines
}

/// Extract the title and body text from article page HTML.
///
/// The title is the trimmed text of the first `<h1>` anywhere in the
/// document. The body is taken from `div.entry-content`, falling back to the
/// legacy `div.articol` container, with every descendant text node trimmed,
/// empty nodes dropped, and the rest joined with newlines.
///
/// Never fails: a missing heading or container is represented by the
/// placeholder strings, not an error.
pub fn parse_article(html: &str) -> Article {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|heading| heading.text().collect::<String>().trim().to_string())
        .unwrap_or_else(|| NO_TITLE.to_string());

    let container = document
        .select(&CONTENT_SELECTOR)
        .next()
        .or_else(|| document.select(&LEGACY_CONTENT_SELECTOR).next());

    let content = match container {
        Some(div) => block_text(div),
        None => NO_CONTENT.to_string(),
    };

    Article { title, content }
}

/// Collect an element's descendant text nodes, one per line.
fn block_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fetch the listing page and extract its headlines.
///
/// # Arguments
///
/// * `url` - The listing page URL
///
/// # Returns
///
/// The headlines in document order, or an error if the fetch fails. An empty
/// vector is a valid result, not an error.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn index_headlines(url: &str) -> Result<Vec<Headline>, Box<dyn Error>> {
    let html = fetch_page(url).await?;
    let headlines = parse_headlines(&html);

    info!(count = headlines.len(), source = url, "Indexed HotNews headlines");
    debug!(headlines = ?headlines, "Headline pairs");

    Ok(headlines)
}

/// Fetch a single article page and extract its title and body.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article(url: &str) -> Result<Article, Box<dyn Error>> {
    let html = fetch_page(url).await?;
    let article = parse_article(&html);

    info!(
        title = %article.title,
        bytes = article.content.len(),
        "Parsed HotNews article"
    );

    Ok(article)
}
