//! Utility functions for link normalization and console output trimming.

/// Make a scraped link absolute.
///
/// HotNews headline links are usually site-relative (`/stiri/...`), so links
/// that do not already start with an HTTP scheme prefix get the base URL
/// prepended, exactly once. Links already starting with `http` are returned
/// unchanged.
///
/// Protocol-relative links (`//host/path`) are rare in this markup and get
/// the same verbatim prepending as any other non-`http` link.
///
/// # Arguments
///
/// * `link` - The raw `href` value from the listing page
/// * `base_url` - The prefix for relative links, without a trailing slash
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_link("/x", "https://www.hotnews.ro"),
///     "https://www.hotnews.ro/x"
/// );
/// assert_eq!(
///     normalize_link("https://www.hotnews.ro/x", "https://www.hotnews.ro"),
///     "https://www.hotnews.ro/x"
/// );
/// ```
pub fn normalize_link(link: &str, base_url: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else {
        format!("{}{}", base_url, link)
    }
}

/// Take the first `max` characters of a string.
///
/// Used for the console preview of article content. Counts `char`s rather
/// than bytes so multi-byte text (Romanian diacritics included) is never cut
/// mid code point.
///
/// # Arguments
///
/// * `s` - The string to truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
///
/// The whole string when it is `max` characters or shorter, otherwise the
/// first `max` characters.
pub fn preview(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}
