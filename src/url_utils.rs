//! URL Utility Functions
//!
//! Image URL resolution for the magazine CDN, plus the filename-derived
//! values (issue date, fallback title) the pipeline reads from page names.

use chrono::Month;
use url::Url;

use crate::patterns::{
    CDN_FOLDER_PREFIX, CDN_HOST, CDN_IMAGE_PATH, DEFAULT_FOLDER, DEFAULT_MONTH, FILENAME_DATE,
    MONTH_YEAR,
};

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve `url_str` against `base`, returning the input unchanged if
/// it is already absolute or cannot be joined.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || is_absolute_url(url_str) {
        return url_str.to_string();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:") || url_str.starts_with("javascript:") {
        return url_str.to_string();
    }

    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// `scheme://host[:port]/` of a page URL.
#[must_use]
pub fn origin_of(page: &Url) -> Option<Url> {
    let host = page.host_str()?;
    let origin = match page.port() {
        Some(port) => format!("{}://{host}:{port}/", page.scheme()),
        None => format!("{}://{host}/", page.scheme()),
    };
    Url::parse(&origin).ok()
}

/// Last path segment of a URL or path, without query or fragment.
#[must_use]
pub fn filename_of(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.rsplit('/').next().unwrap_or(path)
}

/// Lowercase English month name for a 1-based month number.
#[must_use]
pub fn month_name(number: u8) -> Option<String> {
    Month::try_from(number)
        .ok()
        .map(|m| m.name().to_lowercase())
}

/// CDN folder for an `MM_YY` filename token, e.g. `static-us-connection-october-23`.
///
/// Unknown month numbers fall back to `october`; the archive's own links
/// behave the same way.
#[must_use]
pub fn issue_folder(filename: &str) -> Option<String> {
    let caps = FILENAME_DATE.captures(filename)?;
    let month = caps[1]
        .parse::<u8>()
        .ok()
        .and_then(month_name)
        .unwrap_or_else(|| DEFAULT_MONTH.to_string());
    Some(format!("{CDN_FOLDER_PREFIX}-{month}-{}", &caps[2]))
}

fn cdn_url(folder: &str, filename: &str) -> String {
    format!("https://{CDN_HOST}{CDN_IMAGE_PATH}{folder}/{filename}")
}

/// Turn an `<img src>` from a saved page into an absolute URL.
///
/// Rules, first match wins:
/// 1. `http(s)://` URLs pass through.
/// 2. Protocol-relative `//host/...` gets `https:`.
/// 3. `/live/resource/img/...` gets the CDN host.
/// 4. Other relative paths whose filename has an `MM_YY` token map to the
///    CDN issue folder for that month.
/// 5. Relative author headshots map to the default issue folder.
/// 6. Anything else joins against the page origin, or is returned as-is
///    when no page URL is known.
#[must_use]
pub fn resolve_image_url(src: &str, page: Option<&Url>) -> String {
    let src = src.trim();
    if src.is_empty() {
        return String::new();
    }

    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }

    if let Some(rest) = src.strip_prefix("//") {
        return format!("https://{rest}");
    }

    if src.starts_with(CDN_IMAGE_PATH) {
        return format!("https://{CDN_HOST}{src}");
    }

    if !src.starts_with('/') && !src.starts_with("data:") {
        let filename = filename_of(src);
        if let Some(folder) = issue_folder(filename) {
            return cdn_url(&folder, filename);
        }
        if filename.to_lowercase().contains("headshot") {
            return cdn_url(DEFAULT_FOLDER, filename);
        }
    }

    match page.and_then(origin_of) {
        Some(origin) => create_absolute_url(src, &origin),
        None => src.to_string(),
    }
}

/// Issue month read from a page filename or URL, e.g. "October 2023".
///
/// Accepts `october-2023` style tokens first, then `10_23`. Returns an
/// empty string when neither is present or the month is out of range.
#[must_use]
pub fn publication_date(name: &str) -> String {
    if let Some(caps) = MONTH_YEAR.captures(name) {
        let month = caps[1].to_lowercase();
        let mut chars = month.chars();
        let capitalized = chars
            .next()
            .map(|c| c.to_uppercase().chain(chars).collect::<String>())
            .unwrap_or_default();
        return format!("{capitalized} {}", &caps[2]);
    }

    if let Some(caps) = FILENAME_DATE.captures(name) {
        if let Some(month) = caps[1].parse::<u8>().ok().and_then(|n| Month::try_from(n).ok()) {
            return format!("{} 20{}", month.name(), &caps[2]);
        }
    }

    String::new()
}

/// Readable title built from a saved page's filename.
///
/// `connection-tale-of-two-cities---costco.html` becomes
/// `Tale Of Two Cities`.
#[must_use]
pub fn title_from_filename(filename: &str) -> String {
    let name = filename.replace(".html", "").replace("connection-", "");
    let name = name.split("---").next().unwrap_or_default();
    name.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .filter(|w| !matches!(w.to_lowercase().as_str(), "costco" | "html" | "www" | "com"))
        .map(|w| {
            let lower = w.to_lowercase();
            let mut chars = lower.chars();
            chars
                .next()
                .map(|c| c.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}
