//! Integration tests for connection-extract
//!
//! Whole saved pages, with site chrome, run through the complete pipeline.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

mod magazine_pages;
mod recipe_pages;

use connection_extract::{extract_with_options, ExtractedContent, Options};

/// Extract `html` as if it had been saved from `url`.
fn extract_page(html: &str, url: &str) -> ExtractedContent {
    let options = Options {
        url: Some(url.to_string()),
        ..Options::default()
    };
    extract_with_options(html, &options).expect("extraction failed")
}

/// Wrap an article body in the header, cookie banner and footer every
/// archived page carries.
fn with_site_chrome(title: &str, article: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script>window.dataLayer = [];</script>
</head>
<body>
  <header class="site-header">
    <nav><a href="/">Costco</a> <a href="/grocery-household.html">Grocery</a> <a href="/pharmacy.html">Pharmacy</a></nav>
  </header>
  <div class="cookie-consent">We use cookies to improve your experience. Accept cookies</div>
  {article}
  <footer><p>Shop Costco.com</p><p>Privacy policy and terms of use</p></footer>
</body>
</html>"#
    )
}
