//! Charset sniffing for saved pages.
//!
//! Browser "Save Page As" output keeps the original `<meta>` charset, and
//! older magazine archives were served as windows-1252. Bytes are decoded
//! according to a byte-order mark first, then the first charset
//! declaration in the head, then UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes scanned for a charset declaration. Saved pages carry a
/// `saved from url` comment and inline styles ahead of the meta tags.
const SNIFF_WINDOW: usize = 4096;

/// Either `<meta charset=x>` or `<meta http-equiv=content-type content="...; charset=x">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]*?charset\s*=\s*["']?\s*([A-Za-z0-9_:.\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Encoding label declared in the document head, if any.
fn declared_label(html: &[u8]) -> Option<&[u8]> {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    META_CHARSET
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_bytes())
}

/// Detect the encoding of an HTML byte stream.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }
    declared_label(html)
        .and_then(Encoding::for_label)
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes into a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use connection_extract::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _, had_errors): (Cow<'_, str>, _, bool) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced malformed {} sequences while decoding", encoding.name());
    }
    decoded.into_owned()
}
