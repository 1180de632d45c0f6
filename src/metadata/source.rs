//! Source information: page URL, saved filename, issue date.

use super::PageInfo;
use crate::result::SourceInfo;
use crate::url_utils::publication_date;
use crate::Options;

/// Build [`SourceInfo`] from the options. The issue date is read from the
/// filename first, then from the URL.
#[must_use]
pub fn source_info(opts: &Options) -> SourceInfo {
    let filename = opts.effective_filename();
    let url = opts.url.as_deref().unwrap_or_default();

    let mut date = publication_date(filename);
    if date.is_empty() {
        date = publication_date(url);
    }

    SourceInfo {
        url: opts.url.clone(),
        filename: (!filename.is_empty()).then(|| filename.to_string()),
        publication_date: date,
    }
}

/// Fill `source`.
#[must_use]
pub fn extract_source(original: PageInfo, opts: &Options) -> PageInfo {
    PageInfo {
        source: source_info(opts),
        ..original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_date_preferred() {
        let opts = Options {
            url: Some("https://www.costco.com/connection-x-october-2023.html".into()),
            filename: Some("03_24_saved.html".into()),
            ..Options::default()
        };
        let info = source_info(&opts);
        assert_eq!(info.publication_date, "March 2024");
        assert_eq!(info.filename.as_deref(), Some("03_24_saved.html"));
    }

    #[test]
    fn test_url_date_fallback() {
        let opts = Options {
            url: Some("https://www.costco.com/december-2022/page".into()),
            filename: Some("page.html".into()),
            ..Options::default()
        };
        assert_eq!(source_info(&opts).publication_date, "December 2022");
    }

    #[test]
    fn test_empty_options() {
        let info = source_info(&Options::default());
        assert_eq!(info, SourceInfo::default());
    }
}
