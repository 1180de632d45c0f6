use connection_extract::{extract, extract_with_options, ContentTypeRule, Error, Options};

const SECTIONED_HTML: &str = r#"<html><body><article>
    <h2>Going Batty</h2>
    <p>Austin is home to the largest urban bat colony in North America.</p>
    <p>Crowds gather on the Congress Avenue bridge every summer evening.</p>
    <p>The bats eat tons of insects on each nightly flight over Texas.</p>
    <img src="https://x/10_23_Batty_Bridge.jpg" alt="Bats leaving the bridge">
    <img src="https://x/zz_unrelated.jpg">
    </article></body></html>"#;

#[test]
fn options_default_values_are_sensible() {
    let options = Options::default();
    assert!(options.url.is_none());
    assert!(options.filename.is_none());
    assert_eq!(options.content_type_rules, ContentTypeRule::defaults());
    assert!((options.similarity_threshold - 0.8).abs() < f64::EPSILON);
    assert_eq!(options.max_section_paragraphs, 5);
    assert!(options.keep_section_images_in_document);
    assert!(!options.proximity_fallback);
    assert!(!options.default_byline);
    assert!(!options.always_enhance);
}

#[test]
fn struct_update_syntax_overrides_selected_fields_only() {
    let options = Options {
        url: Some("https://www.costco.com/connection-recipe-pie.html".to_string()),
        max_section_paragraphs: 2,
        ..Options::default()
    };

    assert_eq!(options.max_section_paragraphs, 2);
    assert!(options.keep_section_images_in_document);
    assert_eq!(options.effective_filename(), "connection-recipe-pie.html");
}

#[test]
fn explicit_filename_wins_over_url() {
    let options = Options {
        url: Some("https://www.costco.com/connection-recipe-pie.html".to_string()),
        filename: Some("saved_copy.html".to_string()),
        ..Options::default()
    };
    assert_eq!(options.effective_filename(), "saved_copy.html");
}

#[test]
fn section_paragraph_cap_is_applied() {
    let opts = Options {
        max_section_paragraphs: 2,
        ..Options::default()
    };

    match extract_with_options(SECTIONED_HTML, &opts) {
        Ok(result) => {
            let content = result
                .section("Going Batty")
                .map(|s| s.content.join(" "))
                .unwrap_or_default();
            assert!(content.contains("Congress Avenue"));
            assert!(!content.contains("tons of insects"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn similarity_threshold_controls_dedup() {
    let html = r#"<html><body><article>
        <p>Members can save on tires this month at every warehouse location.</p>
        <p>Members can save on tires this month at every single warehouse location.</p>
        </article></body></html>"#;

    let strict = extract_with_options(html, &Options::default());
    let loose = extract_with_options(
        html,
        &Options {
            similarity_threshold: 1.0,
            ..Options::default()
        },
    );

    match (strict, loose) {
        (Ok(strict), Ok(loose)) => {
            assert_eq!(strict.main_content.len(), 1);
            assert_eq!(loose.main_content.len(), 2);
        }
        (a, b) => panic!("expected two Ok results, got {a:?} and {b:?}"),
    }
}

#[test]
fn section_images_can_be_removed_from_document_list() {
    let opts = Options {
        keep_section_images_in_document: false,
        ..Options::default()
    };

    match (extract(SECTIONED_HTML), extract_with_options(SECTIONED_HTML, &opts)) {
        (Ok(kept), Ok(split)) => {
            assert_eq!(kept.images.len(), 2);
            assert_eq!(split.images.len(), 1);
            assert!(split.images[0].src.ends_with("zz_unrelated.jpg"));
            assert_eq!(split.sections[0].images.len(), 1);
        }
        (a, b) => panic!("expected two Ok results, got {a:?} and {b:?}"),
    }
}

#[test]
fn default_byline_is_opt_in() {
    let html = "<html><body><article><h1>Member poll results</h1>\
                <p>We asked members on our Facebook page what they buy most.</p></article></body></html>";
    let url = Some("https://www.costco.com/connection-member-poll-october-2023.html".to_string());

    let without = extract_with_options(
        html,
        &Options {
            url: url.clone(),
            ..Options::default()
        },
    );
    let with = extract_with_options(
        html,
        &Options {
            url,
            default_byline: true,
            ..Options::default()
        },
    );

    match (without, with) {
        (Ok(without), Ok(with)) => {
            assert!(without.byline.is_empty());
            assert_eq!(with.byline, "By Member Services");
        }
        (a, b) => panic!("expected two Ok results, got {a:?} and {b:?}"),
    }
}

#[test]
fn unparsable_url_is_rejected() {
    let opts = Options {
        url: Some("::not a url::".to_string()),
        ..Options::default()
    };
    assert!(matches!(
        extract_with_options("<p>text</p>", &opts),
        Err(Error::InvalidUrl(_))
    ));
}
