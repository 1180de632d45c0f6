use connection_extract::{extract, extract_bytes, ContentType, Options};
use std::time::{Duration, Instant};

#[test]
fn extract_does_not_panic_on_unclosed_tags() {
    match extract("<p>Members share their favorite finds<div>and more stories") {
        Ok(result) => assert!(result.full_text.contains("favorite finds")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn extract_does_not_panic_on_invalid_nesting() {
    assert!(extract("<p><div></p></div>").is_ok());
    assert!(extract("<ul><p><li>1 cup flour</p></ul>").is_ok());
    assert!(extract("<h2><h3>Nested headings</h2></h3>").is_ok());
}

#[test]
fn extract_does_not_panic_on_broken_attributes() {
    assert!(extract("<div class=\"test id=broken>").is_ok());
    assert!(extract("<img src=\"./10_23_Broken.jpg alt=oops>").is_ok());
    assert!(extract("<img width=\"huge\" height=\"-3\" src=\"a.jpg\">").is_ok());
}

#[test]
fn empty_input_gives_empty_general_result() {
    for html in ["", "   ", "<html></html>", "<html><body></body></html>"] {
        match extract(html) {
            Ok(result) => {
                assert_eq!(result.content_type, ContentType::General, "input: {html:?}");
                assert!(result.main_content.is_empty());
                assert!(result.images.is_empty());
                assert!(result.sections.is_empty());
            }
            Err(err) => panic!("expected Ok(_) for {html:?}, got Err({err:?})"),
        }
    }
}

#[test]
fn fragment_without_body_still_extracts() {
    match extract("<h1>Going Batty</h1><p>Austin is home to the largest urban bat colony.</p>") {
        Ok(result) => {
            assert_eq!(result.title, "Going Batty");
            assert_eq!(result.main_content.len(), 1);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn deeply_nested_markup_finishes_quickly() {
    let depth = 400;
    let html = format!(
        "<html><body>{}<p>Deep inside the page sits one real paragraph of text.</p>{}</body></html>",
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );

    let start = Instant::now();
    let result = extract(&html);
    assert!(start.elapsed() < Duration::from_secs(10));
    match result {
        Ok(result) => assert!(result.full_text.contains("one real paragraph")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn large_page_finishes_quickly() {
    let mut body = String::new();
    for i in 0..300 {
        body.push_str(&format!(
            "<h2>Story {i}</h2><p>Paragraph number {i} talks about warehouse finds and member favorites.</p>\
             <img src=\"./10_23_Story_{i}.jpg\" alt=\"Story {i}\">"
        ));
    }
    let html = format!("<html><body><main>{body}</main></body></html>");

    let start = Instant::now();
    let result = extract(&html);
    assert!(start.elapsed() < Duration::from_secs(30));
    match result {
        Ok(result) => {
            assert_eq!(result.images.len(), 300);
            assert!(!result.sections.is_empty());
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn unicode_text_survives() {
    let html = "<html><body><article><h1>Café crème brûlée</h1>\
                <p>Members in Montréal and Zürich shared 東京 travel notes 🎉 with us.</p>\
                </article></body></html>";

    match extract(html) {
        Ok(result) => {
            assert_eq!(result.title, "Café crème brûlée");
            assert!(result.full_text.contains("東京"));
            assert!(result.full_text.contains("🎉"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn invalid_utf8_bytes_do_not_fail() {
    let html = b"<html><body><p>Broken \xFF\xFE bytes in a member letter here.</p></body></html>";
    match extract_bytes(html, &Options::default()) {
        Ok(result) => assert!(result.full_text.contains("member letter")),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn scripts_and_styles_never_leak() {
    let html = "<html><head><style>p { color: red; }</style></head><body>\
                <script>var tracking = 'secret';</script>\
                <article><p>The warehouse bakery now offers seasonal pies.</p></article>\
                <noscript>Enable JavaScript</noscript></body></html>";

    match extract(html) {
        Ok(result) => {
            assert!(!result.full_text.contains("secret"));
            assert!(!result.full_text.contains("color: red"));
            assert!(!result.full_text.contains("Enable JavaScript"));
            assert!(result.full_text.contains("seasonal pies"));
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
