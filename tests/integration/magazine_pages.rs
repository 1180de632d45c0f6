//! Front cover, travel and member pages.

use connection_extract::ContentType;

use super::{extract_page, with_site_chrome};

const CDN_FOLDER: &str =
    "https://mobilecontent.costco.com/live/resource/img/static-us-connection-october-23";

fn front_cover_page() -> String {
    with_site_chrome(
        "Costco Connection | October 2023",
        r#"<main>
    <h1>Costco Connection October 2023</h1>
    <img src="./10_23_Cover.jpg" alt="October 2023 cover" width="600" height="780">
    <p><a href="https://www.costco.com/wcsstore/october-2023.pdf">Download the PDF</a></p>
    <h2>Donation program</h2>
    <p>Members donated more than 10,000 pairs of eyeglasses at warehouse optical departments.</p>
    <h2>Where has your card been?</h2>
    <p>Members sent photos from beaches, mountains and city streets around the world.</p>
    <img src="./10_23_UF_CostcoLife_Card.jpg" alt="Member holding card on a beach">
    <img src="./10_23_Glasses.jpg" alt="">
    <h2>Halloween fun</h2>
    <p>Costume ideas and Halloween treats for the whole family.</p>
    <img src="./10_23_Halloween_Costume.jpg" alt="Kids in costumes">
    <ul>
      <li><a href="https://www.costco.com/connection-fye-going-batty-october-2023.html">Going Batty</a></li>
      <li><a href="https://www.costco.com/connection-ss-holiday-gifts-october-2023.html">Holiday gifts</a></li>
      <li><a href="https://www.costco.com/connection-recipe-apple-crumb-cake-october-2023.html">Apple crumb cake</a></li>
    </ul>
  </main>"#,
    )
}

const FRONT_COVER_URL: &str = "https://www.costco.com/connection-edition-october-2023.html";

#[test]
fn test_front_cover_is_classified_and_dated() {
    let result = extract_page(&front_cover_page(), FRONT_COVER_URL);

    assert_eq!(result.content_type, ContentType::MagazineFrontCover);
    assert_eq!(result.source.publication_date, "October 2023");
    assert_eq!(
        result.source.filename.as_deref(),
        Some("connection-edition-october-2023.html")
    );
}

#[test]
fn test_front_cover_table_of_contents() {
    let result = extract_page(&front_cover_page(), FRONT_COVER_URL);

    let categories: Vec<&str> = result
        .metadata
        .records("article_categories")
        .iter()
        .filter_map(|record| record.get("category").map(String::as_str))
        .collect();
    assert_eq!(
        categories,
        ["For Your Entertainment", "Special Section", "Recipes"]
    );
    assert_eq!(result.metadata.records("special_sections").len(), 1);
    assert_eq!(
        result.metadata.text("pdf_download_link"),
        "https://www.costco.com/wcsstore/october-2023.pdf"
    );
    assert_eq!(
        result.metadata.text("cover_image"),
        format!("{CDN_FOLDER}/10_23_Cover.jpg")
    );
}

#[test]
fn test_front_cover_images_land_in_their_sections() {
    let result = extract_page(&front_cover_page(), FRONT_COVER_URL);

    let names_in = |heading: &str| -> Vec<String> {
        result
            .section(heading)
            .expect("section exists")
            .images
            .iter()
            .map(|image| image.src.rsplit('/').next().unwrap_or_default().to_string())
            .collect()
    };

    assert_eq!(names_in("Costco Connection October 2023"), ["10_23_Cover.jpg"]);
    assert_eq!(names_in("Donation program"), ["10_23_Glasses.jpg"]);
    assert_eq!(names_in("Where has your card been?"), ["10_23_UF_CostcoLife_Card.jpg"]);
    assert_eq!(names_in("Halloween fun"), ["10_23_Halloween_Costume.jpg"]);
    assert_eq!(result.images.len(), 4);
}

fn travel_page() -> String {
    with_site_chrome(
        "Travel Connection | Costco",
        r#"<article>
    <h1>A tale of two cities</h1>
    <p>By Maria Lopez</p>
    <p>You can visit San Antonio for the River Walk and explore Austin for live music.</p>
    <h2>San Antonio</h2>
    <p>The missions tell the history of the region and its heritage.</p>
    <img src="./10_23_Travel_SanAntonio.jpg" alt="River Walk in San Antonio at night">
    <h2>Austin</h2>
    <p>Live music plays on Sixth Street every night of the week.</p>
    <img src="./10_23_Travel_Austin.jpg" alt="Austin skyline at dusk">
  </article>"#,
    )
}

const TRAVEL_URL: &str =
    "https://www.costco.com/connection-travel-connection-a-tale-of-two-cities-october-2023.html";

#[test]
fn test_travel_page_fields() {
    let result = extract_page(&travel_page(), TRAVEL_URL);

    assert_eq!(result.content_type, ContentType::Travel);
    assert_eq!(result.title, "A tale of two cities");
    assert_eq!(result.byline, "By Maria Lopez");
    assert_eq!(result.metadata.list("destinations"), ["San Antonio", "Austin"]);
    assert_eq!(result.metadata.list("cultural_notes").len(), 1);
}

#[test]
fn test_travel_images_follow_alt_text() {
    let result = extract_page(&travel_page(), TRAVEL_URL);

    let san_antonio = result.section("San Antonio").expect("San Antonio section");
    let austin = result.section("Austin").expect("Austin section");
    assert_eq!(san_antonio.images.len(), 1);
    assert!(san_antonio.images[0].src.ends_with("10_23_Travel_SanAntonio.jpg"));
    assert_eq!(austin.images.len(), 1);
    assert!(austin.images[0].src.ends_with("10_23_Travel_Austin.jpg"));
    assert!(result
        .section("A tale of two cities")
        .is_some_and(|intro| intro.images.is_empty()));
}

#[test]
fn test_member_comments_page() {
    let html = with_site_chrome(
        "Member Connection | Costco",
        r#"<article>
    <h1>Member comments</h1>
    <p>Member comments from our readers on last month's cover story.</p>
    <p>I loved the piece on national parks and booked a trip right away.</p>
  </article>"#,
    );
    let result = extract_page(
        &html,
        "https://www.costco.com/connection-member-comments-october-2023.html",
    );

    assert_eq!(result.content_type, ContentType::Member);
    assert_eq!(result.metadata.text("member_format"), "comments");
    assert!(result.metadata.list("poll_questions").is_empty());
}
