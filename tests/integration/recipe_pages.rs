//! Recipe pages: sub-recipe ingredient lists, instructions, times and
//! credits.

use connection_extract::ContentType;

use super::{extract_page, with_site_chrome};

const CRUMB_CAKE_URL: &str =
    "https://www.costco.com/connection-recipe-apple-crumb-cake-october-2023.html";

fn crumb_cake_page() -> String {
    with_site_chrome(
        "Apple Crumb Cake | Costco",
        r#"<article class="recipe">
    <h1>Apple Crumb Cake</h1>
    <p>Recipe courtesy of Jane Baker, Kirkland test kitchen</p>
    <img src="./10_23_Recipe_CrumbCake.jpg" alt="Apple crumb cake on a plate" width="800" height="600">
    <img src="/images/print-icon.png" alt="">
    <h3>STREUSEL</h3>
    <ul>
      <li>1 cup flour</li>
      <li>1/2 cup brown sugar</li>
      <li>4 tablespoons butter</li>
    </ul>
    <h3>CAKE</h3>
    <ul>
      <li>2 cups flour</li>
      <li>2 apples, diced</li>
      <li>1 tsp baking soda</li>
    </ul>
    <h3>Directions</h3>
    <ol>
      <li>Preheat oven to 350 F.</li>
      <li>Combine streusel ingredients until crumbly.</li>
      <li>Bake for 40 minutes.</li>
    </ol>
    <p>Prep time: 20 minutes. Cook time: 40 minutes. Serves 8.</p>
  </article>"#,
    )
}

#[test]
fn test_sub_recipe_lists_are_kept_with_markers() {
    let result = extract_page(&crumb_cake_page(), CRUMB_CAKE_URL);

    assert_eq!(result.content_type, ContentType::Recipe);
    assert_eq!(
        result.metadata.list("ingredients"),
        [
            "=== STREUSEL ===",
            "1 cup flour",
            "1/2 cup brown sugar",
            "4 tablespoons butter",
            "=== CAKE ===",
            "2 cups flour",
            "2 apples, diced",
            "1 tsp baking soda",
        ]
    );
    assert_eq!(result.metadata.list("instructions").len(), 3);
}

#[test]
fn test_times_servings_and_credit() {
    let result = extract_page(&crumb_cake_page(), CRUMB_CAKE_URL);

    assert_eq!(result.title, "Apple Crumb Cake");
    assert_eq!(result.byline, "By Jane Baker");
    assert_eq!(result.metadata.text("prep_time"), "20 minutes");
    assert_eq!(result.metadata.text("cook_time"), "40 minutes");
    assert_eq!(result.metadata.text("servings"), "8");
    assert_eq!(result.source.publication_date, "October 2023");
}

#[test]
fn test_recipe_photo_outranks_icon() {
    let result = extract_page(&crumb_cake_page(), CRUMB_CAKE_URL);

    let best = result.best_image().expect("recipe page has images");
    assert_eq!(
        best.src,
        "https://mobilecontent.costco.com/live/resource/img/static-us-connection-october-23/10_23_Recipe_CrumbCake.jpg"
    );
    assert!(result
        .images
        .iter()
        .any(|image| image.src == "https://www.costco.com/images/print-icon.png"));
}

#[test]
fn test_site_chrome_is_removed() {
    let result = extract_page(&crumb_cake_page(), CRUMB_CAKE_URL);

    for paragraph in &result.main_content {
        assert!(!paragraph.contains("cookies"), "cookie banner leaked: {paragraph}");
        assert!(!paragraph.contains("Shop Costco.com"), "footer leaked: {paragraph}");
    }
    assert!(!result.full_text.contains("Pharmacy"));
    assert!(!result.full_text.contains("dataLayer"));
}

#[test]
fn test_paragraph_instructions_when_no_step_list() {
    let html = with_site_chrome(
        "Spinach Lasagna Roll Ups | Costco",
        r#"<article>
    <h1>Spinach Lasagna Roll Ups</h1>
    <p>Recipe and photo courtesy of Kylie Lato</p>
    <p>This is a family favorite for busy weeknights at our house.</p>
    <ul>
      <li>8 lasagna noodles</li>
      <li>2 cups ricotta cheese</li>
      <li>1 cup marinara sauce</li>
    </ul>
    <p>Preheat the oven to 375 degrees and lightly grease a large baking dish.</p>
    <p>Spread ricotta mixture over each noodle, roll up tightly and place seam side down.</p>
  </article>"#,
    );
    let result = extract_page(
        &html,
        "https://www.costco.com/connection-recipe-lasagna-roll-ups-october-2023.html",
    );

    assert_eq!(result.content_type, ContentType::Recipe);
    assert_eq!(result.byline, "By Kylie Lato");
    assert_eq!(result.metadata.list("ingredients").len(), 3);
    let steps = result.metadata.list("instructions");
    assert_eq!(steps.len(), 2);
    assert!(steps[0].starts_with("Preheat the oven"));
    assert!(steps[1].starts_with("Spread ricotta"));
}

#[test]
fn test_complete_recipe_scores_higher_than_sparse_one() {
    let complete = extract_page(&crumb_cake_page(), CRUMB_CAKE_URL);
    let sparse = extract_page(
        &with_site_chrome("Jam | Costco", "<article><h1>Freezer Jam</h1></article>"),
        "https://www.costco.com/connection-recipe-freezer-jam-october-2023.html",
    );

    assert_eq!(sparse.content_type, ContentType::Recipe);
    assert!(sparse.metadata.list("ingredients").is_empty());
    assert!(complete.quality_score > sparse.quality_score);
}
