use connection_extract::{
    classify, extract_with_options, ClassificationInput, ContentType, ContentTypeRule, Options,
};

fn classify_url(url: &str) -> ContentType {
    let filename = url.rsplit('/').next().unwrap_or_default();
    let input = ClassificationInput {
        url,
        filename,
        ..ClassificationInput::default()
    };
    classify(&input, &ContentTypeRule::defaults()).content_type
}

#[test]
fn url_keywords_pick_each_type() {
    let cases = [
        ("https://www.costco.com/connection-recipe-october-2023.html", ContentType::Recipe),
        ("https://www.costco.com/connection-travel-connection-october-2023.html", ContentType::Travel),
        ("https://www.costco.com/connection-power-up-october-2023.html", ContentType::Tech),
        ("https://www.costco.com/connection-publisher-note-october-2023.html", ContentType::Editorial),
        ("https://www.costco.com/connection-member-poll-october-2023.html", ContentType::Member),
        ("https://www.costco.com/connection-treasure-hunt-october-2023.html", ContentType::Shopping),
        ("https://www.costco.com/connection-costco-life-october-2023.html", ContentType::Lifestyle),
        ("https://www.costco.com/connection-edition-october-2023.html", ContentType::MagazineFrontCover),
    ];

    for (url, expected) in cases {
        assert_eq!(classify_url(url), expected, "url: {url}");
    }
}

#[test]
fn classifier_is_deterministic() {
    let input = ClassificationInput {
        url: "https://www.costco.com/connection-october-2023.html",
        filename: "connection-october-2023.html",
        title: "Member poll | Costco",
        text: "We asked members on our Facebook page about travel and technology.",
    };
    let rules = ContentTypeRule::defaults();
    let first = classify(&input, &rules);
    for _ in 0..10 {
        assert_eq!(classify(&input, &rules), first);
    }
}

#[test]
fn scores_follow_weights() {
    let input = ClassificationInput {
        url: "https://www.costco.com/connection-recipe.html",
        filename: "connection-recipe.html",
        title: "Apple crumble recipe",
        text: "ingredients: 1 cup oats",
    };
    let result = classify(&input, &ContentTypeRule::defaults());
    assert_eq!(result.content_type, ContentType::Recipe);
    // url 20, title "recipe" + "crumble" 20, content "ingredients" + "cup" 10
    assert_eq!(result.score, 50);
    assert_eq!(result.scores.len(), 8);
    assert_eq!(result.scores[0], (ContentType::Recipe, 50));
}

#[test]
fn custom_rule_table_is_used_by_pipeline() {
    let opts = Options {
        content_type_rules: vec![ContentTypeRule::new(
            ContentType::Tech,
            &[],
            &[],
            &["drone"],
            5,
        )],
        ..Options::default()
    };
    let html = "<html><body><p>The new drone folds into a backpack pocket.</p></body></html>";

    match extract_with_options(html, &opts) {
        Ok(result) => assert_eq!(result.content_type, ContentType::Tech),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn empty_rule_table_classifies_general() {
    let opts = Options {
        url: Some("https://www.costco.com/connection-recipe-october-2023.html".into()),
        content_type_rules: Vec::new(),
        ..Options::default()
    };

    match extract_with_options("<html><body><p>2 cups flour</p></body></html>", &opts) {
        Ok(result) => assert_eq!(result.content_type, ContentType::General),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
