//! Library API integration tests
use digest_core::*;
use rstest::rstest;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

const SCENARIO: &str = concat!(
    "<p>Intro</p>",
    r#"<h4><a href="https://t.me/officialchan/5">Title One</a></h4><p>Body one</p>"#,
    r#"<h4><a href="https://t.me/randomchan/9">Title Two</a></h4><p>Body two</p>"#,
);

fn official_config() -> RestructureConfig {
    RestructureConfig::builder().official_origins(["officialchan"]).build()
}

#[rstest]
#[case("")]
#[case("<p>Just a paragraph</p>")]
#[case("<h3>Section only</h3><p>text</p>")]
#[case("<h1>Title</h1>\n<p>Ünïcödé &amp; entities</p>")]
fn test_flat_input_is_untouched(#[case] html: &str) {
    let config = RestructureConfig::builder()
        .strip_original_sections(true)
        .strip_titles(["Section"])
        .enable_section_reorder(true)
        .build();

    assert_eq!(restructure(html, &config), html);
}

#[test]
fn test_flat_fixture_is_untouched() {
    let html = read_fixture("flat.html");
    let report = restructure_with_report(&html, &official_config());

    assert_eq!(report.html, html);
    assert_eq!(report.block_count, 0);
}

#[test]
fn test_order_preserved_without_split() {
    let html = read_fixture("digest.html");
    let config = RestructureConfig::builder()
        .official_origins(["officialchan"])
        .enable_section_split(false)
        .build();

    let output = restructure(&html, &config);

    let positions: Vec<usize> = ["Компания представила", "Сообщество выпустило", "Результаты тестов", "Заметка без"]
        .iter()
        .map(|needle| output.find(needle).expect("block body present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!output.contains(DEFAULT_OFFICIAL_SECTION_TITLE));
    assert!(!output.contains(DEFAULT_OTHER_SECTION_TITLE));
}

#[test]
fn test_split_places_every_block_once() {
    let html = read_fixture("digest.html");
    let report = restructure_with_report(&html, &official_config());

    assert_eq!(report.block_count, 4);
    assert_eq!(report.official_count, 2);
    assert_eq!(report.other_count, 2);
    assert_eq!(report.official_count + report.other_count, report.block_count);

    for body in ["Компания представила", "Сообщество выпустило", "Результаты тестов", "Заметка без"] {
        assert_eq!(report.html.matches(body).count(), 1, "{} should appear once", body);
    }

    let official = report.html.find("<h3>Официальные источники</h3>").unwrap();
    let other = report.html.find("<h3>Другие источники</h3>").unwrap();
    assert!(official < report.html.find("Компания представила").unwrap());
    assert!(official < report.html.find("Результаты тестов").unwrap());
    assert!(other < report.html.find("Сообщество выпустило").unwrap());
    assert!(other > report.html.find("Результаты тестов").unwrap());
}

#[rstest]
#[case("A B", "A-B")]
#[case("Title One", "Title-One")]
#[case("Новая модель вышла", "Новая-модель-вышла")]
#[case("double  space", "double--space")]
#[case("", "")]
fn test_anchor_ids(#[case] title: &str, #[case] expected: &str) {
    assert_eq!(anchor_id(title), expected);
    assert_eq!(anchor_id(title), anchor_id(title));
}

#[test]
fn test_anchor_written_into_heading() {
    let output = restructure(SCENARIO, &official_config());
    assert!(output.contains(r#"<h4 id="Title-One">"#));
    assert!(output.contains(r#"<h4 id="Title-Two">"#));
}

#[rstest]
#[case(NavigationStyle::List, "<li>")]
#[case(NavigationStyle::Paragraph, "• ")]
fn test_toc_entry_per_block(#[case] style: NavigationStyle, #[case] marker: &str) {
    let html = read_fixture("digest.html");
    let extracted = extract_blocks(&html);
    let blocks = assign_anchors(extracted.blocks);
    let config = RestructureConfig::builder().navigation_style(style).build();

    let toc = build_toc(&blocks, &config);

    assert_eq!(toc.matches(marker).count(), blocks.len());
    assert!(toc.starts_with("<h3>Навигация</h3>"));
}

#[test]
fn test_toc_groups_categories_by_first_appearance() {
    let html = read_fixture("digest.html");
    let blocks = assign_anchors(extract_blocks(&html).blocks);
    let toc = build_toc(&blocks, &RestructureConfig::default());

    let models = toc.find("<strong>Модели</strong>").unwrap();
    let tools = toc.find("<strong>Инструменты</strong>").unwrap();
    let uncategorized = toc.find(&format!("<strong>{}</strong>", UNCATEGORIZED)).unwrap();
    assert!(models < tools && tools < uncategorized);
    assert!(toc.contains(r##"<a href="#Benchmarks-%26-results">Benchmarks &amp; results</a>"##));
}

#[test]
fn test_reorder_is_idempotent() {
    let html = read_fixture("digest.html");
    let config = RestructureConfig::builder()
        .official_origins(["officialchan"])
        .section_priority(["другие", "официальные"])
        .enable_toc(false)
        .build();

    let body = restructure(&html, &config);
    let priority = config.effective_section_priority();
    let once = reorder_sections(&body, &priority);
    let twice = reorder_sections(&once, &priority);

    assert_eq!(once, twice);
}

#[test]
fn test_reorder_applies_priority() {
    let html = read_fixture("digest.html");
    let config = RestructureConfig::builder()
        .official_origins(["officialchan"])
        .enable_section_reorder(true)
        .section_priority(["Другие"])
        .build();

    let report = restructure_with_report(&html, &config);

    assert_eq!(report.sections.first().map(String::as_str), Some("Другие источники"));
    let other = report.html.find("<h3>Другие источники</h3>").unwrap();
    let official = report.html.find("<h3>Официальные источники</h3>").unwrap();
    assert!(other < official);
}

#[test]
fn test_concrete_scenario() {
    let output = restructure(SCENARIO, &official_config());

    let official_heading = "<h3>Официальные источники</h3>";
    let other_heading = "<h3>Другие источники</h3>";
    assert_eq!(output.matches(official_heading).count(), 1);
    assert_eq!(output.matches(other_heading).count(), 1);

    let official = output.find(official_heading).unwrap();
    assert!(output[official + official_heading.len()..].starts_with(r#"<h4 id="Title-One">"#));
    let other = output.find(other_heading).unwrap();
    assert!(output[other + other_heading.len()..].starts_with(r#"<h4 id="Title-Two">"#));

    let navigation = output.find("<h3>Навигация</h3>").unwrap();
    assert!(output.starts_with("<p>Intro</p>"));
    assert!(navigation < official);

    let toc = &output[navigation..official];
    assert!(toc.contains(r##"<a href="#Title-One">Title One</a>"##));
    assert!(toc.contains(r##"<a href="#Title-Two">Title Two</a>"##));
    assert!(toc.contains(r#"<a href="https://t.me/officialchan/5">источник</a>"#));
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_navigation_follows_prefix_with_section_heading(#[case] reorder: bool) {
    let prefix = "<h1>T</h1><p>Intro</p><h3>Официальные новости</h3>";
    let html = format!(
        "{}{}{}",
        prefix,
        r#"<h4><a href="https://t.me/officialchan/5">Title One</a></h4><p>Body one</p>"#,
        r#"<h4><a href="https://t.me/randomchan/9">Title Two</a></h4><p>Body two</p>"#,
    );
    let config = RestructureConfig::builder()
        .official_origins(["officialchan"])
        .enable_section_reorder(reorder)
        .section_priority(["Другие"])
        .build();

    let output = restructure(&html, &config);

    assert!(output.starts_with(&format!("{}<h3>Навигация</h3>", prefix)));
    let navigation = output.find("<h3>Навигация</h3>").unwrap();
    let official = output.find("<h3>Официальные источники</h3>").unwrap();
    let other = output.find("<h3>Другие источники</h3>").unwrap();
    assert!(navigation < official && navigation < other);
    assert_eq!(reorder, other < official);
}

#[test]
fn test_stripping_scenario() {
    let html = read_fixture("digest.html");
    let config = RestructureConfig::builder()
        .official_origins(["officialchan"])
        .strip_original_sections(true)
        .strip_titles(["ОФИЦИАЛЬНЫЕ НОВОСТИ"])
        .build();

    let output = restructure(&html, &config);

    assert!(!output.contains("Официальные новости"));
    assert!(output.contains("<h1>AI за неделю</h1>"));
    for body in ["Компания представила", "Сообщество выпустило", "Результаты тестов", "Заметка без"] {
        assert!(output.contains(body));
    }
}

#[test]
fn test_restructurer_shared_across_threads() {
    let restructurer = std::sync::Arc::new(Restructurer::with_config(official_config()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let restructurer = std::sync::Arc::clone(&restructurer);
            std::thread::spawn(move || restructurer.restructure(SCENARIO))
        })
        .collect();

    let results: Vec<Restructured> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_publication_from_raw_response() {
    let raw = read_fixture("generated_response.txt");
    let generated = GeneratedArticle::from_response(&raw);
    let publication = Publication::from_generated(&generated, &official_config());

    assert_eq!(publication.title, "AI за неделю");
    assert!(publication.summary.starts_with("Две новости недели"));
    assert!(!publication.content.contains(SUMMARY_MARKER));
    assert_eq!(publication.block_count, 2);

    let json = publication.to_json().unwrap();
    assert_eq!(json.get("official_count").and_then(|v| v.as_u64()), Some(1));
    assert!(json.get("sections").and_then(|v| v.as_array()).is_some());
}

#[cfg(feature = "settings")]
#[test]
fn test_settings_file_fixture() {
    let settings = SettingsParser::parse_file(get_fixture_path("digest.conf")).unwrap();
    let config = settings.to_config();

    assert_eq!(config.official_origins, vec!["officialchan"]);
    assert_eq!(config.navigation_title, "Содержание");
    assert_eq!(config.navigation_style, NavigationStyle::Paragraph);
    assert!(config.strip_original_sections);

    let output = restructure(&read_fixture("digest.html"), &config);
    assert!(output.contains("<h3>Содержание</h3><p>"));
    assert!(!output.contains("Официальные новости"));
}

#[cfg(feature = "settings")]
#[test]
fn test_invalid_settings_fixture() {
    let result = SettingsParser::parse_file(get_fixture_path("invalid.conf"));
    assert!(matches!(result, Err(DigestError::ConfigError(_))));
}

#[test]
fn test_read_file_api() {
    let html = read_file(get_fixture_path("digest.html")).unwrap();
    assert!(html.contains("<h4"));
    assert!(matches!(
        read_file(get_fixture_path("missing.html")),
        Err(DigestError::FileNotFound(_))
    ));
}
