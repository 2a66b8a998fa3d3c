// tests/html_parser_parity.rs
// =============================================================================
// The regex extraction must find the same anchors as a real HTML parser on
// well-formed markup. scraper (html5ever) is the reference here.
// =============================================================================

use link_extractor::{extract, LinkExtractor};
use scraper::{Html, Selector};
use std::path::Path;

const FIXTURE: &str = "tests/fixtures/page.html";

fn parser_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

#[test]
fn test_fixture_matches_html_parser() {
    let html = std::fs::read_to_string(FIXTURE).unwrap();
    let links = extract(&html, None, false);

    // scraper decodes entities, we keep them literal
    let ours: Vec<String> = links.iter().map(|l| l.raw().replace("&amp;", "&")).collect();

    assert_eq!(ours, parser_hrefs(&html));
    assert_eq!(ours.len(), 12);
}

#[test]
fn test_inline_snippet_matches_html_parser() {
    let html = r##"
        <html>
            <body>
                <a href="https://example.ru/page1">Link 1</a>
                <a href="/relative/path">Link 2</a>
                <a href="contact.html">Link 3</a>
                <a href="../about/team">Link 4</a>
                <a href="//youtube.com/video">Link 5</a>
                <a href="https://sub.example.ru/test">Link 6</a>
                <a href="#section2">Link 7</a>
                <a href="mailto:user@example.ru">Link 8</a>
                <a href="   https://example.ru/with-spaces   ">Link 9</a>
            </body>
        </html>
    "##;

    let raws: Vec<String> = extract(html, None, false)
        .iter()
        .map(|l| l.raw().to_string())
        .collect();

    assert_eq!(raws, parser_hrefs(html));
}

#[test]
fn test_extract_from_fixture_file() {
    let extractor = LinkExtractor::new(Some("https://example.com/site/"));
    let links = extractor.extract_from_file(Path::new(FIXTURE), true).unwrap();

    // "/docs/" appears twice in the fixture
    assert_eq!(links.len(), 11);

    let docs = links.iter().find(|l| l.raw() == "/docs/").unwrap();
    assert_eq!(docs.absolute(), Some("https://example.com/docs/"));
    assert_eq!(docs.path(), Some("/docs/"));

    let intro = links.iter().find(|l| l.raw() == "guide/intro.html").unwrap();
    assert_eq!(intro.absolute(), Some("https://example.com/guide/intro.html"));

    let cdn = links.iter().find(|l| l.raw() == "//cdn.example.com/download.zip").unwrap();
    assert!(!cdn.is_absolute());
    assert_eq!(cdn.scheme(), Some("https"));
    assert_eq!(cdn.domain(), Some("cdn.example.com"));

    let github = links.iter().find(|l| l.raw().contains("github")).unwrap();
    assert!(github.is_absolute());
    assert_eq!(github.domain(), Some("github.com"));

    let unicode = links.iter().find(|l| l.raw().contains("сайт")).unwrap();
    assert_eq!(unicode.domain(), Some("сайт.рф"));
    assert_eq!(unicode.path(), Some("/страница"));
}
