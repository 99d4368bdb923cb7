//! Integration tests for the keyword extractor against fixture pages.

use std::path::PathBuf;

use specgen_core::record::KeywordKind;
use specgen_extract::extractors::KeywordsExtractor;
use specgen_extract::testing::FixtureSource;
use specgen_extract::{CategoryRecords, ExtractError, Extractor};

const KEYWORDS_URL: &str = "https://learn.example.com/keywords";
const RESERVED_URL: &str = "https://learn.example.com/reserved-words";

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing fixture {name}"))
}

fn both_pages() -> FixtureSource {
    FixtureSource::new()
        .with_page(KEYWORDS_URL, fixture("keywords.html"))
        .with_page(RESERVED_URL, fixture("reserved-words.html"))
}

fn run(source: &FixtureSource) -> Result<CategoryRecords, ExtractError> {
    KeywordsExtractor::new(KEYWORDS_URL, RESERVED_URL).run(source)
}

#[test]
fn unions_both_sources_and_filters_identifier_shapes() {
    let records = match run(&both_pages()).unwrap() {
        CategoryRecords::Keywords(records) => records,
        other => panic!("unexpected category {:?}", other.category()),
    };

    let keyword = |name: &str| records.iter().find(|r| r.name == name);

    assert_eq!(keyword("centroid").unwrap().kind, KeywordKind::Hlsl);
    assert_eq!(keyword("ByteAddressBuffer").unwrap().kind, KeywordKind::Hlsl);
    assert_eq!(keyword("const_cast").unwrap().kind, KeywordKind::Reserved);
    assert_eq!(keyword("typename").unwrap().kind, KeywordKind::Reserved);

    // non-identifier tokens never make it through
    assert!(keyword("4x4NotAnIdentifier").is_none());
    assert!(records.iter().all(|r| !r.name.contains(' ')));
}

#[test]
fn name_collisions_across_sources_keep_the_first_kind() {
    let records = match run(&both_pages()).unwrap() {
        CategoryRecords::Keywords(records) => records,
        other => panic!("unexpected category {:?}", other.category()),
    };
    // `class` is both an HLSL keyword and a reserved word; the keyword
    // pass runs first and wins
    let class: Vec<_> = records.iter().filter(|r| r.name == "class").collect();
    assert_eq!(class.len(), 1);
    assert_eq!(class[0].kind, KeywordKind::Hlsl);
}

#[test]
fn one_broken_page_does_not_sink_the_other() {
    let source = FixtureSource::new()
        .with_page(KEYWORDS_URL, "<html><body><p>restructured</p></body></html>")
        .with_page(RESERVED_URL, fixture("reserved-words.html"));

    let records = match run(&source).unwrap() {
        CategoryRecords::Keywords(records) => records,
        other => panic!("unexpected category {:?}", other.category()),
    };
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.kind == KeywordKind::Reserved));
}

#[test]
fn both_pages_empty_is_fatal() {
    let source = FixtureSource::new()
        .with_page(KEYWORDS_URL, "<html><body></body></html>")
        .with_page(RESERVED_URL, "<html><body></body></html>");
    let result = run(&source);
    assert!(matches!(
        result,
        Err(ExtractError::EmptyCategory { category: "keyword" })
    ));
}
