//! Integration tests for the type extractor: scalar parsing plus the
//! vector/matrix/buffer family expansion.

use std::path::PathBuf;

use specgen_core::record::TypeRecord;
use specgen_extract::extractors::TypesExtractor;
use specgen_extract::testing::FixtureSource;
use specgen_extract::{CategoryRecords, ExtractError, Extractor};

const SCALARS_URL: &str = "https://learn.example.com/scalar-types";

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing fixture {name}"))
}

fn run_fixture() -> Vec<TypeRecord> {
    let source = FixtureSource::new().with_page(SCALARS_URL, fixture("scalar-types.html"));
    match TypesExtractor::new(SCALARS_URL).run(&source).unwrap() {
        CategoryRecords::Types(records) => records,
        other => panic!("unexpected category {:?}", other.category()),
    }
}

fn find<'a>(records: &'a [TypeRecord], name: &str) -> &'a TypeRecord {
    records
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("missing type {name}"))
}

#[test]
fn parses_scalars_with_descriptions_and_skips_see_also() {
    let records = run_fixture();
    assert_eq!(
        find(&records, "bool").description,
        vec!["true or false."]
    );
    assert_eq!(
        find(&records, "snorm float").description,
        vec!["IEEE 754 32-bit value in range -1 to 1."]
    );
    // the "See also" list is navigation, not a type list
    assert!(records.iter().all(|r| !r.name.starts_with("Data Types")));
}

#[test]
fn string_type_comes_from_its_narrative_section() {
    let records = run_fixture();
    let string_type = find(&records, "string");
    assert_eq!(string_type.description.len(), 1);
    assert!(string_type.description[0].starts_with("A string is an ASCII string."));
}

#[test]
fn expands_vectors_matrices_and_buffers_per_eligible_base() {
    let records = run_fixture();

    // five eligible bases: bool, int, uint, float, double
    assert_eq!(
        find(&records, "float3").description,
        vec!["3-component vector of float"]
    );
    assert_eq!(
        find(&records, "int2x4").description,
        vec!["2x4 matrix of int"]
    );
    assert_eq!(
        find(&records, "vector<double>").description,
        vec!["defaults to 4-component vector of double"]
    );
    assert_eq!(
        find(&records, "matrix<uint, 1>").description,
        vec!["defaults to 1x4 matrix of uint"]
    );
    assert_eq!(
        find(&records, "Buffer<bool4x4>").description,
        vec!["read-only buffer of bool4x4"]
    );

    // excluded bases never expand
    assert!(records.iter().all(|r| r.name != "string2"));
    assert!(records.iter().all(|r| !r.name.contains("snorm float1")));

    // generic placeholders are present, buffers only wrap concrete payloads
    assert!(records.iter().any(|r| r.name == "vector<Type, Components>"));
    assert!(records.iter().any(|r| r.name == "matrix<Type, Rows, Cols>"));
    assert!(records.iter().all(|r| r.name != "Buffer<vector<float>>"));

    // 7 scalars + string + 46 vector forms + 171 matrix forms
    // + 105 buffers + 2 generic placeholders, no name collisions
    assert_eq!(records.len(), 332);
}

#[test]
fn a_page_with_no_scalar_lists_is_fatal() {
    let source = FixtureSource::new().with_page(
        SCALARS_URL,
        "<html><body><div class=\"content\"><p>moved</p></div></body></html>",
    );
    let result = TypesExtractor::new(SCALARS_URL).run(&source);
    assert!(matches!(
        result,
        Err(ExtractError::MissingStructure { .. })
    ));
}
