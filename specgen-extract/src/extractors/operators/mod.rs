//! Operator extraction
//!
//! Operators come from a builtin precedence table rather than a scraped
//! page; the extractor validates it and converts it to records. The table
//! keeps one row per (token, precedence, kind) combination, but the
//! combinators key on name alone, so a token reused across precedence
//! levels collapses to its first-seen row. That collapsing is retained
//! corpus behavior, not an oversight.

mod table;

use specgen_core::combine::dedup_by_name;
use specgen_core::record::{Category, OperatorRecord};

use crate::error::ExtractError;
use crate::extractor::{CategoryRecords, Extractor};
use crate::fetch::DocumentSource;

pub use table::{OperatorSpec, OPERATORS};

#[derive(Debug, Default)]
pub struct OperatorsExtractor;

impl OperatorsExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for OperatorsExtractor {
    fn name(&self) -> &str {
        "Operators (builtin precedence table)"
    }

    fn category(&self) -> Category {
        Category::Operators
    }

    fn run(&self, _source: &dyn DocumentSource) -> Result<CategoryRecords, ExtractError> {
        let records: Vec<OperatorRecord> = OPERATORS
            .iter()
            .map(|spec| OperatorRecord {
                name: spec.name.to_string(),
                precedence: spec.precedence,
                left_to_right: spec.left_to_right,
                kind: spec.kind,
            })
            .collect();

        if records.is_empty() {
            return Err(ExtractError::EmptyCategory {
                category: "operator",
            });
        }
        Ok(CategoryRecords::Operators(dedup_by_name(records)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixtureSource;
    use specgen_core::record::OperatorKind;

    fn run() -> Vec<OperatorRecord> {
        let source = FixtureSource::new();
        match OperatorsExtractor::new().run(&source).unwrap() {
            CategoryRecords::Operators(records) => records,
            other => panic!("unexpected category {:?}", other.category()),
        }
    }

    #[test]
    fn table_covers_all_precedence_levels() {
        let records = run();
        for level in 1..=15 {
            assert!(
                records.iter().any(|r| r.precedence == level),
                "no operator at precedence {level}"
            );
        }
    }

    #[test]
    fn name_collisions_collapse_to_the_first_seen_row() {
        let records = run();
        // `++` appears as postfix (precedence 1) and prefix (precedence 2);
        // name-keyed dedup keeps the postfix row
        let increment: Vec<_> = records.iter().filter(|r| r.name == "++").collect();
        assert_eq!(increment.len(), 1);
        assert_eq!(increment[0].kind, OperatorKind::Postfix);
        assert_eq!(increment[0].precedence, 1);

        // `+` appears as prefix (2) and infix (4); the prefix row wins
        let plus = records.iter().find(|r| r.name == "+").unwrap();
        assert_eq!(plus.kind, OperatorKind::Prefix);
        assert_eq!(plus.precedence, 2);
    }

    #[test]
    fn assignment_operators_bind_right_to_left() {
        let records = run();
        for name in ["=", "+=", "<<=", "|="] {
            let record = records.iter().find(|r| r.name == name).unwrap();
            assert_eq!(record.precedence, 14, "{name}");
            assert!(!record.left_to_right, "{name}");
        }
    }
}
