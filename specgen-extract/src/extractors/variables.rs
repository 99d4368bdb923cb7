//! Semantic-variable extraction
//!
//! The semantics page carries five tables: vertex-shader input/output,
//! pixel-shader input/output, and system-value semantics. The first four
//! contribute stage-role tags; the fifth never does. Family placeholder
//! rows like `COLOR[n]` expand into concrete numbered instances over a
//! configured inclusive range. All of the accumulation logic lives in
//! `specgen_core::semantics`; this module only locates tables and rows.

use markup5ever_rcdom::Handle;

use specgen_core::record::Category;
use specgen_core::semantics::{SemanticAccumulator, SemanticRow, StageRole};

use crate::dom;
use crate::error::ExtractError;
use crate::extractor::{CategoryRecords, Extractor};
use crate::fetch::DocumentSource;

const STAGE_ROLES: [StageRole; 4] = [
    StageRole::VsIn,
    StageRole::VsOut,
    StageRole::PsIn,
    StageRole::PsOut,
];

pub struct VariablesExtractor {
    url: String,
    expand_lo: u32,
    expand_hi: u32,
}

impl VariablesExtractor {
    /// `expand_lo..=expand_hi` is the numeric range family placeholders
    /// expand over.
    pub fn new(url: impl Into<String>, expand_lo: u32, expand_hi: u32) -> Self {
        Self {
            url: url.into(),
            expand_lo,
            expand_hi,
        }
    }

    fn rows(table: &Handle) -> Vec<SemanticRow> {
        let mut rows = Vec::new();
        for row in dom::select(table, "tr") {
            let cells: Vec<Handle> = dom::descendants(&row)
                .into_iter()
                .filter(|node| dom::is_element(node, "td") || dom::is_element(node, "th"))
                .collect();
            if cells.len() < 2 {
                continue;
            }
            rows.push(SemanticRow {
                name: dom::text_content(&cells[0]),
                description: dom::text_content(&cells[1]),
                ty: cells.get(2).map(dom::text_content).unwrap_or_default(),
            });
        }
        rows
    }
}

impl Extractor for VariablesExtractor {
    fn name(&self) -> &str {
        "Variables (MS Learn semantics tables: VS/PS + SV)"
    }

    fn category(&self) -> Category {
        Category::Variables
    }

    fn run(&self, source: &dyn DocumentSource) -> Result<CategoryRecords, ExtractError> {
        let html = source.fetch(&self.url)?;
        let root = dom::parse_html(&html)?;

        let tables = match dom::select_with_class(&root, "div", "content") {
            Some(content) => dom::select(&content, "table"),
            None => Vec::new(),
        };
        if tables.len() < 5 {
            return Err(ExtractError::MissingStructure {
                page: self.url.clone(),
                what: "at least 5 semantic tables (VS in/out, PS in/out, SV)".to_string(),
            });
        }

        let mut accumulator = SemanticAccumulator::new();
        for (table, role) in tables.iter().zip(STAGE_ROLES) {
            for row in Self::rows(table) {
                accumulator.fold_stage_row(&row, role);
            }
        }
        for row in Self::rows(&tables[4]) {
            accumulator.fold_system_value_row(&row);
        }

        accumulator.expand_families(self.expand_lo, self.expand_hi);
        let records = accumulator.finish();
        if records.is_empty() {
            return Err(ExtractError::EmptyCategory {
                category: "variable",
            });
        }
        Ok(CategoryRecords::Variables(records))
    }
}
