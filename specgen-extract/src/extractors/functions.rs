//! Intrinsic-function extraction
//!
//! One row per function in the first table of the intrinsics page. Header
//! rows and rows with fewer than two cells are skipped; names and
//! descriptions are whitespace-collapsed and unquoted; the optional third
//! cell carries the minimum shader model in whatever notation the page
//! happens to use and is canonicalized to `major_minor`.

use markup5ever_rcdom::Handle;

use specgen_core::combine::dedup_by_name;
use specgen_core::normalize::{collapse_whitespace, normalize_version_token, strip_wrapping_quotes};
use specgen_core::record::{Category, FunctionRecord};

use crate::dom;
use crate::error::ExtractError;
use crate::extractor::{CategoryRecords, Extractor};
use crate::fetch::DocumentSource;

pub struct FunctionsExtractor {
    url: String,
}

impl FunctionsExtractor {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    fn clean(text: &str) -> String {
        strip_wrapping_quotes(&collapse_whitespace(text))
    }
}

impl Extractor for FunctionsExtractor {
    fn name(&self) -> &str {
        "Functions (MS Learn intrinsics)"
    }

    fn category(&self) -> Category {
        Category::Functions
    }

    fn run(&self, source: &dyn DocumentSource) -> Result<CategoryRecords, ExtractError> {
        let html = source.fetch(&self.url)?;
        let root = dom::parse_html(&html)?;

        let tables = match dom::select_with_class(&root, "div", "content") {
            Some(content) => dom::select(&content, "table"),
            None => Vec::new(),
        };
        let table = tables
            .first()
            .ok_or_else(|| ExtractError::MissingStructure {
                page: self.url.clone(),
                what: "an intrinsics table under the content section".to_string(),
            })?;

        let mut records = Vec::new();
        for row in dom::select(table, "tr") {
            let cells: Vec<Handle> = dom::descendants(&row)
                .into_iter()
                .filter(|node| dom::is_element(node, "td") || dom::is_element(node, "th"))
                .collect();
            if cells.len() < 2 || dom::is_element(&cells[0], "th") {
                continue;
            }

            let name = Self::clean(&dom::text_content(&cells[0]));
            if name.is_empty() {
                continue;
            }
            let description = Self::clean(&dom::text_content(&cells[1]));
            let raw_model = cells
                .get(2)
                .map(|cell| Self::clean(&dom::text_content(cell)))
                .unwrap_or_default();

            records.push(FunctionRecord::intrinsic(
                name,
                description,
                normalize_version_token(&raw_model),
            ));
        }

        if records.is_empty() {
            return Err(ExtractError::EmptyCategory {
                category: "function",
            });
        }
        Ok(CategoryRecords::Functions(dedup_by_name(records)))
    }
}
