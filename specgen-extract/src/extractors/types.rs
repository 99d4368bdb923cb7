//! Type extraction
//!
//! Scalar base types come from list markup on the scalar-types page; the
//! `string` type from its own narrative section; vectors, matrices and
//! buffers are expanded combinatorially from the scalar set by
//! `specgen_core::types_expand`. Without any scalar bases the whole
//! extraction fails: every downstream expansion would be meaningless.

use once_cell::sync::Lazy;
use regex::Regex;

use specgen_core::combine::dedup_by_name;
use specgen_core::record::{Category, TypeRecord};
use specgen_core::types_expand::{eligible_bases, expand_buffers, expand_matrices, expand_vectors};

use crate::dom;
use crate::error::ExtractError;
use crate::extractor::{CategoryRecords, Extractor};
use crate::fetch::DocumentSource;

use markup5ever_rcdom::Handle;

/// Splits a list item into name and description on the first dash,
/// en-dash, em-dash or colon.
static NAME_DESC_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*[-\u{2013}\u{2014}:]\s*").unwrap());

static STRING_TYPE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*String type\s*$").unwrap());

pub struct TypesExtractor {
    scalars_url: String,
}

impl TypesExtractor {
    pub fn new(scalars_url: impl Into<String>) -> Self {
        Self {
            scalars_url: scalars_url.into(),
        }
    }

    fn extract_scalars(&self, root: &Handle) -> Vec<TypeRecord> {
        let content = match dom::select_with_class(root, "div", "content") {
            Some(content) => content,
            None => return Vec::new(),
        };

        let mut records = Vec::new();
        for list in dom::select(&content, "ul") {
            // skip any list that belongs to a "See also" section
            if let Some(heading) = dom::previous_matching(root, &list, "h2") {
                if dom::text_content(&heading).trim().eq_ignore_ascii_case("see also") {
                    continue;
                }
            }

            for item in dom::direct_children(&list, "li") {
                let text = dom::text_content(&item);
                if text.is_empty() {
                    continue;
                }
                let mut parts = NAME_DESC_SEPARATOR.splitn(&text, 2);
                let name = parts.next().unwrap_or("").trim().to_string();
                if name.is_empty() {
                    continue;
                }
                match parts.next().map(str::trim).filter(|desc| !desc.is_empty()) {
                    Some(desc) => records.push(TypeRecord::new(name, desc)),
                    None => records.push(TypeRecord::bare(name)),
                }
            }
        }
        records
    }

    fn extract_string_type(&self, root: &Handle) -> Option<TypeRecord> {
        let heading = dom::find_with_text(root, "h2", &STRING_TYPE_HEADING)?;
        let paragraph = dom::next_matching(root, &heading, "p")?;
        Some(TypeRecord::new("string", dom::text_content(&paragraph)))
    }
}

impl Extractor for TypesExtractor {
    fn name(&self) -> &str {
        "Types (MS Learn scalars + string + vectors + matrices + buffers)"
    }

    fn category(&self) -> Category {
        Category::Types
    }

    fn run(&self, source: &dyn DocumentSource) -> Result<CategoryRecords, ExtractError> {
        let html = source.fetch(&self.scalars_url)?;
        let root = dom::parse_html(&html)?;

        let scalars = self.extract_scalars(&root);
        if scalars.is_empty() {
            return Err(ExtractError::MissingStructure {
                page: self.scalars_url.clone(),
                what: "scalar type list items under the content section".to_string(),
            });
        }

        // start with the scalars only; expansions work from their names
        let mut records = scalars.clone();
        if let Some(string_type) = self.extract_string_type(&root) {
            records.push(string_type);
        }

        let scalar_names: Vec<String> = scalars.into_iter().map(|record| record.name).collect();
        let bases = eligible_bases(&scalar_names);

        let vectors = expand_vectors(&bases);
        let matrices = expand_matrices(&bases);
        let buffers = expand_buffers(&bases, &vectors, &matrices);

        records.extend(vectors);
        records.extend(matrices);
        records.extend(buffers);

        // generic placeholders for the parameterized forms
        records.push(TypeRecord::new("vector<Type, Components>", "generic vector"));
        records.push(TypeRecord::new("matrix<Type, Rows, Cols>", "generic matrix"));

        Ok(CategoryRecords::Types(dedup_by_name(records)))
    }
}
