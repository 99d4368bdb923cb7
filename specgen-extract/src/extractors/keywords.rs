//! Keyword extraction
//!
//! Unions two disjoint sources: the structured keyword list (a `<ul>`
//! anchored to a known heading, comma-separated tokens per item) and the
//! reserved-word prose paragraph (identifier-shaped substring matching).
//! One source yielding nothing does not sink the other; both yielding
//! nothing is fatal.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use specgen_core::combine::dedup_by_name;
use specgen_core::normalize::is_identifier;
use specgen_core::record::{Category, KeywordKind, KeywordRecord};

use crate::dom;
use crate::error::ExtractError;
use crate::extractor::{CategoryRecords, Extractor};
use crate::fetch::DocumentSource;

static IDENT_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").unwrap());

const KEYWORD_LIST_HEADING_ID: &str = "ms--in-this-article";

pub struct KeywordsExtractor {
    keywords_url: String,
    reserved_url: String,
}

impl KeywordsExtractor {
    pub fn new(keywords_url: impl Into<String>, reserved_url: impl Into<String>) -> Self {
        Self {
            keywords_url: keywords_url.into(),
            reserved_url: reserved_url.into(),
        }
    }

    fn extract_keywords(
        &self,
        source: &dyn DocumentSource,
    ) -> Result<Vec<KeywordRecord>, ExtractError> {
        let html = source.fetch(&self.keywords_url)?;
        let root = dom::parse_html(&html)?;

        let heading = dom::find_by_id(&root, "h2", KEYWORD_LIST_HEADING_ID).ok_or_else(|| {
            ExtractError::MissingStructure {
                page: self.keywords_url.clone(),
                what: "keyword list heading".to_string(),
            }
        })?;
        let list = dom::next_matching(&root, &heading, "ul").ok_or_else(|| {
            ExtractError::MissingStructure {
                page: self.keywords_url.clone(),
                what: "a <ul> after the keyword list heading".to_string(),
            }
        })?;

        let mut records = Vec::new();
        for item in dom::direct_children(&list, "li") {
            let text = dom::text_content(&item);
            for token in text.split(',') {
                let token = token.trim();
                if !token.is_empty() && is_identifier(token) {
                    records.push(KeywordRecord::new(token, KeywordKind::Hlsl));
                }
            }
        }
        Ok(records)
    }

    fn extract_reserved(
        &self,
        source: &dyn DocumentSource,
    ) -> Result<Vec<KeywordRecord>, ExtractError> {
        let html = source.fetch(&self.reserved_url)?;
        let root = dom::parse_html(&html)?;

        let content = dom::select_with_class(&root, "div", "column").ok_or_else(|| {
            ExtractError::MissingStructure {
                page: self.reserved_url.clone(),
                what: "the reserved-word content column".to_string(),
            }
        })?;
        let paragraph =
            dom::select(&content, "p")
                .into_iter()
                .next()
                .ok_or_else(|| ExtractError::MissingStructure {
                    page: self.reserved_url.clone(),
                    what: "a paragraph of reserved words".to_string(),
                })?;

        let text = dom::text_content(&paragraph);
        Ok(IDENT_TOKEN
            .find_iter(&text)
            .map(|token| KeywordRecord::new(token.as_str(), KeywordKind::Reserved))
            .collect())
    }
}

impl Extractor for KeywordsExtractor {
    fn name(&self) -> &str {
        "Keywords + Reserved (MS Learn)"
    }

    fn category(&self) -> Category {
        Category::Keywords
    }

    fn run(&self, source: &dyn DocumentSource) -> Result<CategoryRecords, ExtractError> {
        let mut records = Vec::new();

        // a structurally broken page only sinks its own half; retrieval
        // failures stay fatal
        let mut fold = |result: Result<Vec<KeywordRecord>, ExtractError>| match result {
            Ok(mut half) => {
                records.append(&mut half);
                Ok(())
            }
            Err(err) if err.is_structural() => {
                warn!(error = %err, "keyword sub-extraction yielded nothing");
                Ok(())
            }
            Err(err) => Err(err),
        };
        fold(self.extract_keywords(source))?;
        fold(self.extract_reserved(source))?;

        if records.is_empty() {
            return Err(ExtractError::EmptyCategory {
                category: "keyword",
            });
        }
        Ok(CategoryRecords::Keywords(dedup_by_name(records)))
    }
}
