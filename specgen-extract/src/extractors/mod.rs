//! Category extractors
//!
//! One module per category. Each extractor pulls the pages it needs through
//! the [`DocumentSource`](crate::fetch::DocumentSource) seam, parses the
//! table or list markup into records, and hands normalization and
//! expansion to `specgen-core`.

pub mod functions;
pub mod keywords;
pub mod operators;
pub mod types;
pub mod variables;

pub use functions::FunctionsExtractor;
pub use keywords::KeywordsExtractor;
pub use operators::OperatorsExtractor;
pub use types::TypesExtractor;
pub use variables::VariablesExtractor;
