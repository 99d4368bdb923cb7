//! # specgen-extract
//!
//! The extraction side of the HLSL specification generator: one extractor
//! per category, the document-retrieval collaborator (HTTP with an on-disk
//! TTL cache), the markup-tree query helpers they share, and the load/save
//! logic for the persisted aggregate.
//!
//! This is a pure library: it powers the `specgen` binary but never prints
//! or exits. Progress reporting and process exit codes belong to the CLI;
//! diagnostics here flow through `tracing` and the error type.
//!
//! Extraction is fully sequential. An extractor receives a
//! [`fetch::DocumentSource`], pulls the pages it needs, parses them into
//! records, and returns a typed [`extractor::CategoryRecords`]. The caller
//! decides how the fresh records land in the aggregate (replace or
//! fold-merge) and when the aggregate is persisted.

pub mod dom;
pub mod error;
pub mod extractor;
pub mod extractors;
pub mod fetch;
pub mod store;
pub mod testing;

pub use error::ExtractError;
pub use extractor::{CategoryRecords, Extractor};
pub use fetch::{CachedFetcher, DocumentSource};
