//! Test helpers
//!
//! A fixture-backed [`DocumentSource`] so extractor and pipeline tests run
//! without a network. Ships in the library (not behind `cfg(test)`) because
//! integration tests and downstream crates use it too.

use std::collections::HashMap;

use crate::error::ExtractError;
use crate::fetch::DocumentSource;

/// Maps URLs to canned markup; `fetch` for an unmapped URL fails the way a
/// dead network would.
#[derive(Debug, Default, Clone)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }
}

impl DocumentSource for FixtureSource {
    fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        self.pages.get(url).cloned().ok_or_else(|| {
            ExtractError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no fixture registered for {url}"),
            ))
        })
    }
}
