//! Document retrieval
//!
//! [`DocumentSource`] is the seam the extractors consume; production code
//! uses [`CachedFetcher`], tests substitute fixture-backed sources. The
//! fetcher keeps a dumb on-disk cache so repeated runs aren't brittle:
//! a cached copy younger than the TTL short-circuits the network entirely.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::ExtractError;

/// Read-only access to raw markup text by URL.
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}

fn stable_hash_str(value: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Cache file name for a URL: a stable hash, hex-encoded.
pub fn cache_file_name(url: &str) -> String {
    format!("{:016x}.html", stable_hash_str(url))
}

/// Everything the fetcher needs, passed in explicitly at construction.
/// There is deliberately no process-wide cache directory or default.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub cache_dir: PathBuf,
    pub ttl: Duration,
    pub timeout: Duration,
    pub user_agent: String,
    pub use_cache: bool,
}

/// Synchronous HTTP fetcher with an on-disk TTL cache.
pub struct CachedFetcher {
    settings: FetchSettings,
    client: reqwest::blocking::Client,
}

impl CachedFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, ExtractError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { settings, client })
    }

    fn cache_path(&self, url: &str) -> PathBuf {
        self.settings.cache_dir.join(cache_file_name(url))
    }

    /// Returns the cached body if the file exists and is younger than the
    /// TTL. Unreadable metadata counts as stale.
    fn read_fresh(&self, path: &Path) -> Option<String> {
        let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok()?;
        let age = modified.elapsed().ok()?;
        if age < self.settings.ttl {
            fs::read_to_string(path).ok()
        } else {
            None
        }
    }
}

impl DocumentSource for CachedFetcher {
    fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let path = self.cache_path(url);
        if self.settings.use_cache {
            if let Some(body) = self.read_fresh(&path) {
                debug!(url, cache = %path.display(), "cache hit");
                return Ok(body);
            }
        }

        debug!(url, "fetching");
        let body = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;

        fs::create_dir_all(&self.settings.cache_dir)?;
        fs::write(&path, &body)?;
        Ok(body)
    }
}
