//! Aggregate persistence
//!
//! The aggregate specification is the only cross-run state. Loading is
//! forgiving: a missing, empty or unparsable file degrades to a fresh
//! aggregate rather than aborting a run that could rebuild everything
//! anyway. Saving is strict and diff-friendly: 2-space indentation and a
//! guaranteed trailing newline.

use std::fs;
use std::path::Path;

use tracing::warn;

use specgen_core::record::Spec;

use crate::error::ExtractError;

/// Load the previous aggregate, or a fresh one if absent or corrupt.
pub fn load_spec(path: &Path) -> Spec {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(_) => return Spec::default(),
    };
    if text.trim().is_empty() {
        return Spec::default();
    }
    match serde_json::from_str(&text) {
        Ok(spec) => spec,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "previous aggregate unparsable, starting fresh");
            Spec::default()
        }
    }
}

/// Persist the aggregate as formatted JSON with a trailing newline.
pub fn save_spec(path: &Path, spec: &Spec) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut text = serde_json::to_string_pretty(spec)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgen_core::record::{KeywordKind, KeywordRecord};

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/spec.json");

        let mut spec = Spec::default();
        spec.keywords
            .push(KeywordRecord::new("discard", KeywordKind::Hlsl));
        save_spec(&path, &spec).unwrap();

        let loaded = load_spec(&path);
        assert_eq!(loaded, spec);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("  \"keywords\""));
    }

    #[test]
    fn missing_empty_or_corrupt_files_degrade_to_fresh() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("nope.json");
        assert_eq!(load_spec(&missing), Spec::default());

        let empty = dir.path().join("empty.json");
        fs::write(&empty, "   \n").unwrap();
        assert_eq!(load_spec(&empty), Spec::default());

        let corrupt = dir.path().join("corrupt.json");
        fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(load_spec(&corrupt), Spec::default());
    }

    #[test]
    fn saving_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        let spec = Spec::default();

        save_spec(&path, &spec).unwrap();
        let first = fs::read(&path).unwrap();
        save_spec(&path, &spec).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }
}
