//! Record-set combinators
//!
//! Generic operations over keyed record collections: order-preserving
//! de-duplication, fill-missing-only union merge, and the two category
//! merge policies the pipeline can run under.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::record::Record;

/// Keep the first record seen for each distinct, non-empty key; drop later
/// duplicates outright (no merging). Records with an empty key are dropped.
/// Input order of first occurrences is preserved.
pub fn dedup_by_name<R: Record>(records: Vec<R>) -> Vec<R> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        let key = record.key();
        if key.is_empty() {
            continue;
        }
        if seen.insert(key.to_string()) {
            out.push(record);
        }
    }
    out
}

/// Union-merge `incoming` into `existing`, keyed by name.
///
/// An incoming record with a new key is inserted as-is. When the key already
/// exists, each empty field on the existing record is filled from the
/// incoming one; populated fields survive every merge, so the first
/// non-empty value for any field wins across runs. The result is sorted by
/// lower-cased name.
pub fn merge_records<R: Record>(existing: Vec<R>, incoming: Vec<R>) -> Vec<R> {
    let mut index: HashMap<String, R> = existing
        .into_iter()
        .filter(|record| !record.key().is_empty())
        .map(|record| (record.key().to_string(), record))
        .collect();

    for record in incoming {
        if record.key().is_empty() {
            continue;
        }
        match index.entry(record.key().to_string()) {
            Entry::Occupied(mut slot) => slot.get_mut().fill_missing_from(&record),
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
        }
    }

    let mut merged: Vec<R> = index.into_values().collect();
    merged.sort_by_key(|record| record.key().to_lowercase());
    merged
}

/// How an extractor's fresh output lands in its aggregate category.
///
/// The two policies behave very differently across repeated runs: `Replace`
/// discards the category's history on every run, while `FoldMerge`
/// accumulates fields forever and only ever fills gaps. They are kept as
/// distinct named strategies and selected explicitly per invocation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Replace the category's prior list with the fresh output.
    Replace,
    /// Fold the fresh output into the prior list via [`merge_records`].
    FoldMerge,
}

impl MergeStrategy {
    pub fn apply<R: Record>(&self, category: &mut Vec<R>, fresh: Vec<R>) {
        match self {
            MergeStrategy::Replace => *category = fresh,
            MergeStrategy::FoldMerge => {
                let existing = std::mem::take(category);
                *category = merge_records(existing, fresh);
            }
        }
    }
}
