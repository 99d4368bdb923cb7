//! Semantic-variable accumulation
//!
//! Fuses the per-stage semantic tables into per-name records carrying the
//! union of stage roles, recognizes system-value semantics (which never
//! accumulate roles), and expands `NAME[n]` family placeholders into
//! concrete numbered instances.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::combine::dedup_by_name;
use crate::normalize::family_base;
use crate::record::VariableRecord;

static SYSTEM_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*SV_").unwrap());

/// One table row as the extractor sees it: name, description, optional type.
#[derive(Debug, Clone, Default)]
pub struct SemanticRow {
    pub name: String,
    pub description: String,
    pub ty: String,
}

/// Which shader-stage input/output table a semantic variable was declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageRole {
    VsIn,
    VsOut,
    PsIn,
    PsOut,
}

impl StageRole {
    pub fn tag(&self) -> &'static str {
        match self {
            StageRole::VsIn => "vs_in",
            StageRole::VsOut => "vs_out",
            StageRole::PsIn => "ps_in",
            StageRole::PsOut => "ps_out",
        }
    }
}

/// Whether a name belongs to the system-value exception class.
pub fn is_system_value(name: &str) -> bool {
    SYSTEM_VALUE.is_match(name)
}

#[derive(Debug, Clone, Default)]
struct Accumulated {
    description: String,
    ty: String,
    roles: BTreeSet<&'static str>,
}

impl Accumulated {
    fn fold(&mut self, row: &SemanticRow, role: Option<StageRole>) {
        // first description wins, never overwritten; same for the type
        if self.description.is_empty() {
            self.description = row.description.clone();
        }
        if self.ty.is_empty() && !row.ty.is_empty() {
            self.ty = row.ty.clone();
        }
        if let Some(role) = role {
            self.roles.insert(role.tag());
        }
    }
}

/// Accumulates semantic rows across tables and expands family placeholders.
#[derive(Debug, Default)]
pub struct SemanticAccumulator {
    entries: HashMap<String, Accumulated>,
}

impl SemanticAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a row from one of the four stage tables.
    ///
    /// The role tag is added unless the name is a system value. A family
    /// placeholder row additionally folds the same updates into a record
    /// keyed by the bare base name.
    pub fn fold_stage_row(&mut self, row: &SemanticRow, role: StageRole) {
        if row.name.is_empty() {
            return;
        }
        let role_for = |name: &str| {
            if is_system_value(name) {
                None
            } else {
                Some(role)
            }
        };

        self.entries
            .entry(row.name.clone())
            .or_default()
            .fold(row, role_for(&row.name));

        if let Some(base) = family_base(&row.name) {
            let role = role_for(&base);
            self.entries.entry(base).or_default().fold(row, role);
        }
    }

    /// Fold a row from the system-value table: same description/type fills,
    /// never any role.
    pub fn fold_system_value_row(&mut self, row: &SemanticRow) {
        if row.name.is_empty() {
            return;
        }
        self.entries
            .entry(row.name.clone())
            .or_default()
            .fold(row, None);
    }

    /// Expand every family placeholder into concrete numbered instances over
    /// the inclusive range. Each instance inherits the family's accumulated
    /// description, type and roles as they stand now; concrete instances
    /// already present are left untouched. Families are visited in sorted
    /// key order so the expansion is deterministic.
    pub fn expand_families(&mut self, lo: u32, hi: u32) {
        let mut family_keys: Vec<String> = self
            .entries
            .keys()
            .filter(|key| family_base(key).is_some())
            .cloned()
            .collect();
        family_keys.sort();

        for key in family_keys {
            let base = match family_base(&key) {
                Some(base) => base,
                None => continue,
            };
            let template = self.entries[&key].clone();
            for i in lo..=hi {
                self.entries
                    .entry(format!("{base}{i}"))
                    .or_insert_with(|| template.clone());
            }
        }
    }

    /// Flatten role sets to sorted tag sequences and produce the final
    /// record list, sorted by lower-cased name and deduplicated.
    pub fn finish(self) -> Vec<VariableRecord> {
        let mut records: Vec<VariableRecord> = self
            .entries
            .into_iter()
            .map(|(name, entry)| VariableRecord {
                name,
                ty: entry.ty,
                modifiers: entry.roles.iter().map(|tag| tag.to_string()).collect(),
                description: entry.description,
            })
            .collect();
        records.sort_by_key(|record| record.name.to_lowercase());
        dedup_by_name(records)
    }
}
