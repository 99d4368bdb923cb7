//! Extractor seam
//!
//! Every category extractor implements [`Extractor`] and returns its
//! records wrapped in [`CategoryRecords`], so the driver can run a
//! heterogeneous list of extractors and route each output to its aggregate
//! category without knowing any record shapes.

use specgen_core::combine::MergeStrategy;
use specgen_core::record::{
    Category, FunctionRecord, KeywordRecord, OperatorRecord, Spec, TypeRecord, VariableRecord,
};

use crate::error::ExtractError;
use crate::fetch::DocumentSource;

/// Typed output of one extraction pass: one variant per category.
#[derive(Debug, Clone)]
pub enum CategoryRecords {
    Keywords(Vec<KeywordRecord>),
    Types(Vec<TypeRecord>),
    Functions(Vec<FunctionRecord>),
    Operators(Vec<OperatorRecord>),
    Variables(Vec<VariableRecord>),
}

impl CategoryRecords {
    pub fn category(&self) -> Category {
        match self {
            CategoryRecords::Keywords(_) => Category::Keywords,
            CategoryRecords::Types(_) => Category::Types,
            CategoryRecords::Functions(_) => Category::Functions,
            CategoryRecords::Operators(_) => Category::Operators,
            CategoryRecords::Variables(_) => Category::Variables,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CategoryRecords::Keywords(records) => records.len(),
            CategoryRecords::Types(records) => records.len(),
            CategoryRecords::Functions(records) => records.len(),
            CategoryRecords::Operators(records) => records.len(),
            CategoryRecords::Variables(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Land these records in their aggregate category under the given
    /// merge strategy.
    pub fn apply(self, spec: &mut Spec, strategy: MergeStrategy) {
        match self {
            CategoryRecords::Keywords(records) => strategy.apply(&mut spec.keywords, records),
            CategoryRecords::Types(records) => strategy.apply(&mut spec.types, records),
            CategoryRecords::Functions(records) => strategy.apply(&mut spec.functions, records),
            CategoryRecords::Operators(records) => strategy.apply(&mut spec.operators, records),
            CategoryRecords::Variables(records) => strategy.apply(&mut spec.variables, records),
        }
    }
}

/// One extraction pass over one category.
pub trait Extractor {
    /// Human-readable name, shown in per-extractor progress output.
    fn name(&self) -> &str;

    fn category(&self) -> Category;

    fn run(&self, source: &dyn DocumentSource) -> Result<CategoryRecords, ExtractError>;
}
