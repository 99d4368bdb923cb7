//! Record model
//!
//! One typed record struct per category, plus the `Spec` aggregate that maps
//! each category to its record list. The serialized field order matches the
//! persisted JSON artifact, so the structs double as the wire format.

use serde::{Deserialize, Serialize};

/// Comment stored in a freshly created aggregate.
pub const PROVENANCE_COMMENT: &str = "generated from Microsoft Learn";

/// Common behavior every category record exposes to the combinators.
///
/// `key` is the record's `name`; uniqueness within a category is enforced by
/// the combinators, not by the extractors that produce the records.
pub trait Record {
    fn key(&self) -> &str;

    /// Copy fields from `other` into `self`, but only where `self` currently
    /// holds an empty value. Populated fields are never overwritten.
    fn fill_missing_from(&mut self, other: &Self);
}

fn fill_string(target: &mut String, source: &str) {
    if target.is_empty() && !source.is_empty() {
        *target = source.to_string();
    }
}

fn fill_seq(target: &mut Vec<String>, source: &[String]) {
    if target.is_empty() && !source.is_empty() {
        *target = source.to_vec();
    }
}

/// Whether a keyword is part of the language or merely reserved for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    Hlsl,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub name: String,
    pub kind: KeywordKind,
}

impl KeywordRecord {
    pub fn new(name: impl Into<String>, kind: KeywordKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl Record for KeywordRecord {
    fn key(&self) -> &str {
        &self.name
    }

    fn fill_missing_from(&mut self, _other: &Self) {
        // kind is always populated; nothing to fill
    }
}

/// Operator position relative to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Prefix,
    Postfix,
    Infix,
}

/// One operator at one precedence level. Lower precedence binds tighter.
///
/// The same token text can appear at several precedence levels (`+` is both
/// prefix-unary and infix-additive); the combinators key on `name` alone, so
/// later entries for a reused token collapse into the first one seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorRecord {
    pub name: String,
    pub precedence: u32,
    pub left_to_right: bool,
    pub kind: OperatorKind,
}

impl Record for OperatorRecord {
    fn key(&self) -> &str {
        &self.name
    }

    fn fill_missing_from(&mut self, _other: &Self) {
        // precedence, associativity and kind are always populated
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub description: Vec<String>,
}

impl TypeRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: vec![description.into()],
        }
    }

    /// A record with no description lines at all.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Vec::new(),
        }
    }
}

impl Record for TypeRecord {
    fn key(&self) -> &str {
        &self.name
    }

    fn fill_missing_from(&mut self, other: &Self) {
        fill_seq(&mut self.description, &other.description);
    }
}

/// An intrinsic function. `return_type` and `parameters` are carried in the
/// serialized shape but are not populated at this stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub min_shader_model: String,
    pub return_type: String,
    pub parameters: Vec<String>,
}

impl FunctionRecord {
    pub fn intrinsic(
        name: impl Into<String>,
        description: impl Into<String>,
        min_shader_model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: "intrinsic".to_string(),
            description: description.into(),
            min_shader_model: min_shader_model.into(),
            return_type: String::new(),
            parameters: Vec::new(),
        }
    }
}

impl Record for FunctionRecord {
    fn key(&self) -> &str {
        &self.name
    }

    fn fill_missing_from(&mut self, other: &Self) {
        fill_string(&mut self.kind, &other.kind);
        fill_string(&mut self.description, &other.description);
        fill_string(&mut self.min_shader_model, &other.min_shader_model);
        fill_string(&mut self.return_type, &other.return_type);
        fill_seq(&mut self.parameters, &other.parameters);
    }
}

/// A semantic variable with the stage-role tags accumulated across tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub modifiers: Vec<String>,
    pub description: String,
}

impl Record for VariableRecord {
    fn key(&self) -> &str {
        &self.name
    }

    fn fill_missing_from(&mut self, other: &Self) {
        fill_string(&mut self.ty, &other.ty);
        fill_seq(&mut self.modifiers, &other.modifiers);
        fill_string(&mut self.description, &other.description);
    }
}

/// The closed set of categories an extractor can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Keywords,
    Types,
    Functions,
    Operators,
    Variables,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keywords => "keywords",
            Category::Types => "types",
            Category::Functions => "functions",
            Category::Operators => "operators",
            Category::Variables => "variables",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The aggregate specification: the sole persisted artifact.
///
/// Every record belongs to exactly one category, and the category set is
/// fixed by this struct, so unknown categories cannot be introduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    pub comment: String,
    pub keywords: Vec<KeywordRecord>,
    pub types: Vec<TypeRecord>,
    pub functions: Vec<FunctionRecord>,
    pub operators: Vec<OperatorRecord>,
    pub variables: Vec<VariableRecord>,
}

impl Default for Spec {
    fn default() -> Self {
        Self {
            comment: PROVENANCE_COMMENT.to_string(),
            keywords: Vec::new(),
            types: Vec::new(),
            functions: Vec::new(),
            operators: Vec::new(),
            variables: Vec::new(),
        }
    }
}

impl Spec {
    pub fn len(&self) -> usize {
        self.keywords.len()
            + self.types.len()
            + self.functions.len()
            + self.operators.len()
            + self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
