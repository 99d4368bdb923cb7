//! # specgen-core
//!
//! The pure core of the HLSL specification generator: the typed record model,
//! text normalizers, record-set combinators, and the combinatorial expansion
//! engines for type families and semantic-variable families.
//!
//! This crate performs no I/O and knows nothing about HTML. Extractors (see
//! `specgen-extract`) parse source documents into plain rows and scalar name
//! lists; everything that turns those into canonical records lives here, so
//! the interesting logic is testable without a network or a DOM.

#![allow(rustdoc::invalid_html_tags)]

pub mod combine;
pub mod normalize;
pub mod record;
pub mod semantics;
pub mod types_expand;
