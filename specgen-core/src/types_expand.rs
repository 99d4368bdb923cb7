//! Type-family expansion
//!
//! Derives the vector, matrix and buffer type families from a scalar base
//! set. The scalar names themselves come from the types extractor; the
//! combinatorics live here so they can be tested against exact counts.

use std::collections::HashSet;

use crate::record::TypeRecord;

/// Scalar names that never act as vector/matrix/buffer element types: the
/// string type and the qualifier-only pseudo-scalars.
const EXCLUDED_BASES: [&str; 3] = ["string", "snorm float", "unorm float"];

/// Filter a scalar name list down to the bases eligible for expansion.
pub fn eligible_bases(scalar_names: &[String]) -> Vec<&str> {
    scalar_names
        .iter()
        .map(String::as_str)
        .filter(|name| !EXCLUDED_BASES.contains(name))
        .collect()
}

/// Expand vector forms for every base: the concrete `base1..base4` short
/// forms, the `vector<base, 1..4>` generic forms, and a `vector<base>`
/// default (4 components) — plus one global bare `vector` record.
pub fn expand_vectors(bases: &[&str]) -> Vec<TypeRecord> {
    let mut out = Vec::new();
    for base in bases {
        for n in 1..=4 {
            out.push(TypeRecord::new(
                format!("{base}{n}"),
                format!("{n}-component vector of {base}"),
            ));
            out.push(TypeRecord::new(
                format!("vector<{base}, {n}>"),
                format!("{n}-component vector of {base} (generic form)"),
            ));
        }
        out.push(TypeRecord::new(
            format!("vector<{base}>"),
            format!("defaults to 4-component vector of {base}"),
        ));
    }
    out.push(TypeRecord::new(
        "vector",
        "defaults to 4-component vector of float",
    ));
    out
}

/// Expand matrix forms for every base: all 16 concrete `baseRxC` short
/// forms, all 16 `matrix<base, R, C>` generic forms, a `matrix<base, 1>`
/// 1-row default and a `matrix<base>` square 4x4 default — plus one global
/// bare `matrix` record.
pub fn expand_matrices(bases: &[&str]) -> Vec<TypeRecord> {
    let mut out = Vec::new();
    for base in bases {
        for rows in 1..=4 {
            for cols in 1..=4 {
                out.push(TypeRecord::new(
                    format!("{base}{rows}x{cols}"),
                    format!("{rows}x{cols} matrix of {base}"),
                ));
                out.push(TypeRecord::new(
                    format!("matrix<{base}, {rows}, {cols}>"),
                    format!("{rows}x{cols} matrix of {base} (generic form)"),
                ));
            }
        }
        out.push(TypeRecord::new(
            format!("matrix<{base}, 1>"),
            format!("defaults to 1x4 matrix of {base}"),
        ));
        out.push(TypeRecord::new(
            format!("matrix<{base}>"),
            format!("defaults to 4x4 matrix of {base}"),
        ));
    }
    out.push(TypeRecord::new(
        "matrix",
        "defaults to 4x4 matrix of float",
    ));
    out
}

/// A payload name is concrete when it is a short form: not the bare
/// `vector`/`matrix` record and not a parameterized `<...>` form.
fn is_concrete(name: &str) -> bool {
    name != "vector" && name != "matrix" && !name.contains('<')
}

/// Expand read-only buffer types over every payload: the eligible scalars
/// plus every concrete vector and matrix name, deduplicated while
/// preserving order.
pub fn expand_buffers(
    bases: &[&str],
    vectors: &[TypeRecord],
    matrices: &[TypeRecord],
) -> Vec<TypeRecord> {
    let concrete_names = vectors
        .iter()
        .chain(matrices.iter())
        .map(|record| record.name.as_str())
        .filter(|name| is_concrete(name));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut payloads: Vec<&str> = Vec::new();
    for name in bases.iter().copied().chain(concrete_names) {
        if seen.insert(name) {
            payloads.push(name);
        }
    }

    payloads
        .into_iter()
        .map(|payload| {
            TypeRecord::new(
                format!("Buffer<{payload}>"),
                format!("read-only buffer of {payload}"),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float_base() -> Vec<String> {
        vec!["float".to_string()]
    }

    #[test]
    fn excludes_string_and_qualifier_pseudo_scalars() {
        let scalars = vec![
            "float".to_string(),
            "string".to_string(),
            "snorm float".to_string(),
            "unorm float".to_string(),
            "int".to_string(),
        ];
        assert_eq!(eligible_bases(&scalars), vec!["float", "int"]);
    }

    #[test]
    fn vector_expansion_for_float_matches_expected_set() {
        let scalars = float_base();
        let records = expand_vectors(&eligible_bases(&scalars));

        // 4 concrete + 4 generic + 1 default generic + 1 global bare vector
        assert_eq!(records.len(), 10);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        for concrete in ["float1", "float2", "float3", "float4"] {
            assert!(names.contains(&concrete), "missing {concrete}");
        }
        for generic in [
            "vector<float, 1>",
            "vector<float, 2>",
            "vector<float, 3>",
            "vector<float, 4>",
            "vector<float>",
        ] {
            assert!(names.contains(&generic), "missing {generic}");
        }
        assert!(names.contains(&"vector"));
    }

    #[test]
    fn vector_descriptions_follow_component_counts() {
        let scalars = float_base();
        let records = expand_vectors(&eligible_bases(&scalars));
        let float3 = records.iter().find(|r| r.name == "float3").unwrap();
        assert_eq!(float3.description, vec!["3-component vector of float"]);
        let default = records.iter().find(|r| r.name == "vector<float>").unwrap();
        assert_eq!(
            default.description,
            vec!["defaults to 4-component vector of float"]
        );
    }

    #[test]
    fn matrix_expansion_for_float_matches_expected_counts() {
        let scalars = float_base();
        let records = expand_matrices(&eligible_bases(&scalars));

        // 16 concrete + 16 generic + 2 defaults + 1 global bare matrix
        assert_eq!(records.len(), 35);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        let concrete = names
            .iter()
            .filter(|n| !n.contains('<') && **n != "matrix")
            .count();
        assert_eq!(concrete, 16);
        assert!(names.contains(&"float2x3"));
        assert!(names.contains(&"matrix<float, 2, 3>"));
        assert!(names.contains(&"matrix<float, 1>"));
        assert!(names.contains(&"matrix<float>"));
        assert!(names.contains(&"matrix"));
    }

    #[test]
    fn buffer_payloads_are_concrete_forms_only_in_order() {
        let scalars = float_base();
        let bases = eligible_bases(&scalars);
        let vectors = expand_vectors(&bases);
        let matrices = expand_matrices(&bases);
        let buffers = expand_buffers(&bases, &vectors, &matrices);

        // 1 scalar + 4 concrete vectors + 16 concrete matrices
        assert_eq!(buffers.len(), 21);
        assert_eq!(buffers[0].name, "Buffer<float>");
        assert_eq!(buffers[1].name, "Buffer<float1>");
        assert_eq!(
            buffers[0].description,
            vec!["read-only buffer of float"]
        );
        assert!(buffers.iter().all(|r| !r.name.contains("vector")));
        assert!(buffers.iter().all(|r| !r.name.contains("matrix")));
    }

    #[test]
    fn buffer_payload_list_deduplicates_while_preserving_order() {
        let vectors = vec![TypeRecord::new("float2", "dup")];
        let buffers = expand_buffers(&["float", "float"], &vectors, &[]);
        let names: Vec<&str> = buffers.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Buffer<float>", "Buffer<float2>"]);
    }
}
