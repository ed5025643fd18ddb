//! Property-based tests for webidl-dts-gen
//!
//! These tests use proptest to verify invariants across many randomly
//! generated documents, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use std::collections::HashSet;
use webidl_dts_gen::{ConvertOptions, convert};

// =============================================================================
// Strategies
// =============================================================================

/// Identifiers that are never WebIDL keywords or builtin type names.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}".prop_map(|s| format!("X{}", s))
}

fn member_ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}".prop_map(|s| format!("m{}", s))
}

fn builtin_type_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("long", "number"),
        ("unsigned long", "number"),
        ("unsigned long long", "number"),
        ("double", "number"),
        ("DOMString", "string"),
        ("boolean", "boolean"),
        ("any", "any"),
    ])
}

/// Enums over a small shared pool of member names, so duplicates across enums are common.
fn enums_strategy() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    let member = prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "epsilon"]);
    let members = prop::collection::vec((prop::bool::ANY, member), 1..5).prop_map(|ms| {
        ms.into_iter()
            .map(|(namespaced, m)| if namespaced { format!("ns::{}", m) } else { m.to_string() })
            .collect::<Vec<_>>()
    });
    prop::collection::vec((ident_strategy(), members), 1..5).prop_filter("enum names must be unique", |enums| {
        enums.iter().map(|(name, _)| name).collect::<HashSet<_>>().len() == enums.len()
    })
}

fn render_enums(enums: &[(String, Vec<String>)]) -> String {
    enums
        .iter()
        .map(|(name, values)| {
            let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
            format!("enum {} {{ {} }};", name, quoted.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: conversion is a pure function of its input
    #[test]
    fn conversion_is_deterministic(enums in enums_strategy(), emscripten in prop::bool::ANY) {
        let idl = render_enums(&enums);
        let options = ConvertOptions::new().with_emscripten(emscripten);
        let first = convert(&idl, options).expect("conversion failed");
        let second = convert(&idl, options).expect("conversion failed");
        prop_assert_eq!(first, second);
    }

    /// Property: each bare enum identifier gets exactly one module constant
    #[test]
    fn enum_constants_are_declared_once(enums in enums_strategy()) {
        let idl = render_enums(&enums);
        let ts = convert(&idl, ConvertOptions::new().with_emscripten(true)).expect("conversion failed");

        let expected: HashSet<&str> = enums
            .iter()
            .flat_map(|(_, values)| values.iter())
            .map(|v| v.rsplit("::").next().unwrap_or(v))
            .collect();

        let constants: Vec<&str> = ts
            .lines()
            .filter_map(|l| l.strip_prefix("    const "))
            .filter_map(|l| l.strip_suffix(": unknown;"))
            .collect();
        let unique: HashSet<&str> = constants.iter().copied().collect();

        prop_assert_eq!(constants.len(), unique.len(), "duplicate constant in:\n{}", ts);
        prop_assert_eq!(unique, expected);
    }

    /// Property: every enum gets its alias and one accessor per member
    #[test]
    fn every_enum_gets_alias_and_accessors(enums in enums_strategy()) {
        let idl = render_enums(&enums);
        let ts = convert(&idl, ConvertOptions::new().with_emscripten(true)).expect("conversion failed");

        for (name, values) in &enums {
            let alias_prefix = format!("    type {} = ", name);
            prop_assert!(ts.lines().any(|l| l.starts_with(&alias_prefix)));
            let accessors = ts
                .lines()
                .filter(|l| l.starts_with(&format!("    function _emscripten_enum_{}_", name)))
                .count();
            prop_assert_eq!(accessors, values.len());
        }
    }

    /// Property: definitions are emitted in source order
    #[test]
    fn definitions_keep_source_order(names in prop::collection::hash_set(ident_strategy(), 1..6)) {
        let names: Vec<String> = names.into_iter().collect();
        let idl = names
            .iter()
            .map(|n| format!("interface {} {{\n}};", n))
            .collect::<Vec<_>>()
            .join("\n");
        let ts = convert(&idl, ConvertOptions::default()).expect("conversion failed");
        let emitted: Vec<&str> = ts
            .lines()
            .filter_map(|l| l.strip_prefix("interface "))
            .filter_map(|l| l.strip_suffix(" {"))
            .collect();
        prop_assert_eq!(emitted, names.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Property: nullable attributes always render `T | null`
    #[test]
    fn nullable_attributes_render_null_last(
        owner in ident_strategy(),
        attr in member_ident_strategy(),
        (idl_ty, ts_ty) in builtin_type_strategy(),
    ) {
        let idl = format!("interface {} {{\n    attribute {}? {};\n}};", owner, idl_ty, attr);
        let ts = convert(&idl, ConvertOptions::default()).expect("conversion failed");
        prop_assert_eq!(ts, format!("interface {} {{\n    {}: {} | null;\n}}", owner, attr, ts_ty));
    }

    /// Property: arbitrary input never panics; it converts or returns an error
    #[test]
    fn arbitrary_input_does_not_panic(input in "\\PC{0,200}") {
        let _ = convert(&input, ConvertOptions::default());
    }
}
