//! Property-based tests for the round-trip guarantees.
//!
//! Generated inputs are restricted to values the format can represent
//! faithfully: no trailing whitespace (trimmed on parse), no trailing
//! backslash (read as a continuation marker) and no full quote wrapping
//! (stripped on parse). Leading whitespace is fine, escaping protects it.

use proptest::prelude::*;
use propfile::{from_str, Properties, RenderOptions};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}(\\.[a-z][a-z0-9]{0,7}){0,2}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,2}[a-zA-Z0-9_:/-]{1,10}( [a-zA-Z0-9_:/-]{1,10}){0,2}"
}

proptest! {
    #[test]
    fn prop_put_then_parse_preserves_values(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 0..16)
    ) {
        let mut props = Properties::new();
        for (key, value) in &entries {
            props.put(key, value);
        }

        let parsed = from_str(&props.to_string()).unwrap();
        prop_assert_eq!(parsed.len(), entries.len());
        for (key, value) in &entries {
            prop_assert_eq!(parsed.get(key), value.as_str());
        }
    }

    #[test]
    fn prop_render_parse_render_is_identity(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..12)
    ) {
        let mut props = Properties::new();
        for (key, value) in &entries {
            props.put(key, value);
        }

        let first = props.to_string();
        let second = from_str(&first).unwrap().to_string();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_untouched_document_roundtrips_bytewise(
        values in prop::collection::vec(value_strategy(), 1..10),
        comment in "[a-zA-Z0-9 ]{0,20}",
    ) {
        let mut input = format!("# {comment}\n\n");
        for (i, value) in values.iter().enumerate() {
            input.push_str(&format!("key{i} = {value}\n"));
        }

        let props = from_str(&input).unwrap();
        prop_assert_eq!(props.to_string(), input);
    }

    #[test]
    fn prop_pretty_print_is_idempotent(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..12)
    ) {
        let mut props = Properties::new();
        for (key, value) in &entries {
            props.put(key, value);
        }

        let first = props.render(&RenderOptions::pretty());
        let second = from_str(&first).unwrap().render(&RenderOptions::pretty());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_remove_hides_exactly_one_key(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 2..10)
    ) {
        let mut props = Properties::new();
        for (key, value) in &entries {
            props.put(key, value);
        }

        let victim = entries.keys().next().unwrap().clone();
        props.remove(&victim);

        let parsed = from_str(&props.to_string()).unwrap();
        prop_assert!(!parsed.has_key(&victim));
        for (key, value) in &entries {
            if key != &victim {
                prop_assert_eq!(parsed.get(key), value.as_str());
            }
        }
    }

    #[test]
    fn prop_blocks_and_flat_keys_agree(
        segments in prop::collection::vec("[a-z]{1,6}", 1..4),
        value in "[a-z0-9]{1,8}",
    ) {
        // Build `a\n{\nb\n{\nkey = v\n}\n}\n` and the flat `a.b.key = v`.
        let mut nested = String::new();
        for segment in &segments {
            nested.push_str(segment);
            nested.push_str("\n{\n");
        }
        nested.push_str(&format!("key = {value}\n"));
        for _ in &segments {
            nested.push_str("}\n");
        }

        let qualified = format!("{}.key", segments.join("."));
        let flat = format!("{qualified} = {value}\n");

        let from_nested = from_str(&nested).unwrap();
        let from_flat = from_str(&flat).unwrap();
        prop_assert_eq!(from_nested.get(&qualified), value.as_str());
        prop_assert_eq!(from_nested.get(&qualified), from_flat.get(&qualified));
    }
}
