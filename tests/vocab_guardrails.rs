//! Guardrails over the registry vocabulary.
//!
//! These tests keep the namespace/kind tables internally consistent as operations are added:
//! no colliding spellings, no unbound canonical names, no kind without a resolvable entry.

use std::collections::BTreeSet;

use kindred::prelude::*;
use kindred_core::kind::KINDS;

#[test]
fn namespace_spellings_do_not_collide() {
    let registry = Registry::standard();
    let mut seen = BTreeSet::new();
    for namespace in registry.namespaces() {
        for spelling in std::iter::once(namespace.canonical).chain(namespace.aliases.iter().copied())
        {
            assert!(
                seen.insert(spelling),
                "namespace spelling `{spelling}` registered twice"
            );
        }
    }
}

#[test]
fn op_spellings_are_unique_within_each_namespace() {
    for namespace in Registry::standard().namespaces() {
        let mut seen = BTreeSet::new();
        for op in namespace.ops {
            for spelling in std::iter::once(op.canonical).chain(op.aliases.iter().copied()) {
                assert!(
                    seen.insert(spelling),
                    "operation spelling `{}` registered twice in `{}`",
                    spelling,
                    namespace.canonical
                );
            }
        }
    }
}

#[test]
fn every_namespace_is_resolvable_by_every_spelling() {
    let registry = Registry::standard();
    for namespace in registry.namespaces() {
        for spelling in std::iter::once(namespace.canonical).chain(namespace.aliases.iter().copied())
        {
            let resolved = registry
                .namespace(spelling)
                .unwrap_or_else(|| panic!("spelling `{spelling}` does not resolve"));
            assert!(std::ptr::eq(resolved, namespace));
        }
    }
}

#[test]
fn kind_vocabulary_round_trips() {
    for entry in KINDS {
        assert_eq!(kindred_core::kind::from_str(entry.canonical), Some(entry.id));
        assert_eq!(kindred_core::kind::as_str(entry.id), entry.canonical);
        assert!(!entry.description.is_empty());
    }
}

#[test]
fn kind_spellings_do_not_collide() {
    let mut seen = BTreeSet::new();
    for entry in KINDS {
        for spelling in std::iter::once(entry.canonical).chain(entry.aliases.iter().copied()) {
            assert!(
                seen.insert(spelling),
                "kind spelling `{spelling}` registered twice"
            );
        }
    }
}

#[test]
fn standard_bindings_cover_exactly_the_documented_kinds() {
    let registry = Registry::standard();
    let bound: BTreeSet<String> = registry
        .bindings()
        .map(|(kind, _)| kind.to_string())
        .collect();
    let expected: BTreeSet<String> = ["array", "boolean", "date", "number", "object", "regexp", "string"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(bound, expected);
}

#[test]
fn every_op_has_a_description() {
    for namespace in Registry::standard().namespaces() {
        assert!(!namespace.description.is_empty());
        for op in namespace.ops {
            assert!(
                !op.description.is_empty(),
                "`{}::{}` lacks a description",
                namespace.canonical,
                op.canonical
            );
        }
    }
}
