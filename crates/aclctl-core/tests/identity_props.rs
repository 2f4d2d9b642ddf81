// Rust guideline compliant 2026-10-17

//! Property-based tests for prefix resolution.
//!
//! These tests validate universal properties of resolving partial
//! identifiers against an identifier universe.

use aclctl_core::identity::{resolve_in, resolve_prefix};
use aclctl_core::{BoxError, Error, ResourceKind};
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Generates arbitrary UUID-shaped identifiers.
fn arb_uuid() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}").unwrap()
}

/// Generates small universes of distinct identifiers.
fn arb_universe() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_uuid(), 1..12).prop_map(|set| set.into_iter().collect())
}

/// Generates short hex prefixes, likely to collide in small universes.
fn arb_prefix() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-f]{1,3}").unwrap()
}

fn matching(universe: &[String], prefix: &str) -> BTreeSet<String> {
    universe
        .iter()
        .filter(|id| id.starts_with(prefix))
        .cloned()
        .collect()
}

proptest! {
    /// A prefix shared by exactly one identifier resolves to it.
    #[test]
    fn test_unique_prefix_resolves(universe in arb_universe(), index in any::<prop::sample::Index>(), len in 1usize..=36) {
        let target = &universe[index.index(universe.len())];
        let prefix = &target[..len];
        let expected = matching(&universe, prefix);

        let resolved = resolve_in(ResourceKind::Policy, prefix, &universe);
        if expected.len() == 1 {
            prop_assert_eq!(resolved.unwrap(), target.clone());
        } else if universe.contains(&prefix.to_string()) {
            prop_assert_eq!(resolved.unwrap(), prefix.to_string());
        } else {
            let is_ambiguous = matches!(resolved, Err(Error::AmbiguousPrefix { .. }));
            prop_assert!(is_ambiguous);
        }
    }

    /// Resolution outcome agrees with a direct count of matching identifiers.
    #[test]
    fn test_resolution_matches_count(universe in arb_universe(), prefix in arb_prefix()) {
        let expected = matching(&universe, &prefix);

        match resolve_in(ResourceKind::Policy, &prefix, &universe) {
            Ok(id) => {
                prop_assert_eq!(expected.len(), 1);
                prop_assert!(expected.contains(&id));
            }
            Err(Error::NotFound { prefix: reported, .. }) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(reported, prefix);
            }
            Err(Error::AmbiguousPrefix { matches, .. }) => {
                prop_assert!(expected.len() >= 2);
                prop_assert_eq!(matches.len(), expected.len());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// A successful resolution is always an element of the universe.
    #[test]
    fn test_result_is_member_of_universe(universe in arb_universe(), prefix in arb_prefix()) {
        if let Ok(id) = resolve_in(ResourceKind::Policy, &prefix, &universe) {
            prop_assert!(universe.contains(&id));
            prop_assert!(id.starts_with(&prefix));
        }
    }

    /// Resolving twice against a frozen universe yields the same outcome.
    #[test]
    fn test_resolution_is_idempotent(universe in arb_universe(), prefix in arb_prefix()) {
        let first = resolve_in(ResourceKind::Policy, &prefix, &universe).map_err(|e| e.to_string());
        let second = resolve_in(ResourceKind::Policy, &prefix, &universe).map_err(|e| e.to_string());
        prop_assert_eq!(first, second);
    }

    /// An identifier present in the universe wins over longer identifiers it prefixes.
    #[test]
    fn test_exact_match_precedence(short in "[a-z]{1,6}", suffixes in prop::collection::vec("[a-z0-9]{1,4}", 1..5)) {
        let mut universe: Vec<String> = suffixes.iter().map(|s| format!("{}{}", short, s)).collect();
        universe.push(short.clone());

        prop_assert_eq!(resolve_in(ResourceKind::Role, &short, &universe).unwrap(), short);
    }

    /// The universe is fetched exactly once through the lister.
    #[test]
    fn test_lister_called_once(universe in arb_universe(), prefix in arb_prefix()) {
        let calls = std::cell::Cell::new(0);
        let lister = |_kind: ResourceKind| -> Result<Vec<String>, BoxError> {
            calls.set(calls.get() + 1);
            Ok(universe.clone())
        };

        let _ = resolve_prefix(ResourceKind::Policy, &prefix, &lister);
        prop_assert_eq!(calls.get(), 1);
    }
}
