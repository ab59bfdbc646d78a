/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Helpers for shapes with map members.

use crate::error::DuplicateKeyError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Adds `key` to the map member, creating the map if it is absent.
///
/// An existing entry for `key` is never replaced.
pub(crate) fn insert_unique<V>(
    map: &mut Option<HashMap<String, V>>,
    shape: &'static str,
    member: &'static str,
    key: String,
    value: V,
) -> Result<(), DuplicateKeyError> {
    match map.get_or_insert_with(HashMap::new).entry(key) {
        Entry::Occupied(entry) => {
            tracing::debug!(shape, member, key = %entry.key(), "rejected duplicate map key");
            Err(DuplicateKeyError::new(shape, member, entry.key().clone()))
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

/// Hashes an optional map member independently of its iteration order.
///
/// Absent and empty maps hash differently, matching their `PartialEq`.
pub(crate) fn hash_map<V: Hash, H: Hasher>(map: &Option<HashMap<String, V>>, state: &mut H) {
    match map {
        None => 0u8.hash(state),
        Some(map) => {
            1u8.hash(state);
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            entries.hash(state);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use tracing_test::traced_test;

    fn hash_of(map: &Option<HashMap<String, String>>) -> u64 {
        let mut hasher = DefaultHasher::new();
        hash_map(map, &mut hasher);
        hasher.finish()
    }

    #[test]
    #[traced_test]
    fn duplicate_key_keeps_first_value() {
        let mut map = None;
        insert_unique(&mut map, "AttributePayload", "attributes", "color".into(), "red").unwrap();
        let err = insert_unique(&mut map, "AttributePayload", "attributes", "color".into(), "blue")
            .unwrap_err();
        assert_eq!(err.key(), "color");
        assert_eq!(err.shape(), "AttributePayload");
        assert_eq!(map.unwrap().get("color"), Some(&"red"));
        assert!(logs_contain("rejected duplicate map key"));
    }

    #[test]
    fn first_insert_creates_map() {
        let mut map: Option<HashMap<String, u8>> = None;
        insert_unique(&mut map, "ThingAttribute", "attributes", "k".into(), 1).unwrap();
        assert_eq!(map.map(|m| m.len()), Some(1));
    }

    #[test]
    fn hash_ignores_insertion_order() {
        let mut first = HashMap::new();
        let mut second = HashMap::new();
        for i in 0..32 {
            first.insert(format!("key-{}", i), i.to_string());
        }
        for i in (0..32).rev() {
            second.insert(format!("key-{}", i), i.to_string());
        }
        assert_eq!(hash_of(&Some(first)), hash_of(&Some(second)));
    }

    #[test]
    fn absent_and_empty_hash_differently() {
        assert_ne!(hash_of(&None), hash_of(&Some(HashMap::new())));
    }
}
