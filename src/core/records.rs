//! Pure utilities over records (JSON objects)
//!
//! Key-based functions read a missing field as `null`, so records without the
//! field group, deduplicate, and merge together as one key value.

use super::ordered::OrderedMap;
use super::value::{compare_fields, field_key, Record};
use crate::error::{common, Result};
use serde_json::Value;
use std::cmp::Ordering;

/// Stable ascending sort of a copy of `records` by the field `key`
///
/// Records missing the field sort before all others.
pub fn sort_objects_by_key(records: &[Record], key: &str) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_fields(a.get(key), b.get(key)));
    sorted
}

/// Group records by the value of `key`, preserving source order in each group
pub fn group_by_property(records: &[Record], key: &str) -> OrderedMap<Value, Vec<Record>> {
    let mut groups = OrderedMap::new();
    for record in records {
        groups
            .get_or_insert_with(field_key(record, key).clone(), Vec::new)
            .push(record.clone());
    }
    groups
}

/// Record with the greatest value for `key`; the first one wins ties
pub fn find_max_object(records: &[Record], key: &str) -> Result<Record> {
    let (first, rest) = records
        .split_first()
        .ok_or_else(|| common::empty_sequence("findMaxObject"))?;

    let max = rest.iter().fold(first, |max, current| {
        if compare_fields(current.get(key), max.get(key)) == Ordering::Greater {
            current
        } else {
            max
        }
    });

    Ok(max.clone())
}

/// Merge `second` into `first` by matching `key` values
///
/// A record from `second` is shallow-merged into the first already-merged
/// record with the same key value, its fields overriding; unmatched records
/// are appended. Existing fields keep their position.
pub fn merge_arrays_by_key(first: &[Record], second: &[Record], key: &str) -> Vec<Record> {
    let mut merged = first.to_vec();

    for incoming in second {
        let incoming_key = field_key(incoming, key);
        match merged
            .iter()
            .position(|existing| field_key(existing, key) == incoming_key)
        {
            Some(index) => {
                let target = &mut merged[index];
                for (field, value) in incoming {
                    target.insert(field.clone(), value.clone());
                }
            }
            None => merged.push(incoming.clone()),
        }
    }

    merged
}

/// First record for each distinct value of `key`
pub fn remove_duplicates_by_key(records: &[Record], key: &str) -> Vec<Record> {
    let mut seen: Vec<&Value> = Vec::new();
    records
        .iter()
        .filter(|record| {
            let value = field_key(*record, key);
            if seen.contains(&value) {
                false
            } else {
                seen.push(value);
                true
            }
        })
        .cloned()
        .collect()
}

/// Index records by the value of `key`; later records overwrite earlier ones
pub fn array_to_key_value_map(records: &[Record], key: &str) -> OrderedMap<Value, Record> {
    let mut map = OrderedMap::new();
    for record in records {
        map.insert(field_key(record, key).clone(), record.clone());
    }
    map
}

/// Number of records carrying each distinct value of `key`
pub fn count_property_frequency(records: &[Record], key: &str) -> OrderedMap<Value, usize> {
    let mut counts = OrderedMap::new();
    for record in records {
        *counts.get_or_insert_with(field_key(record, key).clone(), || 0) += 1;
    }
    counts
}

/// Records whose fields equal every value in `conditions`
///
/// An empty `conditions` record matches everything.
pub fn filter_objects_by_conditions(records: &[Record], conditions: &Record) -> Vec<Record> {
    records
        .iter()
        .filter(|record| {
            conditions
                .iter()
                .all(|(field, expected)| record.get(field) == Some(expected))
        })
        .cloned()
        .collect()
}

/// Fields of `record` as `(name, value)` pairs in insertion order
pub fn object_to_key_value_array(record: &Record) -> Vec<(String, Value)> {
    record
        .iter()
        .map(|(field, value)| (field.clone(), value.clone()))
        .collect()
}

/// Fully independent copy of JSON data
///
/// `Value` owns all of its nested arrays and objects, so the clone shares no
/// container with the original.
pub fn deep_clone_object(value: &Value) -> Value {
    value.clone()
}
