//! Pure utilities over sequences
//!
//! Every function borrows its input and returns a fresh `Vec`, so callers keep
//! their data untouched. Equality is by value (`PartialEq`).

use super::ordered::OrderedMap;
use crate::error::{common, ArraylabError, ErrorCode, Result};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Second-largest distinct value
///
/// # Errors
///
/// `InsufficientData` when fewer than two distinct values exist, and
/// `InvalidArgument` when the input contains NaN.
pub fn second_largest_number(numbers: &[f64]) -> Result<f64> {
    if numbers.iter().any(|n| n.is_nan()) {
        return Err(ArraylabError::invalid_argument_with_code(
            ErrorCode::INVALID_NUMBER,
            "NaN cannot be ranked",
            Some("numbers".to_string()),
        ));
    }

    let mut distinct = remove_duplicates(numbers);
    distinct.sort_by(|a, b| b.total_cmp(a));

    distinct.get(1).copied().ok_or_else(|| {
        ArraylabError::insufficient_data_with_code(
            ErrorCode::INSUFFICIENT_DISTINCT_VALUES,
            "second largest number needs two distinct values",
            2,
            distinct.len(),
        )
    })
}

/// First occurrence of each distinct value, in original order
pub fn remove_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// Flatten arbitrarily nested JSON arrays, depth-first and left to right
///
/// Uses an explicit stack of iterators so nesting depth is bounded by memory,
/// not by the call stack.
pub fn flatten_array(items: &[Value]) -> Vec<Value> {
    let mut flat = Vec::new();
    let mut stack = vec![items.iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Value::Array(nested)) => stack.push(nested.iter()),
            Some(leaf) => flat.push(leaf.clone()),
            None => {
                stack.pop();
            }
        }
    }

    flat
}

/// Values of `first` that also appear anywhere in `second`
pub fn intersection_of_arrays<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first
        .iter()
        .filter(|item| second.contains(item))
        .cloned()
        .collect()
}

/// Distinct values of `first`, followed by values of `second` not seen yet
pub fn union_of_arrays<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut union = remove_duplicates(first);
    for item in second {
        if !union.contains(item) {
            union.push(item.clone());
        }
    }
    union
}

/// Ascending bubble sort of a copy of `items`
pub fn bubble_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    bubble_sort_by(items, |a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

/// Bubble sort with a custom comparison
///
/// Only adjacent elements comparing `Greater` are swapped, so equal elements
/// keep their relative order. Each pass stops at the last swap of the previous
/// one, and a pass without swaps ends the sort.
pub fn bubble_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    let mut unsorted_len = sorted.len();

    while unsorted_len > 1 {
        let mut last_swap = 0;
        for j in 0..unsorted_len - 1 {
            if compare(&sorted[j], &sorted[j + 1]) == Ordering::Greater {
                sorted.swap(j, j + 1);
                last_swap = j + 1;
            }
        }
        unsorted_len = last_swap;
    }

    sorted
}

/// Split into consecutive chunks of `size`; the last chunk may be shorter
pub fn chunk_array<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(ArraylabError::invalid_argument_with_code(
            ErrorCode::INVALID_CHUNK_SIZE,
            "chunk size must be positive",
            Some("size".to_string()),
        ));
    }

    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Value with the highest occurrence count
///
/// Ties go to the value encountered first.
pub fn most_frequent_element<T: PartialEq + Clone>(items: &[T]) -> Result<T> {
    let mut counts: OrderedMap<&T, usize> = OrderedMap::new();
    for item in items {
        *counts.get_or_insert_with(item, || 0) += 1;
    }

    let mut best: Option<(&T, usize)> = None;
    for (item, count) in counts.iter() {
        if best.map_or(true, |(_, top)| *count > top) {
            best = Some((*item, *count));
        }
    }

    best.map(|(item, _)| item.clone())
        .ok_or_else(|| common::empty_sequence("mostFrequentElement"))
}

/// Rotate right by `k` positions
///
/// `k` is reduced modulo the length, so negative values rotate left.
pub fn rotate_array<T: Clone>(items: &[T], k: i64) -> Result<Vec<T>> {
    if items.is_empty() {
        return Err(ArraylabError::invalid_argument_with_code(
            ErrorCode::INVALID_ROTATION,
            "cannot rotate an empty sequence",
            Some("items".to_string()),
        ));
    }

    let shift = k.rem_euclid(items.len() as i64) as usize;
    let mut rotated = items.to_vec();
    rotated.rotate_right(shift);
    Ok(rotated)
}

/// Most values [`find_missing_numbers`] will return
pub const MAX_MISSING_NUMBERS: u64 = 1_000_000;

/// Integers in `1..=max(numbers)` that do not appear in `numbers`
///
/// # Errors
///
/// `EmptyInput` for an empty slice, and `InvalidArgument` when more than
/// [`MAX_MISSING_NUMBERS`] values would be missing.
pub fn find_missing_numbers(numbers: &[u64]) -> Result<Vec<u64>> {
    let max = numbers
        .iter()
        .copied()
        .max()
        .ok_or_else(|| common::empty_sequence("findMissingNumbers"))?;

    let present: HashSet<u64> = numbers.iter().copied().filter(|n| *n > 0).collect();
    let missing = max - present.len() as u64;
    if missing > MAX_MISSING_NUMBERS {
        return Err(ArraylabError::invalid_argument_with_code(
            ErrorCode::RESULT_TOO_LARGE,
            format!(
                "{} numbers are missing below {}, more than the limit of {}",
                missing, max, MAX_MISSING_NUMBERS
            ),
            Some("numbers".to_string()),
        ));
    }

    Ok((1..=max).filter(|n| !present.contains(n)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_second_largest_number() {
        assert_eq!(
            second_largest_number(&[10.0, 20.0, 4.0, 45.0, 99.0]).unwrap(),
            45.0
        );
        // Duplicates of the maximum do not count twice
        assert_eq!(second_largest_number(&[5.0, 9.0, 9.0]).unwrap(), 5.0);
        assert_eq!(second_largest_number(&[-1.0, -7.0]).unwrap(), -7.0);
    }

    #[test]
    fn test_second_largest_number_insufficient() {
        let err = second_largest_number(&[3.0, 3.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            ArraylabError::InsufficientData {
                required: 2,
                found: 1,
                ..
            }
        ));

        let err = second_largest_number(&[]).unwrap_err();
        assert!(matches!(err, ArraylabError::InsufficientData { found: 0, .. }));
    }

    #[test]
    fn test_second_largest_number_rejects_nan() {
        let err = second_largest_number(&[1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_NUMBER);
    }

    #[test]
    fn test_remove_duplicates() {
        assert_eq!(remove_duplicates(&[1, 2, 2, 3, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(remove_duplicates(&["b", "a", "b"]), vec!["b", "a"]);
        assert!(remove_duplicates::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_flatten_array() {
        let nested = json!([1, [2, [3, [4]]]]);
        let flat = flatten_array(nested.as_array().unwrap());
        assert_eq!(flat, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_flatten_array_keeps_objects_and_skips_empty() {
        let nested = json!([[], [{"a": [1]}], ["x", [null]]]);
        let flat = flatten_array(nested.as_array().unwrap());
        assert_eq!(flat, vec![json!({"a": [1]}), json!("x"), json!(null)]);
    }

    #[test]
    fn test_flatten_array_deep_nesting() {
        let mut nested = json!(7);
        for _ in 0..5_000 {
            nested = Value::Array(vec![nested]);
        }
        let flat = flatten_array(std::slice::from_ref(&nested));
        assert_eq!(flat, vec![json!(7)]);
        // Nested values drop recursively; unwind by hand to keep the test stack small
        let mut current = nested;
        while let Value::Array(mut inner) = current {
            current = inner.pop().unwrap_or(Value::Null);
        }
    }

    #[test]
    fn test_intersection_of_arrays() {
        assert_eq!(intersection_of_arrays(&[1, 2, 3], &[2, 3, 4]), vec![2, 3]);
        assert_eq!(intersection_of_arrays(&[2, 1, 2], &[2]), vec![2, 2]);
        assert!(intersection_of_arrays(&[1], &[]).is_empty());
    }

    #[test]
    fn test_union_of_arrays() {
        assert_eq!(union_of_arrays(&[1, 2, 3], &[3, 4, 5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(union_of_arrays(&[1, 1], &[2, 2, 1]), vec![1, 2]);
    }

    #[test]
    fn test_bubble_sort() {
        let input = [5, 2, 9, 1, 5, 6];
        assert_eq!(bubble_sort(&input), vec![1, 2, 5, 5, 6, 9]);
        assert_eq!(input, [5, 2, 9, 1, 5, 6]);
        assert!(bubble_sort::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_bubble_sort_by_is_stable() {
        let input = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = bubble_sort_by(&input, |a, b| a.0.cmp(&b.0));
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_chunk_array() {
        assert_eq!(
            chunk_array(&[1, 2, 3, 4, 5, 6], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5, 6]]
        );
        assert_eq!(
            chunk_array(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert!(chunk_array::<i32>(&[], 3).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_array_zero_size() {
        let err = chunk_array(&[1, 2], 0).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_CHUNK_SIZE);
    }

    #[test]
    fn test_most_frequent_element() {
        assert_eq!(most_frequent_element(&[1, 2, 3, 3, 3, 4, 5]).unwrap(), 3);
        // Tie goes to the first value seen
        assert_eq!(most_frequent_element(&["x", "y", "y", "x"]).unwrap(), "x");
    }

    #[test]
    fn test_most_frequent_element_empty() {
        let err = most_frequent_element::<i32>(&[]).unwrap_err();
        assert!(matches!(err, ArraylabError::EmptyInput { .. }));
    }

    #[test]
    fn test_rotate_array() {
        assert_eq!(
            rotate_array(&[1, 2, 3, 4, 5], 2).unwrap(),
            vec![4, 5, 1, 2, 3]
        );
        assert_eq!(rotate_array(&[1, 2, 3], 0).unwrap(), vec![1, 2, 3]);
        assert_eq!(rotate_array(&[1, 2, 3], 7).unwrap(), vec![3, 1, 2]);
        assert_eq!(rotate_array(&[1, 2, 3], -1).unwrap(), vec![2, 3, 1]);
    }

    #[test]
    fn test_rotate_array_empty() {
        let err = rotate_array::<i32>(&[], 3).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_ROTATION);
    }

    #[test]
    fn test_find_missing_numbers() {
        assert_eq!(find_missing_numbers(&[1, 2, 4, 6, 7]).unwrap(), vec![3, 5]);
        assert_eq!(find_missing_numbers(&[3]).unwrap(), vec![1, 2]);
        assert!(find_missing_numbers(&[2, 1]).unwrap().is_empty());
        assert!(find_missing_numbers(&[0]).unwrap().is_empty());
    }

    #[test]
    fn test_find_missing_numbers_limit() {
        let err = find_missing_numbers(&[u64::MAX]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::RESULT_TOO_LARGE);
        assert_eq!(err.exit_code(), 2);

        let at_limit = find_missing_numbers(&[MAX_MISSING_NUMBERS + 1]).unwrap();
        assert_eq!(at_limit.len() as u64, MAX_MISSING_NUMBERS);

        // Present values count against the gap
        let dense: Vec<u64> = (1..=MAX_MISSING_NUMBERS + 10).collect();
        assert!(find_missing_numbers(&dense).unwrap().is_empty());
    }

    #[test]
    fn test_find_missing_numbers_empty() {
        let err = find_missing_numbers(&[]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::EMPTY_SEQUENCE);
    }
}
