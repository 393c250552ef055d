//! Core array and object utilities implemented as pure functions
//!
//! This module contains the algorithmic content of arraylab. Following the
//! "functional core, imperative shell" pattern, all functions here:
//! - Take inputs by reference and return new values
//! - Never mutate their arguments (sorting functions sort a copy)
//! - Don't log, perform I/O, or hold state between calls
//! - Fail locally with an [`ArraylabError`](crate::error::ArraylabError) when a
//!   precondition is not met
//!
//! Sequence utilities live in [`sequence`], record (JSON object) utilities in
//! [`records`]. Grouping and counting results use [`OrderedMap`] so iteration
//! order always follows first appearance in the source sequence.

pub mod ordered;
pub mod records;
pub mod sequence;
pub mod value;

pub use ordered::OrderedMap;
pub use records::{
    array_to_key_value_map, count_property_frequency, deep_clone_object,
    filter_objects_by_conditions, find_max_object, group_by_property, merge_arrays_by_key,
    object_to_key_value_array, remove_duplicates_by_key, sort_objects_by_key,
};
pub use sequence::{
    bubble_sort, bubble_sort_by, chunk_array, find_missing_numbers, flatten_array,
    intersection_of_arrays, most_frequent_element, remove_duplicates, rotate_array,
    second_largest_number, union_of_arrays,
};
pub use value::{compare_fields, compare_values, field_key, key_string, number_value, Record};
