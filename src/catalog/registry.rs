//! Name-based access to the utility functions
//!
//! Maps each catalog name (`secondLargestNumber`, `chunkArray`, ...) to the
//! typed function in [`crate::core`], converting JSON arguments in and the
//! result back out. Arity and argument shapes are checked here so the core
//! functions only ever see well-typed input.

use crate::core::{
    array_to_key_value_map, bubble_sort_by, chunk_array, compare_values, count_property_frequency,
    deep_clone_object, filter_objects_by_conditions, find_max_object, find_missing_numbers,
    flatten_array, group_by_property, intersection_of_arrays, merge_arrays_by_key,
    most_frequent_element, number_value, object_to_key_value_array, remove_duplicates,
    remove_duplicates_by_key, rotate_array, second_largest_number, sort_objects_by_key,
    union_of_arrays, Record,
};
use crate::error::{common, ArraylabError, ErrorCode, Result};
use serde_json::Value;

/// Description of one callable function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub summary: &'static str,
}

impl FunctionSpec {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Call-shaped signature, e.g. `chunkArray(items, size)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }
}

pub const FUNCTIONS: &[FunctionSpec] = &[
    FunctionSpec {
        name: "secondLargestNumber",
        params: &["numbers"],
        summary: "Second-largest distinct number",
    },
    FunctionSpec {
        name: "removeDuplicates",
        params: &["items"],
        summary: "First occurrence of each value, order preserved",
    },
    FunctionSpec {
        name: "flattenArray",
        params: &["items"],
        summary: "Flatten nested arrays depth-first",
    },
    FunctionSpec {
        name: "intersectionOfArrays",
        params: &["first", "second"],
        summary: "Values of the first array present in the second",
    },
    FunctionSpec {
        name: "unionOfArrays",
        params: &["first", "second"],
        summary: "Distinct values from both arrays",
    },
    FunctionSpec {
        name: "bubbleSort",
        params: &["items"],
        summary: "Ascending bubble sort of a copy",
    },
    FunctionSpec {
        name: "chunkArray",
        params: &["items", "size"],
        summary: "Split into chunks of a fixed size",
    },
    FunctionSpec {
        name: "mostFrequentElement",
        params: &["items"],
        summary: "Value with the highest occurrence count",
    },
    FunctionSpec {
        name: "rotateArray",
        params: &["items", "k"],
        summary: "Rotate right by k positions",
    },
    FunctionSpec {
        name: "findMissingNumbers",
        params: &["numbers"],
        summary: "Integers from 1 to the maximum that are absent",
    },
    FunctionSpec {
        name: "sortObjectsByKey",
        params: &["records", "key"],
        summary: "Stable sort of records by a field",
    },
    FunctionSpec {
        name: "groupByProperty",
        params: &["records", "key"],
        summary: "Group records by a field value",
    },
    FunctionSpec {
        name: "findMaxObject",
        params: &["records", "key"],
        summary: "Record with the largest field value",
    },
    FunctionSpec {
        name: "mergeArraysByKey",
        params: &["first", "second", "key"],
        summary: "Shallow-merge records sharing a key value",
    },
    FunctionSpec {
        name: "removeDuplicatesByKey",
        params: &["records", "key"],
        summary: "First record per distinct field value",
    },
    FunctionSpec {
        name: "arrayToKeyValueMap",
        params: &["records", "key"],
        summary: "Index records by a field value",
    },
    FunctionSpec {
        name: "countPropertyFrequency",
        params: &["records", "key"],
        summary: "Count records per field value",
    },
    FunctionSpec {
        name: "filterObjectsByConditions",
        params: &["records", "conditions"],
        summary: "Records matching every field/value condition",
    },
    FunctionSpec {
        name: "objectToKeyValueArray",
        params: &["record"],
        summary: "Record fields as [key, value] pairs",
    },
    FunctionSpec {
        name: "deepCloneObject",
        params: &["value"],
        summary: "Independent deep copy of JSON data",
    },
];

/// Find a function by its catalog name
pub fn lookup(name: &str) -> Option<&'static FunctionSpec> {
    FUNCTIONS.iter().find(|spec| spec.name == name)
}

/// Call a function by name with JSON arguments
///
/// # Errors
///
/// `UnknownFunction` for names not in [`FUNCTIONS`], `InvalidArgument` for a
/// wrong argument count or shape, and whatever the function itself reports.
pub fn invoke(name: &str, args: &[Value]) -> Result<Value> {
    let spec = lookup(name).ok_or_else(|| ArraylabError::unknown_function(name))?;
    if args.len() != spec.arity() {
        return Err(common::arity_mismatch(spec.name, spec.arity(), args.len()));
    }

    let value = match spec.name {
        "secondLargestNumber" => {
            number_value(second_largest_number(&numbers(&args[0], "numbers")?)?)
        }
        "removeDuplicates" => Value::Array(remove_duplicates(array(&args[0], "items")?)),
        "flattenArray" => Value::Array(flatten_array(array(&args[0], "items")?)),
        "intersectionOfArrays" => Value::Array(intersection_of_arrays(
            array(&args[0], "first")?,
            array(&args[1], "second")?,
        )),
        "unionOfArrays" => Value::Array(union_of_arrays(
            array(&args[0], "first")?,
            array(&args[1], "second")?,
        )),
        "bubbleSort" => Value::Array(bubble_sort_by(array(&args[0], "items")?, compare_values)),
        "chunkArray" => {
            let chunks = chunk_array(array(&args[0], "items")?, chunk_size(&args[1])?)?;
            Value::Array(chunks.into_iter().map(Value::Array).collect())
        }
        "mostFrequentElement" => most_frequent_element(array(&args[0], "items")?)?,
        "rotateArray" => Value::Array(rotate_array(
            array(&args[0], "items")?,
            integer(&args[1], "k")?,
        )?),
        "findMissingNumbers" => Value::Array(
            find_missing_numbers(&positive_integers(&args[0], "numbers")?)?
                .into_iter()
                .map(Value::from)
                .collect(),
        ),
        "sortObjectsByKey" => records_value(sort_objects_by_key(
            &records(&args[0], "records")?,
            string(&args[1], "key")?,
        )),
        "groupByProperty" => group_by_property(
            &records(&args[0], "records")?,
            string(&args[1], "key")?,
        )
        .to_json_with(append_groups)?,
        "findMaxObject" => Value::Object(find_max_object(
            &records(&args[0], "records")?,
            string(&args[1], "key")?,
        )?),
        "mergeArraysByKey" => records_value(merge_arrays_by_key(
            &records(&args[0], "first")?,
            &records(&args[1], "second")?,
            string(&args[2], "key")?,
        )),
        "removeDuplicatesByKey" => records_value(remove_duplicates_by_key(
            &records(&args[0], "records")?,
            string(&args[1], "key")?,
        )),
        "arrayToKeyValueMap" => array_to_key_value_map(
            &records(&args[0], "records")?,
            string(&args[1], "key")?,
        )
        .to_json()?,
        "countPropertyFrequency" => count_property_frequency(
            &records(&args[0], "records")?,
            string(&args[1], "key")?,
        )
        .to_json_with(add_counts)?,
        "filterObjectsByConditions" => records_value(filter_objects_by_conditions(
            &records(&args[0], "records")?,
            record(&args[1], "conditions")?,
        )),
        "objectToKeyValueArray" => Value::Array(
            object_to_key_value_array(record(&args[0], "record")?)
                .into_iter()
                .map(|(key, value)| Value::Array(vec![Value::String(key), value]))
                .collect(),
        ),
        "deepCloneObject" => deep_clone_object(&args[0]),
        other => return Err(ArraylabError::unknown_function(other)),
    };

    Ok(value)
}

fn array<'a>(value: &'a Value, name: &str) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| common::type_mismatch(name, "an array"))
}

fn numbers(value: &Value, name: &str) -> Result<Vec<f64>> {
    array(value, name)?
        .iter()
        .map(|item| {
            item.as_f64()
                .ok_or_else(|| common::type_mismatch(name, "an array of numbers"))
        })
        .collect()
}

fn positive_integers(value: &Value, name: &str) -> Result<Vec<u64>> {
    array(value, name)?
        .iter()
        .map(|item| {
            item.as_u64()
                .ok_or_else(|| common::type_mismatch(name, "an array of non-negative integers"))
        })
        .collect()
}

fn records(value: &Value, name: &str) -> Result<Vec<Record>> {
    array(value, name)?
        .iter()
        .map(|item| {
            item.as_object()
                .cloned()
                .ok_or_else(|| common::type_mismatch(name, "an array of objects"))
        })
        .collect()
}

fn record<'a>(value: &'a Value, name: &str) -> Result<&'a Record> {
    value
        .as_object()
        .ok_or_else(|| common::type_mismatch(name, "an object"))
}

fn string<'a>(value: &'a Value, name: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| common::type_mismatch(name, "a string"))
}

fn integer(value: &Value, name: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| common::type_mismatch(name, "an integer"))
}

fn chunk_size(value: &Value) -> Result<usize> {
    let size = integer(value, "size")?;
    usize::try_from(size)
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| {
            ArraylabError::invalid_argument_with_code(
                ErrorCode::INVALID_CHUNK_SIZE,
                format!("chunk size must be positive, got {}", size),
                Some("size".to_string()),
            )
        })
}

/// Groups whose keys stringify alike share one field; members stay in order
fn append_groups(existing: &mut Value, incoming: Value) {
    if let (Value::Array(members), Value::Array(more)) = (existing, incoming) {
        members.extend(more);
    }
}

/// Counts whose keys stringify alike are summed
fn add_counts(existing: &mut Value, incoming: Value) {
    let total = existing.as_u64().unwrap_or(0) + incoming.as_u64().unwrap_or(0);
    *existing = Value::from(total);
}

fn records_value(records: Vec<Record>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(name: &str, args: Value) -> Result<Value> {
        invoke(name, args.as_array().unwrap())
    }

    #[test]
    fn test_every_function_is_dispatched() {
        // Each registered name must reach a real function rather than the fallback arm
        for spec in FUNCTIONS {
            let args = vec![Value::Null; spec.arity()];
            if let Err(err) = invoke(spec.name, &args) {
                assert!(
                    !matches!(err, ArraylabError::UnknownFunction { .. }),
                    "{} fell through dispatch",
                    spec.name
                );
            }
        }
        assert_eq!(FUNCTIONS.len(), 20);
    }

    #[test]
    fn test_colliding_key_strings_are_combined() {
        assert_eq!(
            call("groupByProperty", json!([[{"a": 1}, {"a": "1"}], "a"])).unwrap(),
            json!({"1": [{"a": 1}, {"a": "1"}]})
        );
        assert_eq!(
            call(
                "countPropertyFrequency",
                json!([[{"a": 1}, {"a": "1"}, {"a": 1}], "a"])
            )
            .unwrap(),
            json!({"1": 3})
        );
        // Later records still replace earlier ones in a key-value map
        assert_eq!(
            call(
                "arrayToKeyValueMap",
                json!([[{"a": 1, "n": "x"}, {"a": "1", "n": "y"}], "a"])
            )
            .unwrap(),
            json!({"1": {"a": "1", "n": "y"}})
        );
    }

    #[test]
    fn test_unknown_function() {
        let err = call("shuffleArray", json!([[1, 2]])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UNKNOWN_FUNCTION);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = call("chunkArray", json!([[1, 2, 3]])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_ARITY);
    }

    #[test]
    fn test_type_mismatch_names_argument() {
        let err = call("sortObjectsByKey", json!([[{"a": 1}], 5])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_TYPE);
        assert!(err.user_message().contains("'key'"));

        let err = call("groupByProperty", json!([[1, 2], "a"])).unwrap_err();
        assert!(err.user_message().contains("an array of objects"));
    }

    #[test]
    fn test_second_largest_number_returns_integer_json() {
        assert_eq!(
            call("secondLargestNumber", json!([[10, 20, 4, 45, 99]])).unwrap(),
            json!(45)
        );
        assert_eq!(
            call("secondLargestNumber", json!([[1.5, 0.5]])).unwrap(),
            json!(0.5)
        );
    }

    #[test]
    fn test_chunk_size_must_be_positive() {
        for size in [json!(0), json!(-2)] {
            let err = call("chunkArray", json!([[1, 2], size])).unwrap_err();
            assert_eq!(err.code(), ErrorCode::INVALID_CHUNK_SIZE);
        }

        let err = call("chunkArray", json!([[1, 2], 1.5])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_TYPE);
    }

    #[test]
    fn test_sequence_functions() {
        assert_eq!(
            call("flattenArray", json!([[1, [2, [3, [4]]]]])).unwrap(),
            json!([1, 2, 3, 4])
        );
        assert_eq!(
            call("bubbleSort", json!([[5, 2, 9, 1, 5, 6]])).unwrap(),
            json!([1, 2, 5, 5, 6, 9])
        );
        assert_eq!(
            call("chunkArray", json!([[1, 2, 3, 4, 5, 6], 2])).unwrap(),
            json!([[1, 2], [3, 4], [5, 6]])
        );
        assert_eq!(
            call("rotateArray", json!([[1, 2, 3, 4, 5], 2])).unwrap(),
            json!([4, 5, 1, 2, 3])
        );
        assert_eq!(
            call("findMissingNumbers", json!([[1, 2, 4, 6, 7]])).unwrap(),
            json!([3, 5])
        );
        assert_eq!(
            call("mostFrequentElement", json!([["a", "b", "b"]])).unwrap(),
            json!("b")
        );
    }

    #[test]
    fn test_find_missing_numbers_rejects_negative() {
        let err = call("findMissingNumbers", json!([[1, -3]])).unwrap_err();
        assert_eq!(err.code(), ErrorCode::INVALID_TYPE);
    }

    #[test]
    fn test_record_functions() {
        assert_eq!(
            call(
                "mergeArraysByKey",
                json!([[{"id": 1, "name": "Alice"}], [{"id": 1, "age": 25}], "id"])
            )
            .unwrap(),
            json!([{"id": 1, "name": "Alice", "age": 25}])
        );
        assert_eq!(
            call(
                "groupByProperty",
                json!([[{"age": 25}, {"age": 25}, {"age": 30}], "age"])
            )
            .unwrap(),
            json!({"25": [{"age": 25}, {"age": 25}], "30": [{"age": 30}]})
        );
        assert_eq!(
            call("objectToKeyValueArray", json!([{"a": 1, "b": 2}])).unwrap(),
            json!([["a", 1], ["b", 2]])
        );
        assert_eq!(
            call("deepCloneObject", json!([{"a": {"b": 1, "c": 2}}])).unwrap(),
            json!({"a": {"b": 1, "c": 2}})
        );
    }

    #[test]
    fn test_signature() {
        let spec = lookup("mergeArraysByKey").unwrap();
        assert_eq!(spec.signature(), "mergeArraysByKey(first, second, key)");
        assert_eq!(spec.arity(), 3);
    }
}
