//! The example catalog
//!
//! A fixed, ordered list of twenty problems. Each entry names a utility
//! function, the literal arguments of its worked example, and the sentence its
//! result is shown in. [`Catalog::load`] evaluates every example exactly once;
//! a failing example keeps its error so the view can display it instead of
//! aborting the whole list.

pub mod registry;
pub mod view;

pub use registry::{invoke, lookup, FunctionSpec, FUNCTIONS};
pub use view::CatalogView;

use crate::core::key_string;
use crate::error::{common, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// How a result is spliced into its sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    /// Scalars shown bare: `45`, `Alice`
    Plain,
    /// Compact JSON text: `[1,2,3]`
    Json,
}

/// Static description of one worked example
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub question: &'static str,
    pub function: &'static str,
    /// JSON array holding the positional arguments
    pub args: &'static str,
    pub prefix: &'static str,
    pub rendering: Rendering,
}

pub const EXAMPLES: &[Example] = &[
    Example {
        question: "1. Find the Second Largest Number in an Array",
        function: "secondLargestNumber",
        args: r#"[[10, 20, 4, 45, 99]]"#,
        prefix: "Second largest number is ",
        rendering: Rendering::Plain,
    },
    Example {
        question: "2. Remove Duplicates from an Array",
        function: "removeDuplicates",
        args: r#"[[1, 2, 2, 3, 4, 4, 5]]"#,
        prefix: "Array without duplicates is ",
        rendering: Rendering::Json,
    },
    Example {
        question: "3. Flatten a Nested Array",
        function: "flattenArray",
        args: r#"[[1, [2, [3, [4]]]]]"#,
        prefix: "Flattened array is ",
        rendering: Rendering::Json,
    },
    Example {
        question: "4. Find the Intersection of Two Arrays",
        function: "intersectionOfArrays",
        args: r#"[[1, 2, 3], [2, 3, 4]]"#,
        prefix: "Intersection of arrays is ",
        rendering: Rendering::Json,
    },
    Example {
        question: "5. Find the Union of Two Arrays",
        function: "unionOfArrays",
        args: r#"[[1, 2, 3], [3, 4, 5]]"#,
        prefix: "Union of arrays is ",
        rendering: Rendering::Json,
    },
    Example {
        question: "6. Sort an Array Without Using Built-in Methods",
        function: "bubbleSort",
        args: r#"[[5, 2, 9, 1, 5, 6]]"#,
        prefix: "Sorted array is ",
        rendering: Rendering::Json,
    },
    Example {
        question: "7. Chunk an Array",
        function: "chunkArray",
        args: r#"[[1, 2, 3, 4, 5, 6], 2]"#,
        prefix: "Array in chunks of 2: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "8. Find the Most Frequent Element in an Array",
        function: "mostFrequentElement",
        args: r#"[[1, 2, 3, 3, 3, 4, 5]]"#,
        prefix: "Most frequent element is ",
        rendering: Rendering::Plain,
    },
    Example {
        question: "9. Rotate an Array by K Steps",
        function: "rotateArray",
        args: r#"[[1, 2, 3, 4, 5], 2]"#,
        prefix: "Rotated array by 2 steps: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "10. Find Missing Numbers in a Sequence",
        function: "findMissingNumbers",
        args: r#"[[1, 2, 4, 6, 7]]"#,
        prefix: "Missing numbers are ",
        rendering: Rendering::Json,
    },
    Example {
        question: "11. Sort an Array of Objects by a Specific Key",
        function: "sortObjectsByKey",
        args: r#"[[{"name": "Alice", "age": 25}, {"name": "Bob", "age": 20}], "age"]"#,
        prefix: "Sorted objects by age: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "12. Group Objects by a Property",
        function: "groupByProperty",
        args: r#"[[{"name": "Alice", "age": 25}, {"name": "Bob", "age": 25}, {"name": "Charlie", "age": 30}], "age"]"#,
        prefix: "Grouped by age: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "13. Find the Object with the Maximum Value for a Key",
        function: "findMaxObject",
        args: r#"[[{"name": "Alice", "age": 25}, {"name": "Bob", "age": 30}], "age"]"#,
        prefix: "Object with max age: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "14. Merge Two Arrays of Objects by a Common Key",
        function: "mergeArraysByKey",
        args: r#"[[{"id": 1, "name": "Alice"}], [{"id": 1, "age": 25}], "id"]"#,
        prefix: "Merged objects: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "15. Remove Objects with Duplicate Values for a Key",
        function: "removeDuplicatesByKey",
        args: r#"[[{"id": 1, "name": "Alice"}, {"id": 1, "name": "Bob"}, {"id": 2, "name": "Charlie"}], "id"]"#,
        prefix: "Array without duplicate ids: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "16. Convert an Array of Objects into a Key-Value Map",
        function: "arrayToKeyValueMap",
        args: r#"[[{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}], "id"]"#,
        prefix: "Key-value map: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "17. Count the Frequency of Properties in an Array of Objects",
        function: "countPropertyFrequency",
        args: r#"[[{"name": "Alice"}, {"name": "Bob"}, {"name": "Alice"}], "name"]"#,
        prefix: "Frequency count of names: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "18. Filter an Array of Objects Based on Multiple Conditions",
        function: "filterObjectsByConditions",
        args: r#"[[{"name": "Alice", "age": 25}, {"name": "Bob", "age": 30}], {"age": 25}]"#,
        prefix: "Filtered objects: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "19. Convert an Object to an Array of Key-Value Pairs",
        function: "objectToKeyValueArray",
        args: r#"[{"a": 1, "b": 2}]"#,
        prefix: "Key-value pairs: ",
        rendering: Rendering::Json,
    },
    Example {
        question: "20. Deep Clone a Nested Object",
        function: "deepCloneObject",
        args: r#"[{"a": {"b": 1, "c": 2}}]"#,
        prefix: "Deep cloned object: ",
        rendering: Rendering::Json,
    },
];

impl Example {
    /// Run the example and format its display sentence
    pub fn evaluate(&self) -> Result<String> {
        let args: Vec<Value> = serde_json::from_str(self.args)?;
        let result = invoke(self.function, &args)?;
        let rendered = match self.rendering {
            Rendering::Plain => key_string(&result),
            Rendering::Json => serde_json::to_string(&result)?,
        };
        Ok(format!("{}{}", self.prefix, rendered))
    }
}

/// One evaluated catalog entry
#[derive(Debug)]
pub struct Entry {
    pub id: usize,
    pub question: &'static str,
    pub function: &'static str,
    pub output: Result<String>,
}

impl Entry {
    /// Output sentence, or the error shown in its place
    pub fn display_output(&self) -> String {
        match &self.output {
            Ok(text) => text.clone(),
            Err(err) => format!("Error: {}", err.user_message()),
        }
    }
}

/// The evaluated list of examples, in display order
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Evaluate every example once
    pub fn load() -> Self {
        Self::from_examples(EXAMPLES)
    }

    pub fn from_examples(examples: &[Example]) -> Self {
        let entries = examples
            .iter()
            .enumerate()
            .map(|(index, example)| {
                let output = example.evaluate();
                match &output {
                    Ok(text) => debug!(function = example.function, "{}", text),
                    Err(err) => warn!(function = example.function, "Example failed: {}", err),
                }
                Entry {
                    id: index + 1,
                    question: example.question,
                    function: example.function,
                    output,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by its 1-based id as shown to users
    pub fn by_id(&self, id: usize) -> Result<&Entry> {
        id.checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .ok_or_else(|| common::entry_out_of_range(id, self.len()))
    }
}
