//! Operation plan data model
//!
//! This module defines the structured plan shape produced by the command
//! interpreter: a single operation or an ordered sequence of operations,
//! each a tagged variant with its own named parameters.
//!
//! # Wire format
//!
//! A plan arrives as JSON in one of two shapes:
//!
//! ```json
//! {"operation": "create_folder", "parameters": {"folder_name": "reports", "location": "Desktop"}}
//! ```
//!
//! ```json
//! {"has_multiple_operations": true,
//!  "operations": [{"operation": "create_folder", "parameters": {...}}, ...]}
//! ```
//!
//! Unknown operation names map to [`Operation::Unrecognized`] rather than a
//! parse error, and missing optional parameters default to empty strings so
//! that handlers can fall back to the current location.

use serde::Deserialize;
use serde_json::Value;

/// A single file operation with its named parameters
///
/// The set of kinds is closed: anything the interpreter emits outside this
/// catalog deserializes to `Unrecognized` and is answered with a
/// clarification message instead of a fault.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "operation", content = "parameters")]
pub enum Operation {
    /// Create a directory (with missing parents) under a location
    #[serde(rename = "create_folder")]
    CreateFolder {
        #[serde(default)]
        folder_name: String,
        #[serde(default)]
        location: String,
    },

    /// Create a file, optionally seeded with content
    #[serde(rename = "create_file")]
    CreateFile {
        #[serde(default)]
        file_name: String,
        #[serde(default)]
        location: String,
        #[serde(default)]
        content: String,
    },

    /// Rename a file or folder within one location
    #[serde(rename = "rename_item")]
    Rename {
        #[serde(default)]
        old_name: String,
        #[serde(default)]
        new_name: String,
        #[serde(default)]
        location: String,
    },

    /// Move a file or folder to a new location
    #[serde(rename = "move_item")]
    Move {
        #[serde(default)]
        source: String,
        #[serde(default)]
        destination: String,
    },

    /// Move every direct-child file from one directory into another
    #[serde(rename = "move_all_files")]
    MoveAll {
        #[serde(default)]
        source_dir: String,
        #[serde(default)]
        destination_dir: String,
    },

    /// Open a file manager view at a location
    #[serde(rename = "open_file_explorer")]
    OpenLocation {
        #[serde(default)]
        location: String,
    },

    /// Search for files by name substring
    #[serde(rename = "search_files")]
    Search {
        #[serde(default)]
        search_term: String,
        #[serde(default)]
        search_path: String,
    },

    /// Find the best-matching video and open it with the default player
    #[serde(rename = "play_movie")]
    PlayBestMatch {
        #[serde(default)]
        movie_name: String,
    },

    /// Any operation name outside the catalog
    #[serde(other)]
    Unrecognized,
}

/// One or more operations to execute in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Single(Operation),
    Sequence(Vec<Operation>),
}

impl Plan {
    /// Parse a plan from interpreter-produced JSON
    ///
    /// Accepts both the single-operation and the `has_multiple_operations`
    /// shapes. Steps with a missing `parameters` object are normalized to an
    /// empty one before deserialization so that all-optional variants still
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the value matches neither plan shape.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if let Some(object) = value.as_object()
            && (object.contains_key("operations")
                || object
                    .get("has_multiple_operations")
                    .and_then(Value::as_bool)
                    .unwrap_or(false))
        {
            let steps = object
                .get("operations")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();

            let operations = steps
                .into_iter()
                .map(|step| serde_json::from_value(normalized_step(step)))
                .collect::<Result<Vec<Operation>, _>>()?;

            return Ok(Self::Sequence(operations));
        }

        let operation = serde_json::from_value(normalized_step(value))?;
        Ok(Self::Single(operation))
    }

    /// View the plan as an ordered slice of steps
    #[must_use]
    pub fn steps(&self) -> &[Operation] {
        match self {
            Self::Single(operation) => std::slice::from_ref(operation),
            Self::Sequence(operations) => operations,
        }
    }
}

/// Reduce a step object to its `operation` and `parameters` keys
///
/// The interpreter sometimes omits `parameters` entirely or decorates steps
/// with extra keys; serde's adjacently-tagged representation wants exactly
/// the tag and content fields, with the content present even when empty. A
/// step with no `operation` key stays missing and fails deserialization,
/// which the interpreter reports as a parse failure.
fn normalized_step(value: Value) -> Value {
    let mut step = serde_json::Map::new();
    if let Some(object) = value.as_object() {
        if let Some(operation) = object.get("operation") {
            step.insert("operation".into(), operation.clone());
        }
        step.insert(
            "parameters".into(),
            object
                .get("parameters")
                .cloned()
                .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
        );
    }
    Value::Object(step)
}
