//! Validation reports.
//!
//! A `ValidationReport` pairs every failure the engine reported with the
//! pointer it resolves to. Entries keep the engine's emission order; none
//! are merged or dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{FieldPtrError, FieldPtrResult},
    failure::FailureRecord,
    pointer::JsonPointer,
};

/// One report entry: where the failure is, and what it was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationDetail {
    pub pointer: JsonPointer,
    pub failure: FailureRecord,
}

/// The ordered result of validating one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub entries: Vec<ValidationDetail>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry after all existing ones.
    pub fn push(&mut self, pointer: JsonPointer, failure: FailureRecord) {
        self.entries.push(ValidationDetail { pointer, failure });
    }

    /// True when the engine reported no violations.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationDetail> {
        self.entries.iter()
    }

    /// Entries addressed to `pointer`, in report order.
    pub fn for_pointer<'a>(&'a self, pointer: &'a str) -> impl Iterator<Item = &'a ValidationDetail> {
        self.entries.iter().filter(move |e| e.pointer.as_str() == pointer)
    }

    /// One `Error at '<pointer>': <detail>` line per entry, each
    /// newline-terminated. Empty for a valid report.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// A structured error body for API responses.
    pub fn to_json(&self) -> Value {
        json!({
            "errors": self.entries.iter().map(|e| {
                json!({
                    "pointer": e.pointer,
                    "namespace": e.failure.namespace,
                    "rule": e.failure.rule,
                    "param": e.failure.param,
                    "value": e.failure.value,
                    "message": e.failure.to_string(),
                })
            }).collect::<Vec<_>>()
        })
    }

    /// `Ok(())` for a valid report, otherwise `FieldPtrError::Invalid`.
    pub fn into_result(self) -> FieldPtrResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FieldPtrError::Invalid(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "Error at '{}': {}", entry.pointer, entry.failure)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationDetail;
    type IntoIter = std::slice::Iter<'a, ValidationDetail>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
