//! Failure records produced by a validation engine.
//!
//! A `FailureRecord` names the failing field with the engine's own dotted,
//! indexed notation (`Profile.Addresses[2].Zip`) and carries whatever detail
//! the engine reported. Nothing in here interprets the detail.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One rule violation reported against one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordedFailure")]
pub struct FailureRecord {
    /// Dotted path through field identifiers, with optional `[N]` suffixes.
    pub namespace: String,
    /// The last namespace segment without its index suffix.
    pub field: String,
    /// Name of the rule (tag) that failed, e.g. `required` or `min`.
    pub rule: String,
    /// Rule parameter, e.g. `"3"` for `min=3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// The offending value, when the engine reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Engine-supplied human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FailureRecord {
    /// Create a record for `namespace` failing `rule`.
    pub fn new(namespace: impl Into<String>, rule: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let field = field_of(&namespace).to_string();
        Self {
            namespace,
            field,
            rule: rule.into(),
            param: None,
            value: None,
            message: None,
        }
    }

    /// Set the rule parameter.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }

    /// Set the offending value.
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn field_name(&self) -> &str {
        &self.field
    }
}

/// Wire form of a `FailureRecord`; `field` may be omitted.
#[derive(Deserialize)]
struct RecordedFailure {
    namespace: String,
    #[serde(default)]
    field: Option<String>,
    rule: String,
    #[serde(default)]
    param: Option<String>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl From<RecordedFailure> for FailureRecord {
    fn from(raw: RecordedFailure) -> Self {
        let field = match raw.field {
            Some(field) if !field.is_empty() => field,
            _ => field_of(&raw.namespace).to_string(),
        };
        Self {
            namespace: raw.namespace,
            field,
            rule: raw.rule,
            param: raw.param,
            value: raw.value,
            message: raw.message,
        }
    }
}

impl fmt::Display for FailureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(
                f,
                "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag",
                self.namespace,
                self.field_name(),
                self.rule
            ),
        }
    }
}

/// Last dotted segment of `namespace`, stripped of any `[..]` suffix.
///
/// Dots inside brackets belong to a map key and do not split.
fn field_of(namespace: &str) -> &str {
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in namespace.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => start = idx + 1,
            _ => {}
        }
    }
    let last = &namespace[start..];
    match last.find('[') {
        Some(idx) => &last[..idx],
        None => last,
    }
}
