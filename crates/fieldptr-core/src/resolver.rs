//! Namespace-to-pointer resolution.
//!
//! `PathResolver` walks a `TypeSchema` along a validation engine's dotted
//! namespace and emits the equivalent JSON Pointer:
//!
//! 1. Split the namespace on `.` (dots inside `[..]` do not split).
//! 2. For each segment, separate the field name from its index suffix.
//! 3. Look the field name up in the current object node:
//!    - exposed: push the exposed name plus suffix and descend,
//!    - hidden: stop, the pointer ends at the previous segment,
//!    - missing, or the cursor is not an object: push the rest of the raw
//!      namespace as one segment and stop.
//! 4. Join the segments behind a leading `/`.
//!
//! Resolution is total. Any input string yields some pointer.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use fieldptr_contracts::{pointer::escape_token, JsonPointer, TypeSchema};

/// Knobs for `PathResolver`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Skip a leading segment equal to the root object's type name.
    ///
    /// Engines that report `User.Profile.Zip` for a `User` value need this.
    /// The segment is only skipped when the root has no field of that name.
    pub strip_type_prefix: bool,
}

/// Resolves failure namespaces against a type schema.
///
/// Stateless apart from its options; one resolver can serve any number of
/// schemas and threads.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    options: ResolverOptions,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Translate `namespace` into a pointer by walking `schema`.
    pub fn resolve(&self, schema: &TypeSchema, namespace: &str) -> JsonPointer {
        let segments = split_namespace(namespace);
        let start = usize::from(self.is_type_prefixed(schema, &segments));

        let mut output: Vec<String> = Vec::with_capacity(segments.len());
        let mut cursor = schema;

        for (pos, raw) in segments.iter().enumerate().skip(start) {
            let (name, suffix) = split_index(raw);

            let Some(field) = cursor.as_object().and_then(|object| object.get(name)) else {
                let rest = segments[pos..].join(".");
                debug!(%namespace, segment = %name, fallback = %rest, "namespace left the schema; passing through raw");
                output.push(rest);
                break;
            };

            let Some(exposed) = field.exposed_name() else {
                debug!(%namespace, field = %name, "hidden field truncates pointer");
                break;
            };

            trace!(field = %name, %exposed, index = %suffix, "resolved segment");
            output.push(format!("{}{}", escape_token(exposed), suffix));
            cursor = descend(&field.schema, suffix);
        }

        JsonPointer::from_segments(output)
    }

    fn is_type_prefixed(&self, schema: &TypeSchema, segments: &[&str]) -> bool {
        if !self.options.strip_type_prefix {
            return false;
        }
        match (schema.as_object(), segments.first()) {
            (Some(object), Some(first)) => {
                object.name.as_deref() == Some(*first) && object.get(first).is_none()
            }
            _ => false,
        }
    }
}

/// Resolve with default options.
pub fn resolve(schema: &TypeSchema, namespace: &str) -> JsonPointer {
    PathResolver::new().resolve(schema, namespace)
}

/// Split on `.` outside of brackets.
fn split_namespace(namespace: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in namespace.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                segments.push(&namespace[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&namespace[start..]);
    segments
}

/// `"Addresses[2]"` becomes `("Addresses", "[2]")`.
fn split_index(segment: &str) -> (&str, &str) {
    match segment.find('[') {
        Some(idx) => segment.split_at(idx),
        None => (segment, ""),
    }
}

/// Step into one array level per top-level bracket group in `suffix`.
fn descend<'s>(schema: &'s TypeSchema, suffix: &str) -> &'s TypeSchema {
    let mut cursor = schema;
    let mut depth = 0usize;
    for ch in suffix.chars() {
        match ch {
            '[' => {
                if depth == 0 {
                    if let Some(element) = cursor.element() {
                        cursor = element;
                    }
                }
                depth += 1;
            }
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    cursor
}
