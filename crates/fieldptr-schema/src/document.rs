//! Schema document types.
//!
//! A `SchemaDocument` is deserialized from TOML. It names a root type and
//! declares every struct-like type reachable from it, field by field, in
//! the order the fields should be listed.
//!
//! Example:
//! ```toml
//! root = "User"
//!
//! [resolver]
//! strip_type_prefix = true
//!
//! [types.User]
//! fields = [
//!   { name = "Profile", rename = "profile", type = "Profile" },
//!   { name = "Addresses", rename = "addresses", type = "[Address]" },
//!   { name = "Password", hidden = true },
//! ]
//!
//! [types.Address]
//! fields = [{ name = "Zip", rename = "zip_code" }]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use fieldptr_core::ResolverOptions;

/// How many times one type may recur along a single path before the
/// expansion is cut off with an opaque node.
pub const DEFAULT_RECURSION_LIMIT: usize = 8;

/// Upper bound on object nodes created while compiling one document.
pub const DEFAULT_MAX_NODES: usize = 100_000;

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}

fn default_max_nodes() -> usize {
    DEFAULT_MAX_NODES
}

/// The top-level structure deserialized from a TOML schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Name of the root type; must be a key of `types`.
    pub root: String,

    /// Cut-off for self-referential types. See `DEFAULT_RECURSION_LIMIT`.
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,

    /// Compilation fails once the expanded schema exceeds this many
    /// object nodes. See `DEFAULT_MAX_NODES`.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,

    /// Options handed to the resolver built from this document.
    #[serde(default)]
    pub resolver: ResolverOptions,

    /// Struct-like types by name.
    #[serde(default)]
    pub types: BTreeMap<String, TypeDecl>,
}

/// One struct-like type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeDecl {
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// One field of a declared type.
///
/// `type` grammar:
/// - absent or `"scalar"`: a terminal value,
/// - `"[T]"`: a sequence or map of `T` (nestable, e.g. `"[[Cell]]"`),
/// - anything else: the name of another declared type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    /// The identifier the validation engine uses in namespaces.
    pub name: String,

    /// Pointer segment to use instead of `name`.
    pub rename: Option<String>,

    /// Never expose this field. Cannot be combined with `rename`.
    #[serde(default)]
    pub hidden: bool,

    #[serde(rename = "type")]
    pub ty: Option<String>,
}
