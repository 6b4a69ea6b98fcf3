//! Loading and compiling schema documents.
//!
//! `SchemaDocument::from_toml_str` / `from_file` parse a document, and
//! `compile` turns it into a `TypeSchema` rooted at `root`:
//!
//! 1. Check that the root and every referenced type are declared and that
//!    no field is both hidden and renamed.
//! 2. Expand the root type recursively, field by field.
//! 3. A type that already appears `recursion_limit` times on the current
//!    path becomes opaque, so resolution falls back instead of looping.
//! 4. The whole expansion may create at most `max_nodes` object nodes.
//!    Types with several self-references grow exponentially with the
//!    recursion limit, so exceeding the budget is a `ConfigError`.

use std::path::Path;

use tracing::debug;

use fieldptr_contracts::{
    Exposure, FieldPtrError, FieldPtrResult, FieldSchema, JsonPointer, TypeSchema,
};
use fieldptr_core::{PathResolver, ResolverOptions};

use crate::document::{FieldDecl, SchemaDocument};

/// A parsed `type` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TypeRef<'a> {
    Scalar,
    Array(Box<TypeRef<'a>>),
    Named(&'a str),
}

fn parse_type_ref(raw: &str) -> FieldPtrResult<TypeRef<'_>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "scalar" {
        return Ok(TypeRef::Scalar);
    }
    if let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return Ok(TypeRef::Array(Box::new(parse_type_ref(inner)?)));
    }
    if raw.contains(['[', ']']) || raw.chars().any(char::is_whitespace) {
        return Err(FieldPtrError::ConfigError {
            reason: format!("malformed type reference '{raw}'"),
        });
    }
    Ok(TypeRef::Named(raw))
}

fn field_type(field: &FieldDecl) -> FieldPtrResult<TypeRef<'_>> {
    match field.ty.as_deref() {
        Some(raw) => parse_type_ref(raw),
        None => Ok(TypeRef::Scalar),
    }
}

/// A compiled document: the root schema plus the resolver options it asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledSchema {
    pub schema: TypeSchema,
    pub options: ResolverOptions,
}

impl CompiledSchema {
    /// A resolver configured with this document's options.
    pub fn resolver(&self) -> PathResolver {
        PathResolver::with_options(self.options.clone())
    }

    /// Resolve `namespace` against the compiled root schema.
    pub fn resolve(&self, namespace: &str) -> JsonPointer {
        self.resolver().resolve(&self.schema, namespace)
    }
}

impl SchemaDocument {
    /// Parse `s` as a TOML schema document.
    ///
    /// Returns `FieldPtrError::ConfigError` if the TOML is malformed or does
    /// not match the expected document layout.
    pub fn from_toml_str(s: &str) -> FieldPtrResult<Self> {
        toml::from_str(s).map_err(|e| FieldPtrError::ConfigError {
            reason: format!("failed to parse schema TOML: {}", e),
        })
    }

    /// Read the file at `path` and parse it as a TOML schema document.
    pub fn from_file(path: &Path) -> FieldPtrResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FieldPtrError::ConfigError {
            reason: format!("failed to read schema file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check references and expand the root type into a `TypeSchema`.
    pub fn compile(&self) -> FieldPtrResult<CompiledSchema> {
        self.check()?;
        let mut expansion = Expansion::default();
        let schema = self.expand_named(&self.root, &mut expansion)?;
        debug!(
            root = %self.root,
            types = self.types.len(),
            nodes = expansion.nodes,
            "schema document compiled"
        );
        Ok(CompiledSchema {
            schema,
            options: self.resolver.clone(),
        })
    }

    fn check(&self) -> FieldPtrResult<()> {
        if !self.types.contains_key(&self.root) {
            return Err(FieldPtrError::ConfigError {
                reason: format!("root type '{}' is not declared", self.root),
            });
        }

        for (type_name, decl) in &self.types {
            for field in &decl.fields {
                if field.hidden && field.rename.is_some() {
                    return Err(FieldPtrError::ConfigError {
                        reason: format!(
                            "field '{}.{}' is both hidden and renamed",
                            type_name, field.name
                        ),
                    });
                }
                let mut ty = field_type(field)?;
                while let TypeRef::Array(inner) = ty {
                    ty = *inner;
                }
                if let TypeRef::Named(name) = ty {
                    if !self.types.contains_key(name) {
                        return Err(FieldPtrError::ConfigError {
                            reason: format!(
                                "field '{}.{}' references undeclared type '{}'",
                                type_name, field.name, name
                            ),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn expand_named<'d>(
        &'d self,
        name: &'d str,
        expansion: &mut Expansion<'d>,
    ) -> FieldPtrResult<TypeSchema> {
        let seen = expansion.stack.iter().filter(|n| **n == name).count();
        if seen >= self.recursion_limit {
            debug!(type_name = %name, limit = self.recursion_limit, "recursion limit reached; cutting off");
            return Ok(TypeSchema::Opaque);
        }
        let decl = self.types.get(name).ok_or_else(|| FieldPtrError::ConfigError {
            reason: format!("type '{name}' is not declared"),
        })?;

        expansion.nodes += 1;
        if expansion.nodes > self.max_nodes {
            return Err(FieldPtrError::ConfigError {
                reason: format!(
                    "schema for '{}' expands to more than {} object nodes; lower recursion_limit",
                    self.root, self.max_nodes
                ),
            });
        }

        expansion.stack.push(name);
        let mut object = TypeSchema::object().named(name);
        for field in &decl.fields {
            let (exposure, schema) = if field.hidden {
                (Exposure::Hidden, TypeSchema::Opaque)
            } else {
                let exposure = match &field.rename {
                    Some(rename) => Exposure::Renamed(rename.clone()),
                    None => Exposure::Default,
                };
                let ty = field_type(field)?;
                (exposure, self.expand_ref(&ty, expansion)?)
            };
            object = object.with_field(FieldSchema::new(field.name.clone(), exposure, schema));
        }
        expansion.stack.pop();

        Ok(object.into())
    }

    fn expand_ref<'d>(
        &'d self,
        ty: &TypeRef<'d>,
        expansion: &mut Expansion<'d>,
    ) -> FieldPtrResult<TypeSchema> {
        match ty {
            TypeRef::Scalar => Ok(TypeSchema::Opaque),
            TypeRef::Array(inner) => Ok(TypeSchema::array_of(self.expand_ref(inner, expansion)?)),
            TypeRef::Named(name) => self.expand_named(*name, expansion),
        }
    }
}

/// Bookkeeping for one `compile` call.
#[derive(Default)]
struct Expansion<'d> {
    /// Type names on the current path, outermost first.
    stack: Vec<&'d str>,
    /// Object nodes created so far.
    nodes: usize,
}
