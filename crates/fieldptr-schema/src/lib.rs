//! # fieldptr-schema
//!
//! TOML-defined type schemas for the fieldptr resolver.
//!
//! ## Overview
//!
//! When the validated types live outside Rust (or their `Described` impls
//! are not available), their shape can be declared in a TOML document and
//! compiled into a [`TypeSchema`](fieldptr_contracts::TypeSchema). The
//! document also carries the resolver options to use with it.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use fieldptr_schema::SchemaDocument;
//!
//! let compiled = SchemaDocument::from_file(Path::new("schemas/user.toml"))?.compile()?;
//! assert_eq!(compiled.resolve("Profile.Zip").as_str(), "/profile/zip_code");
//! ```

pub mod document;
pub mod loader;

pub use document::{FieldDecl, SchemaDocument, TypeDecl, DEFAULT_MAX_NODES, DEFAULT_RECURSION_LIMIT};
pub use loader::CompiledSchema;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use fieldptr_contracts::{FieldPtrError, TypeSchema};

    use crate::SchemaDocument;

    // ── Helpers ───────────────────────────────────────────────────────────────

    const USER_SCHEMA: &str = r#"
        root = "User"

        [types.User]
        fields = [
          { name = "Profile", rename = "profile", type = "Profile" },
          { name = "Addresses", rename = "addresses", type = "[Address]" },
          { name = "Grid", rename = "grid", type = "[[Address]]" },
          { name = "Password", hidden = true },
          { name = "Nickname" },
        ]

        [types.Profile]
        fields = [{ name = "Zip", rename = "zip_code", type = "scalar" }]

        [types.Address]
        fields = [{ name = "Zip", rename = "zip_code" }]
    "#;

    fn config_reason(err: FieldPtrError) -> String {
        match err {
            FieldPtrError::ConfigError { reason } => reason,
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 1. compile and resolve ────────────────────────────────────────────────

    #[test]
    fn test_document_resolves_examples() {
        let compiled = SchemaDocument::from_toml_str(USER_SCHEMA)
            .unwrap()
            .compile()
            .unwrap();

        assert_eq!(compiled.resolve("Profile.Zip").as_str(), "/profile/zip_code");
        assert_eq!(compiled.resolve("Addresses[2].Zip").as_str(), "/addresses[2]/zip_code");
        assert_eq!(compiled.resolve("Grid[0][4].Zip").as_str(), "/grid[0][4]/zip_code");
        assert_eq!(compiled.resolve("Password").as_str(), "/");
        assert_eq!(compiled.resolve("Nickname").as_str(), "/Nickname");
        assert_eq!(compiled.resolve("Unknown.Field").as_str(), "/Unknown.Field");
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let compiled = SchemaDocument::from_toml_str(USER_SCHEMA)
            .unwrap()
            .compile()
            .unwrap();
        let root = compiled.schema.as_object().unwrap();

        assert_eq!(root.name.as_deref(), Some("User"));
        let idents: Vec<_> = root.fields.iter().map(|f| f.ident.as_str()).collect();
        assert_eq!(idents, vec!["Profile", "Addresses", "Grid", "Password", "Nickname"]);
    }

    // ── 2. resolver options ───────────────────────────────────────────────────

    #[test]
    fn test_resolver_options_come_from_document() {
        let toml = format!("{USER_SCHEMA}\n[resolver]\nstrip_type_prefix = true\n");
        let compiled = SchemaDocument::from_toml_str(&toml).unwrap().compile().unwrap();

        assert!(compiled.options.strip_type_prefix);
        assert_eq!(compiled.resolve("User.Profile.Zip").as_str(), "/profile/zip_code");
    }

    #[test]
    fn test_resolver_options_default_off() {
        let compiled = SchemaDocument::from_toml_str(USER_SCHEMA)
            .unwrap()
            .compile()
            .unwrap();
        assert!(!compiled.options.strip_type_prefix);
        assert_eq!(compiled.resolve("User.Profile.Zip").as_str(), "/User.Profile.Zip");
    }

    // ── 3. recursion ──────────────────────────────────────────────────────────

    #[test]
    fn test_recursive_types_are_cut_off() {
        let toml = r#"
            root = "Node"
            recursion_limit = 2

            [types.Node]
            fields = [
              { name = "Value", rename = "value" },
              { name = "Children", rename = "children", type = "[Node]" },
            ]
        "#;
        let compiled = SchemaDocument::from_toml_str(toml).unwrap().compile().unwrap();

        assert_eq!(
            compiled.resolve("Children[0].Value").as_str(),
            "/children[0]/value"
        );
        // The third level is opaque, so the rest passes through raw.
        assert_eq!(
            compiled.resolve("Children[0].Children[1].Value").as_str(),
            "/children[0]/children[1]/Value"
        );

        let grandchild = compiled
            .schema
            .as_object()
            .and_then(|o| o.get("Children"))
            .and_then(|f| f.schema.element())
            .and_then(TypeSchema::as_object)
            .and_then(|o| o.get("Children"))
            .and_then(|f| f.schema.element())
            .unwrap();
        assert_eq!(grandchild, &TypeSchema::Opaque);
    }

    #[test]
    fn test_branching_recursion_hits_node_budget() {
        let toml = r#"
            root = "Node"

            [types.Node]
            fields = [
              { name = "A", type = "Node" }, { name = "B", type = "Node" },
              { name = "C", type = "Node" }, { name = "D", type = "Node" },
              { name = "E", type = "Node" }, { name = "F", type = "[Node]" },
              { name = "G", type = "Node" }, { name = "H", type = "Node" },
            ]
        "#;
        let doc = SchemaDocument::from_toml_str(toml).unwrap();
        assert_eq!(doc.max_nodes, crate::DEFAULT_MAX_NODES);

        let reason = config_reason(doc.compile().unwrap_err());
        assert!(reason.contains("more than 100000 object nodes"), "got: {reason}");
    }

    #[test]
    fn test_mutual_recursion_hits_node_budget() {
        let toml = r#"
            root = "Expr"
            max_nodes = 500

            [types.Expr]
            fields = [{ name = "Left", type = "Term" }, { name = "Right", type = "Term" }]

            [types.Term]
            fields = [{ name = "Inner", type = "Expr" }, { name = "Other", type = "Expr" }]
        "#;
        let doc = SchemaDocument::from_toml_str(toml).unwrap();
        let reason = config_reason(doc.compile().unwrap_err());
        assert!(reason.contains("more than 500 object nodes"), "got: {reason}");
    }

    #[test]
    fn test_branching_recursion_compiles_with_low_limit() {
        let toml = r#"
            root = "Node"
            recursion_limit = 2

            [types.Node]
            fields = [
              { name = "A", rename = "a", type = "Node" },
              { name = "B", rename = "b", type = "Node" },
              { name = "C", rename = "c", type = "Node" },
            ]
        "#;
        let compiled = SchemaDocument::from_toml_str(toml).unwrap().compile().unwrap();
        assert_eq!(compiled.resolve("B.C.A").as_str(), "/b/c/A");
    }

    // ── 4. configuration errors ───────────────────────────────────────────────

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SchemaDocument::from_toml_str("root = ").unwrap_err();
        assert!(config_reason(err).contains("failed to parse schema TOML"));
    }

    #[test]
    fn test_missing_root_type() {
        let doc = SchemaDocument::from_toml_str(r#"root = "Ghost""#).unwrap();
        let reason = config_reason(doc.compile().unwrap_err());
        assert!(reason.contains("'Ghost'"), "got: {reason}");
    }

    #[test]
    fn test_undeclared_field_type() {
        let toml = r#"
            root = "User"
            [types.User]
            fields = [{ name = "Home", type = "[Adress]" }]
        "#;
        let doc = SchemaDocument::from_toml_str(toml).unwrap();
        let reason = config_reason(doc.compile().unwrap_err());
        assert!(reason.contains("User.Home"), "got: {reason}");
        assert!(reason.contains("'Adress'"), "got: {reason}");
    }

    #[test]
    fn test_hidden_and_renamed_is_rejected() {
        let toml = r#"
            root = "User"
            [types.User]
            fields = [{ name = "Password", rename = "pw", hidden = true }]
        "#;
        let doc = SchemaDocument::from_toml_str(toml).unwrap();
        let reason = config_reason(doc.compile().unwrap_err());
        assert!(reason.contains("both hidden and renamed"), "got: {reason}");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = SchemaDocument::from_file(std::path::Path::new("/nonexistent/schema.toml"))
            .unwrap_err();
        assert!(config_reason(err).contains("failed to read schema file"));
    }
}
