//! Validation report assembly.
//!
//! `ValidationReportBuilder` owns an injected `ValidationEngine` and a
//! `PathResolver`. For each value it runs the engine once, resolves every
//! returned failure against the schema, and appends the pairs to the report
//! in the order the engine produced them.

use tracing::{debug, warn};

use fieldptr_contracts::{FieldPtrResult, TypeSchema, ValidationReport};

use crate::{
    resolver::{PathResolver, ResolverOptions},
    traits::{Described, ValidationEngine},
};

/// Runs an engine and turns its failures into a `ValidationReport`.
///
/// ```rust,ignore
/// let builder = ValidationReportBuilder::new(FnEngine::new(check_user));
/// let report = builder.build(&user, &User::type_schema())?;
/// for entry in &report {
///     println!("{} -> {}", entry.pointer, entry.failure.rule);
/// }
/// ```
pub struct ValidationReportBuilder<E> {
    engine: E,
    resolver: PathResolver,
}

impl<E> ValidationReportBuilder<E> {
    /// Create a builder around `engine` with default resolver options.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            resolver: PathResolver::new(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.resolver = PathResolver::with_options(options);
        self
    }

    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Validate `value` and resolve each failure against `schema`.
    ///
    /// # Errors
    ///
    /// Returns the engine's error unchanged when it could not run. A value
    /// with no violations gives `Ok` with an empty report.
    pub fn build<T>(&self, value: &T, schema: &TypeSchema) -> FieldPtrResult<ValidationReport>
    where
        T: ?Sized,
        E: ValidationEngine<T>,
    {
        let failures = self.engine.validate(value).map_err(|e| {
            warn!(error = %e, "validation engine failed to run");
            e
        })?;

        let mut report = ValidationReport::new();
        for failure in failures {
            let pointer = self.resolver.resolve(schema, &failure.namespace);
            report.push(pointer, failure);
        }

        debug!(failure_count = report.len(), "validation report built");
        Ok(report)
    }

    /// Like `build`, taking the schema from the value's own type.
    pub fn build_described<T>(&self, value: &T) -> FieldPtrResult<ValidationReport>
    where
        T: Described + ?Sized,
        E: ValidationEngine<T>,
    {
        self.build(value, &T::type_schema())
    }

    /// `Ok(())` when the value is valid, `FieldPtrError::Invalid` carrying
    /// the report otherwise. Engine failures propagate unchanged.
    pub fn validate<T>(&self, value: &T, schema: &TypeSchema) -> FieldPtrResult<()>
    where
        T: ?Sized,
        E: ValidationEngine<T>,
    {
        self.build(value, schema)?.into_result()
    }
}
