//! Trait seams between the resolver and the outside world.
//!
//! - `ValidationEngine` is the external collaborator that actually checks
//!   values and reports `FailureRecord`s in its own traversal order.
//! - `Described` hands out a type's `TypeSchema`, standing in for runtime
//!   reflection over field annotations.
//!
//! Engines are passed to `ValidationReportBuilder` explicitly. Nothing in
//! this crate holds a shared, ambient validator instance.

use std::sync::Arc;

use fieldptr_contracts::{FailureRecord, FieldPtrResult, TypeSchema};

/// A field-level validation engine.
///
/// Implementations inspect `value` and return every rule violation they
/// find. The order of the returned records is the engine's own and is
/// preserved in the report. `Err` means the engine could not run at all,
/// which is different from returning an empty list.
pub trait ValidationEngine<T: ?Sized>: Send + Sync {
    fn validate(&self, value: &T) -> FieldPtrResult<Vec<FailureRecord>>;
}

impl<T: ?Sized, E: ValidationEngine<T> + ?Sized> ValidationEngine<T> for Box<E> {
    fn validate(&self, value: &T) -> FieldPtrResult<Vec<FailureRecord>> {
        (**self).validate(value)
    }
}

impl<T: ?Sized, E: ValidationEngine<T> + ?Sized> ValidationEngine<T> for Arc<E> {
    fn validate(&self, value: &T) -> FieldPtrResult<Vec<FailureRecord>> {
        (**self).validate(value)
    }
}

impl<T: ?Sized, E: ValidationEngine<T> + ?Sized> ValidationEngine<T> for &E {
    fn validate(&self, value: &T) -> FieldPtrResult<Vec<FailureRecord>> {
        (**self).validate(value)
    }
}

/// Adapts a closure into a `ValidationEngine`.
///
/// ```rust,ignore
/// let engine = FnEngine::new(|user: &User| {
///     let mut failures = Vec::new();
///     if user.name.is_empty() {
///         failures.push(FailureRecord::new("Name", "required"));
///     }
///     Ok(failures)
/// });
/// ```
pub struct FnEngine<F>(F);

impl<F> FnEngine<F> {
    pub fn new(f: F) -> Self {
        FnEngine(f)
    }
}

impl<T, F> ValidationEngine<T> for FnEngine<F>
where
    T: ?Sized,
    F: Fn(&T) -> FieldPtrResult<Vec<FailureRecord>> + Send + Sync,
{
    fn validate(&self, value: &T) -> FieldPtrResult<Vec<FailureRecord>> {
        (self.0)(value)
    }
}

/// A type that can describe its own externally visible shape.
///
/// Implement this by hand for structs, listing each field with its
/// identifier (as the engine names it), its exposure, and the field type's
/// own schema:
///
/// ```rust,ignore
/// impl Described for Address {
///     fn type_schema() -> TypeSchema {
///         TypeSchema::object()
///             .named("Address")
///             .renamed("Zip", "zip_code", String::type_schema())
///             .into()
///     }
/// }
/// ```
///
/// Self-referential types must stop the recursion themselves, typically by
/// describing the recursive field as `TypeSchema::opaque()`.
pub trait Described {
    fn type_schema() -> TypeSchema;
}
