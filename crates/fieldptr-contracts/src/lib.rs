//! # fieldptr-contracts
//!
//! Shared types for translating validation failures into JSON Pointers.
//!
//! All crates in the workspace import from here. No resolution logic lives
//! in this crate, only the data model and the error type.

pub mod error;
pub mod failure;
pub mod pointer;
pub mod report;
pub mod schema;

pub use error::{FieldPtrError, FieldPtrResult};
pub use failure::FailureRecord;
pub use pointer::JsonPointer;
pub use report::{ValidationDetail, ValidationReport};
pub use schema::{Exposure, FieldSchema, ObjectSchema, TypeSchema};
