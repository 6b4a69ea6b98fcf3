//! # fieldptr-core
//!
//! Translates validation failures into JSON Pointers and collects them into
//! a `ValidationReport`.
//!
//! This crate provides:
//! - [`PathResolver`], which maps one failure namespace such as
//!   `Addresses[2].Zip` onto a `TypeSchema` and returns the matching
//!   pointer, here `/addresses[2]/zip_code`
//! - [`ValidationReportBuilder`], which runs an injected
//!   [`ValidationEngine`] and resolves every failure it reports
//! - the [`Described`] trait with impls for standard library types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fieldptr_core::{FnEngine, ValidationReportBuilder};
//!
//! let builder = ValidationReportBuilder::new(FnEngine::new(check_user));
//! let report = builder.build_described(&user)?;
//! eprint!("{report}");
//! ```

pub mod builder;
pub mod describe;
pub mod resolver;
pub mod traits;

pub use builder::ValidationReportBuilder;
pub use resolver::{resolve, PathResolver, ResolverOptions};
pub use traits::{Described, FnEngine, ValidationEngine};
