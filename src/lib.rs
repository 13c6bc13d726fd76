//! # apidesign: declarative API design evaluator
//!
//! Designs are written as nested calls to builder functions. Each call
//! applies to the definition currently under construction, tracked by an
//! explicit [`eval::EvalContext`].
//!
//! ## Pipeline
//!
//! ```text
//! DSL closure → EvalContext (definition stack) → RootExpr
//!                     │
//!                     └→ ErrorCollector → EvalErrors
//! ```
//!
//! - [`dsl`]: builder functions (`api`, `service`, `endpoint`, `user_type`,
//!   `attribute`, `metadata`, ...)
//! - [`eval`]: the evaluation context, error collection and entry points
//! - [`expr`]: the design expressions produced by evaluation
//! - [`config`]: evaluation settings
//!
//! ## Metadata
//!
//! [`dsl::metadata`] attaches key/value metadata to whatever definition is
//! being built: an API, an endpoint, an attribute, or a user or result type
//! (stored on the type's attribute). Repeated calls with the same key append
//! values in call order. A call anywhere else is reported as an invalid use
//! and collected with the other errors of the design.
//!
//! ## Errors
//!
//! DSL functions never abort evaluation. Misuse is reported to the context
//! with the caller's source location, and [`eval::run_dsl`] returns every
//! error at once as [`eval::EvalErrors`].

pub mod config;
pub mod dsl;
pub mod error;
pub mod eval;
pub mod expr;

// Re-exports
pub use error::*;
pub use eval::{run_dsl, run_dsl_with_config, EvalContext};
