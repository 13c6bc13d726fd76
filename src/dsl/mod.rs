//! Builder functions used to write designs.
//!
//! Every function takes the [`EvalContext`](crate::eval::EvalContext) as its
//! first argument and applies to the definition currently on top of the
//! context stack. Builders that open a definition take a closure that runs
//! with the new definition on top. Calls made where they do not apply are
//! reported with the caller's location and otherwise ignored.
//!
//! ```
//! use apidesign::dsl::*;
//! use apidesign::eval::run_dsl;
//! use apidesign::expr::DataType;
//!
//! let root = run_dsl(|ctx| {
//!     user_type(ctx, "Account", |ctx| {
//!         attribute(ctx, "service", DataType::String, |ctx| {
//!             metadata(ctx, "struct:field:name", ["ServiceName"]);
//!         });
//!     });
//! })
//! .unwrap();
//!
//! let account = root.user_type("Account").unwrap();
//! let service = account.attribute.field("service").unwrap();
//! assert_eq!(
//!     service.metadata.as_ref().unwrap().struct_field_name(),
//!     Some("ServiceName")
//! );
//! ```

pub mod api;
pub mod description;
pub mod metadata;
pub mod types;

pub use api::{api, endpoint, payload, service};
pub use description::description;
pub use metadata::metadata;
pub use types::{attribute, result_type, user_type};
