use tracing::debug;

use crate::eval::{EvalContext, Location};
use crate::expr::{Definition, MetadataExpr};

/// Metadata is a set of key/value pairs that can be assigned to a definition.
///
/// Each key holds a list of values; calling `metadata` again with the same
/// key on the same definition appends to that list. Metadata may be set on
/// APIs, endpoints, attributes, and on user types and result types (where
/// it lands on the wrapped attribute). Anywhere else the call is reported
/// as an invalid use of `Metadata`.
///
/// Keys are free-form; generators give some of them a meaning, see
/// [`crate::expr::metadata::keys`].
///
/// ```text
/// user_type("Account", {
///     attribute("service", String, {
///         metadata("struct:field:name", ["ServiceName"])
///         metadata("struct:tag:json", ["service,omitempty"])
///     })
/// })
/// ```
#[track_caller]
pub fn metadata<I, S>(ctx: &mut EvalContext, name: &str, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let location = Location::caller();
    match ctx.current_mut().and_then(Definition::as_annotatable) {
        Some(target) => {
            MetadataExpr::append(target.metadata_slot(), name, values);
            debug!(key = name, "metadata attached");
        }
        None => ctx.incompatible_dsl("Metadata", location),
    }
}
