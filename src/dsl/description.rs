use crate::eval::{EvalContext, Location};
use crate::expr::Definition;

/// Set the description of the current definition. A later call replaces an
/// earlier one. Composites store the description on the wrapped attribute.
#[track_caller]
pub fn description(ctx: &mut EvalContext, text: &str) {
    let location = Location::caller();
    match ctx.current_mut().and_then(Definition::description_mut) {
        Some(slot) => *slot = Some(text.to_string()),
        None => ctx.incompatible_dsl("Description", location),
    }
}
