use crate::eval::{EvalContext, EvalError, Location};
use crate::expr::{
    AttributeExpr, DataType, Definition, DefinitionKind, ResultTypeExpr, UserTypeExpr,
};

/// Define a named object type. Top level only.
///
/// ```text
/// user_type("Account", {
///     attribute("id", Int)
///     attribute("service", String, {
///         metadata("struct:field:name", ["ServiceName"])
///     })
/// })
/// ```
#[track_caller]
pub fn user_type<F>(ctx: &mut EvalContext, name: &str, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    if !check_top_level_type(ctx, "Type", DefinitionKind::UserType, name, &location) {
        return;
    }

    if let Some(Definition::UserType(user_type)) =
        ctx.execute(Definition::UserType(UserTypeExpr::new(name)), dsl)
    {
        ctx.root_mut().types.push(user_type);
    }
}

/// Define a result type identified by a media type identifier. Top level only.
#[track_caller]
pub fn result_type<F>(ctx: &mut EvalContext, identifier: &str, name: &str, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    if !check_top_level_type(ctx, "ResultType", DefinitionKind::ResultType, name, &location) {
        return;
    }

    if let Some(Definition::ResultType(result_type)) =
        ctx.execute(Definition::ResultType(ResultTypeExpr::new(identifier, name)), dsl)
    {
        ctx.root_mut().result_types.push(result_type);
    }
}

fn check_top_level_type(
    ctx: &mut EvalContext,
    dsl: &str,
    kind: DefinitionKind,
    name: &str,
    location: &Location,
) -> bool {
    if !ctx.is_top_level() {
        ctx.incompatible_dsl(dsl, location.clone());
        return false;
    }
    if ctx.root().is_defined(kind, name) {
        ctx.report_error(EvalError::already_defined(
            kind.to_string(),
            name,
            location.clone(),
        ));
        return false;
    }
    true
}

/// Add a field to the enclosing type, result type, or object attribute.
#[track_caller]
pub fn attribute<F>(ctx: &mut EvalContext, name: &str, data_type: DataType, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    let duplicate = match ctx.current_mut().and_then(Definition::fields_owner_mut) {
        Some(owner) => owner.field(name).is_some(),
        None => {
            ctx.incompatible_dsl("Attribute", location);
            return;
        }
    };
    if duplicate {
        ctx.report_error(EvalError::already_defined(
            DefinitionKind::Attribute.to_string(),
            name,
            location,
        ));
        return;
    }

    let Some(Definition::Attribute(attribute)) =
        ctx.execute(Definition::Attribute(AttributeExpr::new(name, data_type)), dsl)
    else {
        return;
    };
    if let Some(owner) = ctx.current_mut().and_then(Definition::fields_owner_mut) {
        owner.fields.push(attribute);
    }
}
