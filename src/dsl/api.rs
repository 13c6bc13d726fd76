use crate::eval::{EvalContext, EvalError, Location};
use crate::expr::{ApiExpr, AttributeExpr, Definition, DefinitionKind, EndpointExpr, ServiceExpr};

/// Define the API. Top level only; a design has at most one API.
#[track_caller]
pub fn api<F>(ctx: &mut EvalContext, name: &str, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    if !ctx.is_top_level() {
        ctx.incompatible_dsl("API", location);
        return;
    }
    if ctx.root().is_defined(DefinitionKind::Api, name) {
        ctx.report_error(EvalError::already_defined(
            DefinitionKind::Api.to_string(),
            name,
            location,
        ));
        return;
    }

    if let Some(Definition::Api(api)) = ctx.execute(Definition::Api(ApiExpr::new(name)), dsl) {
        ctx.root_mut().api = Some(api);
    }
}

/// Define a service. Top level only.
#[track_caller]
pub fn service<F>(ctx: &mut EvalContext, name: &str, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    if !ctx.is_top_level() {
        ctx.incompatible_dsl("Service", location);
        return;
    }
    if ctx.root().is_defined(DefinitionKind::Service, name) {
        ctx.report_error(EvalError::already_defined(
            DefinitionKind::Service.to_string(),
            name,
            location,
        ));
        return;
    }

    if let Some(Definition::Service(service)) =
        ctx.execute(Definition::Service(ServiceExpr::new(name)), dsl)
    {
        ctx.root_mut().services.push(service);
    }
}

/// Define an endpoint of the enclosing service.
#[track_caller]
pub fn endpoint<F>(ctx: &mut EvalContext, name: &str, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    let duplicate = match ctx.current() {
        Some(Definition::Service(service)) => service.endpoint(name).is_some(),
        _ => {
            ctx.incompatible_dsl("Endpoint", location);
            return;
        }
    };
    if duplicate {
        ctx.report_error(EvalError::already_defined(
            DefinitionKind::Endpoint.to_string(),
            name,
            location,
        ));
        return;
    }

    let Some(Definition::Endpoint(endpoint)) =
        ctx.execute(Definition::Endpoint(EndpointExpr::new(name)), dsl)
    else {
        return;
    };
    if let Some(Definition::Service(service)) = ctx.current_mut() {
        service.endpoints.push(endpoint);
    }
}

/// Define the payload of the enclosing endpoint as an object whose fields
/// are declared with `attribute`.
#[track_caller]
pub fn payload<F>(ctx: &mut EvalContext, dsl: F)
where
    F: FnOnce(&mut EvalContext),
{
    let location = Location::caller();
    let endpoint_name = match ctx.current() {
        Some(Definition::Endpoint(EndpointExpr {
            payload: Some(existing),
            ..
        })) => {
            let error = EvalError::already_defined(
                DefinitionKind::Payload.to_string(),
                &existing.name,
                location,
            );
            ctx.report_error(error);
            return;
        }
        Some(Definition::Endpoint(endpoint)) => endpoint.name.clone(),
        _ => {
            ctx.incompatible_dsl("Payload", location);
            return;
        }
    };

    let payload = AttributeExpr::object(format!("{}Payload", endpoint_name));
    let Some(Definition::Attribute(payload)) = ctx.execute(Definition::Attribute(payload), dsl)
    else {
        return;
    };
    if let Some(Definition::Endpoint(endpoint)) = ctx.current_mut() {
        endpoint.payload = Some(payload);
    }
}
