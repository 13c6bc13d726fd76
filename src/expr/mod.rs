//! Design expressions built by the DSL.
//!
//! The evaluation context keeps the definitions under construction on a stack
//! of [`Definition`] values. DSL functions look at the top of that stack to
//! decide what they apply to; [`Definition::as_annotatable`] is the single
//! place that decides which definitions can carry metadata.

pub mod api;
pub mod attribute;
pub mod metadata;

pub use api::{ApiExpr, EndpointExpr, ServiceExpr};
pub use attribute::{AttributeExpr, CompositeExpr, DataType, ResultTypeExpr, UserTypeExpr};
pub use metadata::MetadataExpr;

use serde::{Deserialize, Serialize};

/// Kind of a definition, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum DefinitionKind {
    #[strum(serialize = "API")]
    Api,
    #[strum(serialize = "service")]
    Service,
    #[strum(serialize = "endpoint")]
    Endpoint,
    #[strum(serialize = "payload")]
    Payload,
    #[strum(serialize = "attribute")]
    Attribute,
    #[strum(serialize = "type")]
    UserType,
    #[strum(serialize = "result type")]
    ResultType,
}

/// A definition under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Api(ApiExpr),
    Service(ServiceExpr),
    Endpoint(EndpointExpr),
    Attribute(AttributeExpr),
    UserType(UserTypeExpr),
    ResultType(ResultTypeExpr),
}

/// Borrowed view of a definition that can own metadata.
pub enum Annotatable<'a> {
    /// Stores metadata on the wrapped attribute.
    Composite(&'a mut dyn CompositeExpr),
    Attribute(&'a mut AttributeExpr),
    Api(&'a mut ApiExpr),
    Endpoint(&'a mut EndpointExpr),
}

impl<'a> Annotatable<'a> {
    /// The metadata slot of the resolved owner.
    pub fn metadata_slot(self) -> &'a mut Option<MetadataExpr> {
        match self {
            Annotatable::Composite(composite) => &mut composite.attribute_mut().metadata,
            Annotatable::Attribute(attribute) => &mut attribute.metadata,
            Annotatable::Api(api) => &mut api.metadata,
            Annotatable::Endpoint(endpoint) => &mut endpoint.metadata,
        }
    }
}

impl Definition {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::Api(_) => DefinitionKind::Api,
            Definition::Service(_) => DefinitionKind::Service,
            Definition::Endpoint(_) => DefinitionKind::Endpoint,
            Definition::Attribute(_) => DefinitionKind::Attribute,
            Definition::UserType(_) => DefinitionKind::UserType,
            Definition::ResultType(_) => DefinitionKind::ResultType,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Definition::Api(api) => &api.name,
            Definition::Service(service) => &service.name,
            Definition::Endpoint(endpoint) => &endpoint.name,
            Definition::Attribute(attribute) => &attribute.name,
            Definition::UserType(user_type) => &user_type.name,
            Definition::ResultType(result_type) => result_type.name(),
        }
    }

    /// Resolve the definition to its metadata owner, composites first.
    /// Returns `None` for kinds that do not support metadata.
    pub fn as_annotatable(&mut self) -> Option<Annotatable<'_>> {
        match self {
            Definition::UserType(user_type) => Some(Annotatable::Composite(user_type)),
            Definition::ResultType(result_type) => Some(Annotatable::Composite(result_type)),
            Definition::Attribute(attribute) => Some(Annotatable::Attribute(attribute)),
            Definition::Api(api) => Some(Annotatable::Api(api)),
            Definition::Endpoint(endpoint) => Some(Annotatable::Endpoint(endpoint)),
            Definition::Service(_) => None,
        }
    }

    /// Metadata recorded on the definition, if any.
    pub fn metadata(&self) -> Option<&MetadataExpr> {
        match self {
            Definition::UserType(user_type) => user_type.attribute().metadata.as_ref(),
            Definition::ResultType(result_type) => result_type.attribute().metadata.as_ref(),
            Definition::Attribute(attribute) => attribute.metadata.as_ref(),
            Definition::Api(api) => api.metadata.as_ref(),
            Definition::Endpoint(endpoint) => endpoint.metadata.as_ref(),
            Definition::Service(_) => None,
        }
    }

    /// The object attribute that receives child attributes, if the
    /// definition accepts fields.
    pub fn fields_owner_mut(&mut self) -> Option<&mut AttributeExpr> {
        match self {
            Definition::UserType(user_type) => Some(user_type.attribute_mut()),
            Definition::ResultType(result_type) => Some(result_type.attribute_mut()),
            Definition::Attribute(attribute) if attribute.data_type.is_object() => Some(attribute),
            _ => None,
        }
    }

    /// Description slot, if the definition can be described.
    pub fn description_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            Definition::Api(api) => Some(&mut api.description),
            Definition::Service(service) => Some(&mut service.description),
            Definition::Endpoint(endpoint) => Some(&mut endpoint.description),
            Definition::Attribute(attribute) => Some(&mut attribute.description),
            Definition::UserType(user_type) => Some(&mut user_type.attribute_mut().description),
            Definition::ResultType(result_type) => {
                Some(&mut result_type.attribute_mut().description)
            }
        }
    }
}

/// Root of a finished design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootExpr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiExpr>,
    #[serde(default)]
    pub services: Vec<ServiceExpr>,
    #[serde(default)]
    pub types: Vec<UserTypeExpr>,
    #[serde(default)]
    pub result_types: Vec<ResultTypeExpr>,
}

impl RootExpr {
    pub fn service(&self, name: &str) -> Option<&ServiceExpr> {
        self.services.iter().find(|service| service.name == name)
    }

    pub fn user_type(&self, name: &str) -> Option<&UserTypeExpr> {
        self.types.iter().find(|user_type| user_type.name == name)
    }

    pub fn result_type(&self, name: &str) -> Option<&ResultTypeExpr> {
        self.result_types
            .iter()
            .find(|result_type| result_type.name() == name)
    }

    /// Whether a service, type or result type already uses `name`.
    pub fn is_defined(&self, kind: DefinitionKind, name: &str) -> bool {
        match kind {
            DefinitionKind::Api => self.api.is_some(),
            DefinitionKind::Service => self.service(name).is_some(),
            DefinitionKind::UserType | DefinitionKind::ResultType => {
                self.user_type(name).is_some() || self.result_type(name).is_some()
            }
            DefinitionKind::Endpoint | DefinitionKind::Payload | DefinitionKind::Attribute => false,
        }
    }
}
