use serde::{Deserialize, Serialize};

use super::attribute::AttributeExpr;
use super::metadata::MetadataExpr;

/// API Definition
///
/// Top-level description of the API. A design holds at most one.
///
/// # Example
/// ```text
/// api("calc", {
///     description("Calculator API")
///     metadata("swagger:extension:x-apis-json", "{}")
/// })
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiExpr {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataExpr>,
}

impl ApiExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            metadata: None,
        }
    }
}

/// Service Definition
///
/// Groups endpoints. Services do not carry metadata of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceExpr {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<EndpointExpr>,
}

impl ServiceExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            endpoints: Vec::new(),
        }
    }

    pub fn endpoint(&self, name: &str) -> Option<&EndpointExpr> {
        self.endpoints.iter().find(|endpoint| endpoint.name == name)
    }
}

/// Endpoint Definition
///
/// A single operation of a service, optionally with a payload attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointExpr {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<AttributeExpr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataExpr>,
}

impl EndpointExpr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            payload: None,
            metadata: None,
        }
    }
}
