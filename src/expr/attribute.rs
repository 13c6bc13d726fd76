use std::fmt;

use serde::{Deserialize, Serialize};

use super::metadata::MetadataExpr;

/// Type of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataType {
    Boolean,
    Int,
    Int64,
    Float64,
    String,
    Bytes,
    Any,
    /// Object whose fields are the attribute's child attributes.
    Object,
    ArrayOf(Box<DataType>),
    MapOf(Box<DataType>, Box<DataType>),
    /// Reference to a user type or result type by name.
    Named(String),
}

impl DataType {
    pub fn is_object(&self) -> bool {
        matches!(self, DataType::Object)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "Boolean"),
            Self::Int => write!(f, "Int"),
            Self::Int64 => write!(f, "Int64"),
            Self::Float64 => write!(f, "Float64"),
            Self::String => write!(f, "String"),
            Self::Bytes => write!(f, "Bytes"),
            Self::Any => write!(f, "Any"),
            Self::Object => write!(f, "Object"),
            Self::ArrayOf(elem) => write!(f, "ArrayOf({})", elem),
            Self::MapOf(key, value) => write!(f, "MapOf({}, {})", key, value),
            Self::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Attribute Definition
///
/// Describes a data structure: a field of a type, an endpoint payload, or the
/// attribute wrapped by a user type or result type. Object attributes hold
/// their fields as child attributes.
///
/// # Example
/// ```text
/// attribute("service", String, {
///     description("Name of service")
///     metadata("struct:field:name", "ServiceName")
/// })
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeExpr {
    pub name: String,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttributeExpr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MetadataExpr>,
}

impl AttributeExpr {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            description: None,
            fields: Vec::new(),
            metadata: None,
        }
    }

    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, DataType::Object)
    }

    /// Child attribute by name.
    pub fn field(&self, name: &str) -> Option<&AttributeExpr> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Capability of definitions that wrap an attribute.
///
/// Anything attached to a composite "through" the DSL (metadata, fields,
/// description) physically lives on the wrapped attribute.
pub trait CompositeExpr {
    fn attribute(&self) -> &AttributeExpr;

    fn attribute_mut(&mut self) -> &mut AttributeExpr;

    /// Replace the wrapped attribute, returning the previous one.
    fn set_attribute(&mut self, attribute: AttributeExpr) -> AttributeExpr {
        std::mem::replace(self.attribute_mut(), attribute)
    }
}

/// Named object type defined at the top level of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTypeExpr {
    pub name: String,
    pub attribute: AttributeExpr,
}

impl UserTypeExpr {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            attribute: AttributeExpr::object(name.clone()),
            name,
        }
    }
}

impl CompositeExpr for UserTypeExpr {
    fn attribute(&self) -> &AttributeExpr {
        &self.attribute
    }

    fn attribute_mut(&mut self) -> &mut AttributeExpr {
        &mut self.attribute
    }
}

/// User type that also carries a media type identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTypeExpr {
    pub identifier: String,
    pub user_type: UserTypeExpr,
}

impl ResultTypeExpr {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            user_type: UserTypeExpr::new(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.user_type.name
    }
}

impl CompositeExpr for ResultTypeExpr {
    fn attribute(&self) -> &AttributeExpr {
        self.user_type.attribute()
    }

    fn attribute_mut(&mut self) -> &mut AttributeExpr {
        self.user_type.attribute_mut()
    }
}
