use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known metadata keys read by downstream generators.
pub mod keys {
    /// Overrides the generated struct field name. Applicable to attributes.
    pub const STRUCT_FIELD_NAME: &str = "struct:field:name";
    /// Prefix for struct field tags, e.g. `struct:tag:json`.
    pub const STRUCT_TAG_PREFIX: &str = "struct:tag:";
    /// Operation summary. Applicable to endpoints.
    pub const SWAGGER_SUMMARY: &str = "swagger:summary";
    /// Prefix for swagger tags, e.g. `swagger:tag:Backend`.
    pub const SWAGGER_TAG_PREFIX: &str = "swagger:tag:";
    /// Prefix for swagger extensions, e.g. `swagger:extension:x-apis-json`.
    pub const SWAGGER_EXTENSION_PREFIX: &str = "swagger:extension:";
}

/// Metadata attached to a design expression.
///
/// Each key maps to an ordered list of values. Appending to an existing key
/// extends its list, so repeated `Metadata` calls with the same key build up
/// the values in call order. Keys iterate in sorted order.
///
/// # Example
/// ```text
/// attribute("service", String, {
///     metadata("struct:field:name", "ServiceName")
///     metadata("struct:tag:json", "service,omitempty")
/// })
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataExpr {
    entries: BTreeMap<String, Vec<String>>,
}

impl MetadataExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `values` under `name`, creating the store on first use.
    ///
    /// Returns the store held by `slot` so owners can keep working with it.
    pub fn append<'a, I, S>(slot: &'a mut Option<Self>, name: &str, values: I) -> &'a mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metadata = slot.get_or_insert_with(Self::new);
        metadata.push(name, values);
        metadata
    }

    /// Append `values` under `name` on an existing store.
    pub fn push<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(name.to_string())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Last value recorded for `name`, if any.
    pub fn last(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field name override set with `struct:field:name`.
    pub fn struct_field_name(&self) -> Option<&str> {
        self.last(keys::STRUCT_FIELD_NAME)
    }

    /// Value of the struct tag `tag`, with multiple values joined by a space.
    pub fn struct_tag(&self, tag: &str) -> Option<String> {
        let key = format!("{}{}", keys::STRUCT_TAG_PREFIX, tag);
        self.get(&key).map(|values| values.join(" "))
    }

    /// All struct tags as `(tag, value)` pairs, in tag order.
    pub fn struct_tags(&self) -> Vec<(&str, String)> {
        self.iter()
            .filter_map(|(key, values)| {
                key.strip_prefix(keys::STRUCT_TAG_PREFIX)
                    .map(|tag| (tag, values.join(" ")))
            })
            .collect()
    }

    pub fn swagger_summary(&self) -> Option<&str> {
        self.get(keys::SWAGGER_SUMMARY)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Swagger tag names. Keys such as `swagger:tag:Backend:desc` describe
    /// an existing tag and are not tags themselves.
    pub fn swagger_tags(&self) -> Vec<&str> {
        self.keys()
            .filter_map(|key| key.strip_prefix(keys::SWAGGER_TAG_PREFIX))
            .filter(|name| !name.is_empty() && !name.contains(':'))
            .collect()
    }

    /// Swagger extensions as `(name, value)` pairs. Extensions without a
    /// value are skipped.
    pub fn swagger_extensions(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(key, values)| {
                let name = key.strip_prefix(keys::SWAGGER_EXTENSION_PREFIX)?;
                values.first().map(|value| (name, value.as_str()))
            })
            .collect()
    }
}
