use indexmap::IndexMap;
use serde_json::Value;

use super::{Extensions, ExternalDocs};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Set for `$ref` markers; the target is never inlined.
    pub reference: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub schema_type: Option<String>,
    pub format: Option<String>,
    pub required: Vec<String>,
    pub properties: IndexMap<String, Schema>,
    pub additional_properties: Option<AdditionalProperties>,
    pub items: Option<Box<Schema>>,
    pub all_of: Vec<Schema>,
    pub enum_values: Vec<Value>,
    pub default: Option<Value>,
    pub example: Option<Value>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub min_items: Option<i64>,
    pub max_items: Option<i64>,
    pub unique_items: bool,
    pub read_only: bool,
    pub discriminator: Option<String>,
    pub external_docs: Option<ExternalDocs>,
    pub extensions: Extensions,
}

impl Schema {
    pub fn reference(pointer: impl Into<String>) -> Self {
        Self {
            reference: Some(pointer.into()),
            ..Self::default()
        }
    }

    pub fn is_reference(&self) -> bool {
        self.reference.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<Schema>),
}
