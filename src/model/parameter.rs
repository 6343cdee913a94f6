use serde_json::Value;

use super::{Extensions, Schema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    pub reference: Option<String>,
    pub name: Option<String>,
    /// `query`, `header`, `path`, `formData` or `body`.
    pub location: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub schema: Option<Schema>,
    pub parameter_type: Option<String>,
    pub format: Option<String>,
    pub items: Option<Schema>,
    pub collection_format: Option<String>,
    pub allow_empty_value: bool,
    pub default: Option<Value>,
    pub enum_values: Vec<Value>,
    pub extensions: Extensions,
}
