use indexmap::IndexMap;
use serde_json::Value;

use super::{Extensions, Schema};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub reference: Option<String>,
    pub description: Option<String>,
    pub schema: Option<Schema>,
    pub headers: IndexMap<String, Header>,
    pub examples: Option<Value>,
    pub extensions: Extensions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub description: Option<String>,
    pub header_type: Option<String>,
    pub format: Option<String>,
    pub items: Option<Schema>,
    pub default: Option<Value>,
    pub extensions: Extensions,
}
