use std::fmt;

use indexmap::IndexMap;

use super::{Extensions, ExternalDocs, Parameter, Response, SecurityRequirement};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paths {
    pub items: IndexMap<String, PathItem>,
    pub extensions: Extensions,
}

impl Paths {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&PathItem> {
        self.items.get(path)
    }

    pub fn operations_mut(&mut self) -> impl Iterator<Item = &mut Operation> {
        self.items
            .values_mut()
            .flat_map(|item| item.operations.values_mut())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub reference: Option<String>,
    pub operations: IndexMap<HttpMethod, Operation>,
    pub parameters: Vec<Parameter>,
    pub extensions: Extensions,
}

impl PathItem {
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocs>,
    pub operation_id: Option<String>,
    /// `None` until either the operation or the document declares media types.
    pub consumes: Option<Vec<String>>,
    pub produces: Option<Vec<String>>,
    pub parameters: Vec<Parameter>,
    pub responses: Responses,
    pub schemes: Vec<String>,
    pub deprecated: bool,
    pub security: Option<Vec<SecurityRequirement>>,
    pub extensions: Extensions,
}

/// Status code (or `default`) → response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Responses {
    pub entries: IndexMap<String, Response>,
    pub extensions: Extensions,
}

impl Responses {
    pub fn get(&self, status: &str) -> Option<&Response> {
        self.entries.get(status)
    }
}
