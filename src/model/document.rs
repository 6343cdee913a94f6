use indexmap::IndexMap;

use super::{
    Extensions, ExternalDocs, Info, Parameter, Paths, Response, Schema, SecurityRequirement,
    SecurityScheme, Tag,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub info: Option<Info>,
    /// Synthesized from `schemes`, `host` and `basePath` after dispatch.
    pub servers: Vec<Server>,
    pub paths: Paths,
    pub components: Components,
    pub security_requirements: Vec<SecurityRequirement>,
    pub tags: Vec<Tag>,
    pub external_docs: Option<ExternalDocs>,
    pub extensions: Extensions,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    pub schemas: IndexMap<String, Schema>,
    pub parameters: IndexMap<String, Parameter>,
    pub responses: IndexMap<String, Response>,
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Server {
    pub url: String,
}

impl Server {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
