use indexmap::IndexMap;

use super::Extensions;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecurityScheme {
    /// `basic`, `apiKey` or `oauth2`.
    pub scheme_type: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub flow: Option<String>,
    pub authorization_url: Option<String>,
    pub token_url: Option<String>,
    pub scopes: IndexMap<String, String>,
    pub extensions: Extensions,
}

/// Scheme name → scopes required from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityRequirement {
    pub schemes: IndexMap<String, Vec<String>>,
}
