//! Target object model for Swagger 2.0 documents.
//!
//! Every type starts from `Default` and is filled in place by the field
//! handlers in [`crate::v2`].

mod document;
mod info;
mod parameter;
mod paths;
mod response;
mod schema;
mod security;

use indexmap::IndexMap;
use serde_json::Value;

pub use document::{Components, Document, Server};
pub use info::{Contact, ExternalDocs, Info, License, Tag};
pub use paths::{HttpMethod, Operation, PathItem, Paths, Responses};
pub use parameter::Parameter;
pub use response::{Header, Response};
pub use schema::{AdditionalProperties, Schema};
pub use security::{SecurityRequirement, SecurityScheme};

/// `x-` fields, keyed by their full name.
pub type Extensions = IndexMap<String, Value>;

pub trait Extensible {
    fn extensions_mut(&mut self) -> &mut Extensions;

    fn add_extension(&mut self, key: &str, value: Value) {
        self.extensions_mut().insert(key.to_string(), value);
    }
}

macro_rules! impl_extensible {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Extensible for $ty {
                fn extensions_mut(&mut self) -> &mut Extensions {
                    &mut self.extensions
                }
            }
        )*
    };
}

impl_extensible!(
    Document,
    Info,
    Contact,
    License,
    ExternalDocs,
    Tag,
    Paths,
    PathItem,
    Operation,
    Responses,
    Response,
    Header,
    Parameter,
    Schema,
    SecurityScheme,
);
