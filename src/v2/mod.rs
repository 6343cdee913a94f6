//! Swagger 2.0 field tables and loaders.

mod document;
mod info;
mod parameter;
mod paths;
mod response;
mod schema;
mod security;
pub mod synthesis;

pub use document::load_openapi;
pub use info::{load_contact, load_external_docs, load_info, load_license, load_tag};
pub use parameter::load_parameter;
pub use paths::{load_operation, load_path_item, load_paths, load_responses};
pub use response::{load_header, load_response};
pub use schema::load_schema;
pub use security::{load_security_requirement, load_security_scheme};
