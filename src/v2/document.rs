use std::sync::LazyLock;

use super::info::{load_external_docs, load_info, load_tag};
use super::parameter::load_parameter;
use super::paths::load_paths;
use super::response::load_response;
use super::schema::load_schema;
use super::security::{load_security_requirement, load_security_scheme};
use super::synthesis::post_process;
use crate::constants::{DEFINITIONS_POINTER, PARAMETERS_POINTER};
use crate::context::{DeferredValue, ParseContext};
use crate::dispatch::{load_into, FixedFieldMap, PatternFieldMap};
use crate::model::Document;
use crate::node::ParseNode;
use crate::Result;

static DOCUMENT_FIXED_FIELDS: LazyLock<FixedFieldMap<Document>> = LazyLock::new(|| {
    FixedFieldMap::<Document>::new()
        // Only its presence matters.
        .field("swagger", |_, _, _| Ok(()))
        .field("info", |o, n, ctx| {
            o.info = Some(load_info(n, ctx)?);
            Ok(())
        })
        .field("host", |_, n, ctx| {
            ctx.set_deferred(DeferredValue::Host(n.get_scalar_value()?));
            Ok(())
        })
        .field("basePath", |_, n, ctx| {
            ctx.set_deferred(DeferredValue::BasePath(n.get_scalar_value()?));
            Ok(())
        })
        .field("schemes", |_, n, ctx| {
            let schemes = n.create_simple_list(|item| item.get_scalar_value())?;
            ctx.set_deferred(DeferredValue::Schemes(schemes));
            Ok(())
        })
        .field("consumes", |_, n, ctx| {
            let consumes = n.create_simple_list(|item| item.get_scalar_value())?;
            ctx.set_deferred(DeferredValue::Consumes(consumes));
            Ok(())
        })
        .field("produces", |_, n, ctx| {
            let produces = n.create_simple_list(|item| item.get_scalar_value())?;
            ctx.set_deferred(DeferredValue::Produces(produces));
            Ok(())
        })
        .field("paths", |o, n, ctx| {
            o.paths = load_paths(n, ctx)?;
            Ok(())
        })
        .field("definitions", |o, n, ctx| {
            o.components.schemas =
                n.create_map_with_reference(DEFINITIONS_POINTER, ctx, load_schema)?;
            Ok(())
        })
        .field("parameters", |o, n, ctx| {
            o.components.parameters =
                n.create_map_with_reference(PARAMETERS_POINTER, ctx, load_parameter)?;
            Ok(())
        })
        .field("responses", |o, n, ctx| {
            o.components.responses = n.create_map(ctx, load_response)?;
            Ok(())
        })
        .field("securityDefinitions", |o, n, ctx| {
            o.components.security_schemes = n.create_map(ctx, load_security_scheme)?;
            Ok(())
        })
        .field("security", |o, n, ctx| {
            o.security_requirements = n.create_list(ctx, load_security_requirement)?;
            Ok(())
        })
        .field("tags", |o, n, ctx| {
            o.tags = n.create_list(ctx, load_tag)?;
            Ok(())
        })
        .field("externalDocs", |o, n, ctx| {
            o.external_docs = Some(load_external_docs(n, ctx)?);
            Ok(())
        })
});

static DOCUMENT_PATTERN_FIELDS: LazyLock<PatternFieldMap<Document>> =
    LazyLock::new(PatternFieldMap::extensions);

const DOCUMENT_REQUIRED: &[&str] = &["info", "swagger", "paths"];

/// Dispatches the root map, reports missing top-level fields, then runs the
/// post-process synthesis exactly once.
pub fn load_openapi(root: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Document> {
    let mut document = Document::default();
    load_into(
        root,
        &mut document,
        &DOCUMENT_FIXED_FIELDS,
        &DOCUMENT_PATTERN_FIELDS,
        DOCUMENT_REQUIRED,
        ctx,
    )?;
    post_process(&mut document, ctx.deferred());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_document_table_covers_swagger_root_fields() {
        let names: Vec<&str> = DOCUMENT_FIXED_FIELDS.names().collect();
        for name in [
            "swagger",
            "info",
            "host",
            "basePath",
            "schemes",
            "consumes",
            "produces",
            "paths",
            "definitions",
            "parameters",
            "responses",
            "securityDefinitions",
            "security",
            "tags",
            "externalDocs",
        ] {
            assert!(names.contains(&name), "missing handler for {name}");
        }
        assert_eq!(DOCUMENT_PATTERN_FIELDS.len(), 1);
    }

    #[rstest::rstest]
    fn test_required_fields_all_have_handlers() {
        for name in DOCUMENT_REQUIRED {
            assert!(DOCUMENT_FIXED_FIELDS.contains(name));
        }
    }
}
