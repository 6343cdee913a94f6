use std::sync::LazyLock;

use super::schema::load_schema;
use crate::context::ParseContext;
use crate::dispatch::{load_object, FixedFieldMap, PatternFieldMap};
use crate::model::{Header, Response};
use crate::node::ParseNode;
use crate::Result;

static RESPONSE_FIXED_FIELDS: LazyLock<FixedFieldMap<Response>> = LazyLock::new(|| {
    FixedFieldMap::<Response>::new()
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("schema", |o, n, ctx| {
            o.schema = Some(load_schema(n, ctx)?);
            Ok(())
        })
        .field("headers", |o, n, ctx| {
            o.headers = n.create_map(ctx, load_header)?;
            Ok(())
        })
        .field("examples", |o, n, _| {
            o.examples = Some(n.create_any());
            Ok(())
        })
});

static RESPONSE_PATTERN_FIELDS: LazyLock<PatternFieldMap<Response>> =
    LazyLock::new(PatternFieldMap::extensions);

static HEADER_FIXED_FIELDS: LazyLock<FixedFieldMap<Header>> = LazyLock::new(|| {
    FixedFieldMap::<Header>::new()
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("type", |o, n, _| {
            o.header_type = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("format", |o, n, _| {
            o.format = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("items", |o, n, ctx| {
            o.items = Some(load_schema(n, ctx)?);
            Ok(())
        })
        .field("default", |o, n, _| {
            o.default = Some(n.create_any());
            Ok(())
        })
});

static HEADER_PATTERN_FIELDS: LazyLock<PatternFieldMap<Header>> =
    LazyLock::new(PatternFieldMap::extensions);

const RESPONSE_REQUIRED: &[&str] = &["description"];

pub fn load_response(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Response> {
    if let Some(pointer) = node.reference_pointer() {
        return Ok(Response {
            reference: Some(pointer.to_string()),
            ..Response::default()
        });
    }
    load_object(
        node,
        &RESPONSE_FIXED_FIELDS,
        &RESPONSE_PATTERN_FIELDS,
        RESPONSE_REQUIRED,
        ctx,
    )
}

pub fn load_header(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Header> {
    load_object(node, &HEADER_FIXED_FIELDS, &HEADER_PATTERN_FIELDS, &[], ctx)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ReadOptions;

    #[rstest::rstest]
    fn test_response_with_headers() {
        let value = json!({
            "description": "ok",
            "schema": {"type": "array", "items": {"$ref": "#/definitions/Pet"}},
            "headers": {"X-Rate-Limit": {"type": "integer", "description": "calls per hour"}},
            "examples": {"application/json": []}
        });
        let mut ctx = ParseContext::new(ReadOptions::default());
        let response = load_response(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(response.description.as_deref(), Some("ok"));
        assert_eq!(
            response.headers["X-Rate-Limit"].header_type.as_deref(),
            Some("integer")
        );
        assert_eq!(response.examples, Some(json!({"application/json": []})));
        assert!(ctx.diagnostics().is_empty());
    }

    #[rstest::rstest]
    fn test_missing_description() {
        let value = json!({"schema": {"type": "string"}});
        let mut ctx = ParseContext::new(ReadOptions::default());
        load_response(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(ctx.diagnostics()[0].field(), Some("description"));
    }
}
