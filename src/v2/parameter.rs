use std::sync::LazyLock;

use super::schema::load_schema;
use crate::context::ParseContext;
use crate::dispatch::{load_object, FixedFieldMap, PatternFieldMap};
use crate::model::Parameter;
use crate::node::ParseNode;
use crate::Result;

static PARAMETER_FIXED_FIELDS: LazyLock<FixedFieldMap<Parameter>> = LazyLock::new(|| {
    FixedFieldMap::<Parameter>::new()
        .field("name", |o, n, _| {
            o.name = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("in", |o, n, _| {
            o.location = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("required", |o, n, _| {
            o.required = n.get_bool()?;
            Ok(())
        })
        .field("schema", |o, n, ctx| {
            o.schema = Some(load_schema(n, ctx)?);
            Ok(())
        })
        .field("type", |o, n, _| {
            o.parameter_type = Some(n.get_scalar_value()?);
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
        .field("collectionFormat", |o, n, _| {
            o.collection_format = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("allowEmptyValue", |o, n, _| {
            o.allow_empty_value = n.get_bool()?;
            Ok(())
        })
        .field("default", |o, n, _| {
            o.default = Some(n.create_any());
            Ok(())
        })
        .field("enum", |o, n, _| {
            o.enum_values = n.create_simple_list(|item| Ok(item.create_any()))?;
            Ok(())
        })
});

static PARAMETER_PATTERN_FIELDS: LazyLock<PatternFieldMap<Parameter>> =
    LazyLock::new(PatternFieldMap::extensions);

const PARAMETER_REQUIRED: &[&str] = &["name", "in"];

pub fn load_parameter(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Parameter> {
    if let Some(pointer) = node.reference_pointer() {
        return Ok(Parameter {
            reference: Some(pointer.to_string()),
            ..Parameter::default()
        });
    }
    load_object(
        node,
        &PARAMETER_FIXED_FIELDS,
        &PARAMETER_PATTERN_FIELDS,
        PARAMETER_REQUIRED,
        ctx,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ErrorKind, ReadOptions};

    #[rstest::rstest]
    fn test_query_parameter() {
        let value = json!({
            "name": "limit",
            "in": "query",
            "type": "integer",
            "required": "false",
            "default": 20,
            "x-example": 5
        });
        let mut ctx = ParseContext::new(ReadOptions::default());
        let parameter = load_parameter(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(parameter.name.as_deref(), Some("limit"));
        assert_eq!(parameter.location.as_deref(), Some("query"));
        assert!(!parameter.required);
        assert_eq!(parameter.default, Some(json!(20)));
        assert_eq!(parameter.extensions["x-example"], json!(5));
        assert!(ctx.diagnostics().is_empty());
    }

    #[rstest::rstest]
    fn test_reference_parameter_skips_required_check() {
        let value = json!({"$ref": "#/parameters/limit"});
        let mut ctx = ParseContext::new(ReadOptions::default());
        let parameter = load_parameter(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(parameter.reference.as_deref(), Some("#/parameters/limit"));
        assert!(ctx.diagnostics().is_empty());
    }

    #[rstest::rstest]
    fn test_body_parameter_missing_in() {
        let value = json!({"name": "pet", "schema": {"$ref": "#/definitions/Pet"}});
        let mut ctx = ParseContext::new(ReadOptions::default());
        let parameter = load_parameter(&ParseNode::root(&value), &mut ctx).unwrap();
        assert!(parameter.schema.unwrap().is_reference());
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].field(), Some("in"));
    }

    #[rstest::rstest]
    fn test_unparseable_flag_is_fatal() {
        let value = json!({"name": "a", "in": "query", "required": "sometimes"});
        let mut ctx = ParseContext::new(ReadOptions::default());
        let err = load_parameter(&ParseNode::root(&value), &mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidScalar);
    }
}
