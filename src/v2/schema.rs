use std::sync::LazyLock;

use serde_json::Value;

use super::info::load_external_docs;
use crate::context::ParseContext;
use crate::dispatch::{load_object, FixedFieldMap, PatternFieldMap};
use crate::model::{AdditionalProperties, Schema};
use crate::node::ParseNode;
use crate::Result;

static SCHEMA_FIXED_FIELDS: LazyLock<FixedFieldMap<Schema>> = LazyLock::new(|| {
    FixedFieldMap::<Schema>::new()
        .field("title", |o, n, _| {
            o.title = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("type", |o, n, _| {
            o.schema_type = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("format", |o, n, _| {
            o.format = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("required", |o, n, _| {
            o.required = n.create_simple_list(|item| item.get_scalar_value())?;
            Ok(())
        })
        .field("properties", |o, n, ctx| {
            o.properties = n.create_map(ctx, load_schema)?;
            Ok(())
        })
        .field("additionalProperties", |o, n, ctx| {
            o.additional_properties = Some(match n.value() {
                Value::Bool(allowed) => AdditionalProperties::Allowed(*allowed),
                _ => AdditionalProperties::Schema(Box::new(load_schema(n, ctx)?)),
            });
            Ok(())
        })
        .field("items", |o, n, ctx| {
            o.items = Some(Box::new(load_schema(n, ctx)?));
            Ok(())
        })
        .field("allOf", |o, n, ctx| {
            o.all_of = n.create_list(ctx, load_schema)?;
            Ok(())
        })
        .field("enum", |o, n, _| {
            o.enum_values = n.create_simple_list(|item| Ok(item.create_any()))?;
            Ok(())
        })
        .field("default", |o, n, _| {
            o.default = Some(n.create_any());
            Ok(())
        })
        .field("example", |o, n, _| {
            o.example = Some(n.create_any());
            Ok(())
        })
        .field("pattern", |o, n, _| {
            o.pattern = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("minimum", |o, n, _| {
            o.minimum = Some(n.get_number()?);
            Ok(())
        })
        .field("maximum", |o, n, _| {
            o.maximum = Some(n.get_number()?);
            Ok(())
        })
        .field("minLength", |o, n, _| {
            o.min_length = Some(n.get_integer()?);
            Ok(())
        })
        .field("maxLength", |o, n, _| {
            o.max_length = Some(n.get_integer()?);
            Ok(())
        })
        .field("minItems", |o, n, _| {
            o.min_items = Some(n.get_integer()?);
            Ok(())
        })
        .field("maxItems", |o, n, _| {
            o.max_items = Some(n.get_integer()?);
            Ok(())
        })
        .field("uniqueItems", |o, n, _| {
            o.unique_items = n.get_bool()?;
            Ok(())
        })
        .field("readOnly", |o, n, _| {
            o.read_only = n.get_bool()?;
            Ok(())
        })
        .field("discriminator", |o, n, _| {
            o.discriminator = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("externalDocs", |o, n, ctx| {
            o.external_docs = Some(load_external_docs(n, ctx)?);
            Ok(())
        })
});

static SCHEMA_PATTERN_FIELDS: LazyLock<PatternFieldMap<Schema>> =
    LazyLock::new(PatternFieldMap::extensions);

/// A `$ref` marker loads as a reference-only schema; its siblings are ignored.
pub fn load_schema(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Schema> {
    if let Some(pointer) = node.reference_pointer() {
        return Ok(Schema::reference(pointer));
    }
    load_object(node, &SCHEMA_FIXED_FIELDS, &SCHEMA_PATTERN_FIELDS, &[], ctx)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ErrorKind, ReadOptions};

    fn load(value: &Value) -> Result<Schema> {
        let mut ctx = ParseContext::new(ReadOptions::default());
        load_schema(&ParseNode::root(value), &mut ctx)
    }

    #[rstest::rstest]
    fn test_nested_properties_and_items() {
        let value = json!({
            "type": "object",
            "required": ["id"],
            "properties": {
                "id": {"type": "integer", "format": "int64", "minimum": 1},
                "tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}
            },
            "additionalProperties": false
        });
        let schema = load(&value).unwrap();

        assert_eq!(schema.schema_type.as_deref(), Some("object"));
        assert_eq!(schema.required, vec!["id"]);
        assert_eq!(schema.properties["id"].minimum, Some(1.0));
        let items = schema.properties["tags"].items.as_deref().unwrap();
        assert_eq!(items.reference.as_deref(), Some("#/definitions/Tag"));
        assert_eq!(
            schema.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        );
    }

    #[rstest::rstest]
    fn test_reference_marker_ignores_siblings() {
        let value = json!({"$ref": "#/definitions/Pet", "description": "ignored"});
        let schema = load(&value).unwrap();
        assert!(schema.is_reference());
        assert!(schema.description.is_none());
    }

    #[rstest::rstest]
    fn test_all_of_and_enum() {
        let value = json!({
            "allOf": [{"$ref": "#/definitions/Base"}, {"properties": {"bark": {"type": "boolean"}}}],
            "enum": ["a", 1, null]
        });
        let schema = load(&value).unwrap();
        assert_eq!(schema.all_of.len(), 2);
        assert!(schema.all_of[1].properties.contains_key("bark"));
        assert_eq!(schema.enum_values, vec![json!("a"), json!(1), json!(null)]);
    }

    #[rstest::rstest]
    fn test_scalar_properties_is_structural() {
        let value = json!({"properties": "nope"});
        let err = load(&value).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
        assert_eq!(err.location.unwrap().as_str(), "#/properties");
    }

    #[rstest::rstest]
    fn test_recursion_is_bounded() {
        let mut value = json!({"type": "string"});
        for _ in 0..10 {
            value = json!({"items": value});
        }
        let mut ctx = ParseContext::new(ReadOptions::default().with_max_depth(5));
        let err = load_schema(&ParseNode::root(&value), &mut ctx).unwrap_err();
        assert_eq!(err.kind, ErrorKind::DepthLimit);
    }
}
