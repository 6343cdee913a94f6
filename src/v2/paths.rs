use std::sync::LazyLock;

use super::info::load_external_docs;
use super::parameter::load_parameter;
use super::response::load_response;
use super::security::load_security_requirement;
use crate::constants::is_path_key;
use crate::context::ParseContext;
use crate::dispatch::{load_object, FixedFieldMap, PatternFieldMap};
use crate::model::{HttpMethod, Operation, PathItem, Paths, Responses};
use crate::node::ParseNode;
use crate::Result;

static PATHS_FIXED_FIELDS: LazyLock<FixedFieldMap<Paths>> = LazyLock::new(FixedFieldMap::new);

static PATHS_PATTERN_FIELDS: LazyLock<PatternFieldMap<Paths>> = LazyLock::new(|| {
    PatternFieldMap::<Paths>::extensions().pattern(is_path_key, |o, key, n, ctx| {
        o.items.insert(key.to_string(), load_path_item(n, ctx)?);
        Ok(())
    })
});

static PATH_ITEM_FIXED_FIELDS: LazyLock<FixedFieldMap<PathItem>> = LazyLock::new(|| {
    FixedFieldMap::<PathItem>::new()
        .field("$ref", |o, n, _| {
            o.reference = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("get", |o, n, ctx| add_operation(o, HttpMethod::Get, n, ctx))
        .field("put", |o, n, ctx| add_operation(o, HttpMethod::Put, n, ctx))
        .field("post", |o, n, ctx| add_operation(o, HttpMethod::Post, n, ctx))
        .field("delete", |o, n, ctx| add_operation(o, HttpMethod::Delete, n, ctx))
        .field("options", |o, n, ctx| add_operation(o, HttpMethod::Options, n, ctx))
        .field("head", |o, n, ctx| add_operation(o, HttpMethod::Head, n, ctx))
        .field("patch", |o, n, ctx| add_operation(o, HttpMethod::Patch, n, ctx))
        .field("parameters", |o, n, ctx| {
            o.parameters = n.create_list(ctx, load_parameter)?;
            Ok(())
        })
});

static PATH_ITEM_PATTERN_FIELDS: LazyLock<PatternFieldMap<PathItem>> =
    LazyLock::new(PatternFieldMap::extensions);

static OPERATION_FIXED_FIELDS: LazyLock<FixedFieldMap<Operation>> = LazyLock::new(|| {
    FixedFieldMap::<Operation>::new()
        .field("tags", |o, n, _| {
            o.tags = n.create_simple_list(|item| item.get_scalar_value())?;
            Ok(())
        })
        .field("summary", |o, n, _| {
            o.summary = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("externalDocs", |o, n, ctx| {
            o.external_docs = Some(load_external_docs(n, ctx)?);
            Ok(())
        })
        .field("operationId", |o, n, _| {
            o.operation_id = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("consumes", |o, n, _| {
            o.consumes = Some(n.create_simple_list(|item| item.get_scalar_value())?);
            Ok(())
        })
        .field("produces", |o, n, _| {
            o.produces = Some(n.create_simple_list(|item| item.get_scalar_value())?);
            Ok(())
        })
        .field("parameters", |o, n, ctx| {
            o.parameters = n.create_list(ctx, load_parameter)?;
            Ok(())
        })
        .field("responses", |o, n, ctx| {
            o.responses = load_responses(n, ctx)?;
            Ok(())
        })
        .field("schemes", |o, n, _| {
            o.schemes = n.create_simple_list(|item| item.get_scalar_value())?;
            Ok(())
        })
        .field("deprecated", |o, n, _| {
            o.deprecated = n.get_bool()?;
            Ok(())
        })
        .field("security", |o, n, ctx| {
            o.security = Some(n.create_list(ctx, load_security_requirement)?);
            Ok(())
        })
});

static OPERATION_PATTERN_FIELDS: LazyLock<PatternFieldMap<Operation>> =
    LazyLock::new(PatternFieldMap::extensions);

static RESPONSES_FIXED_FIELDS: LazyLock<FixedFieldMap<Responses>> =
    LazyLock::new(FixedFieldMap::new);

// Extensions are registered first so the catch-all below never sees `x-` keys.
static RESPONSES_PATTERN_FIELDS: LazyLock<PatternFieldMap<Responses>> = LazyLock::new(|| {
    PatternFieldMap::<Responses>::extensions().pattern(
        |_| true,
        |o, key, n, ctx| {
            o.entries.insert(key.to_string(), load_response(n, ctx)?);
            Ok(())
        },
    )
});

const OPERATION_REQUIRED: &[&str] = &["responses"];

fn add_operation(
    item: &mut PathItem,
    method: HttpMethod,
    node: &ParseNode<'_>,
    ctx: &mut ParseContext,
) -> Result<()> {
    let operation = load_operation(node, ctx)?;
    item.operations.insert(method, operation);
    Ok(())
}

pub fn load_paths(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Paths> {
    load_object(node, &PATHS_FIXED_FIELDS, &PATHS_PATTERN_FIELDS, &[], ctx)
}

pub fn load_path_item(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<PathItem> {
    load_object(
        node,
        &PATH_ITEM_FIXED_FIELDS,
        &PATH_ITEM_PATTERN_FIELDS,
        &[],
        ctx,
    )
}

pub fn load_operation(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Operation> {
    load_object(
        node,
        &OPERATION_FIXED_FIELDS,
        &OPERATION_PATTERN_FIELDS,
        OPERATION_REQUIRED,
        ctx,
    )
}

pub fn load_responses(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Responses> {
    load_object(
        node,
        &RESPONSES_FIXED_FIELDS,
        &RESPONSES_PATTERN_FIELDS,
        &[],
        ctx,
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ReadOptions;

    #[rstest::rstest]
    fn test_paths_split_paths_from_extensions() {
        let value = json!({
            "/pets": {
                "get": {"operationId": "listPets", "responses": {"200": {"description": "ok"}}},
                "parameters": [{"$ref": "#/parameters/limit"}]
            },
            "x-paths-owner": "pets-team",
            "pets": {"get": {}}
        });
        let mut ctx = ParseContext::new(ReadOptions::default());
        let paths = load_paths(&ParseNode::root(&value), &mut ctx).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths.extensions["x-paths-owner"], json!("pets-team"));
        let item = paths.get("/pets").unwrap();
        assert_eq!(item.parameters.len(), 1);
        let get = item.operation(HttpMethod::Get).unwrap();
        assert_eq!(get.operation_id.as_deref(), Some("listPets"));
        assert!(ctx.diagnostics().is_empty());
    }

    #[rstest::rstest]
    fn test_responses_keep_extensions_apart() {
        let value = json!({
            "200": {"description": "ok"},
            "default": {"$ref": "#/responses/Error"},
            "x-cache": true
        });
        let mut ctx = ParseContext::new(ReadOptions::default());
        let responses = load_responses(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(responses.entries.len(), 2);
        assert_eq!(
            responses.get("default").unwrap().reference.as_deref(),
            Some("#/responses/Error")
        );
        assert_eq!(responses.extensions["x-cache"], json!(true));
    }

    #[rstest::rstest]
    fn test_operation_media_types_are_explicit_or_absent() {
        let value = json!({
            "consumes": [],
            "responses": {"204": {"description": "gone"}},
            "deprecated": true,
            "security": [{"api_key": []}]
        });
        let mut ctx = ParseContext::new(ReadOptions::default());
        let operation = load_operation(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(operation.consumes, Some(Vec::new()));
        assert!(operation.produces.is_none());
        assert!(operation.deprecated);
        assert_eq!(operation.security.unwrap().len(), 1);
    }

    #[rstest::rstest]
    fn test_operation_without_responses_is_reported() {
        let value = json!({"/pets": {"post": {"summary": "add"}}});
        let mut ctx = ParseContext::new(ReadOptions::default());
        load_paths(&ParseNode::root(&value), &mut ctx).unwrap();
        let diagnostic = &ctx.diagnostics()[0];
        assert_eq!(diagnostic.field(), Some("responses"));
        assert_eq!(diagnostic.pointer.as_str(), "#/~1pets/post");
    }
}
