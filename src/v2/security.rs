use std::sync::LazyLock;

use crate::context::ParseContext;
use crate::dispatch::{load_object, FixedFieldMap, PatternFieldMap};
use crate::model::{SecurityRequirement, SecurityScheme};
use crate::node::ParseNode;
use crate::Result;

static SECURITY_SCHEME_FIXED_FIELDS: LazyLock<FixedFieldMap<SecurityScheme>> =
    LazyLock::new(|| {
        FixedFieldMap::<SecurityScheme>::new()
            .field("type", |o, n, _| {
                o.scheme_type = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("description", |o, n, _| {
                o.description = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("name", |o, n, _| {
                o.name = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("in", |o, n, _| {
                o.location = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("flow", |o, n, _| {
                o.flow = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("authorizationUrl", |o, n, _| {
                o.authorization_url = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("tokenUrl", |o, n, _| {
                o.token_url = Some(n.get_scalar_value()?);
                Ok(())
            })
            .field("scopes", |o, n, ctx| {
                o.scopes = n.create_map(ctx, |scope, _| scope.get_scalar_value())?;
                Ok(())
            })
    });

static SECURITY_SCHEME_PATTERN_FIELDS: LazyLock<PatternFieldMap<SecurityScheme>> =
    LazyLock::new(PatternFieldMap::extensions);

const SECURITY_SCHEME_REQUIRED: &[&str] = &["type"];

pub fn load_security_scheme(
    node: &ParseNode<'_>,
    ctx: &mut ParseContext,
) -> Result<SecurityScheme> {
    load_object(
        node,
        &SECURITY_SCHEME_FIXED_FIELDS,
        &SECURITY_SCHEME_PATTERN_FIELDS,
        SECURITY_SCHEME_REQUIRED,
        ctx,
    )
}

/// Requirement keys are scheme names, so there is no field table to consult.
pub fn load_security_requirement(
    node: &ParseNode<'_>,
    ctx: &mut ParseContext,
) -> Result<SecurityRequirement> {
    let schemes = node.create_map(ctx, |scopes, _| {
        scopes.create_simple_list(|scope| scope.get_scalar_value())
    })?;
    Ok(SecurityRequirement { schemes })
}
