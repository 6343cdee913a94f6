use std::sync::LazyLock;

use crate::context::ParseContext;
use crate::dispatch::{load_object, FixedFieldMap, PatternFieldMap};
use crate::model::{Contact, ExternalDocs, Info, License, Tag};
use crate::node::ParseNode;
use crate::Result;

static INFO_FIXED_FIELDS: LazyLock<FixedFieldMap<Info>> = LazyLock::new(|| {
    FixedFieldMap::<Info>::new()
        .field("title", |o, n, _| {
            o.title = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("termsOfService", |o, n, _| {
            o.terms_of_service = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("contact", |o, n, ctx| {
            o.contact = Some(load_contact(n, ctx)?);
            Ok(())
        })
        .field("license", |o, n, ctx| {
            o.license = Some(load_license(n, ctx)?);
            Ok(())
        })
        .field("version", |o, n, _| {
            o.version = Some(n.get_scalar_value()?);
            Ok(())
        })
});

static INFO_PATTERN_FIELDS: LazyLock<PatternFieldMap<Info>> =
    LazyLock::new(PatternFieldMap::extensions);

static CONTACT_FIXED_FIELDS: LazyLock<FixedFieldMap<Contact>> = LazyLock::new(|| {
    FixedFieldMap::<Contact>::new()
        .field("name", |o, n, _| {
            o.name = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("url", |o, n, _| {
            o.url = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("email", |o, n, _| {
            o.email = Some(n.get_scalar_value()?);
            Ok(())
        })
});

static CONTACT_PATTERN_FIELDS: LazyLock<PatternFieldMap<Contact>> =
    LazyLock::new(PatternFieldMap::extensions);

static LICENSE_FIXED_FIELDS: LazyLock<FixedFieldMap<License>> = LazyLock::new(|| {
    FixedFieldMap::<License>::new()
        .field("name", |o, n, _| {
            o.name = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("url", |o, n, _| {
            o.url = Some(n.get_scalar_value()?);
            Ok(())
        })
});

static LICENSE_PATTERN_FIELDS: LazyLock<PatternFieldMap<License>> =
    LazyLock::new(PatternFieldMap::extensions);

static EXTERNAL_DOCS_FIXED_FIELDS: LazyLock<FixedFieldMap<ExternalDocs>> = LazyLock::new(|| {
    FixedFieldMap::<ExternalDocs>::new()
        .field("description", |o, n, _| {
            o.description = Some(n.get_scalar_value()?);
            Ok(())
        })
        .field("url", |o, n, _| {
            o.url = Some(n.get_scalar_value()?);
            Ok(())
        })
});

static EXTERNAL_DOCS_PATTERN_FIELDS: LazyLock<PatternFieldMap<ExternalDocs>> =
    LazyLock::new(PatternFieldMap::extensions);

static TAG_FIXED_FIELDS: LazyLock<FixedFieldMap<Tag>> = LazyLock::new(|| {
    FixedFieldMap::<Tag>::new()
        .field("name", |o, n, _| {
            o.name = Some(n.get_scalar_value()?);
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
});

static TAG_PATTERN_FIELDS: LazyLock<PatternFieldMap<Tag>> =
    LazyLock::new(PatternFieldMap::extensions);

const INFO_REQUIRED: &[&str] = &["title", "version"];
const LICENSE_REQUIRED: &[&str] = &["name"];
const EXTERNAL_DOCS_REQUIRED: &[&str] = &["url"];
const TAG_REQUIRED: &[&str] = &["name"];

pub fn load_info(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Info> {
    load_object(node, &INFO_FIXED_FIELDS, &INFO_PATTERN_FIELDS, INFO_REQUIRED, ctx)
}

pub fn load_contact(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Contact> {
    load_object(node, &CONTACT_FIXED_FIELDS, &CONTACT_PATTERN_FIELDS, &[], ctx)
}

pub fn load_license(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<License> {
    load_object(node, &LICENSE_FIXED_FIELDS, &LICENSE_PATTERN_FIELDS, LICENSE_REQUIRED, ctx)
}

pub fn load_external_docs(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<ExternalDocs> {
    load_object(
        node,
        &EXTERNAL_DOCS_FIXED_FIELDS,
        &EXTERNAL_DOCS_PATTERN_FIELDS,
        EXTERNAL_DOCS_REQUIRED,
        ctx,
    )
}

pub fn load_tag(node: &ParseNode<'_>, ctx: &mut ParseContext) -> Result<Tag> {
    load_object(node, &TAG_FIXED_FIELDS, &TAG_PATTERN_FIELDS, TAG_REQUIRED, ctx)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ReadOptions;

    #[rstest::rstest]
    fn test_info_with_nested_contact_and_license() {
        let value = json!({
            "title": "Petstore",
            "version": "1.0.0",
            "contact": {"name": "API team", "email": "api@example.org"},
            "license": {"name": "MIT", "x-spdx": "MIT"},
            "x-logo": {"url": "logo.png"}
        });
        let mut ctx = ParseContext::new(ReadOptions::default());
        let info = load_info(&ParseNode::root(&value), &mut ctx).unwrap();

        assert_eq!(info.title.as_deref(), Some("Petstore"));
        assert_eq!(info.contact.unwrap().email.as_deref(), Some("api@example.org"));
        let license = info.license.unwrap();
        assert_eq!(license.name.as_deref(), Some("MIT"));
        assert_eq!(license.extensions["x-spdx"], json!("MIT"));
        assert_eq!(info.extensions["x-logo"], json!({"url": "logo.png"}));
        assert!(ctx.diagnostics().is_empty());
    }

    #[rstest::rstest]
    fn test_nested_required_fields_use_nested_pointer() {
        let value = json!({"info": {"title": "t", "license": {"url": "u"}}});
        let node = ParseNode::root(&value).check_map().unwrap().get("info").unwrap();
        let mut ctx = ParseContext::new(ReadOptions::default());
        load_info(&node, &mut ctx).unwrap();

        let found: Vec<(String, &str)> = ctx
            .diagnostics()
            .iter()
            .map(|d| (d.pointer.to_string(), d.field().unwrap()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("#/info/license".to_string(), "name"),
                ("#/info".to_string(), "version"),
            ]
        );
    }

    #[rstest::rstest]
    fn test_tag_external_docs() {
        let value = json!({"name": "pets", "externalDocs": {"url": "https://example.org/docs"}});
        let mut ctx = ParseContext::new(ReadOptions::default());
        let tag = load_tag(&ParseNode::root(&value), &mut ctx).unwrap();
        assert_eq!(tag.name.as_deref(), Some("pets"));
        assert_eq!(
            tag.external_docs.unwrap().url.as_deref(),
            Some("https://example.org/docs")
        );
    }
}
