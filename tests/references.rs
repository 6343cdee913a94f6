use openapi_reader::{load_document, ReferenceTarget};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn test_definitions_register_pointer_per_entry() {
    let root = json!({
        "swagger": "2.0",
        "info": {"title": "t", "version": "1"},
        "paths": {},
        "definitions": {
            "Pet": {"type": "object", "properties": {"name": {"type": "string"}}}
        }
    });
    let result = load_document(&root).unwrap();
    assert_eq!(
        result.references.get("#/definitions/Pet"),
        Some(&ReferenceTarget::Inline)
    );
    assert!(result.document.components.schemas.contains_key("Pet"));
}

#[rstest]
fn test_marker_entries_become_aliases_without_resolution() {
    let root = json!({
        "swagger": "2.0",
        "info": {"title": "t", "version": "1"},
        "paths": {},
        "definitions": {
            "Animal": {"$ref": "#/definitions/Missing"}
        },
        "parameters": {
            "limit": {"name": "limit", "in": "query", "type": "integer"},
            "pageSize": {"$ref": "#/parameters/limit"}
        }
    });
    let result = load_document(&root).unwrap();

    assert_eq!(
        result.references.get("#/definitions/Animal"),
        Some(&ReferenceTarget::Alias("#/definitions/Missing".into()))
    );
    let animal = &result.document.components.schemas["Animal"];
    assert_eq!(animal.reference.as_deref(), Some("#/definitions/Missing"));
    assert!(animal.properties.is_empty());

    assert!(result.references.contains("#/parameters/limit"));
    assert_eq!(
        result.references.aliases().collect::<Vec<_>>(),
        vec![
            ("#/definitions/Animal", "#/definitions/Missing"),
            ("#/parameters/pageSize", "#/parameters/limit"),
        ]
    );
}

#[rstest]
fn test_plain_maps_register_nothing() {
    let root = json!({
        "swagger": "2.0",
        "info": {"title": "t", "version": "1"},
        "paths": {},
        "responses": {"NotFound": {"description": "missing"}},
        "securityDefinitions": {"basic": {"type": "basic"}}
    });
    let result = load_document(&root).unwrap();
    assert!(result.references.is_empty());
    assert_eq!(result.document.components.responses.len(), 1);
}

#[rstest]
fn test_registries_are_per_document() {
    let with_defs = json!({
        "swagger": "2.0",
        "info": {"title": "t", "version": "1"},
        "paths": {},
        "definitions": {"Pet": {}}
    });
    let without = json!({
        "swagger": "2.0",
        "info": {"title": "t", "version": "1"},
        "paths": {}
    });
    assert_eq!(load_document(&with_defs).unwrap().references.len(), 1);
    assert!(load_document(&without).unwrap().references.is_empty());
}
