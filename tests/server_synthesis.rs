use openapi_reader::load_document;
use rstest::rstest;
use serde_json::{json, Map, Value};

fn root_with(entries: &[(&str, Value)]) -> Value {
    let mut map = Map::new();
    map.insert("swagger".into(), json!("2.0"));
    map.insert("info".into(), json!({"title": "t", "version": "1"}));
    map.insert("paths".into(), json!({}));
    for (key, value) in entries {
        map.insert((*key).to_string(), value.clone());
    }
    Value::Object(map)
}

fn server_urls(root: &Value) -> Vec<String> {
    load_document(root)
        .unwrap()
        .document
        .servers
        .into_iter()
        .map(|server| server.url)
        .collect()
}

#[rstest]
fn test_two_schemes_with_host_and_base_path() {
    let root = root_with(&[
        ("schemes", json!(["http", "https"])),
        ("host", json!("a.b")),
        ("basePath", json!("/v1")),
    ]);
    assert_eq!(server_urls(&root), vec!["http://a.b/v1", "https://a.b/v1"]);
}

#[rstest]
fn test_scheme_only_uses_literal_defaults() {
    let root = root_with(&[("schemes", json!(["http"]))]);
    assert_eq!(server_urls(&root), vec!["http://example.org//"]);
}

#[rstest]
#[case(vec![])]
#[case(vec![("host", json!("a.b"))])]
#[case(vec![("basePath", json!("/v1"))])]
#[case(vec![("host", json!("a.b")), ("basePath", json!("/v1"))])]
fn test_no_schemes_means_no_servers(#[case] entries: Vec<(&'static str, Value)>) {
    assert!(server_urls(&root_with(&entries)).is_empty());
}

#[rstest]
fn test_key_order_does_not_change_servers() {
    let schemes_first = root_with(&[("schemes", json!(["wss"])), ("host", json!("h.example"))]);
    let host_first = root_with(&[("host", json!("h.example")), ("schemes", json!(["wss"]))]);
    assert_eq!(server_urls(&schemes_first), server_urls(&host_first));
    assert_eq!(server_urls(&host_first), vec!["wss://h.example/"]);
}

#[rstest]
fn test_every_permutation_yields_same_servers() {
    let entries = [
        ("basePath", json!("/api")),
        ("schemes", json!(["http", "https"])),
        ("host", json!("h:8080")),
    ];
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
    for order in orders {
        let permuted: Vec<(&str, Value)> = order
            .iter()
            .map(|&idx| (entries[idx].0, entries[idx].1.clone()))
            .collect();
        assert_eq!(
            server_urls(&root_with(&permuted)),
            vec!["http://h:8080/api", "https://h:8080/api"],
            "order {order:?}"
        );
    }
}

#[rstest]
fn test_empty_scheme_list_yields_no_servers() {
    let root = root_with(&[("schemes", json!([])), ("host", json!("a.b"))]);
    assert!(server_urls(&root).is_empty());
}
