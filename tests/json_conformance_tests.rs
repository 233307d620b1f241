//! Cross-checks against `serde_json` as the reference JSON implementation.

use serde::Serialize;
use serde_jsonlite::{parse, to_string, to_value, Value};

const DOCUMENTS: &[&str] = &[
    "null",
    "true",
    "-17",
    "0.25",
    "1e300",
    r#""plain""#,
    r#""esc \" \\ \/ \b \f \n \r \t é 😀""#,
    "[]",
    "{}",
    r#"[1, [2, [3, [4]]], {"a": {"b": {"c": null}}}]"#,
    r#"{"name": "john", "age": 42, "tags": ["x", "y"], "score": 9.75, "ok": false}"#,
    r#"{"unicode": "héllo wörld ℉", "empty": "", "nested": [[], {}]}"#,
    "  \n\t[ 1 ,\r\n 2 ]  ",
];

/// Parses with both implementations and compares the resulting trees.
fn assert_same_tree(text: &str) {
    let ours = parse(text).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", text, e));
    let reference: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(
        serde_json::to_value(&ours).unwrap(),
        reference,
        "trees differ for {:?}",
        text
    );
}

#[test]
fn test_parse_agrees_with_reference() {
    for text in DOCUMENTS {
        assert_same_tree(text);
    }
}

#[test]
fn test_output_is_standard_json() {
    for text in DOCUMENTS {
        let ours = to_string(&parse(text).unwrap()).unwrap();
        let reference: serde_json::Value = serde_json::from_str(text).unwrap();
        let reread: serde_json::Value = serde_json::from_str(&ours)
            .unwrap_or_else(|e| panic!("reference rejected {:?}: {}", ours, e));
        assert_eq!(reread, reference);
    }
}

#[test]
fn test_reads_reference_output() {
    let reference = serde_json::json!({
        "id": 7,
        "ratio": 0.1,
        "tiny": 1.0e-9,
        "quote": "say \"fine\"",
        "control": "\u{1}\u{1f}",
        "list": [true, null, -3]
    });
    let text = serde_json::to_string(&reference).unwrap();
    assert_same_tree(&text);

    let pretty = serde_json::to_string_pretty(&reference).unwrap();
    assert_same_tree(&pretty);
}

#[test]
fn test_compact_output_matches_reference_for_records() {
    #[derive(Serialize)]
    struct Inner {
        flag: bool,
        note: Option<String>,
    }

    #[derive(Serialize)]
    struct Outer {
        name: String,
        count: u64,
        weight: f64,
        inner: Inner,
        items: Vec<i32>,
    }

    let outer = Outer {
        name: "widget\n\"v2\"".to_string(),
        count: 3,
        weight: 2.5,
        inner: Inner {
            flag: true,
            note: None,
        },
        items: vec![1, -2, 3],
    };

    assert_eq!(
        to_string(&outer).unwrap(),
        serde_json::to_string(&outer).unwrap()
    );
}

#[test]
fn test_to_value_matches_reference_shape() {
    let reference = serde_json::json!({"a": [1, 2.5, "s"], "b": {"c": null}});
    let ours = to_value(&reference).unwrap();
    assert_eq!(ours["a"][1], Value::Float(2.5));
    assert_eq!(serde_json::to_value(&ours).unwrap(), reference);
}

#[test]
fn test_lenient_inputs_the_reference_rejects() {
    for text in ["['a', 'b']", "{'k': 'v'}", "+5", ".5"] {
        assert!(serde_json::from_str::<serde_json::Value>(text).is_err());
        assert!(parse(text).is_ok(), "expected {:?} to parse", text);
    }
}

#[test]
fn test_both_reject_broken_structure() {
    for text in ["[1,]", "{\"a\" 1}", "[1 2]", "{\"a\":1,}", "tru", "[", "{\"a\":1} x"] {
        assert!(serde_json::from_str::<serde_json::Value>(text).is_err());
        assert!(parse(text).is_err(), "expected {:?} to fail", text);
    }
}
