use serde::{Deserialize, Serialize};
use serde_jsonlite::{
    from_str, from_value, parse, to_string, to_string_pretty, to_string_with_options, to_value,
    Error, JsonOptions, Map, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    item: Product,
    note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Foo {
    #[serde(rename = "A")]
    a: String,
    #[serde(rename = "B")]
    b: Vec<String>,
    #[serde(rename = "C")]
    c: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Dot {
    name: String,
    at: Option<Point>,
}

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
        },
        item: Product {
            sku: "WIDGET-001".to_string(),
            price: 29.99,
            quantity: 2,
        },
        note: None,
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
    };

    let json = to_string(&user).unwrap();
    assert_eq!(json, r#"{"id":123,"name":"Alice","active":true}"#);

    let user_back: User = from_str(&json).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = sample_order();
    let json = to_string(&order).unwrap();
    assert_eq!(
        json,
        r#"{"order_id":12345,"customer":{"id":123,"name":"Alice","active":true},"item":{"sku":"WIDGET-001","price":29.99,"quantity":2},"note":null}"#
    );

    let order_back: Order = from_str(&json).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_record_with_sequence_field() {
    let foo = Foo {
        a: "Hello".to_string(),
        b: vec!["X".to_string(), "Y".to_string(), "Z".to_string()],
        c: 42,
    };
    assert_eq!(
        to_string(&foo).unwrap(),
        r#"{"A":"Hello","B":["X","Y","Z"],"C":42}"#
    );
}

#[test]
fn test_empty_sequence_and_record() {
    #[derive(Serialize)]
    struct Nothing {}

    assert_eq!(to_string(&Vec::<i32>::new()).unwrap(), "[]");
    assert_eq!(to_string(&Nothing {}).unwrap(), "{}");
}

#[test]
fn test_none_serializes_as_null() {
    let dot = Dot {
        name: "origin".to_string(),
        at: None,
    };
    assert_eq!(to_string(&dot).unwrap(), r#"{"name":"origin","at":null}"#);

    let dot = Dot {
        name: "p".to_string(),
        at: Some(Point { x: 1, y: 2 }),
    };
    let json = to_string(&dot).unwrap();
    assert_eq!(json, r#"{"name":"p","at":{"x":1,"y":2}}"#);
    assert_eq!(from_str::<Dot>(&json).unwrap(), dot);
}

#[test]
fn test_mixed_value_array() {
    let value = Value::Array(vec![
        Value::from("X"),
        Value::from("Y"),
        Value::from("Z"),
        Value::from(1.1),
        Value::from(1.2),
        Value::from(1.3),
    ]);
    assert_eq!(to_string(&value).unwrap(), r#"["X","Y","Z",1.1,1.2,1.3]"#);
}

#[test]
fn test_parse_plain_string() {
    assert_eq!(
        parse("\"hello, world\"").unwrap(),
        Value::String("hello, world".to_string())
    );
}

#[test]
fn test_parse_record() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Person {
        name: String,
        age: i64,
    }

    let person: Person = from_str("{\"name\": \"john\", \"age\": 42}").unwrap();
    assert_eq!(
        person,
        Person {
            name: "john".to_string(),
            age: 42
        }
    );
}

#[test]
fn test_parse_single_quoted_mixed_array() {
    let value = parse("[ 'a', {'k':'v'}, 'b']").unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], Value::from("a"));
    assert_eq!(items[1].get("k"), Some(&Value::from("v")));
    assert_eq!(items[2], Value::from("b"));
}

#[test]
fn test_missing_colon_is_invalid() {
    let err = parse("{'name'{ 'john'}").unwrap_err();
    assert!(matches!(err, Error::InvalidJson { .. }));
    assert_eq!(err.position(), Some(7));
}

#[test]
fn test_unicode_escape() {
    assert_eq!(parse(r#""\u2109""#).unwrap(), Value::from("\u{2109}"));
}

#[test]
fn test_key_order_is_preserved() {
    let text = r#"{"zebra":1,"apple":2,"mango":{"b":true,"a":false}}"#;
    let value = parse(text).unwrap();
    assert_eq!(to_string(&value).unwrap(), text);
}

#[test]
fn test_duplicate_keys_last_wins() {
    let value = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();
    assert_eq!(to_string(&value).unwrap(), r#"{"a":3,"b":2}"#);
}

#[test]
fn test_string_with_special_characters_roundtrips() {
    let original = "quote \" apostrophe ' backslash \\ newline \n tab \t bell \u{7}";
    let json = to_string(&original).unwrap();
    let back: String = from_str(&json).unwrap();
    assert_eq!(back, original);
}

#[test]
fn test_mapping_ignores_extras_and_zero_fills() {
    let order: Order = from_str(
        r#"{"order_id": 9, "customer": {"name": "Bob", "nickname": "B"}, "unused": [1, 2]}"#,
    )
    .unwrap();
    assert_eq!(order.order_id, 9);
    assert_eq!(order.customer.name, "Bob");
    assert_eq!(order.customer.id, 0);
    assert!(!order.customer.active);
    assert_eq!(order.item.sku, "");
    assert_eq!(order.item.price, 0.0);
    assert_eq!(order.note, None);
}

#[test]
fn test_collection_targets_fail_clearly() {
    let err = from_str::<Vec<String>>(r#"["a", "b"]"#).unwrap_err();
    assert!(matches!(err, Error::UnsupportedTarget { .. }));
    assert!(err.to_string().contains("sequence"));

    let err = from_str::<Foo>(r#"{"A": "x", "B": ["y"], "C": 1}"#).unwrap_err();
    assert!(matches!(err, Error::UnsupportedTarget { .. }));
}

#[test]
fn test_missing_collection_field_is_empty() {
    let foo: Foo = from_str(r#"{"A":"Hello","C":42}"#).unwrap();
    assert_eq!(
        foo,
        Foo {
            a: "Hello".to_string(),
            b: Vec::new(),
            c: 42,
        }
    );
}

#[test]
fn test_pretty_printing() {
    let json = to_string_pretty(&sample_order()).unwrap();
    assert!(json.starts_with("{\n  \"order_id\": 12345,\n  \"customer\": {\n    \"id\": 123,"));
    assert!(json.ends_with("\n  \"note\": null\n}"));

    let order_back: Order = from_str(&json).unwrap();
    assert_eq!(order_back, sample_order());
}

#[test]
fn test_custom_indent() {
    let options = JsonOptions::pretty().with_indent(4);
    let json = to_string_with_options(&Point { x: 1, y: 2 }, options).unwrap();
    assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": 2\n}");
}

#[test]
fn test_to_value_and_from_value() {
    let value = to_value(&sample_order()).unwrap();
    assert_eq!(value["customer"]["name"], Value::from("Alice"));
    assert_eq!(value["item"]["price"], Value::Float(29.99));
    assert!(value["note"].is_null());

    let order: Order = from_value(value).unwrap();
    assert_eq!(order, sample_order());
}

#[test]
fn test_dynamic_access() {
    let mut value = parse(r#"{"name": "john"}"#).unwrap();
    assert_eq!(value.get("name").and_then(Value::as_str), Some("john"));
    assert!(value.get("age").is_none());

    value.set("age", Value::from(42)).unwrap();
    assert_eq!(to_string(&value).unwrap(), r#"{"name":"john","age":42}"#);

    let mut list = Value::Array(vec![]);
    assert!(list.set("k", Value::Null).is_err());
}

#[test]
fn test_value_display_and_from_str() {
    let mut map = Map::new();
    map.insert("pi".to_string(), Value::Float(3.0));
    map.insert("list".to_string(), Value::Array(vec![Value::Null, Value::Bool(false)]));
    let value = Value::Object(map);

    let text = value.to_string();
    assert_eq!(text, r#"{"pi":3.0,"list":[null,false]}"#);

    let back: Value = text.parse().unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_lenient_numbers() {
    assert_eq!(parse("+1").unwrap(), Value::Integer(1));
    assert_eq!(parse(".5").unwrap(), Value::Float(0.5));
    assert_eq!(parse("-2E2").unwrap(), Value::Float(-200.0));
    assert!(parse("1-2").is_err());
}

#[test]
fn test_structural_errors() {
    for bad in ["", "{", "[1,]", "{,}", "[1 2]", "{'a':1,}", "nul", "1 2", "'open"] {
        let err = parse(bad).unwrap_err();
        assert!(
            matches!(err, Error::InvalidJson { .. }),
            "expected InvalidJson for {:?}, got {:?}",
            bad,
            err
        );
    }
}
