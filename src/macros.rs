/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys must be literals. Any other expression is converted through
/// [`to_value`](crate::to_value) and becomes `null` if it cannot be represented.
///
/// ```rust
/// use serde_jsonlite::{json, Value};
///
/// let value = json!({
///     "name": "Alice",
///     "tags": ["admin", "ops"],
///     "manager": null
/// });
/// assert_eq!(value["tags"][1], Value::from("ops"));
/// assert!(value["manager"].is_null());
/// ```
#[macro_export]
macro_rules! json {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback for any expression
    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
