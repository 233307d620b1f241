//! # serde_jsonlite
//!
//! A small, lenient JSON codec built on Serde.
//!
//! Text is parsed into a dynamic [`Value`] tree whose objects keep their key
//! order. The tree can be inspected directly or mapped onto your own
//! `#[derive(Deserialize)]` records. Anything implementing `Serialize` can be
//! written back out as compact or pretty-printed JSON.
//!
//! ## Leniency
//!
//! The parser accepts a superset of JSON:
//!
//! - strings may be quoted with `'` as well as `"`
//! - numbers are read greedily, so `+1` and `.5` are accepted
//! - malformed `\u` escapes are dropped instead of rejected
//!
//! It stays strict about structure: missing colons, stray commas, unknown
//! literals and trailing content all fail with [`Error::InvalidJson`] carrying
//! the byte offset of the problem.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_jsonlite::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User { id: 123, name: "Alice".to_string(), active: true };
//!
//! let json = to_string(&user).unwrap();
//! assert_eq!(json, r#"{"id":123,"name":"Alice","active":true}"#);
//!
//! let user_back: User = from_str(&json).unwrap();
//! assert_eq!(user, user_back);
//! ```
//!
//! ### Dynamic Values
//!
//! ```rust
//! use serde_jsonlite::{parse, Value};
//!
//! let value = parse("[ 'a', {'k':'v'}, 'b']").unwrap();
//! assert_eq!(value[0], Value::from("a"));
//! assert_eq!(value[1].get("k").and_then(Value::as_str), Some("v"));
//! ```
//!
//! ### Mapping Rules
//!
//! Records are filled by field name. Unknown keys are skipped and missing
//! fields get a zero value. Collections (`Vec`, `HashMap`, tuples) cannot be
//! mapping targets; keep such data in a [`Value`] instead.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_jsonlite::{from_str, Error};
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Point { x: i32, y: i32 }
//!
//! let point: Point = from_str(r#"{"x": 5, "z": 9}"#).unwrap();
//! assert_eq!(point, Point { x: 5, y: 0 });
//!
//! let err = from_str::<Vec<i32>>("[1, 2]").unwrap_err();
//! assert!(matches!(err, Error::UnsupportedTarget { .. }));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (rejected input, unsupported mapping
//! targets) and never installs a subscriber.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - serializing a record and reading it back
//! - **`dynamic_values.rs`** - working with `Value` trees and the `json!` macro
//!
//! Run any demo with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod scanner;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, Result};
pub use map::Map;
pub use options::{JsonOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
pub use ser::{Serializer, ValueSerializer};
pub use value::Value;

use serde::{Deserialize, Serialize};
use std::io;

/// Parse JSON text into a dynamic [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::{parse, Value};
///
/// assert_eq!(parse(r#""hello, world""#).unwrap(), Value::from("hello, world"));
/// assert!(parse("{'name'{ 'john'}").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] with the byte offset of the first violation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(s: &str) -> Result<Value> {
    parse_with_options(s, &JsonOptions::default())
}

/// Parse JSON text into a [`Value`], honouring `options.max_depth`.
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] for malformed or too deeply nested input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_options(s: &str, options: &JsonOptions) -> Result<Value> {
    tracing::trace!(len = s.len(), max_depth = options.max_depth, "parsing JSON text");
    Parser::with_options(s, options).parse()
}

/// Serialize any `T: Serialize` to a compact JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(to_string(&point).unwrap(), r#"{"x":1,"y":2}"#);
/// ```
///
/// # Errors
///
/// Returns an error if a map key does not serialize as a string.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::default())
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::to_string_pretty;
///
/// let json = to_string_pretty(&vec![1, 2]).unwrap();
/// assert_eq!(json, "[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if a map key does not serialize as a string.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, JsonOptions::pretty())
}

/// Serialize any `T: Serialize` to a JSON string with custom options.
///
/// # Errors
///
/// Returns an error if a map key does not serialize as a string.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: JsonOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    tracing::trace!(pretty = options.pretty, "serializing to JSON text");
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value["x"], Value::Integer(1));
/// ```
///
/// # Errors
///
/// Returns an error if a map key does not serialize as a string.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` as compact JSON into a writer.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, br#"["a","b"]"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, JsonOptions::default())
}

/// Serialize any `T: Serialize` into a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: JsonOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let json = to_string_with_options(value, options)?;
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Map a [`Value`] onto `T` by field name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedTarget`] for sequence, tuple and map targets and
/// [`Error::TypeMismatch`] when a scalar cannot be coerced.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    T::deserialize(Deserializer::new(value))
}

/// Deserialize an instance of type `T` from a string of JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Person { name: String, age: i64 }
///
/// let person: Person = from_str(r#"{"name": "john", "age": 42}"#).unwrap();
/// assert_eq!(person, Person { name: "john".to_string(), age: 42 });
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] if the text is malformed, otherwise any
/// error [`from_value`] reports.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    from_str_with_options(s, &JsonOptions::default())
}

/// Deserialize `T` from JSON text, honouring `options.max_depth`.
///
/// # Errors
///
/// Same as [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<'a, T>(s: &'a str, options: &JsonOptions) -> Result<T>
where
    T: Deserialize<'a>,
{
    let value = parse_with_options(s, options)?;
    T::deserialize(Deserializer::new(value))
}

/// Deserialize an instance of type `T` from an I/O stream of JSON.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::from_reader;
/// use serde::Deserialize;
/// use std::io::Cursor;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let cursor = Cursor::new(br#"{"x": 1, "y": 2}"#);
/// let point: Point = from_reader(cursor).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid JSON,
/// or the data cannot be mapped onto `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: for<'de> Deserialize<'de>,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of JSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid JSON,
/// or cannot be mapped onto `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}
