//! Configuration options for JSON parsing and serialization.
//!
//! [`JsonOptions`] controls how text is written (compact or pretty-printed,
//! indentation width) and how deeply nested input the parser accepts.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonlite::{to_string_with_options, JsonOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! let compact = to_string_with_options(&data, JsonOptions::new()).unwrap();
//! assert_eq!(compact, r#"{"x":1,"y":2}"#);
//!
//! let pretty = to_string_with_options(&data, JsonOptions::pretty().with_indent(4)).unwrap();
//! assert_eq!(pretty, "{\n    \"x\": 1,\n    \"y\": 2\n}");
//! ```

/// Default nesting limit for arrays and objects.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the parser and serializer.
///
/// # Examples
///
/// ```rust
/// use serde_jsonlite::JsonOptions;
///
/// // Compact output, 128 nesting levels
/// let options = JsonOptions::new();
/// assert!(!options.pretty);
///
/// // Reject anything nested deeper than 16 levels
/// let strict = JsonOptions::new().with_max_depth(16);
/// assert_eq!(strict.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct JsonOptions {
    /// Insert newlines and indentation when serializing.
    pub pretty: bool,
    /// Spaces per nesting level in pretty mode.
    pub indent: usize,
    /// Deepest array/object nesting the parser accepts.
    pub max_depth: usize,
}

impl JsonOptions {
    /// Compact output with the default nesting limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty-printed output with 2-space indentation.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            pretty: false,
            indent: 2,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
