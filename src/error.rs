//! Error types for JSON parsing, serialization and type mapping.
//!
//! ## Error Categories
//!
//! - **Invalid JSON**: the parser hit a grammatical violation (unexpected token,
//!   missing delimiter, premature end of input). Carries the byte offset of the cursor.
//! - **Unsupported target**: the type mapper was asked to build a sequence or map.
//! - **Type mismatch**: a scalar could not be coerced into the requested Rust type.
//! - **I/O errors**: reader/writer failures in [`from_reader`](crate::from_reader)
//!   and [`to_writer`](crate::to_writer).
//!
//! Parsing never recovers: the first error aborts the whole call.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonlite::{parse, Error};
//!
//! let err = parse("{'name'{ 'john'}").unwrap_err();
//! assert!(matches!(err, Error::InvalidJson { .. }));
//! assert_eq!(err.position(), Some(7));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while reading or writing JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Grammatical violation found by the parser.
    #[error("Invalid JSON at position {position}: {msg}")]
    InvalidJson { position: usize, msg: String },

    /// The type mapper cannot construct this kind of target.
    #[error("Unsupported target type: {type_name}")]
    UnsupportedTarget { type_name: String },

    /// A scalar could not be coerced into the requested type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a parse error at the given byte offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonlite::Error;
    ///
    /// let err = Error::invalid_json(12, "expected ':' after object key");
    /// assert!(err.to_string().contains("position 12"));
    /// ```
    pub fn invalid_json(position: usize, msg: &str) -> Self {
        Error::InvalidJson {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an error for targets the type mapper refuses to build.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonlite::Error;
    ///
    /// let err = Error::unsupported_target("sequence");
    /// assert_eq!(err.to_string(), "Unsupported target type: sequence");
    /// ```
    pub fn unsupported_target(type_name: &str) -> Self {
        Error::UnsupportedTarget {
            type_name: type_name.to_string(),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Byte offset of the cursor for parse errors, `None` for every other kind.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::InvalidJson { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    fn invalid_type(unexp: serde::de::Unexpected<'_>, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(&exp.to_string(), &unexp.to_string())
    }

    fn invalid_value(unexp: serde::de::Unexpected<'_>, exp: &dyn serde::de::Expected) -> Self {
        Error::type_mismatch(&exp.to_string(), &unexp.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
