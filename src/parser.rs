//! Recursive-descent JSON parser.
//!
//! [`Parser`] turns text into a [`Value`] in a single pass. All entry points
//! share one cursor (a byte offset into the input) and report failures as
//! [`Error::InvalidJson`] carrying that cursor. Nothing is retried: the first
//! violation aborts the parse.
//!
//! ## Accepted grammar
//!
//! Standard JSON, with these lenient extensions:
//!
//! - strings may open with `"` or `'`, and any unescaped `"` or `'` closes them;
//! - object keys accept the same quoting;
//! - numbers are read greedily from the class `0-9 . + - e E`, so `+1` and `.5` parse;
//! - a backslash as the very last input character ends the string without error;
//! - `\u` escapes that are not followed by four hex digits are dropped.
//!
//! Trailing commas, comments and trailing content after the top-level value are rejected.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jsonlite::{parser::Parser, Value};
//!
//! let value = Parser::new("[ 'a', {'k':'v'}, 'b']").parse().unwrap();
//! assert_eq!(value[1]["k"], Value::from("v"));
//! ```

use crate::scanner::{self, Token};
use crate::{Error, JsonOptions, Map, Result, Value};
use std::num::IntErrorKind;

/// Single-use parser over one input string.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, &JsonOptions::default())
    }

    /// Creates a parser honouring `options.max_depth`.
    #[must_use]
    pub fn with_options(input: &'a str, options: &JsonOptions) -> Self {
        Parser {
            input,
            position: 0,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Current cursor as a byte offset.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parses one value and requires that only whitespace follows it.
    pub fn parse(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.position = scanner::skip_whitespace(self.input, self.position);
        if self.position < self.input.len() {
            return Err(self.error(self.position, "trailing characters after value"));
        }
        Ok(value)
    }

    /// Parses whichever value starts at the cursor.
    pub fn parse_value(&mut self) -> Result<Value> {
        let token = scanner::peek(self.input, self.position);
        self.position = scanner::skip_whitespace(self.input, self.position);

        match token {
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::StringMarker => Ok(Value::String(self.parse_string()?)),
            Token::Number => self.parse_number(),
            Token::True | Token::False | Token::Null => {
                scanner::advance(self.input, &mut self.position);
                Ok(match token {
                    Token::True => Value::Bool(true),
                    Token::False => Value::Bool(false),
                    _ => Value::Null,
                })
            }
            _ => Err(self.unexpected(self.position, "expected a value")),
        }
    }

    /// Parses `{ "key": value, ... }`.
    pub fn parse_object(&mut self) -> Result<Value> {
        let start = scanner::skip_whitespace(self.input, self.position);
        self.expect(Token::LeftBrace, "expected '{'")?;
        self.enter(start)?;

        let mut map = Map::new();

        if scanner::peek(self.input, self.position) == Token::RightBrace {
            scanner::advance(self.input, &mut self.position);
            self.depth -= 1;
            return Ok(Value::Object(map));
        }

        loop {
            self.position = scanner::skip_whitespace(self.input, self.position);
            if scanner::peek(self.input, self.position) != Token::StringMarker {
                return Err(self.unexpected(self.position, "expected a string key"));
            }
            let key = self.parse_string()?;

            self.expect(Token::Colon, "expected ':' after object key")?;

            let value = self.parse_value()?;
            map.insert(key, value);

            let at = scanner::skip_whitespace(self.input, self.position);
            match scanner::advance(self.input, &mut self.position) {
                Token::Comma => continue,
                Token::RightBrace => break,
                _ => return Err(self.unexpected(at, "expected ',' or '}' after object member")),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(map))
    }

    /// Parses `[ value, ... ]`.
    pub fn parse_array(&mut self) -> Result<Value> {
        let start = scanner::skip_whitespace(self.input, self.position);
        self.expect(Token::LeftBracket, "expected '['")?;
        self.enter(start)?;

        let mut elements = Vec::new();

        if scanner::peek(self.input, self.position) == Token::RightBracket {
            scanner::advance(self.input, &mut self.position);
            self.depth -= 1;
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.parse_value()?);

            let at = scanner::skip_whitespace(self.input, self.position);
            match scanner::advance(self.input, &mut self.position) {
                Token::Comma => continue,
                Token::RightBracket => break,
                _ => return Err(self.unexpected(at, "expected ',' or ']' after array element")),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    /// Parses a quoted string and decodes its escapes.
    pub fn parse_string(&mut self) -> Result<String> {
        let start = scanner::skip_whitespace(self.input, self.position);
        self.expect(Token::StringMarker, "expected a string")?;

        let mut result = String::new();

        loop {
            let Some(ch) = self.next_char() else {
                return Err(self.error(start, "unterminated string"));
            };

            match ch {
                '"' | '\'' => return Ok(result),
                '\\' => match self.next_char() {
                    None => return Ok(result),
                    Some('"') => result.push('"'),
                    Some('\\') => result.push('\\'),
                    Some('/') => result.push('/'),
                    Some('b') => result.push('\u{0008}'),
                    Some('f') => result.push('\u{000C}'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('u') => {
                        if let Some(decoded) = self.parse_unicode_escape() {
                            result.push(decoded);
                        }
                    }
                    Some(other) => result.push(other),
                },
                other => result.push(other),
            }
        }
    }

    /// Parses a number literal. Literals containing `.`, `e` or `E` become
    /// [`Value::Float`]; the rest become [`Value::Integer`], falling back to a
    /// float when they overflow `i64`.
    pub fn parse_number(&mut self) -> Result<Value> {
        let start = scanner::skip_whitespace(self.input, self.position);
        self.position = start;

        while let Some(ch) = self.peek_char() {
            if matches!(ch, '0'..='9' | '.' | '-' | '+' | 'e' | 'E') {
                self.position += 1;
            } else {
                break;
            }
        }

        let text = &self.input[start..self.position];
        if text.is_empty() {
            return Err(self.unexpected(start, "expected a number"));
        }

        if text.contains(&['.', 'e', 'E'][..]) {
            return self.parse_float(start, text);
        }

        match text.parse::<i64>() {
            Ok(i) => Ok(Value::Integer(i)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                self.parse_float(start, text)
            }
            Err(_) => Err(self.error(start, "invalid number")),
        }
    }

    /// Literals outside the `f64` range are rejected; infinity has no JSON form.
    fn parse_float(&self, start: usize, text: &str) -> Result<Value> {
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Float(f)),
            Ok(_) => Err(self.error(start, "number out of range")),
            Err(_) => Err(self.error(start, "invalid number")),
        }
    }

    /// Decodes the four hex digits after `\u`. The cursor sits just after the `u`.
    ///
    /// A high surrogate followed by `\u` and a low surrogate yields one scalar;
    /// any other surrogate yields U+FFFD. Returns `None` and leaves the cursor in
    /// place when four hex digits are not available.
    fn parse_unicode_escape(&mut self) -> Option<char> {
        let unit = self.read_hex4(self.position)?;
        self.position += 4;

        if !(0xD800..=0xDFFF).contains(&unit) {
            return char::from_u32(u32::from(unit));
        }

        if unit <= 0xDBFF && self.input[self.position..].starts_with("\\u") {
            if let Some(low) = self.read_hex4(self.position + 2) {
                if (0xDC00..=0xDFFF).contains(&low) {
                    self.position += 6;
                    let scalar =
                        0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                    return char::from_u32(scalar);
                }
            }
        }

        Some(char::REPLACEMENT_CHARACTER)
    }

    fn read_hex4(&self, at: usize) -> Option<u16> {
        let digits = self.input.get(at..at + 4)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u16::from_str_radix(digits, 16).ok()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `token` or fails at the position it was expected.
    fn expect(&mut self, token: Token, msg: &str) -> Result<()> {
        let at = scanner::skip_whitespace(self.input, self.position);
        if scanner::advance(self.input, &mut self.position) == token {
            Ok(())
        } else {
            Err(self.unexpected(at, msg))
        }
    }

    fn enter(&mut self, at: usize) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(at, "nesting too deep"));
        }
        Ok(())
    }

    fn unexpected(&self, at: usize, msg: &str) -> Error {
        if at >= self.input.len() {
            self.error(at, "unexpected end of input")
        } else {
            self.error(at, msg)
        }
    }

    fn error(&self, position: usize, msg: &str) -> Error {
        tracing::debug!(position, msg, "rejecting malformed JSON");
        Error::invalid_json(position, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<Value> {
        Parser::new(input).parse()
    }

    fn parse_err(input: &str) -> (usize, String) {
        match parse(input) {
            Err(Error::InvalidJson { position, msg }) => (position, msg),
            other => panic!("expected InvalidJson for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse("null").unwrap(), Value::Null);
        assert_eq!(parse(" true ").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
        assert_eq!(parse("42").unwrap(), Value::Integer(42));
        assert_eq!(parse("-7").unwrap(), Value::Integer(-7));
        assert_eq!(parse("3.25").unwrap(), Value::Float(3.25));
        assert_eq!(parse("1e3").unwrap(), Value::Float(1000.0));
        assert_eq!(parse("2E-2").unwrap(), Value::Float(0.02));
        assert_eq!(parse("\"hello, world\"").unwrap(), Value::from("hello, world"));
    }

    #[test]
    fn test_lenient_numbers() {
        assert_eq!(parse("+5").unwrap(), Value::Integer(5));
        assert_eq!(parse(".5").unwrap(), Value::Float(0.5));
        assert_eq!(parse("5.").unwrap(), Value::Float(5.0));
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        assert_eq!(
            parse("9223372036854775808").unwrap(),
            Value::Float(9_223_372_036_854_775_808.0)
        );
        assert_eq!(
            parse("-9223372036854775808").unwrap(),
            Value::Integer(i64::MIN)
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(parse_err("1.2.3"), (0, "invalid number".to_string()));
        assert_eq!(parse_err("[1, --2]").0, 4);
        assert_eq!(parse_err("-").0, 0);
        assert_eq!(parse_err("1-2").0, 0);
    }

    #[test]
    fn test_out_of_range_numbers() {
        assert_eq!(parse_err("1e400"), (0, "number out of range".to_string()));
        assert_eq!(parse_err("-1e400"), (0, "number out of range".to_string()));
        assert_eq!(parse_err("[0, 1.5e999]").0, 4);

        let digits = format!("1{}", "0".repeat(400));
        assert_eq!(parse_err(&digits), (0, "number out of range".to_string()));

        assert_eq!(parse("1e308").unwrap(), Value::Float(1e308));
        assert_eq!(parse("1e-400").unwrap(), Value::Float(0.0));
    }

    #[test]
    fn test_single_and_mixed_quotes() {
        assert_eq!(parse("'abc'").unwrap(), Value::from("abc"));
        assert_eq!(parse("'abc\"").unwrap(), Value::from("abc"));
        assert_eq!(parse("\"it's\"").unwrap_err().position(), Some(4));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            parse(r#""a\"b\\c\/d\be\ff\ng\rh\ti""#).unwrap(),
            Value::from("a\"b\\c/d\u{8}e\u{c}f\ng\rh\ti")
        );
        assert_eq!(parse(r#""\'""#).unwrap(), Value::from("'"));
        assert_eq!(parse(r#""\q""#).unwrap(), Value::from("q"));
    }

    #[test]
    fn test_unicode_escapes() {
        assert_eq!(
            parse(r#""The temperature is 75.4\u2109 today.""#).unwrap(),
            Value::from("The temperature is 75.4\u{2109} today.")
        );
        assert_eq!(parse(r#""\ud83d\ude00""#).unwrap(), Value::from("\u{1F600}"));
        assert_eq!(parse(r#""\ud83dx""#).unwrap(), Value::from("\u{FFFD}x"));
        assert_eq!(parse(r#""\u0027""#).unwrap(), Value::from("'"));
    }

    #[test]
    fn test_malformed_unicode_escape_is_dropped() {
        assert_eq!(parse(r#""a\u12""#).unwrap(), Value::from("a12"));
        assert_eq!(parse(r#""a\uzzzzb""#).unwrap(), Value::from("azzzzb"));
    }

    #[test]
    fn test_trailing_backslash_ends_string() {
        assert_eq!(parse("\"abc\\").unwrap(), Value::from("abc"));
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(parse_err("\"abc"), (0, "unterminated string".to_string()));
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(parse("'héllo ✓'").unwrap(), Value::from("héllo ✓"));
        assert_eq!(parse("\u{3000}[1]").unwrap(), Value::Array(vec![Value::Integer(1)]));
    }

    #[test]
    fn test_array_with_nested_object() {
        let value = parse("[ 'a', {'k':'v'}, 'b']").unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr[0], Value::from("a"));
        assert_eq!(arr[1].get("k"), Some(&Value::from("v")));
        assert_eq!(arr[2], Value::from("b"));
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse("[]").unwrap(), Value::Array(vec![]));
        assert_eq!(parse("{ }").unwrap(), Value::Object(Map::new()));
        assert_eq!(parse("[[], {}]").unwrap().as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_object_key_order_and_duplicates() {
        let value = parse(r#"{"b": 1, "a": 2, "b": 3}"#).unwrap();
        let obj = value.as_object().unwrap();
        let keys: Vec<_> = obj.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(obj.get("b"), Some(&Value::Integer(3)));
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(
            parse_err("{'name'{ 'john'}"),
            (7, "expected ':' after object key".to_string())
        );
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse_err("{,}").0, 1);
        assert_eq!(parse_err("{\"a\":1,}").0, 7);
        assert_eq!(parse_err("{\"a\":1 \"b\":2}").0, 7);
        assert_eq!(parse_err("{1:2}").0, 1);
        assert_eq!(parse_err("[,1]").0, 1);
        assert_eq!(parse_err("[1,]").0, 3);
        assert_eq!(parse_err("[1 2]").0, 3);
        assert_eq!(parse_err("nope").0, 0);
        assert_eq!(parse_err("[1] x").0, 4);
    }

    #[test]
    fn test_premature_end() {
        for input in ["", "   ", "[", "[1,", "{", "{\"a\"", "{\"a\":", "{\"a\":1"] {
            let (position, msg) = parse_err(input);
            assert_eq!(position, input.len(), "input {:?}", input);
            assert_eq!(msg, "unexpected end of input");
        }
    }

    #[test]
    fn test_depth_limit() {
        let ok = format!("{}{}", "[".repeat(128), "]".repeat(128));
        assert!(parse(&ok).is_ok());

        let deep = format!("{}{}", "[".repeat(129), "]".repeat(129));
        assert_eq!(parse_err(&deep), (128, "nesting too deep".to_string()));

        let deep = format!("{}1{}", r#"{"a":"#.repeat(900), "}".repeat(900));
        assert_eq!(parse_err(&deep), (640, "nesting too deep".to_string()));

        let options = JsonOptions::new().with_max_depth(2);
        let mut parser = Parser::with_options(r#"{"a":{"b":{}}}"#, &options);
        assert_eq!(parser.parse().unwrap_err().position(), Some(10));
    }

    #[test]
    fn test_entry_points_share_cursor() {
        let mut parser = Parser::new("  'key' 12");
        assert_eq!(parser.parse_string().unwrap(), "key");
        assert_eq!(parser.position(), 7);
        assert_eq!(parser.parse_number().unwrap(), Value::Integer(12));
        assert_eq!(parser.position(), 10);
    }
}
