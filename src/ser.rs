//! JSON serialization.
//!
//! This module provides the [`Serializer`] that renders any `T: Serialize` as
//! JSON text, and [`ValueSerializer`] that builds a [`Value`] tree instead.
//!
//! ## Output Rules
//!
//! - `None` and `()` become `null`; booleans are lowercase
//! - integers have no decimal point, floats always carry one (`1.0`) or an exponent;
//!   NaN and infinities become `null`
//! - strings are double-quoted and escaped so the parser reads them back unchanged
//! - sequences become arrays, structs and maps become objects (struct fields in
//!   declaration order), enum variants with data become single-key objects
//!
//! Compact output contains no whitespace. Pretty output puts every element on its
//! own line.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde_jsonlite::{JsonOptions, Serializer};
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new(JsonOptions::new());
//! vec!["A", "B", "C"].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), r#"["A","B","C"]"#);
//! ```

use crate::{to_value, Error, JsonOptions, Map, Result, Value};
use serde::{ser, Serialize};
use std::fmt::Debug;

/// The JSON text serializer.
pub struct Serializer {
    output: String,
    options: JsonOptions,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: JsonOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            self.output
                .push_str(&" ".repeat(self.indent_level * self.options.indent));
        }
    }

    fn begin(&mut self, open: char) {
        self.output.push(open);
        self.indent_level += 1;
    }

    fn end(&mut self, close: char, empty: bool) {
        self.indent_level -= 1;
        if !empty {
            self.write_indent();
        }
        self.output.push(close);
    }

    /// Writes the separator and indentation that precede an element.
    fn element(&mut self, first: &mut bool) {
        if !*first {
            self.output.push(',');
        }
        *first = false;
        self.write_indent();
    }

    fn key_separator(&mut self) {
        self.output.push(':');
        if self.options.pretty {
            self.output.push(' ');
        }
    }

    fn write_float<F: Debug>(&mut self, v: F, finite: bool) {
        if finite {
            // Debug keeps a decimal point on whole numbers and switches to an
            // exponent for very large or small magnitudes.
            self.output.push_str(&format!("{:?}", v));
        } else {
            self.output.push_str("null");
        }
    }

    /// Opens `{"variant":` for enum variants that carry data.
    fn begin_variant(&mut self, variant: &str) {
        self.begin('{');
        self.write_indent();
        write_escaped(&mut self.output, variant);
        self.key_separator();
    }
}

/// Writes `s` as a double-quoted JSON string.
///
/// `'` is written as `\u0027` because the parser also closes strings on a
/// single quote.
pub(crate) fn write_escaped(output: &mut String, s: &str) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\'' => output.push_str("\\u0027"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            c if (c as u32) < 0x20 => output.push_str(&format!("\\u{:04x}", c as u32)),
            _ => output.push(ch),
        }
    }
    output.push('"');
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.output.push_str(&v.to_string());
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.output.push_str(&v.to_string());
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.write_float(v, v.is_finite());
        Ok(())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.write_float(v, v.is_finite());
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.serialize_str(v.encode_utf8(&mut [0; 4]))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        write_escaped(&mut self.output, v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.output.push_str("null");
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.begin_variant(variant);
        value.serialize(&mut *self)?;
        self.end('}', false);
        Ok(())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Compound<'a>> {
        self.begin('[');
        Ok(Compound::new(self, ']', false))
    }

    fn serialize_tuple(self, len: usize) -> Result<Compound<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<Compound<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>> {
        self.begin_variant(variant);
        self.begin('[');
        Ok(Compound::new(self, ']', true))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Compound<'a>> {
        self.begin('{');
        Ok(Compound::new(self, '}', false))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Compound<'a>> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Compound<'a>> {
        self.begin_variant(variant);
        self.begin('{');
        Ok(Compound::new(self, '}', true))
    }
}

/// State for an open array or object.
pub struct Compound<'a> {
    ser: &'a mut Serializer,
    close: char,
    first: bool,
    in_variant: bool,
}

impl<'a> Compound<'a> {
    fn new(ser: &'a mut Serializer, close: char, in_variant: bool) -> Self {
        Compound {
            ser,
            close,
            first: true,
            in_variant,
        }
    }

    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.element(&mut self.first);
        value.serialize(&mut *self.ser)
    }

    fn field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.element(&mut self.first);
        write_escaped(&mut self.ser.output, key);
        self.ser.key_separator();
        value.serialize(&mut *self.ser)
    }

    fn finish(self) -> Result<()> {
        self.ser.end(self.close, self.first);
        if self.in_variant {
            self.ser.end('}', false);
        }
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeTuple for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleVariant for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeMap for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = key.serialize(MapKeySerializer)?;
        self.ser.element(&mut self.first);
        write_escaped(&mut self.ser.output, &key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.key_separator();
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeStruct for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeStructVariant for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Turns map keys into strings. Numbers, booleans and chars are stringified.
struct MapKeySerializer;

fn key_must_be_a_string() -> Error {
    Error::custom("map keys must be strings")
}

impl ser::Serializer for MapKeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = ser::Impossible<String, Error>;
    type SerializeTuple = ser::Impossible<String, Error>;
    type SerializeTupleStruct = ser::Impossible<String, Error>;
    type SerializeTupleVariant = ser::Impossible<String, Error>;
    type SerializeMap = ser::Impossible<String, Error>;
    type SerializeStruct = ser::Impossible<String, Error>;
    type SerializeStructVariant = ser::Impossible<String, Error>;

    fn serialize_bool(self, v: bool) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
        Err(key_must_be_a_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_must_be_a_string())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_must_be_a_string())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_must_be_a_string())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_must_be_a_string())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_must_be_a_string())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_must_be_a_string())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_must_be_a_string())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_must_be_a_string())
    }
}

/// Serializer producing a [`Value`] tree, used by [`to_value`](crate::to_value).
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<String>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
    variant: Option<String>,
}

/// Wraps `value` as `{"variant": value}`.
fn variant_object(variant: String, value: Value) -> Value {
    let mut object = Map::with_capacity(1);
    object.insert(variant, value);
    Value::Object(object)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeMap;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Integer(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v.iter().map(|&b| Value::Integer(i64::from(b))).collect();
        Ok(Value::Array(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(variant_object(variant.to_string(), to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(Some(len), None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(Some(len), None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(Some(len), Some(variant.to_string())))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeMap> {
        Ok(SerializeMap::new(Some(variant.to_string())))
    }
}

impl SerializeVec {
    fn new(len: Option<usize>, variant: Option<String>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
            variant,
        }
    }

    fn finish(self) -> Value {
        let array = Value::Array(self.vec);
        match self.variant {
            Some(variant) => variant_object(variant, array),
            None => array,
        }
    }
}

impl SerializeMap {
    fn new(variant: Option<String>) -> Self {
        SerializeMap {
            map: Map::new(),
            current_key: None,
            variant,
        }
    }

    fn finish(self) -> Value {
        let object = Value::Object(self.map);
        match self.variant {
            Some(variant) => variant_object(variant, object),
            None => object,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(MapKeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    fn compact<T: Serialize>(value: &T) -> String {
        let mut serializer = Serializer::new(JsonOptions::new());
        value.serialize(&mut serializer).unwrap();
        serializer.into_inner()
    }

    fn pretty<T: Serialize>(value: &T) -> String {
        let mut serializer = Serializer::new(JsonOptions::pretty());
        value.serialize(&mut serializer).unwrap();
        serializer.into_inner()
    }

    #[derive(Serialize)]
    struct Foo {
        #[serde(rename = "A")]
        a: String,
        #[serde(rename = "B")]
        b: Vec<String>,
        #[serde(rename = "C")]
        c: i32,
    }

    #[derive(Serialize)]
    struct Empty {}

    #[derive(Serialize)]
    enum Shape {
        Dot,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_record_with_array() {
        let foo = Foo {
            a: "Hello".to_string(),
            b: vec!["X".to_string(), "Y".to_string(), "Z".to_string()],
            c: 42,
        };
        assert_eq!(compact(&foo), r#"{"A":"Hello","B":["X","Y","Z"],"C":42}"#);
    }

    #[test]
    fn test_empty_sequence_and_record() {
        assert_eq!(compact(&Vec::<String>::new()), "[]");
        assert_eq!(compact(&Empty {}), "{}");
        assert_eq!(pretty(&Vec::<i32>::new()), "[]");
        assert_eq!(pretty(&Empty {}), "{}");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&()), "null");
        assert_eq!(compact(&None::<i32>), "null");
        assert_eq!(compact(&true), "true");
        assert_eq!(compact(&-42i64), "-42");
        assert_eq!(compact(&u64::MAX), "18446744073709551615");
        assert_eq!(compact(&'c'), r#""c""#);
    }

    #[test]
    fn test_floats_keep_decimal_point() {
        assert_eq!(compact(&1.0f64), "1.0");
        assert_eq!(compact(&1.1f64), "1.1");
        assert_eq!(compact(&1.1f32), "1.1");
        assert_eq!(compact(&-0.5f64), "-0.5");
        assert_eq!(compact(&1e300f64), "1e300");
        assert_eq!(compact(&f64::NAN), "null");
        assert_eq!(compact(&f64::INFINITY), "null");
    }

    #[test]
    fn test_mixed_array() {
        let mixed = vec![
            Value::from("X"),
            Value::from("Y"),
            Value::from("Z"),
            Value::from(1.1),
            Value::from(1.2),
            Value::from(1.3),
        ];
        assert_eq!(compact(&mixed), r#"["X","Y","Z",1.1,1.2,1.3]"#);
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(
            compact(&"a\"b\\c\nd\re\tf\u{8}g\u{c}h"),
            r#""a\"b\\c\nd\re\tf\bg\fh""#
        );
        assert_eq!(compact(&"it's"), r#""it\u0027s""#);
        assert_eq!(compact(&"\u{1}"), r#""\u0001""#);
        assert_eq!(compact(&"héllo ℉"), "\"héllo ℉\"");
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(compact(&Shape::Dot), r#""Dot""#);
        assert_eq!(compact(&Shape::Circle(1.5)), r#"{"Circle":1.5}"#);
        assert_eq!(compact(&Shape::Line(1, 2)), r#"{"Line":[1,2]}"#);
        assert_eq!(compact(&Shape::Rect { w: 3, h: 4 }), r#"{"Rect":{"w":3,"h":4}}"#);
    }

    #[test]
    fn test_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(1, "one");
        assert_eq!(compact(&map), r#"{"1":"one","2":"two"}"#);

        let mut bad = BTreeMap::new();
        bad.insert(vec![1], 1);
        let mut serializer = Serializer::new(JsonOptions::new());
        assert!(bad.serialize(&mut serializer).is_err());
    }

    #[test]
    fn test_pretty_layout() {
        let foo = Foo {
            a: "Hello".to_string(),
            b: vec!["X".to_string()],
            c: 42,
        };
        assert_eq!(
            pretty(&foo),
            "{\n  \"A\": \"Hello\",\n  \"B\": [\n    \"X\"\n  ],\n  \"C\": 42\n}"
        );
        assert_eq!(
            pretty(&Shape::Rect { w: 3, h: 4 }),
            "{\n  \"Rect\": {\n    \"w\": 3,\n    \"h\": 4\n  }\n}"
        );
    }

    #[test]
    fn test_value_serializer() {
        let value = to_value(&Shape::Line(1, 2)).unwrap();
        assert_eq!(
            value.get("Line"),
            Some(&Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
        );
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
        assert_eq!(to_value(&"s").unwrap(), Value::from("s"));
    }
}
