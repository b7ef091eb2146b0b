//! Classification of field values into query-string kinds.

use std::fmt;

use serde::ser::{self, Impossible, Serialize};

use crate::config::Config;
use crate::error::*;

/// The kind of a field value, as seen through the serde data model.
///
/// Only [`Kind::Str`], [`Kind::I64`] and [`Kind::Bool`] have a query-string
/// representation. Everything else is reported back to the caller through
/// [`Error::UnsupportedValueKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    Char,
    Str,
    Bytes,
    Unit,
    Option,
    Seq,
    Tuple,
    Map,
    Struct,
    Enum,
}

impl Kind {
    /// Returns `true` for the kinds that convert to a query value.
    pub const fn is_supported(self) -> bool {
        matches!(self, Kind::Str | Kind::I64 | Kind::Bool)
    }

    fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::Str => "str",
            Kind::Bytes => "bytes",
            Kind::Unit => "unit",
            Kind::Option => "option",
            Kind::Seq => "sequence",
            Kind::Tuple => "tuple",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Enum => "enum",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value after classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Unsupported(Kind),
}

impl FieldValue {
    /// Classifies any serializable value.
    ///
    /// Newtype structs are looked through, so `struct Name(String)` is text.
    /// Errors are only returned for custom errors raised by the value's own
    /// `Serialize` implementation.
    pub fn from_value<T: ?Sized + Serialize>(value: &T) -> Result<Self> {
        match value.serialize(ValueSerializer) {
            Ok(value) => Ok(value),
            // compound types bail out of the serializer early
            Err(Error::UnsupportedValueKind { kind }) => Ok(FieldValue::Unsupported(kind)),
            Err(e) => Err(e),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            FieldValue::Text(_) => Kind::Str,
            FieldValue::Integer(_) => Kind::I64,
            FieldValue::Boolean(_) => Kind::Bool,
            FieldValue::Unsupported(kind) => *kind,
        }
    }

    /// Converts the value into its query-string form.
    ///
    /// Returns `Ok(None)` when `skip_empty` is set and the value is empty:
    /// the blank string for text, zero for integers. Booleans are never
    /// empty.
    pub fn into_query_value(self, config: &Config) -> Result<Option<String>> {
        let skip_empty = config.skips_empty();
        match self {
            FieldValue::Text(v) => {
                if v.is_empty() && skip_empty {
                    return Ok(None);
                }
                Ok(Some(v))
            }
            FieldValue::Integer(v) => {
                if v == 0 && skip_empty {
                    return Ok(None);
                }
                let mut buffer = itoa::Buffer::new();
                Ok(Some(buffer.format(v).to_owned()))
            }
            FieldValue::Boolean(v) => Ok(Some(if v { "true" } else { "false" }.to_owned())),
            FieldValue::Unsupported(kind) => Err(Error::unsupported(kind)),
        }
    }
}

macro_rules! serialize_unsupported {
    (
        $($ty:ty => $meth:ident => $kind:ident,)*) => {
        $(
            fn $meth(self, _v: $ty) -> Result<Self::Ok> {
                Ok(FieldValue::Unsupported(Kind::$kind))
            }
        )*
    };
}

/// Serializer that produces a [`FieldValue`] instead of output.
///
/// Scalars are classified directly. Compound types cannot produce a value,
/// so they return [`Error::UnsupportedValueKind`] before any element is
/// visited.
struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = FieldValue;
    type Error = Error;
    type SerializeSeq = Impossible<FieldValue, Error>;
    type SerializeTuple = Impossible<FieldValue, Error>;
    type SerializeTupleStruct = Impossible<FieldValue, Error>;
    type SerializeTupleVariant = Impossible<FieldValue, Error>;
    type SerializeMap = Impossible<FieldValue, Error>;
    type SerializeStruct = Impossible<FieldValue, Error>;
    type SerializeStructVariant = Impossible<FieldValue, Error>;

    serialize_unsupported! {
        i8 => serialize_i8 => I8,
        i16 => serialize_i16 => I16,
        i32 => serialize_i32 => I32,
        i128 => serialize_i128 => I128,
        u8 => serialize_u8 => U8,
        u16 => serialize_u16 => U16,
        u32 => serialize_u32 => U32,
        u64 => serialize_u64 => U64,
        u128 => serialize_u128 => U128,
        f32 => serialize_f32 => F32,
        f64 => serialize_f64 => F64,
        char => serialize_char => Char,
        &[u8] => serialize_bytes => Bytes,
    }

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(FieldValue::Boolean(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(FieldValue::Integer(v))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(FieldValue::Text(v.to_owned()))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(FieldValue::Unsupported(Kind::Option))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<Self::Ok> {
        Ok(FieldValue::Unsupported(Kind::Option))
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(FieldValue::Unsupported(Kind::Unit))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(FieldValue::Unsupported(Kind::Unit))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(FieldValue::Unsupported(Kind::Enum))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok> {
        Ok(FieldValue::Unsupported(Kind::Enum))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::unsupported(Kind::Seq))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Error::unsupported(Kind::Tuple))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Error::unsupported(Kind::Tuple))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported(Kind::Enum))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::unsupported(Kind::Map))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Error::unsupported(Kind::Struct))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported(Kind::Enum))
    }
}
