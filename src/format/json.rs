use crate::core::error::Result;
use serde::ser::{self, Error as _};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub fn json_pretty<T: Serialize + ?Sized>(value: &T) -> String {
    to_pretty(value, 4).unwrap_or_else(|e| e.to_string())
}

pub fn json_flat<T: Serialize + ?Sized>(value: &T) -> String {
    to_flat(value).unwrap_or_else(|e| e.to_string())
}

pub fn try_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    try_json_pretty_with(value, 4)
}

pub fn try_json_pretty_with<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<String> {
    Ok(to_pretty(value, indent)?)
}

pub fn try_json_flat<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(to_flat(value)?)
}

fn to_pretty<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<String> {
    value.serialize(FiniteCheck)?;
    let indent = vec![b' '; indent];
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn to_flat<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    value.serialize(FiniteCheck)?;
    serde_json::to_string(value)
}

// serde_json writes NaN and infinities as `null`; reject them up front instead.
#[derive(Clone, Copy)]
struct FiniteCheck;

type Check = std::result::Result<(), serde_json::Error>;

fn finite(v: f64) -> Check {
    if v.is_finite() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!("unsupported value: {}", v)))
    }
}

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> Check {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Check {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Check {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Check {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Check {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Check {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Check {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Check {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Check {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Check {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Check {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Check {
        finite(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Check {
        finite(v)
    }

    fn serialize_char(self, _v: char) -> Check {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Check {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Check {
        Ok(())
    }

    fn serialize_none(self) -> Check {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Check {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Check {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Check {
        Ok(())
    }

    fn serialize_unit_variant(self, _name: &'static str, _index: u32, _variant: &'static str) -> Check {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, value: &T) -> Check {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Check {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> std::result::Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Check {
        key.serialize(*self)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, _key: &'static str, value: &T) -> Check {
        value.serialize(*self)
    }

    fn end(self) -> Check {
        Ok(())
    }
}
