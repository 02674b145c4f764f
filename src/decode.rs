//! Case-insensitive JSON decoding.
//!
//! Glassix is not consistent about property casing: the same field may
//! arrive as `ticketId`, `TicketId` or `TICKETID` depending on the endpoint.
//! [`from_slice`] parses the body into a `serde_json::Value` and feeds it to
//! the target type through a deserializer that, whenever a struct is
//! requested, rewrites each object key to the struct's declared field name
//! it matches ignoring ASCII case. An exact match always wins over a
//! case-insensitive one. Keys that match nothing are passed through, so
//! serde aliases and unknown-field handling behave as usual.
//!
//! Map-typed fields (`HashMap<String, _>`) keep their keys verbatim.

use serde::de::{
    self, DeserializeOwned, DeserializeSeed, Deserializer, IntoDeserializer, MapAccess, SeqAccess,
    Visitor,
};
use serde_json::{Map, Value};

/// Deserializes `T` from JSON bytes, matching struct field names without
/// regard to ASCII case.
pub(crate) fn from_slice<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    let value: Value = serde_json::from_slice(body)?;
    T::deserialize(CaseInsensitive(value))
}

struct CaseInsensitive(Value);

/// Renames keys of `object` to the matching entry of `fields`.
fn canonicalize(object: Map<String, Value>, fields: &'static [&'static str]) -> Map<String, Value> {
    let mut exact = Map::new();
    let mut folded = Vec::new();

    for (key, value) in object {
        if fields.contains(&key.as_str()) {
            exact.insert(key, value);
        } else {
            let canonical = fields
                .iter()
                .find(|f| f.eq_ignore_ascii_case(&key))
                .map(|f| (*f).to_string());
            folded.push((canonical.unwrap_or(key), value));
        }
    }

    for (key, value) in folded {
        exact.entry(key).or_insert(value);
    }
    exact
}

impl<'de> Deserializer<'de> for CaseInsensitive {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Array(items) => visitor.visit_seq(ArrayAccess(items.into_iter())),
            Value::Object(object) => visitor.visit_map(ObjectAccess::new(object)),
            other => other.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(CaseInsensitive(other)),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(object) => visitor.visit_map(ObjectAccess::new(canonicalize(object, fields))),
            other => other.deserialize_struct(name, fields, visitor),
        }
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        // Variant names are wire strings and stay exact.
        self.0.deserialize_enum(name, variants, visitor)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

struct ArrayAccess(std::vec::IntoIter<Value>);

impl<'de> SeqAccess<'de> for ArrayAccess {
    type Error = serde_json::Error;

    fn next_element_seed<T: DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>, Self::Error> {
        self.0
            .next()
            .map(|value| seed.deserialize(CaseInsensitive(value)))
            .transpose()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.0.len())
    }
}

struct ObjectAccess {
    entries: serde_json::map::IntoIter,
    pending: Option<Value>,
}

impl ObjectAccess {
    fn new(object: Map<String, Value>) -> Self {
        Self {
            entries: object.into_iter(),
            pending: None,
        }
    }
}

impl<'de> MapAccess<'de> for ObjectAccess {
    type Error = serde_json::Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(
        &mut self,
        seed: K,
    ) -> Result<Option<K::Value>, Self::Error> {
        match self.entries.next() {
            Some((key, value)) => {
                self.pending = Some(value);
                let key: de::value::StringDeserializer<serde_json::Error> = key.into_deserializer();
                seed.deserialize(key).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Self::Error> {
        match self.pending.take() {
            Some(value) => seed.deserialize(CaseInsensitive(value)),
            None => Err(de::Error::custom("value requested before key")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}
