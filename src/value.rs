//! Tree-shaped document values
//!
//! Every node of a document is exactly one of three shapes: a [`Primitive`]
//! scalar, an [`Object`] mapping string keys to nodes, or an array of nodes.
//! Both diff inputs and the values carried by each
//! [`Difference`](crate::types::Difference) use this one type, so a whole
//! subtree that was added or removed is reported as-is.
//!
//! Any self-describing serde format can produce a [`TreeValue`]:
//!
//! ```rust
//! use jsondelta::TreeValue;
//!
//! let value: TreeValue = serde_json::from_str(r#"{"foo": [1, 2.5, "x"]}"#).unwrap();
//! assert_eq!(value.kind(), "object");
//! assert_eq!(value.to_string(), r#"{"foo":[1,2.5,"x"]}"#);
//! ```

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Mapping node. Keys iterate in sorted order.
pub type Object = BTreeMap<String, TreeValue>;

/// A scalar leaf, compared by value
///
/// Integers and floats are different kinds: `1` never equals `1.0`.
/// Floats compare by bit pattern with `-0.0` folded into `0.0` and every
/// NaN folded into one, so each value equals itself.
#[derive(Debug, Clone)]
pub enum Primitive {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

fn float_bits(f: f64) -> u64 {
    if f == 0.0 {
        0.0f64.to_bits()
    } else if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Primitive::Null, Primitive::Null) => true,
            (Primitive::Bool(a), Primitive::Bool(b)) => a == b,
            (Primitive::Integer(a), Primitive::Integer(b)) => a == b,
            (Primitive::Float(a), Primitive::Float(b)) => float_bits(*a) == float_bits(*b),
            (Primitive::String(a), Primitive::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Primitive {}

impl Hash for Primitive {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Primitive::Null => state.write_u8(0),
            Primitive::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Primitive::Integer(i) => {
                state.write_u8(2);
                i.hash(state);
            }
            Primitive::Float(f) => {
                state.write_u8(3);
                float_bits(*f).hash(state);
            }
            Primitive::String(s) => {
                state.write_u8(4);
                s.hash(state);
            }
        }
    }
}

/// A document node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TreeValue {
    Primitive(Primitive),
    Object(Object),
    Array(Vec<TreeValue>),
}

impl TreeValue {
    /// The JSON null value
    pub fn null() -> Self {
        TreeValue::Primitive(Primitive::Null)
    }

    /// Short name of the node's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            TreeValue::Primitive(Primitive::Null) => "null",
            TreeValue::Primitive(Primitive::Bool(_)) => "boolean",
            TreeValue::Primitive(Primitive::Integer(_)) => "integer",
            TreeValue::Primitive(Primitive::Float(_)) => "float",
            TreeValue::Primitive(Primitive::String(_)) => "string",
            TreeValue::Object(_) => "object",
            TreeValue::Array(_) => "array",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TreeValue::Primitive(_))
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            TreeValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Number of nested container levels, counting this node
    ///
    /// Primitives have depth 0, `{}` and `[]` have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            TreeValue::Primitive(_) => 0,
            TreeValue::Object(map) => 1 + map.values().map(TreeValue::depth).max().unwrap_or(0),
            TreeValue::Array(items) => 1 + items.iter().map(TreeValue::depth).max().unwrap_or(0),
        }
    }
}

impl From<bool> for TreeValue {
    fn from(value: bool) -> Self {
        TreeValue::Primitive(Primitive::Bool(value))
    }
}

impl From<i64> for TreeValue {
    fn from(value: i64) -> Self {
        TreeValue::Primitive(Primitive::Integer(value))
    }
}

impl From<i32> for TreeValue {
    fn from(value: i32) -> Self {
        TreeValue::Primitive(Primitive::Integer(i64::from(value)))
    }
}

impl From<f64> for TreeValue {
    fn from(value: f64) -> Self {
        TreeValue::Primitive(Primitive::Float(value))
    }
}

impl From<&str> for TreeValue {
    fn from(value: &str) -> Self {
        TreeValue::Primitive(Primitive::String(value.to_string()))
    }
}

impl From<String> for TreeValue {
    fn from(value: String) -> Self {
        TreeValue::Primitive(Primitive::String(value))
    }
}

impl From<Object> for TreeValue {
    fn from(value: Object) -> Self {
        TreeValue::Object(value)
    }
}

impl From<Vec<TreeValue>> for TreeValue {
    fn from(value: Vec<TreeValue>) -> Self {
        TreeValue::Array(value)
    }
}

fn number_to_primitive(number: &serde_json::Number) -> Primitive {
    if let Some(i) = number.as_i64() {
        Primitive::Integer(i)
    } else {
        // u64 above i64::MAX, or a real float
        Primitive::Float(number.as_f64().unwrap_or(f64::NAN))
    }
}

impl From<serde_json::Value> for TreeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => TreeValue::null(),
            Value::Bool(b) => b.into(),
            Value::Number(n) => TreeValue::Primitive(number_to_primitive(&n)),
            Value::String(s) => s.into(),
            Value::Array(items) => TreeValue::Array(items.into_iter().map(TreeValue::from).collect()),
            Value::Object(map) => TreeValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, TreeValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Compact JSON rendering
impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for TreeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TreeValue::Primitive(Primitive::Null) => serializer.serialize_unit(),
            TreeValue::Primitive(Primitive::Bool(b)) => serializer.serialize_bool(*b),
            TreeValue::Primitive(Primitive::Integer(i)) => serializer.serialize_i64(*i),
            TreeValue::Primitive(Primitive::Float(f)) => serializer.serialize_f64(*f),
            TreeValue::Primitive(Primitive::String(s)) => serializer.serialize_str(s),
            TreeValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            TreeValue::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for TreeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TreeValueVisitor;

        impl<'de> Visitor<'de> for TreeValueVisitor {
            type Value = TreeValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a JSON-like value")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(match i64::try_from(v) {
                    Ok(i) => i.into(),
                    Err(_) => (v as f64).into(),
                })
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(TreeValue::null())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(TreeValue::null())
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(TreeValue::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut object = Object::new();
                while let Some((key, value)) = map.next_entry::<String, TreeValue>()? {
                    object.insert(key, value);
                }
                Ok(TreeValue::Object(object))
            }
        }

        deserializer.deserialize_any(TreeValueVisitor)
    }
}
