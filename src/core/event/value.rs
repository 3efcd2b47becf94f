// SPDX-License-Identifier: MIT OR Apache-2.0

// src/core/event/value.rs
use crate::query_api::definition::attribute::Type;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any::Any;
use std::fmt;

/// A single attribute value carried by an event.
#[derive(Default)]
pub enum AttributeValue {
    String(String),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Object(Option<Box<dyn Any + Send + Sync>>),
    #[default]
    Null,
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "String({s:?})"),
            AttributeValue::Int(i) => write!(f, "Int({i:?})"),
            AttributeValue::Long(l) => write!(f, "Long({l:?})"),
            AttributeValue::Float(fl) => write!(f, "Float({fl:?})"),
            AttributeValue::Double(d) => write!(f, "Double({d:?})"),
            AttributeValue::Bool(b) => write!(f, "Bool({b:?})"),
            AttributeValue::Object(_) => write!(f, "Object(<opaque>)"),
            AttributeValue::Null => write!(f, "Null"),
        }
    }
}

// Objects never compare equal: there is no way to compare two `dyn Any`.
impl PartialEq for AttributeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (AttributeValue::String(a), AttributeValue::String(b)) => a == b,
            (AttributeValue::Int(a), AttributeValue::Int(b)) => a == b,
            (AttributeValue::Long(a), AttributeValue::Long(b)) => a == b,
            (AttributeValue::Float(a), AttributeValue::Float(b)) => a == b,
            (AttributeValue::Double(a), AttributeValue::Double(b)) => a == b,
            (AttributeValue::Bool(a), AttributeValue::Bool(b)) => a == b,
            (AttributeValue::Null, AttributeValue::Null) => true,
            _ => false,
        }
    }
}

impl Clone for AttributeValue {
    fn clone(&self) -> Self {
        match self {
            AttributeValue::String(s) => AttributeValue::String(s.clone()),
            AttributeValue::Int(i) => AttributeValue::Int(*i),
            AttributeValue::Long(l) => AttributeValue::Long(*l),
            AttributeValue::Float(f) => AttributeValue::Float(*f),
            AttributeValue::Double(d) => AttributeValue::Double(*d),
            AttributeValue::Bool(b) => AttributeValue::Bool(*b),
            // opaque payloads cannot be cloned
            AttributeValue::Object(_) => AttributeValue::Object(None),
            AttributeValue::Null => AttributeValue::Null,
        }
    }
}

// --- serde support ---
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AttrSer {
    String(String),
    Bool(bool),
    Long(i64),
    Double(f64),
    Null,
}

impl Serialize for AttributeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr = match self {
            AttributeValue::String(s) => AttrSer::String(s.clone()),
            AttributeValue::Int(i) => AttrSer::Long(i64::from(*i)),
            AttributeValue::Long(l) => AttrSer::Long(*l),
            AttributeValue::Float(f) => AttrSer::Double(f64::from(*f)),
            AttributeValue::Double(d) => AttrSer::Double(*d),
            AttributeValue::Bool(b) => AttrSer::Bool(*b),
            AttributeValue::Object(_) | AttributeValue::Null => AttrSer::Null,
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = AttrSer::deserialize(deserializer)?;
        Ok(match repr {
            AttrSer::String(s) => AttributeValue::String(s),
            AttrSer::Bool(b) => AttributeValue::Bool(b),
            AttrSer::Long(l) => AttributeValue::Long(l),
            AttrSer::Double(d) => AttributeValue::Double(d),
            AttrSer::Null => AttributeValue::Null,
        })
    }
}

impl AttributeValue {
    pub fn as_string(&self) -> Option<&String> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Type of this value. Null reports OBJECT since it can stand for any type.
    pub fn get_type(&self) -> Type {
        match self {
            AttributeValue::String(_) => Type::STRING,
            AttributeValue::Int(_) => Type::INT,
            AttributeValue::Long(_) => Type::LONG,
            AttributeValue::Float(_) => Type::FLOAT,
            AttributeValue::Double(_) => Type::DOUBLE,
            AttributeValue::Bool(_) => Type::BOOL,
            AttributeValue::Object(_) | AttributeValue::Null => Type::OBJECT,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Long(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::String(s) => write!(f, "{s}"),
            AttributeValue::Int(i) => write!(f, "{i}"),
            AttributeValue::Long(l) => write!(f, "{l}"),
            AttributeValue::Float(v) => write!(f, "{v}"),
            AttributeValue::Double(v) => write!(f, "{v}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
            AttributeValue::Object(_) => write!(f, "<object>"),
            AttributeValue::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_type() {
        assert_eq!(AttributeValue::from("a").get_type(), Type::STRING);
        assert_eq!(AttributeValue::from(true).get_type(), Type::BOOL);
        assert_eq!(AttributeValue::Null.get_type(), Type::OBJECT);
    }

    #[test]
    fn test_objects_are_never_equal() {
        assert_ne!(AttributeValue::Object(None), AttributeValue::Object(None));
        assert_eq!(AttributeValue::Null, AttributeValue::Null);
    }

    #[test]
    fn test_json_representation() {
        let values = vec![
            AttributeValue::from("Android"),
            AttributeValue::Int(3),
            AttributeValue::Bool(false),
            AttributeValue::Null,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["Android",3,false,null]"#);

        let back: Vec<AttributeValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], AttributeValue::from("Android"));
        // integers widen to LONG on the way back
        assert_eq!(back[1], AttributeValue::Long(3));
    }
}
