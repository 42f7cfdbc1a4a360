use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Record(Props),
    Element(Element),
    /// Stand-in for a callable; carries the stand-in's name.
    Func(&'static str),
    Instance(Instance),
}

impl Value {
    /// Convert an enum literal into a generated value.
    pub fn from_literal(literal: &serde_json::Value) -> Self {
        match literal {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(*value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(value) => Value::Int(value),
                None => Value::Float(number.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(value) => Value::Text(value.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_literal).collect())
            }
            serde_json::Value::Object(map) => Value::Map(
                map.iter()
                    .map(|(key, value)| (key.clone(), Value::from_literal(value)))
                    .collect(),
            ),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Props> {
        match self {
            Value::Record(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Value::Instance(instance) => Some(instance),
            _ => None,
        }
    }
}

/// One generated instance of a field mapping.
///
/// Every declared field has a slot; `None` marks an optional field that was
/// left absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props(IndexMap<String, Option<Value>>);

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<Value>) {
        self.0.insert(name.into(), value);
    }

    /// Value of a present field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).and_then(Option::as_ref)
    }

    /// Whether `name` has a slot, present or absent.
    pub fn has_slot(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether `name` has a slot that was left absent.
    pub fn is_absent(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(None))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Synthetic markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
}

/// Instance of a component, exposing the props it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub component: String,
    pub props: Props,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
            Value::Record(props) => props.serialize(serializer),
            Value::Element(element) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$element", &element.tag)?;
                map.end()
            }
            Value::Func(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("$func", name)?;
                map.end()
            }
            Value::Instance(instance) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("$component", &instance.component)?;
                map.serialize_entry("props", &instance.props)?;
                map.end()
            }
        }
    }
}

/// Absent fields are omitted.
impl Serialize for Props {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.0.iter().filter(|(_, value)| value.is_some()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for (name, value) in &self.0 {
            if let Some(value) = value {
                map.serialize_entry(name, value)?;
            }
        }
        map.end()
    }
}
