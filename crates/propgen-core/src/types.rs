use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::descriptor::FieldDescriptor;
use crate::metadata::MetadataTree;

/// Kind of value a field holds.
///
/// Closed set; every engine matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Bool,
    Number,
    String,
    Any,
    Element,
    Node,
    Func,
    /// Homogeneous sequence of `of`.
    List { of: Box<FieldKind> },
    /// String-keyed mapping with homogeneous values of `of`.
    Map { of: Box<FieldKind> },
    /// One of a fixed, ordered list of literals.
    Enum { values: Vec<serde_json::Value> },
    /// One of several alternative descriptors, in declaration order.
    Union { variants: Vec<FieldDescriptor> },
    /// Nested field mapping.
    Record { fields: MetadataTree },
    /// Instance of a named component built from its own field mapping.
    Component(Component),
}

impl FieldKind {
    /// Stable lowercase name of the kind, as used in serialized metadata.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::Number => "number",
            FieldKind::String => "string",
            FieldKind::Any => "any",
            FieldKind::Element => "element",
            FieldKind::Node => "node",
            FieldKind::Func => "func",
            FieldKind::List { .. } => "list",
            FieldKind::Map { .. } => "map",
            FieldKind::Enum { .. } => "enum",
            FieldKind::Union { .. } => "union",
            FieldKind::Record { .. } => "record",
            FieldKind::Component(_) => "component",
        }
    }

    /// Whether exhaustive enumeration can list every value of this kind.
    pub fn is_finite_choice(&self) -> bool {
        matches!(
            self,
            FieldKind::Bool
                | FieldKind::Enum { .. }
                | FieldKind::Union { .. }
                | FieldKind::Record { .. }
                | FieldKind::Component(_)
        )
    }
}

/// A named component and the fields an instance of it is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Component {
    pub name: String,
    pub fields: MetadataTree,
}

impl Component {
    pub fn new(name: impl Into<String>, fields: MetadataTree) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}
