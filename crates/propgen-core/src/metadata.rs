use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::error::{Error, Result};
use crate::template::check_template;
use crate::types::FieldKind;

/// Ordered mapping from field name to descriptor.
///
/// Insertion order is declaration order; the exhaustive enumerator relies
/// on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MetadataTree(IndexMap<String, FieldDescriptor>);

impl MetadataTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, keeping declaration order. Re-declaring a name replaces
    /// the descriptor in place.
    pub fn with_field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.0.insert(name.into(), descriptor);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDescriptor)> {
        self.0.iter().map(|(name, descriptor)| (name.as_str(), descriptor))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check every descriptor in the tree, including nested ones.
    ///
    /// Trees built with [`crate::fields`] are valid by construction; this is
    /// for trees that were deserialized.
    pub fn validate(&self) -> Result<()> {
        for (_, descriptor) in self.iter() {
            validate_descriptor(descriptor)?;
        }
        Ok(())
    }
}

impl<K: Into<String>> FromIterator<(K, FieldDescriptor)> for MetadataTree {
    fn from_iter<I: IntoIterator<Item = (K, FieldDescriptor)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, descriptor)| (name.into(), descriptor))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a MetadataTree {
    type Item = (&'a String, &'a FieldDescriptor);
    type IntoIter = indexmap::map::Iter<'a, String, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Canonical metadata for either a single descriptor or a field mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Metadata {
    Field(FieldDescriptor),
    Tree(MetadataTree),
}

impl Metadata {
    /// Field mapping the generation engines should run over.
    ///
    /// A single `record` or `component` descriptor contributes its own
    /// fields; any other single descriptor is not a field mapping.
    pub fn into_tree(self) -> Result<MetadataTree> {
        match self {
            Metadata::Tree(tree) => Ok(tree),
            Metadata::Field(descriptor) => match descriptor.kind() {
                FieldKind::Record { fields } => Ok(fields.clone()),
                FieldKind::Component(component) => Ok(component.fields.clone()),
                other => Err(Error::malformed(
                    "/",
                    format!("a `{}` descriptor is not a field mapping", other.name()),
                )),
            },
        }
    }
}

impl From<FieldDescriptor> for Metadata {
    fn from(descriptor: FieldDescriptor) -> Self {
        Metadata::Field(descriptor)
    }
}

impl From<MetadataTree> for Metadata {
    fn from(tree: MetadataTree) -> Self {
        Metadata::Tree(tree)
    }
}

/// Extract canonical metadata from a JSON descriptor document.
///
/// The document is either one descriptor (an object whose `kind` member
/// carries a `type` tag) or a mapping from field names to descriptors.
/// Anything else fails with [`Error::MalformedInput`]. Template annotations
/// are checked eagerly.
pub fn metadata_of(input: &Value) -> Result<Metadata> {
    match input {
        Value::Object(map) if is_descriptor(map) => {
            parse_descriptor(input, "").map(Metadata::Field)
        }
        Value::Object(map) => {
            let mut tree = MetadataTree::new();
            for (name, node) in map {
                let path = format!("/{name}");
                let descriptor = match node {
                    Value::Object(inner) if is_descriptor(inner) => parse_descriptor(node, &path)?,
                    other => {
                        return Err(Error::malformed(
                            path,
                            format!("expected a field descriptor, found {}", json_type(other)),
                        ));
                    }
                };
                tree = tree.with_field(name.clone(), descriptor);
            }
            Ok(Metadata::Tree(tree))
        }
        other => Err(Error::malformed(
            "/",
            format!(
                "expected a field descriptor or a field mapping, found {}",
                json_type(other)
            ),
        )),
    }
}

fn is_descriptor(map: &serde_json::Map<String, Value>) -> bool {
    map.get("kind")
        .and_then(Value::as_object)
        .is_some_and(|kind| kind.contains_key("type"))
}

fn parse_descriptor(node: &Value, path: &str) -> Result<FieldDescriptor> {
    let descriptor: FieldDescriptor = serde_path_to_error::deserialize(node).map_err(|err| {
        let inner = err.path().to_string();
        let location = if inner == "." {
            path.to_string()
        } else {
            format!("{path}/{}", inner.replace('.', "/"))
        };
        let location = if location.is_empty() {
            "/".to_string()
        } else {
            location
        };
        Error::malformed(location, err.into_inner().to_string())
    })?;
    validate_descriptor(&descriptor)?;
    Ok(descriptor)
}

fn validate_descriptor(descriptor: &FieldDescriptor) -> Result<()> {
    check_template(descriptor)?;
    validate_kind(descriptor.kind())
}

fn validate_kind(kind: &FieldKind) -> Result<()> {
    match kind {
        FieldKind::Bool
        | FieldKind::Number
        | FieldKind::String
        | FieldKind::Any
        | FieldKind::Element
        | FieldKind::Node
        | FieldKind::Func => Ok(()),
        FieldKind::Enum { values } if values.is_empty() => Err(empty_choice(kind, "value")),
        FieldKind::Enum { .. } => Ok(()),
        FieldKind::List { of } | FieldKind::Map { of } => validate_kind(of),
        FieldKind::Union { variants } if variants.is_empty() => {
            Err(empty_choice(kind, "variant"))
        }
        FieldKind::Union { variants } => variants.iter().try_for_each(validate_descriptor),
        FieldKind::Record { fields } => fields.validate(),
        FieldKind::Component(component) => component.fields.validate(),
    }
}

/// An `enum` or `union` with nothing to choose from.
fn empty_choice(kind: &FieldKind, member: &str) -> Error {
    Error::InvalidConfiguration {
        kind: kind.name().to_string(),
        message: format!("at least one {member} is required"),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without a `kind` descriptor",
    }
}
