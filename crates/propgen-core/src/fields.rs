//! Constructors for field descriptors.
//!
//! Every constructor returns an optional descriptor; call
//! [`FieldDescriptor::required`] for the required variant.
//!
//! ```
//! use propgen_core::{MetadataTree, fields};
//!
//! let props = MetadataTree::new()
//!     .with_field("name", fields::string().required())
//!     .with_field("isCool", fields::bool())
//!     .with_field(
//!         "shirt",
//!         fields::shape(
//!             MetadataTree::new()
//!                 .with_field("color", fields::one_of(["red", "blue", "green"]).required()),
//!         )
//!         .required(),
//!     );
//! assert_eq!(props.len(), 3);
//! ```

use crate::descriptor::FieldDescriptor;
use crate::metadata::MetadataTree;
use crate::types::{Component, FieldKind};

pub fn bool() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Bool)
}

pub fn number() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Number)
}

pub fn string() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::String)
}

pub fn any() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Any)
}

pub fn element() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Element)
}

pub fn node() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Node)
}

pub fn func() -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Func)
}

/// List of arbitrary values.
pub fn array() -> FieldDescriptor {
    list_of(&any())
}

/// Mapping to arbitrary values.
pub fn object() -> FieldDescriptor {
    map_of(&any())
}

/// List whose items have the kind of `item`.
pub fn list_of(item: &FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::List {
        of: Box::new(item.kind().clone()),
    })
}

/// Mapping whose values have the kind of `value`.
pub fn map_of(value: &FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Map {
        of: Box::new(value.kind().clone()),
    })
}

/// One of the given literals, in the given order.
///
/// An empty list builds a descriptor that [`MetadataTree::validate`] and the
/// random sampler reject.
pub fn one_of<I, V>(values: I) -> FieldDescriptor
where
    I: IntoIterator<Item = V>,
    V: Into<serde_json::Value>,
{
    FieldDescriptor::new(FieldKind::Enum {
        values: values.into_iter().map(Into::into).collect(),
    })
}

/// One of the given descriptors, in the given order. Like [`one_of`], an
/// empty list is rejected on validation.
pub fn one_of_type(variants: impl IntoIterator<Item = FieldDescriptor>) -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Union {
        variants: variants.into_iter().collect(),
    })
}

/// Nested record of `fields`.
pub fn shape(fields: MetadataTree) -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Record { fields })
}

/// Instance of `component`.
pub fn instance_of(component: &Component) -> FieldDescriptor {
    FieldDescriptor::new(FieldKind::Component(component.clone()))
}
