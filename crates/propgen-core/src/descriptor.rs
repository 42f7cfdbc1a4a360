use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::template::{TEMPLATE_KEY, bind_template, check_template};
use crate::types::FieldKind;

/// Free-form annotations attached to a descriptor.
pub type Extra = IndexMap<String, serde_json::Value>;

/// Typed, required/optional, annotated declaration of one value slot.
///
/// Descriptors never change once built. Making a descriptor required or
/// attaching annotations returns a new descriptor and leaves `self` intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    kind: FieldKind,
    #[serde(default)]
    required: bool,
    /// Documentation data and, for `string` fields, an optional `template`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    extra: Extra,
}

impl FieldDescriptor {
    /// Optional descriptor of `kind` with no annotations.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            extra: Extra::new(),
        }
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }

    /// Template text bound to this field, if any.
    pub fn template_text(&self) -> Option<&str> {
        self.extra.get(TEMPLATE_KEY).and_then(|value| value.as_str())
    }

    /// Required variant of this descriptor.
    pub fn required(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            required: true,
            extra: self.extra.clone(),
        }
    }

    /// Copy of this descriptor with `extra` merged over its annotations.
    ///
    /// A `template` entry goes through the same kind check as
    /// [`FieldDescriptor::with_template`].
    pub fn meta(&self, extra: Extra) -> Result<Self> {
        let mut merged = self.extra.clone();
        merged.extend(extra);
        let descriptor = Self {
            kind: self.kind.clone(),
            required: self.required,
            extra: merged,
        };
        check_template(&descriptor)?;
        Ok(descriptor)
    }

    /// Copy of this descriptor carrying a `description` annotation.
    pub fn describe(&self, description: impl Into<String>) -> Self {
        let mut extra = self.extra.clone();
        extra.insert(
            "description".to_string(),
            serde_json::Value::String(description.into()),
        );
        Self {
            kind: self.kind.clone(),
            required: self.required,
            extra,
        }
    }

    /// Bind a fake-text template. Only `string` fields accept one.
    pub fn with_template(&self, template: impl Into<String>) -> Result<Self> {
        bind_template(self, template)
    }

    pub(crate) fn with_extra_entry(&self, key: &str, value: serde_json::Value) -> Self {
        let mut extra = self.extra.clone();
        extra.insert(key.to_string(), value);
        Self {
            kind: self.kind.clone(),
            required: self.required,
            extra,
        }
    }
}
