//! Template binding for `string` fields.
//!
//! Binding only records the template text; rendering happens in the
//! generation engines at draw time.

use crate::descriptor::FieldDescriptor;
use crate::error::{Error, Result};
use crate::types::FieldKind;

/// Annotation key holding a bound template.
pub const TEMPLATE_KEY: &str = "template";

/// Return a copy of `descriptor` with `template` bound to it.
///
/// Fails with [`Error::InvalidConfiguration`] naming the kind when the
/// descriptor is not a `string` field.
pub fn bind_template(
    descriptor: &FieldDescriptor,
    template: impl Into<String>,
) -> Result<FieldDescriptor> {
    ensure_string_kind(descriptor.kind())?;
    Ok(descriptor.with_extra_entry(TEMPLATE_KEY, serde_json::Value::String(template.into())))
}

/// Check that a `template` annotation, if present, sits on a `string` field
/// and holds text.
pub(crate) fn check_template(descriptor: &FieldDescriptor) -> Result<()> {
    let Some(value) = descriptor.extra().get(TEMPLATE_KEY) else {
        return Ok(());
    };
    ensure_string_kind(descriptor.kind())?;
    if !value.is_string() {
        return Err(Error::InvalidConfiguration {
            kind: descriptor.kind().name().to_string(),
            message: "template must be a string".to_string(),
        });
    }
    Ok(())
}

fn ensure_string_kind(kind: &FieldKind) -> Result<()> {
    match kind {
        FieldKind::String => Ok(()),
        other => Err(Error::InvalidConfiguration {
            kind: other.name().to_string(),
            message: "templates can only be bound to `string` fields".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_template_to_string() {
        let descriptor = FieldDescriptor::new(FieldKind::String).required();
        let bound = bind_template(&descriptor, "{{name.firstName}}").expect("bind template");
        assert_eq!(bound.template_text(), Some("{{name.firstName}}"));
        assert!(bound.is_required());
        assert_eq!(descriptor.template_text(), None);
    }

    #[test]
    fn rejects_template_on_number() {
        let descriptor = FieldDescriptor::new(FieldKind::Number);
        let err = bind_template(&descriptor, "{{name.firstName}}").expect_err("number rejected");
        match &err {
            Error::InvalidConfiguration { kind, .. } => assert_eq!(kind, "number"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("number"));
    }

    #[test]
    fn rejects_template_on_list_of_strings() {
        let descriptor = FieldDescriptor::new(FieldKind::List {
            of: Box::new(FieldKind::String),
        });
        assert!(bind_template(&descriptor, "{{lorem.word}}").is_err());
    }
}
