use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::metadata_json_schema;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

/// Validate a metadata document against the metadata JSON Schema.
///
/// Unlike [`crate::metadata_of`], which stops at the first problem, this
/// reports every structural violation. Union variants declared with
/// `required: false` are reported as warnings: a variant is never absent,
/// only the field holding the union is.
pub fn validate_metadata_json(document: &Value) -> Result<ValidationReport> {
    let schema = serde_json::to_value(metadata_json_schema())?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| Error::MalformedInput {
        path: "/".to_string(),
        message: format!("metadata schema failed to compile: {err}"),
    })?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(document) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    collect_nested_optional_warnings(document, "", &mut report);

    Ok(report)
}

fn collect_nested_optional_warnings(node: &Value, path: &str, report: &mut ValidationReport) {
    let Value::Object(map) = node else {
        return;
    };
    if let Some(kind) = map.get("kind") {
        inspect_kind(kind, &format!("{path}/kind"), report);
        return;
    }
    for (name, child) in map {
        collect_nested_optional_warnings(child, &format!("{path}/{name}"), report);
    }
}

fn inspect_kind(kind: &Value, path: &str, report: &mut ValidationReport) {
    match kind.get("type").and_then(Value::as_str) {
        Some("union") => {
            if let Some(variants) = kind.get("variants").and_then(Value::as_array) {
                for (index, variant) in variants.iter().enumerate() {
                    let variant_path = format!("{path}/variants/{index}");
                    if variant.get("required").and_then(Value::as_bool) == Some(false) {
                        report.push_warning(ValidationIssue::new(
                            IssueSeverity::Warning,
                            "ignored_variant_optionality",
                            variant_path.clone(),
                            "union variants are never absent; `required: false` has no effect",
                            Some("absence is decided by the field holding the union".to_string()),
                        ));
                    }
                    collect_nested_optional_warnings(variant, &variant_path, report);
                }
            }
        }
        Some("list") | Some("map") => {
            if let Some(of) = kind.get("of") {
                inspect_kind(of, &format!("{path}/of"), report);
            }
        }
        Some("record") | Some("component") => {
            if let Some(fields) = kind.get("fields") {
                collect_nested_optional_warnings(fields, &format!("{path}/fields"), report);
            }
        }
        _ => {}
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
