//! Core contracts for propgen.
//!
//! This crate defines the canonical field metadata consumed by the
//! generation engines: field kinds, descriptors, metadata trees, template
//! binding, and JSON ingestion/validation of metadata documents.

pub mod descriptor;
pub mod error;
pub mod fields;
pub mod metadata;
pub mod schema;
pub mod template;
pub mod types;
pub mod validation;

pub use descriptor::{Extra, FieldDescriptor};
pub use error::{Error, Result};
pub use metadata::{Metadata, MetadataTree, metadata_of};
pub use schema::metadata_json_schema;
pub use template::{TEMPLATE_KEY, bind_template};
pub use types::{Component, FieldKind};
pub use validation::{IssueSeverity, ValidationIssue, ValidationReport, validate_metadata_json};
