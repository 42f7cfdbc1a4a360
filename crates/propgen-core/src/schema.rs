use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::metadata::Metadata;

/// Emit the JSON Schema for metadata documents.
pub fn metadata_json_schema() -> RootSchema {
    schema_for!(Metadata)
}
