use schemars::schema_for;

use crate::snapshot::GraphSnapshot;

/// JSON schema of the snapshot file format read by the command line tool.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(GraphSnapshot))
}
