//! Export the action registry as external function descriptors.

use dactions::{ActionKind, Actions};
use serde_json::Value;

use crate::{BridgeError, FunctionDescriptor, types::empty_parameters};

/// Meta-field the schema converter attaches to identify its dialect. The
/// function-calling parameter contract has no use for it.
const SCHEMA_DIALECT_FIELD: &str = "$schema";

/// Converts every registered action into a function descriptor, one per
/// entry, in registration order. The only failure mode is a contract whose
/// schema cannot be produced.
pub fn export_functions(actions: &Actions) -> Result<Vec<FunctionDescriptor>, BridgeError> {
    actions
        .iter()
        .map(|(name, action)| {
            let parameters = match action.kind() {
                ActionKind::Nullary(_) => empty_parameters(),
                ActionKind::Unary(unary) => {
                    let schema = unary
                        .contract()
                        .schema()
                        .map_err(|err| BridgeError::schema(name, err))?;
                    strip_dialect_field(schema)
                }
            };

            Ok(FunctionDescriptor {
                name: action.external_name().to_string(),
                description: action.description().map(ToString::to_string),
                parameters,
            })
        })
        .collect()
}

fn strip_dialect_field(mut schema: Value) -> Value {
    if let Some(object) = schema.as_object_mut() {
        object.remove(SCHEMA_DIALECT_FIELD);
    }
    schema
}
