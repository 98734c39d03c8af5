//! Wire types for the function-calling protocol boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Callable-function descriptor sent to the external protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: Value,
}

/// Inbound function-call record. `arguments`, when present, is a
/// JSON-encoded object text; its absence is distinct from `"{}"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            arguments: None,
        }
    }

    pub fn with_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = Some(arguments.into());
        self
    }
}

/// Result of executing one inbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallOutcome {
    pub action: String,
    pub result: Value,
}

/// Canonical parameter schema for actions that accept no input.
pub fn empty_parameters() -> Value {
    json!({"type": "object", "properties": {}, "required": []})
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn descriptor_omits_absent_description() {
        let descriptor = FunctionDescriptor {
            name: "ping".to_string(),
            description: None,
            parameters: empty_parameters(),
        };

        let encoded = serde_json::to_value(&descriptor).expect("descriptor should serialize");
        assert_eq!(
            encoded,
            json!({
                "name": "ping",
                "parameters": {"type": "object", "properties": {}, "required": []}
            })
        );
    }

    #[test]
    fn call_record_fields_are_all_optional() {
        let empty: FunctionCall = serde_json::from_str("{}").expect("empty record should parse");
        assert_eq!(empty, FunctionCall::default());

        let full: FunctionCall =
            serde_json::from_str(r#"{"name":"echo","arguments":"{\"text\":\"hi\"}"}"#)
                .expect("full record should parse");
        assert_eq!(full.name.as_deref(), Some("echo"));
        assert_eq!(full.arguments.as_deref(), Some("{\"text\":\"hi\"}"));
    }

    #[test]
    fn call_builder_sets_name_and_arguments() {
        let call = FunctionCall::new("echo").with_arguments("{}");
        assert_eq!(call.name.as_deref(), Some("echo"));
        assert_eq!(call.arguments.as_deref(), Some("{}"));
    }
}
