//! Inbound call handling: resolve a function call against the registry,
//! then either plan it as a workflow step or execute it on the spot.

use std::sync::Arc;

use dactions::{Action, ActionKind, Actions, InputContract, Workflow, WorkflowStep};
use serde_json::Value;

use crate::{BridgeError, CallOutcome, FunctionCall};

/// Parses one inbound call into a single-step workflow without invoking
/// anything. The step records the requested name, never a display override.
pub fn parse_call(call: &FunctionCall, actions: &Actions) -> Result<Workflow, BridgeError> {
    let (name, action) = resolve(call, actions)?;

    let step = match action.kind() {
        ActionKind::Nullary(_) => WorkflowStep::nullary(name),
        ActionKind::Unary(unary) => {
            let input = validated_input(&name, unary.contract(), call.arguments.as_deref())?;
            WorkflowStep::unary(name, input)
        }
    };

    Ok(Workflow::single(step))
}

/// Resolves, validates, and invokes in one pass. Handler failures propagate
/// without retry or recovery.
pub async fn execute_call(
    call: &FunctionCall,
    actions: &Actions,
) -> Result<CallOutcome, BridgeError> {
    let (name, action) = resolve(call, actions)?;

    let invocation = match action.kind() {
        ActionKind::Nullary(nullary) => nullary.invoke(),
        ActionKind::Unary(unary) => {
            let input = validated_input(&name, unary.contract(), call.arguments.as_deref())?;
            unary.invoke(input)
        }
    };

    let result = invocation
        .await
        .map_err(|err| BridgeError::handler(&name, err))?;

    Ok(CallOutcome {
        action: name,
        result,
    })
}

fn resolve(call: &FunctionCall, actions: &Actions) -> Result<(String, Arc<Action>), BridgeError> {
    let name = call.name.as_deref().ok_or_else(BridgeError::missing_name)?;
    let action = actions
        .get(name)
        .ok_or_else(|| BridgeError::unknown_action(name))?;
    Ok((name.to_string(), action))
}

// Absent arguments on a unary action decode as an empty object.
fn validated_input(
    name: &str,
    contract: &dyn InputContract,
    arguments: Option<&str>,
) -> Result<Value, BridgeError> {
    let raw = arguments.unwrap_or("{}");
    let decoded: Value = serde_json::from_str(raw)
        .map_err(|err| BridgeError::malformed_arguments(name, err.to_string()))?;
    contract
        .parse(decoded)
        .map_err(|err| BridgeError::invalid_input(name, err))
}

#[cfg(test)]
mod tests {
    use dactions::{Action, ActionError, Actions};
    use serde_json::json;

    use super::*;
    use crate::BridgeErrorKind;

    fn ping_registry() -> Actions {
        let mut actions = Actions::new();
        actions.register(Action::nullary("ping", || async { Ok(json!("pong")) }));
        actions
    }

    #[test]
    fn parse_fails_without_a_name() {
        let error = parse_call(&FunctionCall::default(), &ping_registry())
            .expect_err("nameless call should fail");
        assert_eq!(error.kind, BridgeErrorKind::MissingName);
    }

    #[test]
    fn parse_fails_for_unregistered_names() {
        let error = parse_call(&FunctionCall::new("nope"), &ping_registry())
            .expect_err("unknown action should fail");
        assert_eq!(error.kind, BridgeErrorKind::UnknownAction);
        assert_eq!(error.action.as_deref(), Some("nope"));
    }

    #[test]
    fn nullary_steps_carry_no_input() {
        let workflow = parse_call(&FunctionCall::new("ping"), &ping_registry())
            .expect("call should parse");

        assert_eq!(workflow.len(), 1);
        let step = &workflow.steps()[0];
        assert_eq!(step.action, "ping");
        assert_eq!(step.input, None);
    }

    #[test]
    fn nullary_actions_ignore_argument_text() {
        // Argument decoding only happens for unary actions, so even garbage
        // argument text does not fail a nullary call.
        let call = FunctionCall::new("ping").with_arguments("{not json");
        let workflow = parse_call(&call, &ping_registry()).expect("call should parse");
        assert_eq!(workflow.steps()[0].input, None);
    }

    #[tokio::test]
    async fn execute_fails_without_a_name() {
        let error = execute_call(&FunctionCall::default(), &ping_registry())
            .await
            .expect_err("nameless call should fail");
        assert_eq!(error.kind, BridgeErrorKind::MissingName);
    }

    #[tokio::test]
    async fn execute_runs_nullary_handlers_without_input() {
        let outcome = execute_call(&FunctionCall::new("ping"), &ping_registry())
            .await
            .expect("execution should succeed");

        assert_eq!(outcome.action, "ping");
        assert_eq!(outcome.result, json!("pong"));
    }

    #[tokio::test]
    async fn handler_failure_propagates_as_handler_error() {
        let mut actions = Actions::new();
        actions.register(Action::nullary("broken", || async {
            Err(ActionError::execution("backend exploded"))
        }));

        let error = execute_call(&FunctionCall::new("broken"), &actions)
            .await
            .expect_err("execution should fail");
        assert_eq!(error.kind, BridgeErrorKind::Handler);
        assert!(error.message.contains("backend exploded"));
    }
}
