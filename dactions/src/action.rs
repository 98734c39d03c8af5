//! Action contract: a named, arity-tagged capability with an async handler.
//!
//! The arity is carried by the `ActionKind` tag. Only the unary variant
//! holds an input contract, so an input on a nullary action cannot be
//! expressed at all.
//!
//! ```rust
//! use dactions::{Action, Arity};
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Deserialize, Serialize, JsonSchema)]
//! struct Greeting {
//!     name: String,
//! }
//!
//! let action = Action::unary_typed::<Greeting, _, _>("greet", |input: Greeting| async move {
//!     Ok(json!(format!("hello, {}", input.name)))
//! })
//! .with_description("Greets someone by name");
//!
//! assert_eq!(action.arity(), Arity::Unary);
//! assert_eq!(action.external_name(), "greet");
//! ```

use std::future::Future;
use std::sync::Arc;

use dcommon::BoxFuture;
use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{ActionError, InputContract, TypedContract};

pub type ActionFuture<'a, T> = BoxFuture<'a, T>;
pub type ActionResult = Result<Value, ActionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    Unary,
}

type NullaryHandler = dyn Fn() -> ActionFuture<'static, ActionResult> + Send + Sync;
type UnaryHandler = dyn Fn(Value) -> ActionFuture<'static, ActionResult> + Send + Sync;

pub struct Action {
    name: String,
    display_name: Option<String>,
    description: Option<String>,
    kind: ActionKind,
}

pub enum ActionKind {
    Nullary(NullaryAction),
    Unary(UnaryAction),
}

pub struct NullaryAction {
    handler: Arc<NullaryHandler>,
}

impl NullaryAction {
    pub fn invoke(&self) -> ActionFuture<'static, ActionResult> {
        (self.handler)()
    }
}

pub struct UnaryAction {
    contract: Arc<dyn InputContract>,
    handler: Arc<UnaryHandler>,
}

impl UnaryAction {
    pub fn contract(&self) -> &dyn InputContract {
        self.contract.as_ref()
    }

    pub fn invoke(&self, input: Value) -> ActionFuture<'static, ActionResult> {
        (self.handler)(input)
    }
}

impl Action {
    pub fn nullary<F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ActionResult> + Send + 'static,
    {
        let handler: Arc<NullaryHandler> = Arc::new(move || Box::pin(handler()));

        Self {
            name: name.into(),
            display_name: None,
            description: None,
            kind: ActionKind::Nullary(NullaryAction { handler }),
        }
    }

    pub fn unary<C, F, Fut>(name: impl Into<String>, contract: C, handler: F) -> Self
    where
        C: InputContract + 'static,
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ActionResult> + Send + 'static,
    {
        let handler: Arc<UnaryHandler> = Arc::new(move |input| Box::pin(handler(input)));

        Self {
            name: name.into(),
            display_name: None,
            description: None,
            kind: ActionKind::Unary(UnaryAction {
                contract: Arc::new(contract),
                handler,
            }),
        }
    }

    /// Unary action whose contract and handler input type are derived from
    /// one deserializable, schema-describable Rust type.
    pub fn unary_typed<T, F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        T: JsonSchema + DeserializeOwned + Serialize + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ActionResult> + Send + 'static,
    {
        Self::unary(name, TypedContract::<T>::new(), move |input| {
            // The contract already validated the value; a decode failure here
            // means the contract and handler type drifted apart.
            let pending = serde_json::from_value::<T>(input)
                .map_err(|err| ActionError::execution(format!("validated input no longer decodes: {err}")))
                .map(&handler);

            async move {
                match pending {
                    Ok(invocation) => invocation.await,
                    Err(error) => Err(error),
                }
            }
        })
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Name surfaced to the external protocol: the display-name override
    /// when set, the registry name otherwise.
    pub fn external_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    pub fn arity(&self) -> Arity {
        match self.kind {
            ActionKind::Nullary(_) => Arity::Nullary,
            ActionKind::Unary(_) => Arity::Unary,
        }
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::ActionErrorKind;

    #[derive(Debug, Deserialize, Serialize, JsonSchema)]
    struct EchoInput {
        text: String,
    }

    #[test]
    fn nullary_action_reports_nullary_arity() {
        let action = Action::nullary("ping", || async { Ok(json!("pong")) });
        assert_eq!(action.arity(), Arity::Nullary);
        assert!(matches!(action.kind(), ActionKind::Nullary(_)));
    }

    #[test]
    fn external_name_prefers_display_override() {
        let plain = Action::nullary("ping", || async { Ok(json!(null)) });
        assert_eq!(plain.external_name(), "ping");

        let renamed = Action::nullary("ping", || async { Ok(json!(null)) })
            .with_display_name("health_check");
        assert_eq!(renamed.name(), "ping");
        assert_eq!(renamed.external_name(), "health_check");
    }

    #[test]
    fn description_is_absent_until_set() {
        let action = Action::nullary("ping", || async { Ok(json!(null)) });
        assert_eq!(action.description(), None);

        let described = action.with_description("Liveness probe");
        assert_eq!(described.description(), Some("Liveness probe"));
    }

    #[tokio::test]
    async fn nullary_handler_runs_without_input() {
        let action = Action::nullary("ping", || async { Ok(json!("pong")) });

        let ActionKind::Nullary(nullary) = action.kind() else {
            panic!("ping should be nullary");
        };
        let result = nullary.invoke().await.expect("handler should succeed");
        assert_eq!(result, json!("pong"));
    }

    #[tokio::test]
    async fn typed_handler_receives_decoded_input() {
        let action = Action::unary_typed::<EchoInput, _, _>("echo", |input: EchoInput| async move {
            Ok(json!({"echoed": input.text}))
        });

        let ActionKind::Unary(unary) = action.kind() else {
            panic!("echo should be unary");
        };
        let validated = unary
            .contract()
            .parse(json!({"text": "hi"}))
            .expect("input should validate");
        let result = unary.invoke(validated).await.expect("handler should succeed");
        assert_eq!(result, json!({"echoed": "hi"}));
    }

    #[tokio::test]
    async fn handler_failure_surfaces_as_action_error() {
        let action = Action::nullary("broken", || async {
            Err(ActionError::execution("backend exploded"))
        });

        let ActionKind::Nullary(nullary) = action.kind() else {
            panic!("broken should be nullary");
        };
        let error = nullary.invoke().await.expect_err("handler should fail");
        assert_eq!(error.kind, ActionErrorKind::Execution);
        assert_eq!(error.message, "backend exploded");
    }
}
