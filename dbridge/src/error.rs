//! Bridge error kinds covering resolution, validation, and execution.
//!
//! ```rust
//! use dbridge::{BridgeError, BridgeErrorKind};
//!
//! let error = BridgeError::unknown_action("getWeather");
//! assert_eq!(error.kind, BridgeErrorKind::UnknownAction);
//! assert!(error.is_user_error());
//! assert!(error.to_string().contains("getWeather"));
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use dactions::{ActionError, ContractError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeErrorKind {
    MissingName,
    UnknownAction,
    MalformedArguments,
    InvalidInput,
    Schema,
    Handler,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    pub kind: BridgeErrorKind,
    pub message: String,
    pub action: Option<String>,
}

impl BridgeError {
    pub fn new(kind: BridgeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            action: None,
        }
    }

    pub fn missing_name() -> Self {
        Self::new(BridgeErrorKind::MissingName, "function call has no name")
    }

    pub fn unknown_action(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            BridgeErrorKind::UnknownAction,
            format!("action '{name}' is not registered"),
        )
        .with_action(name)
    }

    pub fn malformed_arguments(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(
            BridgeErrorKind::MalformedArguments,
            format!("arguments are not valid JSON: {}", detail.into()),
        )
        .with_action(name)
    }

    pub fn invalid_input(name: impl Into<String>, source: ContractError) -> Self {
        Self::new(BridgeErrorKind::InvalidInput, source.message).with_action(name)
    }

    pub fn schema(name: impl Into<String>, source: ContractError) -> Self {
        Self::new(BridgeErrorKind::Schema, source.message).with_action(name)
    }

    pub fn handler(name: impl Into<String>, source: ActionError) -> Self {
        Self::new(BridgeErrorKind::Handler, source.to_string()).with_action(name)
    }

    pub fn with_action(mut self, name: impl Into<String>) -> Self {
        self.action = Some(name.into());
        self
    }

    /// True for failures caused by the inbound call rather than by the
    /// action or its schema. Callers typically report these back to the
    /// model and abort on the rest.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            BridgeErrorKind::MissingName
                | BridgeErrorKind::UnknownAction
                | BridgeErrorKind::MalformedArguments
                | BridgeErrorKind::InvalidInput
        )
    }
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{:?} [action={}]: {}", self.kind, action, self.message),
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for BridgeError {}
