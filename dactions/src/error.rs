//! Action and contract error values.
//!
//! ```rust
//! use dactions::{ActionError, ContractError};
//!
//! let failed = ActionError::execution("backend unreachable");
//! assert_eq!(failed.to_string(), "Execution: backend unreachable");
//!
//! let rejected = ContractError::validation("missing field `location`");
//! assert_eq!(rejected.to_string(), "Validation: missing field `location`");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionErrorKind {
    Execution,
    Other,
}

/// Failure raised by an action handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionError {
    pub kind: ActionErrorKind,
    pub message: String,
}

impl ActionError {
    pub fn new(kind: ActionErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ActionErrorKind::Execution, message)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ActionErrorKind::Other, message)
    }
}

impl Display for ActionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ActionError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractErrorKind {
    Conversion,
    Validation,
}

/// Failure raised by an input contract, either while describing its schema
/// or while validating a decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractError {
    pub kind: ContractErrorKind,
    pub message: String,
}

impl ContractError {
    pub fn new(kind: ContractErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(ContractErrorKind::Conversion, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ContractErrorKind::Validation, message)
    }
}

impl Display for ContractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for ContractError {}
