//! Action model for registering named, schema-validated capabilities.
//!
//! ```rust
//! use dactions::{Action, Actions, Arity};
//! use serde_json::json;
//!
//! let mut actions = Actions::new();
//! actions.register(Action::nullary("ping", || async { Ok(json!("pong")) }));
//!
//! let action = actions.get("ping").expect("ping should be registered");
//! assert_eq!(action.arity(), Arity::Nullary);
//! ```

mod action;
mod contract;
mod error;
mod registry;
mod workflow;

pub mod prelude {
    pub use crate::{
        Action, ActionError, ActionErrorKind, ActionFuture, ActionKind, ActionResult, Actions,
        Arity, ContractError, ContractErrorKind, InputContract, NullaryAction, TypedContract,
        UnaryAction, Workflow, WorkflowStep,
    };
}

pub use action::{
    Action, ActionFuture, ActionKind, ActionResult, Arity, NullaryAction, UnaryAction,
};
pub use contract::{InputContract, TypedContract};
pub use error::{ActionError, ActionErrorKind, ContractError, ContractErrorKind};
pub use registry::Actions;
pub use workflow::{Workflow, WorkflowStep};
