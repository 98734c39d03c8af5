//! Function-calling bridge between an action registry and an external
//! LLM protocol.
//!
//! Outbound, the registry is exported as function descriptors; inbound, a
//! function call is either parsed into a validated workflow step or executed
//! against the registry directly.
//!
//! ```rust
//! use dactions::{Action, Actions};
//! use dbridge::{FunctionCall, export_functions, parse_call};
//! use serde_json::json;
//!
//! let mut actions = Actions::new();
//! actions.register(
//!     Action::nullary("ping", || async { Ok(json!("pong")) })
//!         .with_description("Liveness probe"),
//! );
//!
//! let descriptors = export_functions(&actions).expect("export should succeed");
//! assert_eq!(descriptors[0].name, "ping");
//!
//! let workflow = parse_call(&FunctionCall::new("ping"), &actions).expect("call should parse");
//! assert_eq!(workflow.steps()[0].action, "ping");
//! ```

mod call;
mod error;
mod export;
mod types;

pub mod prelude {
    pub use crate::{
        BridgeError, BridgeErrorKind, CallOutcome, FunctionCall, FunctionDescriptor, execute_call,
        export_functions, parse_call,
    };
}

pub use call::{execute_call, parse_call};
pub use error::{BridgeError, BridgeErrorKind};
pub use export::export_functions;
pub use types::{CallOutcome, FunctionCall, FunctionDescriptor, empty_parameters};
