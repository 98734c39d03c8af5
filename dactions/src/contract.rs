//! Input contracts: a JSON-Schema description paired with value validation.
//!
//! A contract is the single type boundary between untrusted decoded JSON and
//! an action handler. `TypedContract` derives both halves from one Rust type.
//!
//! ```rust
//! use dactions::{InputContract, TypedContract};
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Deserialize, Serialize, JsonSchema)]
//! struct Query {
//!     term: String,
//! }
//!
//! let contract = TypedContract::<Query>::new();
//! let parsed = contract.parse(json!({"term": "rust"})).expect("value should validate");
//! assert_eq!(parsed, json!({"term": "rust"}));
//! ```

use std::marker::PhantomData;

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ContractError;

pub trait InputContract: Send + Sync {
    /// JSON Schema describing the accepted input shape.
    fn schema(&self) -> Result<Value, ContractError>;

    /// Validate a decoded JSON value, returning its parsed form.
    fn parse(&self, value: Value) -> Result<Value, ContractError>;
}

/// Contract backed by a deserializable, schema-describable Rust type.
///
/// `schema` generates the type's JSON Schema; `parse` accepts exactly the
/// values the type deserializes from and returns the re-serialized form, so
/// serde defaults and coercions show up in the parsed value.
pub struct TypedContract<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> TypedContract<T> {
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for TypedContract<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedContract<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> InputContract for TypedContract<T>
where
    T: JsonSchema + DeserializeOwned + Serialize,
{
    fn schema(&self) -> Result<Value, ContractError> {
        let schema = schemars::schema_for!(T);
        serde_json::to_value(&schema)
            .map_err(|err| ContractError::conversion(format!("schema does not serialize: {err}")))
    }

    fn parse(&self, value: Value) -> Result<Value, ContractError> {
        let parsed: T = serde_json::from_value(value)
            .map_err(|err| ContractError::validation(err.to_string()))?;
        serde_json::to_value(&parsed).map_err(|err| {
            ContractError::conversion(format!("parsed input does not serialize: {err}"))
        })
    }
}
