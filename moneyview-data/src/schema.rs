//! Declarative validation of form input
//!
//! Form values cross the DOM boundary as loosely typed JSON objects.
//! Each schema checks the shape of one form before any business logic
//! trusts it. Validation is pure: no side effects, no partial state.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::TransactionKind;

/// Shape failure for a single form field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field {field:?}: expected {expected}")]
pub struct SchemaValidationError {
    pub field: &'static str,
    pub expected: &'static str,
}

impl SchemaValidationError {
    fn new(field: &'static str, expected: &'static str) -> Self {
        Self { field, expected }
    }
}

/// Validated search form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
}

impl SearchQuery {
    /// Check a candidate object: a single `query` field holding any
    /// string. The empty string is accepted and means "no filter".
    pub fn validate(input: &Value) -> Result<Self, SchemaValidationError> {
        match input.get("query") {
            Some(Value::String(query)) => Ok(Self { query: query.clone() }),
            _ => Err(SchemaValidationError::new("query", "a string")),
        }
    }
}

/// Validated new-transaction form input, ready to be posted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransactionDraft {
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl NewTransactionDraft {
    /// Check a candidate object for the new-transaction form
    pub fn validate(input: &Value) -> Result<Self, SchemaValidationError> {
        let description = non_empty_string(input, "description")?;
        let price = match input.get("price").and_then(Value::as_f64) {
            Some(price) if price.is_finite() => price,
            _ => return Err(SchemaValidationError::new("price", "a finite number")),
        };
        let category = non_empty_string(input, "category")?;
        let kind = match input.get("type").and_then(Value::as_str) {
            Some("income") => TransactionKind::Income,
            Some("outcome") => TransactionKind::Outcome,
            _ => return Err(SchemaValidationError::new("type", "\"income\" or \"outcome\"")),
        };
        Ok(Self { description, price, category, kind })
    }
}

fn non_empty_string(input: &Value, field: &'static str) -> Result<String, SchemaValidationError> {
    match input.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(SchemaValidationError::new(field, "a non-empty string")),
    }
}
