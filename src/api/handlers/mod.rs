//! Request handlers, one module per resource

pub mod courses;
pub mod lessons;
pub mod users;

use serde_json::Value;

use super::types::ApiResponse;
use crate::domain::ValidationErrors;

/// Parse a numeric path id; `entity` names it in the 400 message
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<u64, ApiResponse> {
    raw.parse::<u64>()
        .map_err(|_| ApiResponse::message(400, format!("Invalid {} ID", entity)))
}

/// Parse a JSON request body. An empty body is an empty object.
pub(crate) fn parse_body(body: &str) -> Result<Value, ValidationErrors> {
    if body.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(body)
        .map_err(|e| ValidationErrors::single("body", format!("must be valid JSON ({})", e)))
}
